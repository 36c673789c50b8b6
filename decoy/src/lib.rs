//! Test doubles with lazily created attributes, declarative nested configuration
//! and a merged call history.
//!
//! ```
//! use decoy::{args, call, path, Double, Value};
//!
//! let foo = Double::named("foo");
//! foo.configure_path(path!(return_value.attr.method.return_value), 42)
//!     .unwrap();
//!
//! let ret = foo.invoke(args!(26)).attr("attr").attr("method").invoke(args!(8));
//! assert_eq!(ret, Value::from(42));
//! assert_eq!(
//!     foo.mock_calls(),
//!     vec![call!(call(26)), call!(call(26).attr.method(8))]
//! );
//! ```

extern crate self as decoy;

mod args;
mod behavior;
mod call;
mod double;
mod error;
mod path;
mod times;
mod value;

pub use args::*;
pub use behavior::*;
pub use call::*;
pub use decoy_macros::*;
pub use double::*;
pub use error::*;
pub use path::*;
pub use times::*;
pub use value::*;
