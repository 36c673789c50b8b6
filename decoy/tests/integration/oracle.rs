//! The same computation on plain objects.

use decoy::{path, Double, Value};

use crate::scenarios::foobar;

struct AttrMethod {
    v: i64,
}

impl AttrMethod {
    fn method(&self, o: i64) -> i64 {
        o + o + self.v
    }
}

struct Foo {
    attr: AttrMethod,
}

impl Foo {
    fn new(v: i64) -> Self {
        Self {
            attr: AttrMethod { v },
        }
    }
}

struct Bar {
    v: i64,
}

impl Bar {
    fn method(&self) -> i64 {
        self.v
    }
}

fn plain_foobar(foo: impl Fn(i64) -> Foo, bar: &Bar) -> i64 {
    foo(26).attr.method(bar.method())
}

#[test]
fn regular_calls() {
    assert_eq!(plain_foobar(Foo::new, &Bar { v: 8 }), 42);
}

#[test]
fn doubles_match_plain_objects() {
    let foo = Double::new();
    foo.configure_path(path!(return_value.attr.method.return_value), 42)
        .unwrap();
    let bar = Double::new();
    bar.configure_path(path!(method.return_value), 8).unwrap();

    let plain = plain_foobar(Foo::new, &Bar { v: 8 });
    assert_eq!(foobar(&foo, &bar), Value::from(plain));
}
