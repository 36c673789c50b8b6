mod assertions;
mod logs;

use logs::Logs;

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, Weak};

use parking_lot::{Mutex, ReentrantMutex};
use tracing::trace;

use crate::behavior::Output;
use crate::{Args, Behavior, Call, ConfigureError, Path, PathError, PathStep, Result, Value};

/// A stand-in object for a collaborator under test.
///
/// Attributes and return values are created lazily on first access and cached,
/// so the same chain of accesses always reaches the same double. Every
/// invocation is recorded on the double itself and, as a [`Call`] relative to
/// each of them, on all of its ancestors.
///
/// Cloning a `Double` clones the handle; equality is identity.
#[derive(Clone, Default)]
pub struct Double {
    inner: Arc<Inner>,
}

#[derive(Default)]
struct Inner {
    name: Option<String>,
    parent: Mutex<Option<Parent>>,
    // attributes and the return value (keyed by `PathStep::Invocation`)
    slots: Mutex<HashMap<PathStep, Slot>>,
    side_effect: Mutex<Option<SharedBehavior>>,
    call_log: Mutex<Logs<Args>>,
    mock_calls: Mutex<Vec<Call>>,
}

struct Parent {
    node: Weak<Inner>,
    step: PathStep,
}

// Locked for the whole run of a side effect; the same thread may re-enter.
type SharedBehavior = Arc<ReentrantMutex<RefCell<Behavior>>>;

enum Slot {
    Value(Value),
    // an ancestor (or the double itself) held weakly so the tree can be freed
    Ancestor(Weak<Inner>),
}

impl Slot {
    fn get(&self) -> Option<Value> {
        match self {
            Slot::Value(value) => Some(value.clone()),
            Slot::Ancestor(node) => node.upgrade().map(|inner| Value::Double(Double { inner })),
        }
    }
}

impl Double {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a root double shown as `name` in call records and messages.
    ///
    /// Named doubles are never adopted when assigned into another double.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            inner: Arc::new(Inner {
                name: Some(name.into()),
                ..Default::default()
            }),
        }
    }

    fn child_of(parent: &Double, step: PathStep) -> Self {
        Self {
            inner: Arc::new(Inner {
                parent: Mutex::new(Some(Parent {
                    node: Arc::downgrade(&parent.inner),
                    step,
                })),
                ..Default::default()
            }),
        }
    }

    /// The chain of accesses leading to this double, e.g. `foo().attr.method`.
    pub fn name(&self) -> String {
        match self.parent() {
            Some((parent, step)) => format!("{}{}", parent.name(), step),
            None => self
                .inner
                .name
                .clone()
                .unwrap_or_else(|| "mock".to_string()),
        }
    }

    fn parent(&self) -> Option<(Double, PathStep)> {
        let parent = self.inner.parent.lock();
        let parent = parent.as_ref()?;
        let node = parent.node.upgrade()?;
        Some((Double { inner: node }, parent.step.clone()))
    }

    /// Reads a slot, creating a child double when it is empty or its ancestor is gone.
    fn slot(&self, step: PathStep) -> Value {
        let mut slots = self.inner.slots.lock();
        if let Some(value) = slots.get(&step).and_then(Slot::get) {
            return value;
        }
        let child = Value::Double(Double::child_of(self, step.clone()));
        slots.insert(step, Slot::Value(child.clone()));
        child
    }

    /// Returns the double for attribute `name`, creating it on first access.
    ///
    /// Panics if the attribute was configured with a plain value; use
    /// [`Double::get`] to read those.
    #[track_caller]
    pub fn attr(&self, name: &str) -> Double {
        match self.slot(PathStep::attribute(name)) {
            Value::Double(double) => double,
            value => panic!("attribute `{name}` of {self} is the plain value {value}"),
        }
    }

    /// Returns attribute `name` as a value, whether a double or a configured plain value.
    pub fn get(&self, name: &str) -> Value {
        self.slot(PathStep::attribute(name))
    }

    /// The value every invocation returns unless a side effect is set.
    pub fn return_value(&self) -> Value {
        self.slot(PathStep::Invocation)
    }

    pub fn set_return_value(&self, value: impl Into<Value>) {
        self.assign(PathStep::Invocation, value.into());
    }

    pub fn set_side_effect(&self, behavior: impl Into<Behavior>) {
        let behavior = Arc::new(ReentrantMutex::new(RefCell::new(behavior.into())));
        *self.inner.side_effect.lock() = Some(behavior);
    }

    pub fn clear_side_effect(&self) {
        self.inner.side_effect.lock().take();
    }

    /// Records the invocation and returns the return value.
    ///
    /// Callers on other threads wait while a side effect runs. A side effect
    /// that invokes its own double gets the return value from that inner call.
    ///
    /// Panics if a side effect of successive values has run out.
    #[track_caller]
    pub fn invoke(&self, args: Args) -> Value {
        trace!(double = %self, %args, "invoked");
        self.inner.call_log.lock().push(args.clone());
        self.record(&args);

        let behavior = self.inner.side_effect.lock().clone();
        if let Some(behavior) = behavior {
            let running = behavior.lock();
            if let Ok(mut behavior) = running.try_borrow_mut() {
                match behavior.called(&args) {
                    Output::Found(value) => return value,
                    Output::Exhausted => panic!("side effect of {self} is exhausted"),
                }
            };
        }
        self.return_value()
    }

    fn record(&self, args: &Args) {
        let mut steps = Vec::new();
        let mut node = self.clone();
        loop {
            let path: Path = steps.iter().rev().cloned().collect();
            node.inner.mock_calls.lock().push(Call::new(path, args.clone()));
            match node.parent() {
                Some((parent, step)) => {
                    steps.push(step);
                    node = parent;
                }
                None => break,
            }
        }
    }

    /// Sets the slot named by the last step of `path`, walking the steps before
    /// it without invoking anything.
    ///
    /// An [`PathStep::Invocation`] last step sets a return value and an
    /// attribute last step sets that attribute.
    pub fn configure_path<P>(&self, path: P, value: impl Into<Value>) -> Result<()>
    where
        P: TryInto<Path>,
        ConfigureError: From<P::Error>,
    {
        let path = path.try_into()?;
        let value = value.into();
        let Some((last, init)) = path.split_last() else {
            return Err(PathError::Empty.into());
        };

        let mut node = self.clone();
        for (index, step) in init.iter().enumerate() {
            node = match node.slot(step.clone()) {
                Value::Double(double) => double,
                value => {
                    return Err(ConfigureError::NotADouble {
                        path: Path::from(&init[..=index]),
                        value,
                    })
                }
            };
        }
        trace!(double = %self, %path, %value, "configured");
        node.assign(last.clone(), value);
        Ok(())
    }

    /// Applies several paths in order, stopping at the first error.
    pub fn configure<I, P, V>(&self, config: I) -> Result<()>
    where
        I: IntoIterator<Item = (P, V)>,
        P: TryInto<Path>,
        ConfigureError: From<P::Error>,
        V: Into<Value>,
    {
        for (path, value) in config {
            self.configure_path(path, value)?;
        }
        Ok(())
    }

    fn assign(&self, step: PathStep, value: Value) {
        let slot = match value {
            Value::Double(double) if double.is_ancestor_of(self) => {
                Slot::Ancestor(Arc::downgrade(&double.inner))
            }
            Value::Double(double) => {
                self.adopt(&double, &step);
                Slot::Value(Value::Double(double))
            }
            value => Slot::Value(value),
        };
        self.inner.slots.lock().insert(step, slot);
    }

    fn adopt(&self, double: &Double, step: &PathStep) {
        if double.inner.name.is_some() || double.parent().is_some() {
            return;
        }
        trace!(double = %double, parent = %self, %step, "adopted");
        *double.inner.parent.lock() = Some(Parent {
            node: Arc::downgrade(&self.inner),
            step: step.clone(),
        });
    }

    fn is_ancestor_of(&self, other: &Double) -> bool {
        let mut node = Some(other.clone());
        while let Some(current) = node {
            if current == *self {
                return true;
            }
            node = current.parent().map(|(parent, _)| parent);
        }
        false
    }

    /// Invocations of this double and all of its descendants, oldest first.
    pub fn mock_calls(&self) -> Vec<Call> {
        self.inner.mock_calls.lock().clone()
    }

    /// Arguments of the invocations of this double only.
    pub fn call_log(&self) -> Vec<Args> {
        self.inner.call_log.lock().0.clone()
    }

    /// Arguments of the most recent invocation.
    pub fn call_args(&self) -> Option<Args> {
        self.inner.call_log.lock().last().cloned()
    }

    pub fn call_count(&self) -> usize {
        self.inner.call_log.lock().len()
    }

    pub fn called(&self) -> bool {
        !self.inner.call_log.lock().is_empty()
    }

    /// Forgets recorded calls here and in owned descendants. Configuration is kept.
    pub fn reset_calls(&self) {
        trace!(double = %self, "calls reset");
        self.inner.call_log.lock().clear();
        self.inner.mock_calls.lock().clear();
        let children: Vec<_> = self
            .inner
            .slots
            .lock()
            .values()
            .filter_map(|slot| slot.get()?.into_double().ok())
            .collect();
        for child in children {
            if child.parent().is_some_and(|(parent, _)| parent == *self) {
                child.reset_calls();
            }
        }
    }
}

impl PartialEq for Double {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl Eq for Double {}

impl fmt::Display for Double {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl fmt::Debug for Double {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Double").field("name", &self.name()).finish()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Double {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.name())
    }
}
