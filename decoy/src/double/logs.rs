use crate::{AssertionError, Times};

/// Arguments of every invocation of a single double, oldest first
#[derive(Debug, PartialEq)]
pub(crate) struct Logs<I>(pub(crate) Vec<I>);

impl<I: PartialEq + Clone> Logs<I> {
    pub(crate) fn push(&mut self, item: I) {
        self.0.push(item);
    }

    pub(crate) fn clear(&mut self) {
        self.0.clear();
    }

    pub(crate) fn filter_matches(&self, expected: &I) -> Self {
        Self(
            self.0
                .iter()
                .filter(|log| *log == expected)
                .cloned()
                .collect(),
        )
    }

    pub(crate) fn check_times(&self, name: &str, times: Times) -> Result<(), AssertionError> {
        let actual = self.0.len();
        if !times.contains(&actual) {
            return Err(AssertionError::CallCount {
                name: name.to_string(),
                expected: times,
                actual,
            });
        }
        Ok(())
    }

    pub fn last(&self) -> Option<&I> {
        self.0.last()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<I> Default for Logs<I> {
    fn default() -> Self {
        Self(Default::default())
    }
}
