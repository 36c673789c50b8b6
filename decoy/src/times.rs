use std::fmt;
use std::ops::{Range, RangeFrom, RangeInclusive, RangeTo};

/// An inclusive range of call counts a double is expected to have seen.
///
/// Built from a count or any integer range: `2`, `1..`, `..3`, `1..=2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Times {
    min: usize,
    max: Option<usize>,
}

impl Times {
    pub fn at_least(min: usize) -> Self {
        Times { min, max: None }
    }

    pub fn at_most(max: usize) -> Self {
        Times { min: 0, max: Some(max) }
    }

    pub fn between(min: usize, max: usize) -> Self {
        Times { min, max: Some(max) }
    }

    pub fn contains(&self, count: &usize) -> bool {
        *count >= self.min && self.max.map_or(true, |max| *count <= max)
    }
}

/// `once` or `{n} times`, for call counts in messages.
pub(crate) fn count(n: &usize) -> String {
    match n {
        1 => "once".to_string(),
        n => format!("{n} times"),
    }
}

impl From<usize> for Times {
    fn from(times: usize) -> Self {
        Times::between(times, times)
    }
}

impl From<Range<usize>> for Times {
    fn from(range: Range<usize>) -> Self {
        match range.end.checked_sub(1) {
            Some(max) => Times::between(range.start, max),
            // `..0` admits no count at all
            None => Times::between(1, 0),
        }
    }
}

impl From<RangeFrom<usize>> for Times {
    fn from(range: RangeFrom<usize>) -> Self {
        Times::at_least(range.start)
    }
}

impl From<RangeTo<usize>> for Times {
    fn from(range: RangeTo<usize>) -> Self {
        Times::from(0..range.end)
    }
}

impl From<RangeInclusive<usize>> for Times {
    fn from(range: RangeInclusive<usize>) -> Self {
        Times::between(*range.start(), *range.end())
    }
}

impl fmt::Display for Times {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.min, self.max) {
            (min, Some(max)) if max < min => write!(f, "an impossible number of times"),
            (min, Some(max)) if min == max => write!(f, "{}", count(&min)),
            (min, None) => write!(f, "at least {}", count(&min)),
            (0, Some(max)) => write!(f, "at most {}", count(&max)),
            (min, Some(max)) => write!(f, "between {min} and {max} times"),
        }
    }
}
