use crate::{call, Args, AssertionError, Call, Double, Times};

impl Double {
    pub fn check_called_times(&self, times: impl Into<Times>) -> Result<(), AssertionError> {
        let name = self.name();
        self.inner.call_log.lock().check_times(&name, times.into())
    }

    pub fn check_called(&self) -> Result<(), AssertionError> {
        self.check_called_times(1..)
    }

    pub fn check_called_once(&self) -> Result<(), AssertionError> {
        self.check_called_times(1)
    }

    pub fn check_not_called(&self) -> Result<(), AssertionError> {
        self.check_called_times(0)
    }

    /// Checks the arguments of the most recent invocation.
    pub fn check_called_with(&self, expected: Args) -> Result<(), AssertionError> {
        let name = self.name();
        match self.call_args() {
            None => Err(AssertionError::NotCalled { name, expected }),
            Some(actual) if actual != expected => Err(AssertionError::ArgsMismatch {
                name,
                expected,
                actual,
            }),
            Some(_) => Ok(()),
        }
    }

    /// Checks that some invocation of this double had `expected` arguments.
    pub fn check_any_call(&self, expected: Args) -> Result<(), AssertionError> {
        let logs = self.inner.call_log.lock();
        if logs.filter_matches(&expected).is_empty() {
            return Err(AssertionError::NoSuchCall {
                name: self.name(),
                expected,
                actual: logs.0.iter().cloned().map(call).collect(),
            });
        }
        Ok(())
    }

    /// Checks that `expected` occurs in [`Double::mock_calls`] in order, with
    /// other calls allowed in between.
    pub fn check_has_calls(
        &self,
        expected: impl IntoIterator<Item = Call>,
    ) -> Result<(), AssertionError> {
        let expected: Vec<_> = expected.into_iter().collect();
        let actual = self.mock_calls();
        let mut remaining = actual.iter();
        let missing = expected
            .iter()
            .find(|call| !remaining.any(|actual| actual == *call))
            .cloned();
        match missing {
            Some(missing) => Err(AssertionError::MissingCall {
                name: self.name(),
                missing,
                expected,
                actual,
            }),
            None => Ok(()),
        }
    }

    /// Checks that [`Double::mock_calls`] is exactly `expected`.
    pub fn check_mock_calls(
        &self,
        expected: impl IntoIterator<Item = Call>,
    ) -> Result<(), AssertionError> {
        let expected: Vec<_> = expected.into_iter().collect();
        let actual = self.mock_calls();
        if actual != expected {
            return Err(AssertionError::CallsMismatch {
                name: self.name(),
                expected,
                actual,
            });
        }
        Ok(())
    }

    #[track_caller]
    pub fn assert_called_times(&self, times: impl Into<Times>) {
        if let Err(error) = self.check_called_times(times) {
            panic!("{error}");
        }
    }

    #[track_caller]
    pub fn assert_called(&self) {
        if let Err(error) = self.check_called() {
            panic!("{error}");
        }
    }

    #[track_caller]
    pub fn assert_called_once(&self) {
        if let Err(error) = self.check_called_once() {
            panic!("{error}");
        }
    }

    #[track_caller]
    pub fn assert_not_called(&self) {
        if let Err(error) = self.check_not_called() {
            panic!("{error}");
        }
    }

    #[track_caller]
    pub fn assert_called_with(&self, expected: Args) {
        if let Err(error) = self.check_called_with(expected) {
            panic!("{error}");
        }
    }

    #[track_caller]
    pub fn assert_called_once_with(&self, expected: Args) {
        if let Err(error) = self
            .check_called_once()
            .and_then(|()| self.check_called_with(expected))
        {
            panic!("{error}");
        }
    }

    #[track_caller]
    pub fn assert_any_call(&self, expected: Args) {
        if let Err(error) = self.check_any_call(expected) {
            panic!("{error}");
        }
    }

    #[track_caller]
    pub fn assert_has_calls(&self, expected: impl IntoIterator<Item = Call>) {
        if let Err(error) = self.check_has_calls(expected) {
            panic!("{error}");
        }
    }

    #[track_caller]
    pub fn assert_mock_calls(&self, expected: impl IntoIterator<Item = Call>) {
        if let Err(error) = self.check_mock_calls(expected) {
            panic!("{error}");
        }
    }
}
