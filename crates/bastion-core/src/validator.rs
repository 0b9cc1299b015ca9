//! Error sink shared by configuration validators

use std::error::Error as StdError;
use std::fmt;

/// Boxed error stored by [`StructValidator`]
pub type BoxError = Box<dyn StdError + Send + Sync + 'static>;

/// Ordered, append-only log of validation errors.
///
/// Validators only push. Nothing in a validation pass reads or clears the
/// log, so one validator threaded through several related checks ends up
/// holding every error they raised, in the order they were raised. The
/// caller accepts a configuration only when [`StructValidator::count`] is
/// zero, and is the only party that may call [`StructValidator::clear`].
#[derive(Default)]
pub struct StructValidator {
    errors: Vec<BoxError>,
}

impl StructValidator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an error
    pub fn push<E>(&mut self, error: E)
    where
        E: Into<BoxError>,
    {
        self.errors.push(error.into());
    }

    /// Errors in the order they were pushed
    pub fn errors(&self) -> &[BoxError] {
        &self.errors
    }

    pub fn count(&self) -> usize {
        self.errors.len()
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Rendered error messages
    pub fn messages(&self) -> Vec<String> {
        self.errors.iter().map(|e| e.to_string()).collect()
    }

    pub fn clear(&mut self) {
        self.errors.clear();
    }

    pub fn into_errors(self) -> Vec<BoxError> {
        self.errors
    }
}

impl fmt::Debug for StructValidator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StructValidator")
            .field("errors", &self.messages())
            .finish()
    }
}
