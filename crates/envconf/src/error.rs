//! Configuration parsing errors.

use thiserror::Error;

/// Error type returned by validators.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// A failure to resolve a single variable.
#[derive(Debug, Error)]
pub enum VarError {
    #[error("'{0}' variable is missing")]
    MissingRequired(String),

    #[error("variable '{0}' has a wrong default value type")]
    WrongDefaultType(String),

    #[error("variable '{0}' has a wrong value type")]
    WrongValueType(String),

    /// Rejected by the variable's validator. Displays the validator's message
    /// as-is and exposes no further source, so reporters print it once.
    #[error("{reason}")]
    Validation { name: String, reason: BoxError },
}

impl VarError {
    /// Normalized name of the variable this error concerns.
    pub fn name(&self) -> &str {
        match self {
            VarError::MissingRequired(name)
            | VarError::WrongDefaultType(name)
            | VarError::WrongValueType(name)
            | VarError::Validation { name, .. } => name,
        }
    }

    /// Short label for the failure that never includes the variable's value.
    pub fn category(&self) -> &'static str {
        match self {
            VarError::MissingRequired(_) => "missing_required",
            VarError::WrongDefaultType(_) => "wrong_default_type",
            VarError::WrongValueType(_) => "wrong_value_type",
            VarError::Validation { .. } => "validation",
        }
    }
}

/// All failures collected during one parse pass, in declaration order.
#[derive(Debug, Default, Error)]
#[error("config parsing failed: {}", join_messages(.errors))]
pub struct ParseErrors {
    errors: Vec<VarError>,
}

fn join_messages(errors: &[VarError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

impl ParseErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an error to the list.
    pub fn push(&mut self, error: VarError) {
        self.errors.push(error);
    }

    pub fn errors(&self) -> &[VarError] {
        &self.errors
    }

    pub fn iter(&self) -> std::slice::Iter<'_, VarError> {
        self.errors.iter()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn into_inner(self) -> Vec<VarError> {
        self.errors
    }
}

impl From<Vec<VarError>> for ParseErrors {
    fn from(errors: Vec<VarError>) -> Self {
        Self { errors }
    }
}

impl IntoIterator for ParseErrors {
    type Item = VarError;
    type IntoIter = std::vec::IntoIter<VarError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

impl<'a> IntoIterator for &'a ParseErrors {
    type Item = &'a VarError;
    type IntoIter = std::slice::Iter<'a, VarError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}

pub type ConfigResult<T> = std::result::Result<T, ParseErrors>;
