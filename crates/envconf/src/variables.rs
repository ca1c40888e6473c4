//! Variable declarations.

use crate::error::BoxError;
use crate::value::{Value, ValueKind};
use std::fmt;

/// A predicate run against a converted, present value.
pub type Validator = Box<dyn Fn(&Value) -> Result<(), BoxError>>;

/// An environment variable and the rules for resolving it.
///
/// The declared type and the output location are fixed when the variable is
/// registered with one of the typed `Config::set_*` methods.
pub struct Variable {
    pub(crate) name: String,
    pub(crate) default: Option<Value>,
    pub(crate) required: bool,
    pub(crate) validator: Option<Validator>,
}

impl Variable {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            default: None,
            required: false,
            validator: None,
        }
    }

    /// Value used when the variable is absent. Checked against the declared
    /// type at parse time and never validated.
    pub fn with_default(mut self, value: impl Into<Value>) -> Self {
        self.default = Some(value.into());
        self
    }

    /// Fail the parse pass if the variable is absent, even when a default is set.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn with_validator<F>(mut self, validator: F) -> Self
    where
        F: Fn(&Value) -> Result<(), BoxError> + 'static,
    {
        self.validator = Some(Box::new(validator));
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn default_value(&self) -> Option<&Value> {
        self.default.as_ref()
    }

    pub fn is_required(&self) -> bool {
        self.required
    }
}

impl fmt::Debug for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Variable")
            .field("name", &self.name)
            .field("default", &self.default)
            .field("required", &self.required)
            .field("validator", &self.validator.is_some())
            .finish()
    }
}

/// Caller-owned storage a declaration writes into.
pub(crate) enum Target<'a> {
    String(&'a mut String),
    Int(&'a mut isize),
    Int64(&'a mut i64),
    Float32(&'a mut f32),
    Float64(&'a mut f64),
    Bool(&'a mut bool),
}

impl Target<'_> {
    pub(crate) fn kind(&self) -> ValueKind {
        match self {
            Target::String(_) => ValueKind::String,
            Target::Int(_) => ValueKind::Int,
            Target::Int64(_) => ValueKind::Int64,
            Target::Float32(_) => ValueKind::Float32,
            Target::Float64(_) => ValueKind::Float64,
            Target::Bool(_) => ValueKind::Bool,
        }
    }
}

/// Rewrite hyphens to underscores and upper-case the name, so `api-version`
/// and `API_VERSION` address the same variable.
pub fn normalize_name(name: &str) -> String {
    name.replace('-', "_").to_uppercase()
}
