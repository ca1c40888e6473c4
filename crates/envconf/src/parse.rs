//! The parse pass: resolution, conversion, validation and error aggregation.

use crate::config::{Config, Declaration};
use crate::error::{ConfigResult, ParseErrors, VarError};
use crate::lookup::{Lookup, NotUnicode};
use crate::value::EnvValue;
use crate::variables::{Target, Variable};
use tracing::debug;

impl Config<'_> {
    /// Resolve every declared variable in registration order and write the
    /// results into their targets.
    ///
    /// A failing variable never stops the pass; all failures are returned
    /// together. A target is written only when its variable resolves
    /// successfully, otherwise it keeps its previous value.
    pub fn parse(self) -> ConfigResult<()> {
        let Config {
            declarations,
            lookup,
        } = self;
        let total = declarations.len();
        let mut errors = ParseErrors::new();

        for Declaration { variable, target } in declarations {
            let kind = target.kind();
            let result = match target {
                Target::String(t) => resolve::<String>(&*lookup, &variable).map(|v| *t = v),
                Target::Int(t) => resolve::<isize>(&*lookup, &variable).map(|v| *t = v),
                Target::Int64(t) => resolve::<i64>(&*lookup, &variable).map(|v| *t = v),
                Target::Float32(t) => resolve::<f32>(&*lookup, &variable).map(|v| *t = v),
                Target::Float64(t) => resolve::<f64>(&*lookup, &variable).map(|v| *t = v),
                Target::Bool(t) => resolve::<bool>(&*lookup, &variable).map(|v| *t = v),
            };

            if let Err(e) = result {
                // The error message may carry the raw value; log the category only.
                debug!(variable = %variable.name(), %kind, error = e.category(), "Variable failed to parse");
                errors.push(e);
            }
        }

        if errors.is_empty() {
            debug!(variables = total, "Config parsed");
            Ok(())
        } else {
            debug!(variables = total, failed = errors.len(), "Config parsing failed");
            Err(errors)
        }
    }
}

/// Resolve a single variable to its typed value.
///
/// Order: required check, then default (only when absent), then conversion
/// of the raw value, then the validator.
fn resolve<T: EnvValue>(lookup: &dyn Lookup, variable: &Variable) -> Result<T, VarError> {
    let name = variable.name();
    let raw = lookup
        .lookup(name)
        .map_err(|NotUnicode| VarError::WrongValueType(name.to_string()))?;

    if variable.required && raw.is_none() {
        return Err(VarError::MissingRequired(name.to_string()));
    }

    if let (None, Some(default)) = (&raw, &variable.default) {
        let value =
            T::from_value(default).ok_or_else(|| VarError::WrongDefaultType(name.to_string()))?;
        debug!(variable = %name, kind = %T::KIND, origin = "default", "Resolved variable");
        return Ok(value);
    }

    // An optional variable without a default converts from the empty string:
    // fine for strings, a wrong value type for everything else.
    let origin = if raw.is_some() { "env" } else { "unset" };
    let raw = raw.unwrap_or_default();
    let value = T::parse_raw(&raw).ok_or_else(|| VarError::WrongValueType(name.to_string()))?;

    if let Some(validator) = &variable.validator {
        validator(&value.to_value()).map_err(|reason| VarError::Validation {
            name: name.to_string(),
            reason,
        })?;
    }

    debug!(variable = %name, kind = %T::KIND, origin, "Resolved variable");
    Ok(value)
}
