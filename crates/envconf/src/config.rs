//! The variable registry.

use crate::lookup::{EnvLookup, Lookup};
use crate::variables::{Target, Variable, normalize_name};

pub(crate) struct Declaration<'a> {
    pub(crate) variable: Variable,
    pub(crate) target: Target<'a>,
}

/// Ordered variable declarations and the source they are resolved from.
///
/// Output locations stay mutably borrowed until [`Config::parse`] consumes
/// the registry.
pub struct Config<'a> {
    pub(crate) declarations: Vec<Declaration<'a>>,
    pub(crate) lookup: Box<dyn Lookup + 'a>,
}

impl<'a> Config<'a> {
    /// Create an empty registry reading the process environment.
    pub fn new() -> Self {
        Self::with_lookup(EnvLookup)
    }

    /// Create an empty registry reading from `lookup`.
    pub fn with_lookup(lookup: impl Lookup + 'a) -> Self {
        Self {
            declarations: Vec::new(),
            lookup: Box::new(lookup),
        }
    }

    /// Replace the lookup source. Takes effect for the next [`Config::parse`].
    pub fn set_lookup(&mut self, lookup: impl Lookup + 'a) {
        self.lookup = Box::new(lookup);
    }

    pub fn set_string(&mut self, target: &'a mut String, variable: Variable) {
        self.push(Target::String(target), variable);
    }

    /// Register a platform-native integer.
    pub fn set_int(&mut self, target: &'a mut isize, variable: Variable) {
        self.push(Target::Int(target), variable);
    }

    pub fn set_int64(&mut self, target: &'a mut i64, variable: Variable) {
        self.push(Target::Int64(target), variable);
    }

    pub fn set_float32(&mut self, target: &'a mut f32, variable: Variable) {
        self.push(Target::Float32(target), variable);
    }

    pub fn set_float64(&mut self, target: &'a mut f64, variable: Variable) {
        self.push(Target::Float64(target), variable);
    }

    pub fn set_bool(&mut self, target: &'a mut bool, variable: Variable) {
        self.push(Target::Bool(target), variable);
    }

    fn push(&mut self, target: Target<'a>, mut variable: Variable) {
        variable.name = normalize_name(&variable.name);
        self.declarations.push(Declaration { variable, target });
    }

    /// Normalized names in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.declarations.iter().map(|d| d.variable.name())
    }

    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }
}

impl Default for Config<'_> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lookup::MapLookup;
    use serial_test::serial;

    #[test]
    fn test_names_are_normalized_in_order() {
        let mut level = String::new();
        let mut version = 0isize;
        let mut enabled = false;

        let mut config = Config::with_lookup(MapLookup::new());
        assert!(config.is_empty());
        config.set_string(&mut level, Variable::new("log-level"));
        config.set_int(&mut version, Variable::new("API-VERSION"));
        config.set_bool(&mut enabled, Variable::new("Tracing_Enabled"));

        assert_eq!(config.len(), 3);
        let names: Vec<&str> = config.names().collect();
        assert_eq!(names, vec!["LOG_LEVEL", "API_VERSION", "TRACING_ENABLED"]);
    }

    #[test]
    fn test_set_lookup_replaces_source() {
        let first = MapLookup::new().with("LOG_LEVEL", "DEBUG");
        let second = MapLookup::new().with("LOG_LEVEL", "WARN");
        let mut level = String::new();

        let mut config = Config::with_lookup(&first);
        config.set_lookup(&second);
        config.set_string(&mut level, Variable::new("LOG_LEVEL"));
        config.parse().unwrap();

        assert_eq!(level, "WARN");
    }

    #[test]
    #[serial]
    fn test_default_source_is_process_environment() {
        let name = "ENVCONF_CONFIG_TEST_91C2";
        // SAFETY: all environment-touching tests are serialized.
        unsafe {
            std::env::set_var(name, "42");
        }
        let mut value = 0i64;
        let mut config = Config::new();
        config.set_int64(&mut value, Variable::new(name));
        let result = config.parse();
        unsafe {
            std::env::remove_var(name);
        }

        assert!(result.is_ok());
        assert_eq!(value, 42);
    }
}
