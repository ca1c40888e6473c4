//! Sources of raw variable values.

use std::collections::HashMap;
use thiserror::Error;

/// The variable is present but its value is not valid Unicode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("variable value is not valid unicode")]
pub struct NotUnicode;

/// Looks up raw variable values by normalized name.
///
/// `Ok(None)` means the variable is absent, which is distinct from present
/// and empty. A present value that cannot be decoded is `Err(NotUnicode)`.
pub trait Lookup {
    fn lookup(&self, name: &str) -> Result<Option<String>, NotUnicode>;
}

impl<T: Lookup + ?Sized> Lookup for &T {
    fn lookup(&self, name: &str) -> Result<Option<String>, NotUnicode> {
        (**self).lookup(name)
    }
}

impl<T: Lookup + ?Sized> Lookup for Box<T> {
    fn lookup(&self, name: &str) -> Result<Option<String>, NotUnicode> {
        (**self).lookup(name)
    }
}

/// Reads the process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvLookup;

impl Lookup for EnvLookup {
    fn lookup(&self, name: &str) -> Result<Option<String>, NotUnicode> {
        match std::env::var(name) {
            Ok(value) => Ok(Some(value)),
            Err(std::env::VarError::NotPresent) => Ok(None),
            Err(std::env::VarError::NotUnicode(_)) => Err(NotUnicode),
        }
    }
}

/// In-memory variables, for tests and non-OS environments.
#[derive(Debug, Clone, Default)]
pub struct MapLookup {
    vars: HashMap<String, String>,
}

impl MapLookup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.vars.insert(name.into(), value.into());
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(name, value);
        self
    }
}

impl Lookup for MapLookup {
    fn lookup(&self, name: &str) -> Result<Option<String>, NotUnicode> {
        Ok(self.vars.get(name).cloned())
    }
}

impl From<HashMap<String, String>> for MapLookup {
    fn from(vars: HashMap<String, String>) -> Self {
        Self { vars }
    }
}

impl<K, V> FromIterator<(K, V)> for MapLookup
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_map_lookup() {
        let env: MapLookup = [("LOG_LEVEL", "DEBUG"), ("EMPTY", "")].into_iter().collect();
        assert_eq!(env.lookup("LOG_LEVEL"), Ok(Some("DEBUG".to_string())));
        assert_eq!(env.lookup("EMPTY"), Ok(Some(String::new())));
        assert_eq!(env.lookup("MISSING"), Ok(None));
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let env = MapLookup::new().with("api-version", "5");
        assert_eq!(env.lookup("API_VERSION"), Ok(None));
    }

    #[test]
    fn test_through_reference_and_box() {
        let env = MapLookup::new().with("A", "1");
        let by_ref: &dyn Lookup = &env;
        assert_eq!(by_ref.lookup("A"), Ok(Some("1".to_string())));

        let boxed: Box<dyn Lookup> = Box::new(env);
        assert_eq!(boxed.lookup("A"), Ok(Some("1".to_string())));
    }

    // Tests that mutate the process environment run under `#[serial]`, and
    // every other test reads variables through `MapLookup` only.
    #[test]
    #[serial]
    fn test_env_lookup() {
        let name = "ENVCONF_LOOKUP_TEST_7F3A";
        // SAFETY: all environment-touching tests are serialized.
        unsafe {
            std::env::set_var(name, "from-process");
        }
        assert_eq!(EnvLookup.lookup(name), Ok(Some("from-process".to_string())));
        unsafe {
            std::env::remove_var(name);
        }
        assert_eq!(EnvLookup.lookup(name), Ok(None));
    }

    #[cfg(unix)]
    #[test]
    #[serial]
    fn test_env_lookup_rejects_non_unicode() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let name = "ENVCONF_LOOKUP_TEST_B81E";
        // SAFETY: all environment-touching tests are serialized.
        unsafe {
            std::env::set_var(name, OsStr::from_bytes(b"caf\xe9"));
        }
        let result = EnvLookup.lookup(name);
        unsafe {
            std::env::remove_var(name);
        }
        assert_eq!(result, Err(NotUnicode));
    }
}
