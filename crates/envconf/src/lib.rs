//! Typed configuration from environment variables.
//!
//! This crate handles:
//! - Declaring variables against a [`Config`] registry
//! - Resolving them from a pluggable [`Lookup`] source (the process
//!   environment by default)
//! - Defaults, required variables and validation
//! - Reporting every failure of a parse pass at once via [`ParseErrors`]
//!
//! ```no_run
//! use envconf::{Config, Variable, validate};
//!
//! let mut log_level = String::new();
//! let mut batch_size = 0isize;
//!
//! let mut config = Config::new();
//! config.set_string(
//!     &mut log_level,
//!     Variable::new("log-level").with_validator(validate::has_prefix("D")),
//! );
//! config.set_int(&mut batch_size, Variable::new("BATCH_SIZE").with_default(500));
//!
//! if let Err(errors) = config.parse() {
//!     eprintln!("{errors}");
//! }
//! ```

pub mod config;
pub mod error;
pub mod lookup;
mod parse;
pub mod validate;
pub mod value;
pub mod variables;

pub use config::Config;
pub use error::{BoxError, ConfigResult, ParseErrors, VarError};
pub use lookup::{EnvLookup, Lookup, MapLookup, NotUnicode};
pub use value::{Value, ValueKind};
pub use variables::{Validator, Variable, normalize_name};
