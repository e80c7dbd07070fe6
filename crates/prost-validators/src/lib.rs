//! Field validation for [`prost`] messages driven by `validator.field` and
//! `validator.oneof` options, with a hierarchical error report.
//!
//! Generated code (or hand-written code following the same pattern)
//! implements [`Validator`] and [`Validators`] for each message. Field rules
//! are compiled once into [`FieldRules`] and evaluated into a [`Violations`]
//! report; sub-message reports nest under the field that holds them.
//!
//! ```rust
//! use std::sync::LazyLock;
//!
//! use prost_reflect::Value;
//! use prost_validators::{Error, FieldRules, Validator, Violations, types::FieldValidator};
//!
//! static NAME: LazyLock<FieldRules> = LazyLock::new(|| {
//!     FieldRules::new(&FieldValidator {
//!         string_not_empty: Some(true),
//!         ..Default::default()
//!     })
//!     .expect("static rules compile")
//! });
//!
//! struct Person {
//!     name: String,
//! }
//!
//! impl Validator for Person {
//!     fn validate(&self) -> Result<(), Error> {
//!         let mut errors = Violations::new();
//!         NAME.evaluate("name", Some(&Value::String(self.name.clone())), &mut errors);
//!         errors.into_result()
//!     }
//! }
//!
//! let err = Person { name: String::new() }.validate().unwrap_err();
//! assert_eq!(err.to_string(), "bad request");
//! ```
//!
//! # Error types
//!
//! | Type | When |
//! |------|------|
//! | [`Violations`] | One or more rules failed |
//! | [`CompilationError`] | A rule definition cannot be evaluated |
//! | [`FieldError`] | A failure reported under a field path |
//!
//! All three are unified under [`Error`].
//!
//! # Re-exported types
//!
//! The [`types`] module re-exports `prost-validators-types` so consumers do
//! not need to depend on it directly.

#![warn(missing_docs)]

mod config;
mod error;
mod validator;
mod violation;

/// Re-export of `prost-validators-types`, the `FieldValidator` and
/// `OneofValidator` option messages.
pub use prost_validators_types as types;

pub use config::{EnumValues, PatternMatcher, RfcUuidParser, RuleOption, UuidParser};
pub use error::{CompilationError, Error, FieldError, field_error};
pub use validator::{
    FieldRules, OneofRules, Rule, Validatable, Validator, Validators, call_validator_if_exists,
    call_validators_if_exists,
};
pub use violation::{FailureCause, MESSAGE_VIOLATION, Report, Violation, Violations};
