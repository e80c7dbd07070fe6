use crate::error::Error;

mod rules;

pub use rules::{FieldRules, OneofRules, Rule};

/// Checks a message's own fields.
///
/// Implemented by generated code for every message that declares field or
/// oneof rules.
pub trait Validator {
    /// Validate this message's own fields, without descending into
    /// sub-messages.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] with one record per failed rule.
    fn validate(&self) -> Result<(), Error>;
}

/// Checks a message and, recursively, every message it contains.
pub trait Validators {
    /// Validate this message and all of its sub-messages and repeated
    /// elements.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] whose records nest the reports of
    /// failing sub-messages.
    fn validate_all(&self) -> Result<(), Error>;
}

/// Capability probe for values that may or may not be validatable.
///
/// Generated code calls [`call_validator_if_exists`] and
/// [`call_validators_if_exists`] on every field, so field types without
/// rules implement this with the default `None`.
pub trait Validatable {
    /// This value as a [`Validator`], if it is one.
    fn as_validator(&self) -> Option<&dyn Validator> {
        None
    }

    /// This value as a [`Validators`], if it is one.
    fn as_validators(&self) -> Option<&dyn Validators> {
        None
    }
}

macro_rules! not_validatable {
    ($($ty:ty),* $(,)?) => {
        $(impl Validatable for $ty {})*
    };
}

not_validatable!(
    bool, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, char,
    String, str, Vec<u8>,
);

impl<T: Validatable> Validatable for Option<T> {
    fn as_validator(&self) -> Option<&dyn Validator> {
        self.as_ref().and_then(Validatable::as_validator)
    }

    fn as_validators(&self) -> Option<&dyn Validators> {
        self.as_ref().and_then(Validatable::as_validators)
    }
}

impl<T: Validatable + ?Sized> Validatable for Box<T> {
    fn as_validator(&self) -> Option<&dyn Validator> {
        (**self).as_validator()
    }

    fn as_validators(&self) -> Option<&dyn Validators> {
        (**self).as_validators()
    }
}

impl<T: Validatable + ?Sized> Validatable for &T {
    fn as_validator(&self) -> Option<&dyn Validator> {
        (**self).as_validator()
    }

    fn as_validators(&self) -> Option<&dyn Validators> {
        (**self).as_validators()
    }
}

/// Run [`Validator::validate`] on `value` if it has that capability.
///
/// # Errors
///
/// Returns whatever `validate` returns; values without the capability pass.
pub fn call_validator_if_exists<T: Validatable + ?Sized>(value: &T) -> Result<(), Error> {
    match value.as_validator() {
        Some(validator) => validator.validate(),
        None => Ok(()),
    }
}

/// Run [`Validators::validate_all`] on `value` if it has that capability.
///
/// # Errors
///
/// Returns whatever `validate_all` returns; values without the capability
/// pass.
pub fn call_validators_if_exists<T: Validatable + ?Sized>(value: &T) -> Result<(), Error> {
    match value.as_validators() {
        Some(validators) => validators.validate_all(),
        None => Ok(()),
    }
}
