use prost_validators_types::OneofValidator;

use crate::violation::{Violation, Violations};

use super::Rule;

/// Compiled `validator.oneof` rules for one oneof group.
#[derive(Debug, Clone, Copy, Default)]
pub struct OneofRules {
    required: bool,
}

impl OneofRules {
    /// Compile the rules of one oneof group.
    #[must_use]
    pub fn new(rules: &OneofValidator) -> Self {
        Self {
            required: rules.is_required(),
        }
    }

    /// Returns true if these rules never fail.
    #[must_use]
    pub fn tautology(&self) -> bool {
        !self.required
    }

    /// Check a oneof named `name` with `set_count` members set.
    ///
    /// A required oneof fails with a single [`Rule::Required`] violation
    /// whether no member or more than one member is set.
    pub fn evaluate(&self, name: &str, set_count: usize, errors: &mut Violations) {
        if self.required && set_count != 1 {
            errors.add_validation_error(
                name,
                Rule::Required.as_str(),
                Violation::new(name, Rule::Required.as_str()),
            );
        }
    }
}
