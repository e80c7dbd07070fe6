use std::collections::{BTreeSet, HashSet};
use std::sync::Arc;

use prost_reflect::EnumDescriptor;

/// Options for configuring a [`FieldRules`](crate::FieldRules) at
/// construction time.
#[non_exhaustive]
pub enum RuleOption {
    /// Stop evaluating a field after its first violation instead of
    /// collecting all of them.
    FailFast,

    /// Evaluate `regex` rules with this matcher instead of compiling the
    /// pattern with the `regex` crate.
    PatternMatcher(Arc<dyn PatternMatcher>),

    /// Parse `uuid_ver` candidates with this parser instead of
    /// [`RfcUuidParser`].
    UuidParser(Arc<dyn UuidParser>),

    /// The declared values of the field's enum type, required by
    /// `is_in_enum`.
    EnumValues(Arc<dyn EnumValues>),
}

/// Matches a `regex` rule pattern against a string field.
pub trait PatternMatcher: Send + Sync {
    /// Returns true if `subject` matches `pattern`.
    fn matches(&self, pattern: &str, subject: &str) -> bool;
}

/// Parses `uuid_ver` candidates.
pub trait UuidParser: Send + Sync {
    /// Returns the UUID version of `value`, or `None` if it is not a UUID.
    fn parse_uuid(&self, value: &str) -> Option<u8>;
}

/// Default [`UuidParser`]: the hyphenated 8-4-4-4-12 form with the RFC 4122
/// variant, parsed by the `uuid` crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct RfcUuidParser;

impl UuidParser for RfcUuidParser {
    fn parse_uuid(&self, value: &str) -> Option<u8> {
        // Simple, braced and URN forms all have a different length.
        if value.len() != 36 {
            return None;
        }
        let uuid = uuid::Uuid::try_parse(value).ok()?;
        if uuid.get_variant() != uuid::Variant::RFC4122 {
            return None;
        }
        u8::try_from(uuid.get_version_num()).ok()
    }
}

/// The set of values an enum field may take.
pub trait EnumValues: Send + Sync {
    /// Returns true if `value` is a declared value of the enum.
    fn is_valid_enum_value(&self, value: i32) -> bool;
}

impl EnumValues for EnumDescriptor {
    fn is_valid_enum_value(&self, value: i32) -> bool {
        self.get_value(value).is_some()
    }
}

impl EnumValues for [i32] {
    fn is_valid_enum_value(&self, value: i32) -> bool {
        self.contains(&value)
    }
}

impl<const N: usize> EnumValues for [i32; N] {
    fn is_valid_enum_value(&self, value: i32) -> bool {
        self.contains(&value)
    }
}

impl EnumValues for Vec<i32> {
    fn is_valid_enum_value(&self, value: i32) -> bool {
        self.contains(&value)
    }
}

impl EnumValues for HashSet<i32> {
    fn is_valid_enum_value(&self, value: i32) -> bool {
        self.contains(&value)
    }
}

impl EnumValues for BTreeSet<i32> {
    fn is_valid_enum_value(&self, value: i32) -> bool {
        self.contains(&value)
    }
}

/// Resolved construction options.
pub(crate) struct RuleConfig {
    pub fail_fast: bool,
    pub pattern_matcher: Option<Arc<dyn PatternMatcher>>,
    pub uuid_parser: Arc<dyn UuidParser>,
    pub enum_values: Option<Arc<dyn EnumValues>>,
}

impl RuleConfig {
    pub(crate) fn from_options(options: &[RuleOption]) -> Self {
        let mut cfg = Self::default();
        for option in options {
            match option {
                RuleOption::FailFast => cfg.fail_fast = true,
                RuleOption::PatternMatcher(matcher) => {
                    cfg.pattern_matcher = Some(Arc::clone(matcher));
                }
                RuleOption::UuidParser(parser) => cfg.uuid_parser = Arc::clone(parser),
                RuleOption::EnumValues(values) => cfg.enum_values = Some(Arc::clone(values)),
            }
        }
        cfg
    }
}

impl Default for RuleConfig {
    fn default() -> Self {
        Self {
            fail_fast: false,
            pattern_matcher: None,
            uuid_parser: Arc::new(RfcUuidParser),
            enum_values: None,
        }
    }
}
