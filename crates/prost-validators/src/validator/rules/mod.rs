pub(crate) mod enum_rules;
pub(crate) mod length;
pub(crate) mod number;
pub(crate) mod oneof;
pub(crate) mod string;

pub use oneof::OneofRules;

use std::fmt;

use prost_reflect::Value;

use prost_validators_types::FieldValidator;

use crate::config::{RuleConfig, RuleOption};
use crate::error::CompilationError;
use crate::violation::{FailureCause, Violation, Violations};

/// Name of a field rule, as reported in [`Violation::violation`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Rule {
    /// `regex`
    Regex,
    /// `int_gt`
    IntGt,
    /// `int_lt`
    IntLt,
    /// `msg_exists`
    MsgExists,
    /// `float_gt`
    FloatGt,
    /// `float_lt`
    FloatLt,
    /// `float_gte`
    FloatGte,
    /// `float_lte`
    FloatLte,
    /// `string_not_empty`
    StringNotEmpty,
    /// `repeated_count_min`
    RepeatedCountMin,
    /// `repeated_count_max`
    RepeatedCountMax,
    /// `length_gt`
    LengthGt,
    /// `length_lt`
    LengthLt,
    /// `length_eq`
    LengthEq,
    /// `is_in_enum`
    IsInEnum,
    /// `uuid_ver`
    UuidVer,
    /// `required`, on a field or a oneof
    Required,
}

impl Rule {
    /// The rule's field name in `FieldValidator`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Regex => "regex",
            Self::IntGt => "int_gt",
            Self::IntLt => "int_lt",
            Self::MsgExists => "msg_exists",
            Self::FloatGt => "float_gt",
            Self::FloatLt => "float_lt",
            Self::FloatGte => "float_gte",
            Self::FloatLte => "float_lte",
            Self::StringNotEmpty => "string_not_empty",
            Self::RepeatedCountMin => "repeated_count_min",
            Self::RepeatedCountMax => "repeated_count_max",
            Self::LengthGt => "length_gt",
            Self::LengthLt => "length_lt",
            Self::LengthEq => "length_eq",
            Self::IsInEnum => "is_in_enum",
            Self::UuidVer => "uuid_ver",
            Self::Required => "required",
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Compiled `validator.field` rules for one field.
///
/// Build once per field (for instance in a `LazyLock`) and evaluate against
/// every instance. All set rules must pass; unset rules are skipped, as are
/// rules that do not apply to the value's kind.
pub struct FieldRules {
    human_error: Option<String>,
    required: bool,
    msg_exists: bool,
    fail_fast: bool,
    number: number::NumberRuleEval,
    string: string::StringRuleEval,
    length: length::LengthRuleEval,
    enum_check: Option<enum_rules::EnumRuleEval>,
}

impl FieldRules {
    /// Compile `rules` with default options.
    ///
    /// # Errors
    ///
    /// Returns a [`CompilationError`] if a rule cannot be evaluated, such as
    /// an invalid regex or an out-of-range `uuid_ver`.
    pub fn new(rules: &FieldValidator) -> Result<Self, CompilationError> {
        Self::with_options(rules, &[])
    }

    /// Compile `rules` with the given options.
    ///
    /// # Errors
    ///
    /// Returns a [`CompilationError`] if a rule cannot be evaluated, or if
    /// `is_in_enum` is set without [`RuleOption::EnumValues`].
    pub fn with_options(
        rules: &FieldValidator,
        options: &[RuleOption],
    ) -> Result<Self, CompilationError> {
        let cfg = RuleConfig::from_options(options);

        if rules.is_empty() {
            tracing::debug!(fail_fast = cfg.fail_fast, "field has no rules");
            return Ok(Self {
                human_error: None,
                required: false,
                msg_exists: false,
                fail_fast: cfg.fail_fast,
                number: number::NumberRuleEval::default(),
                string: string::StringRuleEval::default(),
                length: length::LengthRuleEval::default(),
                enum_check: None,
            });
        }

        let enum_check = if rules.is_in_enum.unwrap_or(false) {
            let values = cfg.enum_values.clone().ok_or_else(|| CompilationError {
                cause: "is_in_enum requires the enum's declared values".to_string(),
            })?;
            Some(enum_rules::EnumRuleEval::new(values))
        } else {
            None
        };

        let compiled = Self {
            human_error: rules.human_error.clone(),
            required: rules.required.unwrap_or(false),
            msg_exists: rules.msg_exists.unwrap_or(false),
            fail_fast: cfg.fail_fast,
            number: number::NumberRuleEval::new(rules),
            string: string::StringRuleEval::new(rules, &cfg)?,
            length: length::LengthRuleEval::new(rules),
            enum_check,
        };

        tracing::debug!(
            tautology = compiled.tautology(),
            required = compiled.required,
            msg_exists = compiled.msg_exists,
            fail_fast = compiled.fail_fast,
            human_error = compiled.human_error.is_some(),
            "compiled field rules"
        );

        Ok(compiled)
    }

    /// Returns true if these rules never fail.
    #[must_use]
    pub fn tautology(&self) -> bool {
        !self.required
            && !self.msg_exists
            && self.number.tautology()
            && self.string.tautology()
            && self.length.tautology()
            && self.enum_check.is_none()
    }

    /// Check the value of `field`, recording failures in `errors`.
    ///
    /// `None` means the field is unset, which only `required` and
    /// `msg_exists` reject. On a repeated value the count and length rules
    /// apply to the list and every other rule to each element, reported under
    /// that element's index.
    pub fn evaluate(&self, field: &str, value: Option<&Value>, errors: &mut Violations) {
        let Some(value) = value else {
            let mut failed = Vec::new();
            if self.required {
                failed.push(Rule::Required);
            }
            if self.msg_exists {
                failed.push(Rule::MsgExists);
            }
            self.report(field, None, &failed, errors);
            return;
        };

        match value {
            Value::List(items) => {
                let mut failed = Vec::new();
                self.length.evaluate_collection(items.len(), &mut failed);
                if !self.report(field, None, &failed, errors) {
                    return;
                }
                for (index, item) in items.iter().enumerate() {
                    if !self.evaluate_item(field, index, item, errors) {
                        return;
                    }
                }
            }
            Value::Map(entries) => {
                let mut failed = Vec::new();
                self.length.evaluate_collection(entries.len(), &mut failed);
                self.report(field, None, &failed, errors);
            }
            scalar => {
                let mut failed = Vec::new();
                self.evaluate_scalar(scalar, &mut failed);
                self.length.evaluate(scalar, &mut failed);
                self.report(field, None, &failed, errors);
            }
        }
    }

    /// Check element `index` of the repeated `field` on its own.
    ///
    /// For generated code that iterates the elements itself. Count and length
    /// rules are not applied. Returns false if evaluation should stop.
    pub fn evaluate_item(
        &self,
        field: &str,
        index: usize,
        item: &Value,
        errors: &mut Violations,
    ) -> bool {
        let mut failed = Vec::new();
        self.evaluate_scalar(item, &mut failed);
        self.report(field, Some(index), &failed, errors)
    }

    fn evaluate_scalar(&self, val: &Value, failed: &mut Vec<Rule>) {
        self.number.evaluate(val, failed);
        self.string.evaluate(val, failed);
        if let Some(ref enum_check) = self.enum_check {
            enum_check.evaluate(val, failed);
        }
    }

    /// Returns false once a failure was recorded under fail-fast.
    fn report(
        &self,
        field: &str,
        index: Option<usize>,
        failed: &[Rule],
        errors: &mut Violations,
    ) -> bool {
        for rule in failed {
            self.fail(field, index, *rule, errors);
            if self.fail_fast {
                return false;
            }
        }
        true
    }

    fn fail(&self, field: &str, index: Option<usize>, rule: Rule, errors: &mut Violations) {
        let cause = match self.human_error {
            Some(ref text) => FailureCause::Text(text.clone()),
            None => {
                let violation = Violation::new(field, rule.as_str());
                FailureCause::Violation(match index {
                    Some(index) => violation.with_index(index),
                    None => violation,
                })
            }
        };

        match index {
            Some(index) => errors.add_validations_error(field, rule.as_str(), index, cause),
            None => errors.add_validation_error(field, rule.as_str(), cause),
        }
    }
}
