use prost_reflect::Value;

use prost_validators_types::FieldValidator;

use super::Rule;

/// `length_*` and `repeated_count_*` rules.
///
/// Strings are measured in characters, bytes in bytes and repeated or map
/// fields in elements.
#[derive(Default)]
pub(crate) struct LengthRuleEval {
    count_min: Option<i64>,
    count_max: Option<i64>,
    length_gt: Option<i64>,
    length_lt: Option<i64>,
    length_eq: Option<i64>,
}

impl LengthRuleEval {
    pub fn new(rules: &FieldValidator) -> Self {
        Self {
            count_min: rules.repeated_count_min,
            count_max: rules.repeated_count_max,
            length_gt: rules.length_gt,
            length_lt: rules.length_lt,
            length_eq: rules.length_eq,
        }
    }

    pub fn tautology(&self) -> bool {
        self.count_min.is_none()
            && self.count_max.is_none()
            && self.length_gt.is_none()
            && self.length_lt.is_none()
            && self.length_eq.is_none()
    }

    /// Rules on a repeated or map field as a whole.
    pub fn evaluate_collection(&self, len: usize, failed: &mut Vec<Rule>) {
        let len = widen(len);
        if let Some(min) = self.count_min {
            if len < i128::from(min) {
                failed.push(Rule::RepeatedCountMin);
            }
        }
        if let Some(max) = self.count_max {
            if len > i128::from(max) {
                failed.push(Rule::RepeatedCountMax);
            }
        }
        self.check_length(len, failed);
    }

    /// Rules on a singular string or bytes value.
    pub fn evaluate(&self, val: &Value, failed: &mut Vec<Rule>) {
        let len = match val {
            Value::String(s) => s.chars().count(),
            Value::Bytes(b) => b.len(),
            _ => return,
        };
        self.check_length(widen(len), failed);
    }

    fn check_length(&self, len: i128, failed: &mut Vec<Rule>) {
        if let Some(gt) = self.length_gt {
            if len <= i128::from(gt) {
                failed.push(Rule::LengthGt);
            }
        }
        if let Some(lt) = self.length_lt {
            if len >= i128::from(lt) {
                failed.push(Rule::LengthLt);
            }
        }
        if let Some(eq) = self.length_eq {
            if len != i128::from(eq) {
                failed.push(Rule::LengthEq);
            }
        }
    }
}

fn widen(len: usize) -> i128 {
    i128::try_from(len).unwrap_or(i128::MAX)
}
