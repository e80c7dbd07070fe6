use std::sync::Arc;

use prost_reflect::Value;

use crate::config::EnumValues;

use super::Rule;

pub(crate) struct EnumRuleEval {
    values: Arc<dyn EnumValues>,
}

impl EnumRuleEval {
    pub fn new(values: Arc<dyn EnumValues>) -> Self {
        Self { values }
    }

    pub fn evaluate(&self, val: &Value, failed: &mut Vec<Rule>) {
        // prost stores enum fields as plain i32
        let number = match val {
            Value::EnumNumber(n) | Value::I32(n) => *n,
            _ => return,
        };

        if !self.values.is_valid_enum_value(number) {
            failed.push(Rule::IsInEnum);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use pretty_assertions::assert_eq;
    use prost_reflect::Value;

    use super::{EnumRuleEval, Rule};

    #[test]
    fn unknown_enum_numbers_fail() {
        let eval = EnumRuleEval::new(Arc::new([0, 1, 2]));
        let mut failed = Vec::new();
        eval.evaluate(&Value::EnumNumber(1), &mut failed);
        eval.evaluate(&Value::I32(2), &mut failed);
        assert!(failed.is_empty());

        eval.evaluate(&Value::EnumNumber(7), &mut failed);
        assert_eq!(failed, vec![Rule::IsInEnum]);
    }

    #[test]
    fn non_enum_values_are_skipped() {
        let eval = EnumRuleEval::new(Arc::new(vec![0]));
        let mut failed = Vec::new();
        eval.evaluate(&Value::String("7".to_string()), &mut failed);
        eval.evaluate(&Value::I64(7), &mut failed);
        assert!(failed.is_empty());
    }
}
