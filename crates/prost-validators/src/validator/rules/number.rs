use prost_reflect::Value;

use prost_validators_types::FieldValidator;

use super::Rule;

#[derive(Default)]
pub(crate) struct NumberRuleEval {
    int_gt: Option<i64>,
    int_lt: Option<i64>,
    float_gt: Option<f64>,
    float_lt: Option<f64>,
    float_gte: Option<f64>,
    float_lte: Option<f64>,
    epsilon: f64,
}

impl NumberRuleEval {
    pub fn new(rules: &FieldValidator) -> Self {
        Self {
            int_gt: rules.int_gt,
            int_lt: rules.int_lt,
            float_gt: rules.float_gt,
            float_lt: rules.float_lt,
            float_gte: rules.float_gte,
            float_lte: rules.float_lte,
            epsilon: rules.float_epsilon.map_or(0.0, f64::abs),
        }
    }

    pub fn tautology(&self) -> bool {
        self.int_gt.is_none()
            && self.int_lt.is_none()
            && self.float_gt.is_none()
            && self.float_lt.is_none()
            && self.float_gte.is_none()
            && self.float_lte.is_none()
    }

    pub fn evaluate(&self, val: &Value, failed: &mut Vec<Rule>) {
        if let Some(v) = as_integer(val) {
            self.check_int(v, failed);
        } else if let Some(v) = as_float(val) {
            self.check_float(v, failed);
        }
    }

    fn check_int(&self, v: i128, failed: &mut Vec<Rule>) {
        if let Some(gt) = self.int_gt {
            if v <= i128::from(gt) {
                failed.push(Rule::IntGt);
            }
        }
        if let Some(lt) = self.int_lt {
            if v >= i128::from(lt) {
                failed.push(Rule::IntLt);
            }
        }
    }

    // Comparisons are written positively so NaN fails every bound.
    #[allow(clippy::neg_cmp_op_on_partial_ord)]
    fn check_float(&self, v: f64, failed: &mut Vec<Rule>) {
        let e = self.epsilon;
        if let Some(gt) = self.float_gt {
            if !(v > gt - e) {
                failed.push(Rule::FloatGt);
            }
        }
        if let Some(lt) = self.float_lt {
            if !(v < lt + e) {
                failed.push(Rule::FloatLt);
            }
        }
        if let Some(gte) = self.float_gte {
            if !(v >= gte - e) {
                failed.push(Rule::FloatGte);
            }
        }
        if let Some(lte) = self.float_lte {
            if !(v <= lte + e) {
                failed.push(Rule::FloatLte);
            }
        }
    }
}

/// Every protobuf integer width, widened so `u64` never wraps.
fn as_integer(val: &Value) -> Option<i128> {
    match val {
        Value::I32(v) => Some(i128::from(*v)),
        Value::I64(v) => Some(i128::from(*v)),
        Value::U32(v) => Some(i128::from(*v)),
        Value::U64(v) => Some(i128::from(*v)),
        _ => None,
    }
}

fn as_float(val: &Value) -> Option<f64> {
    match val {
        Value::F32(v) => Some(f64::from(*v)),
        Value::F64(v) => Some(*v),
        _ => None,
    }
}
