use std::fmt;

use crate::error::Error;

/// Violation tag used for records that wrap a nested message report.
pub const MESSAGE_VIOLATION: &str = "message";

const INVALID_MESSAGE: &str = "invalid";
const GENERIC_MESSAGE: &str = "one or more items failed validation";

/// A single field that failed validation.
///
/// Either a leaf rule failure or, when [`nested`](Self::nested) is set, the
/// failure of a sub-message or repeated element carrying that element's full
/// report.
#[derive(Debug, Clone, PartialEq)]
pub struct Violation {
    field: String,
    violation: String,
    index: Option<usize>,
    message: String,
    nested: Option<Violations>,
}

impl Violation {
    /// Create a violation of rule `violation` on `field`, with no message yet.
    ///
    /// Reported through [`Violations::add_validation_error`], it receives the
    /// generic message for its rule.
    pub fn new(field: impl Into<String>, violation: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            violation: violation.into(),
            index: None,
            message: String::new(),
            nested: None,
        }
    }

    /// Mark the violation as belonging to element `index` of a repeated field.
    #[must_use]
    pub fn with_index(mut self, index: usize) -> Self {
        self.index = Some(index);
        self
    }

    /// Name of the failing field.
    #[must_use]
    pub fn field(&self) -> &str {
        &self.field
    }

    /// Name of the failed rule, or [`MESSAGE_VIOLATION`] for a nested report.
    #[must_use]
    pub fn violation(&self) -> &str {
        &self.violation
    }

    /// Element index within a repeated field, 0 for singular fields.
    #[must_use]
    pub fn index(&self) -> usize {
        self.index.unwrap_or(0)
    }

    /// Element index, or `None` when the field is not a repeated element.
    #[must_use]
    pub fn element_index(&self) -> Option<usize> {
        self.index
    }

    /// Human-readable description.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The report of the failing sub-message or element, if any.
    #[must_use]
    pub fn nested(&self) -> Option<&Violations> {
        self.nested.as_ref()
    }

    /// The field name with its `[index]` subscript, if any.
    fn path_segment(&self) -> String {
        match self.index {
            Some(index) => format!("{}[{index}]", self.field),
            None => self.field.clone(),
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.field.is_empty() {
            write!(f, "{}: ", self.path_segment())?;
        }
        if self.message.is_empty() {
            write!(f, "[{}]", self.violation)
        } else {
            write!(f, "{}", self.message)
        }
    }
}

/// What a validator hands to [`Violations`] when a field fails.
#[derive(Debug)]
pub enum FailureCause {
    /// Nothing failed; reporting it is a no-op.
    None,
    /// Message used verbatim.
    Text(String),
    /// A prepared record, appended as is apart from its message.
    Violation(Violation),
    /// The report of a sub-message or element.
    Nested(Violations),
    /// Any other failure; its description is used as the message.
    Error(Box<dyn std::error::Error + Send + Sync>),
}

impl From<&str> for FailureCause {
    fn from(message: &str) -> Self {
        Self::Text(message.to_string())
    }
}

impl From<String> for FailureCause {
    fn from(message: String) -> Self {
        Self::Text(message)
    }
}

impl From<Violation> for FailureCause {
    fn from(violation: Violation) -> Self {
        Self::Violation(violation)
    }
}

impl From<Violations> for FailureCause {
    fn from(report: Violations) -> Self {
        Self::Nested(report)
    }
}

impl From<Error> for FailureCause {
    fn from(err: Error) -> Self {
        match err {
            Error::Validation(report) => Self::Nested(report),
            other => Self::Error(Box::new(other)),
        }
    }
}

impl From<Box<dyn std::error::Error + Send + Sync>> for FailureCause {
    fn from(err: Box<dyn std::error::Error + Send + Sync>) -> Self {
        Self::Error(err)
    }
}

impl From<Result<(), Error>> for FailureCause {
    fn from(result: Result<(), Error>) -> Self {
        match result {
            Ok(()) => Self::None,
            Err(err) => err.into(),
        }
    }
}

impl<T: Into<FailureCause>> From<Option<T>> for FailureCause {
    fn from(cause: Option<T>) -> Self {
        cause.map_or(Self::None, Into::into)
    }
}

/// The ordered violations collected while validating one message instance.
///
/// A report is failed iff it is non-empty. Its `Display` is deliberately
/// terse; walk the records, [`leaves`](Self::leaves) or
/// [`to_details`](Self::to_details) for the detail.
#[derive(Debug, Clone, Default, PartialEq, thiserror::Error)]
#[error("bad request")]
pub struct Violations {
    violations: Vec<Violation>,
}

impl Violations {
    /// Create an empty report.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a failure of `field`.
    ///
    /// The message is [`FailureCause::Text`] or the description of
    /// [`FailureCause::Error`] when given, otherwise `"invalid"` for
    /// [`MESSAGE_VIOLATION`] and `"one or more items failed validation"` for
    /// every other rule. [`FailureCause::None`] records nothing; a nested
    /// report is attached even when it is empty.
    pub fn add_validation_error(
        &mut self,
        field: &str,
        violation: &str,
        cause: impl Into<FailureCause>,
    ) {
        self.record(field, violation, None, cause.into());
    }

    /// Record a failure of element `index` of the repeated `field`.
    ///
    /// Same as [`add_validation_error`](Self::add_validation_error), with the
    /// index stamped on the record. A [`FailureCause::Violation`] keeps its
    /// own index.
    pub fn add_validations_error(
        &mut self,
        field: &str,
        violation: &str,
        index: usize,
        cause: impl Into<FailureCause>,
    ) {
        self.record(field, violation, Some(index), cause.into());
    }

    fn record(&mut self, field: &str, violation: &str, index: Option<usize>, cause: FailureCause) {
        let generic = if violation == MESSAGE_VIOLATION {
            INVALID_MESSAGE
        } else {
            GENERIC_MESSAGE
        };

        let (message, nested) = match cause {
            FailureCause::None => return,
            FailureCause::Violation(mut prepared) => {
                prepared.message = generic.to_string();
                self.push(prepared);
                return;
            }
            FailureCause::Nested(report) => (generic.to_string(), Some(report)),
            FailureCause::Text(text) => (text, None),
            FailureCause::Error(err) => (err.to_string(), None),
        };

        self.push(Violation {
            field: field.to_string(),
            violation: violation.to_string(),
            index,
            message,
            nested,
        });
    }

    fn push(&mut self, violation: Violation) {
        tracing::trace!(
            field = %violation.field,
            violation = %violation.violation,
            index = ?violation.index,
            nested = violation.nested.is_some(),
            "recorded validation failure"
        );
        self.violations.push(violation);
    }

    /// Returns true if any failure was recorded.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.violations.is_empty()
    }

    /// Returns true if no failure was recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    /// Number of top-level records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.violations.len()
    }

    /// Iterate over the top-level records in report order.
    pub fn iter(&self) -> std::slice::Iter<'_, Violation> {
        self.violations.iter()
    }

    /// One `Any` per top-level record, for an RPC status detail list.
    ///
    /// `type_url` carries the field name and `value` the violation name.
    /// Nested reports are not flattened.
    #[must_use]
    pub fn to_details(&self) -> Vec<prost_types::Any> {
        self.violations
            .iter()
            .map(|v| prost_types::Any {
                type_url: v.field.clone(),
                value: v.violation.as_bytes().to_vec(),
            })
            .collect()
    }

    /// `Err` carrying this report when it has errors, `Ok` otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] when at least one failure was recorded.
    pub fn into_result(self) -> Result<(), Error> {
        if self.has_errors() {
            Err(Error::Validation(self))
        } else {
            Ok(())
        }
    }

    /// Every leaf record with its full dotted path, depth first.
    ///
    /// A nested record is replaced by the leaves of its report, with the
    /// nesting field (and element index) prepended: `items[2].name`.
    #[must_use]
    pub fn leaves(&self) -> Vec<(String, &Violation)> {
        let mut out = Vec::new();
        self.collect_leaves("", &mut out);
        out
    }

    fn collect_leaves<'a>(&'a self, prefix: &str, out: &mut Vec<(String, &'a Violation)>) {
        for violation in &self.violations {
            let path = join_path(prefix, &violation.path_segment());
            match violation.nested.as_ref() {
                Some(nested) => nested.collect_leaves(&path, out),
                None => out.push((path, violation)),
            }
        }
    }

    /// Multi-line rendering of [`leaves`](Self::leaves).
    #[must_use]
    pub fn report(&self) -> Report<'_> {
        Report(self)
    }
}

fn join_path(prefix: &str, segment: &str) -> String {
    match (prefix.is_empty(), segment.is_empty()) {
        (true, _) => segment.to_string(),
        (false, true) => prefix.to_string(),
        (false, false) => format!("{prefix}.{segment}"),
    }
}

impl<'a> IntoIterator for &'a Violations {
    type Item = &'a Violation;
    type IntoIter = std::slice::Iter<'a, Violation>;

    fn into_iter(self) -> Self::IntoIter {
        self.violations.iter()
    }
}

impl IntoIterator for Violations {
    type Item = Violation;
    type IntoIter = std::vec::IntoIter<Violation>;

    fn into_iter(self) -> Self::IntoIter {
        self.violations.into_iter()
    }
}

/// Display adapter returned by [`Violations::report`].
#[derive(Debug, Clone, Copy)]
pub struct Report<'a>(&'a Violations);

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let leaves = self.0.leaves();
        match leaves.as_slice() {
            [] => Ok(()),
            [(path, leaf)] => write!(f, "validation error: {path}: {}", leaf.message()),
            _ => {
                write!(f, "validation errors:")?;
                for (path, leaf) in &leaves {
                    write!(f, "\n - {path}: {}", leaf.message())?;
                }
                Ok(())
            }
        }
    }
}
