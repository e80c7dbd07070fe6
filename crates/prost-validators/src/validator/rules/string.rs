use std::sync::Arc;

use prost_reflect::Value;
use regex::Regex;

use prost_validators_types::FieldValidator;

use crate::config::{PatternMatcher, RuleConfig, UuidParser};
use crate::error::CompilationError;

use super::Rule;

/// Highest UUID version a `uuid_ver` rule may name.
const MAX_UUID_VERSION: u8 = 5;

#[derive(Default)]
pub(crate) struct StringRuleEval {
    pattern: Option<Pattern>,
    not_empty: bool,
    uuid: Option<UuidCheck>,
}

enum Pattern {
    Compiled(Regex),
    External {
        source: String,
        matcher: Arc<dyn PatternMatcher>,
    },
}

impl Pattern {
    fn is_match(&self, s: &str) -> bool {
        match self {
            Self::Compiled(re) => re.is_match(s),
            Self::External { source, matcher } => matcher.matches(source, s),
        }
    }
}

struct UuidCheck {
    /// 0 accepts every RFC 4122 version.
    version: u8,
    parser: Arc<dyn UuidParser>,
}

impl UuidCheck {
    fn accepts(&self, s: &str) -> bool {
        match self.parser.parse_uuid(s) {
            Some(found) if self.version == 0 => (1..=MAX_UUID_VERSION).contains(&found),
            Some(found) => found == self.version,
            None => false,
        }
    }
}

impl StringRuleEval {
    pub fn new(rules: &FieldValidator, cfg: &RuleConfig) -> Result<Self, CompilationError> {
        let pattern = match (rules.regex.as_deref(), cfg.pattern_matcher.as_ref()) {
            (None, _) => None,
            (Some(source), Some(matcher)) => Some(Pattern::External {
                source: source.to_string(),
                matcher: Arc::clone(matcher),
            }),
            (Some(source), None) => {
                Some(Pattern::Compiled(Regex::new(source).map_err(|e| {
                    CompilationError {
                        cause: format!("invalid regex pattern: {e}"),
                    }
                })?))
            }
        };

        let uuid = rules
            .uuid_ver
            .map(|version| {
                u8::try_from(version)
                    .ok()
                    .filter(|v| *v <= MAX_UUID_VERSION)
                    .map(|version| UuidCheck {
                        version,
                        parser: Arc::clone(&cfg.uuid_parser),
                    })
                    .ok_or_else(|| CompilationError {
                        cause: format!("uuid_ver must be between 0 and 5, got {version}"),
                    })
            })
            .transpose()?;

        Ok(Self {
            pattern,
            not_empty: rules.string_not_empty.unwrap_or(false),
            uuid,
        })
    }

    pub fn tautology(&self) -> bool {
        self.pattern.is_none() && !self.not_empty && self.uuid.is_none()
    }

    pub fn evaluate(&self, val: &Value, failed: &mut Vec<Rule>) {
        let Some(s) = val.as_str() else {
            return;
        };

        if let Some(ref pattern) = self.pattern {
            if !pattern.is_match(s) {
                failed.push(Rule::Regex);
            }
        }

        if self.not_empty && s.is_empty() {
            failed.push(Rule::StringNotEmpty);
        }

        if let Some(ref uuid) = self.uuid {
            if !uuid.accepts(s) {
                failed.push(Rule::UuidVer);
            }
        }
    }
}
