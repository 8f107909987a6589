//! Category rules: a small boolean language over an item's tags and categories.
//!
//! ```text
//! (rap OR hip-hop) AND NOT türk
//! hafta AND (video OR klip)
//! label:Videolar OR tag:"Haftanın Videoları"
//! ```

pub mod eval;
pub mod lexer;
pub mod parser;
pub mod validator;

pub use eval::LabelSet;
pub use lexer::{Lexeme, RuleLexer, Token};
pub use parser::{ParsedRule, Span, Spanned, parse_rule, parser};
pub use validator::{
    Expr, FIELD_DEFINITIONS, FieldDef, FieldKind, Term, ValidationError, ValidationErrorKind,
    validate_rule,
};

use std::fmt;
use std::str::FromStr;

#[derive(Debug, thiserror::Error)]
pub enum RuleError {
    #[error("syntax error in rule '{rule}': {message}")]
    Syntax { rule: String, message: String },

    #[error("invalid rule '{rule}': {error}")]
    Invalid {
        rule: String,
        error: ValidationError,
    },
}

/// A compiled rule together with the text it was compiled from
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Deserialize, serde::Serialize),
    serde(try_from = "String", into = "String")
)]
pub struct Rule {
    text: String,
    expr: Expr,
}

impl Rule {
    pub fn compile(text: &str) -> Result<Self, RuleError> {
        let parsed = parse_rule(text).map_err(|errors| RuleError::Syntax {
            rule: text.to_string(),
            message: errors
                .iter()
                .map(|e| e.to_string())
                .collect::<Vec<_>>()
                .join("; "),
        })?;

        let expr = validate_rule(&parsed).map_err(|error| RuleError::Invalid {
            rule: text.to_string(),
            error,
        })?;

        Ok(Self {
            text: text.to_string(),
            expr,
        })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn expr(&self) -> &Expr {
        &self.expr
    }

    pub fn matches(&self, labels: &LabelSet<'_>) -> bool {
        self.expr.matches(labels)
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl FromStr for Rule {
    type Err = RuleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::compile(s)
    }
}

impl TryFrom<String> for Rule {
    type Error = RuleError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::compile(&value)
    }
}

impl From<Rule> for String {
    fn from(rule: Rule) -> Self {
        rule.text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compile_keeps_text() {
        let rule = Rule::compile("türk AND rap").unwrap();
        assert_eq!(rule.text(), "türk AND rap");
        assert_eq!(rule.to_string(), "türk AND rap");
        assert!(matches!(rule.expr(), Expr::And(v) if v.len() == 2));
    }

    #[test]
    fn test_syntax_error() {
        let err = Rule::compile("(rap OR").unwrap_err();
        assert!(matches!(err, RuleError::Syntax { .. }));
        assert!(err.to_string().contains("(rap OR"));
    }

    #[test]
    fn test_invalid_field() {
        let err = "genre:rap".parse::<Rule>().unwrap_err();
        let RuleError::Invalid { error, .. } = &err else {
            panic!("Expected Invalid");
        };
        assert!(matches!(error.kind, ValidationErrorKind::UnknownField { .. }));
        assert!(err.to_string().contains("unknown field 'genre'"));
    }

    #[test]
    fn test_string_round_trip() {
        let rule = Rule::try_from("hafta AND (video OR klip)".to_string()).unwrap();
        let text: String = rule.into();
        assert_eq!(text, "hafta AND (video OR klip)");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_deserialize_validates() {
        let rule: Rule = serde_json::from_str(r#""rap OR hip-hop""#).unwrap();
        assert!(matches!(rule.expr(), Expr::Or(_)));

        let err = serde_json::from_str::<Rule>(r#""mood:chill""#);
        assert!(err.is_err());
    }
}
