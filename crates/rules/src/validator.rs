use crate::parser::{ParsedRule, ParsedTerm, Span, Spanned};
use std::fmt;

/// A validated rule expression, ready to be evaluated
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Term(Term),
    And(Vec<Expr>),
    Or(Vec<Expr>),
    Not(Box<Expr>),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Term {
    /// Lower-cased substring tested against the joined label text
    Keyword(String),
    /// Exact tag, compared case-sensitively
    Tag(String),
    /// Exact category, compared case-sensitively
    Category(String),
    /// Exact tag or category, compared case-sensitively
    Label(String),
}

#[derive(Debug, Clone)]
pub struct ValidationError {
    pub span: Span,
    pub kind: ValidationErrorKind,
}

impl ValidationError {
    pub fn new(span: Span, kind: ValidationErrorKind) -> Self {
        Self { span, kind }
    }

    /// Get the byte range of the error in the original input
    pub fn range(&self) -> std::ops::Range<usize> {
        self.span.start..self.span.end
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (at position {}..{})",
            self.kind, self.span.start, self.span.end
        )
    }
}

impl std::error::Error for ValidationError {}

#[derive(Debug, Clone, PartialEq)]
pub enum ValidationErrorKind {
    UnknownField { field: String },
    EmptyValue,
}

impl fmt::Display for ValidationErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationErrorKind::UnknownField { field } => {
                write!(f, "unknown field '{}'", field)
            }
            ValidationErrorKind::EmptyValue => write!(f, "empty value"),
        }
    }
}

pub type ValidationResult<T> = Result<T, ValidationError>;

/// Validate a parsed rule and convert it to an evaluable expression
pub fn validate_rule(rule: &Spanned<ParsedRule>) -> ValidationResult<Expr> {
    let (parsed, _span) = rule;
    match parsed {
        ParsedRule::Term(term) => validate_term(term).map(Expr::Term),
        ParsedRule::And(items) => {
            let validated: Result<Vec<_>, _> = items.iter().map(validate_rule).collect();
            validated.map(Expr::And)
        }
        ParsedRule::Or(items) => {
            let validated: Result<Vec<_>, _> = items.iter().map(validate_rule).collect();
            validated.map(Expr::Or)
        }
        ParsedRule::Not(inner) => validate_rule(inner).map(|e| Expr::Not(Box::new(e))),
    }
}

pub struct FieldDef {
    pub kind: FieldKind,
    pub aliases: &'static [&'static str],
    pub description: &'static str,
}

impl FieldDef {
    /// Find a field definition by any of its aliases
    pub fn find_by_alias(name: &str) -> Option<&'static FieldDef> {
        let name_lower = name.to_lowercase();
        FIELD_DEFINITIONS
            .iter()
            .find(|def| def.aliases.iter().any(|&a| a == name_lower))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    Keyword,
    Tag,
    Category,
    Label,
}

impl FieldKind {
    /// Build the term for a value of this field kind
    pub fn term(&self, value: String) -> Term {
        match self {
            FieldKind::Keyword => Term::Keyword(value.to_lowercase()),
            FieldKind::Tag => Term::Tag(value),
            FieldKind::Category => Term::Category(value),
            FieldKind::Label => Term::Label(value),
        }
    }
}

pub static FIELD_DEFINITIONS: &[FieldDef] = &[
    FieldDef {
        kind: FieldKind::Keyword,
        aliases: &["kw", "key", "keyword"],
        description: "Case-insensitive substring of the joined categories and tags",
    },
    FieldDef {
        kind: FieldKind::Tag,
        aliases: &["t", "tag", "tags"],
        description: "Exact tag",
    },
    FieldDef {
        kind: FieldKind::Category,
        aliases: &["c", "cat", "category", "categories"],
        description: "Exact category",
    },
    FieldDef {
        kind: FieldKind::Label,
        aliases: &["is", "label"],
        description: "Exact tag or category",
    },
];

/// Validate a parsed term and convert it to a semantic term
fn validate_term(term: &ParsedTerm) -> ValidationResult<Term> {
    let (value, value_span) = &term.value;
    let value_string = value.unescaped();

    if value_string.is_empty() {
        return Err(ValidationError::new(
            *value_span,
            ValidationErrorKind::EmptyValue,
        ));
    }

    match &term.field {
        None => Ok(FieldKind::Keyword.term(value_string)),
        Some((field, field_span)) => match FieldDef::find_by_alias(field) {
            Some(def) => Ok(def.kind.term(value_string)),
            None => Err(ValidationError::new(
                *field_span,
                ValidationErrorKind::UnknownField {
                    field: field.clone(),
                },
            )),
        },
    }
}
