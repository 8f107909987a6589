use chumsky::input::{Stream, ValueInput};
use chumsky::prelude::*;

use crate::lexer::{Lexeme, RuleLexer, Token};

pub type Span = SimpleSpan;
pub type Spanned<T> = (T, Span);

#[derive(Debug, Clone, PartialEq)]
pub enum ParsedRule {
    /// A single test: `field:value` or just `value`
    Term(ParsedTerm),

    /// Logical And
    And(Vec<Spanned<ParsedRule>>),

    /// Logical Or
    Or(Vec<Spanned<ParsedRule>>),

    /// Logical Not
    Not(Box<Spanned<ParsedRule>>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParsedTerm {
    pub field: Option<Spanned<String>>,
    pub value: Spanned<ParsedTermValue>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ParsedTermValue {
    /// Plain text e.g. `rap`
    Text(String),

    /// Quoted text, without the quotes e.g. `hip hop`
    QuotedText(String),
}

impl ParsedTermValue {
    pub fn raw_str(&self) -> &str {
        match self {
            ParsedTermValue::Text(s) => s,
            ParsedTermValue::QuotedText(s) => s,
        }
    }

    /// The value with escaped quotes resolved for QuotedText, e.g. `a\"b` -> `a"b`.
    pub fn unescaped(&self) -> String {
        match self {
            ParsedTermValue::Text(s) => s.clone(),
            ParsedTermValue::QuotedText(s) => s.replace(r#"\""#, r#"""#),
        }
    }
}

/// Binary connective, folded left into a flat list
#[derive(Debug, Clone, Copy)]
enum Junction {
    All,
    Any,
}

impl Junction {
    fn join(self, lhs: Spanned<ParsedRule>, rhs: Spanned<ParsedRule>) -> Spanned<ParsedRule> {
        let span = (lhs.1.start..rhs.1.end).into();
        let rule = match (self, lhs) {
            (Junction::All, (ParsedRule::And(mut parts), _)) => {
                parts.push(rhs);
                ParsedRule::And(parts)
            }
            (Junction::Any, (ParsedRule::Or(mut parts), _)) => {
                parts.push(rhs);
                ParsedRule::Or(parts)
            }
            (Junction::All, lhs) => ParsedRule::And(vec![lhs, rhs]),
            (Junction::Any, lhs) => ParsedRule::Or(vec![lhs, rhs]),
        };
        (rule, span)
    }
}

/// Rule grammar, loosest binding first:
///
/// ```text
/// rule  := all (OR all)*
/// all   := neg (AND? neg)*
/// neg   := NOT* atom
/// atom  := term | '(' rule ')'
/// term  := (Text ':')? (Text | QuotedText)
/// ```
///
/// Adjacent terms without an operator are joined with AND.
pub fn parser<'tokens, I>()
-> impl Parser<'tokens, I, Spanned<ParsedRule>, extra::Err<Rich<'tokens, Token>>>
where
    I: ValueInput<'tokens, Token = Token, Span = SimpleSpan>,
{
    recursive(|rule| {
        let field = select! { Token::Text(name) => name }
            .map_with(|name, e| (name, e.span()))
            .then_ignore(just(Token::Colon));

        let value = select! {
            Token::Text(text) => ParsedTermValue::Text(text),
            Token::QuotedText(text) => ParsedTermValue::QuotedText(text),
        }
        .map_with(|value, e| (value, e.span()));

        let term = field
            .or_not()
            .then(value)
            .map_with(|(field, value), e| (ParsedRule::Term(ParsedTerm { field, value }), e.span()));

        let atom = term.or(rule.delimited_by(just(Token::LParen), just(Token::RParen)));

        let neg = just(Token::Not)
            .map_with(|_, e| e.span())
            .repeated()
            .foldr(atom, |not: Span, inner: Spanned<ParsedRule>| {
                let span = (not.start..inner.1.end).into();
                (ParsedRule::Not(Box::new(inner)), span)
            });

        let all = neg.clone().foldl(
            just(Token::And).or_not().ignore_then(neg).repeated(),
            |lhs, rhs| Junction::All.join(lhs, rhs),
        );

        all.clone().foldl(
            just(Token::Or).ignore_then(all).repeated(),
            |lhs, rhs| Junction::Any.join(lhs, rhs),
        )
    })
}

/// Lex and parse a rule string.
///
/// Input the lexer rejects is reported as custom errors at its span and
/// never reaches the parser.
pub fn parse_rule(input: &str) -> Result<Spanned<ParsedRule>, Vec<Rich<'_, Token>>> {
    let (tokens, rejected): (Vec<_>, Vec<_>) =
        RuleLexer::new(input).partition(|lexeme| lexeme.token.is_ok());

    if !rejected.is_empty() {
        return Err(rejected
            .into_iter()
            .map(|lexeme| {
                let snippet = &input[lexeme.span.clone()];
                Rich::custom(
                    Span::from(lexeme.span),
                    format!("unrecognized input '{snippet}'"),
                )
            })
            .collect());
    }

    let tokens = tokens
        .into_iter()
        .filter_map(|Lexeme { token, span }| token.ok().map(|t| (t, Span::from(span))));
    let eoi: Span = (input.len()..input.len()).into();

    parser()
        .parse(Stream::from_iter(tokens).map(eoi, |(t, s): (Token, Span)| (t, s)))
        .into_result()
}
