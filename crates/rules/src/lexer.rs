use logos::{Lexer, Logos};
use std::fmt;
use std::ops::Range;

#[derive(Logos, Debug, Clone, PartialEq, Eq, Hash)]
#[logos(skip r"[ \t\n\f]+")]
pub enum Token {
    #[token("AND")]
    #[token("&&")]
    And,

    #[token("OR")]
    #[token("||")]
    Or,

    #[token("NOT")]
    #[token("!")]
    Not,

    #[token(":")]
    Colon,

    #[token("(")]
    LParen,

    #[token(")")]
    RParen,

    /// Contents of a `"..."` literal, escapes left in place
    #[regex(r#""([^"\\]|\\.)*""#, |lex| unquote(lex.slice()))]
    QuotedText(String),

    #[regex(r#"[^ \t\n\f:"()!&|]+"#, |lex| lex.slice().to_owned())]
    Text(String),
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            Token::And => "AND",
            Token::Or => "OR",
            Token::Not => "NOT",
            Token::Colon => ":",
            Token::LParen => "(",
            Token::RParen => ")",
            Token::QuotedText(text) => return write!(f, "\"{text}\""),
            Token::Text(text) => text,
        };
        f.write_str(symbol)
    }
}

fn unquote(literal: &str) -> String {
    let inner = literal.strip_prefix('"').unwrap_or(literal);
    inner.strip_suffix('"').unwrap_or(inner).to_owned()
}

fn is_blank(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\x0C')
}

/// Length of the field value at the start of `rest`.
///
/// `None` when no value follows the colon. `Err` covers an unterminated
/// quote, which swallows the rest of the input.
fn scan_value(rest: &str) -> Option<Result<usize, usize>> {
    let first = rest.chars().next()?;
    if is_blank(first) || first == '(' || first == ')' {
        return None;
    }

    if first != '"' {
        let len = rest
            .find(|c: char| is_blank(c) || matches!(c, '"' | '(' | ')'))
            .unwrap_or(rest.len());
        return Some(Ok(len));
    }

    let mut escaped = false;
    for (offset, c) in rest.char_indices().skip(1) {
        match c {
            _ if escaped => escaped = false,
            '\\' => escaped = true,
            '"' => return Some(Ok(offset + 1)),
            _ => {}
        }
    }
    Some(Err(rest.len()))
}

/// A token with the byte range it was read from. `token` is `Err` for input
/// outside the rule language.
#[derive(Debug, Clone, PartialEq)]
pub struct Lexeme {
    pub token: Result<Token, ()>,
    pub span: Range<usize>,
}

/// Splits a rule into [`Lexeme`]s.
///
/// Whatever directly follows a `:` is taken as the field value, so operator
/// characters lose their meaning there: `tag:!draft` and `label:AND` are
/// both plain values.
pub struct RuleLexer<'source> {
    inner: Lexer<'source, Token>,
    value_next: bool,
}

impl<'source> RuleLexer<'source> {
    pub fn new(source: &'source str) -> Self {
        Self {
            inner: Token::lexer(source),
            value_next: false,
        }
    }

    pub fn source(&self) -> &'source str {
        self.inner.source()
    }

    fn field_value(&mut self) -> Option<Lexeme> {
        let rest = self.inner.remainder();
        let start = self.inner.span().end;

        let (len, token) = match scan_value(rest)? {
            Ok(len) if rest.starts_with('"') => (len, Ok(Token::QuotedText(unquote(&rest[..len])))),
            Ok(len) => (len, Ok(Token::Text(rest[..len].to_owned()))),
            Err(len) => (len, Err(())),
        };
        self.inner.bump(len);

        Some(Lexeme {
            token,
            span: start..start + len,
        })
    }
}

impl Iterator for RuleLexer<'_> {
    type Item = Lexeme;

    fn next(&mut self) -> Option<Lexeme> {
        if std::mem::take(&mut self.value_next) {
            if let Some(value) = self.field_value() {
                return Some(value);
            }
        }

        let token = self.inner.next()?;
        self.value_next = token == Ok(Token::Colon);
        Some(Lexeme {
            token,
            span: self.inner.span(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn kinds(input: &str) -> Vec<Result<Token, ()>> {
        RuleLexer::new(input).map(|lexeme| lexeme.token).collect()
    }

    fn text(s: &str) -> Result<Token, ()> {
        Ok(Token::Text(s.to_owned()))
    }

    fn quoted(s: &str) -> Result<Token, ()> {
        Ok(Token::QuotedText(s.to_owned()))
    }

    #[rstest]
    #[case::words("türk AND rap", vec![text("türk"), Ok(Token::And), text("rap")])]
    #[case::hyphen("hip-hop", vec![text("hip-hop")])]
    #[case::keyword_prefix("ANDROID", vec![text("ANDROID")])]
    #[case::quoted(r#""hip hop""#, vec![quoted("hip hop")])]
    #[case::symbols(
        "(rap || hip-hop) && !türk",
        vec![
            Ok(Token::LParen), text("rap"), Ok(Token::Or), text("hip-hop"), Ok(Token::RParen),
            Ok(Token::And), Ok(Token::Not), text("türk"),
        ]
    )]
    fn test_tokens(#[case] input: &str, #[case] expected: Vec<Result<Token, ()>>) {
        assert_eq!(kinds(input), expected);
    }

    #[rstest]
    #[case::quoted(r#"tag:"Türk Rap""#, quoted("Türk Rap"))]
    #[case::bang("tag:!draft", text("!draft"))]
    #[case::operator_word("label:AND", text("AND"))]
    #[case::ampersand("cat:R&B", text("R&B"))]
    #[case::escaped_quote(r#"tag:"a \"b\"""#, quoted(r#"a \"b\""#))]
    fn test_field_values_are_verbatim(#[case] input: &str, #[case] value: Result<Token, ()>) {
        let tokens = kinds(input);
        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[1], Ok(Token::Colon));
        assert_eq!(tokens[2], value);
    }

    #[test]
    fn test_value_ends_at_paren() {
        assert_eq!(
            kinds("(tag:rap)"),
            vec![
                Ok(Token::LParen),
                text("tag"),
                Ok(Token::Colon),
                text("rap"),
                Ok(Token::RParen),
            ]
        );
    }

    #[test]
    fn test_colon_without_value() {
        assert_eq!(kinds("tag: rap"), vec![text("tag"), Ok(Token::Colon), text("rap")]);
        assert_eq!(kinds("tag:"), vec![text("tag"), Ok(Token::Colon)]);
    }

    #[test]
    fn test_spans_are_byte_offsets() {
        let spans: Vec<_> = RuleLexer::new("türk OR cat:news")
            .map(|lexeme| lexeme.span)
            .collect();
        assert_eq!(spans, vec![0..5, 6..8, 9..12, 12..13, 13..17]);
    }

    #[test]
    fn test_spans_slice_back_to_source() {
        let input = r#"cat:news || "hip hop" && NOT tag:!x"#;
        let lexer = RuleLexer::new(input);
        assert_eq!(lexer.source(), input);

        for Lexeme { token, span } in lexer {
            let slice = &input[span];
            match token.unwrap() {
                Token::Text(s) => assert_eq!(slice, s),
                Token::QuotedText(s) => assert_eq!(slice, format!("\"{s}\"")),
                other => assert!(
                    slice == other.to_string() || matches!(slice, "||" | "&&" | "!"),
                    "{slice} vs {other}"
                ),
            }
        }
    }

    #[test]
    fn test_stray_ampersand_is_error() {
        let lexemes: Vec<_> = RuleLexer::new("rap & hip-hop").collect();
        let errors: Vec<_> = lexemes.iter().filter(|l| l.token.is_err()).collect();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].span, 4..5);
    }

    #[rstest]
    #[case(r#""open"#)]
    #[case(r#"tag:"open"#)]
    fn test_unterminated_quote_is_error(#[case] input: &str) {
        assert!(kinds(input).iter().any(Result::is_err));
    }

    #[test]
    fn test_display() {
        assert_eq!(Token::QuotedText("a b".into()).to_string(), "\"a b\"");
        assert_eq!(Token::Not.to_string(), "NOT");
        assert_eq!(Token::Text("rap".into()).to_string(), "rap");
    }
}
