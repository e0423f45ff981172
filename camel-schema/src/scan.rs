//! Minimal tokenizer for the attribute-bearing tail of a schema line.
//!
//! Splits text into identifiers, string literals, a trailing `//` comment and
//! everything else, so rewriting can touch identifiers only and copy literal
//! and comment regions verbatim.

use prisma_camel_core::{is_identifier_char, is_identifier_start};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Token<'a> {
    /// An identifier such as `user_id`, `String` or `relation`.
    Ident(&'a str),
    /// A double-quoted string literal, quotes included.
    Str(&'a str),
    /// A `//` comment running to the end of the text.
    Comment(&'a str),
    /// A run of whitespace.
    Space(&'a str),
    /// A number, or any other word starting with a digit.
    Number(&'a str),
    /// A single punctuation character.
    Punct(&'a str),
}

impl<'a> Token<'a> {
    /// The source text of the token.
    pub(crate) fn text(self) -> &'a str {
        match self {
            Self::Ident(s)
            | Self::Str(s)
            | Self::Comment(s)
            | Self::Space(s)
            | Self::Number(s)
            | Self::Punct(s) => s,
        }
    }
}

/// Split `src` into tokens. Concatenating the token texts yields `src`.
pub(crate) fn tokenize(src: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut pos = 0;

    while let Some(c) = src[pos..].chars().next() {
        let rest = &src[pos..];
        let len = if c == '"' {
            let len = string_len(rest);
            tokens.push(Token::Str(&rest[..len]));
            len
        } else if rest.starts_with("//") {
            tokens.push(Token::Comment(rest));
            rest.len()
        } else if c.is_whitespace() {
            let len = run_len(rest, char::is_whitespace);
            tokens.push(Token::Space(&rest[..len]));
            len
        } else if is_identifier_start(c) {
            let len = run_len(rest, is_identifier_char);
            tokens.push(Token::Ident(&rest[..len]));
            len
        } else if c.is_ascii_digit() {
            let len = run_len(rest, is_identifier_char);
            tokens.push(Token::Number(&rest[..len]));
            len
        } else {
            let len = c.len_utf8();
            tokens.push(Token::Punct(&rest[..len]));
            len
        };
        pos += len;
    }

    tokens
}

/// Byte length of the leading run of characters matching `pred`.
fn run_len(s: &str, pred: impl Fn(char) -> bool) -> usize {
    s.find(|c: char| !pred(c)).unwrap_or(s.len())
}

/// Byte length of the string literal at the start of `s` (which begins with `"`).
///
/// An unterminated literal runs to the end of the text.
fn string_len(s: &str) -> usize {
    let mut escaped = false;
    for (i, c) in s.char_indices().skip(1) {
        if escaped {
            escaped = false;
            continue;
        }
        match c {
            '\\' => escaped = true,
            '"' => return i + 1,
            _ => {}
        }
    }
    s.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(src: &str) -> Vec<&str> {
        tokenize(src).into_iter().map(Token::text).collect()
    }

    #[test]
    fn test_tokenize_field_tail() {
        let tokens = tokenize(" String @map(\"user_name\")");
        assert_eq!(
            tokens,
            vec![
                Token::Space(" "),
                Token::Ident("String"),
                Token::Space(" "),
                Token::Punct("@"),
                Token::Ident("map"),
                Token::Punct("("),
                Token::Str("\"user_name\""),
                Token::Punct(")"),
            ]
        );
    }

    #[test]
    fn test_tokenize_comment_swallows_rest() {
        let tokens = tokenize(" Int // user_id \"quoted\"");
        assert_eq!(tokens.last(), Some(&Token::Comment("// user_id \"quoted\"")));
        assert_eq!(tokens.len(), 4);
    }

    #[test]
    fn test_tokenize_slash_inside_string_is_not_comment() {
        let tokens = tokenize("@default(\"http://x\")");
        assert!(tokens.contains(&Token::Str("\"http://x\"")));
        assert!(!tokens.iter().any(|t| matches!(t, Token::Comment(_))));
    }

    #[test]
    fn test_tokenize_escaped_quote() {
        let tokens = tokenize(r#""a\"b" c"#);
        assert_eq!(tokens[0], Token::Str(r#""a\"b""#));
        assert_eq!(tokens[2], Token::Ident("c"));
    }

    #[test]
    fn test_tokenize_unterminated_string() {
        assert_eq!(tokenize("\"open"), vec![Token::Str("\"open")]);
    }

    #[test]
    fn test_tokenize_number_is_not_identifier() {
        assert_eq!(tokenize("@db.VarChar(255)")[5], Token::Number("255"));
        assert_eq!(tokenize("1st_place"), vec![Token::Number("1st_place")]);
    }

    #[test]
    fn test_tokenize_round_trips_text() {
        let src = "  user_info UserInfo? @relation(fields: [a_b], map: \"fk\") // 댓글";
        assert_eq!(texts(src).concat(), src);
    }
}
