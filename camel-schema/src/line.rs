//! Recognisers for the line shapes the converter rewrites.

use prisma_camel_core::{is_identifier_char, is_identifier_start};

use crate::scan::{Token, tokenize};

/// Block-level attributes whose bracketed argument is a list of field names.
const FIELD_LIST_ATTRIBUTES: [&str; 4] = ["index", "unique", "id", "fulltext"];

/// The declared name on a block opener line, e.g. `model user_profile {`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct DeclaredName<'a> {
    /// Everything before the name, keyword included.
    pub prefix: &'a str,
    pub name: &'a str,
    /// Everything after the name: optional brace and optional comment.
    pub suffix: &'a str,
}

impl<'a> DeclaredName<'a> {
    /// Parse `keyword <ws> name [<ws>] ['{'] [<ws>] [// comment]`.
    pub(crate) fn parse(line: &'a str) -> Option<Self> {
        let body = line.trim_start();
        let keyword_len = body.find(char::is_whitespace)?;
        let rest = body[keyword_len..].trim_start();

        let name_len = identifier_len(rest)?;
        let (name, suffix) = rest.split_at(name_len);

        let tail = suffix.trim_start();
        let tail = tail.strip_prefix('{').unwrap_or(tail).trim_start();
        if !(tail.is_empty() || tail.starts_with("//")) {
            return None;
        }

        Some(Self {
            prefix: &line[..line.len() - rest.len()],
            name,
            suffix,
        })
    }
}

/// A field declaration: indentation, field name and the remainder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldLine<'a> {
    pub indent: &'a str,
    pub name: &'a str,
    /// Everything after the name, starting with the separating whitespace.
    pub rest: &'a str,
}

impl<'a> FieldLine<'a> {
    /// Parse `<ws>+ name <ws>+ rest`.
    pub(crate) fn parse(line: &'a str) -> Option<Self> {
        let body = line.trim_start();
        let indent = &line[..line.len() - body.len()];
        if indent.is_empty() {
            return None;
        }

        let name_len = identifier_len(body)?;
        let (name, rest) = body.split_at(name_len);
        if !rest.starts_with(char::is_whitespace) {
            return None;
        }

        Some(Self { indent, name, rest })
    }
}

/// Name of the `@@attribute` a line starts with, ignoring indentation.
pub(crate) fn block_attribute(line: &str) -> Option<&str> {
    match tokenize(line.trim_start()).as_slice() {
        [Token::Punct("@"), Token::Punct("@"), Token::Ident(name), ..] => Some(*name),
        _ => None,
    }
}

/// Whether the line is a `@@map(...)` block attribute.
pub(crate) fn is_block_map(line: &str) -> bool {
    block_attribute(line) == Some("map")
}

/// Whether the line is a multi-field attribute such as `@@index([...])`.
pub(crate) fn is_field_list_attribute(line: &str) -> bool {
    block_attribute(line).is_some_and(|name| FIELD_LIST_ATTRIBUTES.contains(&name))
}

/// Byte length of the identifier at the start of `s`.
fn identifier_len(s: &str) -> Option<usize> {
    if !s.starts_with(is_identifier_start) {
        return None;
    }
    Some(s.find(|c: char| !is_identifier_char(c)).unwrap_or(s.len()))
}
