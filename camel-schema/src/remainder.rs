//! Rewriting of identifiers in the tail of a schema line.

use prisma_camel_core::{is_snake_case, to_camel_case, to_pascal_case};

use crate::{
    convert::ChangeKind,
    scan::{Token, tokenize},
};

/// Built-in scalar types. Any other capitalized field type names a model or type.
const SCALAR_TYPES: [&str; 10] = [
    "String",
    "Boolean",
    "Int",
    "BigInt",
    "Float",
    "Decimal",
    "DateTime",
    "Json",
    "Bytes",
    "Unsupported",
];

/// An identifier rewritten while converting a line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Rename {
    pub kind: ChangeKind,
    pub from: String,
    pub to: String,
}

/// The converted remainder of a field declaration (everything after the name).
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Remainder<'a> {
    /// Converted text before any trailing comment.
    body: String,
    /// Trailing `//` comment, verbatim.
    comment: Option<&'a str>,
    /// The field type after conversion (e.g., "UserProfile").
    type_name: Option<String>,
    has_map: bool,
    pub renames: Vec<Rename>,
}

impl<'a> Remainder<'a> {
    /// Convert the identifiers in a field remainder.
    ///
    /// The first identifier is the type position: a snake_case type becomes
    /// PascalCase. Later snake_case identifiers (relation field lists, default
    /// values) become camelCase. Attribute names, string literals and the
    /// trailing comment are never touched, so `@map("...")` arguments and
    /// `map: "..."` inside `@relation(...)` keep their database names.
    pub(crate) fn rewrite(rest: &'a str) -> Self {
        let mut remainder = Self {
            body: String::with_capacity(rest.len()),
            comment: None,
            type_name: None,
            has_map: false,
            renames: Vec::new(),
        };

        let tokens = tokenize(rest);
        let mut expecting_type = true;
        for (i, token) in tokens.iter().enumerate() {
            match *token {
                Token::Ident(ident) => {
                    let attribute = is_attribute_name(&tokens[..i]);
                    if attribute && ident == "map" && !is_block_attribute(&tokens[..i]) {
                        remainder.has_map = true;
                    }

                    let converted = if attribute {
                        ident.to_string()
                    } else if expecting_type {
                        let converted = remainder.convert(ident, ChangeKind::TypeReference);
                        remainder.type_name = Some(converted.clone());
                        converted
                    } else {
                        remainder.convert(ident, ChangeKind::FieldReference)
                    };
                    expecting_type = false;
                    remainder.body.push_str(&converted);
                }
                Token::Comment(comment) => remainder.comment = Some(comment),
                Token::Str(text)
                | Token::Space(text)
                | Token::Number(text)
                | Token::Punct(text) => remainder.body.push_str(text),
            }
        }

        remainder
    }

    /// Whether the remainder already carries a field-level `@map(...)`.
    pub(crate) fn has_map(&self) -> bool {
        self.has_map
    }

    /// Whether the field type names another model or type rather than a scalar.
    pub(crate) fn is_relation(&self) -> bool {
        self.type_name.as_deref().is_some_and(|ty| {
            ty.starts_with(|c: char| c.is_ascii_uppercase()) && !SCALAR_TYPES.contains(&ty)
        })
    }

    /// The converted text, comment included.
    pub(crate) fn into_text(self) -> String {
        match self.comment {
            Some(comment) => self.body + comment,
            None => self.body,
        }
    }

    /// The converted text with `@map("column")` appended after the last
    /// attribute and before any trailing comment.
    pub(crate) fn into_text_with_map(self, column: &str) -> String {
        let mut text = format!("{} {}", self.body.trim_end(), map_attribute(column));
        if let Some(comment) = self.comment {
            text.push(' ');
            text.push_str(comment.trim_end());
        }
        text
    }

    fn convert(&mut self, ident: &str, kind: ChangeKind) -> String {
        if !is_snake_case(ident) {
            return ident.to_string();
        }
        let converted = match kind {
            ChangeKind::TypeReference => to_pascal_case(ident),
            _ => to_camel_case(ident),
        };
        self.renames.push(Rename {
            kind,
            from: ident.to_string(),
            to: converted.clone(),
        });
        converted
    }
}

/// Convert the field names inside the bracketed list of a `@@index([...])`,
/// `@@unique([...])`, `@@id([...])` or `@@fulltext([...])` line.
pub(crate) fn rewrite_field_list(line: &str) -> (String, Vec<Rename>) {
    let tokens = tokenize(line);
    let mut text = String::with_capacity(line.len());
    let mut renames = Vec::new();
    let mut depth = 0usize;

    for (i, token) in tokens.iter().enumerate() {
        match *token {
            Token::Punct("[") => depth += 1,
            Token::Punct("]") => depth = depth.saturating_sub(1),
            Token::Ident(ident)
                if depth > 0 && is_snake_case(ident) && !is_attribute_name(&tokens[..i]) =>
            {
                let converted = to_camel_case(ident);
                text.push_str(&converted);
                renames.push(Rename {
                    kind: ChangeKind::FieldReference,
                    from: ident.to_string(),
                    to: converted,
                });
                continue;
            }
            _ => {}
        }
        text.push_str(token.text());
    }

    (text, renames)
}

/// The `@map("...")` attribute recording a column name.
pub(crate) fn map_attribute(name: &str) -> String {
    format!("@map(\"{name}\")")
}

/// The `@@map("...")` attribute recording a table name.
pub(crate) fn block_map_attribute(name: &str) -> String {
    format!("@@map(\"{name}\")")
}

/// Whether the identifier following `preceding` names an attribute
/// (`@id`, `@@index`, or the `VarChar` in `@db.VarChar`).
fn is_attribute_name(preceding: &[Token<'_>]) -> bool {
    matches!(preceding.last(), Some(Token::Punct("@" | ".")))
}

fn is_block_attribute(preceding: &[Token<'_>]) -> bool {
    matches!(preceding, [.., Token::Punct("@"), Token::Punct("@")])
}
