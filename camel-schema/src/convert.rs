//! Single-pass schema conversion.

use std::fmt;

use prisma_camel_core::{is_snake_case, to_camel_case};

use crate::{
    block::Block,
    line::{DeclaredName, FieldLine, is_block_map, is_field_list_attribute},
    remainder::{Remainder, Rename, block_map_attribute, map_attribute, rewrite_field_list},
};

/// Kind of rewrite recorded in a [`Change`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeKind {
    /// Model name renamed to PascalCase.
    Model,
    /// Enum name renamed to camelCase.
    Enum,
    /// Composite type name renamed to camelCase.
    Type,
    /// Field name renamed to camelCase.
    Field,
    /// Field type renamed to PascalCase.
    TypeReference,
    /// Field name inside an attribute argument renamed to camelCase.
    FieldReference,
    /// `@map("...")` appended to a field.
    FieldMap,
    /// `@@map("...")` inserted before a model's closing brace.
    ModelMap,
}

impl ChangeKind {
    fn from_block(block: Block) -> Option<Self> {
        match block {
            Block::Model => Some(Self::Model),
            Block::Enum => Some(Self::Enum),
            Block::Type => Some(Self::Type),
            Block::TopLevel | Block::Generator | Block::Datasource => None,
        }
    }
}

impl fmt::Display for ChangeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Model => "model",
            Self::Enum => "enum",
            Self::Type => "type",
            Self::Field => "field",
            Self::TypeReference => "type reference",
            Self::FieldReference => "field reference",
            Self::FieldMap => "field map",
            Self::ModelMap => "model map",
        };
        f.write_str(name)
    }
}

/// A single rewrite made by the converter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Change {
    /// 1-based line number in the input.
    pub line: usize,
    pub kind: ChangeKind,
    /// The original identifier.
    pub from: String,
    /// The new identifier, or the inserted attribute for map kinds.
    pub to: String,
}

impl fmt::Display for Change {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            ChangeKind::FieldMap | ChangeKind::ModelMap => {
                write!(f, "line {}: added {}", self.line, self.to)
            }
            _ => write!(
                f,
                "line {}: {} {} -> {}",
                self.line, self.kind, self.from, self.to
            ),
        }
    }
}

/// Output of a conversion: the rewritten schema and what changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    pub output: String,
    pub changes: Vec<Change>,
    changed: bool,
}

impl Conversion {
    /// Whether the output differs from the input.
    pub fn is_changed(&self) -> bool {
        self.changed
    }
}

/// Convert a schema from snake_case to camelCase, returning the new text.
pub fn convert(schema: &str) -> String {
    convert_with_changes(schema).output
}

/// Convert a schema and report every rewrite made.
///
/// Lines are split on `\n`; a trailing `\r` is kept so CRLF files stay CRLF.
/// Lines that match no special shape are copied unchanged.
pub fn convert_with_changes(schema: &str) -> Conversion {
    let mut converter = Converter::default();
    for (index, raw) in schema.split('\n').enumerate() {
        converter.push_line(index + 1, raw);
    }

    let output = converter.lines.join("\n");
    Conversion {
        changed: output != schema,
        output,
        changes: converter.changes,
    }
}

/// State of the model block being scanned.
#[derive(Debug, Default)]
struct ModelScope {
    /// Original name when the model declaration was renamed.
    renamed_from: Option<String>,
    /// Whether a `@@map(...)` line has been seen in the block.
    has_block_map: bool,
}

#[derive(Debug, Default)]
struct Converter {
    block: Block,
    /// Present exactly while `block` is `Block::Model`.
    model: Option<ModelScope>,
    lines: Vec<String>,
    changes: Vec<Change>,
}

impl Converter {
    fn push_line(&mut self, number: usize, raw: &str) {
        let (line, eol) = match raw.strip_suffix('\r') {
            Some(line) => (line, "\r"),
            None => (raw, ""),
        };
        let trimmed = line.trim();

        if trimmed == "}" {
            self.close_block(number, line, eol);
            self.lines.push(raw.to_string());
            return;
        }

        if self.block == Block::TopLevel
            && let Some(block) = Block::opened_by(trimmed)
        {
            let converted = self.open_block(number, block, line);
            self.push_converted(converted, raw, eol);
            return;
        }

        let converted = match self.block {
            Block::Model => self.model_line(number, line),
            Block::Type => self.type_line(number, line),
            Block::TopLevel | Block::Enum | Block::Generator | Block::Datasource => None,
        };
        self.push_converted(converted, raw, eol);
    }

    fn push_converted(&mut self, converted: Option<String>, raw: &str, eol: &str) {
        match converted {
            Some(line) => self.lines.push(line + eol),
            None => self.lines.push(raw.to_string()),
        }
    }

    /// Enter `block`, renaming its declared name when it is snake_case.
    fn open_block(&mut self, number: usize, block: Block, line: &str) -> Option<String> {
        self.block = block;
        self.model = (block == Block::Model).then(ModelScope::default);

        let style = block.name_style()?;
        let kind = ChangeKind::from_block(block)?;
        let decl = DeclaredName::parse(line)?;
        if !is_snake_case(decl.name) {
            return None;
        }

        let renamed = style.apply(decl.name);
        if let Some(model) = &mut self.model {
            model.renamed_from = Some(decl.name.to_string());
        }
        self.record(number, kind, decl.name, &renamed);
        Some(format!("{}{}{}", decl.prefix, renamed, decl.suffix))
    }

    /// Leave the current block, inserting `@@map` for a renamed model.
    fn close_block(&mut self, number: usize, line: &str, eol: &str) {
        if let Some(ModelScope {
            renamed_from: Some(original),
            has_block_map: false,
        }) = self.model.take()
        {
            let indent = &line[..line.len() - line.trim_start().len()];
            let attribute = block_map_attribute(&original);
            self.lines.push(format!("{indent}  {attribute}{eol}"));
            self.record(number, ChangeKind::ModelMap, &original, &attribute);
        }
        self.block = Block::TopLevel;
    }

    fn model_line(&mut self, number: usize, line: &str) -> Option<String> {
        if is_block_map(line) {
            if let Some(model) = &mut self.model {
                model.has_block_map = true;
            }
            return None;
        }

        if is_field_list_attribute(line) {
            let (text, renames) = rewrite_field_list(line);
            self.record_all(number, renames);
            return Some(text);
        }

        let field = FieldLine::parse(line)?;
        if is_snake_case(field.name) {
            return Some(self.rename_field(number, field));
        }

        let mut rest = Remainder::rewrite(field.rest);
        self.record_all(number, std::mem::take(&mut rest.renames));
        Some(format!("{}{}{}", field.indent, field.name, rest.into_text()))
    }

    /// Only snake_case fields of composite types are touched.
    fn type_line(&mut self, number: usize, line: &str) -> Option<String> {
        let field = FieldLine::parse(line)?;
        if !is_snake_case(field.name) {
            return None;
        }
        Some(self.rename_field(number, field))
    }

    /// Rename a snake_case field, adding `@map` unless it already has one or
    /// is a relation field (which has no column of its own).
    fn rename_field(&mut self, number: usize, field: FieldLine<'_>) -> String {
        let name = to_camel_case(field.name);
        self.record(number, ChangeKind::Field, field.name, &name);

        let mut rest = Remainder::rewrite(field.rest);
        self.record_all(number, std::mem::take(&mut rest.renames));

        let rest = if rest.has_map() || rest.is_relation() {
            rest.into_text()
        } else {
            self.record(
                number,
                ChangeKind::FieldMap,
                field.name,
                &map_attribute(field.name),
            );
            rest.into_text_with_map(field.name)
        };
        format!("{}{}{}", field.indent, name, rest)
    }

    fn record(&mut self, line: usize, kind: ChangeKind, from: &str, to: &str) {
        self.changes.push(Change {
            line,
            kind,
            from: from.to_string(),
            to: to.to_string(),
        });
    }

    fn record_all(&mut self, line: usize, renames: Vec<Rename>) {
        self.changes.extend(renames.into_iter().map(|rename| Change {
            line,
            kind: rename.kind,
            from: rename.from,
            to: rename.to,
        }));
    }
}
