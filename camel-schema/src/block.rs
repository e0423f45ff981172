use std::fmt;

/// The declaration block a schema line belongs to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Block {
    /// Outside of any block.
    #[default]
    TopLevel,
    Model,
    Enum,
    Type,
    Generator,
    Datasource,
}

impl Block {
    const OPENERS: [Self; 5] = [
        Self::Model,
        Self::Enum,
        Self::Type,
        Self::Generator,
        Self::Datasource,
    ];

    /// The keyword that opens this block, if any.
    pub fn keyword(self) -> Option<&'static str> {
        match self {
            Self::TopLevel => None,
            Self::Model => Some("model"),
            Self::Enum => Some("enum"),
            Self::Type => Some("type"),
            Self::Generator => Some("generator"),
            Self::Datasource => Some("datasource"),
        }
    }

    /// Detect the block opened by a trimmed line (e.g., "model User {").
    ///
    /// The keyword must be followed by whitespace.
    pub fn opened_by(trimmed: &str) -> Option<Self> {
        Self::OPENERS.into_iter().find(|block| {
            block
                .keyword()
                .and_then(|keyword| trimmed.strip_prefix(keyword))
                .is_some_and(|rest| rest.starts_with(char::is_whitespace))
        })
    }

    /// Whether declared names of this block are renamed, and to which case.
    ///
    /// Models become PascalCase; enum and type names become camelCase.
    pub(crate) fn name_style(self) -> Option<NameStyle> {
        match self {
            Self::Model => Some(NameStyle::Pascal),
            Self::Enum | Self::Type => Some(NameStyle::Camel),
            Self::TopLevel | Self::Generator | Self::Datasource => None,
        }
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword().unwrap_or("top level"))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum NameStyle {
    Camel,
    Pascal,
}

impl NameStyle {
    pub(crate) fn apply(self, name: &str) -> String {
        match self {
            Self::Camel => prisma_camel_core::to_camel_case(name),
            Self::Pascal => prisma_camel_core::to_pascal_case(name),
        }
    }
}
