use rowan::TextRange;
use serde::Serialize;

/// Every way a parse can fail.
///
/// Parsing is fail-fast, so a failed parse produces exactly one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ErrorKind {
    // Entry level
    UnexpectedEntryStart,
    UnsupportedConstruct,

    // Lexical
    MalformedIdentifier,
    UnterminatedString,

    // Values and attributes
    UnexpectedValueStart,
    UnterminatedComposite,
    ExpectedKeyValueSeparator,
    ExpectedAttributeSeparator,
    DuplicateDefault,

    // Expressions
    MalformedExpression,

    // Input ran out where a production needed more
    EndOfInput,

    // Nesting deeper than the configured limit
    RecursionLimitExceeded,
}

impl ErrorKind {
    /// Base message for this kind, used when no custom message is provided.
    pub fn fallback_message(&self) -> &'static str {
        match self {
            Self::UnexpectedEntryStart => "expected an entry starting with `<`",
            Self::UnsupportedConstruct => "unsupported construct",
            Self::MalformedIdentifier => "expected an identifier",
            Self::UnterminatedString => "unterminated string",
            Self::UnexpectedValueStart => "expected a value",
            Self::UnterminatedComposite => "unterminated composite",
            Self::ExpectedKeyValueSeparator => "expected `:` after key",
            Self::ExpectedAttributeSeparator => "expected `,` between attributes",
            Self::DuplicateDefault => "object has more than one default member",
            Self::MalformedExpression => "malformed expression",
            Self::EndOfInput => "unexpected end of input",
            Self::RecursionLimitExceeded => "nesting too deep",
        }
    }

    /// Default hint for this kind, shown under the rendered snippet.
    pub fn default_hint(&self) -> Option<&'static str> {
        match self {
            Self::UnexpectedValueStart => Some("values are quoted strings, `[...]` or `{...}`"),
            Self::ExpectedAttributeSeparator => Some("e.g., `<id \"v\" a: \"x\", b: \"y\">`"),
            Self::UnsupportedConstruct => Some("comments are not supported yet"),
            Self::MalformedIdentifier => Some("identifiers use letters, digits and `_`"),
            Self::DuplicateDefault => Some("mark a single key with `*`"),
            _ => None,
        }
    }

    /// Render the final message.
    ///
    /// - `None` → returns `fallback_message()`
    /// - `Some(detail)` → `fallback_message(): detail`
    pub fn message(&self, detail: Option<&str>) -> String {
        match detail {
            None => self.fallback_message().to_string(),
            Some(detail) => format!("{}: {}", self.fallback_message(), detail),
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.fallback_message())
    }
}

/// 1-based line and column (in characters) of a byte offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LineCol {
    pub line: u32,
    pub column: u32,
}

impl LineCol {
    pub fn of(source: &str, offset: usize) -> Self {
        let offset = offset.min(source.len());
        let before = &source[..offset];
        let line_start = before.rfind('\n').map_or(0, |i| i + 1);
        Self {
            line: before.matches('\n').count() as u32 + 1,
            column: before[line_start..].chars().count() as u32 + 1,
        }
    }
}

impl std::fmt::Display for LineCol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Secondary location, e.g. where an unclosed bracket was opened.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RelatedInfo {
    pub range: TextRange,
    pub message: String,
}

impl RelatedInfo {
    pub fn new(range: TextRange, message: impl Into<String>) -> Self {
        Self {
            range,
            message: message.into(),
        }
    }
}
