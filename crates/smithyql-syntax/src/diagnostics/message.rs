use rowan::TextRange;
use serde::{Serialize, Serializer};

use crate::parser::{SyntaxKind, TokenSet};

/// Diagnostic kinds ordered by priority (highest priority first).
///
/// Unclosed delimiters come first: they explain most of the noise that follows them.
/// Lexical problems and missing pieces are root causes; structural kinds describe
/// what recovery did about them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticKind {
    UnclosedStruct,
    UnclosedList,
    UnclosedParens,

    // No terminal matches the input
    UnexpectedCharacter,
    UnterminatedString,

    // Something required is missing
    ExpectedValue,
    ExpectedIdentifier,
    ExpectedEquals,
    ExpectedHash,
    ExpectedStatement,
    ExpectedOperationCall,

    // Something is there that doesn't belong
    MissingComma,
    TrailingComma,
    UnexpectedToken,
    MisplacedUseClause,
    MissingOperationName,

    // Deprecated but accepted
    LegacyServiceKeyword,

    // Recovery artifacts
    SkippedInput,
    NestingTooDeep,
}

/// Which stage noticed the problem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Lexical,
    Syntax,
    Structural,
}

impl Category {
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Lexical => "lexical",
            Category::Syntax => "syntax",
            Category::Structural => "structural",
        }
    }
}

impl DiagnosticKind {
    pub fn default_severity(&self) -> Severity {
        match self {
            Self::LegacyServiceKeyword => Severity::Warning,
            _ => Severity::Error,
        }
    }

    pub fn category(&self) -> Category {
        match self {
            Self::UnexpectedCharacter | Self::UnterminatedString => Category::Lexical,
            Self::SkippedInput | Self::NestingTooDeep => Category::Structural,
            _ => Category::Syntax,
        }
    }

    /// Lower discriminant wins.
    pub fn outranks(&self, other: &DiagnosticKind) -> bool {
        self < other
    }

    pub fn is_unclosed(&self) -> bool {
        matches!(
            self,
            Self::UnclosedStruct | Self::UnclosedList | Self::UnclosedParens
        )
    }

    /// Hint attached to every diagnostic of this kind.
    pub fn default_hint(&self) -> Option<&'static str> {
        match self {
            Self::TrailingComma => Some("commas separate elements; remove the last one"),
            Self::ExpectedHash => Some("e.g., `com.example#Weather`"),
            Self::MissingOperationName => Some("e.g., `GetForecast { city = \"Paris\" }`"),
            Self::MisplacedUseClause => Some("a `use` clause must come before any statement"),
            _ => None,
        }
    }

    pub fn fallback_message(&self) -> &'static str {
        match self {
            Self::UnclosedStruct => "missing closing `}`",
            Self::UnclosedList => "missing closing `]`",
            Self::UnclosedParens => "missing closing `)`",

            Self::UnexpectedCharacter => "unexpected character",
            Self::UnterminatedString => "unterminated string literal",

            Self::ExpectedValue => "expected a value",
            Self::ExpectedIdentifier => "expected an identifier",
            Self::ExpectedEquals => "expected `=`",
            Self::ExpectedHash => "expected `#` followed by a shape name",
            Self::ExpectedStatement => "expected a `let` binding or an operation call",
            Self::ExpectedOperationCall => "expected an operation call after `let` bindings",

            Self::MissingComma => "missing `,` between elements",
            Self::TrailingComma => "trailing comma is not allowed",
            Self::UnexpectedToken => "unexpected token",
            Self::MisplacedUseClause => "`use` clause is only allowed at the start of the file",
            Self::MissingOperationName => "input has no operation name",

            Self::LegacyServiceKeyword => "`use service` is deprecated",

            Self::SkippedInput => "input skipped during recovery",
            Self::NestingTooDeep => "literal is nested too deeply",
        }
    }

    /// Template for caller-provided detail; `{}` is replaced with it.
    pub fn custom_message(&self) -> String {
        match self {
            Self::UnclosedStruct | Self::UnclosedList | Self::UnclosedParens => {
                format!("{}; {{}}", self.fallback_message())
            }
            Self::UnexpectedCharacter => "unexpected character `{}`".to_string(),
            Self::UnexpectedToken => "unexpected {}".to_string(),
            Self::NestingTooDeep => "literal is nested more than {} levels deep".to_string(),

            // Detail names what was found instead
            Self::ExpectedValue
            | Self::ExpectedIdentifier
            | Self::ExpectedEquals
            | Self::ExpectedHash
            | Self::ExpectedStatement
            | Self::ExpectedOperationCall
            | Self::MissingComma => format!("{}, found {{}}", self.fallback_message()),

            _ => format!("{}: {{}}", self.fallback_message()),
        }
    }

    /// `None` gives the fallback message, `Some(detail)` fills the custom template.
    pub fn message(&self, detail: Option<&str>) -> String {
        match detail {
            None => self.fallback_message().to_string(),
            Some(detail) => self.custom_message().replace("{}", detail),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    #[default]
    Error,
    Warning,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// Suggested edit: replace `range` with `replacement`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Fix {
    #[serde(serialize_with = "serialize_range")]
    pub(crate) range: TextRange,
    pub(crate) replacement: String,
    pub(crate) description: String,
}

impl Fix {
    pub fn new(
        range: TextRange,
        replacement: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            range,
            replacement: replacement.into(),
            description: description.into(),
        }
    }

    pub fn range(&self) -> TextRange {
        self.range
    }

    pub fn replacement(&self) -> &str {
        &self.replacement
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Applies the edit to `source`.
    pub fn apply(&self, source: &str) -> String {
        let start = usize::from(self.range.start());
        let end = usize::from(self.range.end());
        format!("{}{}{}", &source[..start], self.replacement, &source[end..])
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RelatedInfo {
    #[serde(serialize_with = "serialize_range")]
    pub(crate) range: TextRange,
    pub(crate) message: String,
}

impl RelatedInfo {
    pub fn new(range: TextRange, message: impl Into<String>) -> Self {
        Self {
            range,
            message: message.into(),
        }
    }

    pub fn range(&self) -> TextRange {
        self.range
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// One reported problem: where, what, and what would have been accepted instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiagnosticMessage {
    pub(crate) kind: DiagnosticKind,
    pub(crate) severity: Severity,
    pub(crate) category: Category,
    /// The range shown to the user (underlined in output).
    #[serde(serialize_with = "serialize_range")]
    pub(crate) range: TextRange,
    pub(crate) message: String,
    /// Kind of the offending token, when the problem is a token.
    #[serde(serialize_with = "serialize_found", skip_serializing_if = "Option::is_none")]
    pub(crate) found: Option<SyntaxKind>,
    /// Terminals that would have been accepted at `range`.
    #[serde(serialize_with = "serialize_expected", skip_serializing_if = "TokenSet::is_empty")]
    pub(crate) expected: TokenSet,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) fix: Option<Fix>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub(crate) related: Vec<RelatedInfo>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub(crate) hints: Vec<String>,
}

impl DiagnosticMessage {
    pub(crate) fn new(kind: DiagnosticKind, range: TextRange, message: impl Into<String>) -> Self {
        Self {
            kind,
            severity: kind.default_severity(),
            category: kind.category(),
            range,
            message: message.into(),
            found: None,
            expected: TokenSet::EMPTY,
            fix: None,
            related: Vec::new(),
            hints: kind.default_hint().map(String::from).into_iter().collect(),
        }
    }

    pub(crate) fn with_default_message(kind: DiagnosticKind, range: TextRange) -> Self {
        Self::new(kind, range, kind.fallback_message())
    }

    pub fn kind(&self) -> DiagnosticKind {
        self.kind
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn range(&self) -> TextRange {
        self.range
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn found(&self) -> Option<SyntaxKind> {
        self.found
    }

    pub fn expected(&self) -> TokenSet {
        self.expected
    }

    pub fn fix(&self) -> Option<&Fix> {
        self.fix.as_ref()
    }

    pub fn related(&self) -> &[RelatedInfo] {
        &self.related
    }

    pub fn hints(&self) -> &[String] {
        &self.hints
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }

    pub fn is_warning(&self) -> bool {
        self.severity == Severity::Warning
    }
}

impl std::fmt::Display for DiagnosticMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} at {}..{}: {}",
            self.severity,
            u32::from(self.range.start()),
            u32::from(self.range.end()),
            self.message
        )?;
        if let Some(fix) = &self.fix {
            write!(f, " (fix: {})", fix.description)?;
        }
        for related in &self.related {
            write!(
                f,
                " (related: {} at {}..{})",
                related.message,
                u32::from(related.range.start()),
                u32::from(related.range.end())
            )?;
        }
        Ok(())
    }
}

#[derive(Serialize)]
struct RangeRepr {
    start: u32,
    end: u32,
}

pub(crate) fn serialize_range<S: Serializer>(range: &TextRange, s: S) -> Result<S::Ok, S::Error> {
    RangeRepr {
        start: range.start().into(),
        end: range.end().into(),
    }
    .serialize(s)
}

fn serialize_found<S: Serializer>(found: &Option<SyntaxKind>, s: S) -> Result<S::Ok, S::Error> {
    found.map(SyntaxKind::name).serialize(s)
}

fn serialize_expected<S: Serializer>(expected: &TokenSet, s: S) -> Result<S::Ok, S::Error> {
    s.collect_seq(expected.iter().map(SyntaxKind::name))
}
