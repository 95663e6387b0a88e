//! Syntax kinds for SmithyQL.
//!
//! `SyntaxKind` serves dual roles: token kinds (from lexer) and node kinds (from parser).
//! Logos derives token recognition; node kinds lack token/regex attributes.
//! `SmithyQl` implements Rowan's `Language` trait for tree construction.

use logos::Logos;
use rowan::Language;

/// All token and node kinds. Tokens first, then nodes, then `__LAST` sentinel.
/// `#[repr(u16)]` enables safe transmute in `kind_from_raw`.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u16)]
pub enum SyntaxKind {
    #[token("(")]
    ParenOpen = 0,

    #[token(")")]
    ParenClose,

    #[token("{")]
    BraceOpen,

    #[token("}")]
    BraceClose,

    #[token("[")]
    BracketOpen,

    #[token("]")]
    BracketClose,

    #[token(".")]
    Dot,

    #[token("#")]
    Hash,

    #[token(",")]
    Comma,

    #[token("=")]
    Equals,

    #[token("use")]
    KwUse,

    #[token("let")]
    KwLet,

    /// Only meaningful right after `use` (legacy `use service a#B`).
    #[token("service")]
    KwService,

    #[token("true")]
    KwTrue,

    #[token("false")]
    KwFalse,

    #[token("null")]
    KwNull,

    /// Defined after keywords: on equal length the literal token wins,
    /// and a longer identifier (`usex`) wins by maximal munch.
    #[regex(r"[A-Za-z_][A-Za-z0-9_]*")]
    Identifier,

    #[regex(r"-?(?:0|[1-9][0-9]*)(?:\.[0-9]+)?(?:[eE][+-]?[0-9]+)?")]
    Number,

    #[regex(r#""(?:[^"\\\n]|\\(?:.|\n))*""#)]
    String,

    /// String literal cut short by a raw newline or end of input.
    #[regex(r#""(?:[^"\\\n]|\\(?:.|\n))*"#, allow_greedy = true)]
    UnterminatedString,

    #[regex(r"[ \t\r\n]+")]
    Whitespace,

    #[regex(r"//[^\n]*", allow_greedy = true)]
    Comment,

    /// Coalesced unrecognized characters
    Garbage,
    /// Zero-width end-of-input terminal
    Eof,
    Error,

    // --- Node kinds (non-terminals) ---
    SourceFile,
    UseClause,
    QualifiedIdentifier,
    TopLevelStatement,
    LetBinding,
    Binding,
    OperationCall,
    OperationName,
    InputNode,
    Struct,
    Field,
    List,
    Boolean,

    // Must be last - used for bounds checking in `kind_from_raw`
    #[doc(hidden)]
    __LAST,
}

use SyntaxKind::*;

impl SyntaxKind {
    #[inline]
    pub fn is_trivia(self) -> bool {
        matches!(self, Whitespace | Comment)
    }

    #[inline]
    pub fn is_error(self) -> bool {
        matches!(self, Error | Garbage | UnterminatedString)
    }

    #[inline]
    pub fn is_keyword(self) -> bool {
        matches!(self, KwUse | KwLet | KwService | KwTrue | KwFalse | KwNull)
    }

    #[inline]
    pub fn is_node(self) -> bool {
        (self as u16) >= (SourceFile as u16) && self != __LAST
    }

    /// Named kinds show up in grammar-level tree views; punctuation and keywords are anonymous.
    pub fn is_named(self) -> bool {
        self.is_node()
            || matches!(
                self,
                Identifier | Number | String | KwNull | Comment | Whitespace | Error
            )
    }

    /// Grammar-level name, as used by tree walkers and field metadata.
    pub fn name(self) -> &'static str {
        match self {
            ParenOpen => "(",
            ParenClose => ")",
            BraceOpen => "{",
            BraceClose => "}",
            BracketOpen => "[",
            BracketClose => "]",
            Dot => ".",
            Hash => "#",
            Comma => ",",
            Equals => "=",
            KwUse => "use",
            KwLet => "let",
            KwService => "service",
            KwTrue => "true",
            KwFalse => "false",
            KwNull => "null",
            Identifier => "identifier",
            Number => "number",
            String => "string",
            UnterminatedString => "unterminated_string",
            Whitespace => "whitespace",
            Comment => "comment",
            Garbage => "garbage",
            Eof => "end",
            Error => "ERROR",
            SourceFile => "source_file",
            UseClause => "use_clause",
            QualifiedIdentifier => "qualified_identifier",
            TopLevelStatement => "top_level_statement",
            LetBinding => "let_binding",
            Binding => "binding",
            OperationCall => "operation_call",
            OperationName => "operation_name",
            InputNode => "input_node",
            Struct => "struct",
            Field => "field",
            List => "list",
            Boolean => "boolean",
            __LAST => "__LAST",
        }
    }

    /// Human-facing description for diagnostics: `` `}` ``, `identifier`, `end of input`.
    pub fn describe(self) -> std::string::String {
        match self {
            Eof => "end of input".to_string(),
            Garbage => "unrecognized input".to_string(),
            UnterminatedString => "unterminated string".to_string(),
            Identifier | Number | String => self.name().to_string(),
            _ => format!("`{}`", self.name()),
        }
    }

    /// Inverse of [`SyntaxKind::name`].
    pub fn from_name(name: &str) -> Option<Self> {
        (0..__LAST as u16)
            .map(|raw| SmithyQl::kind_from_raw(rowan::SyntaxKind(raw)))
            .find(|kind| kind.name() == name)
    }
}

impl From<SyntaxKind> for rowan::SyntaxKind {
    #[inline]
    fn from(kind: SyntaxKind) -> Self {
        Self(kind as u16)
    }
}

/// Language tag for Rowan's tree types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SmithyQl {}

impl Language for SmithyQl {
    type Kind = SyntaxKind;

    fn kind_from_raw(raw: rowan::SyntaxKind) -> Self::Kind {
        assert!(raw.0 < __LAST as u16);
        // SAFETY: We've verified the value is in bounds, and SyntaxKind is repr(u16)
        unsafe { std::mem::transmute::<u16, SyntaxKind>(raw.0) }
    }

    fn kind_to_raw(kind: Self::Kind) -> rowan::SyntaxKind {
        kind.into()
    }
}

/// Type aliases for Rowan types parameterized by our language.
pub type SyntaxNode = rowan::SyntaxNode<SmithyQl>;
pub type SyntaxToken = rowan::SyntaxToken<SmithyQl>;
pub type SyntaxElement = rowan::NodeOrToken<SyntaxNode, SyntaxToken>;

/// 64-bit bitset of `SyntaxKind`s for O(1) membership testing.
#[derive(Clone, Copy, PartialEq, Eq, Default)]
pub struct TokenSet(u64);

impl TokenSet {
    /// Creates an empty token set.
    pub const EMPTY: TokenSet = TokenSet(0);

    /// Panics at compile time if any kind's discriminant >= 64.
    #[inline]
    pub const fn new(kinds: &[SyntaxKind]) -> Self {
        let mut bits = 0u64;
        let mut i = 0;
        while i < kinds.len() {
            let kind = kinds[i] as u16;
            assert!(kind < 64, "SyntaxKind value exceeds TokenSet capacity");
            bits |= 1 << kind;
            i += 1;
        }
        TokenSet(bits)
    }

    #[inline]
    pub const fn single(kind: SyntaxKind) -> Self {
        let kind = kind as u16;
        assert!(kind < 64, "SyntaxKind value exceeds TokenSet capacity");
        TokenSet(1 << kind)
    }

    #[inline]
    pub const fn contains(&self, kind: SyntaxKind) -> bool {
        let kind = kind as u16;
        if kind >= 64 {
            return false;
        }
        self.0 & (1 << kind) != 0
    }

    #[inline]
    pub const fn union(self, other: TokenSet) -> TokenSet {
        TokenSet(self.0 | other.0)
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Members in discriminant order.
    pub fn iter(self) -> impl Iterator<Item = SyntaxKind> {
        (0..(__LAST as u16).min(64))
            .filter(move |i| self.0 & (1 << i) != 0)
            .map(|i| SmithyQl::kind_from_raw(rowan::SyntaxKind(i)))
    }
}

impl std::fmt::Debug for TokenSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// Pre-defined token sets for the parser.
pub mod token_sets {
    use super::*;

    pub const TRIVIA: TokenSet = TokenSet::new(&[Whitespace, Comment]);

    /// FIRST set of `input_node`.
    pub const VALUE_FIRST: TokenSet = TokenSet::new(&[
        BraceOpen,
        BracketOpen,
        KwTrue,
        KwFalse,
        Number,
        String,
        KwNull,
        Identifier,
    ]);

    /// FIRST set of `top_level_statement`, plus a misplaced `use`.
    pub const STATEMENT_FIRST: TokenSet = TokenSet::new(&[Identifier, KwLet, KwUse]);

    /// FIRST set of `field` and `binding`.
    pub const KEY_FIRST: TokenSet = TokenSet::single(Identifier);

    pub const OPENING_DELIMITERS: TokenSet = TokenSet::new(&[ParenOpen, BraceOpen, BracketOpen]);

    pub const CLOSING_DELIMITERS: TokenSet =
        TokenSet::new(&[ParenClose, BraceClose, BracketClose]);

    /// Continuations of an identifier that make it a qualified identifier.
    pub const PATH_CONTINUATION: TokenSet = TokenSet::new(&[Dot, Hash]);
}
