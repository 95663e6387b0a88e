//! Typed AST wrappers over CST nodes.
//!
//! Each struct wraps a `SyntaxNode` and provides typed accessors.
//! Cast is infallible for correct `SyntaxKind`; accessors return `None`
//! where recovery left a piece missing.

use super::cst::{SyntaxKind, SyntaxNode, SyntaxToken};

macro_rules! ast_node {
    ($name:ident, $kind:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub struct $name(SyntaxNode);

        impl $name {
            pub fn cast(node: SyntaxNode) -> Option<Self> {
                (node.kind() == SyntaxKind::$kind).then(|| Self(node))
            }

            pub fn as_cst(&self) -> &SyntaxNode {
                &self.0
            }
        }
    };
}

ast_node!(SourceFile, SourceFile);
ast_node!(UseClause, UseClause);
ast_node!(QualifiedIdentifier, QualifiedIdentifier);
ast_node!(TopLevelStatement, TopLevelStatement);
ast_node!(LetBinding, LetBinding);
ast_node!(Binding, Binding);
ast_node!(OperationCall, OperationCall);
ast_node!(OperationName, OperationName);
ast_node!(InputNode, InputNode);
ast_node!(Struct, Struct);
ast_node!(Field, Field);
ast_node!(List, List);
ast_node!(Boolean, Boolean);

fn tokens(node: &SyntaxNode) -> impl Iterator<Item = SyntaxToken> + '_ {
    node.children_with_tokens().filter_map(|it| it.into_token())
}

fn token(node: &SyntaxNode, kind: SyntaxKind) -> Option<SyntaxToken> {
    tokens(node).find(|t| t.kind() == kind)
}

/// What a top-level statement holds.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Statement {
    Let(LetBinding),
    Call(OperationCall),
}

impl Statement {
    pub fn cast(node: SyntaxNode) -> Option<Self> {
        match node.kind() {
            SyntaxKind::LetBinding => LetBinding::cast(node).map(Statement::Let),
            SyntaxKind::OperationCall => OperationCall::cast(node).map(Statement::Call),
            _ => None,
        }
    }

    pub fn as_cst(&self) -> &SyntaxNode {
        match self {
            Statement::Let(n) => n.as_cst(),
            Statement::Call(n) => n.as_cst(),
        }
    }
}

/// The literal-value sum type behind an `input_node`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Value {
    Struct(Struct),
    List(List),
    Boolean(Boolean),
    Number(SyntaxToken),
    String(SyntaxToken),
    Null(SyntaxToken),
    /// An identifier naming a `let` binding. Never resolved here.
    Reference(SyntaxToken),
}

impl SourceFile {
    pub fn use_clause(&self) -> Option<UseClause> {
        self.0.children().find_map(UseClause::cast)
    }

    pub fn statements(&self) -> impl Iterator<Item = TopLevelStatement> + '_ {
        self.0.children().filter_map(TopLevelStatement::cast)
    }

    /// Whether recovery left anything behind anywhere in the file.
    pub fn has_error_nodes(&self) -> bool {
        self.0
            .descendants_with_tokens()
            .any(|it| it.kind().is_error())
    }
}

impl UseClause {
    pub fn identifier(&self) -> Option<QualifiedIdentifier> {
        self.0.children().find_map(QualifiedIdentifier::cast)
    }

    /// Written with the deprecated `use service` spelling.
    pub fn is_legacy(&self) -> bool {
        token(&self.0, SyntaxKind::KwService).is_some()
    }
}

impl QualifiedIdentifier {
    /// Namespace segments, before the `#`.
    pub fn segments(&self) -> Vec<SyntaxToken> {
        tokens(&self.0)
            .take_while(|t| t.kind() != SyntaxKind::Hash)
            .filter(|t| t.kind() == SyntaxKind::Identifier)
            .collect()
    }

    /// Shape name, after the `#`.
    pub fn name(&self) -> Option<SyntaxToken> {
        tokens(&self.0)
            .skip_while(|t| t.kind() != SyntaxKind::Hash)
            .find(|t| t.kind() == SyntaxKind::Identifier)
    }

    /// Dotted namespace: `com.example` for `com.example#Weather`.
    pub fn namespace(&self) -> String {
        self.segments()
            .iter()
            .map(|t| t.text())
            .collect::<Vec<_>>()
            .join(".")
    }
}

impl TopLevelStatement {
    pub fn statement(&self) -> Option<Statement> {
        self.0.children().find_map(Statement::cast)
    }
}

impl LetBinding {
    pub fn bindings(&self) -> impl Iterator<Item = Binding> + '_ {
        self.0.children().filter_map(Binding::cast)
    }

    pub fn body(&self) -> Option<OperationCall> {
        self.0.children().find_map(OperationCall::cast)
    }
}

impl Binding {
    pub fn key(&self) -> Option<SyntaxToken> {
        token(&self.0, SyntaxKind::Identifier)
    }

    pub fn value(&self) -> Option<InputNode> {
        self.0.children().find_map(InputNode::cast)
    }
}

impl OperationCall {
    pub fn operation_name(&self) -> Option<OperationName> {
        self.0.children().find_map(OperationName::cast)
    }

    pub fn input(&self) -> Option<InputNode> {
        self.0.children().find_map(InputNode::cast)
    }

    /// Input given as `Op(...)` rather than `Op { ... }`.
    pub fn is_parenthesized(&self) -> bool {
        token(&self.0, SyntaxKind::ParenOpen).is_some()
    }
}

impl OperationName {
    pub fn qualified(&self) -> Option<QualifiedIdentifier> {
        self.0.children().find_map(QualifiedIdentifier::cast)
    }

    /// The operation's own name: the bare identifier, or the part after `#`.
    pub fn name(&self) -> Option<SyntaxToken> {
        match self.qualified() {
            Some(qualified) => qualified.name(),
            None => token(&self.0, SyntaxKind::Identifier),
        }
    }
}

impl InputNode {
    pub fn value(&self) -> Option<Value> {
        if let Some(node) = self.0.first_child() {
            return match node.kind() {
                SyntaxKind::Struct => Struct::cast(node).map(Value::Struct),
                SyntaxKind::List => List::cast(node).map(Value::List),
                SyntaxKind::Boolean => Boolean::cast(node).map(Value::Boolean),
                _ => None,
            };
        }
        let token = tokens(&self.0).find(|t| !t.kind().is_trivia())?;
        match token.kind() {
            SyntaxKind::Number => Some(Value::Number(token)),
            SyntaxKind::String => Some(Value::String(token)),
            SyntaxKind::KwNull => Some(Value::Null(token)),
            SyntaxKind::Identifier => Some(Value::Reference(token)),
            _ => None,
        }
    }
}

impl Struct {
    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.0.children().filter_map(Field::cast)
    }

    pub fn field(&self, key: &str) -> Option<Field> {
        self.fields()
            .find(|f| f.key().is_some_and(|k| k.text() == key))
    }
}

impl Field {
    pub fn key(&self) -> Option<SyntaxToken> {
        token(&self.0, SyntaxKind::Identifier)
    }

    pub fn value(&self) -> Option<InputNode> {
        self.0.children().find_map(InputNode::cast)
    }
}

impl List {
    pub fn items(&self) -> impl Iterator<Item = InputNode> + '_ {
        self.0.children().filter_map(InputNode::cast)
    }
}

impl Boolean {
    pub fn value(&self) -> Option<bool> {
        tokens(&self.0).find_map(|t| match t.kind() {
            SyntaxKind::KwTrue => Some(true),
            SyntaxKind::KwFalse => Some(false),
            _ => None,
        })
    }
}
