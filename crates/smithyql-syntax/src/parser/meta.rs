//! Node kind and field metadata, plus the free functions that walk a tree with it.
//!
//! [`GRAMMAR`] is a compile-time table: for every node kind, the named fields and which
//! children fill them. Callers use [`field`] and friends instead of hard-coding child
//! positions.

use rowan::{NodeOrToken, TextRange};

use super::cst::{SyntaxElement, SyntaxKind, SyntaxNode};

use SyntaxKind as K;

/// Which children of a node fill a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selector {
    /// Every significant child of one of these kinds.
    Kinds(&'static [SyntaxKind]),
    /// Children of these kinds that come before the `#` token.
    BeforeHash(&'static [SyntaxKind]),
    /// Children of these kinds that come after the `#` token.
    AfterHash(&'static [SyntaxKind]),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDef {
    pub name: &'static str,
    pub selector: Selector,
    /// Whether the field holds a sequence rather than at most one child.
    pub multiple: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeDef {
    pub kind: SyntaxKind,
    pub fields: &'static [FieldDef],
}

/// Immutable grammar metadata, shared read-only by every parse.
#[derive(Debug)]
pub struct Grammar {
    nodes: &'static [NodeDef],
}

const fn one(name: &'static str, kinds: &'static [SyntaxKind]) -> FieldDef {
    FieldDef {
        name,
        selector: Selector::Kinds(kinds),
        multiple: false,
    }
}

const fn many(name: &'static str, kinds: &'static [SyntaxKind]) -> FieldDef {
    FieldDef {
        name,
        selector: Selector::Kinds(kinds),
        multiple: true,
    }
}

const KEY_VALUE: &[FieldDef] = &[
    one("key", &[K::Identifier]),
    one("value", &[K::InputNode]),
];

pub static GRAMMAR: Grammar = Grammar {
    nodes: &[
        NodeDef {
            kind: K::SourceFile,
            fields: &[
                one("use_clause", &[K::UseClause]),
                many("statements", &[K::TopLevelStatement]),
            ],
        },
        NodeDef {
            kind: K::UseClause,
            fields: &[one("identifier", &[K::QualifiedIdentifier])],
        },
        NodeDef {
            kind: K::QualifiedIdentifier,
            fields: &[
                FieldDef {
                    name: "segments",
                    selector: Selector::BeforeHash(&[K::Identifier]),
                    multiple: true,
                },
                FieldDef {
                    name: "name",
                    selector: Selector::AfterHash(&[K::Identifier]),
                    multiple: false,
                },
            ],
        },
        NodeDef {
            kind: K::TopLevelStatement,
            fields: &[],
        },
        NodeDef {
            kind: K::LetBinding,
            fields: &[
                many("bindings", &[K::Binding]),
                one("body", &[K::OperationCall]),
            ],
        },
        NodeDef {
            kind: K::Binding,
            fields: KEY_VALUE,
        },
        NodeDef {
            kind: K::OperationCall,
            fields: &[
                one("operation_name", &[K::OperationName]),
                one("input", &[K::InputNode]),
            ],
        },
        NodeDef {
            kind: K::OperationName,
            fields: &[one("name", &[K::Identifier, K::QualifiedIdentifier])],
        },
        NodeDef {
            kind: K::InputNode,
            fields: &[],
        },
        NodeDef {
            kind: K::Struct,
            fields: &[many("fields", &[K::Field])],
        },
        NodeDef {
            kind: K::Field,
            fields: KEY_VALUE,
        },
        NodeDef {
            kind: K::List,
            fields: &[many("list_fields", &[K::InputNode])],
        },
        NodeDef {
            kind: K::Boolean,
            fields: &[],
        },
    ],
};

impl Grammar {
    pub fn node(&self, kind: SyntaxKind) -> Option<&'static NodeDef> {
        self.nodes.iter().find(|n| n.kind == kind)
    }

    pub fn nodes(&self) -> &'static [NodeDef] {
        self.nodes
    }

    pub fn field_def(&self, kind: SyntaxKind, name: &str) -> Option<&'static FieldDef> {
        self.node(kind)?.fields.iter().find(|f| f.name == name)
    }

    pub fn field_names(&self, kind: SyntaxKind) -> impl Iterator<Item = &'static str> {
        self.node(kind)
            .into_iter()
            .flat_map(|n| n.fields.iter().map(|f| f.name))
    }
}

/// Significant children paired with the field each one fills, if any.
pub fn fielded_children(node: &SyntaxNode) -> Vec<(SyntaxElement, Option<&'static str>)> {
    let fields = GRAMMAR.node(node.kind()).map_or(&[][..], |n| n.fields);
    let mut after_hash = false;
    significant_children(node)
        .into_iter()
        .map(|child| {
            let kind = child.kind();
            let name = fields
                .iter()
                .find(|f| match f.selector {
                    Selector::Kinds(kinds) => kinds.contains(&kind),
                    Selector::BeforeHash(kinds) => !after_hash && kinds.contains(&kind),
                    Selector::AfterHash(kinds) => after_hash && kinds.contains(&kind),
                })
                .map(|f| f.name);
            if kind == SyntaxKind::Hash {
                after_hash = true;
            }
            (child, name)
        })
        .collect()
}

pub fn kind_of(element: &SyntaxElement) -> SyntaxKind {
    element.kind()
}

/// First child filling field `name`.
pub fn field(node: &SyntaxNode, name: &str) -> Option<SyntaxElement> {
    field_all(node, name).into_iter().next()
}

/// Every child filling field `name`, in document order.
pub fn field_all(node: &SyntaxNode, name: &str) -> Vec<SyntaxElement> {
    fielded_children(node)
        .into_iter()
        .filter(|(_, field)| *field == Some(name))
        .map(|(child, _)| child)
        .collect()
}

/// Every child, trivia and error regions included.
pub fn children(node: &SyntaxNode) -> Vec<SyntaxElement> {
    node.children_with_tokens().collect()
}

pub fn significant_children(node: &SyntaxNode) -> Vec<SyntaxElement> {
    node.children_with_tokens()
        .filter(|it| !it.kind().is_trivia())
        .collect()
}

pub fn span(element: &SyntaxElement) -> TextRange {
    element.text_range()
}

/// The source text an element covers, sliced out of the buffer it was parsed from.
pub fn text<'s>(source: &'s str, element: &SyntaxElement) -> &'s str {
    &source[std::ops::Range::<usize>::from(span(element))]
}

/// Which field of its parent `element` fills.
pub fn field_name(element: &SyntaxElement) -> Option<&'static str> {
    let parent = match element {
        NodeOrToken::Node(node) => node.parent()?,
        NodeOrToken::Token(token) => token.parent()?,
    };
    fielded_children(&parent)
        .into_iter()
        .find(|(child, _)| child == element)
        .and_then(|(_, name)| name)
}
