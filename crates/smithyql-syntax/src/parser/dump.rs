//! Tree printers: an indented text dump and a serde view of the same tree.

use std::fmt::Write;

use rowan::{NodeOrToken, TextRange};
use serde::ser::{SerializeSeq, SerializeStruct};
use serde::{Serialize, Serializer};

use super::cst::{SyntaxElement, SyntaxNode};
use super::meta;
use crate::diagnostics::serialize_range;

pub struct CstPrinter<'n> {
    root: &'n SyntaxNode,
    trivia: bool,
    spans: bool,
    fields: bool,
}

impl<'n> CstPrinter<'n> {
    pub fn new(root: &'n SyntaxNode) -> Self {
        Self {
            root,
            trivia: false,
            spans: false,
            fields: false,
        }
    }

    pub fn with_trivia(mut self, value: bool) -> Self {
        self.trivia = value;
        self
    }

    pub fn with_spans(mut self, value: bool) -> Self {
        self.spans = value;
        self
    }

    /// Prefix children that fill a grammar field with `name: `.
    pub fn with_fields(mut self, value: bool) -> Self {
        self.fields = value;
        self
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        self.format(&mut out).expect("String write never fails");
        out
    }

    pub fn format(&self, w: &mut impl Write) -> std::fmt::Result {
        self.format_node(self.root, None, 0, w)
    }

    /// Serializable view, trivia included or not per [`Self::with_trivia`].
    pub fn json(&self) -> CstJson<'_> {
        CstJson {
            element: NodeOrToken::Node(self.root.clone()),
            field: None,
            trivia: self.trivia,
        }
    }

    fn format_node(
        &self,
        node: &SyntaxNode,
        field: Option<&str>,
        indent: usize,
        w: &mut impl Write,
    ) -> std::fmt::Result {
        let prefix = "  ".repeat(indent);
        let label = self.field_label(field);
        let span = self.span_str(node.text_range());
        writeln!(w, "{}{}{:?}{}", prefix, label, node.kind(), span)?;

        for (child, field) in self.children(node) {
            match child {
                NodeOrToken::Node(n) => self.format_node(&n, field, indent + 1, w)?,
                NodeOrToken::Token(t) => {
                    let child_prefix = "  ".repeat(indent + 1);
                    writeln!(
                        w,
                        "{}{}{:?}{} {:?}",
                        child_prefix,
                        self.field_label(field),
                        t.kind(),
                        self.span_str(t.text_range()),
                        t.text()
                    )?;
                }
            }
        }
        Ok(())
    }

    fn children(&self, node: &SyntaxNode) -> Vec<(SyntaxElement, Option<&'static str>)> {
        visible_children(node, self.trivia)
    }

    fn field_label(&self, field: Option<&str>) -> String {
        match field {
            Some(name) if self.fields => format!("{name}: "),
            _ => String::new(),
        }
    }

    fn span_str(&self, range: TextRange) -> String {
        if self.spans {
            format!(" [{}..{}]", u32::from(range.start()), u32::from(range.end()))
        } else {
            String::new()
        }
    }
}

/// Children in document order with their field names. Trivia has no field.
fn visible_children(
    node: &SyntaxNode,
    trivia: bool,
) -> Vec<(SyntaxElement, Option<&'static str>)> {
    if !trivia {
        return meta::fielded_children(node);
    }
    let mut fielded = meta::fielded_children(node).into_iter().peekable();
    meta::children(node)
        .into_iter()
        .map(|child| {
            if child.kind().is_trivia() {
                return (child, None);
            }
            let field = fielded
                .next_if(|(significant, _)| *significant == child)
                .and_then(|(_, field)| field);
            (child, field)
        })
        .collect()
}

/// `{kind, range, field?, children}` for nodes, `{kind, range, field?, text}` for tokens.
pub struct CstJson<'a> {
    element: SyntaxElement,
    field: Option<&'a str>,
    trivia: bool,
}

#[derive(Serialize)]
struct Range(#[serde(serialize_with = "serialize_range")] TextRange);

struct Children<'a> {
    node: &'a SyntaxNode,
    trivia: bool,
}

impl Serialize for Children<'_> {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        let children = visible_children(self.node, self.trivia);
        let mut seq = s.serialize_seq(Some(children.len()))?;
        for (element, field) in children {
            seq.serialize_element(&CstJson {
                element,
                field,
                trivia: self.trivia,
            })?;
        }
        seq.end()
    }
}

impl Serialize for CstJson<'_> {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        let len = if self.field.is_some() { 4 } else { 3 };
        let mut st = s.serialize_struct("CstElement", len)?;
        st.serialize_field("kind", self.element.kind().name())?;
        st.serialize_field("range", &Range(self.element.text_range()))?;
        match self.field {
            Some(field) => st.serialize_field("field", field)?,
            None => st.skip_field("field")?,
        }
        match &self.element {
            NodeOrToken::Node(node) => st.serialize_field(
                "children",
                &Children {
                    node,
                    trivia: self.trivia,
                },
            )?,
            NodeOrToken::Token(token) => st.serialize_field("text", token.text())?,
        }
        st.end()
    }
}
