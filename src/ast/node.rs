use std::fmt;

use crate::ast::{Assignment, AstNode, Body, Condition, Expression, For, If, Return, While};
use crate::semantic::visiters::ASTVisitor;

/// Discriminant of a [`Node`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Expression,
    Condition,
    Assignment,
    Return,
    Body,
    If,
    While,
    For,
}

impl NodeKind {
    pub const ALL: [NodeKind; 8] = [
        NodeKind::Expression,
        NodeKind::Condition,
        NodeKind::Assignment,
        NodeKind::Return,
        NodeKind::Body,
        NodeKind::If,
        NodeKind::While,
        NodeKind::For,
    ];

    pub fn label(self) -> &'static str {
        match self {
            NodeKind::Expression => "Expression",
            NodeKind::Condition => "Condition",
            NodeKind::Assignment => "Assignment",
            NodeKind::Return => "Return",
            NodeKind::Body => "Body",
            NodeKind::If => "If",
            NodeKind::While => "While",
            NodeKind::For => "For",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Index of a node inside the [`crate::ast::Tree`] that allocated it.
///
/// The id also records which tree allocated it, so an id handed to another
/// tree is reported as unknown instead of resolving to an unrelated node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId {
    tree: u64,
    index: usize,
}

impl NodeId {
    pub(crate) fn new(tree: u64, index: usize) -> Self {
        Self { tree, index }
    }

    /// Return the underlying index.
    pub fn index(self) -> usize {
        self.index
    }

    pub(crate) fn tree(self) -> u64 {
        self.tree
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "node#{}", self.index)
    }
}

/// Closed set of node variants. Each variant owns its semantic children.
#[derive(Debug, Clone)]
pub enum Node {
    Expression(Expression),
    Condition(Condition),
    Assignment(Assignment),
    Return(Return),
    Body(Body),
    If(If),
    While(While),
    For(For),
}

impl Node {
    fn as_ast_node(&self) -> &dyn AstNode {
        match self {
            Node::Expression(node) => node,
            Node::Condition(node) => node,
            Node::Assignment(node) => node,
            Node::Return(node) => node,
            Node::Body(node) => node,
            Node::If(node) => node,
            Node::While(node) => node,
            Node::For(node) => node,
        }
    }
}

impl AstNode for Node {
    fn kind(&self) -> NodeKind {
        self.as_ast_node().kind()
    }

    fn accept(&self, visitor: &mut dyn ASTVisitor) {
        self.as_ast_node().accept(visitor)
    }

    fn render(&self) -> String {
        self.as_ast_node().render()
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

macro_rules! impl_from_variant {
    ($($variant:ident),* $(,)?) => {
        $(
            impl From<$variant> for Node {
                fn from(node: $variant) -> Self {
                    Node::$variant(node)
                }
            }
        )*
    };
}

impl_from_variant!(Expression, Condition, Assignment, Return, Body, If, While, For);
