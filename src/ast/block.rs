use crate::ast::{AstNode, Node, NodeId, NodeKind, Tree};
use crate::semantic::visiters::ASTVisitor;
use crate::utils::config::render;
use crate::utils::errors::AstResult;

/// A block of statements chained on its own skeleton.
#[derive(Debug, Clone, Default)]
pub struct Body {
    statements: Tree,
}

impl Body {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a statement after every statement already in the block.
    pub fn push(&mut self, statement: impl Into<Node>) -> AstResult<NodeId> {
        self.statements.append(statement)
    }

    pub fn statements(&self) -> &Tree {
        &self.statements
    }

    pub fn len(&self) -> usize {
        self.statements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }
}

impl AstNode for Body {
    fn kind(&self) -> NodeKind {
        NodeKind::Body
    }

    fn accept(&self, visitor: &mut dyn ASTVisitor) {
        visitor.visit_body(self);
    }

    fn render(&self) -> String {
        let statements: Vec<String> = self
            .statements
            .preorder()
            .map(|(_, node)| node.render())
            .collect();
        if statements.is_empty() {
            return format!("{}{}", render::BODY_OPEN, render::BODY_CLOSE);
        }
        format!(
            "{} {} {}",
            render::BODY_OPEN,
            statements.join(render::STATEMENT_SEPARATOR),
            render::BODY_CLOSE
        )
    }
}
