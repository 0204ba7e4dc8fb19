use crate::ast::NodeKind;
use crate::semantic::visiters::ASTVisitor;

/// Capability shared by every node variant.
pub trait AstNode {
    /// Discriminant of the concrete variant. Fixed at construction.
    fn kind(&self) -> NodeKind;

    /// Hand `self` to the visitor operation for its own kind.
    fn accept(&self, visitor: &mut dyn ASTVisitor);

    /// Human-readable, single-line form.
    fn render(&self) -> String;
}
