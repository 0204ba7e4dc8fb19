use crate::ast::{
    Assignment, AstNode, Body, Condition, Expression, For, If, NodeId, Return, Tree, While,
};

/// One operation per node variant. There are no default methods, so a new
/// variant cannot be added without every visitor handling it.
///
/// Visitors report their own failures through their own state; `walk` never
/// stops early.
pub trait ASTVisitor {
    fn visit_expression(&mut self, expr: &Expression);
    fn visit_condition(&mut self, condition: &Condition);
    fn visit_assignment(&mut self, assign: &Assignment);
    fn visit_return(&mut self, ret: &Return);
    fn visit_body(&mut self, body: &Body);
    fn visit_if(&mut self, stmt: &If);
    fn visit_while(&mut self, stmt: &While);
    fn visit_for(&mut self, stmt: &For);
}

/// Visit every node reachable from the tree's root over the skeleton links,
/// in pre-order (node, then `left`, then `right`).
pub fn walk(tree: &Tree, visitor: &mut dyn ASTVisitor) {
    walk_from(tree, tree.root(), visitor);
}

/// Same as [`walk`], starting at `start`. `None` visits nothing.
pub fn walk_from(tree: &Tree, start: Option<NodeId>, visitor: &mut dyn ASTVisitor) {
    for (_, node) in tree.preorder_from(start) {
        node.accept(visitor);
    }
}
