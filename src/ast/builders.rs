//! Entry points the parser calls to create and link nodes.
//!
//! Statement builders only wire fields together; they never search a tree.
//! The two growth operations, [`insert_token`] and [`graft`], are the only
//! ones that walk existing structure.

use crate::ast::{
    Assignment, Body, Condition, Expression, For, If, Node, NodeId, Return, Tree, While,
};
use crate::frontend::token::{Token, TokenKind, TokenValue};
use crate::utils::errors::AstResult;

pub fn new_token(kind: TokenKind, value: Option<TokenValue>) -> AstResult<Token> {
    Token::new(kind, value)
}

/// Seed a root leaf.
pub fn new_expression(token: Token) -> Expression {
    Expression::new(token)
}

pub fn insert_token(root: &mut Expression, token: Token) -> AstResult<()> {
    root.insert_token(token)
}

/// Graft `node` under `root` and return the root the caller must keep.
pub fn graft(tree: &mut Tree, root: Option<NodeId>, node: NodeId) -> AstResult<NodeId> {
    tree.graft(root, node)
}

// The builders return their concrete type so one feeds straight into the
// next (`build_condition` into `build_if`); `Node::from` wraps them for grafting.

pub fn build_condition(operator: Token, lhs: Expression, rhs: Expression) -> AstResult<Condition> {
    Condition::new(operator, lhs, rhs)
}

pub fn build_assign(target: Token, value: Expression) -> AstResult<Assignment> {
    Assignment::new(target, value)
}

pub fn build_return(value: Option<Expression>) -> AstResult<Return> {
    Return::new(value)
}

pub fn build_if(condition: Condition, body: Body) -> If {
    If::new(condition, body)
}

pub fn build_while(condition: Condition, body: Body) -> While {
    While::new(condition, body)
}

pub fn build_for(init: Assignment, condition: Condition, body: Body) -> For {
    For::new(init, condition, body)
}

/// Append `statement` to the body's own skeleton.
pub fn build_body(body: &mut Body, statement: impl Into<Node>) -> AstResult<NodeId> {
    body.push(statement)
}
