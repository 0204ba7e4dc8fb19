use std::mem;

use crate::ast::{AstNode, NodeKind};
use crate::frontend::token::Token;
use crate::semantic::visiters::ASTVisitor;
use crate::utils::config::render;
use crate::utils::errors::{AstError, AstResult};
use crate::utils::string_utils::join_tokens;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    Left,
    Right,
}

/// Binary expression tree grown one token at a time.
///
/// Leaves hold operands (literals, identifiers); internal nodes hold binary
/// operators. Children are exclusively owned, so a subtree can never be
/// reachable from two parents.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Expression {
    token: Option<Token>,
    left: Option<Box<Expression>>,
    right: Option<Box<Expression>>,
}

impl Expression {
    /// Seed a root leaf with the first token of the expression.
    pub fn new(token: Token) -> Self {
        Self {
            token: Some(token),
            left: None,
            right: None,
        }
    }

    /// An expression that was never seeded. Every insertion into it fails.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn token(&self) -> Option<&Token> {
        self.token.as_ref()
    }

    pub fn left(&self) -> Option<&Expression> {
        self.left.as_deref()
    }

    pub fn right(&self) -> Option<&Expression> {
        self.right.as_deref()
    }

    pub fn is_seeded(&self) -> bool {
        self.token.is_some()
    }

    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Insert the next token of the expression.
    ///
    /// The descent prefers an empty left slot, then an empty right slot, and
    /// otherwise continues to the right. An operand lands as a fresh leaf in
    /// that slot. An operator arriving at an operand leaf rotates: the new
    /// operator takes the leaf's place and the leaf becomes its child on the
    /// side the free slot was found. Tokens that would put two operands or two
    /// operators next to each other are rejected and leave the tree untouched,
    /// as is an operand that would land before an operator seed.
    pub fn insert_token(&mut self, tok: Token) -> AstResult<()> {
        if !self.is_seeded() {
            return Err(AstError::malformed_insertion(format!(
                "cannot insert '{}' into an unseeded expression",
                tok
            )));
        }
        let kind = tok.kind();
        if !kind.is_operand() && !kind.is_binary_operator() {
            return Err(AstError::malformed_insertion(format!(
                "{} token '{}' is neither an operand nor a binary operator",
                kind, tok
            )));
        }

        let (temp, side) = self.open_slot();
        // Only seeded nodes are ever linked below a seeded root
        let holder_is_operand = temp.token.as_ref().is_some_and(|t| t.kind().is_operand());

        match (holder_is_operand, kind.is_operand()) {
            (true, false) => {
                temp.rotate(Expression::new(tok), side);
                Ok(())
            }
            // An operator only lacks a left operand when it seeded the tree
            (false, true) if side == Side::Left => Err(AstError::malformed_insertion(format!(
                "operand '{}' would precede operator '{}'",
                tok,
                temp.render_token()
            ))),
            (false, true) => {
                temp.right = Some(Box::new(Expression::new(tok)));
                Ok(())
            }
            (true, true) => Err(AstError::malformed_insertion(format!(
                "operand '{}' follows operand '{}'",
                tok,
                temp.render_token()
            ))),
            (false, false) => Err(AstError::malformed_insertion(format!(
                "operator '{}' follows operator '{}'",
                tok,
                temp.render_token()
            ))),
        }
    }

    /// First node, in the deterministic descent, with an empty child slot.
    fn open_slot(&mut self) -> (&mut Expression, Side) {
        if self.left.is_none() {
            return (self, Side::Left);
        }
        if self.right.is_none() {
            return (self, Side::Right);
        }
        match self.right {
            Some(ref mut next) => next.open_slot(),
            None => (self, Side::Right),
        }
    }

    /// Put `node` where `self` was and hang the old occupant below it.
    fn rotate(&mut self, node: Expression, side: Side) {
        let mut displaced = mem::replace(self, node);
        match side {
            Side::Left => {
                self.right = displaced.right.take();
                self.left = Some(Box::new(displaced));
            }
            Side::Right => {
                self.left = displaced.left.take();
                self.right = Some(Box::new(displaced));
            }
        }
    }

    fn render_token(&self) -> String {
        self.token
            .as_ref()
            .map(Token::render)
            .unwrap_or_else(|| render::EMPTY_SLOT.to_string())
    }

    /// Tokens in left-to-right (in-order) position.
    pub fn tokens(&self) -> Vec<&Token> {
        let mut out = Vec::new();
        self.collect_tokens(&mut out);
        out
    }

    fn collect_tokens<'a>(&'a self, out: &mut Vec<&'a Token>) {
        if let Some(left) = &self.left {
            left.collect_tokens(out);
        }
        if let Some(token) = &self.token {
            out.push(token);
        }
        if let Some(right) = &self.right {
            right.collect_tokens(out);
        }
    }

    /// Number of seeded nodes in the tree.
    pub fn len(&self) -> usize {
        usize::from(self.token.is_some())
            + self.left.as_ref().map_or(0, |l| l.len())
            + self.right.as_ref().map_or(0, |r| r.len())
    }

    pub fn is_empty(&self) -> bool {
        !self.is_seeded()
    }

    pub fn depth(&self) -> usize {
        if !self.is_seeded() {
            return 0;
        }
        let left = self.left.as_ref().map_or(0, |l| l.depth());
        let right = self.right.as_ref().map_or(0, |r| r.depth());
        1 + left.max(right)
    }

    /// Every internal node has both children and every leaf holds an operand.
    pub fn is_complete(&self) -> bool {
        match (&self.token, &self.left, &self.right) {
            (Some(t), None, None) => t.kind().is_operand(),
            (Some(t), Some(l), Some(r)) => {
                t.kind().is_binary_operator() && l.is_complete() && r.is_complete()
            }
            _ => false,
        }
    }
}

impl AstNode for Expression {
    fn kind(&self) -> NodeKind {
        NodeKind::Expression
    }

    fn accept(&self, visitor: &mut dyn ASTVisitor) {
        visitor.visit_expression(self);
    }

    fn render(&self) -> String {
        join_tokens(self.tokens().into_iter().map(Token::render))
    }
}
