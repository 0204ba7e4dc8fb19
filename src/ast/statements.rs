use crate::ast::{AstNode, Body, Expression, NodeKind};
use crate::frontend::token::{Token, TokenKind};
use crate::semantic::visiters::ASTVisitor;
use crate::utils::errors::{AstError, AstResult};
use crate::utils::string_utils::join_tokens;

fn require_seeded(statement: &'static str, role: &str, expr: &Expression) -> AstResult<()> {
    if expr.is_seeded() {
        Ok(())
    } else {
        Err(AstError::malformed_statement(
            statement,
            format!("{} expression was never seeded", role),
        ))
    }
}

/// A single relational comparison, `lhs <op> rhs`.
#[derive(Debug, Clone, PartialEq)]
pub struct Condition {
    operator: Token,
    lhs: Expression,
    rhs: Expression,
}

impl Condition {
    pub fn new(operator: Token, lhs: Expression, rhs: Expression) -> AstResult<Self> {
        if !operator.kind().is_relational() {
            return Err(AstError::malformed_statement(
                "condition",
                format!("'{}' is not a relational operator", operator),
            ));
        }
        require_seeded("condition", "left-hand", &lhs)?;
        require_seeded("condition", "right-hand", &rhs)?;
        Ok(Self { operator, lhs, rhs })
    }

    pub fn operator(&self) -> &Token {
        &self.operator
    }

    pub fn lhs(&self) -> &Expression {
        &self.lhs
    }

    pub fn rhs(&self) -> &Expression {
        &self.rhs
    }
}

impl AstNode for Condition {
    fn kind(&self) -> NodeKind {
        NodeKind::Condition
    }

    fn accept(&self, visitor: &mut dyn ASTVisitor) {
        visitor.visit_condition(self);
    }

    fn render(&self) -> String {
        join_tokens([
            self.lhs.render(),
            self.operator.render(),
            self.rhs.render(),
        ])
    }
}

/// `[type] name = value`
#[derive(Debug, Clone, PartialEq)]
pub struct Assignment {
    declared_type: Option<Token>,
    target: Token,
    value: Expression,
}

impl Assignment {
    pub fn new(target: Token, value: Expression) -> AstResult<Self> {
        if target.kind() != TokenKind::Ident {
            return Err(AstError::malformed_statement(
                "assignment",
                format!("target must be an identifier, found {}", target.kind()),
            ));
        }
        require_seeded("assignment", "value", &value)?;
        Ok(Self {
            declared_type: None,
            target,
            value,
        })
    }

    /// Attach a declared type, turning the assignment into a declaration.
    pub fn with_type(mut self, declared_type: Token) -> AstResult<Self> {
        if declared_type.kind() != TokenKind::TypeName {
            return Err(AstError::malformed_statement(
                "assignment",
                format!("expected a type name, found {}", declared_type.kind()),
            ));
        }
        self.declared_type = Some(declared_type);
        Ok(self)
    }

    pub fn declared_type(&self) -> Option<&Token> {
        self.declared_type.as_ref()
    }

    pub fn target(&self) -> &Token {
        &self.target
    }

    pub fn value(&self) -> &Expression {
        &self.value
    }
}

impl AstNode for Assignment {
    fn kind(&self) -> NodeKind {
        NodeKind::Assignment
    }

    fn accept(&self, visitor: &mut dyn ASTVisitor) {
        visitor.visit_assignment(self);
    }

    fn render(&self) -> String {
        join_tokens([
            self.declared_type
                .as_ref()
                .map(Token::render)
                .unwrap_or_default(),
            self.target.render(),
            "=".to_string(),
            self.value.render(),
        ])
    }
}

/// `return [value]`
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Return {
    value: Option<Expression>,
}

impl Return {
    pub fn new(value: Option<Expression>) -> AstResult<Self> {
        if let Some(value) = &value {
            require_seeded("return", "returned", value)?;
        }
        Ok(Self { value })
    }

    /// A bare `return`.
    pub fn bare() -> Self {
        Self::default()
    }

    pub fn value(&self) -> Option<&Expression> {
        self.value.as_ref()
    }
}

impl AstNode for Return {
    fn kind(&self) -> NodeKind {
        NodeKind::Return
    }

    fn accept(&self, visitor: &mut dyn ASTVisitor) {
        visitor.visit_return(self);
    }

    fn render(&self) -> String {
        match &self.value {
            Some(value) => format!("return {}", value.render()),
            None => "return".to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct If {
    condition: Condition,
    body: Body,
}

impl If {
    pub fn new(condition: Condition, body: Body) -> Self {
        Self { condition, body }
    }

    pub fn condition(&self) -> &Condition {
        &self.condition
    }

    pub fn body(&self) -> &Body {
        &self.body
    }
}

impl AstNode for If {
    fn kind(&self) -> NodeKind {
        NodeKind::If
    }

    fn accept(&self, visitor: &mut dyn ASTVisitor) {
        visitor.visit_if(self);
    }

    fn render(&self) -> String {
        format!("if ({}) {}", self.condition.render(), self.body.render())
    }
}

#[derive(Debug, Clone)]
pub struct While {
    condition: Condition,
    body: Body,
}

impl While {
    pub fn new(condition: Condition, body: Body) -> Self {
        Self { condition, body }
    }

    pub fn condition(&self) -> &Condition {
        &self.condition
    }

    pub fn body(&self) -> &Body {
        &self.body
    }
}

impl AstNode for While {
    fn kind(&self) -> NodeKind {
        NodeKind::While
    }

    fn accept(&self, visitor: &mut dyn ASTVisitor) {
        visitor.visit_while(self);
    }

    fn render(&self) -> String {
        format!("while ({}) {}", self.condition.render(), self.body.render())
    }
}

#[derive(Debug, Clone)]
pub struct For {
    init: Assignment,
    condition: Condition,
    body: Body,
}

impl For {
    pub fn new(init: Assignment, condition: Condition, body: Body) -> Self {
        Self {
            init,
            condition,
            body,
        }
    }

    pub fn init(&self) -> &Assignment {
        &self.init
    }

    pub fn condition(&self) -> &Condition {
        &self.condition
    }

    pub fn body(&self) -> &Body {
        &self.body
    }
}

impl AstNode for For {
    fn kind(&self) -> NodeKind {
        NodeKind::For
    }

    fn accept(&self, visitor: &mut dyn ASTVisitor) {
        visitor.visit_for(self);
    }

    fn render(&self) -> String {
        format!(
            "for ({}; {}) {}",
            self.init.render(),
            self.condition.render(),
            self.body.render()
        )
    }
}
