use crate::ast::{
    Assignment, AstNode, Body, Condition, Expression, For, If, NodeKind, Return, While,
};
use crate::semantic::visiters::{walk, ASTVisitor};
use crate::utils::config::PrinterConfig;
use crate::utils::errors::AstError;
use crate::utils::string_utils::write_line;

/// Renders each visited node on its own line. Bodies are expanded one
/// indentation level deeper.
#[derive(Debug, Default)]
pub struct DebugPrinter {
    config: PrinterConfig,
    depth: usize,
    output: String,
    error: Option<AstError>,
}

impl DebugPrinter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: PrinterConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn output(&self) -> &str {
        &self.output
    }

    pub fn into_output(self) -> String {
        self.output
    }

    /// First error hit while writing, if any. Output after it is incomplete.
    pub fn error(&self) -> Option<&AstError> {
        self.error.as_ref()
    }

    fn line(&mut self, kind: NodeKind, text: &str) {
        let indent = self.depth * self.config.indent_width;
        let written = if self.config.show_kinds && text.is_empty() {
            write_line(&mut self.output, indent, format_args!("{}", kind))
        } else if self.config.show_kinds {
            write_line(&mut self.output, indent, format_args!("{}: {}", kind, text))
        } else {
            write_line(&mut self.output, indent, format_args!("{}", text))
        };
        if let Err(err) = written {
            self.error.get_or_insert(err);
        }
    }

    fn expand(&mut self, body: &Body) {
        self.depth += 1;
        walk(body.statements(), self);
        self.depth -= 1;
    }
}

impl ASTVisitor for DebugPrinter {
    fn visit_expression(&mut self, expr: &Expression) {
        self.line(expr.kind(), &expr.render());
    }

    fn visit_condition(&mut self, condition: &Condition) {
        self.line(condition.kind(), &condition.render());
    }

    fn visit_assignment(&mut self, assign: &Assignment) {
        self.line(assign.kind(), &assign.render());
    }

    fn visit_return(&mut self, ret: &Return) {
        let text = ret.value().map(Expression::render).unwrap_or_default();
        self.line(ret.kind(), &text);
    }

    fn visit_body(&mut self, body: &Body) {
        self.line(body.kind(), &format!("{} statement(s)", body.len()));
        self.expand(body);
    }

    fn visit_if(&mut self, stmt: &If) {
        self.line(stmt.kind(), &stmt.condition().render());
        self.expand(stmt.body());
    }

    fn visit_while(&mut self, stmt: &While) {
        self.line(stmt.kind(), &stmt.condition().render());
        self.expand(stmt.body());
    }

    fn visit_for(&mut self, stmt: &For) {
        let header = format!("{}; {}", stmt.init().render(), stmt.condition().render());
        self.line(stmt.kind(), &header);
        self.expand(stmt.body());
    }
}

/// Visits everything and does nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopVisitor;

impl ASTVisitor for NoopVisitor {
    fn visit_expression(&mut self, _expr: &Expression) {}
    fn visit_condition(&mut self, _condition: &Condition) {}
    fn visit_assignment(&mut self, _assign: &Assignment) {}
    fn visit_return(&mut self, _ret: &Return) {}
    fn visit_body(&mut self, _body: &Body) {}
    fn visit_if(&mut self, _stmt: &If) {}
    fn visit_while(&mut self, _stmt: &While) {}
    fn visit_for(&mut self, _stmt: &For) {}
}
