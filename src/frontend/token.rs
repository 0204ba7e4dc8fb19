use std::fmt;

use crate::utils::errors::{AstError, AstResult};

/// Classified lexical unit kinds handed over by the lexer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // Literals and operands
    Int,
    Float,
    Double,
    Char,
    Str,
    Ident,
    True,
    False,
    // Arithmetic, logical and shift operators
    Plus,
    Minus,
    Multiply,
    Divide,
    Modulo,
    LogicalAnd,
    LogicalOr,
    LShift,
    RShift,
    // Relational operators
    Lt,
    Le,
    Gt,
    Ge,
    Eq,
    Ne,
    // Assignment operators
    Assign,
    PlusEqual,
    MinusEqual,
    MultiplyEqual,
    DivideEqual,
    Inc,
    Dec,
    // Keywords
    If,
    Else,
    While,
    Do,
    For,
    Return,
    Break,
    Continue,
    Func,
    // Punctuation
    LParen,
    RParen,
    LBrace,
    RBrace,
    LBracket,
    RBracket,
    Semicolon,
    Comma,
    Colon,
    // Declared type name such as `int`, carried as text
    TypeName,
    EndMarker,
}

impl TokenKind {
    /// Upper-case diagnostic name, e.g. `MINUS`.
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::Int => "INT",
            TokenKind::Float => "FLOAT",
            TokenKind::Double => "DOUBLE",
            TokenKind::Char => "CHAR",
            TokenKind::Str => "STRING",
            TokenKind::Ident => "ID",
            TokenKind::True => "TRUE",
            TokenKind::False => "FALSE",
            TokenKind::Plus => "PLUS",
            TokenKind::Minus => "MINUS",
            TokenKind::Multiply => "MULTIPLY",
            TokenKind::Divide => "DIVIDE",
            TokenKind::Modulo => "MODULO",
            TokenKind::LogicalAnd => "LOGICAL_AND",
            TokenKind::LogicalOr => "LOGICAL_OR",
            TokenKind::LShift => "LSHIFT",
            TokenKind::RShift => "RSHIFT",
            TokenKind::Lt => "LT",
            TokenKind::Le => "LE",
            TokenKind::Gt => "GT",
            TokenKind::Ge => "GE",
            TokenKind::Eq => "EQ",
            TokenKind::Ne => "NE",
            TokenKind::Assign => "ASSIGN",
            TokenKind::PlusEqual => "PLUSEQUAL",
            TokenKind::MinusEqual => "MINUSEQUAL",
            TokenKind::MultiplyEqual => "MULTIPLYEQUAL",
            TokenKind::DivideEqual => "DIVIDEEQUAL",
            TokenKind::Inc => "INCR",
            TokenKind::Dec => "DECR",
            TokenKind::If => "IF",
            TokenKind::Else => "ELSE",
            TokenKind::While => "WHILE",
            TokenKind::Do => "DO",
            TokenKind::For => "FOR",
            TokenKind::Return => "RETURN",
            TokenKind::Break => "BREAK",
            TokenKind::Continue => "CONTINUE",
            TokenKind::Func => "FUNC",
            TokenKind::LParen => "LP",
            TokenKind::RParen => "RP",
            TokenKind::LBrace => "LBRACE",
            TokenKind::RBrace => "RBRACE",
            TokenKind::LBracket => "LB",
            TokenKind::RBracket => "RB",
            TokenKind::Semicolon => "SEMICOLON",
            TokenKind::Comma => "COMMA",
            TokenKind::Colon => "ASSIGN_DELIM",
            TokenKind::TypeName => "TYPE",
            TokenKind::EndMarker => "ENDMARKER",
        }
    }

    /// Source spelling of the kind. Literal kinds have none.
    pub fn symbol(self) -> Option<&'static str> {
        let symbol = match self {
            TokenKind::Int
            | TokenKind::Float
            | TokenKind::Double
            | TokenKind::Char
            | TokenKind::Str
            | TokenKind::Ident
            | TokenKind::TypeName
            | TokenKind::EndMarker => return None,
            TokenKind::True => "true",
            TokenKind::False => "false",
            TokenKind::Plus => "+",
            TokenKind::Minus => "-",
            TokenKind::Multiply => "*",
            TokenKind::Divide => "/",
            TokenKind::Modulo => "%",
            TokenKind::LogicalAnd => "&&",
            TokenKind::LogicalOr => "||",
            TokenKind::LShift => "<<",
            TokenKind::RShift => ">>",
            TokenKind::Lt => "<",
            TokenKind::Le => "<=",
            TokenKind::Gt => ">",
            TokenKind::Ge => ">=",
            TokenKind::Eq => "==",
            TokenKind::Ne => "!=",
            TokenKind::Assign => "=",
            TokenKind::PlusEqual => "+=",
            TokenKind::MinusEqual => "-=",
            TokenKind::MultiplyEqual => "*=",
            TokenKind::DivideEqual => "/=",
            TokenKind::Inc => "++",
            TokenKind::Dec => "--",
            TokenKind::If => "if",
            TokenKind::Else => "else",
            TokenKind::While => "while",
            TokenKind::Do => "do",
            TokenKind::For => "for",
            TokenKind::Return => "return",
            TokenKind::Break => "break",
            TokenKind::Continue => "continue",
            TokenKind::Func => "func",
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::LBrace => "{",
            TokenKind::RBrace => "}",
            TokenKind::LBracket => "[",
            TokenKind::RBracket => "]",
            TokenKind::Semicolon => ";",
            TokenKind::Comma => ",",
            TokenKind::Colon => ":",
        };
        Some(symbol)
    }

    pub fn is_numeric(self) -> bool {
        matches!(self, TokenKind::Int | TokenKind::Float | TokenKind::Double)
    }

    /// Kinds that may sit in an expression leaf.
    pub fn is_operand(self) -> bool {
        self.is_numeric()
            || matches!(
                self,
                TokenKind::Char
                    | TokenKind::Str
                    | TokenKind::Ident
                    | TokenKind::True
                    | TokenKind::False
            )
    }

    /// Kinds that may sit in an internal expression node.
    pub fn is_binary_operator(self) -> bool {
        self.is_relational()
            || matches!(
                self,
                TokenKind::Plus
                    | TokenKind::Minus
                    | TokenKind::Multiply
                    | TokenKind::Divide
                    | TokenKind::Modulo
                    | TokenKind::LogicalAnd
                    | TokenKind::LogicalOr
                    | TokenKind::LShift
                    | TokenKind::RShift
            )
    }

    pub fn is_relational(self) -> bool {
        matches!(
            self,
            TokenKind::Lt
                | TokenKind::Le
                | TokenKind::Gt
                | TokenKind::Ge
                | TokenKind::Eq
                | TokenKind::Ne
        )
    }

    fn literal_case(self) -> Option<&'static str> {
        match self {
            TokenKind::Int => Some("Int"),
            TokenKind::Float => Some("Float32"),
            TokenKind::Double => Some("Float64"),
            TokenKind::Char => Some("Char"),
            TokenKind::Str | TokenKind::Ident | TokenKind::TypeName => Some("Text"),
            _ => None,
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Literal payload of a token.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenValue {
    Int(i64),
    Char(char),
    Text(String),
    Float32(f32),
    Float64(f64),
}

impl TokenValue {
    fn case(&self) -> &'static str {
        match self {
            TokenValue::Int(_) => "Int",
            TokenValue::Char(_) => "Char",
            TokenValue::Text(_) => "Text",
            TokenValue::Float32(_) => "Float32",
            TokenValue::Float64(_) => "Float64",
        }
    }

    fn spells(&self, symbol: &str) -> bool {
        match self {
            TokenValue::Char(c) => symbol.chars().eq(std::iter::once(*c)),
            TokenValue::Text(s) => s == symbol,
            _ => false,
        }
    }
}

impl fmt::Display for TokenValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenValue::Int(v) => write!(f, "{}", v),
            TokenValue::Char(c) => write!(f, "{}", c),
            TokenValue::Text(s) => f.write_str(s),
            // Debug keeps the fractional part, so `1.0` does not print as `1`
            TokenValue::Float32(v) => write!(f, "{:?}", v),
            TokenValue::Float64(v) => write!(f, "{:?}", v),
        }
    }
}

/// A classified token. Immutable once built; the only way it changes hands is
/// by moving between expression nodes during insertion.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    kind: TokenKind,
    value: Option<TokenValue>,
}

impl Token {
    /// Build a token, checking that the literal matches the kind.
    ///
    /// Literal kinds (`Int`, `Float`, `Double`, `Char`, `Str`, `Ident`,
    /// `TypeName`) require a value of the matching case. Every other kind
    /// carries no value, or one that spells its own symbol, as in `(Minus, '-')`.
    pub fn new(kind: TokenKind, value: Option<TokenValue>) -> AstResult<Self> {
        match (kind.literal_case(), &value) {
            (Some(expected), Some(v)) if v.case() == expected => {
                if let TokenValue::Text(text) = v {
                    if kind != TokenKind::Str && text.is_empty() {
                        return Err(AstError::invalid_token(kind, "empty name"));
                    }
                }
            }
            (Some(expected), Some(v)) => {
                return Err(AstError::invalid_token(
                    kind,
                    format!("expected a {} literal, found {}", expected, v.case()),
                ));
            }
            (Some(expected), None) => {
                return Err(AstError::invalid_token(
                    kind,
                    format!("missing {} literal", expected),
                ));
            }
            (None, Some(v)) => match kind.symbol() {
                Some(symbol) if v.spells(symbol) => {}
                _ => {
                    return Err(AstError::invalid_token(
                        kind,
                        format!("kind carries no literal, found '{}'", v),
                    ));
                }
            },
            (None, None) => {}
        }
        Ok(Self { kind, value })
    }

    pub fn int(value: i64) -> Self {
        Self {
            kind: TokenKind::Int,
            value: Some(TokenValue::Int(value)),
        }
    }

    pub fn float(value: f32) -> Self {
        Self {
            kind: TokenKind::Float,
            value: Some(TokenValue::Float32(value)),
        }
    }

    pub fn double(value: f64) -> Self {
        Self {
            kind: TokenKind::Double,
            value: Some(TokenValue::Float64(value)),
        }
    }

    pub fn char(value: char) -> Self {
        Self {
            kind: TokenKind::Char,
            value: Some(TokenValue::Char(value)),
        }
    }

    pub fn string(value: impl Into<String>) -> Self {
        Self {
            kind: TokenKind::Str,
            value: Some(TokenValue::Text(value.into())),
        }
    }

    pub fn ident(name: impl Into<String>) -> AstResult<Self> {
        Self::new(TokenKind::Ident, Some(TokenValue::Text(name.into())))
    }

    pub fn type_name(name: impl Into<String>) -> AstResult<Self> {
        Self::new(TokenKind::TypeName, Some(TokenValue::Text(name.into())))
    }

    /// A token for a kind with no literal (operators, keywords, punctuation).
    pub fn symbol(kind: TokenKind) -> AstResult<Self> {
        Self::new(kind, None)
    }

    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    pub fn value(&self) -> Option<&TokenValue> {
        self.value.as_ref()
    }

    /// Textual form: the literal if present, otherwise the kind's spelling.
    pub fn render(&self) -> String {
        match (&self.value, self.kind) {
            (Some(TokenValue::Char(c)), TokenKind::Char) => format!("'{}'", c),
            (Some(TokenValue::Text(s)), TokenKind::Str) => format!("\"{}\"", s),
            (Some(value), _) => value.to_string(),
            (None, kind) => kind.symbol().unwrap_or(kind.name()).to_string(),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
