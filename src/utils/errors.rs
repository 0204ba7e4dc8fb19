use thiserror::Error;

use crate::ast::NodeId;
use crate::frontend::token::TokenKind;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AstError {
    // Expression growth and grafting
    #[error("Malformed insertion: {reason}")]
    MalformedInsertion { reason: String },
    #[error("Aliasing violation on {node}: {reason}")]
    AliasingViolation { node: NodeId, reason: String },
    #[error("Unknown node {node}: not allocated in this tree")]
    UnknownNode { node: NodeId },

    // Construction
    #[error("Invalid {kind} token: {reason}")]
    InvalidToken { kind: TokenKind, reason: String },
    #[error("Malformed {statement} statement: {reason}")]
    MalformedStatement {
        statement: &'static str,
        reason: String,
    },

    // Output
    #[error("Render error: {message}")]
    Render { message: String },
}

impl AstError {
    /// Create a malformed insertion error
    pub fn malformed_insertion(reason: impl Into<String>) -> Self {
        AstError::MalformedInsertion {
            reason: reason.into(),
        }
    }

    /// Create an aliasing violation for `node`
    pub fn aliasing(node: NodeId, reason: impl Into<String>) -> Self {
        AstError::AliasingViolation {
            node,
            reason: reason.into(),
        }
    }

    pub fn invalid_token(kind: TokenKind, reason: impl Into<String>) -> Self {
        AstError::InvalidToken {
            kind,
            reason: reason.into(),
        }
    }

    pub fn malformed_statement(statement: &'static str, reason: impl Into<String>) -> Self {
        AstError::MalformedStatement {
            statement,
            reason: reason.into(),
        }
    }

    pub fn render(message: impl Into<String>) -> Self {
        AstError::Render {
            message: message.into(),
        }
    }
}

// Type alias for Result with AstError
pub type AstResult<T> = Result<T, AstError>;
