//! Abstract syntax tree core for a small imperative-language front end.
//!
//! ```text
//! Lexer → Token → [insert_token / graft / build_*] → Tree → walk(visitor)
//! ```
//!
//! The lexer and the grammar-driven parser live outside this crate. The parser
//! hands over classified [`frontend::Token`]s, grows [`ast::Expression`]s one
//! token at a time, wires statements with the `build_*` helpers in
//! [`ast::builders`], and grafts them onto an [`ast::Tree`]. Once built, the
//! tree is read-only and [`semantic::walk`] dispatches each node to an
//! [`semantic::ASTVisitor`].

pub mod ast;
pub mod frontend;
pub mod semantic;
pub mod utils;

pub use utils::errors;

pub const VERSION: &str = "0.1.0";
