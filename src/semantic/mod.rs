pub mod printer;
pub mod visiters;

pub use printer::{DebugPrinter, NoopVisitor};
pub use visiters::{walk, walk_from, ASTVisitor};
