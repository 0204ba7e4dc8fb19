// Abstract syntax tree: node model, expression growth and statement skeleton.

mod traits;
pub use traits::AstNode;

mod block;
pub mod builders;
mod expression;
mod node;
mod statements;
mod tree;

pub use block::Body;
pub use expression::Expression;
pub use node::{Node, NodeId, NodeKind};
pub use statements::{Assignment, Condition, For, If, Return, While};
pub use tree::{Preorder, Tree};
