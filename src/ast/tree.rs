use std::sync::atomic::{AtomicU64, Ordering};

use crate::ast::{Node, NodeId};
use crate::utils::config::tree;
use crate::utils::errors::{AstError, AstResult};

#[derive(Debug, Clone)]
struct Slot {
    node: Node,
    left: Option<NodeId>,
    right: Option<NodeId>,
    // Non-owning back-reference, only used for bookkeeping during growth
    parent: Option<NodeId>,
    rooted: bool,
}

impl Slot {
    fn is_attached(&self) -> bool {
        self.parent.is_some() || self.rooted
    }
}

/// Statement skeleton.
///
/// Nodes live in an index arena and are chained through `left`/`right`
/// links independent of their semantic fields. Each node is linked from at
/// most one place, and dropping the tree drops every node exactly once.
#[derive(Debug, Clone)]
pub struct Tree {
    // Stamped into every id this tree hands out
    tag: u64,
    slots: Vec<Slot>,
    root: Option<NodeId>,
}

static NEXT_TAG: AtomicU64 = AtomicU64::new(0);

impl Tree {
    pub fn new() -> Self {
        Self {
            tag: NEXT_TAG.fetch_add(1, Ordering::Relaxed),
            slots: Vec::with_capacity(tree::INITIAL_CAPACITY),
            root: None,
        }
    }

    /// Allocate a detached node. It becomes part of the skeleton once grafted.
    pub fn add(&mut self, node: impl Into<Node>) -> NodeId {
        let id = NodeId::new(self.tag, self.slots.len());
        self.slots.push(Slot {
            node: node.into(),
            left: None,
            right: None,
            parent: None,
            rooted: false,
        });
        id
    }

    /// Attach `node` to the next free skeleton slot under `root`.
    ///
    /// The descent takes `left` if empty, else `right` if empty, else keeps
    /// going right. With no `root`, `node` itself becomes the root. Either
    /// way the root to use from now on is returned.
    pub fn graft(&mut self, root: Option<NodeId>, node: NodeId) -> AstResult<NodeId> {
        let incoming = self.slot(node)?;
        if let Some(parent) = incoming.parent {
            return Err(AstError::aliasing(
                node,
                format!("already linked under {}", parent),
            ));
        }
        if incoming.rooted {
            return Err(AstError::aliasing(node, "already the root of a tree"));
        }

        let Some(root) = root else {
            self.slot_mut(node)?.rooted = true;
            return Ok(node);
        };
        self.slot(root)?;
        if self.ancestors(root).any(|id| id == node) {
            return Err(AstError::aliasing(
                node,
                format!("grafting under {} would create a cycle", root),
            ));
        }

        let temp = self.open_slot(root)?;
        let slot = self.slot_mut(temp)?;
        if slot.left.is_none() {
            slot.left = Some(node);
        } else {
            slot.right = Some(node);
        }
        self.slot_mut(node)?.parent = Some(temp);
        Ok(root)
    }

    /// Allocate `node` and graft it onto this tree's own root.
    pub fn append(&mut self, node: impl Into<Node>) -> AstResult<NodeId> {
        let id = self.add(node);
        self.root = Some(self.graft(self.root, id)?);
        Ok(id)
    }

    /// Adopt a node as this tree's root, e.g. after grafting onto `None`.
    pub fn set_root(&mut self, id: NodeId) -> AstResult<()> {
        let slot = self.slot_mut(id)?;
        if let Some(parent) = slot.parent {
            return Err(AstError::aliasing(
                id,
                format!("linked under {} cannot be a root", parent),
            ));
        }
        slot.rooted = true;
        if let Some(previous) = self.root.replace(id) {
            if previous != id {
                self.slot_mut(previous)?.rooted = false;
            }
        }
        Ok(())
    }

    fn open_slot(&self, root: NodeId) -> AstResult<NodeId> {
        let mut current = root;
        loop {
            let slot = self.slot(current)?;
            match (slot.left, slot.right) {
                (None, _) | (_, None) => return Ok(current),
                (Some(_), Some(right)) => current = right,
            }
        }
    }

    fn ancestors(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        std::iter::successors(Some(id), move |current| {
            self.lookup(*current).and_then(|s| s.parent)
        })
    }

    fn lookup(&self, id: NodeId) -> Option<&Slot> {
        if id.tree() != self.tag {
            return None;
        }
        self.slots.get(id.index())
    }

    fn slot(&self, id: NodeId) -> AstResult<&Slot> {
        self.lookup(id).ok_or(AstError::UnknownNode { node: id })
    }

    fn slot_mut(&mut self, id: NodeId) -> AstResult<&mut Slot> {
        if id.tree() != self.tag {
            return Err(AstError::UnknownNode { node: id });
        }
        self.slots
            .get_mut(id.index())
            .ok_or(AstError::UnknownNode { node: id })
    }

    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.lookup(id).map(|s| &s.node)
    }

    pub fn left(&self, id: NodeId) -> Option<NodeId> {
        self.lookup(id).and_then(|s| s.left)
    }

    pub fn right(&self, id: NodeId) -> Option<NodeId> {
        self.lookup(id).and_then(|s| s.right)
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.lookup(id).and_then(|s| s.parent)
    }

    pub fn is_attached(&self, id: NodeId) -> bool {
        self.lookup(id).is_some_and(Slot::is_attached)
    }

    /// Number of allocated nodes, attached or not.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// All allocated ids in allocation order.
    pub fn ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        (0..self.slots.len()).map(move |index| NodeId::new(self.tag, index))
    }

    /// Pre-order over the skeleton from this tree's root, left before right.
    pub fn preorder(&self) -> Preorder<'_> {
        self.preorder_from(self.root)
    }

    pub fn preorder_from(&self, start: Option<NodeId>) -> Preorder<'_> {
        Preorder {
            tree: self,
            stack: start.into_iter().collect(),
        }
    }
}

impl Default for Tree {
    fn default() -> Self {
        Self::new()
    }
}

pub struct Preorder<'a> {
    tree: &'a Tree,
    stack: Vec<NodeId>,
}

impl<'a> Iterator for Preorder<'a> {
    type Item = (NodeId, &'a Node);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let id = self.stack.pop()?;
            let Some(slot) = self.tree.lookup(id) else {
                continue;
            };
            if let Some(right) = slot.right {
                self.stack.push(right);
            }
            if let Some(left) = slot.left {
                self.stack.push(left);
            }
            return Some((id, &slot.node));
        }
    }
}
