use std::collections::HashMap;

use astgraft::ast::{builders, AstNode, Expression, Node, NodeId, Return, Tree};
use astgraft::errors::{AstError, AstResult};
use astgraft::frontend::Token;

fn ret(value: i64) -> AstResult<Node> {
    builders::build_return(Some(Expression::new(Token::int(value)))).map(Node::from)
}

fn rendered_preorder(tree: &Tree) -> Vec<String> {
    tree.preorder().map(|(_, node)| node.render()).collect()
}

#[test]
fn test_graft_onto_missing_root_returns_new_root() -> AstResult<()> {
    let mut tree = Tree::new();
    let first = tree.add(ret(1)?);
    let root = builders::graft(&mut tree, None, first)?;
    assert_eq!(root, first);
    assert!(tree.is_attached(first));

    let second = tree.add(ret(2)?);
    let root = builders::graft(&mut tree, Some(root), second)?;
    assert_eq!(root, first);
    assert_eq!(tree.left(first), Some(second));
    assert_eq!(tree.parent(second), Some(first));

    // Nothing is walked until the caller adopts the returned root
    assert_eq!(tree.preorder().count(), 0);
    tree.set_root(root)?;
    assert_eq!(rendered_preorder(&tree), vec!["return 1", "return 2"]);
    Ok(())
}

#[test]
fn test_grafting_order_is_preserved() -> AstResult<()> {
    let mut tree = Tree::new();
    for value in 1..=3 {
        tree.append(ret(value)?)?;
    }
    assert_eq!(
        rendered_preorder(&tree),
        vec!["return 1", "return 2", "return 3"]
    );

    for value in 4..=7 {
        tree.append(ret(value)?)?;
    }
    let expected: Vec<String> = (1..=7).map(|v| format!("return {}", v)).collect();
    assert_eq!(rendered_preorder(&tree), expected);
    Ok(())
}

#[test]
fn test_skeleton_shape_follows_right_spine() -> AstResult<()> {
    let mut tree = Tree::new();
    let s1 = tree.append(ret(1)?)?;
    let s2 = tree.append(ret(2)?)?;
    let s3 = tree.append(ret(3)?)?;
    let s4 = tree.append(ret(4)?)?;
    let s5 = tree.append(ret(5)?)?;

    assert_eq!(tree.root(), Some(s1));
    assert_eq!((tree.left(s1), tree.right(s1)), (Some(s2), Some(s3)));
    assert_eq!((tree.left(s2), tree.right(s2)), (None, None));
    assert_eq!((tree.left(s3), tree.right(s3)), (Some(s4), Some(s5)));
    assert_eq!(tree.parent(s5), Some(s3));
    assert_eq!(tree.parent(s1), None);
    Ok(())
}

#[test]
fn test_every_node_has_exactly_one_owner() -> AstResult<()> {
    let mut tree = Tree::new();
    for value in 0..20 {
        tree.append(ret(value)?)?;
    }

    let mut owners: HashMap<NodeId, usize> = HashMap::new();
    for id in tree.ids() {
        for child in [tree.left(id), tree.right(id)].into_iter().flatten() {
            *owners.entry(child).or_default() += 1;
            assert_eq!(tree.parent(child), Some(id));
        }
    }

    let root = tree.root().expect("root");
    for id in tree.ids() {
        let expected = if id == root { 0 } else { 1 };
        assert_eq!(owners.get(&id).copied().unwrap_or(0), expected, "{}", id);
    }
    assert_eq!(tree.preorder().count(), 20);
    Ok(())
}

#[test]
fn test_grafting_an_owned_node_is_rejected() -> AstResult<()> {
    let mut tree = Tree::new();
    let a = tree.append(ret(1)?)?;
    let b = tree.append(ret(2)?)?;
    let c = tree.add(ret(3)?);

    let err = tree.graft(Some(a), b).unwrap_err();
    assert!(matches!(err, AstError::AliasingViolation { node, .. } if node == b));

    let err = tree.graft(Some(c), a).unwrap_err();
    assert!(matches!(err, AstError::AliasingViolation { node, .. } if node == a));

    // Tree left as it was
    assert_eq!(tree.left(a), Some(b));
    assert_eq!(tree.right(a), None);
    assert_eq!(tree.left(c), None);
    assert!(!tree.is_attached(c));
    Ok(())
}

#[test]
fn test_cycles_are_rejected() -> AstResult<()> {
    let mut tree = Tree::new();
    let p = tree.add(ret(1)?);
    let c = tree.add(ret(2)?);

    let err = tree.graft(Some(p), p).unwrap_err();
    assert!(matches!(err, AstError::AliasingViolation { .. }));

    // Detached subtree p -> c, then try to hang p below its own child
    assert_eq!(tree.graft(Some(p), c)?, p);
    let err = tree.graft(Some(c), p).unwrap_err();
    assert!(matches!(err, AstError::AliasingViolation { node, .. } if node == p));
    assert_eq!(tree.left(c), None);
    assert_eq!(tree.parent(p), None);
    Ok(())
}

#[test]
fn test_linked_node_cannot_become_root() -> AstResult<()> {
    let mut tree = Tree::new();
    tree.append(ret(1)?)?;
    let child = tree.append(ret(2)?)?;
    assert!(matches!(
        tree.set_root(child),
        Err(AstError::AliasingViolation { .. })
    ));
    Ok(())
}

#[test]
fn test_foreign_node_id_is_reported() -> AstResult<()> {
    let mut other = Tree::new();
    other.add(Node::from(Return::bare()));
    let foreign = other.add(Node::from(Return::bare()));

    let mut tree = Tree::new();
    let root = tree.append(Node::from(Return::bare()))?;
    let err = tree.graft(Some(root), foreign).unwrap_err();
    assert_eq!(err, AstError::UnknownNode { node: foreign });
    assert!(tree.get(foreign).is_none());
    Ok(())
}

#[test]
fn test_in_range_foreign_node_id_is_rejected() -> AstResult<()> {
    let mut other = Tree::new();
    other.add(Node::from(Return::bare()));
    let foreign = other.add(Node::from(Return::bare()));

    let mut tree = Tree::new();
    let root = tree.append(Node::from(Return::bare()))?;
    let local = tree.add(Node::from(Return::bare()));
    assert_eq!(local.index(), foreign.index());

    let err = tree.graft(Some(root), foreign).unwrap_err();
    assert_eq!(err, AstError::UnknownNode { node: foreign });
    assert!(!tree.is_attached(local));
    assert_eq!(tree.left(root), None);
    assert!(tree.get(foreign).is_none());
    assert!(matches!(
        tree.set_root(foreign),
        Err(AstError::UnknownNode { .. })
    ));
    assert_eq!(tree.root(), Some(root));
    Ok(())
}

#[test]
fn test_empty_tree() {
    let tree = Tree::new();
    assert!(tree.is_empty());
    assert_eq!(tree.root(), None);
    assert_eq!(tree.preorder().count(), 0);
}
