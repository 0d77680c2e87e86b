use bst::Tree;

use std::collections::{BTreeSet, HashSet};

use crate::Op;

/// Applies a set of operations to a tree and a set.
/// This way we can ensure that after a random smattering of inserts
/// and deletes we have the same values in both.
fn do_ops<T>(ops: &[Op<T>], bst: &mut Tree<T>, set: &mut BTreeSet<T>)
where
    T: Ord + Clone,
{
    for op in ops {
        match op {
            Op::Insert(x) => {
                bst.insert(x.clone());
                set.insert(x.clone());
            }
            Op::Delete(x) => {
                bst.delete(x);
                set.remove(x);
            }
        }
    }
}

/// Whether every adjacent pair of an inorder traversal is strictly increasing.
fn strictly_increasing<T: Ord>(tree: &Tree<T>) -> bool {
    let values: Vec<_> = tree.inorder().collect();
    values.windows(2).all(|pair| pair[0] < pair[1])
}

/// After random edits, every `i8` is found exactly when the model holds it, and every value
/// that is found sits no deeper than the tree is tall.
#[quickcheck]
fn membership_over_every_i8(xs: Vec<i8>, ops: Vec<Op<i8>>) -> bool {
    let mut tree = Tree::build(xs.iter().copied());
    let mut set: BTreeSet<_> = xs.into_iter().collect();
    do_ops(&ops, &mut tree, &mut set);

    (i8::MIN..=i8::MAX).all(|x| {
        let depth = tree.depth(&x);
        tree.contains(&x) == set.contains(&x)
            && depth.is_some() == set.contains(&x)
            && depth.map_or(true, |d| d as isize <= tree.height())
    }) && strictly_increasing(&tree)
}

#[quickcheck]
fn build_round_trips(xs: Vec<i32>) -> bool {
    let tree = Tree::build(xs.iter().copied());

    let mut expected = xs;
    expected.sort_unstable();
    expected.dedup();

    tree.inorder().copied().eq(expected)
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let tree = Tree::build(xs.iter().copied());

    xs.iter()
        .all(|x| tree.find(x).map(|n| n.value()) == Some(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree = Tree::build(xs.iter().copied());
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| tree.find(x).is_none())
}

#[quickcheck]
fn insert_then_find(xs: Vec<i8>, x: i8) -> bool {
    let mut tree = Tree::build(xs.iter().copied());
    let inserted = tree.insert(x);

    inserted != xs.contains(&x) && tree.find(&x).map(|n| *n.value()) == Some(x)
}

#[quickcheck]
fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree = Tree::build(xs.iter().copied());
    for delete in &deletes {
        tree.delete(delete);
    }

    let mut still_present = xs;
    for delete in &deletes {
        // We may have inserted the same value multiple times - delete each one.
        while let Some(pos) = still_present.iter().position(|x| x == delete) {
            still_present.swap_remove(pos);
        }
    }

    deletes.iter().all(|x| tree.find(x).is_none())
        && still_present.iter().all(|x| tree.find(x).is_some())
        && strictly_increasing(&tree)
}

#[quickcheck]
fn level_order_matches_inorder(xs: Vec<i8>, ops: Vec<Op<i8>>) -> bool {
    let mut tree = Tree::build(xs.iter().copied());
    let mut set: BTreeSet<_> = xs.into_iter().collect();
    do_ops(&ops, &mut tree, &mut set);

    let mut level_order: Vec<_> = tree.level_order().copied().collect();
    level_order.sort_unstable();

    level_order.len() == tree.len() && level_order.iter().eq(tree.inorder())
}

#[quickcheck]
fn height_is_one_more_than_children(xs: Vec<i8>) -> bool {
    let tree = Tree::build(xs);

    match tree.root() {
        None => tree.height() == -1,
        Some(root) => {
            tree.height()
                == 1 + bst::height(root.left()).max(bst::height(root.right()))
        }
    }
}
