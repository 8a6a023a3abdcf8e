use super::*;
use super::node::Side;
use crate::{DuplicateKeyError, KeyNotFoundError, Storage};
use quickcheck_macros::quickcheck;
use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};
use std::collections::BTreeMap;

const TEST_SEED: u64 = 0x5EED;

fn in_order<K: Copy, V, S>(tree: &RbTree<K, V, S>) -> Vec<K>
where S: Storage<Element = Node<K, V>>,
{
    fn walk<K: Copy, V, S>(node: Option<NodeRef<'_, K, V, S>>, out: &mut Vec<K>)
    where S: Storage<Element = Node<K, V>>,
    {
        if let Some(node) = node {
            walk(node.left_child(), out);
            out.push(*node.key());
            walk(node.right_child(), out);
        }
    }
    let mut keys = Vec::with_capacity(tree.len());
    walk(tree.root(), &mut keys);
    keys
}

#[track_caller]
fn assert_invariants<K: Ord, V, S>(tree: &RbTree<K, V, S>)
where S: Storage<Element = Node<K, V>>,
{
    assert!(tree.is_binary(), "keys out of order");
    assert!(tree.is_connected(), "parent links broken");
    assert!(tree.is_red_black_tree(), "coloring broken");
}

fn scenario_a() -> RbTree<i32, f64> {
    let mut tree = RbTree::new();
    for &key in &[1, 2, 0, 10, 7, -1] {
        tree.insert(key, f64::from(key) * 2.0).expect("keys are unique");
    }
    tree
}

#[test]
fn small_mixed_insertions() {
    let tree = scenario_a();
    assert!(tree.is_binary());
    assert!(tree.is_connected());
    assert!(tree.is_red_black_tree());
    assert_eq!(tree.depth(), 2);
    assert_eq!(tree.len(), 6);
    assert_eq!(tree.black_height(), Some(2));
    assert_eq!(in_order(&tree), [-1, 0, 1, 2, 7, 10]);

    let root = tree.root().expect("tree is not empty");
    assert_eq!(*root.key(), 1);
    assert!(root.is_root());
    assert_eq!(root.color(), Color::Black);
    let seven = root.right_child().expect("right subtree was rotated into place");
    assert_eq!(*seven.key(), 7);
    assert_eq!(seven.color(), Color::Black);
    assert!(seven.left_child().map_or(false, |two| two.is_red() && *two.key() == 2));
    assert!(seven.right_child().map_or(false, |ten| ten.is_red() && ten.is_leaf()));
    assert_eq!(seven.parent().map(|parent| *parent.key()), Some(1));

    for &key in &[1, 2, 0, 10, 7, -1] {
        assert_eq!(tree.find(&key), Some(&(f64::from(key) * 2.0)));
    }
    assert_eq!(tree.find(&3), None);
}

#[test]
fn duplicate_insert_is_rejected() {
    let mut tree = RbTree::<_, _>::new();
    tree.insert(5, "first").expect("empty tree");
    assert_eq!(
        tree.insert(5, "second"),
        Err(DuplicateKeyError { key: 5, value: "second" }),
    );
    assert_eq!(tree.len(), 1);
    assert_eq!(tree.find(&5), Some(&"first"));
    assert_eq!(in_order(&tree), [5]);
    assert_invariants(&tree);
}

#[test]
fn ascending_insertions_get_rebalanced() {
    let mut tree = RbTree::<_, _>::new();
    for &key in &[10, 20, 30] {
        tree.insert(key, ()).expect("keys are unique");
        assert_invariants(&tree);
    }
    assert_eq!(tree.depth(), 1);
    let root = tree.root().expect("tree is not empty");
    assert_eq!(*root.key(), 20);
    assert!(root.left_child().map_or(false, |node| node.is_red()));
    assert!(root.right_child().map_or(false, |node| node.is_red()));
}

#[test]
fn long_sorted_runs_stay_logarithmic() {
    let mut ascending = RbTree::<_, _>::new();
    let mut descending = RbTree::<_, _>::new();
    for key in 0..1024_u32 {
        ascending.insert(key, ()).expect("keys are unique");
        descending.insert(1023 - key, ()).expect("keys are unique");
    }
    assert_invariants(&ascending);
    assert_invariants(&descending);
    // A red-black tree of n nodes is at most 2 * log2(n + 1) high
    assert!(ascending.depth() < 20);
    assert!(descending.depth() < 20);
}

#[test]
fn empty_tree() {
    let mut tree = RbTree::<i32, i32>::new();
    assert!(tree.is_empty());
    assert_eq!(tree.depth(), -1);
    assert_eq!(tree.black_height(), Some(0));
    assert!(tree.is_binary());
    assert!(tree.is_connected());
    assert!(tree.is_red_black_tree());
    assert!(tree.root().is_none());
    assert_eq!(tree.remove(&3), Err(KeyNotFoundError));
    assert_eq!(tree.find(&3), None);
}

#[test]
fn single_node() {
    let mut tree = RbTree::<_, _>::new();
    tree.insert("only", 1).expect("empty tree");
    assert_eq!(tree.depth(), 0);
    assert_eq!(tree.root().map(|root| root.color()), Some(Color::Black));
    assert_eq!(tree.remove("only"), Ok(1));
    assert!(tree.is_empty());
    assert_eq!(tree.depth(), -1);
}

#[test]
fn removing_node_with_two_children_returns_its_own_value() {
    let mut tree = scenario_a();
    // The root has two children, so its successor gets spliced out in its place
    assert_eq!(tree.remove(&1), Ok(2.0));
    assert_eq!(tree.find(&1), None);
    assert_eq!(tree.find(&2), Some(&4.0));
    assert_eq!(*tree.root().expect("five nodes left").key(), 2);
    assert_eq!(in_order(&tree), [-1, 0, 2, 7, 10]);
    assert_invariants(&tree);

    assert_eq!(tree.remove_entry(&7), Ok((7, 14.0)));
    assert_eq!(tree.remove(&7), Err(KeyNotFoundError));
    assert_eq!(in_order(&tree), [-1, 0, 2, 10]);
    assert_invariants(&tree);
}

#[test]
fn failed_remove_changes_nothing() {
    let mut tree = scenario_a();
    let before = in_order(&tree);
    let depth = tree.depth();
    assert_eq!(tree.remove(&42), Err(KeyNotFoundError));
    assert_eq!(in_order(&tree), before);
    assert_eq!(tree.depth(), depth);
    assert_eq!(tree.len(), 6);
}

#[test]
fn random_insertions_then_removals_in_other_order() {
    const N: i32 = 600;
    let mut rng = StdRng::seed_from_u64(TEST_SEED);
    let mut keys: Vec<i32> = (0..N).collect();
    keys.shuffle(&mut rng);

    let mut tree = RbTree::<_, _>::new();
    for &key in &keys {
        tree.insert(key, key.to_string()).expect("keys are unique");
        assert_invariants(&tree);
    }
    assert_eq!(in_order(&tree), (0..N).collect::<Vec<_>>());

    keys.shuffle(&mut rng);
    for (removed, &key) in keys.iter().enumerate() {
        assert_eq!(tree.remove(&key), Ok(key.to_string()));
        assert_eq!(tree.find(&key), None);
        assert_eq!(tree.len(), keys.len() - removed - 1);
        assert_invariants(&tree);
    }
    assert!(tree.is_empty());
}

#[cfg(feature = "random")]
#[test]
fn unique_random_keys_in_and_out() {
    use crate::random::{RangeExhaustedError, UniqueRandom};
    const N: i64 = 400;
    let mut keys = UniqueRandom::from_seed(0, N - 1, TEST_SEED).expect("valid range");
    let mut tree = RbTree::<_, _>::new();
    while let Ok(key) = keys.draw_unique() {
        tree.insert(key, -key).expect("drawn keys never repeat");
        assert_invariants(&tree);
    }
    assert_eq!(keys.draw_unique(), Err(RangeExhaustedError));
    assert_eq!(tree.len(), N as usize);
    assert_eq!(in_order(&tree), (0..N).collect::<Vec<_>>());

    // A second source picks positions in the insertion history, giving an unrelated removal order
    let inserted = keys.history();
    let mut positions = UniqueRandom::from_seed(0, N - 1, TEST_SEED + 1).expect("valid range");
    while let Ok(position) = positions.draw_unique() {
        let key = inserted[position as usize];
        assert_eq!(tree.remove(&key), Ok(-key));
        assert!(!tree.contains_key(&key));
        assert_invariants(&tree);
    }
    assert_eq!(positions.history().len(), inserted.len());
    assert!(tree.is_empty());
}

#[test]
fn every_removal_position_of_one_tree() {
    for victim in 0..63_u8 {
        let mut tree = RbTree::<_, _>::new();
        for key in 0..63_u8 {
            tree.insert(key, key).expect("keys are unique");
        }
        assert_eq!(tree.remove(&victim), Ok(victim));
        assert_invariants(&tree);
        assert_eq!(tree.len(), 62);
        assert!(!tree.contains_key(&victim));
    }
}

#[test]
fn find_mut_updates_in_place() {
    let mut tree = scenario_a();
    *tree.find_mut(&10).expect("key is present") = -5.5;
    assert_eq!(tree.find(&10), Some(&-5.5));
    assert!(tree.find_mut(&11).is_none());
}

#[test]
fn borrowed_lookups() {
    let mut tree = RbTree::<String, usize>::new();
    for word in "the quick brown fox jumps over a lazy dog".split(' ') {
        tree.insert(word.to_string(), word.len()).expect("words are unique");
    }
    assert_eq!(tree.find("quick"), Some(&5));
    assert!(tree.contains_key("lazy"));
    assert_eq!(tree.remove("fox"), Ok(3));
    assert!(!tree.contains_key("fox"));
    assert_invariants(&tree);
}

#[test]
fn clear_releases_everything() {
    let mut tree = scenario_a();
    tree.clear();
    assert!(tree.is_empty());
    assert_eq!(tree.len(), 0);
    assert_eq!(tree.depth(), -1);
    assert_eq!(tree.find(&1), None);

    tree.insert(3, 6.0).expect("tree was cleared");
    assert_eq!(tree.len(), 1);
    assert_invariants(&tree);
}

#[test]
fn clones_are_independent() {
    let original = scenario_a();
    let mut copy = original.clone();
    copy.remove(&10).expect("key is present");
    copy.insert(100, 0.0).expect("key is new");
    assert_eq!(in_order(&original), [-1, 0, 1, 2, 7, 10]);
    assert_eq!(in_order(&copy), [-1, 0, 1, 2, 7, 100]);
    assert_invariants(&original);
    assert_invariants(&copy);
}

#[test]
fn rotations_preserve_order_and_links() {
    let mut tree = RbTree::<_, _>::new();
    for &key in &[2, 1, 3] {
        tree.insert(key, ()).expect("keys are unique");
    }
    let top = tree.root.expect("tree is not empty");

    tree.rotate(top, Side::Left);
    let root = tree.root().expect("tree is not empty");
    assert_eq!(*root.key(), 3);
    assert!(root.right_child().is_none());
    assert_eq!(root.left_child().map(|node| *node.key()), Some(2));
    assert_eq!(tree.depth(), 2);
    assert!(tree.is_binary());
    assert!(tree.is_connected());
    assert_eq!(in_order(&tree), [1, 2, 3]);

    let top = tree.root.expect("tree is not empty");
    tree.rotate(top, Side::Right);
    assert_eq!(tree.root().map(|root| *root.key()), Some(2));
    assert_eq!(tree.depth(), 1);
    assert!(tree.is_connected());
    assert_eq!(in_order(&tree), [1, 2, 3]);
}

#[test]
fn rotation_hands_over_inner_grandchild() {
    let mut tree = RbTree::<_, _>::new();
    for &key in &[4, 2, 6, 1, 3, 5, 7] {
        tree.insert(key, ()).expect("keys are unique");
    }
    let four = tree.root.expect("tree is not empty");
    tree.rotate(four, Side::Right);

    let two = tree.root().expect("tree is not empty");
    assert_eq!(*two.key(), 2);
    assert_eq!(two.left_child().map(|node| *node.key()), Some(1));
    let four = two.right_child().expect("old top moved down");
    assert_eq!(*four.key(), 4);
    // 3 was the right child of the pivot and now hangs off the old top
    let three = four.left_child().expect("inner grandchild handed over");
    assert_eq!(*three.key(), 3);
    assert_eq!(three.parent().map(|node| *node.key()), Some(4));
    assert_eq!(four.right_child().map(|node| *node.key()), Some(6));
    assert!(tree.is_binary());
    assert!(tree.is_connected());
    assert_eq!(in_order(&tree), [1, 2, 3, 4, 5, 6, 7]);
}

#[test]
#[should_panic]
fn rotation_needs_a_pivot() {
    let mut tree = RbTree::<_, _>::new();
    tree.insert(1, ()).expect("empty tree");
    let root = tree.root.expect("tree is not empty");
    tree.rotate(root, Side::Left);
}

#[test]
fn checkers_catch_broken_coloring() {
    let mut tree = scenario_a();
    let seven = tree.find_index(&7).expect("key is present");
    tree.node_mut(seven).color = Color::Red;
    // 7 is now red with red children
    assert!(!tree.is_red_black_tree());
    assert!(tree.is_binary());

    let mut tree = scenario_a();
    let ten = tree.find_index(&10).expect("key is present");
    tree.node_mut(ten).color = Color::Black;
    assert_eq!(tree.black_height(), None);
    assert!(!tree.is_red_black_tree());

    let mut tree = scenario_a();
    let root = tree.root.expect("tree is not empty");
    tree.node_mut(root).color = Color::Red;
    assert!(!tree.is_red_black_tree());
}

#[test]
fn order_checker_looks_past_the_parent() {
    let mut tree = RbTree::<_, _>::new();
    for &key in &[10, 5, 15, 3, 7] {
        tree.insert(key, ()).expect("keys are unique");
    }
    assert!(tree.is_binary());
    // 12 is in order with its parent 5 but not with the root
    let seven = tree.find_index(&7).expect("key is present");
    tree.node_mut(seven).key = 12;
    assert!(!tree.is_binary());
}

#[test]
fn connectivity_checker_catches_stale_parent() {
    let mut tree = scenario_a();
    let minus_one = tree.find_index(&-1).expect("key is present");
    let ten = tree.find_index(&10).expect("key is present");
    tree.node_mut(minus_one).parent = Some(ten);
    assert!(!tree.is_connected());

    let mut tree = scenario_a();
    let root = tree.root.expect("tree is not empty");
    tree.node_mut(root).parent = Some(root);
    assert!(!tree.is_connected());
}

#[test]
fn checkers_survive_child_cycles() {
    let mut tree = scenario_a();
    let root = tree.root.expect("tree is not empty");
    let seven = tree.find_index(&7).expect("key is present");
    let ten = tree.find_index(&10).expect("key is present");
    // 10 points back up at the root, closing a loop through child links only
    tree.node_mut(ten).set_child(Side::Left, Some(root));
    assert!(!tree.is_connected());
    assert!(!tree.is_binary());
    assert!(!tree.is_red_black_tree());
    assert_eq!(tree.black_height(), None);

    let mut tree = scenario_a();
    tree.node_mut(seven).set_child(Side::Right, Some(seven));
    assert!(!tree.is_connected());
    assert!(!tree.is_binary());
    assert!(!tree.is_red_black_tree());

    // Both children naming the same node
    let mut tree = scenario_a();
    let two = tree.find_index(&2).expect("key is present");
    tree.node_mut(seven).set_child(Side::Right, Some(two));
    assert!(!tree.is_connected());
}

#[test]
fn checkers_handle_long_chains() {
    // A degenerate chain which would take a very deep recursion to walk
    const N: usize = 200_000;
    let mut tree = RbTree::<usize, ()>::with_capacity(N);
    for key in 0..N {
        let parent = key.checked_sub(1);
        let index = tree.storage.add(Node::new(key, (), parent));
        tree.node_mut(index).color = Color::Black;
        match parent {
            Some(parent) => tree.node_mut(parent).set_child(Side::Right, Some(index)),
            None => tree.root = Some(index),
        }
    }
    assert!(tree.is_connected());
    assert!(tree.is_binary());
    assert_eq!(tree.black_height(), None);
    assert!(!tree.is_red_black_tree());
}

#[test]
fn fixed_capacity_tree() {
    let mut tree = ArrayVecRbTree::<u16, u16, NodeArray<u16, u16, 64>>::new();
    for key in (0..64).rev() {
        tree.insert(key, key * 3).expect("keys are unique");
    }
    assert_invariants(&tree);
    for key in (0..64).step_by(2) {
        assert_eq!(tree.remove(&key), Ok(key * 3));
    }
    assert_invariants(&tree);
    // Removed nodes leave holes which the next insertions fill
    for key in 100..132 {
        tree.insert(key, 0).expect("keys are unique");
    }
    assert_eq!(tree.len(), 64);
    assert_invariants(&tree);
}

#[test]
#[should_panic(expected = "full")]
fn fixed_capacity_tree_overflows() {
    let mut tree = ArrayVecRbTree::<u8, (), NodeArray<u8, (), 4>>::new();
    for key in 0..5 {
        let _ = tree.insert(key, ());
    }
}

#[test]
fn debug_output_shows_structure() {
    let mut tree = RbTree::<_, _>::new();
    tree.insert(1, 'a').expect("empty tree");
    let printed = format!("{:?}", tree);
    assert!(printed.contains("len: 1"));
    assert!(printed.contains("key: 1"));
    assert!(printed.contains("Black"));
}

#[quickcheck]
fn invariants_hold_after_every_operation(operations: Vec<(bool, i8)>) -> bool {
    let mut tree = RbTree::<_, _>::new();
    let mut model = BTreeMap::new();
    for (insert, key) in operations {
        if insert {
            let expected_duplicate = model.contains_key(&key);
            let result = tree.insert(key, i32::from(key) * 2);
            if result.is_err() != expected_duplicate {
                return false;
            }
            model.entry(key).or_insert(i32::from(key) * 2);
        } else if tree.remove(&key).ok() != model.remove(&key) {
            return false;
        }
        if !(tree.is_binary() && tree.is_connected() && tree.is_red_black_tree()) {
            return false;
        }
    }
    tree.len() == model.len()
        && in_order(&tree) == model.keys().copied().collect::<Vec<_>>()
        && model.iter().all(|(key, value)| tree.find(key) == Some(value))
}
