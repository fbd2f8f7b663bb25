use searching_tree::{Error, Tree};

use std::collections::{BTreeMap, HashSet};

use quickcheck_macros::quickcheck;

use crate::Op;

/// Applies a set of operations to a tree and a map.
/// This way we can ensure that after a random smattering of inserts
/// and deletes we have the same entries in both. The map keeps the
/// first value inserted for a key, same as the tree.
fn do_ops<K, V>(ops: &[Op<K, V>], bst: &mut Tree<K, V>, map: &mut BTreeMap<K, V>)
where
    K: Ord + Clone,
    V: Clone,
{
    for op in ops {
        match op {
            Op::Insert(k, v) => {
                bst.insert(k.clone(), v.clone());
                map.entry(k.clone()).or_insert_with(|| v.clone());
            }
            Op::Remove(k) => {
                bst.delete(k);
                map.remove(k);
            }
        }
    }
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8, i8>>) -> bool {
    let mut tree = Tree::new();
    let mut map = BTreeMap::new();

    do_ops(&ops, &mut tree, &mut map);
    map.keys().all(|key| tree.find(key) == map.get(key))
}

#[quickcheck]
fn iteration_is_strictly_ascending(ops: Vec<Op<i16, u8>>) -> bool {
    let mut tree = Tree::new();
    let mut map = BTreeMap::new();

    do_ops(&ops, &mut tree, &mut map);
    let keys: Vec<_> = tree.iter().map(|(k, _)| *k).collect();
    keys.windows(2).all(|pair| pair[0] < pair[1])
}

#[quickcheck]
fn iteration_matches_model(ops: Vec<Op<i8, i8>>) -> bool {
    let mut tree = Tree::new();
    let mut map = BTreeMap::new();

    do_ops(&ops, &mut tree, &mut map);
    tree.len() == map.len() && tree.iter().eq(map.iter())
}

#[quickcheck]
fn first_insert_wins(k: i8, v1: i8, v2: i8) -> bool {
    let mut tree = Tree::new();
    tree.insert(k, v1);
    tree.insert(k, v2);

    tree.find(&k) == Some(&v1)
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let mut tree = Tree::new();
    for x in &xs {
        tree.insert(*x, *x);
    }

    xs.iter().all(|x| tree.find(x) == Some(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let mut tree = Tree::new();
    for x in &xs {
        tree.insert(*x, *x);
    }
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| tree.find(x).is_none())
}

#[quickcheck]
fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree = Tree::new();
    for x in &xs {
        tree.insert(*x, *x);
    }
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
}

#[quickcheck]
fn len_counts_distinct_keys(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree = Tree::new();
    for x in &xs {
        tree.insert(*x, ());
    }
    let mut erased = HashSet::new();
    for delete in &deletes {
        if tree.delete(delete).is_some() {
            erased.insert(*delete);
        }
    }

    let inserted: HashSet<_> = xs.into_iter().collect();
    tree.len() == inserted.len() - erased.len() && tree.iter().count() == tree.len()
}

#[quickcheck]
fn range_matches_filtered_iteration(ops: Vec<Op<i8, i8>>, a: i8, b: i8) -> bool {
    let mut tree = Tree::new();
    let mut map = BTreeMap::new();
    do_ops(&ops, &mut tree, &mut map);

    let filtered = tree.iter().filter(|(k, _)| a <= **k && **k < b);
    tree.range(a..b).eq(filtered)
}

#[quickcheck]
fn degenerate_ranges_are_empty(xs: Vec<i8>, a: i8, b: i8) -> bool {
    let tree: Tree<_, _> = xs.into_iter().map(|x| (x, x)).collect();
    let (low, high) = (a.min(b), a.max(b));

    tree.range(a..a).next().is_none() && (low == high || tree.range(high..low).next().is_none())
}

#[quickcheck]
fn seek_matches_find(xs: Vec<i8>, k: i8) -> bool {
    let tree: Tree<_, _> = xs.into_iter().map(|x| (x, x)).collect();
    let cursor = tree.seek(&k);

    match tree.find(&k) {
        Some(v) => {
            // Everything from `k` up to and including `i8::MAX`.
            let rest = tree.range(k..i8::MAX).chain(tree.seek(&i8::MAX));
            cursor.current() == Ok((&k, v)) && cursor.eq(rest)
        }
        None => cursor.current() == Err(Error::OutOfRange),
    }
}

#[quickcheck]
fn range_mut_updates_exactly_the_range(xs: Vec<i8>, a: i8, b: i8) -> bool {
    let mut tree: Tree<_, _> = xs.into_iter().map(|x| (x, false)).collect();
    for (_, seen) in tree.range_mut(a..b) {
        *seen = true;
    }

    tree.iter().all(|(k, seen)| *seen == (a <= *k && *k < b))
}

#[quickcheck]
fn ascending_inserts_then_deletes(n: u16) -> bool {
    let n = i32::from(n % 1_024);
    let mut tree = Tree::new();
    for key in 0..n {
        tree.insert(key, key);
    }
    let all_inserted = tree.len() == n as usize;
    for key in (0..n).step_by(2) {
        tree.delete(&key);
    }

    all_inserted && tree.iter().map(|(k, _)| *k).eq((1..n).step_by(2))
}
