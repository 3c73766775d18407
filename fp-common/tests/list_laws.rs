//! Algebraic laws relating the list operations to each other.

use fp_common::{List, ListError, list};
use rstest::rstest;

fn samples() -> Vec<List<i32>> {
    vec![
        list![],
        list![7],
        list![1, 2, 3, 4, 5],
        list![5, -3, 5, 0, 12, -8],
        (0..1000).collect(),
    ]
}

#[test]
fn test_reverse_round_trip() {
    for l in samples() {
        assert_eq!(l.reverse().reverse(), l);
    }
}

#[test]
fn test_fold_duality() {
    for l in samples() {
        let right = l.fold_right(Vec::new(), |x, mut acc| {
            acc.push(*x);
            acc
        });
        let reversed = l.reverse();
        let left = reversed.fold_left(Vec::new(), |mut acc, x| {
            acc.push(*x);
            acc
        });
        assert_eq!(right, left);
    }
}

#[rstest]
#[case(0)]
#[case(1)]
#[case(3)]
#[case(6)]
#[case(5000)]
fn test_drop_length(#[case] n: usize) {
    for l in samples() {
        assert_eq!(l.drop(n).len(), l.len().saturating_sub(n));
    }
}

#[test]
fn test_map_identity() {
    for l in samples() {
        assert_eq!(l.map(|x| *x), l);
    }
}

#[test]
fn test_concat_elements() {
    for l1 in samples() {
        for l2 in samples() {
            let joined = l1.concat(&l2);
            assert_eq!(joined.len(), l1.len() + l2.len());
            let expected: Vec<i32> = l1.iter().chain(l2.iter()).copied().collect();
            assert_eq!(joined.iter().copied().collect::<Vec<_>>(), expected);
        }
    }
}

#[test]
fn test_filter_keeps_relative_order() {
    for l in samples() {
        let kept: Vec<i32> = l.iter().copied().filter(|x| x % 2 == 0).collect();
        assert_eq!(
            l.filter(|x| x % 2 == 0),
            kept.into_iter().collect::<List<i32>>()
        );
    }
}

#[test]
fn test_worked_examples() {
    assert_eq!(
        list![list![1, 2], list![], list![3]].flatten(),
        list![1, 2, 3]
    );
    assert_eq!(list![1, 2, 3, 4, 5].drop(2), list![3, 4, 5]);
    assert_eq!(list![1, 2].drop(10), List::empty());
    assert_eq!(list![1, 2, 3, 4].drop_while(|x| *x < 3), list![3, 4]);
    assert_eq!(list![1, 2, 3, 4, 5].filter(|x| x % 2 == 0), list![2, 4]);
}

#[test]
fn test_empty_access_fails() {
    let empty: List<i32> = List::empty();
    assert!(matches!(
        empty.head(),
        Err(ListError::EmptyListAccess { .. })
    ));
    assert!(matches!(
        empty.tail(),
        Err(ListError::EmptyListAccess { .. })
    ));
}
