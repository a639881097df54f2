//! Distinct / Except / Intersect / Union.

use std::cell::Cell;
use std::rc::Rc;

use lazyq::prelude::*;

fn sample() -> Query<i32> {
    source::from_vec(vec![1, 2, 2, 3, 1])
}

#[test]
fn test_distinct_keeps_first_seen_order() {
    assert_eq!(sample().distinct().to_vec(), vec![1, 2, 3]);
    assert_eq!(
        source::from_vec(vec![3, 3, 1, 3, 2, 1]).distinct().to_vec(),
        vec![3, 1, 2]
    );
    assert!(source::empty::<i32>().distinct().to_vec().is_empty());
}

#[test]
fn test_distinct_by_keeps_first_element_per_key() {
    let words = source::from_vec(vec!["apple", "avocado", "banana", "blueberry", "cherry"]);
    let firsts = words.distinct_by(|w| w.chars().next()).to_vec();
    assert_eq!(firsts, vec!["apple", "banana", "cherry"]);
}

#[test]
fn test_distinct_does_not_drain_source() {
    let pulls = Rc::new(Cell::new(0));
    let seen = Rc::clone(&pulls);
    let q = source::from_vec(vec![7, 7, 8, 9, 10, 11])
        .select(move |x| {
            seen.set(seen.get() + 1);
            x
        })
        .distinct();

    let mut cursor = q.iterate();
    assert_eq!(cursor.next(), Some(7));
    assert_eq!(cursor.next(), Some(8));
    assert_eq!(pulls.get(), 3);
}

#[test]
fn test_distinct_state_is_per_cursor() {
    let q = sample().distinct();
    let mut a = q.iterate();
    assert_eq!(a.next(), Some(1));
    // A second cursor starts with an empty set of its own.
    assert_eq!(q.to_vec(), vec![1, 2, 3]);
    assert_eq!(a.next(), Some(2));
}

#[test]
fn test_except_preserves_duplicates_of_survivors() {
    let q = sample().except(&source::from_vec(vec![2]));
    assert_eq!(q.to_vec(), vec![1, 3, 1]);
}

#[test]
fn test_except_is_not_symmetric() {
    let a = source::from_vec(vec![1, 2, 3]);
    let b = source::from_vec(vec![2, 3, 4]);
    assert_eq!(a.except(&b).to_vec(), vec![1]);
    assert_eq!(b.except(&a).to_vec(), vec![4]);
}

#[test]
fn test_except_by_key() {
    let people = source::from_vec(vec![("ann", 31), ("bob", 25), ("cat", 31), ("dan", 40)]);
    let banned_ages = source::from_vec(vec![("x", 31)]);
    let kept = people.except_by(&banned_ages, |p| p.1).to_vec();
    assert_eq!(kept, vec![("bob", 25), ("dan", 40)]);
}

#[test]
fn test_intersect_deletes_on_match() {
    let q = sample().intersect(&source::from_vec(vec![2, 2, 3]));
    assert_eq!(q.to_vec(), vec![2, 3]);

    let q = source::from_vec(vec![5, 5, 5]).intersect(&source::from_vec(vec![5]));
    assert_eq!(q.to_vec(), vec![5]);

    let q = sample().intersect(&source::from_vec(vec![9]));
    assert!(q.to_vec().is_empty());
}

#[test]
fn test_intersect_rebuilds_set_per_cursor() {
    let q = sample().intersect(&source::from_vec(vec![1, 3]));
    assert_eq!(q.to_vec(), vec![1, 3]);
    assert_eq!(q.to_vec(), vec![1, 3]);
}

#[test]
fn test_intersect_by_key() {
    let a = source::from_vec(vec![(1, 'a'), (2, 'b'), (1, 'c'), (3, 'd')]);
    let b = source::from_vec(vec![(1, 'z'), (3, 'y'), (1, 'x')]);
    assert_eq!(a.intersect_by(&b, |p| p.0).to_vec(), vec![(1, 'a'), (3, 'd')]);
}

#[test]
fn test_union_is_lazy_and_distinct() {
    let a = source::from_vec(vec![1, 2, 2]);
    let b = source::from_vec(vec![3, 1, 4, 3]);
    assert_eq!(a.union(&b).to_vec(), vec![1, 2, 3, 4]);
    assert_eq!(a.union(&b).take(2).to_vec(), vec![1, 2]);
}

fn counted(values: Vec<i32>, pulls: &Rc<Cell<usize>>) -> Query<i32> {
    let counter = Rc::clone(pulls);
    source::from_vec(values).select(move |x| {
        counter.set(counter.get() + 1);
        x
    })
}

#[test]
fn test_except_drains_other_when_cursor_is_created() {
    let pulls = Rc::new(Cell::new(0));
    let q = sample().except(&counted(vec![2, 9, 9, 4], &pulls));
    assert_eq!(pulls.get(), 0);

    let mut cursor = q.iterate();
    assert_eq!(pulls.get(), 4, "whole second operand is drained up front");
    assert_eq!(cursor.next(), Some(1));
    assert_eq!(pulls.get(), 4);

    // Each cursor builds its own set.
    assert_eq!(q.to_vec(), vec![1, 3, 1]);
    assert_eq!(pulls.get(), 8);
}

#[test]
fn test_intersect_drains_other_when_cursor_is_created() {
    let pulls = Rc::new(Cell::new(0));
    let q = sample().intersect(&counted(vec![3, 1, 1], &pulls));
    assert_eq!(pulls.get(), 0);

    let mut cursor = q.iterate();
    assert_eq!(pulls.get(), 3, "whole second operand is drained up front");
    assert_eq!(cursor.next(), Some(1));
    assert_eq!(pulls.get(), 3);

    assert_eq!(q.to_vec(), vec![1, 3]);
    assert_eq!(pulls.get(), 6);
}
