//! Cursor contract, query re-iteration, and source adapters.

use std::cell::Cell;
use std::collections::HashMap;
use std::rc::Rc;
use std::sync::mpsc;

use lazyq::prelude::*;

#[test]
fn test_cursor_stays_exhausted() {
    let calls = Rc::new(Cell::new(0));
    let counter = Rc::clone(&calls);
    let mut remaining = 2;
    let mut cursor = Cursor::new(move || {
        counter.set(counter.get() + 1);
        if remaining == 0 {
            return None;
        }
        remaining -= 1;
        Some(remaining)
    });

    assert_eq!(cursor.next(), Some(1));
    assert_eq!(cursor.next(), Some(0));
    assert!(!cursor.is_exhausted());
    assert_eq!(cursor.next(), None);
    assert!(cursor.is_exhausted());
    assert_eq!(cursor.next(), None);
    assert_eq!(cursor.next(), None);
    // The pull closure is dropped after the first None.
    assert_eq!(calls.get(), 3);
}

#[test]
fn test_empty_cursor() {
    let mut cursor: Cursor<i32> = Cursor::empty();
    assert!(cursor.is_exhausted());
    assert_eq!(cursor.next(), None);
}

#[test]
fn test_query_reiterates_from_start() {
    let q = source::from_vec(vec![1, 2, 3]).select(|x| x * 10);
    assert_eq!(q.to_vec(), vec![10, 20, 30]);
    assert_eq!(q.to_vec(), vec![10, 20, 30]);

    let mut a = q.iterate();
    let mut b = q.iterate();
    assert_eq!(a.next(), Some(10));
    assert_eq!(a.next(), Some(20));
    assert_eq!(b.next(), Some(10));
    assert_eq!(a.next(), Some(30));
    assert_eq!(b.next(), Some(20));
}

#[test]
fn test_stages_are_deferred() {
    let pulls = Rc::new(Cell::new(0));
    let seen = Rc::clone(&pulls);
    let q = source::range(0, 100)
        .select(move |x| {
            seen.set(seen.get() + 1);
            x
        })
        .filter(|x| x % 2 == 0)
        .distinct();
    assert_eq!(pulls.get(), 0, "building a pipeline must not pull");

    let _cursor = q.iterate();
    assert_eq!(pulls.get(), 0, "creating a cursor must not pull a streaming stage");

    assert_eq!(q.take(3).to_vec(), vec![0, 2, 4]);
    assert_eq!(pulls.get(), 5);
}

#[test]
fn test_for_loop_over_query() {
    let q = source::from_string("héllo");
    let mut out = String::new();
    for c in &q {
        out.push(c);
    }
    assert_eq!(out, "héllo");
    assert_eq!(q.count(), 5);
}

#[test]
fn test_from_slice_copies() {
    let data = vec!["a".to_string(), "b".to_string()];
    let q = source::from_slice(&data);
    drop(data);
    assert_eq!(q.to_vec(), vec!["a".to_string(), "b".to_string()]);
}

#[test]
fn test_from_map_and_to_map() {
    let mut m = HashMap::new();
    m.insert("one", 1);
    m.insert("two", 2);
    m.insert("three", 3);

    let q = source::from_map(m.clone());
    assert_eq!(q.count(), 3);

    let mut pairs: Vec<(&str, i32)> = q.select(|kv| (kv.key, kv.value)).to_vec();
    pairs.sort();
    assert_eq!(pairs, vec![("one", 1), ("three", 3), ("two", 2)]);

    assert_eq!(q.to_map(), m);
}

#[test]
fn test_to_map_last_write_wins() {
    let q = source::from_vec(vec![
        KeyValue::new("k", 1),
        KeyValue::new("j", 2),
        KeyValue::new("k", 3),
    ]);
    let m = q.to_map();
    assert_eq!(m.len(), 2);
    assert_eq!(m["k"], 3);
    assert_eq!(m["j"], 2);
}

#[test]
fn test_channel_source_is_one_shot() {
    let (tx, rx) = mpsc::channel();
    for i in 0..4 {
        tx.send(i).unwrap();
    }
    drop(tx);

    let q = source::from_channel(rx);
    assert_eq!(q.filter(|x| x % 2 == 1).to_vec(), vec![1, 3]);
    // The channel has been drained and closed; re-iterating yields nothing.
    assert_eq!(q.to_vec(), Vec::<i32>::new());
}

#[test]
fn test_channel_source_with_producer_thread() {
    let (tx, rx) = mpsc::channel();
    let producer = std::thread::spawn(move || {
        for i in 1..=5 {
            tx.send(i).unwrap();
        }
    });
    let q = source::from_channel(rx);
    assert_eq!(q.sum(), 15);
    producer.join().unwrap();
}

struct Countdown(u32);

impl Iterable<u32> for Countdown {
    fn iterate(&self) -> Cursor<u32> {
        let mut n = self.0;
        Cursor::new(move || {
            if n == 0 {
                return None;
            }
            n -= 1;
            Some(n + 1)
        })
    }
}

#[test]
fn test_from_iterable() {
    let q = source::from_iterable(Countdown(3));
    assert_eq!(q.to_vec(), vec![3, 2, 1]);
    assert_eq!(q.to_vec(), vec![3, 2, 1]);
}

#[test]
fn test_from_iter_range_repeat_empty() {
    assert_eq!(source::from_iter(1..4).to_vec(), vec![1, 2, 3]);
    assert_eq!(source::range(-2, 4).to_vec(), vec![-2, -1, 0, 1]);
    assert_eq!(source::repeat('x', 3).to_vec(), vec!['x', 'x', 'x']);
    assert!(!source::empty::<u8>().any());
}

#[test]
fn test_range_stops_at_i64_max() {
    assert_eq!(source::range(i64::MAX, 2).to_vec(), vec![i64::MAX]);
    assert_eq!(
        source::range(i64::MAX - 1, 5).to_vec(),
        vec![i64::MAX - 1, i64::MAX]
    );
    assert_eq!(source::range(i64::MIN, 2).to_vec(), vec![i64::MIN, i64::MIN + 1]);
    assert_eq!(source::range(0, usize::MAX).take(3).to_vec(), vec![0, 1, 2]);
}

#[test]
fn test_cursor_adapts_std_iterators() {
    let mut cursor = Cursor::adapt(vec![1, 2]);
    assert_eq!(cursor.next(), Some(1));
    assert_eq!(cursor.next(), Some(2));
    assert_eq!(cursor.next(), None);
    assert!(cursor.is_exhausted());
}

#[test]
fn test_config_is_inherited_by_stages() {
    let cfg = QueryConfig {
        lookup_capacity: 1,
        sort_buffer_capacity: 2,
    };
    let q = source::from_vec(vec![3, 1, 2])
        .with_config(cfg.clone())
        .distinct()
        .filter(|x| *x > 0);
    assert_eq!(q.config(), &cfg);
    assert_eq!(q.order_by(|x| *x).config(), &cfg);
    assert_eq!(q.order_by(|x| *x).to_vec(), vec![1, 2, 3]);
}

#[test]
fn test_config_roundtrips_through_json() {
    let cfg = QueryConfig::default();
    let json = serde_json::to_string(&cfg).unwrap();
    let back: QueryConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(back, cfg);
}

#[test]
fn test_config_from_env() {
    std::env::set_var("LAZYQ_LOOKUP_CAPACITY", " 128 ");
    std::env::set_var("LAZYQ_SORT_BUFFER_CAPACITY", "not-a-number");

    let cfg = QueryConfig::from_env();
    assert_eq!(cfg.lookup_capacity, 128);
    assert_eq!(
        cfg.sort_buffer_capacity,
        QueryConfig::default().sort_buffer_capacity
    );

    let err = QueryConfig::try_from_env().unwrap_err();
    assert!(matches!(err, Error::Config(_)));

    // Both paths accept surrounding whitespace.
    std::env::remove_var("LAZYQ_SORT_BUFFER_CAPACITY");
    assert_eq!(QueryConfig::try_from_env().unwrap().lookup_capacity, 128);

    std::env::remove_var("LAZYQ_LOOKUP_CAPACITY");
    std::env::remove_var("LAZYQ_SORT_BUFFER_CAPACITY");
    assert_eq!(QueryConfig::try_from_env().unwrap(), QueryConfig::default());
}
