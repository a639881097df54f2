use criterion::{criterion_group, criterion_main, Criterion};
use lazyq::prelude::*;

#[derive(Clone)]
struct Order {
    customer: u32,
    amount: u64,
}

fn make_orders(rows: usize) -> Query<Order> {
    let orders: Vec<Order> = (0..rows)
        .map(|i| Order {
            customer: (i % 97) as u32,
            amount: (i % 1000) as u64,
        })
        .collect();
    source::from_vec(orders)
}

fn bench_correlation(c: &mut Criterion) {
    let orders = make_orders(10_000);
    let customers = source::from_iter(0u32..97);

    let join = customers.join(&orders, |c| *c, |o| o.customer, |c, o| (*c, o.amount));
    c.bench_function("join_10k", |b| b.iter(|| join.count()));

    let group_join = customers.group_join(&orders, |c| *c, |o| o.customer, |c, g| (c, g.len()));
    c.bench_function("group_join_10k", |b| b.iter(|| group_join.count()));

    let grouped = orders.group_by(|o| o.customer, |o| o.amount);
    c.bench_function("group_by_10k", |b| b.iter(|| grouped.count()));
}

fn bench_set_and_sort(c: &mut Criterion) {
    let values = make_orders(10_000).select(|o| o.amount);

    let distinct = values.distinct();
    c.bench_function("distinct_10k", |b| b.iter(|| distinct.count()));

    let except = values.except(&source::range(0, 500).select(|x| x as u64));
    c.bench_function("except_10k", |b| b.iter(|| except.count()));

    let sorted = values.order_by(|x| *x).then_by_descending(|x| x % 7);
    c.bench_function("order_by_10k", |b| b.iter(|| sorted.last()));
}

criterion_group!(queries, bench_correlation, bench_set_and_sort);
criterion_main!(queries);
