// Chain-layer benchmarks: drive ChainStore directly to price the linear
// scan without the hashing and bucket selection above it.
use chained_map::chain::{ChainStore, Link};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use std::time::Duration;

fn build_chain(len: usize) -> (ChainStore<u64>, Option<Link>, Vec<String>) {
    let mut s = ChainStore::new();
    let mut head = None;
    let keys: Vec<String> = (0..len).map(|i| format!("k{i:06}")).collect();
    for (i, k) in keys.iter().enumerate() {
        head = Some(s.push_front(head, k, i as u64));
    }
    (s, head, keys)
}

fn bench_find_head(c: &mut Criterion) {
    c.bench_function("chain_find_head_256", |b| {
        let (s, head, keys) = build_chain(256);
        let newest = keys.last().unwrap();
        b.iter(|| black_box(s.find(head, newest)))
    });
}

fn bench_find_tail(c: &mut Criterion) {
    c.bench_function("chain_find_tail_256", |b| {
        let (s, head, keys) = build_chain(256);
        let oldest = &keys[0];
        b.iter(|| black_box(s.find(head, oldest)))
    });
}

fn bench_unlink_relink(c: &mut Criterion) {
    c.bench_function("chain_unlink_relink_256", |b| {
        let (mut s, mut head, keys) = build_chain(256);
        let mid = &keys[128];
        b.iter(|| {
            let (h, v) = s.unlink(head, mid).unwrap();
            head = Some(s.push_front(h, mid, v));
        })
    });
}

fn bench_config() -> Criterion {
    Criterion::default()
        .sample_size(50)
        .measurement_time(Duration::from_secs(8))
        .warm_up_time(Duration::from_secs(2))
}

criterion_group! {
    name = benches;
    config = bench_config();
    targets = bench_find_head, bench_find_tail, bench_unlink_relink
}
criterion_main!(benches);
