use criterion::{black_box, criterion_group, criterion_main, Criterion};
use keyed_skiplist::SkipList;

fn filled(upper: u32) -> SkipList<u32> {
    let mut sk = SkipList::with_seed(15, 0.25, 42).unwrap();
    for i in 0..upper {
        sk.insert(i, i);
    }
    sk
}

fn bench_insert_linear_500(c: &mut Criterion) {
    c.bench_function("insert_500", |b| {
        b.iter(|| {
            let mut sk = SkipList::<u32>::with_seed(15, 0.25, 42).unwrap();
            for i in 0..500 {
                black_box(sk.insert(i, i));
            }
        })
    });
}

fn bench_insert_overwrite_5000(c: &mut Criterion) {
    let mut sk = filled(5000);
    c.bench_function("overwrite_5000", |b| {
        b.iter(|| {
            sk.insert(black_box(4001), 0);
        })
    });
}

fn bench_search_500(c: &mut Criterion) {
    let sk = filled(500);
    c.bench_function("search_500", |b| {
        b.iter(|| {
            black_box(sk.search(black_box(499)).ok());
        })
    });
}

fn bench_search_5000(c: &mut Criterion) {
    let sk = filled(5000);
    c.bench_function("search_5000", |b| {
        b.iter(|| {
            black_box(sk.search(black_box(4001)).ok());
        })
    });
}

fn bench_search_50000(c: &mut Criterion) {
    let sk = filled(50000);
    c.bench_function("search_50000", |b| {
        b.iter(|| {
            black_box(sk.search(black_box(33333)).ok());
        })
    });
}

fn bench_search_500000(c: &mut Criterion) {
    let sk = filled(500000);
    c.bench_function("search_500000", |b| {
        b.iter(|| {
            black_box(sk.search(black_box(333033)).ok());
        })
    });
}

fn bench_delete_reinsert_5000(c: &mut Criterion) {
    let mut sk = filled(5000);
    c.bench_function("delete_reinsert_5000", |b| {
        b.iter(|| {
            let value = sk.delete(black_box(2500)).unwrap();
            sk.insert(2500, value);
        })
    });
}

criterion_group!(
    benches,
    bench_insert_linear_500,
    bench_insert_overwrite_5000,
    bench_search_500,
    bench_search_5000,
    bench_search_50000,
    bench_search_500000,
    bench_delete_reinsert_5000,
);

criterion_main!(benches);
