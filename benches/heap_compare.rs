use binheap_rs::{ArrayHeap, LinkedHeap, PriorityQueue};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::prelude::*;

fn drain<Q: PriorityQueue>(heap: &mut Q) -> i64 {
    let mut acc = 0;
    while let Ok(x) = heap.pop() {
        acc ^= x;
    }
    acc
}

fn criterion_benchmark(c: &mut Criterion) {
    let mut rng = rand::thread_rng();
    let values: Vec<i64> = (0..1024).map(|_| rng.gen()).collect();

    c.bench_function("array_build_drain", |b| {
        b.iter(|| {
            let mut heap = ArrayHeap::with_capacity(values.len());
            heap.build(black_box(&values));
            drain(&mut heap)
        })
    });

    c.bench_function("linked_build_drain", |b| {
        b.iter(|| {
            let mut heap = LinkedHeap::with_capacity(values.len());
            heap.build(black_box(&values));
            drain(&mut heap)
        })
    });

    c.bench_function("array_push", |b| {
        let mut heap = ArrayHeap::with_capacity(values.len() + 1);
        heap.build(&values);
        b.iter(|| {
            heap.push(black_box(7));
            heap.pop().unwrap()
        })
    });

    c.bench_function("linked_push", |b| {
        let mut heap = LinkedHeap::with_capacity(values.len() + 1);
        heap.build(&values);
        b.iter(|| {
            heap.push(black_box(7));
            heap.pop().unwrap()
        })
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
