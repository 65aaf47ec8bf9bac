use criterion::{Criterion, black_box, criterion_group, criterion_main};
use fixed_deque::FixedDeque;
use std::collections::VecDeque;

fn bench_deque(c: &mut Criterion) {
    let n = 16;
    {
        let mut group = c.benchmark_group("VecDeque vs heapless vs FixedDeque (Append 16)");
        group.bench_function("std::collections::VecDeque", |b| {
            b.iter(|| {
                let mut d = VecDeque::with_capacity(n);
                for i in 0..n {
                    d.push_back(black_box(i as i32));
                }
                d
            })
        });

        group.bench_function("heapless::Deque<i32, 16>", |b| {
            b.iter(|| {
                let mut d: heapless::Deque<i32, 16> = heapless::Deque::new();
                for i in 0..n {
                    let _ = d.push_back(black_box(i as i32));
                }
                d
            })
        });

        group.bench_function("FixedDeque<i32, 16>", |b| {
            b.iter(|| {
                let mut d: FixedDeque<i32, 16> = FixedDeque::new();
                for i in 0..n {
                    d.append(black_box(i as i32));
                }
                d
            })
        });
        group.finish();
    }

    {
        // Shift-based prepend is O(len); this shows the cost against ring buffers.
        let mut group = c.benchmark_group("VecDeque vs heapless vs FixedDeque (Prepend 16)");
        group.bench_function("std::collections::VecDeque", |b| {
            b.iter(|| {
                let mut d = VecDeque::with_capacity(n);
                for i in 0..n {
                    d.push_front(black_box(i as i32));
                }
                d
            })
        });

        group.bench_function("heapless::Deque<i32, 16>", |b| {
            b.iter(|| {
                let mut d: heapless::Deque<i32, 16> = heapless::Deque::new();
                for i in 0..n {
                    let _ = d.push_front(black_box(i as i32));
                }
                d
            })
        });

        group.bench_function("FixedDeque<i32, 16>", |b| {
            b.iter(|| {
                let mut d: FixedDeque<i32, 16> = FixedDeque::new();
                for i in 0..n {
                    d.prepend(black_box(i as i32));
                }
                d
            })
        });
        group.finish();
    }

    {
        let mut group = c.benchmark_group("VecDeque vs FixedDeque (Get 16)");
        let mut d_std = VecDeque::new();
        let mut d_fixed: FixedDeque<i32, 16> = FixedDeque::new();
        for i in 0..n {
            d_std.push_back(i as i32);
            d_fixed.append(i as i32);
        }

        group.bench_function("std::collections::VecDeque", |b| {
            b.iter(|| {
                for i in 0..n {
                    black_box(d_std.get(black_box(i)));
                }
            })
        });

        group.bench_function("FixedDeque<i32, 16>", |b| {
            b.iter(|| {
                for i in 0..n {
                    black_box(d_fixed.get(black_box(i)));
                }
            })
        });
        group.finish();
    }

    {
        let mut group = c.benchmark_group("VecDeque vs FixedDeque (Remove by value 16)");
        let source: Vec<i32> = (0..n as i32).collect();

        group.bench_function("std::collections::VecDeque", |b| {
            b.iter(|| {
                let mut d: VecDeque<i32> = source.iter().copied().collect();
                for i in (0..n as i32).rev() {
                    if let Some(pos) = d.iter().position(|x| *x == black_box(i)) {
                        d.remove(pos);
                    }
                }
                d
            })
        });

        group.bench_function("FixedDeque<i32, 16>", |b| {
            b.iter(|| {
                let mut d = FixedDeque::<i32, 16>::try_from_iter(source.iter().copied()).unwrap();
                for i in (0..n as i32).rev() {
                    d.remove_first(&black_box(i));
                }
                d
            })
        });
        group.finish();
    }
}

criterion_group!(benches, bench_deque);
criterion_main!(benches);
