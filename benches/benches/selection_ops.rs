// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use understory_navigation::{Pagination, PaginationOptions};
use understory_selection::{Mandatory, Model, Selection, SelectionOptions, TicketInput};

fn populated(n: u32, options: SelectionOptions) -> Selection<u32, u32> {
    let mut s = Selection::new(options);
    for v in 0..n {
        let _ = s.register(TicketInput::new(v).disabled(v % 7 == 3));
    }
    let _ = s.commit();
    s
}

fn bench_register(c: &mut Criterion) {
    let mut group = c.benchmark_group("register");
    for &n in &[64_u32, 256, 1024] {
        group.throughput(Throughput::Elements(u64::from(n)));
        group.bench_function(format!("register_commit_force_n{n}"), |b| {
            b.iter_batched(
                || Selection::<u32, u32>::new(SelectionOptions::single(Mandatory::Force)),
                |mut s| {
                    for v in 0..n {
                        let _ = s.register(TicketInput::new(v));
                    }
                    black_box(s.commit().changes.len());
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

fn bench_bulk(c: &mut Criterion) {
    let mut group = c.benchmark_group("bulk");
    for &n in &[64_u32, 256, 1024] {
        group.throughput(Throughput::Elements(u64::from(n)));
        group.bench_function(format!("select_all_toggle_all_n{n}"), |b| {
            b.iter_batched(
                || populated(n, SelectionOptions::multiple(Mandatory::Off)),
                |mut s| {
                    s.select_all();
                    s.toggle_all();
                    s.toggle_all();
                    black_box(s.is_all_selected());
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

fn bench_fallback(c: &mut Criterion) {
    let mut group = c.benchmark_group("fallback");
    for &n in &[64_u32, 256] {
        group.throughput(Throughput::Elements(u64::from(n)));
        group.bench_function(format!("unregister_selected_force_n{n}"), |b| {
            b.iter_batched(
                || populated(n, SelectionOptions::single(Mandatory::Force)),
                |mut s| {
                    loop {
                        let next = s.selected_ids().next().copied();
                        let Some(id) = next else { break };
                        s.unregister(&id);
                    }
                    black_box(s.len());
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

fn bench_model_sync(c: &mut Criterion) {
    let mut group = c.benchmark_group("model_sync");
    for &n in &[64_u32, 256] {
        group.throughput(Throughput::Elements(u64::from(n)));
        group.bench_function(format!("external_write_commit_n{n}"), |b| {
            b.iter_batched(
                || {
                    let mut s = populated(n, SelectionOptions::multiple(Mandatory::Off));
                    let model = Model::new(Vec::new());
                    let _ = s.bind_values(model.clone());
                    let _ = s.commit();
                    (s, model)
                },
                |(mut s, model)| {
                    model.set((0..n).step_by(2).collect());
                    let _ = s.commit();
                    s.toggle_all();
                    let _ = s.commit();
                    black_box(model.with(Vec::len));
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

fn bench_pagination(c: &mut Criterion) {
    let mut group = c.benchmark_group("pagination");
    let mut pages = Pagination::new(PaginationOptions::with_length(500)).unwrap();
    group.bench_function("walk_items_len500", |b| {
        b.iter(|| {
            pages.first();
            let mut total = 0;
            while !pages.is_last() {
                pages.next();
                total += pages.items().len();
            }
            black_box(total)
        });
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_register,
    bench_bulk,
    bench_fallback,
    bench_model_sync,
    bench_pagination,
);
criterion_main!(benches);
