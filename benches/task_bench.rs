//! Benchmarks for Task composition and sequencing.

use criterion::{Criterion, criterion_group, criterion_main};
use kindling::effect::Task;
use tokio::runtime::Runtime;

fn bench_task_composition(criterion: &mut Criterion) {
    let runtime = Runtime::new().expect("failed to build bench runtime");

    criterion.bench_function("task_pure_chain", |bencher| {
        bencher.to_async(&runtime).iter(|| async {
            Task::<i32, String>::pure(1)
                .fmap(|x| x + 1)
                .flat_map(|x| Task::pure(x * 2))
                .await
        });
    });

    criterion.bench_function("task_map2_sequential", |bencher| {
        bencher.to_async(&runtime).iter(|| async {
            Task::<i32, String>::pure(1)
                .map2(Task::pure(2), |a, b| a + b)
                .await
        });
    });

    criterion.bench_function("task_zip_par", |bencher| {
        bencher.to_async(&runtime).iter(|| async {
            Task::<i32, String>::pure(1).zip_par(Task::pure(2)).await
        });
    });
}

fn bench_task_sequencing(criterion: &mut Criterion) {
    let runtime = Runtime::new().expect("failed to build bench runtime");

    criterion.bench_function("task_sequence_100", |bencher| {
        bencher.to_async(&runtime).iter(|| async {
            let tasks: Vec<Task<i32, String>> = (0..100).map(Task::pure).collect();
            Task::sequence(tasks).await
        });
    });

    criterion.bench_function("task_sequence_par_100", |bencher| {
        bencher.to_async(&runtime).iter(|| async {
            let tasks: Vec<Task<i32, String>> = (0..100).map(Task::pure).collect();
            Task::sequence_par(tasks).await
        });
    });
}

criterion_group!(benches, bench_task_composition, bench_task_sequencing);
criterion_main!(benches);
