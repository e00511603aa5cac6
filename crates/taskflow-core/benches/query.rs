#![allow(missing_docs)]

use criterion::{BatchSize, BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use taskflow_core::{Category, SortOption, Task, TaskQuery};

fn build_tasks(count: usize) -> Vec<Task> {
    (0..count)
        .filter_map(|idx| {
            let category = Category::ALL[idx % Category::ALL.len()];
            let created_at = i64::try_from(idx).unwrap_or(i64::MAX);
            Task::new(&format!("Task number {idx} for bench"), category, created_at)
        })
        .collect()
}

fn query_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("task_query_apply");
    for &count in &[64usize, 512, 4096] {
        for sort in [SortOption::Newest, SortOption::AToZ] {
            group.bench_with_input(
                BenchmarkId::new(sort.as_str(), count),
                &count,
                |b, &count| {
                    let query = TaskQuery::new()
                        .with_category(Category::Work)
                        .with_search("number 1")
                        .with_sort(sort);
                    b.iter_batched(
                        || build_tasks(count),
                        |tasks| {
                            black_box(query.apply(&tasks));
                        },
                        BatchSize::SmallInput,
                    );
                },
            );
        }
    }
    group.finish();
}

criterion_group!(benches, query_benchmark);
criterion_main!(benches);
