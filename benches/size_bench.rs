// Directory size benchmarks

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use dirsize::scan::directory_size;
use dirsize::util::human_readable_size;

mod common;

fn bench_directory_size(c: &mut Criterion) {
    let mut group = c.benchmark_group("directory_size");
    for files in [10, 100, 500] {
        let tree = common::generate_tree(4, 5, files);
        group.bench_with_input(BenchmarkId::new("files_per_level", files), &tree, |b, tree| {
            b.iter(|| black_box(directory_size(tree.path()).unwrap()));
        });
    }
    group.finish();
}

fn bench_human_readable_size(c: &mut Criterion) {
    c.bench_function("human_readable_size", |b| {
        b.iter(|| {
            for n in [0u64, 1023, 1024, 5 << 20, 7 << 30] {
                black_box(human_readable_size(black_box(n)));
            }
        });
    });
}

criterion_group!(benches, bench_directory_size, bench_human_readable_size);
criterion_main!(benches);
