//! Performance benchmarks for sprout

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use sprout::test_utils::TestTree;
use sprout::{FileFormatter, IgnoreRules, TreeWalker, WalkerConfig};

/// Build a project with `file_count` files spread over nested directories,
/// plus some ignorable noise.
fn create_test_tree_with_files(file_count: usize) -> TestTree {
    let tree = TestTree::new();
    for i in 0..file_count {
        let path = match i % 3 {
            0 => format!("src/file_{}.rs", i),
            1 => format!("src/mod_{}/file_{}.rs", i % 10, i),
            _ => format!("docs/section_{}/page_{}.md", i % 5, i),
        };
        tree.add_file(&path, "");
    }
    tree.add_file("node_modules/pkg/index.js", "");
    tree.add_file("build.log", "");
    tree.add_file(".git/HEAD", "");
    tree
}

fn bench_ignore_filter(c: &mut Criterion) {
    let rules = IgnoreRules::default();
    let names = [
        "main.rs",
        ".gitignore",
        "node_modules",
        "debug.log",
        "Cargo.toml",
        "very_long_file_name_without_any_match.txt",
    ];

    let mut group = c.benchmark_group("ignore_filter");

    group.bench_function("default_rules", |b| {
        b.iter(|| {
            names
                .iter()
                .filter(|n| rules.is_ignored(black_box(n)))
                .count()
        })
    });

    let many = (0..100).fold(IgnoreRules::default(), |r, i| {
        r.with_pattern(&format!("*.ext{}", i))
    });
    group.bench_function("hundred_suffixes", |b| {
        b.iter(|| {
            names
                .iter()
                .filter(|n| many.is_ignored(black_box(n)))
                .count()
        })
    });

    group.finish();
}

fn bench_walk(c: &mut Criterion) {
    let mut group = c.benchmark_group("walk");

    for count in [10, 100, 500] {
        let tree = create_test_tree_with_files(count);
        group.bench_function(format!("tree_{}_files", count), |b| {
            b.iter(|| {
                let mut formatter = FileFormatter::new(Vec::with_capacity(64 * 1024));
                TreeWalker::new(WalkerConfig::default())
                    .walk(black_box(tree.path()), &mut formatter)
                    .unwrap()
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_ignore_filter, bench_walk);
criterion_main!(benches);
