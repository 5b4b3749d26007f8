//! # Name Registry Benchmarks
//!
//! | Path | Expectation |
//! |------|-------------|
//! | Claim of an unclaimed name | One store write, no ledger call |
//! | Outbid | One transfer plus one store write |
//! | Canonical command id | SHA-256 over sorted JSON |
//! | Validation rejection | No store or ledger access |

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use ns_registry::{RegistryApi, RegistryConfig};
use ns_tests::integration::fixtures::{buy, funded_service};

fn bench_claims(c: &mut Criterion) {
    let mut group = c.benchmark_group("ns-registry-claim");

    for size in [100usize, 1_000, 10_000] {
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("claim_distinct_names", size), &size, |b, &size| {
            let commands: Vec<_> = (0..size).map(|i| buy(&format!("name-{}", i), "1token", 1)).collect();
            b.iter(|| {
                let service = funded_service(&[1], "1token", RegistryConfig::default());
                for command in commands.iter().cloned() {
                    black_box(service.execute(command).is_ok());
                }
            })
        });
    }

    group.finish();
}

fn bench_outbid_chain(c: &mut Criterion) {
    let mut group = c.benchmark_group("ns-registry-outbid");
    let rounds = 1_000u32;
    let commands: Vec<_> = (1..=rounds)
        .map(|i| buy("alice", &format!("{}token", i), if i % 2 == 0 { 1 } else { 2 }))
        .collect();

    group.throughput(Throughput::Elements(u64::from(rounds)));
    group.bench_function("alternating_outbids", |b| {
        b.iter(|| {
            let service = funded_service(&[1, 2], "1000000token", RegistryConfig::default());
            for command in commands.iter().cloned() {
                black_box(service.execute(command).is_ok());
            }
        })
    });

    group.finish();
}

fn bench_command_id(c: &mut Criterion) {
    let command = buy("alice", "10token,3stake", 1);
    c.bench_function("command_id", |b| b.iter(|| black_box(command.id())));
}

fn bench_rejected_validation(c: &mut Criterion) {
    let service = funded_service(&[1], "100token", RegistryConfig::default());
    let command = buy("", "10token", 1);
    c.bench_function("reject_empty_name", |b| {
        b.iter(|| black_box(service.execute(command.clone()).is_err()))
    });
}

criterion_group!(
    benches,
    bench_claims,
    bench_outbid_chain,
    bench_command_id,
    bench_rejected_validation
);
criterion_main!(benches);
