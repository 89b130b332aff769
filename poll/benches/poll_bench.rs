use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use merit_ledger::{EligibilityOracle, InMemoryLedger};
use merit_poll::PollEngine;
use merit_types::WalletAddress;

struct OpenOracle;

impl EligibilityOracle for OpenOracle {
    fn is_top_holder(&self, _address: &WalletAddress, _k: u32) -> bool {
        true
    }
}

fn bench_address(n: usize) -> WalletAddress {
    WalletAddress::new(format!("mrt_{:0>60}", n))
}

fn engine_with_round(voters: usize, candidates: usize) -> PollEngine {
    let mut engine = PollEngine::new(bench_address(0));
    let candidate_addrs: Vec<WalletAddress> =
        (0..candidates).map(|i| bench_address(1000 + i)).collect();
    for candidate in &candidate_addrs {
        engine.register_candidate(candidate).unwrap();
    }
    let points: Vec<u32> = (0..candidates).map(|i| (i % 21) as u32).collect();
    for v in 0..voters {
        engine
            .submit_vote(&bench_address(1 + v), &candidate_addrs, &points, &OpenOracle)
            .unwrap();
    }
    engine
}

fn bench_settle(c: &mut Criterion) {
    let mut group = c.benchmark_group("poll_settle");

    for voters in [1, 10, 100, 1000] {
        group.bench_with_input(BenchmarkId::new("settle", voters), &voters, |b, &voters| {
            b.iter_batched(
                || (engine_with_round(voters, 10), InMemoryLedger::new()),
                |(mut engine, mut ledger)| {
                    black_box(engine.settle(&mut ledger)).unwrap();
                },
                criterion::BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

fn bench_submit_vote(c: &mut Criterion) {
    let mut group = c.benchmark_group("poll_submit_vote");

    for candidates in [1, 10, 100] {
        let candidate_addrs: Vec<WalletAddress> =
            (0..candidates).map(|i| bench_address(1000 + i)).collect();
        let points: Vec<u32> = (0..candidates).map(|i| (i % 21) as u32).collect();

        group.bench_with_input(
            BenchmarkId::new("submit_vote", candidates),
            &candidates,
            |b, &candidates| {
                b.iter_batched(
                    || engine_with_round(0, candidates),
                    |mut engine| {
                        engine
                            .submit_vote(
                                &bench_address(1),
                                black_box(&candidate_addrs),
                                black_box(&points),
                                &OpenOracle,
                            )
                            .unwrap();
                    },
                    criterion::BatchSize::SmallInput,
                );
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_settle, bench_submit_vote);
criterion_main!(benches);
