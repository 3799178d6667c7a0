use std::sync::Arc;
use std::time::Duration;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};

use ledgerd_core::AccountId;
use ledgerd_ledger::{BalanceLedger, LedgerConfig};
use ledgerd_store::InMemoryKvStore;

/// Charge throughput against the in-memory store: a single writer vs.
/// several writers hammering the same balance key through the retry loop.
fn bench_charges(c: &mut Criterion) {
    let rt = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .unwrap();

    let mut group = c.benchmark_group("charge");

    for writers in [1usize, 4, 8] {
        group.throughput(Throughput::Elements(writers as u64));
        group.bench_with_input(
            BenchmarkId::new("same_account", writers),
            &writers,
            |b, &writers| {
                b.iter(|| {
                    rt.block_on(async {
                        let store = Arc::new(InMemoryKvStore::new());
                        let config = LedgerConfig {
                            // Keep the bench about the protocol, not the pause.
                            retry_backoff: Duration::from_micros(50),
                            ..LedgerConfig::default()
                        };
                        let ledger = BalanceLedger::with_config(store, config);
                        let account = AccountId::new("bench");

                        ledger.reset(&account).await.unwrap();

                        let mut tasks = Vec::with_capacity(writers);
                        for _ in 0..writers {
                            let ledger = ledger.clone();
                            let account = account.clone();
                            tasks.push(tokio::spawn(async move {
                                ledger.charge(&account, 1).await.unwrap()
                            }));
                        }
                        for task in tasks {
                            task.await.unwrap();
                        }
                    })
                })
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_charges);
criterion_main!(benches);
