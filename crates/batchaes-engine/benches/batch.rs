use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;

use batchaes_engine::{
    BackendPreference, BatchEncryptor, Block, EngineConfig, MasterKey, RoundKeySchedule,
};

fn random_batch(n: usize) -> (Vec<MasterKey>, Vec<Block>) {
    let mut rng = ChaCha20Rng::from_seed([3u8; 32]);
    let mut keys = vec![MasterKey([0u8; 16]); n];
    let mut blocks = vec![[0u8; 16]; n];
    for (key, block) in keys.iter_mut().zip(blocks.iter_mut()) {
        rng.fill_bytes(&mut key.0);
        rng.fill_bytes(block);
    }
    (keys, blocks)
}

fn bench_backends(c: &mut Criterion) {
    let n = 1024;
    let (keys, blocks) = random_batch(n);
    let mut out = vec![[0u8; 16]; n];
    let mut scratch = vec![RoundKeySchedule::zeroed(); n];

    let mut group = c.benchmark_group("backend");
    group.throughput(Throughput::Elements(n as u64));
    for backend in [BackendPreference::Auto, BackendPreference::Portable] {
        let engine = BatchEncryptor::with_config(EngineConfig {
            backend,
            ..EngineConfig::sequential()
        })
        .expect("auto and portable backends are always available");
        group.bench_function(engine.backend().to_string(), |b| {
            b.iter(|| engine.encrypt_batch(&keys, &blocks, &mut out, &mut scratch));
        });
    }
    group.finish();
}

fn bench_sharding(c: &mut Criterion) {
    let mut group = c.benchmark_group("sharding");
    group.sample_size(20);
    for n in [1usize << 12, 1 << 16] {
        let (keys, blocks) = random_batch(n);
        let mut out = vec![[0u8; 16]; n];
        let mut scratch = vec![RoundKeySchedule::zeroed(); n];
        group.throughput(Throughput::Elements(n as u64));

        let sequential = BatchEncryptor::with_config(EngineConfig::sequential())
            .expect("default backend is always available");
        group.bench_with_input(BenchmarkId::new("sequential", n), &n, |b, _| {
            b.iter(|| sequential.encrypt_batch(&keys, &blocks, &mut out, &mut scratch));
        });

        let sharded = BatchEncryptor::with_config(EngineConfig {
            parallel_threshold: 0,
            ..EngineConfig::default()
        })
        .expect("default backend is always available");
        group.bench_with_input(BenchmarkId::new("sharded", n), &n, |b, _| {
            b.iter(|| sharded.encrypt_batch(&keys, &blocks, &mut out, &mut scratch));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_backends, bench_sharding);
criterion_main!(benches);
