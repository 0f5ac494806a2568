use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use hash_table::FixedHashTable;
use rand::Rng;

const CAPACITY: usize = 1024;

fn random_keys(count: usize) -> Vec<u64> {
    let mut rng = rand::thread_rng();
    (0..count).map(|_| rng.gen_range(0..u64::MAX)).collect()
}

// Load factor ~0.75 keeps linear probing chains short.
fn filled_table(keys: &[u64]) -> FixedHashTable<u64, u64> {
    let mut table = FixedHashTable::new(CAPACITY).unwrap();
    for &key in keys {
        table.put(key, key).unwrap();
    }
    table
}

fn benchmark_put(c: &mut Criterion) {
    let keys = random_keys(CAPACITY * 3 / 4);

    c.bench_function("put", |b| {
        b.iter_batched(
            || FixedHashTable::<u64, u64>::new(CAPACITY).unwrap(),
            |mut table| {
                for &key in &keys {
                    table.put(key, key).unwrap();
                }
                table
            },
            BatchSize::SmallInput,
        )
    });
}

fn benchmark_get(c: &mut Criterion) {
    let keys = random_keys(CAPACITY * 3 / 4);
    let table = filled_table(&keys);

    c.bench_function("get", |b| {
        b.iter(|| {
            for key in &keys {
                black_box(table.get(key));
            }
        })
    });
}

criterion_group!(benches, benchmark_put, benchmark_get);
criterion_main!(benches);
