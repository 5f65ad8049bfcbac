#![allow(clippy::missing_panics_doc)]
#![allow(unused_imports)]

use std::thread::sleep;
use std::time::Duration;

use criterion::{
    black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion, Throughput,
};
use rand::{
    distributions::{DistString, Standard},
    rngs::SmallRng,
    SeedableRng,
};

use puny::punycode;

const SEED: u64 = 0x5EED_5EED;
const BYTES: [usize; 3] = [16, 32, 63];
const LIBRARIES: [&str; 3] = ["puny", "idna", "punycode"];

const LABEL: &str = "--7sbab8abeduuih7bb2byd6cycj";
const HOSTNAME: &str = "xn----7sbab8abeduuih7bb2byd6cycj.xn--p1ai";
const EMAIL: &str = "admin@xn----7sbab8abeduuih7bb2byd6cycj.xn--p1ai";

fn random_label(rng: &mut SmallRng, bytes: usize) -> String {
    // encode_str only fails on overflow, which 63 chars can't reach.
    idna::punycode::encode_str(&Standard.sample_string(rng, bytes)).unwrap()
}

fn decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode");

    let mut rng = SmallRng::seed_from_u64(SEED);

    for lib in LIBRARIES {
        for bytes in BYTES {
            group.throughput(Throughput::Bytes(u64::try_from(bytes).unwrap()));

            match lib {
                "puny" => {
                    group.bench_function(BenchmarkId::new(lib, bytes), |b| {
                        b.iter_batched_ref(
                            || random_label(&mut rng, bytes),
                            |i| {
                                black_box(punycode::decode(i)).unwrap();
                            },
                            BatchSize::SmallInput,
                        );
                    });
                    sleep(Duration::from_secs(5));
                }

                #[cfg(feature = "benchmark-idna")]
                "idna" => {
                    group.bench_function(BenchmarkId::new(lib, bytes), |b| {
                        b.iter_batched_ref(
                            || random_label(&mut rng, bytes),
                            |i| {
                                black_box(idna::punycode::decode_to_string(i)).unwrap();
                            },
                            BatchSize::SmallInput,
                        );
                    });
                    sleep(Duration::from_secs(5));
                }

                #[cfg(feature = "benchmark-punycode")]
                "punycode" => {
                    group.bench_function(BenchmarkId::new(lib, bytes), |b| {
                        b.iter_batched_ref(
                            || random_label(&mut rng, bytes),
                            |i| {
                                black_box(::punycode::decode(i)).unwrap();
                            },
                            BatchSize::SmallInput,
                        );
                    });
                    sleep(Duration::from_secs(5));
                }

                // skip disabled benchmark
                #[allow(unreachable_patterns)]
                _ => (),
            }
        }
    }
}

fn fixed(c: &mut Criterion) {
    let mut group = c.benchmark_group("fixed");

    group.bench_function("decode", |b| {
        b.iter(|| black_box(punycode::decode(black_box(LABEL))).unwrap());
    });
    group.bench_function("decode_hostname", |b| {
        b.iter(|| black_box(puny::decode_hostname(black_box(HOSTNAME))).unwrap());
    });
    group.bench_function("decode_email", |b| {
        b.iter(|| black_box(puny::decode_email(black_box(EMAIL))).unwrap());
    });
}

criterion_group!(benches, decode, fixed);
criterion_main!(benches);
