use criterion::*;
use digest128::crypto::hash::md5::Md5;
use digest128::crypto::hmac::HmacMd5;
use digest128::utils::human_readable_size;
use digest128::{_impl_bench_trait_for_criterion, _bench_main};

_impl_bench_trait_for_criterion!(Criterion);

fn bench_md5_hash(c: &mut impl BenchTrait, size: usize) {
    let data = vec![0u8; size];

    let test_name = format!("md5 hash {}", human_readable_size(size));
    c.bench(&test_name, || {
        let _ = std::hint::black_box(Md5::digest(&data));
    });
}

fn bench_hmac_md5(c: &mut impl BenchTrait, size: usize) {
    let data = vec![0u8; size];
    let mac = HmacMd5::new(b"bench key");

    let test_name = format!("hmac-md5 {}", human_readable_size(size));
    c.bench(&test_name, || {
        if let Ok(mac) = &mac {
            let _ = std::hint::black_box(mac.sign(&data));
        }
    });
}

fn bench_md5(c: &mut Criterion) {

    fn bench_crate_md5_hash(c: &mut Criterion, size: usize) {
        let data = vec![0u8; size];

        let test_name = format!("crate md5 hash {}", human_readable_size(size));
        c.bench_function(&test_name, |b| b.iter(|| {
            std::hint::black_box(md5::compute(&data));
        }));
    }

    for size in [16, 64, 256, 1024, 8192, 65536] {
        bench_md5_hash(c, size);
        bench_crate_md5_hash(c, size);
        bench_hmac_md5(c, size);
    }
}

criterion_group!(benches, bench_md5);
_bench_main!(benches, bench_md5_hash);
