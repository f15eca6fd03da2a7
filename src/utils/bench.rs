/// Glue between a plain `Range` loop (for profilers) and criterion.
#[macro_export]
macro_rules! _impl_bench_trait_for_criterion {
    ($name:ident) => {
        pub trait BenchTrait {
            fn bench<F>(&mut self, name: &str, f: F) where F: FnMut();
        }

        impl BenchTrait for std::ops::Range<usize> {
            #[inline(always)]
            fn bench<F>(&mut self, _name: &str, mut f: F) where F: FnMut() {
                for _ in self {
                    f();
                }
            }
        }

        impl BenchTrait for $name {
            #[inline(always)]
            fn bench<F>(&mut self, name: &str, mut f: F) where F: FnMut() {
                self.bench_function(name, |b| b.iter(|| {
                    f();
                }));
            }
        }
    };
}

/// `cargo bench` runs the criterion group; running the binary directly
/// loops `$fn` over a 64 KiB input.
#[macro_export]
macro_rules! _bench_main {
    ($name:ident, $fn:ident$(,)?) => {
        fn main() {
            if std::env::args().any(|arg| arg == "--bench") {
                $name();
                Criterion::default().configure_from_args().final_summary();
                return;
            }
            let mut range = 0..100000;
            $fn(&mut range, 65536);
        }
    };
}
