mod bench;

cfg_if::cfg_if! {
    if #[cfg(feature = "variable_time_eq")] {
        #[inline(always)]
        pub(crate) fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
            a == b
        }
    } else {
        #[inline(always)]
        pub(crate) fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
            if a.len() != b.len() {
                return false;
            }

            let mut x = 0u8;

            for i in 0..a.len() {
                x |= a[i] ^ b[i];
            }

            x == 0
        }
    }
}

/// Converts a size in bytes to a human-readable string. For benchmarking
pub fn human_readable_size(size: usize) -> String {
    let mut cal_size = size;
    let mut unit = 0;
    while cal_size >= 1024 {
        cal_size >>= 10;
        unit += 1;
    }
    let unit = match unit {
        0 => "B",
        1 => "KiB",
        2 => "MiB",
        3 => "GiB",
        _ => {
            cal_size = size;
            "B"
        },
    };
    format!("{} {}", cal_size, unit)
}
