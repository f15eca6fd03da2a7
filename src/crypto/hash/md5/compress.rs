use super::{K64, SHIFTS};

#[inline(always)]
fn step(f: u32, a: u32, b: u32, x: u32, s: u32, t: u32) -> u32 {
    a.wrapping_add(f)
        .wrapping_add(x)
        .wrapping_add(t)
        .rotate_left(s)
        .wrapping_add(b)
}

#[inline(always)]
fn ff(a: u32, b: u32, c: u32, d: u32, x: u32, s: u32, t: u32) -> u32 {
    step((b & c) | (!b & d), a, b, x, s, t)
}

#[inline(always)]
fn gg(a: u32, b: u32, c: u32, d: u32, x: u32, s: u32, t: u32) -> u32 {
    step((b & d) | (c & !d), a, b, x, s, t)
}

#[inline(always)]
fn hh(a: u32, b: u32, c: u32, d: u32, x: u32, s: u32, t: u32) -> u32 {
    step(b ^ c ^ d, a, b, x, s, t)
}

#[inline(always)]
fn ii(a: u32, b: u32, c: u32, d: u32, x: u32, s: u32, t: u32) -> u32 {
    step(c ^ (b | !d), a, b, x, s, t)
}

/// Message word consumed by step `k` (0..16) of `round`.
#[inline(always)]
const fn word_index(round: usize, k: usize) -> usize {
    match round {
        0 => k,
        1 => (5 * k + 1) % 16,
        2 => (3 * k + 5) % 16,
        _ => (7 * k) % 16,
    }
}

macro_rules! round {
    ($f:ident, $round:expr, $w:ident, $a:ident, $b:ident, $c:ident, $d:ident) => {
        crate::const_loop4!(i, {
            let s = SHIFTS[$round];
            let k = 4 * i;
            let t = 16 * $round + k;
            $a = $f($a, $b, $c, $d, $w[word_index($round, k)], s[0], K64[t]);
            $d = $f($d, $a, $b, $c, $w[word_index($round, k + 1)], s[1], K64[t + 1]);
            $c = $f($c, $d, $a, $b, $w[word_index($round, k + 2)], s[2], K64[t + 2]);
            $b = $f($b, $c, $d, $a, $w[word_index($round, k + 3)], s[3], K64[t + 3]);
        });
    };
}

/// Folds one 16-word block into `state`.
pub(crate) fn compress(state: &mut [u32; 4], w: &[u32; 16]) {
    let mut a = state[0];
    let mut b = state[1];
    let mut c = state[2];
    let mut d = state[3];

    round!(ff, 0, w, a, b, c, d);
    round!(gg, 1, w, a, b, c, d);
    round!(hh, 2, w, a, b, c, d);
    round!(ii, 3, w, a, b, c, d);

    state[0] = state[0].wrapping_add(a);
    state[1] = state[1].wrapping_add(b);
    state[2] = state[2].wrapping_add(c);
    state[3] = state[3].wrapping_add(d);
}
