use bignum::primitives::BigNum;

use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

const A: &str = "51bf608414ad5726a3c1bec098f77b1b54ffb2787f8d528a74c1d7fde6470ea4";
const B: &str = "403db8ad88a3932a0b7e8189aed9eeffb8121dfac05c3512fdb396dd73f6331c";

fn operands() -> (BigNum, BigNum) {
    (BigNum::parse_hex(A).unwrap(), BigNum::parse_hex(B).unwrap())
}

pub fn bench_bitwise(c: &mut Criterion) {
    let (a, b) = operands();

    c.bench_function("bignum xor 256 bits", |bench| {
        bench.iter(|| black_box(&a).xor(black_box(&b)))
    });
    c.bench_function("bignum shift_left 256 bits by 77", |bench| {
        bench.iter(|| black_box(&a).shift_left(black_box(77)))
    });
}

pub fn bench_arithmetic(c: &mut Criterion) {
    let (a, b) = operands();

    c.bench_function("bignum add 256 bits", |bench| {
        bench.iter(|| black_box(&a).add(black_box(&b)))
    });
    c.bench_function("bignum checked_sub 256 bits", |bench| {
        bench.iter(|| black_box(&a).checked_sub(black_box(&b)))
    });
}

pub fn bench_division(c: &mut Criterion) {
    let (a, _) = operands();
    let wide = a.shift_left(768).add(&a);
    let divisor = BigNum::from(0xDEAD_BEEFu32);

    c.bench_function("bignum rem 1024 by 32 bits", |bench| {
        bench.iter(|| black_box(&wide).checked_rem(black_box(&divisor)))
    });
    c.bench_function("bignum rem 1024 by 256 bits", |bench| {
        bench.iter(|| black_box(&wide).checked_rem(black_box(&a)))
    });
}

pub fn bench_hex(c: &mut Criterion) {
    let (a, _) = operands();

    c.bench_function("bignum parse_hex 64 digits", |bench| {
        bench.iter(|| BigNum::parse_hex(black_box(A)))
    });
    c.bench_function("bignum to_hex 256 bits", |bench| {
        bench.iter(|| black_box(&a).to_hex())
    });
}

criterion_group!(benches, bench_bitwise, bench_arithmetic, bench_division, bench_hex);
criterion_main!(benches);
