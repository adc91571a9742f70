use criterion::{black_box, criterion_group, criterion_main, Criterion};
use wide::{Int1024, UInt128, UInt256, UInt512};

fn sample<const N: usize>(seed: u64) -> [u64; N] {
    let mut state = seed;
    let mut out = [0u64; N];
    for limb in out.iter_mut() {
        // splitmix64
        state = state.wrapping_add(0x9e37_79b9_7f4a_7c15);
        let mut z = state;
        z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
        *limb = z ^ (z >> 31);
    }
    out
}

fn bench_mul(c: &mut Criterion) {
    let mut group = c.benchmark_group("mul");

    let (a, b) = (UInt128::from_le_limbs(sample(1)), UInt128::from_le_limbs(sample(2)));
    group.bench_function("u128/fast", |bench| bench.iter(|| black_box(a) * black_box(b)));
    group.bench_function("u128/generic", |bench| {
        bench.iter(|| black_box(a).mul_generic(black_box(b)))
    });

    let (a, b) = (UInt256::from_le_limbs(sample(3)), UInt256::from_le_limbs(sample(4)));
    group.bench_function("u256/fast", |bench| bench.iter(|| black_box(a) * black_box(b)));
    group.bench_function("u256/generic", |bench| {
        bench.iter(|| black_box(a).mul_generic(black_box(b)))
    });

    let (a, b) = (UInt512::from_le_limbs(sample(5)), UInt512::from_le_limbs(sample(6)));
    group.bench_function("u512/fast", |bench| bench.iter(|| black_box(a) * black_box(b)));

    group.finish();
}

fn bench_div(c: &mut Criterion) {
    let mut group = c.benchmark_group("div");

    let a = UInt512::from_le_limbs(sample(7));
    let limb = UInt512::from(0x1234_5678_9abc_def1u64);
    let half = UInt512::from_le_limbs(sample(8)) >> 256u32;

    group.bench_function("u512/limb", |bench| bench.iter(|| black_box(a) / black_box(limb)));
    group.bench_function("u512/knuth", |bench| bench.iter(|| black_box(a) / black_box(half)));
    group.bench_function("u512/binary", |bench| {
        bench.iter(|| black_box(a).div_rem_generic(black_box(half)))
    });

    let a = Int1024::from_le_limbs(sample(9));
    let b = -(Int1024::from_le_limbs(sample(10)) >> 600u32);
    group.bench_function("i1024/knuth", |bench| bench.iter(|| black_box(a) % black_box(b)));

    group.finish();
}

fn bench_text(c: &mut Criterion) {
    let a = Int1024::from_le_limbs(sample(11));
    let text = a.to_string();
    c.bench_function("i1024/display", |bench| bench.iter(|| black_box(a).to_string()));
    c.bench_function("i1024/parse", |bench| {
        bench.iter(|| black_box(text.as_str()).parse::<Int1024>())
    });
}

criterion_group!(benches, bench_mul, bench_div, bench_text);
criterion_main!(benches);
