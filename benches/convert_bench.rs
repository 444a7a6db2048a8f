use criterion::{Criterion, black_box, criterion_group, criterion_main};
use nongli::chinese::{
    Riqi, bias_eot, cjie_to_usec, next_cyue, riqi_to_uday, uday_to_riqi, usec_to_bazi,
    usec_to_cjie,
};
use nongli::fixed::Fix64;
use nongli::trig::{cosq, sinq};
use nongli::{Zone, date_to_uday, uday_to_date, usec_to_dati};

fn gregorian_bench(c: &mut Criterion) {
    let uday = 19782;
    let usec = 1_709_136_666;

    let mut group = c.benchmark_group("gregorian");
    group.bench_function("uday_to_date", |b| b.iter(|| uday_to_date(black_box(uday))));
    let date = uday_to_date(uday);
    group.bench_function("date_to_uday", |b| b.iter(|| date_to_uday(black_box(date))));
    group.bench_function("usec_to_dati", |b| {
        b.iter(|| usec_to_dati(black_box(usec), Zone::CHINA))
    });
    group.finish();
}

fn fixed_bench(c: &mut Criterion) {
    let x = Fix64::from_bits(0x1_bb2c_a134);
    let y = Fix64::from_bits(-0x0_7654_3210);

    let mut group = c.benchmark_group("fixed");
    group.bench_function("fast_mul", |b| b.iter(|| black_box(x).fast_mul(black_box(y))));
    group.bench_function("fair_mul", |b| b.iter(|| black_box(x).fair_mul(black_box(y))));
    group.bench_function("fair_div", |b| {
        b.iter(|| Fix64::fair_div(black_box(762_408_666), black_box(3_155_760_000)))
    });
    group.bench_function("sinq", |b| b.iter(|| sinq(black_box(x))));
    group.bench_function("cosq", |b| b.iter(|| cosq(black_box(x))));
    group.finish();
}

fn lunar_bench(c: &mut Criterion) {
    let riqi = Riqi::new(2024, 2, 20);

    let mut group = c.benchmark_group("lunar");
    group.bench_function("uday_to_riqi", |b| b.iter(|| uday_to_riqi(black_box(19782))));
    group.bench_function("riqi_to_uday", |b| b.iter(|| riqi_to_uday(black_box(riqi))));
    group.bench_function("next_cyue", |b| b.iter(|| next_cyue(black_box(riqi), 42)));
    group.finish();
}

fn solar_bench(c: &mut Criterion) {
    let usec = 1_709_136_666;

    let mut group = c.benchmark_group("solar");
    group.bench_function("cjie_to_usec", |b| b.iter(|| cjie_to_usec(black_box(1300))));
    group.bench_function("usec_to_cjie", |b| b.iter(|| usec_to_cjie(black_box(usec))));
    group.bench_function("bias_eot", |b| {
        b.iter(|| bias_eot(black_box(usec), black_box(1300)))
    });
    group.bench_function("usec_to_bazi", |b| {
        b.iter(|| usec_to_bazi(black_box(usec), black_box(119.0)))
    });
    group.finish();
}

criterion_group!(
    benches,
    gregorian_bench,
    fixed_bench,
    lunar_bench,
    solar_bench
);
criterion_main!(benches);
