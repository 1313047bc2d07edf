use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use divconq_karatsuba::{karatsuba_multiply, schoolbook_multiply, Natural};

fn power_of_ten(exponent: usize) -> Natural {
    Natural::from(1_u8).shl_digits(exponent)
}

fn nines(digits: usize) -> Natural {
    power_of_ten(digits).checked_sub(&Natural::from(1_u8)).unwrap()
}

fn multiply(criterion: &mut Criterion) {
    let operands: [(&str, fn(usize) -> Natural); 2] = [("power of ten", power_of_ten), ("nines", nines)];
    for (name, operand) in operands {
        let mut group = criterion.benchmark_group(format!("square ({name})"));
        for exponent in (10..=50).step_by(10) {
            let x = operand(exponent);
            group.bench_with_input(BenchmarkId::new("karatsuba", exponent), &x, |b, x| {
                b.iter(|| karatsuba_multiply(black_box(x), black_box(x)))
            });
            group.bench_with_input(BenchmarkId::new("schoolbook", exponent), &x, |b, x| {
                b.iter(|| schoolbook_multiply(black_box(x), black_box(x)))
            });
        }
        group.finish();
    }
}

criterion_group!(benches, multiply);
criterion_main!(benches);
