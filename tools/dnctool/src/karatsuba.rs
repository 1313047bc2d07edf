use std::num::NonZeroUsize;
use std::time::{Duration, Instant};

use divconq_karatsuba::{schoolbook_multiply, CallStats, Combine, Karatsuba, KaratsubaConfig, Natural, Split, Tracer};
use log::info;

const CHECK_CASES: &[(&str, &str)] = &[
    ("12", "34"),
    ("123", "456"),
    ("1234", "5678"),
    ("12345", "67890"),
    ("123456789", "987654321"),
    ("999999999", "999999999"),
    ("1000000000000", "2000000000000"),
    ("5", "7"),
    ("0", "12345"),
    ("1", "98765"),
];

#[derive(clap::Args, Debug)]
pub struct BenchOptions {
    /// Largest operand size, as a power of ten.
    #[clap(long, default_value_t = 50)]
    max_exponent: usize,

    /// Distance between successive operand sizes.
    #[clap(long, default_value = "10")]
    step: NonZeroUsize,

    /// Use operands made only of nines instead of powers of ten.
    #[clap(long)]
    nines: bool,
}

fn parse_operand(text: &str) -> Result<Natural, String> {
    text.parse().map_err(|error| format!("invalid operand '{text}': {error}"))
}

fn kernel(base_case_digits: Option<NonZeroUsize>) -> Result<Karatsuba, String> {
    let mut config = KaratsubaConfig::from_env().map_err(|error| error.to_string())?;
    if let Some(digits) = base_case_digits {
        config.set_base_case_digits(digits);
    }

    Ok(Karatsuba::new(config))
}

fn timed<T>(callback: impl FnOnce() -> T) -> (T, Duration) {
    let start = Instant::now();
    let value = callback();
    (value, start.elapsed())
}

fn speedup(baseline: Duration, candidate: Duration) -> f64 {
    baseline.as_secs_f64() / candidate.as_secs_f64().max(f64::MIN_POSITIVE)
}

pub fn check() -> Result<(), String> {
    let karatsuba = kernel(None)?;
    let mut fail_count = 0;
    for &(x, y) in CHECK_CASES {
        let x = parse_operand(x)?;
        let y = parse_operand(y)?;
        let actual = karatsuba.multiply(&x, &y);
        let expected = schoolbook_multiply(&x, &y);
        let status = if actual == expected {
            "OK"
        } else {
            fail_count += 1;
            "MISMATCH"
        };

        println!("{x} × {y}");
        println!("  Karatsuba: {actual}");
        println!("  Expected:  {expected}");
        println!("  Status:    {status}");
    }

    let count = CHECK_CASES.len();
    info!("{}/{count}: OK", count - fail_count);
    if fail_count > 0 {
        Err(format!("{fail_count} of {count} products were wrong"))
    } else {
        Ok(())
    }
}

pub fn multiply(x: &str, y: &str, base_case_digits: Option<NonZeroUsize>) -> Result<(), String> {
    let x = parse_operand(x)?;
    let y = parse_operand(y)?;
    let karatsuba = kernel(base_case_digits)?;

    let mut stats = CallStats::default();
    let (product, karatsuba_time) = timed(|| karatsuba.multiply_traced(&x, &y, &mut stats));
    let (expected, schoolbook_time) = timed(|| schoolbook_multiply(&x, &y));
    if product != expected {
        return Err(format!("Karatsuba produced {product}, long multiplication produced {expected}"));
    }

    println!("{x} × {y} = {product}");
    println!(
        "Karatsuba time:  {:.6} seconds ({} calls, depth {}, base case at {} digits)",
        karatsuba_time.as_secs_f64(),
        stats.calls(),
        stats.max_depth,
        karatsuba.config().base_case_digits()
    );
    println!("Schoolbook time: {:.6} seconds", schoolbook_time.as_secs_f64());
    println!("Speedup: {:.2}x", speedup(schoolbook_time, karatsuba_time));
    Ok(())
}

/// Renders the kernel's recursion as text, down to `max_depth`.
struct Narrator {
    max_depth: usize,
    lines: Vec<String>,
}

impl Narrator {
    fn new(max_depth: usize) -> Self {
        Narrator {
            max_depth,
            lines: Vec::new(),
        }
    }

    fn push(&mut self, depth: usize, line: String) {
        if depth <= self.max_depth {
            self.lines.push(format!("{}{line}", "    ".repeat(depth)));
        }
    }
}

impl Tracer for Narrator {
    fn base_case(&mut self, depth: usize, x: &Natural, y: &Natural, product: &Natural) {
        self.push(depth, format!("Base case: {x} × {y} = {product}"));
    }

    fn split(&mut self, split: &Split) {
        let m = split.m;
        self.push(split.depth, format!("Multiplying {} × {}", split.x, split.y));
        self.push(split.depth, format!("  {} = {} × 10^{m} + {}", split.x, split.a, split.b));
        self.push(split.depth, format!("  {} = {} × 10^{m} + {}", split.y, split.c, split.d));
    }

    fn combine(&mut self, combine: &Combine) {
        let depth = combine.depth;
        let m = combine.m;
        self.push(depth, format!("  ac = {}", combine.ac));
        self.push(depth, format!("  bd = {}", combine.bd));
        self.push(
            depth,
            format!(
                "  (a+b) × (c+d) = {} × {} = {}",
                combine.a_plus_b, combine.c_plus_d, combine.sum_product
            ),
        );
        self.push(
            depth,
            format!(
                "  ad + bc = {} - {} - {} = {}",
                combine.sum_product, combine.ac, combine.bd, combine.cross
            ),
        );
        self.push(
            depth,
            format!(
                "  {} × 10^{} + {} × 10^{m} + {} = {}",
                combine.ac,
                2 * m,
                combine.cross,
                combine.bd,
                combine.result
            ),
        );
    }
}

pub fn demo(x: &str, y: &str, depth: usize) -> Result<(), String> {
    let x = parse_operand(x)?;
    let y = parse_operand(y)?;

    let mut narrator = Narrator::new(depth);
    let product = kernel(None)?.multiply_traced(&x, &y, &mut narrator);
    for line in &narrator.lines {
        println!("{line}");
    }

    let expected = schoolbook_multiply(&x, &y);
    let verdict = if product == expected { "✓" } else { "✗" };
    println!("Verification: {x} × {y} = {expected} {verdict}");
    Ok(())
}

fn bench_operand(digits: usize, nines: bool) -> Natural {
    if nines {
        Natural::from(1_u8).shl_digits(digits).checked_sub(&Natural::from(1_u8)).unwrap_or_default()
    } else {
        Natural::from(1_u8).shl_digits(digits)
    }
}

pub fn bench(options: &BenchOptions) -> Result<(), String> {
    let karatsuba = kernel(None)?;
    let step = options.step.get();
    let mut exponent = step;
    while exponent <= options.max_exponent {
        let x = bench_operand(exponent, options.nines);
        let (product, karatsuba_time) = timed(|| karatsuba.multiply(&x, &x));
        let (expected, schoolbook_time) = timed(|| schoolbook_multiply(&x, &x));
        if product != expected {
            return Err(format!("wrong product for operands with {} digits", x.digit_count()));
        }

        println!("Size: {0} digits × {0} digits", x.digit_count());
        println!("  Karatsuba:  {:.6} seconds", karatsuba_time.as_secs_f64());
        println!("  Schoolbook: {:.6} seconds", schoolbook_time.as_secs_f64());
        println!("  Speedup:    {:.2}x", speedup(schoolbook_time, karatsuba_time));

        exponent += step;
    }

    Ok(())
}
