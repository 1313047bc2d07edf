use core::num::NonZeroUsize;

use proptest::prelude::*;

use crate::{karatsuba_multiply, schoolbook_multiply, CallStats, Combine, Error, Karatsuba, KaratsubaConfig, Natural, Split, Tracer};

fn nat(text: &str) -> Natural {
    text.parse().unwrap()
}

fn with_cutoff(digits: usize) -> Karatsuba {
    let mut config = KaratsubaConfig::new();
    config.set_base_case_digits(NonZeroUsize::new(digits).unwrap());
    Karatsuba::new(config)
}

#[test]
fn test_known_products() {
    let cases: &[(u128, u128)] = &[
        (12, 34),
        (123, 456),
        (1234, 5678),
        (12345, 67890),
        (123456789, 987654321),
        (999999999, 999999999),
        (1000000000000, 2000000000000),
        (5, 7),
        (0, 12345),
        (1, 98765),
    ];

    for &(x, y) in cases {
        let product = karatsuba_multiply(&Natural::from(x), &Natural::from(y));
        assert_eq!(product.to_u128(), Some(x * y), "{x} * {y}");
    }
}

#[test]
fn test_reference_values() {
    assert_eq!(karatsuba_multiply(&nat("0"), &nat("12345")), Natural::ZERO);
    assert_eq!(karatsuba_multiply(&nat("999999999"), &nat("999999999")), nat("999999998000000001"));
    assert_eq!(karatsuba_multiply(&nat("123"), &nat("456")), nat("56088"));
}

#[test]
fn test_products_beyond_native_width() {
    let x = nat("123456789012345678901234567890123456789012345678901234567890");
    let y = nat("987654321098765432109876543210987654321098765432109876543210");
    assert_eq!(karatsuba_multiply(&x, &y), schoolbook_multiply(&x, &y));
    assert_eq!(
        karatsuba_multiply(&x, &y).to_string(),
        "121932631137021795226185032733866788594511507391563633592367367779295611949397448712086533622923332237463801111263526900"
    );
}

#[test]
fn test_powers_of_ten() {
    let x = Natural::from(1u8).shl_digits(50);
    let product = karatsuba_multiply(&x, &x);
    assert_eq!(product, Natural::from(1u8).shl_digits(100));
    assert_eq!(product.digit_count(), 101);
}

#[test]
fn test_operator_uses_kernel() {
    assert_eq!(Natural::from(1234u32) * Natural::from(5678u32), Natural::from(7006652u32));
    assert_eq!(Natural::from(19u32) + Natural::from(81u32), Natural::from(100u32));
}

#[test]
fn test_split_and_shift() {
    let x = nat("1234500");
    let (high, low) = x.split_at(3);
    assert_eq!(high, nat("1234"));
    assert_eq!(low, nat("500"));

    let (high, low) = nat("1000007").split_at(3);
    assert_eq!(high, nat("1000"));
    assert_eq!(low, nat("7"));

    let (high, low) = nat("42").split_at(5);
    assert_eq!(high, Natural::ZERO);
    assert_eq!(low, nat("42"));

    assert_eq!(nat("42").shl_digits(3), nat("42000"));
    assert_eq!(Natural::ZERO.shl_digits(3), Natural::ZERO);
}

#[test]
fn test_checked_sub() {
    assert_eq!(nat("1000").checked_sub(&nat("1")), Some(nat("999")));
    assert_eq!(nat("1000").checked_sub(&nat("1000")), Some(Natural::ZERO));
    assert_eq!(nat("999").checked_sub(&nat("1000")), None);
}

#[test]
fn test_digit_count_is_exact() {
    assert_eq!(Natural::ZERO.digit_count(), 1);
    assert_eq!(nat("9").digit_count(), 1);
    assert_eq!(nat("10").digit_count(), 2);
    assert_eq!(Natural::from(u128::MAX).digit_count(), 39);
    assert_eq!(nat("0000123").digit_count(), 3);
}

#[test]
fn test_parse_rejects_negative_and_garbage() {
    assert_eq!("-5".parse::<Natural>(), Err(Error::Negative));
    assert_eq!("-0".parse::<Natural>(), Ok(Natural::ZERO));
    assert_eq!("+17".parse::<Natural>(), Ok(Natural::from(17u8)));
    assert_eq!("  42 ".parse::<Natural>(), Ok(Natural::from(42u8)));
    assert_eq!("".parse::<Natural>(), Err(Error::Empty));
    assert_eq!("-".parse::<Natural>(), Err(Error::Empty));
    assert_eq!(
        " 12a4".parse::<Natural>(),
        Err(Error::Malformed {
            input: " 12a4".into(),
            position: 3
        })
    );
}

#[test]
fn test_try_from_signed() {
    assert_eq!(Natural::try_from(-1_i64), Err(Error::Negative));
    assert_eq!(Natural::try_from(i128::MIN), Err(Error::Negative));
    assert_eq!(Natural::try_from(i64::MAX).unwrap().to_string(), i64::MAX.to_string());
}

#[test]
fn test_ordering() {
    assert!(nat("100") > nat("99"));
    assert!(nat("123") < nat("124"));
    assert_eq!(nat("007"), nat("7"));
}

#[test]
fn test_display_padding() {
    assert_eq!(format!("{:>6}", nat("42")), "    42");
    assert_eq!(format!("{}", Natural::ZERO), "0");
}

#[test]
fn test_call_stats() {
    let mut stats = CallStats::default();
    let product = Karatsuba::default().multiply_traced(&nat("12"), &nat("34"), &mut stats);
    assert_eq!(product, nat("408"));
    assert_eq!(
        stats,
        CallStats {
            base_cases: 3,
            splits: 1,
            max_depth: 1,
        }
    );

    // Every split issues exactly three sub-multiplications.
    let mut stats = CallStats::default();
    Karatsuba::default().multiply_traced(&nat("31415926535897932384"), &nat("27182818284590452353"), &mut stats);
    assert_eq!(stats.calls(), 3 * stats.splits + 1);
    assert_eq!(stats.base_cases, 2 * stats.splits + 1);
}

#[derive(Default)]
struct Recorder {
    events: Vec<String>,
}

impl Tracer for Recorder {
    fn base_case(&mut self, depth: usize, x: &Natural, y: &Natural, product: &Natural) {
        self.events.push(format!("{depth}: {x} * {y} = {product}"));
    }

    fn split(&mut self, split: &Split) {
        self.events.push(format!(
            "{}: {} = {} * 10^{m} + {}, {} = {} * 10^{m} + {}",
            split.depth,
            split.x,
            split.a,
            split.b,
            split.y,
            split.c,
            split.d,
            m = split.m
        ));
    }

    fn combine(&mut self, combine: &Combine) {
        self.events.push(format!(
            "{}: {} - {} - {} = {} -> {}",
            combine.depth, combine.sum_product, combine.ac, combine.bd, combine.cross, combine.result
        ));
    }
}

#[test]
fn test_tracer_event_order() {
    let mut recorder = Recorder::default();
    Karatsuba::default().multiply_traced(&nat("12"), &nat("34"), &mut recorder);
    assert_eq!(
        recorder.events,
        vec![
            "0: 12 = 1 * 10^1 + 2, 34 = 3 * 10^1 + 4",
            "1: 1 * 3 = 3",
            "1: 2 * 4 = 8",
            "1: 3 * 7 = 21",
            "0: 21 - 3 - 8 = 10 -> 408",
        ]
    );
}

#[test]
fn test_single_digit_operand_is_base_case() {
    let mut recorder = Recorder::default();
    let product = Karatsuba::default().multiply_traced(&nat("7"), &nat("123456789"), &mut recorder);
    assert_eq!(product, nat("864197523"));
    assert_eq!(recorder.events, vec!["0: 7 * 123456789 = 864197523"]);
}

#[test]
fn test_config_from_lookup() {
    let config = KaratsubaConfig::from_lookup(|_| None).unwrap();
    assert_eq!(config.base_case_digits(), 1);

    let config = KaratsubaConfig::from_lookup(|_| Some(" 8 ".into())).unwrap();
    assert_eq!(config.base_case_digits(), 8);

    assert!(matches!(
        KaratsubaConfig::from_lookup(|_| Some("0".into())),
        Err(Error::InvalidConfig { .. })
    ));
    assert!(matches!(
        KaratsubaConfig::from_lookup(|_| Some("many".into())),
        Err(Error::InvalidConfig { .. })
    ));
}

#[test]
fn test_larger_cutoff_skips_small_splits() {
    let mut stats = CallStats::default();
    let product = with_cutoff(4).multiply_traced(&nat("1234"), &nat("5678"), &mut stats);
    assert_eq!(product, nat("7006652"));
    assert_eq!(stats.splits, 0);
}

proptest! {
    #[test]
    fn matches_native_multiplication(x in any::<u64>(), y in any::<u64>()) {
        let product = karatsuba_multiply(&Natural::from(x), &Natural::from(y));
        prop_assert_eq!(product.to_u128(), Some(u128::from(x) * u128::from(y)));
    }

    #[test]
    fn matches_schoolbook_on_long_operands(x in "[0-9]{1,80}", y in "[0-9]{1,80}", cutoff in 1_usize..6) {
        let x = nat(&x);
        let y = nat(&y);
        prop_assert_eq!(with_cutoff(cutoff).multiply(&x, &y), schoolbook_multiply(&x, &y));
    }

    #[test]
    fn is_commutative(x in "[0-9]{1,50}", y in "[0-9]{1,50}") {
        let x = nat(&x);
        let y = nat(&y);
        prop_assert_eq!(karatsuba_multiply(&x, &y), karatsuba_multiply(&y, &x));
    }

    #[test]
    fn tracing_does_not_change_the_result(x in any::<u64>(), y in any::<u64>()) {
        let x = Natural::from(x);
        let y = Natural::from(y);
        let mut stats = CallStats::default();
        prop_assert_eq!(Karatsuba::default().multiply_traced(&x, &y, &mut stats), karatsuba_multiply(&x, &y));
    }
}
