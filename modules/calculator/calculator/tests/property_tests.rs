#![allow(clippy::unwrap_used, clippy::expect_used)]

//! Algebraic properties checked over a grid of boundary and ordinary values.

use calculator::Service;
use calculator_sdk::CalculatorClientV1;

const VALUES: [i32; 13] = [
    i32::MIN,
    i32::MIN + 1,
    -65_536,
    -7,
    -1,
    0,
    1,
    2,
    7,
    46_341,
    65_536,
    i32::MAX - 1,
    i32::MAX,
];

fn pairs() -> impl Iterator<Item = (i32, i32)> {
    VALUES
        .iter()
        .flat_map(|&a| VALUES.iter().map(move |&b| (a, b)))
}

#[test]
fn test_sum_is_commutative() {
    let calc = Service::new();
    for (a, b) in pairs() {
        assert_eq!(calc.sum(a, b), calc.sum(b, a), "sum({a}, {b})");
    }
}

#[test]
fn test_subtract_is_anti_commutative_without_overflow() {
    let calc = Service::new();
    for (a, b) in pairs() {
        let (Some(ab), Some(ba)) = (a.checked_sub(b), b.checked_sub(a)) else {
            continue;
        };
        assert_eq!(calc.subtract(a, b), ab);
        assert_eq!(calc.subtract(a, b), -calc.subtract(b, a), "subtract({a}, {b})");
        assert_eq!(ab, -ba);
    }
}

#[test]
fn test_wrapping_matches_modular_arithmetic() {
    let calc = Service::new();
    for (a, b) in pairs() {
        let wide_sum = i64::from(a) + i64::from(b);
        let wide_diff = i64::from(a) - i64::from(b);
        let wide_product = i64::from(a) * i64::from(b);
        assert_eq!(i64::from(calc.sum(a, b)), wrap(wide_sum), "sum({a}, {b})");
        assert_eq!(
            i64::from(calc.subtract(a, b)),
            wrap(wide_diff),
            "subtract({a}, {b})"
        );
        assert_eq!(
            i64::from(calc.multiply(a, b)),
            wrap(wide_product),
            "multiply({a}, {b})"
        );
    }
}

/// Reduce modulo 2^32 into the signed 32-bit range.
fn wrap(v: i64) -> i64 {
    let m = v.rem_euclid(1_i64 << 32);
    if m >= 1_i64 << 31 { m - (1_i64 << 32) } else { m }
}

#[test]
fn test_divide_truncates_toward_zero() {
    let calc = Service::new();
    for (a, b) in pairs() {
        if b == 0 {
            assert!(calc.divide(a, b).is_err());
            continue;
        }
        let q = calc.divide(a, b).unwrap();
        if a == i32::MIN && b == -1 {
            assert_eq!(q, i32::MIN);
            continue;
        }
        // |q * b| <= |a| and the remainder takes the sign of the dividend
        let r = i64::from(a) - i64::from(q) * i64::from(b);
        assert!(r.abs() < i64::from(b).abs(), "divide({a}, {b}) = {q}");
        assert!(r == 0 || r.signum() == i64::from(a).signum());
    }
}

#[test]
fn test_max_is_idempotent_and_commutative() {
    let calc = Service::new();
    for (a, b) in pairs() {
        assert_eq!(calc.max(a, a), a);
        assert_eq!(calc.max(a, b), calc.max(b, a));
        assert!(calc.max(a, b) >= a && calc.max(a, b) >= b);
    }
}

#[test]
fn test_is_positive_matches_sign() {
    let calc = Service::new();
    for x in VALUES {
        assert_eq!(calc.is_positive(x), x.signum() == 1, "is_positive({x})");
    }
}

#[test]
fn test_power_zero_exponent_is_one() {
    let calc = Service::new();
    for base in VALUES {
        assert_eq!(calc.power(base, 0), Ok(1), "power({base}, 0)");
    }
}

#[test]
fn test_power_rejects_every_negative_exponent() {
    let calc = Service::new();
    for (base, exponent) in pairs().filter(|&(_, e)| e < 0) {
        assert!(calc.power(base, exponent).is_err(), "power({base}, {exponent})");
    }
}

#[test]
fn test_power_is_repeated_multiplication() {
    let calc = Service::new();
    for base in VALUES {
        let mut expected = 1_i32;
        for exponent in 0..=12 {
            assert_eq!(calc.power(base, exponent), Ok(expected), "power({base}, {exponent})");
            expected = calc.multiply(expected, base);
        }
    }
}

#[test]
fn test_square_root_of_perfect_squares() {
    let calc = Service::new();
    for n in 0..=1_000_u32 {
        let square = f64::from(n * n);
        let root = calc.square_root(square).unwrap();
        assert!((root - f64::from(n)).abs() < 0.000_001, "sqrt({square}) = {root}");
    }
}
