//! Literal end-to-end regression vectors.

use bignum::{Integer, Natural, Rational};

#[test]
fn add_carries_out_of_every_digit_of_a_64_bit_value() {
    let a: Natural = "0xffffffffffffffff".parse().unwrap();
    let b: Natural = "0x2".parse().unwrap();
    let expected: Natural = "0x10000000000000001".parse().unwrap();
    assert_eq!(a.add(&b), expected);
}

#[test]
fn large_subtraction_vector() {
    let a: Natural = "5872489572457574027439274027348275342809754320711018574807407090990940275827586671651690897"
        .parse()
        .unwrap();
    let b: Natural = "842758978027689671615847509157087514875097509475029454785478748571507457514754190754"
        .parse()
        .unwrap();
    let expected: Natural = "5872488729698595999749602411500766185722239445613509099777952305512191704320129156897500143"
        .parse()
        .unwrap();
    assert_eq!(a.checked_sub(&b).unwrap(), expected);
}

#[test]
fn large_multiply_vector() {
    let a: Natural = "12345678901234567890123456789012345678901234567890123456789012345678901234567890"
        .parse()
        .unwrap();
    let b: Natural = "1234567890123456789012345678901234567890123456789012345678901234567890123456789012345678901234567890"
        .parse()
        .unwrap();
    let expected: Natural = "15241578753238836750495351562566681945008382873376009755225118122311263526910001371743100137174310012193273126047859425087639153757049236500533455762536198787501905199875019052100"
        .parse()
        .unwrap();
    assert_eq!(a.mul(&b), expected);
}

#[test]
fn hex_divmod_vector() {
    let a: Natural = "0x100000000000000000000000000000000000000000000000000000000000000000000000"
        .parse()
        .unwrap();
    let b: Natural = "0x10000000000000001000000000000000100000000".parse().unwrap();
    let expected_q: Natural = "0xffffffffffffffff000000000000000".parse().unwrap();
    let expected_r: Natural = "0x100000000000000000000000".parse().unwrap();
    let (q, r) = a.div_rem(&b).unwrap();
    assert_eq!(q, expected_q);
    assert_eq!(r, expected_r);
}

#[test]
fn large_gcd_vector() {
    let a: Natural = "2038355020176327696765561949673186971898109715960816150233379221718753632190267"
        .parse()
        .unwrap();
    let b: Natural = "1957628088684195906794648605131674616575412301467318480917205787195238636855999"
        .parse()
        .unwrap();
    let expected: Natural = "20181732873032947492728336135378088830674353623374417329043358630878748833567"
        .parse()
        .unwrap();
    assert_eq!(a.gcd(&b), expected);
}

#[test]
fn rational_from_0_1_matches_exact_binary_representation() {
    let r = Rational::from_f64(0.1).unwrap();
    let (num, denom) = r.to_parts();
    let expected_num: Integer = "0xccccccccccccd".parse().unwrap();
    let expected_denom: Natural = "0x80000000000000".parse().unwrap();
    assert_eq!(num, expected_num);
    assert_eq!(denom, expected_denom);
}

#[test]
fn natural_subtraction_underflow_is_a_range_error() {
    let a: Natural = "5".parse().unwrap();
    let b: Natural = "6".parse().unwrap();
    assert!(matches!(
        a.checked_sub(&b),
        Err(bignum::BignumError::RangeError(_))
    ));
}

#[test]
fn division_by_zero_is_rejected() {
    let a: Natural = "5".parse().unwrap();
    let zero = Natural::zero();
    assert!(matches!(
        a.div_rem(&zero),
        Err(bignum::BignumError::DivideByZero)
    ));
}

#[test]
fn double_round_trip_for_simple_finite_values() {
    for v in [1.0, 0.5, 2.0, 3.25, 100.0, 0.1, 1e10, 1e-10] {
        let r = Rational::from_f64(v).unwrap();
        assert_eq!(r.to_f64().unwrap(), v);
    }
}

#[test]
fn nan_and_infinity_are_rejected() {
    assert!(matches!(
        Rational::from_f64(f64::NAN),
        Err(bignum::BignumError::NotANumber)
    ));
    assert!(matches!(
        Rational::from_f64(f64::INFINITY),
        Err(bignum::BignumError::NotANumber)
    ));
}

#[test]
fn i64_min_magnitude_is_rejected_on_narrowing() {
    let magnitude: Natural = Natural::from_u128(1u128 << 63);
    let value = Integer::from_parts(true, magnitude);
    assert!(matches!(value.to_i64(), Err(bignum::BignumError::Overflow)));
}

#[test]
fn round_trip_parse_print_in_every_base() {
    let v: Natural = "123456789012345678901234567890".parse().unwrap();
    for base in [8u32, 10, 16] {
        let spec = bignum::FormatSpec {
            base,
            uppercase: false,
            show_base: true,
        };
        let text = bignum::format_natural(&v, &spec);
        let reparsed: Natural = text.parse().unwrap();
        assert_eq!(reparsed, v);
    }
}
