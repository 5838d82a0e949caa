//! End-to-end checks of the calculator behaviour through the public API.

use frac_core::{
    add, divide, evaluate_json, from_decimal, gcd, multiply, simplify, subtract, to_decimal,
    FracError, Fraction, FractionRequest, Operand, RequestOutcome, Settings,
};

fn frac(n: i64, d: i64) -> Fraction {
    Fraction::new(n, d).unwrap()
}

#[test]
fn gcd_divides_both_and_ignores_sign() {
    for a in -30i64..=30 {
        for b in -30i64..=30 {
            if a == 0 || b == 0 {
                continue;
            }
            let g = gcd(a, b);
            assert_eq!(g, gcd(a.abs(), b.abs()));
            assert_eq!(a % g as i64, 0);
            assert_eq!(b % g as i64, 0);
        }
    }
}

#[test]
fn simplified_fractions_satisfy_invariants() {
    for n in -40i64..=40 {
        for d in (-40i64..=40).filter(|&d| d != 0) {
            let f = simplify(n, d).unwrap().result;
            assert!(f.denominator() > 0);
            if f.numerator() == 0 {
                assert_eq!(f.denominator(), 1);
            } else {
                assert_eq!(gcd(f.numerator(), f.denominator()), 1);
            }
            // Same value as the input.
            assert_eq!(i128::from(f.numerator()) * i128::from(d), i128::from(n) * i128::from(f.denominator()));
            // Fixed point.
            assert_eq!(simplify(f.numerator(), f.denominator()).unwrap().result, f);
        }
    }
}

#[test]
fn documented_examples() {
    let r = simplify(12, 18).unwrap();
    assert_eq!(r.result, frac(2, 3));
    assert!((r.decimal - 0.6667).abs() < 1e-4);

    assert_eq!(to_decimal(1, 2).unwrap(), 0.5);
    assert!((to_decimal(22, 7).unwrap() - 3.1429).abs() < 1e-4);

    assert_eq!(from_decimal(0.5).unwrap().result, frac(1, 2));
    assert_eq!(from_decimal(0.75).unwrap().result, frac(3, 4));

    assert_eq!(add(frac(1, 2), frac(1, 3)).unwrap().result, frac(5, 6));
    assert_eq!(add(frac(1, 4), frac(1, 4)).unwrap().result, frac(1, 2));
    assert_eq!(subtract(frac(1, 2), frac(1, 3)).unwrap().result, frac(1, 6));
    assert_eq!(multiply(frac(2, 3), frac(3, 4)).unwrap().result, frac(1, 2));
    assert_eq!(divide(frac(1, 2), frac(1, 3)).unwrap().result, frac(3, 2));
}

#[test]
fn zero_denominator_and_zero_divisor_fail() {
    assert!(matches!(simplify(9, 0), Err(FracError::InvalidDenominator { .. })));
    assert!(matches!(to_decimal(9, 0), Err(FracError::InvalidDenominator { .. })));
    assert!(matches!(
        divide(frac(1, 2), frac(0, 1)),
        Err(FracError::DivisionByZero { .. })
    ));
}

#[test]
fn decimal_round_trip_for_terminating_fractions() {
    let denominators = [1i64, 2, 4, 5, 8, 10, 16, 20, 25, 40, 50, 64, 125, 200, 625, 1000];
    for &d in &denominators {
        for n in -50i64..=50 {
            let decimal = to_decimal(n, d).unwrap();
            assert_eq!(
                from_decimal(decimal).unwrap().result,
                simplify(n, d).unwrap().result,
                "{}/{}",
                n,
                d
            );
        }
    }
}

#[test]
fn arithmetic_agrees_with_floats() {
    let values = [frac(1, 2), frac(-2, 3), frac(7, 5), frac(-9, 4), frac(11, 13)];
    for &a in &values {
        for &b in &values {
            let sum = add(a, b).unwrap();
            assert!((sum.decimal - (a.to_f64() + b.to_f64())).abs() < 1e-12);
            let product = multiply(a, b).unwrap();
            assert!((product.decimal - a.to_f64() * b.to_f64()).abs() < 1e-12);
            let quotient = divide(a, b).unwrap();
            assert!((quotient.decimal - a.to_f64() / b.to_f64()).abs() < 1e-12);
            // a - b + b == a
            let back = add(subtract(a, b).unwrap().result, b).unwrap();
            assert_eq!(back.result, a);
        }
    }
}

#[test]
fn json_requests_drive_every_operation() {
    let settings = Settings::default();
    let cases = [
        (r#"{"operation":"simplify","numerator":12,"denominator":-18}"#, -2, 3),
        (r#"{"operation":"from_decimal","value":0.75}"#, 3, 4),
        (r#"{"operation":"parse_decimal","text":"-0.125"}"#, -1, 8),
        (
            r#"{"operation":"add","a":{"numerator":1,"denominator":2},"b":{"numerator":1,"denominator":3}}"#,
            5,
            6,
        ),
        (
            r#"{"operation":"subtract","a":{"numerator":1,"denominator":2},"b":{"numerator":1,"denominator":3}}"#,
            1,
            6,
        ),
        (
            r#"{"operation":"multiply","a":{"numerator":2,"denominator":3},"b":{"numerator":3,"denominator":4}}"#,
            1,
            2,
        ),
        (
            r#"{"operation":"divide","a":{"numerator":1,"denominator":2},"b":{"numerator":1,"denominator":3}}"#,
            3,
            2,
        ),
    ];

    for (json, n, d) in cases {
        let out = evaluate_json(json, &settings).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["kind"], "fraction", "{}", json);
        assert_eq!(value["result"]["numerator"], n, "{}", json);
        assert_eq!(value["result"]["denominator"], d, "{}", json);
    }

    let out = evaluate_json(r#"{"operation":"to_decimal","numerator":1,"denominator":2}"#, &settings).unwrap();
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(value["kind"], "decimal");
    assert_eq!(value["value"], 0.5);
    assert_eq!(value["display"], "0.5000");
}

#[test]
fn json_request_errors() {
    let settings = Settings::default();

    let err = evaluate_json(r#"{"operation":"explode"}"#, &settings).unwrap_err();
    assert_eq!(err.error_code(), "SERIALIZATION_ERROR");

    let err = evaluate_json(
        r#"{"operation":"divide","a":{"numerator":1,"denominator":2},"b":{"numerator":0,"denominator":3}}"#,
        &settings,
    )
    .unwrap_err();
    assert_eq!(err.error_code(), "DIVISION_BY_ZERO");

    let json = serde_json::to_string(&err).unwrap();
    assert!(json.contains("\"type\":\"DivisionByZero\""));
}

#[test]
fn requests_round_trip_through_json() {
    let request = FractionRequest::Multiply {
        a: Operand::from(frac(-2, 3)),
        b: Operand { numerator: 9, denominator: 4 },
    };
    let json = serde_json::to_string(&request).unwrap();
    let parsed: FractionRequest = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, request);

    match parsed.evaluate(&Settings::default()).unwrap() {
        RequestOutcome::Fraction { result, .. } => assert_eq!(result, frac(-3, 2)),
        other => panic!("expected fraction outcome, got {:?}", other),
    }
}
