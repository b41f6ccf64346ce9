use super::*;
use proptest::prelude::*;

// === parse_float ===

#[test]
fn parse_float_basic() {
    assert_eq!(parse_float(b"0"), Ok(0.0));
    assert_eq!(parse_float(b"42"), Ok(42.0));
    assert_eq!(parse_float(b"3.5"), Ok(3.5));
    assert_eq!(parse_float(b"0.1"), Ok(0.1));
    assert_eq!(parse_float(b"123.456"), Ok(123.456));
}

#[test]
fn parse_float_leading_and_trailing_point() {
    assert_eq!(parse_float(b".5"), Ok(0.5));
    assert_eq!(parse_float(b"5."), Ok(5.0));
    assert_eq!(parse_float(b"-.5"), Ok(-0.5));
}

#[test]
fn parse_float_single_leading_sign() {
    assert_eq!(parse_float(b"-3.5"), Ok(-3.5));
    assert_eq!(parse_float(b"--3.5"), Err(NumberError::MisplacedSign { offset: 1 }));
    assert_eq!(parse_float(b"3-5"), Err(NumberError::MisplacedSign { offset: 1 }));
    assert_eq!(parse_float(b"35-"), Err(NumberError::MisplacedSign { offset: 2 }));
}

#[test]
fn parse_float_rejects_second_point_at_its_offset() {
    assert_eq!(parse_float(b"1.2.3"), Err(NumberError::ExtraDecimalPoint { offset: 3 }));
    assert_eq!(parse_float(b"-1..2"), Err(NumberError::ExtraDecimalPoint { offset: 3 }));
}

#[test]
fn parse_float_rejects_degenerate_input() {
    assert_eq!(parse_float(b""), Err(NumberError::Empty));
    assert_eq!(parse_float(b"-"), Err(NumberError::NoDigits));
    assert_eq!(parse_float(b"."), Err(NumberError::NoDigits));
    assert_eq!(parse_float(b"-."), Err(NumberError::NoDigits));
    assert_eq!(
        parse_float(b"1e5"),
        Err(NumberError::InvalidByte {
            byte: b'e',
            offset: 1
        })
    );
    assert_eq!(
        parse_float(b"+1"),
        Err(NumberError::InvalidByte {
            byte: b'+',
            offset: 0
        })
    );
}

#[test]
fn parse_float_long_numerals_are_correctly_rounded() {
    // 25 fractional digits leaves the exact path.
    assert_eq!(
        parse_float(b"0.1000000000000000000000000"),
        Ok(0.1)
    );
    // Mantissa beyond 2^53.
    assert_eq!(parse_float(b"123456789012345678901234"), Ok(123_456_789_012_345_678_901_234.0));
}

// === parse_int ===

#[test]
fn parse_int_basic() {
    assert_eq!(parse_int(b"0"), Ok(0));
    assert_eq!(parse_int(b"1234"), Ok(1234));
    assert_eq!(parse_int(b"-1234"), Ok(-1234));
}

#[test]
fn parse_int_limits() {
    assert_eq!(parse_int(b"9223372036854775807"), Ok(i64::MAX));
    assert_eq!(parse_int(b"-9223372036854775808"), Ok(i64::MIN));
    assert_eq!(parse_int(b"9223372036854775808"), Err(NumberError::Overflow));
    assert_eq!(parse_int(b"99999999999999999999"), Err(NumberError::Overflow));
}

#[test]
fn parse_int_rejects_point() {
    assert_eq!(
        parse_int(b"1.5"),
        Err(NumberError::InvalidByte {
            byte: b'.',
            offset: 1
        })
    );
}

// === format_float ===

#[test]
fn format_float_shapes() {
    assert_eq!(format_float(3.5), "3.5");
    assert_eq!(format_float(3.0), "3");
    assert_eq!(format_float(-0.25), "-0.25");
    assert_eq!(format_float(0.0), "0");
    assert_eq!(format_float(-0.0), "0");
    assert_eq!(format_float(0.1), "0.1");
    assert_eq!(format_float(1e21), "1000000000000000000000");
}

// === Properties ===

proptest! {
    #[test]
    fn formatted_finite_values_parse_back_exactly(value in any::<f64>().prop_filter("finite", |v| v.is_finite())) {
        let text = format_float(value);
        let parsed = parse_float(text.as_bytes());
        let expected = if value == 0.0 { 0.0 } else { value };
        prop_assert_eq!(parsed, Ok(expected));
    }

    #[test]
    fn decimal_numerals_match_std(int in "[0-9]{1,12}", frac in "[0-9]{0,12}") {
        let text = format!("{int}.{frac}");
        let expected: f64 = text.parse().unwrap_or(f64::NAN);
        prop_assert_eq!(parse_float(text.as_bytes()), Ok(expected));
    }

    #[test]
    fn integers_round_trip(value in any::<i64>()) {
        prop_assert_eq!(parse_int(value.to_string().as_bytes()), Ok(value));
    }
}
