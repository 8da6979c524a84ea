#[cfg(test)]
mod tests {
    use crate::value::{OptionValue, format_number, normalize};
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case::row_format("ROW_FORMAT", OptionValue::from("compact"), Some("COMPACT"))]
    #[case::row_format_empty("ROW_FORMAT", OptionValue::from(""), None)]
    #[case::insert_method("INSERT_METHOD", OptionValue::from("last"), Some("LAST"))]
    #[case::insert_method_false("INSERT_METHOD", OptionValue::Bool(false), None)]
    #[case::row_format_number("ROW_FORMAT", OptionValue::from(5), Some("5"))]
    #[case::row_format_zero("ROW_FORMAT", OptionValue::from(0), None)]
    #[case::row_format_bool("ROW_FORMAT", OptionValue::Bool(true), Some("TRUE"))]
    #[case::row_format_raw("ROW_FORMAT", OptionValue::raw("dynamic"), Some("DYNAMIC"))]
    #[case::insert_method_raw("INSERT_METHOD", OptionValue::raw("first"), Some("FIRST"))]
    #[case::union_raw("UNION", OptionValue::from("(t1,t2)"), Some("(t1,t2)"))]
    #[case::union_empty("UNION", OptionValue::from(""), Some(""))]
    #[case::union_number("UNION", OptionValue::from(3), Some("3"))]
    #[case::union_true("UNION", OptionValue::Bool(true), Some("true"))]
    #[case::union_false("UNION", OptionValue::Bool(false), Some("false"))]
    #[case::yes("PACK_KEYS", OptionValue::from("yes"), Some("YES"))]
    #[case::default("PACK_KEYS", OptionValue::from("Default"), Some("DEFAULT"))]
    #[case::number("KEY_BLOCK_SIZE", OptionValue::from(8), Some("8"))]
    #[case::zero("AUTO_INCREMENT", OptionValue::from(0), Some("0"))]
    #[case::fraction("AVG_ROW_LENGTH", OptionValue::from(1.5), Some("1.5"))]
    #[case::numeric_text("MAX_ROWS", OptionValue::from("010"), Some("10"))]
    #[case::padded_numeric_text("MAX_ROWS", OptionValue::from(" 8 "), Some("8"))]
    #[case::blank_text_is_zero("MAX_ROWS", OptionValue::from("  "), Some("0"))]
    #[case::hex_text("MAX_ROWS", OptionValue::from("0x10"), Some("16"))]
    #[case::octal_text("MAX_ROWS", OptionValue::from("0o17"), Some("15"))]
    #[case::binary_text("MAX_ROWS", OptionValue::from("0b11"), Some("3"))]
    #[case::signed_hex_text("MAX_ROWS", OptionValue::from("-0x10"), Some("'-0x10'"))]
    #[case::bad_hex_digit("MAX_ROWS", OptionValue::from("0x1G"), Some("'0x1G'"))]
    #[case::exponent_text("MAX_ROWS", OptionValue::from("1e3"), Some("1000"))]
    #[case::infinity_text("MAX_ROWS", OptionValue::from("Infinity"), None)]
    #[case::negative_infinity_text("MAX_ROWS", OptionValue::from("-Infinity"), None)]
    #[case::nan_text("MAX_ROWS", OptionValue::from("NaN"), Some("'NaN'"))]
    #[case::text("CONNECTION", OptionValue::from("mysql://host"), Some("'mysql://host'"))]
    #[case::empty_text("CONNECTION", OptionValue::from(""), None)]
    #[case::bool_true("SOME_KEY", OptionValue::Bool(true), Some("YES"))]
    #[case::bool_false("SOME_KEY", OptionValue::Bool(false), Some("NO"))]
    #[case::nan("MAX_ROWS", OptionValue::Number(f64::NAN), None)]
    #[case::infinite("MAX_ROWS", OptionValue::Number(f64::INFINITY), None)]
    #[case::raw("PAGE_CHECKSUM", OptionValue::raw("1 /* forced */"), Some("1 /* forced */"))]
    fn normalize_rules(
        #[case] keyword: &str,
        #[case] value: OptionValue,
        #[case] expected: Option<&str>,
    ) {
        assert_eq!(normalize(keyword, Some(&value)).as_deref(), expected);
    }

    #[test]
    fn normalize_absent_value() {
        assert_eq!(normalize("KEY_BLOCK_SIZE", None), None);
        assert_eq!(normalize("ROW_FORMAT", None), None);
    }

    #[test]
    fn rust_only_float_spellings_stay_text() {
        assert_eq!(
            normalize("COMMENT", Some(&OptionValue::from("inf"))),
            Some("'inf'".to_string())
        );
        assert_eq!(
            normalize("COMMENT", Some(&OptionValue::from("infinity"))),
            Some("'infinity'".to_string())
        );
    }

    #[test]
    fn truthiness() {
        assert!(OptionValue::from(3).is_truthy());
        assert!(OptionValue::from("0").is_truthy());
        assert!(!OptionValue::from(0).is_truthy());
        assert!(!OptionValue::from("").is_truthy());
        assert!(!OptionValue::Bool(false).is_truthy());
        assert!(!OptionValue::Number(f64::NAN).is_truthy());
    }

    #[test]
    fn as_number_is_finite_only() {
        assert_eq!(OptionValue::from("0x10").as_number(), Some(16.0));
        assert_eq!(OptionValue::from(" ").as_number(), Some(0.0));
        assert_eq!(OptionValue::from("Infinity").as_number(), None);
        assert_eq!(OptionValue::Bool(true).as_number(), None);
    }

    #[test]
    fn number_formatting() {
        assert_eq!(format_number(10.0), "10");
        assert_eq!(format_number(-0.0), "0");
        assert_eq!(format_number(0.25), "0.25");
        assert_eq!(format_number(0.000001), "0.000001");
        assert_eq!(format_number(1e-7), "1e-7");
        assert_eq!(format_number(1e21), "1e+21");
        assert_eq!(format_number(-1.5e21), "-1.5e+21");
        assert_eq!(format_number(123456789012345680000.0), "123456789012345680000");
        assert_eq!(OptionValue::from(42).to_string(), "42");
    }
}
