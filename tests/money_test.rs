use feed_normalize::{exists_money, find_money, get_float, get_money, normalize_float, parse_inch, parse_money, Currency};
use rstest::rstest;

#[rstest]
#[case::dollars("$19.99", Some(19.99))]
#[case::thousands("Was £1,249.00 now £999.00", Some(1249.0))]
#[case::code_suffix("12.5 USD", Some(12.5))]
#[case::integer("Price: 7", Some(7.0))]
#[case::trailing_dot("7.", Some(7.0))]
#[case::rounding("2.499", Some(2.5))]
#[case::zero("0.00", Some(0.0))]
#[case::missing("Call for price", None)]
#[case::empty("", None)]
fn parse_money_cases(#[case] text: &str, #[case] expected: Option<f64>) {
    assert_eq!(parse_money(text), expected);
}

#[test]
fn get_money_uses_zero_sentinel() {
    assert_eq!(get_money("Out of stock"), 0.0);
    assert_eq!(get_money("$0.00"), 0.0);
    assert_eq!(get_money("$5"), 5.0);
}

#[rstest]
#[case::dollar_spaced("Only $ 4.99 today", Some("$ 4.99"))]
#[case::pound("Now £12", Some("£12"))]
#[case::entity("&pound;3.50 each", Some("&pound;3.50"))]
#[case::escaped("\\u00a38.00", Some("\\u00a38.00"))]
#[case::leading_fraction("$.50", Some("$.50"))]
#[case::no_marker("19.99", None)]
#[case::marker_without_amount("$ TBD", None)]
fn exists_money_cases(#[case] text: &str, #[case] expected: Option<&str>) {
    assert_eq!(exists_money(text), expected);
}

#[test]
fn find_money_currency_follows_marker() {
    let pound = find_money("&pound;3.50").expect("entity marker");
    assert_eq!(pound.currency, Currency::Gbp);
    assert_eq!(pound.currency.code(), "GBP");
    assert_eq!(pound.amount, 3.5);

    let dollar = find_money("$ 4.99").expect("dollar marker");
    assert_eq!(dollar.currency, Currency::Usd);
    assert_eq!(dollar.amount, 4.99);
}

#[test]
fn find_money_serializes() {
    let found = find_money("$ 4.99").expect("dollar marker");
    let json = serde_json::to_value(&found).expect("serializable");
    assert_eq!(json["text"], "$ 4.99");
    assert_eq!(json["currency"], "Usd");
    assert_eq!(json["amount"], 4.99);
}

#[rstest]
#[case::decimal("2.5 kg", None, Some(2.5))]
#[case::thousands("1,000 sheets", None, Some(1000.0))]
#[case::leading_dot("weight .75", None, Some(0.75))]
#[case::rounds("3.14159", None, Some(3.14))]
#[case::tiny_uses_default("0.004", Some(1.0), Some(1.0))]
#[case::zero_uses_default("0", Some(1.0), Some(1.0))]
#[case::zero_without_default("0", None, None)]
#[case::no_numeral("n/a", Some(1.0), None)]
fn get_float_cases(#[case] text: &str, #[case] default: Option<f64>, #[case] expected: Option<f64>) {
    assert_eq!(get_float(text, default), expected);
}

#[test]
fn normalize_float_threshold_is_exclusive() {
    assert_eq!(normalize_float(0.01, None), None);
    assert_eq!(normalize_float(0.011, None), None);
    assert_eq!(normalize_float(12.345_6, Some(0.0)), Some(12.35));
}

#[rstest]
#[case::inches("10\"", Some(10.0))]
#[case::decimal_inches("10.5\"", Some(10.5))]
#[case::mixed("7 1/2\"", Some(7.5))]
#[case::fraction("3/8\"", Some(0.375))]
#[case::feet("2'", Some(24.0))]
#[case::mixed_feet("1 1/2'", Some(18.0))]
#[case::fraction_feet("\u{00BD}'", Some(6.0))]
#[case::glyphs("1\u{00BD}\u{201D}", Some(1.5))]
#[case::curly_feet("6\u{2019}", Some(72.0))]
#[case::no_unit("4", Some(48.0))]
#[case::zero_denominator("1/0\"", None)]
#[case::no_digits("standard", None)]
fn parse_inch_cases(#[case] text: &str, #[case] expected: Option<f64>) {
    assert_eq!(parse_inch(text), expected);
}
