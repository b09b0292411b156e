use clap::ValueEnum;
use digitcost::digits::{DigitConverter, DigitScript, ASCII_DIGITS, THAI_DIGITS};
use digitcost::error::DigitCostError;
use rstest::rstest;
use std::borrow::Cow;

#[rstest]
#[case("มาตรา ๑๒๓", DigitScript::International, "มาตรา 123")]
#[case("มาตรา 123", DigitScript::Thai, "มาตรา ๑๒๓")]
#[case("พ.ศ. ๒๕๖๐ and 2017", DigitScript::Thai, "พ.ศ. ๒๕๖๐ and ๒๐๑๗")]
#[case("พ.ศ. ๒๕๖๐ and 2017", DigitScript::International, "พ.ศ. 2560 and 2017")]
#[case("", DigitScript::Thai, "")]
fn test_convert(#[case] input: &str, #[case] target: DigitScript, #[case] expected: &str) {
    let conv = DigitConverter::new();
    assert_eq!(conv.convert(input, target), expected);
}

#[test]
fn test_convert_is_noop_when_already_in_target() {
    let conv = DigitConverter::new();
    let text = "ราคา ๕๐ บาท";
    assert!(matches!(conv.convert(text, DigitScript::Thai), Cow::Borrowed(_)));
    assert!(matches!(
        conv.convert("no digits", DigitScript::International),
        Cow::Borrowed(_)
    ));
}

#[test]
fn test_round_trip_restores_ascii_text() {
    let conv = DigitConverter::new();
    let original = "Section 40, paragraph 3 (1997)";
    let thai = conv.convert(original, DigitScript::Thai);
    assert_eq!(thai, "Section ๔๐, paragraph ๓ (๑๙๙๗)");
    assert_eq!(conv.convert(&thai, DigitScript::International), original);
}

#[test]
fn test_script_and_counterpart() {
    let conv = DigitConverter::new();
    for (t, a) in THAI_DIGITS.iter().zip(ASCII_DIGITS.iter()) {
        assert_eq!(conv.script_of(*t), Some(DigitScript::Thai));
        assert_eq!(conv.script_of(*a), Some(DigitScript::International));
        assert_eq!(conv.counterpart(*t), Some(*a));
        assert_eq!(conv.counterpart(*a), Some(*t));
    }
    assert_eq!(conv.script_of('ก'), None);
    assert_eq!(conv.counterpart('x'), None);
    assert!(!conv.is_digit('๏'));
}

#[test]
fn test_from_pairs_accepts_standard_table() {
    let pairs: Vec<(char, char)> = THAI_DIGITS
        .iter()
        .copied()
        .zip(ASCII_DIGITS.iter().copied())
        .collect();
    let conv = DigitConverter::from_pairs(&pairs).unwrap();
    assert_eq!(conv.convert("๙๘", DigitScript::International), "98");
}

#[test]
fn test_from_pairs_rejects_short_table() {
    let pairs = [('๐', '0'), ('๑', '1')];
    let err = DigitConverter::from_pairs(&pairs).unwrap_err();
    assert!(matches!(err, DigitCostError::MalformedDigitMap(_)));
}

#[test]
fn test_from_pairs_rejects_duplicates_and_foreign_glyphs() {
    let mut pairs: Vec<(char, char)> = THAI_DIGITS
        .iter()
        .copied()
        .zip(ASCII_DIGITS.iter().copied())
        .collect();
    pairs[9] = ('๙', '0');
    assert!(matches!(
        DigitConverter::from_pairs(&pairs),
        Err(DigitCostError::MalformedDigitMap(_))
    ));

    pairs[9] = ('x', '9');
    assert!(DigitConverter::from_pairs(&pairs).is_err());

    pairs[9] = ('๙', 'x');
    assert!(DigitConverter::from_pairs(&pairs).is_err());
}

#[test]
fn test_digit_script_parsing() {
    assert_eq!("thai".parse::<DigitScript>().unwrap(), DigitScript::Thai);
    assert_eq!(
        "international".parse::<DigitScript>().unwrap(),
        DigitScript::International
    );
    assert_eq!("intl".parse::<DigitScript>().unwrap(), DigitScript::International);
    assert_eq!(DigitScript::International.to_string(), "international");
    assert_eq!(DigitScript::International.short(), "intl");
}

#[rstest]
#[case("thai", DigitScript::Thai)]
#[case("intl", DigitScript::International)]
#[case("INTERNATIONAL", DigitScript::International)]
fn test_digit_script_command_line_values(#[case] input: &str, #[case] expected: DigitScript) {
    assert_eq!(<DigitScript as ValueEnum>::from_str(input, true).unwrap(), expected);
}
