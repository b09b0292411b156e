use digitcost::analyzer::{SequenceKind, TextAnalyzer};
use digitcost::digits::DigitScript;

#[test]
fn test_counts_and_positions_are_in_code_points() {
    let analyzer = TextAnalyzer::default();
    let a = analyzer.analyze("มี ๒ คน และ 3 สิ่ง");

    assert_eq!(a.stats.total_characters, 18);
    assert_eq!(a.stats.thai_digits, 1);
    assert_eq!(a.stats.international_digits, 1);
    assert_eq!(a.stats.total_digits, 2);
    assert_eq!(a.stats.total_lines, 1);

    assert_eq!(a.occurrences.len(), 2);
    assert_eq!(a.occurrences[0].character, '๒');
    assert_eq!(a.occurrences[0].position, 3);
    assert_eq!(a.occurrences[0].script, DigitScript::Thai);
    assert_eq!(a.occurrences[1].character, '3');
    assert_eq!(a.occurrences[1].position, 12);
    assert_eq!(a.occurrences[1].script, DigitScript::International);
}

#[test]
fn test_empty_document() {
    let a = TextAnalyzer::default().analyze("");
    assert_eq!(a.stats.total_characters, 0);
    assert_eq!(a.stats.total_lines, 0);
    assert_eq!(a.stats.digit_percentage, 0.0);
    assert!(a.occurrences.is_empty());
    assert!(a.sequences.is_empty());
    assert_eq!(a.stats.sequences.average_thai_length, 0.0);
}

#[test]
fn test_context_window_clips_at_boundaries() {
    let analyzer = TextAnalyzer::new(3);
    let a = analyzer.analyze("๑abcdefg๒");
    assert_eq!(a.occurrences[0].context, "๑abc");
    assert_eq!(a.occurrences[1].context, "efg๒");

    let wide = TextAnalyzer::new(1000).analyze("x 5 y");
    assert_eq!(wide.occurrences[0].context, "x 5 y");
}

#[test]
fn test_context_is_trimmed() {
    let a = TextAnalyzer::new(2).analyze("a  7  b");
    assert_eq!(a.occurrences[0].context, "7");
}

#[test]
fn test_number_sequences() {
    let a = TextAnalyzer::default().analyze("๒๕๖๐ 2017 ๑2 x\n๙");
    let kinds: Vec<_> = a.sequences.iter().map(|s| s.kind).collect();
    assert_eq!(
        kinds,
        vec![
            SequenceKind::Thai,
            SequenceKind::International,
            SequenceKind::Mixed,
            SequenceKind::Thai
        ]
    );
    assert_eq!(a.sequences[0].text, "๒๕๖๐");
    assert_eq!((a.sequences[1].start, a.sequences[1].end), (5, 9));
    assert_eq!(a.sequences[3].len(), 1);

    let summary = &a.stats.sequences;
    assert_eq!(summary.total_sequences, 4);
    assert_eq!(summary.thai_sequences, 2);
    assert_eq!(summary.international_sequences, 1);
    assert_eq!(summary.mixed_sequences, 1);
    assert!((summary.average_thai_length - 2.5).abs() < 1e-9);
    assert!((summary.average_international_length - 4.0).abs() < 1e-9);
    assert_eq!(a.stats.total_lines, 2);
}

#[test]
fn test_frequency_and_percentage() {
    let a = TextAnalyzer::default().analyze("๑๑1a");
    assert_eq!(a.stats.digit_frequency.get(&'๑'), Some(&2));
    assert_eq!(a.stats.digit_frequency.get(&'1'), Some(&1));
    assert!((a.stats.digit_percentage - 75.0).abs() < 1e-9);
}

#[test]
fn test_analysis_is_repeatable() {
    let analyzer = TextAnalyzer::default();
    let text = "หมวด ๑ บททั่วไป มาตรา 1";
    assert_eq!(analyzer.analyze(text), analyzer.analyze(text));
}

#[test]
fn test_occurrences_can_be_skipped() {
    let text = "ปี ๒๕๖๐ มี 12 เดือน\n๓";
    let full = TextAnalyzer::new(5).analyze(text);
    let lean = TextAnalyzer::new(5).without_occurrences().analyze(text);

    assert_eq!(full.occurrences.len(), 7);
    assert!(lean.occurrences.is_empty());
    assert_eq!(lean.stats, full.stats);
    assert_eq!(lean.sequences, full.sequences);
}
