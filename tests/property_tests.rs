use digitcost::analyzer::TextAnalyzer;
use digitcost::digits::{DigitConverter, DigitScript};
use digitcost::layouts::{LayoutName, LayoutSet};
use digitcost::matrix::{ScenarioKey, ScenarioMatrixBuilder};
use digitcost::scorer::{CostPolicy, ScoringMode, TypingCostCalculator};
use digitcost::typist::TypistRegistry;
use proptest::prelude::*;

// --- STRATEGIES ---

// Characters present on both layouts.
const ALPHABET: &[char] = &[
    'ก', 'ข', 'ค', 'ง', 'จ', 'ม', 'น', 'ร', 'ส', 'อ', 'า', 'ิ', 'ี', '่', '้', 'เ', 'แ', 'ไ',
    'ะ', 'ฎ', 'ษ', 'a', 'b', 'Z', ' ', '\n', '.', ',', '(', ')', '0', '1', '5', '9', '๐', '๑',
    '๕', '๙',
];

prop_compose! {
    fn arb_document()(idx in prop::collection::vec(0..ALPHABET.len(), 0..200)) -> String {
        idx.into_iter().map(|i| ALPHABET[i]).collect()
    }
}

fn arb_scoring() -> impl Strategy<Value = (ScoringMode, CostPolicy)> {
    (
        prop_oneof![Just(ScoringMode::Unweighted), Just(ScoringMode::Ergonomic)],
        prop_oneof![Just(CostPolicy::DigitsOnly), Just(CostPolicy::FullDocument)],
    )
}

proptest! {
    #[test]
    fn prop_cost_is_deterministic(doc in arb_document(), (mode, policy) in arb_scoring()) {
        let layouts = LayoutSet::standard().unwrap();
        let typist = TypistRegistry::standard().default_profile().clone();
        let calc = TypingCostCalculator::new().with_scoring(mode).with_policy(policy);

        for layout in layouts.iter() {
            for script in [DigitScript::Thai, DigitScript::International] {
                let a = calc.compute_cost(&doc, layout, script, &typist).unwrap();
                let b = calc.compute_cost(&doc, layout, script, &typist).unwrap();
                prop_assert_eq!(a, b);
            }
        }
    }

    #[test]
    fn prop_round_trip_through_thai(doc in arb_document()) {
        let conv = DigitConverter::new();
        let ascii = conv.convert(&doc, DigitScript::International).into_owned();
        let back = conv.convert(&conv.convert(&ascii, DigitScript::Thai), DigitScript::International).into_owned();
        prop_assert_eq!(back, ascii);
    }

    #[test]
    fn prop_worst_typist_slower_than_expert(doc in arb_document()) {
        prop_assume!(!doc.is_empty());
        let layouts = LayoutSet::standard().unwrap();
        let registry = TypistRegistry::standard();
        let calc = TypingCostCalculator::new();

        for layout in layouts.iter() {
            for script in [DigitScript::Thai, DigitScript::International] {
                let expert = calc.compute_cost(&doc, layout, script, registry.get("expert").unwrap()).unwrap();
                let worst = calc.compute_cost(&doc, layout, script, registry.get("worst").unwrap()).unwrap();
                prop_assert!(worst > expert);
            }
        }
    }

    #[test]
    fn prop_current_scenario_never_cheaper_than_optimal(doc in arb_document(), (mode, policy) in arb_scoring()) {
        let result = ScenarioMatrixBuilder::new(LayoutSet::standard().unwrap())
            .with_scoring(mode)
            .with_policy(policy)
            .build(&doc, TypistRegistry::standard().all())
            .unwrap();

        prop_assert_eq!(result.scenarios.len(), 16);
        for cmp in &result.comparisons {
            let b = cmp.baseline.unwrap();
            prop_assert!(b.lost_seconds >= 0.0);
            prop_assert!(b.delta_percent >= 0.0 && b.delta_percent <= 100.0);
            prop_assert!(cmp.optimal_seconds <= cmp.worst_seconds);
        }
    }

    #[test]
    fn prop_digit_counts_agree_with_analyzer(doc in arb_document()) {
        let layouts = LayoutSet::standard().unwrap();
        let stats = TextAnalyzer::default().analyze(&doc).stats;
        let tally = TypingCostCalculator::new()
            .tally(&doc, layouts.get(LayoutName::Pattajoti), DigitScript::Thai)
            .unwrap();

        prop_assert_eq!(tally.digit_count, stats.total_digits);
        prop_assert_eq!(tally.characters, stats.total_characters);
    }

    #[test]
    fn prop_thai_digits_cost_more_on_kedmanee(doc in arb_document()) {
        let result = ScenarioMatrixBuilder::new(LayoutSet::standard().unwrap())
            .build(&doc, &TypistRegistry::standard().all()[..1])
            .unwrap();
        let thai = result.scenario("expert", ScenarioKey::CURRENT).unwrap();
        let intl = result
            .scenario("expert", ScenarioKey::new(DigitScript::International, LayoutName::Kedmanee))
            .unwrap();

        prop_assert!(thai.total_seconds >= intl.total_seconds);
        if thai.digit_count > 0 {
            prop_assert!(thai.total_seconds > intl.total_seconds);
        }
    }
}
