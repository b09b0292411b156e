use digitcost::error::DigitCostError;
use digitcost::typist::{TypistRegistry, TypistSelection};
use rstest::rstest;
use std::io::Cursor;
use std::io::Write;

#[rstest]
#[case("expert", 0.12)]
#[case("skilled", 0.20)]
#[case("average", 0.28)]
#[case("worst", 1.2)]
fn test_standard_profiles(#[case] name: &str, #[case] secs: f64) {
    let registry = TypistRegistry::standard();
    assert_eq!(registry.get(name).unwrap().keystroke_seconds, secs);
}

#[test]
fn test_registry_order_and_default() {
    let registry = TypistRegistry::standard();
    assert_eq!(registry.names(), vec!["expert", "skilled", "average", "worst"]);
    assert_eq!(registry.default_profile().name, "average");
}

#[test]
fn test_unknown_profile_lists_alternatives() {
    let registry = TypistRegistry::standard();
    let err = registry.get("speedy").unwrap_err();
    match &err {
        DigitCostError::UnknownTypistProfile { name, available } => {
            assert_eq!(name, "speedy");
            assert!(available.contains("average"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_selection() {
    let registry = TypistRegistry::standard();
    assert_eq!(registry.select(&TypistSelection::All).unwrap().len(), 4);

    let one = registry.select(&"Worst".parse().unwrap()).unwrap();
    assert_eq!(one.len(), 1);
    assert_eq!(one[0].name, "worst");

    assert_eq!("ALL".parse::<TypistSelection>().unwrap(), TypistSelection::All);
    assert!("  ".parse::<TypistSelection>().is_err());
    assert!(registry
        .select(&TypistSelection::Named("nobody".into()))
        .is_err());
}

#[test]
fn test_csv_loading() {
    let data = "name,keystroke_seconds,label,description\n\
                fast,0.1,Fast Typist,Types quickly\n\
                slow,0.9,Slow Typist,\n";
    let registry = TypistRegistry::from_csv_reader(Cursor::new(data)).unwrap();
    assert_eq!(registry.names(), vec!["fast", "slow"]);
    assert_eq!(registry.get("slow").unwrap().label, "Slow Typist");
    // No `average` profile, so the first one is the default.
    assert_eq!(registry.default_profile().name, "fast");
}

#[rstest]
#[case("name,keystroke_seconds,label,description\nzero,0,Zero,\n")]
#[case("name,keystroke_seconds,label,description\nneg,-0.5,Negative,\n")]
#[case("name,keystroke_seconds,label,description\na,0.2,A,\na,0.3,A again,\n")]
#[case("name,keystroke_seconds,label,description\n")]
fn test_csv_rejects_bad_profiles(#[case] data: &str) {
    let err = TypistRegistry::from_csv_reader(Cursor::new(data)).unwrap_err();
    assert!(matches!(err, DigitCostError::Config(_)));
}

#[test]
fn test_csv_rejects_names_differing_only_in_case() {
    let data = "name,keystroke_seconds,label,description\nFast,0.1,Fast,\nfast,0.5,Also fast,\n";
    let err = TypistRegistry::from_csv_reader(Cursor::new(data)).unwrap_err();
    match err {
        DigitCostError::Config(msg) => assert!(msg.contains("fast"), "{msg}"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_mixed_case_name_still_selectable() {
    let data = "name,keystroke_seconds,label,description\nFast,0.1,Fast,\n";
    let registry = TypistRegistry::from_csv_reader(Cursor::new(data)).unwrap();
    let picked = registry.select(&"fast".parse().unwrap()).unwrap();
    assert_eq!(picked[0].name, "Fast");
    assert_eq!(picked[0].keystroke_seconds, 0.1);
}

#[test]
fn test_csv_rejects_unparsable_time() {
    let data = "name,keystroke_seconds,label,description\nx,fast,X,\n";
    let err = TypistRegistry::from_csv_reader(Cursor::new(data)).unwrap_err();
    assert!(matches!(err, DigitCostError::Csv(_)));
}

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "name,keystroke_seconds,label,description").unwrap();
    writeln!(file, "clerk,0.35,Clerk,Ministry clerk").unwrap();
    file.flush().unwrap();

    let registry = TypistRegistry::load_from_file(file.path()).unwrap();
    assert_eq!(registry.all().len(), 1);
    assert_eq!(registry.get("clerk").unwrap().keystroke_seconds, 0.35);

    assert!(matches!(
        TypistRegistry::load_from_file("/nonexistent/typists.csv"),
        Err(DigitCostError::Io(_))
    ));
}
