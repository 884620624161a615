use isd_birthday::dataset::{format_case, parse_dataset, DatasetError, END_MARKER};
use isd_birthday::{InstanceError, SdExperimentParams};

const TWO_CASES: &str = "\
### TEST CASE: small ###
3 6
1 0 0 1 1 0
0 1 0 1 0 1
0 0 1 0 1 1
1 0 1
2

### TEST CASE: odd weight ###
3 7
1 0 1 0 1 0 1
0 1 1 0 0 1 1
0 0 0 1 1 1 1
1 0 0
3
### END ###
### TEST CASE: ignored ###
garbage
";

#[test]
fn parses_cases_until_terminator() {
    let cases = parse_dataset(TWO_CASES).unwrap();
    assert_eq!(cases.len(), 2);
    assert_eq!(cases[0].name, "small");
    assert_eq!(cases[0].cols, 6);
    assert_eq!(cases[0].rows[1], vec![0, 1, 0, 1, 0, 1]);
    assert_eq!(cases[0].syndrome, vec![1, 0, 1]);
    assert_eq!(cases[0].weight, 2);
    assert_eq!(cases[1].name, "odd weight");

    let inst = cases[1].instance().unwrap();
    assert_eq!((inst.n(), inst.redundancy(), inst.w()), (7, 3, 3));
}

#[test]
fn missing_terminator_keeps_last_case() {
    let text = "### TEST CASE: only ###\n1 2\n1 1\n0\n0\n";
    let cases = parse_dataset(text).unwrap();
    assert_eq!(cases.len(), 1);
    assert!(cases[0].instance().unwrap().s().words().iter().all(|&w| w == 0));
}

#[test]
fn header_without_colon_uses_whole_title() {
    let text = "### TEST CASE 1 ###\n1 2\n1 1\n0\n0\n### END ###\n";
    assert_eq!(parse_dataset(text).unwrap()[0].name, "TEST CASE 1");
}

#[test]
fn zero_row_case_has_no_syndrome_line() {
    let text = "### TEST CASE: trivial ###\n0 4\n2\n### END ###\n";
    let cases = parse_dataset(text).unwrap();
    let inst = cases[0].instance().unwrap();
    assert_eq!((inst.n(), inst.redundancy(), inst.w()), (4, 0, 2));
}

#[test]
fn invalid_case_does_not_affect_the_others() {
    let text = "\
### TEST CASE: ragged ###
2 3
1 0 1
1 0
1 1
1
### TEST CASE: fine ###
1 3
1 1 0
1
1
### END ###
";
    let cases = parse_dataset(text).unwrap();
    assert_eq!(
        cases[0].instance(),
        Err(InstanceError::RaggedRow { row: 1, expected: 3, got: 2 })
    );
    assert!(cases[1].instance().is_ok());
}

#[test]
fn negative_weight_is_parsed_then_rejected() {
    let text = "### TEST CASE: neg ###\n1 2\n1 1\n0\n-1\n";
    let cases = parse_dataset(text).unwrap();
    assert_eq!(cases[0].instance(), Err(InstanceError::NegativeWeight(-1)));
}

#[test]
fn truncated_case() {
    let text = "### TEST CASE: cut ###\n2 3\n1 0 1\n";
    assert!(matches!(
        parse_dataset(text),
        Err(DatasetError::UnexpectedEof { expected: "a matrix row", .. })
    ));
}

#[test]
fn huge_row_count_is_a_truncation() {
    let text = "### TEST CASE: x ###\n18446744073709551615 3\n1 0 1\n";
    assert!(matches!(
        parse_dataset(text),
        Err(DatasetError::UnexpectedEof { expected: "a matrix row", .. })
    ));
}

#[test]
fn out_of_range_entries_are_rejected_per_case() {
    let text = "\
### TEST CASE: wide entry ###
1 3
1 256 0
1
1
### TEST CASE: negative syndrome ###
1 3
1 1 0
-1
1
### TEST CASE: fine ###
1 3
1 1 0
1
1
### END ###
";
    let cases = parse_dataset(text).unwrap();
    assert_eq!(cases.len(), 3);
    assert_eq!(
        cases[0].instance(),
        Err(InstanceError::NonBinaryMatrix { row: 0, col: 1 })
    );
    assert_eq!(cases[1].instance(), Err(InstanceError::NonBinarySyndrome(0)));
    assert!(cases[2].instance().is_ok());
}

#[test]
fn bad_token_reports_line() {
    let text = "### TEST CASE: bad ###\n1 3\n1 x 1\n0\n1\n";
    match parse_dataset(text) {
        Err(DatasetError::ParseInt { line, got, .. }) => {
            assert_eq!(line, 3);
            assert_eq!(got, "x");
        }
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn bad_dimensions_and_header() {
    assert!(matches!(
        parse_dataset("### A ###\n3\n"),
        Err(DatasetError::ParseInt { line: 2, .. })
    ));
    assert!(matches!(
        parse_dataset("not a header\n"),
        Err(DatasetError::MalformedHeader { line: 1 })
    ));
}

#[test]
fn generated_case_reads_back() {
    let inst = SdExperimentParams::with_numeric_seed(14, 3).generate().unwrap();
    let text = format!("{}{}\n", format_case("gen", &inst), END_MARKER);
    let cases = parse_dataset(&text).unwrap();
    assert_eq!(cases.len(), 1);
    assert_eq!(cases[0].name, "gen");
    assert_eq!(cases[0].instance().unwrap(), inst);
}
