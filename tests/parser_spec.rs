use zipcode_reader::{parse_area_code, parse_code, parse_zip_code, ZipcodeError};

type CodeFixture = (&'static str, &'static str, &'static str, bool);

// (input, area, local, complete)
const ACCEPTED_CODES: &[CodeFixture] = &[
    ("100", "100", "", false),
    ("100-", "100", "", false),
    ("100-0", "100", "0", false),
    ("100-001", "100", "001", false),
    ("100-0001", "100", "0001", true),
    ("1000001", "100", "0001", true),
    ("0070840", "007", "0840", true),
    ("1234", "123", "4", false),
];

const REJECTED_CODES: &[&str] = &[
    "",
    "1",
    "12",
    "xyz",
    "10a",
    "12345678",
    "100-00011",
    "100 0001",
    "100x0001",
    "-1000001",
    "1000001-",
    "１００-０００１", // full-width digits
];

#[test]
fn parse_code_accepts_partial_and_complete_forms() {
    for &(input, area, local, complete) in ACCEPTED_CODES {
        let parsed = parse_code(input).unwrap();
        assert_eq!(parsed.area, area, "area for {input:?}");
        assert_eq!(parsed.local, local, "local for {input:?}");
        assert_eq!(parsed.complete, complete, "completeness for {input:?}");

        if complete {
            let expected = format!("{area}{local}");
            assert_eq!(parsed.full_code.as_deref(), Some(expected.as_str()));
        } else {
            assert_eq!(parsed.full_code, None, "full_code for {input:?}");
        }
    }
}

#[test]
fn parse_code_rejects_malformed_input() {
    for &input in REJECTED_CODES {
        assert!(
            matches!(
                parse_code(input),
                Err(ZipcodeError::InvalidCodeFormat { .. })
            ),
            "{input:?} should be rejected"
        );
    }
}

#[test]
fn parse_area_code_accepts_exactly_three_digits() {
    assert_eq!(parse_area_code("100").unwrap(), "100");
    assert_eq!(parse_area_code("007").unwrap(), "007");

    for input in ["", "10", "1000", "100-", "10a", "１００"] {
        assert!(
            matches!(
                parse_area_code(input),
                Err(ZipcodeError::InvalidAreaCode { .. })
            ),
            "{input:?} should be rejected"
        );
    }
}

#[test]
fn parse_zip_code_requires_a_complete_code() {
    let zip = parse_zip_code("100-0001").unwrap();
    assert_eq!(zip.area, "100");
    assert_eq!(zip.local, "0001");
    assert_eq!(zip.full_code, "1000001");

    let zip = parse_zip_code("1000001").unwrap();
    assert_eq!(zip.full_code, "1000001");

    for input in ["100", "100-", "100-00", "100-001"] {
        assert!(
            matches!(
                parse_zip_code(input),
                Err(ZipcodeError::IncompleteCode { .. })
            ),
            "{input:?} should be rejected as incomplete"
        );
    }

    // Outside the grammar entirely: a format error, not an incomplete one.
    assert!(matches!(
        parse_zip_code("xyz"),
        Err(ZipcodeError::InvalidCodeFormat { .. })
    ));
}
