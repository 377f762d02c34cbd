use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_display_matches_as_str() {
    for code in ErrorCode::ALL {
        assert_eq!(code.to_string(), code.as_str());
    }
}

#[test]
fn test_codes_are_unique() {
    let mut seen = std::collections::HashSet::new();
    for code in ErrorCode::ALL {
        assert!(seen.insert(code.as_str()), "duplicate code {code}");
    }
}

#[test]
fn test_round_trip_through_from_str() {
    for code in ErrorCode::ALL {
        assert_eq!(code.as_str().parse::<ErrorCode>(), Ok(*code));
    }
    assert_eq!("e1003".parse::<ErrorCode>(), Ok(ErrorCode::E1003));
    assert!("E4242".parse::<ErrorCode>().is_err());
}

#[test]
fn test_phase_classification() {
    assert!(ErrorCode::E0002.is_token_error());
    assert!(!ErrorCode::E1005.is_token_error());
    assert!(!ErrorCode::E9001.is_token_error());
}

#[test]
fn test_every_code_has_a_description() {
    for code in ErrorCode::ALL {
        assert!(!code.description().is_empty());
    }
}
