use crate::base::collections::difference;
use crate::base::maperror::MapError;

#[test]
fn test_difference_keeps_order() {
    let a = ["tablet", "smartphone", "browser", "tv"];
    let b = ["browser", "smartphone"];
    assert_eq!(difference(&a, &b), vec!["tablet", "tv"]);
}

#[test]
fn test_difference_with_empty_sides() {
    let empty: [&str; 0] = [];
    assert_eq!(difference(&["a"], &empty), vec!["a"]);
    assert!(difference(&empty, &["a"]).is_empty());
}

#[test]
fn test_registration_errors_classified() {
    assert!(MapError::invalid_probe_name("").is_registration_error());
    assert!(MapError::missing_test_function("tablet").is_registration_error());
    assert!(!MapError::invalid_config("bad").is_registration_error());
}

#[test]
fn test_error_messages_name_the_group() {
    let err = MapError::missing_ranking("tablet");
    assert_eq!(
        err.to_string(),
        "Expected a number for device group tablet ranking"
    );
}
