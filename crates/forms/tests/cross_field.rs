//! Rules that read sibling controls through the parent group.

use nebula_forms::prelude::*;
use pretty_assertions::assert_eq;
use serde_json::{Value, json};

fn signup(password: Value, confirm: Value) -> FormGroup {
    FormGroup::new()
        .with_control("password", password)
        .with_control("confirm", confirm)
}

#[test]
fn confirm_password_with_strict_equality() {
    let rule = compare_to("password", Comparison::StrictEqual);

    let empty_sibling = signup(json!(""), json!("anything"));
    assert!(rule.validate_control(&empty_sibling.control("confirm").unwrap()).is_ok());

    let equal = signup(json!("hunter2"), json!("hunter2"));
    assert!(rule.validate_control(&equal.control("confirm").unwrap()).is_ok());

    let unequal = signup(json!("hunter2"), json!("hunter3"));
    let error = rule
        .validate_control(&unequal.control("confirm").unwrap())
        .unwrap_err();
    assert_eq!(error.code, "compareTo");
    assert_eq!(
        error.payload(),
        json!({
            "message": "Value does not satisfy the comparison",
            "field": "password",
            "comparison": "===",
        })
    );
}

#[test]
fn date_range_across_two_controls() {
    let group = FormGroup::new()
        .with_control("start", "2024-05-01")
        .with_control("end", "2024-04-30T23:00:00Z");
    let after_start = compare_to("start", Comparison::Greater).with_error_name("endBeforeStart");

    let error = after_start
        .validate_control(&group.control("end").unwrap())
        .unwrap_err();
    assert_eq!(error.code, "endBeforeStart");
}

#[test]
fn run_validators_stores_errors_on_the_control() {
    let group = signup(json!("hunter2"), json!("hunter3"));
    let matches = compare_to("password", Comparison::StrictEqual);
    let strong = password_strength();

    let result = group
        .run_validators("confirm", &[&matches, &strong])
        .unwrap();
    assert!(result.is_err());

    let stored = group.get("confirm").unwrap().errors().unwrap();
    assert_eq!(stored.codes().collect::<Vec<_>>(), vec!["compareTo", "passwordStrength"]);

    assert!(group.run_validators("missing", &[&matches]).is_none());
}

#[test]
fn run_validators_clears_stale_errors() {
    let mut group = signup(json!("hunter2"), json!("hunter3"));
    let matches = compare_to("password", Comparison::StrictEqual);

    group.run_validators("confirm", &[&matches]);
    assert!(group.get("confirm").unwrap().has_error("compareTo"));

    group.get_mut("confirm").unwrap().set_value("hunter2");
    assert_eq!(group.run_validators("confirm", &[&matches]), Some(Ok(())));
    assert_eq!(group.get("confirm").unwrap().errors(), None);
}

#[test]
fn linked_address_fields() {
    let group = FormGroup::new()
        .with_control("street", "1 Infinite Loop")
        .with_control("city", "");

    let street_needs_city = link_to("city");
    let city_follows_street = linked_to("street");

    let street = group.control("street").unwrap();
    let city = group.control("city").unwrap();

    assert_eq!(
        validate_control(&street, &[&street_needs_city])
            .unwrap_err()
            .codes()
            .collect::<Vec<_>>(),
        vec!["linkTo"]
    );
    assert_eq!(
        validate_control(&city, &[&city_follows_street])
            .unwrap_err()
            .codes()
            .collect::<Vec<_>>(),
        vec!["linkedTo"]
    );
}

#[test]
fn closures_join_the_merge() {
    let group = signup(json!("abc"), json!("abc"));
    let not_password = validator_fn(|control: &Control<'_>| {
        if control.value() == &json!("password") {
            Err(ValidationError::new("obvious", "Pick something less obvious"))
        } else {
            Ok(())
        }
    });
    let matches = compare_to("password", Comparison::StrictEqual);

    let confirm = group.control("confirm").unwrap();
    assert_eq!(validate_control(&confirm, &[&not_password, &matches]), Ok(()));
}
