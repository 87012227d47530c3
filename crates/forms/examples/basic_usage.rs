//! Basic usage example for nebula-forms
//!
//! Validates a small sign-up form and prints the error map the host would
//! render. Run with `cargo run -p nebula-forms --example basic_usage`.

use nebula_forms::prelude::*;
use serde_json::json;

fn main() -> Result<(), ConfigError> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let form = FormGroup::new()
        .with_control("email", "someone@example")
        .with_control("phone", "")
        .with_control("password", "hunter2")
        .with_control("confirm", "hunter3")
        .with_control("bio", "Rust, forms and   too many spaces");

    // Field rules
    let email = email();
    let strong = password_strength();
    let matches = compare_to("password", Comparison::StrictEqual);
    let bio_words = word_count_range(3, 50)?;
    let bio_spacing = single_space();

    let fields: [(&str, &[&dyn ControlValidator]); 4] = [
        ("email", &[&email]),
        ("password", &[&strong]),
        ("confirm", &[&matches]),
        ("bio", &[&bio_words, &bio_spacing]),
    ];

    for (name, rules) in &fields {
        match form.run_validators(name, rules) {
            Some(Ok(())) => println!("✓ {name}"),
            Some(Err(errors)) => println!("✗ {name}: {}", errors.to_json()),
            None => println!("? {name}: no such control"),
        }
    }

    // Group rule, declared as data
    let contact = GroupRuleConfig::from_value(json!({
        "rule": "requiredEither",
        "first": "email",
        "second": "phone",
    }))?
    .build()?;

    match contact.validate(&form) {
        Ok(()) => println!("✓ contact details present"),
        Err(error) => println!("✗ contact: {error}"),
    }

    println!("\nnebula-forms is working correctly!");
    Ok(())
}
