use dojoadmin::form::{is_valid_email, FormState, Rule};

fn branch_rules() -> Vec<(&'static str, Rule)> {
    vec![
        ("name", Rule::Required),
        ("email", Rule::Required),
        ("email", Rule::Email),
        (
            "capacity",
            Rule::NumericRange {
                min: 1.0,
                max: 500.0,
            },
        ),
    ]
}

#[test]
fn invalid_email_yields_exactly_the_expected_message() {
    let mut form = FormState::new();
    form.set_field("name", "Downtown Dojo");
    form.set_field("email", "not-an-email");

    let ok = form.validate(&branch_rules());
    assert!(!ok);
    assert!(!form.can_submit());
    assert_eq!(
        form.error("email"),
        Some("Please enter a valid email address")
    );
    assert_eq!(form.errors().len(), 1);
}

#[test]
fn missing_required_fields_are_reported() {
    let mut form = FormState::new();
    let ok = form.validate(&branch_rules());

    assert!(!ok);
    assert_eq!(form.error("name"), Some("This field is required"));
    assert_eq!(form.error("email"), Some("This field is required"));
}

#[test]
fn the_first_failing_rule_per_field_wins() {
    let mut form = FormState::new();
    form.set_field("name", "Downtown Dojo");
    form.set_field("email", "   ");

    form.validate(&branch_rules());
    assert_eq!(form.error("email"), Some("This field is required"));
}

#[test]
fn editing_a_field_clears_its_error_without_revalidating() {
    let mut form = FormState::new();
    form.set_field("email", "not-an-email");
    form.validate(&branch_rules());
    assert!(form.error("email").is_some());
    assert!(form.error("name").is_some());

    form.set_field("email", "still-not-an-email");
    assert_eq!(form.error("email"), None);
    // other fields keep their errors until the next validate
    assert!(form.error("name").is_some());
}

#[test]
fn numeric_range_checks() {
    let mut form = FormState::new();
    form.set_field("name", "Downtown Dojo");
    form.set_field("email", "dojo@example.com");

    form.set_field("capacity", "750");
    form.validate(&branch_rules());
    assert_eq!(form.error("capacity"), Some("Must be between 1 and 500"));

    form.set_field("capacity", "lots");
    form.validate(&branch_rules());
    assert_eq!(form.error("capacity"), Some("Must be a number"));

    form.set_field("capacity", "120");
    assert!(form.validate(&branch_rules()));
    assert!(form.can_submit());
}

#[test]
fn email_format_edge_cases() {
    assert!(is_valid_email("a@b.c"));
    assert!(is_valid_email("first.last@sub.domain.org"));

    assert!(!is_valid_email("no-at-sign"));
    assert!(!is_valid_email("two@@ats.com"));
    assert!(!is_valid_email("@missing-local.com"));
    assert!(!is_valid_email("user@nodot"));
    assert!(!is_valid_email("user@.leading"));
    assert!(!is_valid_email("user@trailing."));
    assert!(!is_valid_email("has space@example.com"));
}

#[test]
fn a_valid_form_submits() {
    let mut form = FormState::new();
    form.set_field("name", "Downtown Dojo");
    form.set_field("email", "downtown@example.com");
    form.set_field("capacity", "200");

    assert!(form.validate(&branch_rules()));
    assert!(form.errors().is_empty());
}
