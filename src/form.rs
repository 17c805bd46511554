//! Declarative form validation
//!
//! Rules run on submit, not on every keystroke; editing a field clears
//! its error immediately. All of this is UX convenience only, the
//! backend re-validates independently.

use std::collections::HashMap;

/// A field-level constraint
#[derive(Debug, Clone, PartialEq)]
pub enum Rule {
    Required,
    Email,
    NumericRange { min: f64, max: f64 },
}

/// Matches the frontend email check: no whitespace, exactly one `@`
/// with a non-empty local part, and a dot inside the domain part with
/// characters on both sides.
pub fn is_valid_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    if value.matches('@').count() != 1 {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() {
        return false;
    }
    domain
        .bytes()
        .enumerate()
        .any(|(i, b)| b == b'.' && i > 0 && i + 1 < domain.len())
}

fn check(value: &str, rule: &Rule) -> Option<String> {
    match rule {
        Rule::Required => {
            if value.trim().is_empty() {
                return Some("This field is required".to_string());
            }
        }
        Rule::Email => {
            if !value.is_empty() && !is_valid_email(value) {
                return Some("Please enter a valid email address".to_string());
            }
        }
        Rule::NumericRange { min, max } => {
            if value.is_empty() {
                return None;
            }
            let Ok(number) = value.trim().parse::<f64>() else {
                return Some("Must be a number".to_string());
            };
            if number < *min || number > *max {
                return Some(format!("Must be between {} and {}", min, max));
            }
        }
    }
    None
}

/// Field values plus the error map produced by the last validation
#[derive(Debug, Clone, Default)]
pub struct FormState {
    fields: HashMap<String, String>,
    errors: HashMap<String, String>,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current value of a field; unset fields read as empty
    pub fn field(&self, name: &str) -> &str {
        self.fields.get(name).map(String::as_str).unwrap_or("")
    }

    /// Set a field value. Clears that field's error right away,
    /// independent of re-validation.
    pub fn set_field(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        self.errors.remove(&name);
        self.fields.insert(name, value.into());
    }

    /// Run the given rules against the current values, replacing the
    /// error map. The first failing rule per field wins. Returns whether
    /// the form may be submitted.
    pub fn validate(&mut self, rules: &[(&str, Rule)]) -> bool {
        let mut errors = HashMap::new();
        for (name, rule) in rules {
            if errors.contains_key(*name) {
                continue;
            }
            if let Some(message) = check(self.field(name), rule) {
                errors.insert(name.to_string(), message);
            }
        }
        self.errors = errors;
        self.errors.is_empty()
    }

    /// Error message for a field from the last validation
    pub fn error(&self, name: &str) -> Option<&str> {
        self.errors.get(name).map(String::as_str)
    }

    pub fn errors(&self) -> &HashMap<String, String> {
        &self.errors
    }

    /// A submit is permitted only when the error map is empty
    pub fn can_submit(&self) -> bool {
        self.errors.is_empty()
    }
}
