use super::*;

#[test]
fn default_button_is_primary() {
    assert_eq!(Button::default(), Button::Primary);
}

#[test]
fn only_primary_selects() {
    assert!(Button::Primary.selects());
    assert!(!Button::Middle.selects());
    assert!(!Button::Secondary.selects());
}

#[test]
fn button_deserializes_lowercase() {
    let b: Button = serde_json::from_str("\"secondary\"").unwrap();
    assert_eq!(b, Button::Secondary);
}
