use super::*;

#[test]
fn enter_confirms_only_when_control_is_enabled() {
    assert!(confirms_search("Enter", true));
    assert!(!confirms_search("Enter", false));
}

#[test]
fn other_keys_never_confirm() {
    assert!(!confirms_search("a", true));
    assert!(!confirms_search("Escape", true));
}
