use canon_domain::capabilities::Capabilities;
use canon_domain::constants::{DISPLAY_INDEX, EDIT_PROFILE, MANAGE_USERS, REGION_INDEX, VIEW_TASKS};

#[test]
fn constants_match_index_names() {
    assert_eq!(DISPLAY_INDEX, "display");
    assert_eq!(REGION_INDEX, "region");
}

#[test]
fn capabilities_parse_from_names() {
    assert_eq!(Capabilities::from(MANAGE_USERS), Capabilities::MANAGE_USERS);
    assert_eq!(Capabilities::from(EDIT_PROFILE), Capabilities::EDIT_PROFILE);
    assert_eq!(Capabilities::from(VIEW_TASKS), Capabilities::VIEW_TASKS);
    assert_eq!(Capabilities::from("*"), Capabilities::ALL);
    assert!(Capabilities::from("fly").is_empty());
}

#[test]
fn capabilities_render_and_serialize_as_bits() {
    let caps = Capabilities::EDIT_PROFILE | Capabilities::VIEW_TASKS;
    assert_eq!(caps.to_string(), "edit_profile, view_tasks");
    assert_eq!(Capabilities::empty().to_string(), "none");

    let json = serde_json::to_string(&caps).expect("serialize");
    assert_eq!(json, "6");
    let back: Capabilities = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(back, caps);
}
