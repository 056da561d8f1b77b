use crate::Profile;

use chrono::Utc;

fn profile(first_name: &str, last_name: &str) -> Profile {
    Profile {
        user_id: 1,
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        avatar_url: None,
        bio: None,
        updated_at: Utc::now(),
    }
}

#[test]
fn test_display_name_joins_first_and_last() {
    assert_eq!(profile("Ada", "Lovelace").display_name(), "Ada Lovelace");
}

#[test]
fn test_display_name_without_last_name_has_no_trailing_space() {
    assert_eq!(profile("Ada", "").display_name(), "Ada");
}
