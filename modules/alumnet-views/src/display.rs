use alumnet_common::Profile;

/// Card-list ordering: last name then first name, ascending. The search
/// path never re-sorts; this is applied once for the card view.
pub fn sort_for_display(profiles: &[Profile]) -> Vec<Profile> {
    let mut sorted = profiles.to_vec();
    sorted.sort_by_key(|p| format!("{} {}", p.last_name, p.first_name));
    sorted
}
