use alumnet_common::Profile;

/// Distinct current companies for the company filter control.
pub fn companies(profiles: &[Profile]) -> Vec<String> {
    distinct_sorted(profiles.iter().map(|p| p.current_company.as_str()))
}

/// Distinct current roles for the role filter control.
pub fn roles(profiles: &[Profile]) -> Vec<String> {
    distinct_sorted(profiles.iter().map(|p| p.current_role.as_str()))
}

/// Distinct hobby/expertise topics across all profiles.
pub fn topics(profiles: &[Profile]) -> Vec<String> {
    distinct_sorted(
        profiles
            .iter()
            .flat_map(|p| p.hobbies.iter().map(String::as_str)),
    )
}

/// Trim, drop empties, de-duplicate, sort ascending. Ordinal compare keeps
/// the output deterministic for the same input set.
fn distinct_sorted<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut out: Vec<String> = values
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .collect();
    out.sort();
    out.dedup();
    out
}
