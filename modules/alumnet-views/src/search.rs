use alumnet_common::Profile;

/// Facet filters applied on top of the free-text search term. `None` means
/// the facet is not filtered; values are exact matches. Callers normalize
/// the UI's `"all"` sentinel to `None` before building one of these.
#[derive(Debug, Clone, Default)]
pub struct ProfileFilter {
    pub company: Option<String>,
    pub role: Option<String>,
    pub topic: Option<String>,
    pub contact_type: Option<String>,
}

/// Filter the collection by search term and facets. Stable: matching
/// profiles keep their input order; nothing is re-sorted.
pub fn search_profiles(profiles: &[Profile], term: &str, filter: &ProfileFilter) -> Vec<Profile> {
    let term = term.trim().to_lowercase();
    profiles
        .iter()
        .filter(|p| matches_term(p, &term) && matches_facets(p, filter))
        .cloned()
        .collect()
}

/// Case-insensitive substring match against names, current company/role,
/// bio, and past-experience companies/roles. An empty term matches all.
fn matches_term(profile: &Profile, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    let contains = |s: &str| s.to_lowercase().contains(term);

    contains(&profile.first_name)
        || contains(&profile.last_name)
        || contains(&profile.current_company)
        || contains(&profile.current_role)
        || contains(&profile.bio)
        || profile
            .past_experience
            .iter()
            .any(|exp| contains(&exp.company) || contains(&exp.role))
}

fn matches_facets(profile: &Profile, filter: &ProfileFilter) -> bool {
    if let Some(company) = &filter.company {
        let matched = profile.current_company == *company
            || profile
                .past_experience
                .iter()
                .any(|exp| exp.company == *company);
        if !matched {
            return false;
        }
    }

    if let Some(role) = &filter.role {
        let matched = profile.current_role == *role
            || profile.past_experience.iter().any(|exp| exp.role == *role);
        if !matched {
            return false;
        }
    }

    if let Some(topic) = &filter.topic {
        if !profile.hobbies.iter().any(|h| h == topic) {
            return false;
        }
    }

    if let Some(contact_type) = &filter.contact_type {
        if profile.contact_type.to_string() != *contact_type {
            return false;
        }
    }

    true
}
