use chrono::Utc;
use regex::Regex;

use alumnet_common::{drive_file_id, ContactType, MaRole, PastExperience, Profile};

use crate::normalize::{rows_to_records, SheetRecord};

/// Exact header labels of the intake form. Matching is by exact string; a
/// renamed or missing column silently degrades that field to empty/absent.
/// The experience and position labels carry the form's full multi-line help
/// text because that is what the export puts in the header row.
mod col {
    pub const TIMESTAMP: &str = "Timestamp";
    pub const CONTACT_TYPE: &str = "Contact Type";
    pub const FIRST_NAME: &str = "First Name";
    pub const LAST_NAME: &str = "Last Name";
    pub const EMAIL: &str = "Email Address";
    pub const CURRENT_COMPANY: &str = "Current Company (Optional)";
    pub const CURRENT_ROLE: &str = "Current Role (Optional)";
    pub const ROLE_DESC: &str =
        "Brief Description of Current Role/Responsibilities (Optional)";
    pub const EXP_1: &str = "Past Professional Experience #1 (Optional)\n\nPlease provide in the following format: Company;Role;Description\n\nExample:\nMicrosoft;Marketing Intern;Assisted with brand management and graphic design";
    pub const EXP_2: &str = "Past Professional Experience #2 (Optional)\n\nPlease provide in the following format: Company;Role;Description\n\nExample:\nMicrosoft;Marketing Intern;Assisted with brand management and graphic design";
    pub const BIO: &str =
        "Professional Bio (Summary of your academic background, experience and expertise)";
    pub const EXPERTISE: &str = "Areas of Expertise";
    pub const HOBBIES: &str = "Ask me about... (Interests / Hobbies)";
    pub const LINKEDIN: &str = "LinkedIn Profile URL";
    pub const OPEN_TO_CONTACT: &str =
        "Are you open to being contacted by other network members?";
    pub const CONTACT_NOTES: &str = "Contact Notes (e.g., availability on campus, specific areas you're open to discussing)";
    pub const PHOTO: &str = "Profile Photo Upload (URL or file upload)";
    pub const MA_POSITION: &str = "What was/is your position within MA?\nPosition, Portfolio (e.g. Director, Events)";
    pub const YEAR: &str = "What year were you a part of MA?\ni.e. the year of the position you typed above.";
}

fn field<'a>(record: &'a SheetRecord, name: &str) -> &'a str {
    record.get(name).map(String::as_str).unwrap_or("")
}

// --- Sub-field parsers ---

/// Parse a `Company;Role;Description` experience field. Company and role are
/// required; any further `;` parts are rejoined as the description. Anything
/// short of two non-empty parts yields no entry.
pub fn parse_experience(raw: &str) -> Option<PastExperience> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }

    let parts: Vec<&str> = s.split(';').map(str::trim).collect();
    let company = parts.first().copied().unwrap_or("");
    let role = parts.get(1).copied().unwrap_or("");
    if company.is_empty() || role.is_empty() {
        return None;
    }

    Some(PastExperience {
        company: company.to_string(),
        role: role.to_string(),
        desc: parts[2..].join(";"),
    })
}

/// Split a comma-separated list, trimming each entry and dropping empties.
pub fn parse_comma_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(str::to_string)
        .collect()
}

/// Parse the association position field. Precedence:
/// 1. `"Position (Portfolio)"`
/// 2. `"Position, Portfolio"` (remaining comma parts rejoin as the portfolio)
/// 3. the whole trimmed string as the position, portfolio absent
/// Empty input yields no role at all.
pub fn parse_ma_role(raw: &str) -> Option<MaRole> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }

    let paren_re = Regex::new(r"^(.*?)\s*\((.*?)\)\s*$").expect("valid regex");
    if let Some(caps) = paren_re.captures(s) {
        let position = caps[1].trim();
        let portfolio = caps[2].trim();
        return Some(MaRole {
            position: (!position.is_empty()).then(|| position.to_string()),
            portfolio: (!portfolio.is_empty()).then(|| portfolio.to_string()),
        });
    }

    let comma_parts: Vec<&str> = s
        .split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect();
    if comma_parts.len() >= 2 {
        return Some(MaRole {
            position: Some(comma_parts[0].to_string()),
            portfolio: Some(comma_parts[1..].join(", ")),
        });
    }

    Some(MaRole {
        position: Some(s.to_string()),
        portfolio: None,
    })
}

/// Trimmed, case-insensitive membership in {yes, y, true, 1}.
pub fn parse_yes_no(raw: &str) -> bool {
    matches!(
        raw.trim().to_lowercase().as_str(),
        "yes" | "y" | "true" | "1"
    )
}

/// Normalize a Drive photo reference to a direct content URL.
/// Already-direct user-content URLs pass through; a URL carrying an `id`
/// query parameter is rebuilt into the canonical `uc?export=view` form;
/// anything else passes through unchanged. Empty input yields no URL.
pub fn normalize_photo_url(raw: &str) -> Option<String> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }

    if s.contains("usercontent.googleusercontent.com") {
        return Some(s.to_string());
    }

    if let Some(id) = drive_file_id(s) {
        return Some(format!("https://drive.google.com/uc?export=view&id={id}"));
    }

    Some(s.to_string())
}

/// Stable record identity: the lower-cased email when one is present, else a
/// lower-cased `first-last-company` slug with whitespace runs collapsed to
/// single hyphens. The slug can collide for same-name, same-company records
/// with no email.
pub fn stable_id(record: &SheetRecord) -> String {
    let email = field(record, col::EMAIL).trim();
    if !email.is_empty() {
        return email.to_lowercase();
    }

    let slug = format!(
        "{}-{}-{}",
        field(record, col::FIRST_NAME),
        field(record, col::LAST_NAME),
        field(record, col::CURRENT_COMPANY)
    )
    .to_lowercase();

    let ws_re = Regex::new(r"\s+").expect("valid regex");
    ws_re.replace_all(&slug, "-").into_owned()
}

// --- Record decoding ---

/// Decode one normalized record into a Profile. Total: malformed or missing
/// fields degrade to empty/absent values, never to an error.
pub fn decode_profile(record: &SheetRecord) -> Profile {
    let past_experience: Vec<PastExperience> =
        [field(record, col::EXP_1), field(record, col::EXP_2)]
            .into_iter()
            .filter_map(parse_experience)
            .collect();

    let mut hobbies = parse_comma_list(field(record, col::HOBBIES));
    hobbies.extend(parse_comma_list(field(record, col::EXPERTISE)));

    let timestamp = field(record, col::TIMESTAMP);
    let created_at = if timestamp.is_empty() {
        Utc::now().to_rfc3339()
    } else {
        timestamp.to_string()
    };

    Profile {
        id: stable_id(record),
        first_name: field(record, col::FIRST_NAME).to_string(),
        last_name: field(record, col::LAST_NAME).to_string(),
        contact_type: ContactType::from_str_loose(field(record, col::CONTACT_TYPE)),
        current_company: field(record, col::CURRENT_COMPANY).to_string(),
        current_role: field(record, col::CURRENT_ROLE).to_string(),
        current_role_desc: field(record, col::ROLE_DESC).to_string(),
        past_experience,
        bio: field(record, col::BIO).to_string(),
        hobbies,
        linkedin_url: field(record, col::LINKEDIN).to_string(),
        email: field(record, col::EMAIL).to_string(),
        open_to_contact: parse_yes_no(field(record, col::OPEN_TO_CONTACT)),
        contact_notes: field(record, col::CONTACT_NOTES).to_string(),
        profile_photo_url: normalize_photo_url(field(record, col::PHOTO)),
        created_at,
        ma_role: parse_ma_role(field(record, col::MA_POSITION)),
        year: field(record, col::YEAR).to_string(),
    }
}

/// Decode raw sheet rows (header row first) into profiles, one per non-blank
/// data row, preserving row order.
pub fn decode_profiles(rows: &[Vec<String>]) -> Vec<Profile> {
    rows_to_records(rows).iter().map(decode_profile).collect()
}
