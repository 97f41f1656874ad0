use serde::{Deserialize, Serialize};

// --- Enums ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactType {
    Alumni,
    Exec,
}

impl std::fmt::Display for ContactType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ContactType::Alumni => write!(f, "alumni"),
            ContactType::Exec => write!(f, "exec"),
        }
    }
}

impl ContactType {
    /// Loose parse of the intake form's contact-type column. Anything whose
    /// trimmed, lower-cased form does not start with "exec" is alumni.
    pub fn from_str_loose(s: &str) -> Self {
        if s.trim().to_lowercase().starts_with("exec") {
            ContactType::Exec
        } else {
            ContactType::Alumni
        }
    }
}

// --- Profile ---

/// One prior role parsed from a `Company;Role;Description` free-text field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PastExperience {
    pub company: String,
    pub role: String,
    pub desc: String,
}

/// Position held within the association, with the portfolio (sub-team) the
/// position belonged to when one was given.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaRole {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub portfolio: Option<String>,
}

/// One decoded member record from the spreadsheet feed.
///
/// Decoding is total: absent or malformed source fields degrade to empty or
/// absent values, never to an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    /// Lower-cased email when present, else a `first-last-company` slug.
    /// The slug can collide for two people with the same name and company
    /// and no email; the feed does not guard against that.
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub contact_type: ContactType,

    pub current_company: String,
    pub current_role: String,
    pub current_role_desc: String,

    /// At most two entries, one per experience column that parsed.
    pub past_experience: Vec<PastExperience>,

    pub bio: String,
    /// Interests followed by expertise, trimmed, empties dropped, no dedup.
    pub hobbies: Vec<String>,

    pub linkedin_url: String,
    pub email: String,

    pub open_to_contact: bool,
    pub contact_notes: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_photo_url: Option<String>,

    /// Source "Timestamp" column, or the decode time when absent.
    pub created_at: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub ma_role: Option<MaRole>,
    pub year: String,
}

// --- Graph model ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    Person,
    Portfolio,
}

impl std::fmt::Display for NodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NodeKind::Person => write!(f, "person"),
            NodeKind::Portfolio => write!(f, "portfolio"),
        }
    }
}

/// A node in the person/portfolio relationship graph. Person nodes embed
/// their profile; portfolio nodes are synthetic grouping points.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphNode {
    pub id: String,
    pub name: String,
    pub kind: NodeKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile: Option<Profile>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub past_experience: Vec<PastExperience>,
    pub color: String,
    /// Relative display weight for the renderer.
    pub val: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ma_role: Option<MaRole>,
}

/// Person → portfolio membership edge.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphEdge {
    pub id: String,
    pub source: String,
    pub target: String,
    #[serde(rename = "type")]
    pub edge_type: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphData {
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
}

// --- Drive URL helpers ---

/// Extract the `id` query parameter from a Drive URL (e.g.
/// `https://drive.google.com/open?id=FILEID`). Returns None when the URL has
/// no non-empty `id` parameter.
pub fn drive_file_id(url: &str) -> Option<String> {
    let url = url.split('#').next().unwrap_or(url);
    let (_, query) = url.split_once('?')?;
    query
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, _)| *key == "id")
        .map(|(_, value)| value.to_string())
        .filter(|value| !value.is_empty())
}
