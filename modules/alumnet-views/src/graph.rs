use alumnet_common::{
    drive_file_id, ContactType, GraphData, GraphEdge, GraphNode, NodeKind, Profile,
};

// Node colors and display weights the graph renderer expects.
const ALUMNI_COLOR: &str = "#e11d48";
const EXEC_COLOR: &str = "#51373b";
const PORTFOLIO_COLOR: &str = "#f63b60";
const PERSON_VAL: u32 = 8;
const PORTFOLIO_VAL: u32 = 12;

/// Build the person/portfolio graph from the decoded collection.
///
/// One person node per profile. One portfolio node per distinct non-empty
/// `ma_role.portfolio`, in order of first appearance. One edge per profile
/// with a portfolio; profiles without one still get their person node and
/// render unconnected.
pub fn build_graph(profiles: &[Profile]) -> GraphData {
    let mut nodes = Vec::new();
    let mut edges = Vec::new();
    let mut portfolios: Vec<String> = Vec::new();

    for profile in profiles {
        nodes.push(person_node(profile));

        if let Some(portfolio) = portfolio_of(profile) {
            if !portfolios.iter().any(|p| p == portfolio) {
                portfolios.push(portfolio.to_string());
            }
        }
    }

    for portfolio in &portfolios {
        nodes.push(GraphNode {
            id: format!("portfolio-{portfolio}"),
            name: portfolio.clone(),
            kind: NodeKind::Portfolio,
            profile: None,
            company: None,
            past_experience: Vec::new(),
            color: PORTFOLIO_COLOR.to_string(),
            val: PORTFOLIO_VAL,
            photo: None,
            ma_role: None,
        });
    }

    for profile in profiles {
        if let Some(portfolio) = portfolio_of(profile) {
            edges.push(GraphEdge {
                id: format!("{}-{portfolio}", profile.id),
                source: profile.id.clone(),
                target: format!("portfolio-{portfolio}"),
                edge_type: "current".to_string(),
            });
        }
    }

    GraphData { nodes, edges }
}

fn person_node(profile: &Profile) -> GraphNode {
    // Thumbnail only when the photo URL actually carries a Drive file id;
    // photoless profiles get no image rather than a dead URL.
    let photo = profile
        .profile_photo_url
        .as_deref()
        .and_then(drive_file_id)
        .map(|id| format!("https://drive.google.com/thumbnail?id={id}"));

    let color = match profile.contact_type {
        ContactType::Alumni => ALUMNI_COLOR,
        ContactType::Exec => EXEC_COLOR,
    };

    GraphNode {
        id: profile.id.clone(),
        name: format!("{} {}", profile.first_name, profile.last_name),
        kind: NodeKind::Person,
        profile: Some(profile.clone()),
        company: Some(profile.current_company.clone()),
        past_experience: profile.past_experience.clone(),
        color: color.to_string(),
        val: PERSON_VAL,
        photo,
        ma_role: profile.ma_role.clone(),
    }
}

fn portfolio_of(profile: &Profile) -> Option<&str> {
    profile
        .ma_role
        .as_ref()
        .and_then(|role| role.portfolio.as_deref())
        .filter(|p| !p.is_empty())
}
