use serde::Serialize;

use super::EmptyState;
use crate::models::Officer;

const NO_OFFICERS: EmptyState = EmptyState {
    title: "Officer Lineup Coming Soon",
    message: "This section stays visible and will fill in as officer profiles are published.",
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OfficerCard {
    pub id: String,
    pub name: String,
    pub role: String,
    pub major: Option<String>,
    pub email_href: Option<String>,
    pub instagram_href: Option<String>,
}

impl From<&Officer> for OfficerCard {
    fn from(officer: &Officer) -> Self {
        let present = |value: &Option<String>| {
            value
                .as_deref()
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .map(str::to_string)
        };

        Self {
            id: officer.id.clone(),
            name: officer.name.clone(),
            role: officer.role.clone(),
            major: present(&officer.major),
            email_href: present(&officer.email).map(|email| format!("mailto:{}", email)),
            instagram_href: present(&officer.instagram).map(|handle| {
                format!("https://instagram.com/{}", handle.trim_start_matches('@'))
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OfficersSection {
    pub officers: Vec<OfficerCard>,
    pub empty: Option<EmptyState>,
}

impl OfficersSection {
    /// Keeps the order the officers arrive in, which is display order.
    pub fn build(officers: &[Officer]) -> Self {
        Self {
            officers: officers.iter().map(OfficerCard::from).collect(),
            empty: officers.is_empty().then_some(NO_OFFICERS),
        }
    }
}
