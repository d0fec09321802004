use chrono::{DateTime, Utc};
use serde::Serialize;

use super::EmptyState;
use crate::models::{Update, UpdateCategory, plain_text};

const EXCERPT_CHARS: usize = 180;
const ELLIPSIS: char = '…';

const NO_NEWS: EmptyState = EmptyState {
    title: "No News Yet",
    message: "This section is live and will populate automatically when updates are added.",
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpdateCard {
    pub id: String,
    pub title: String,
    pub category: &'static str,
    pub age_label: Option<String>,
    pub excerpt: String,
    pub pinned: bool,
}

impl UpdateCard {
    pub fn from_update(update: &Update, now: DateTime<Utc>) -> Self {
        Self {
            id: update.id.clone(),
            title: update.title.clone(),
            category: update.category.unwrap_or(UpdateCategory::Update).as_str(),
            age_label: update.published_at.map(|at| age_label(at, now)),
            excerpt: excerpt(&plain_text(&update.body)),
            pinned: update.is_pinned(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewsSection {
    pub pinned: Vec<UpdateCard>,
    pub rest: Vec<UpdateCard>,
    pub empty: Option<EmptyState>,
}

impl NewsSection {
    pub fn build(updates: &[Update], now: DateTime<Utc>) -> Self {
        let (pinned, rest) = updates
            .iter()
            .map(|update| UpdateCard::from_update(update, now))
            .partition(|card| card.pinned);

        Self {
            pinned,
            rest,
            empty: updates.is_empty().then_some(NO_NEWS),
        }
    }
}

/// "Today", "Yesterday", "3d ago", "2w ago", then a short calendar date.
pub fn age_label(published_at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let days = (now - published_at).num_days();
    match days {
        d if d <= 0 => "Today".to_string(),
        1 => "Yesterday".to_string(),
        d if d < 7 => format!("{}d ago", d),
        d if d < 30 => format!("{}w ago", d / 7),
        _ => published_at.format("%b %-d").to_string(),
    }
}

/// The first `EXCERPT_CHARS` characters of `text`, trimmed. An excerpt that
/// still fills the limit after trimming ends in an ellipsis.
pub fn excerpt(text: &str) -> String {
    let mut excerpt = text
        .chars()
        .take(EXCERPT_CHARS)
        .collect::<String>()
        .trim()
        .to_string();

    if excerpt.chars().count() >= EXCERPT_CHARS - 1 {
        excerpt.push(ELLIPSIS);
    }
    excerpt
}
