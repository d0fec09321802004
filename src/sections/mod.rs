//! Pure mappings from loaded page content to the view models the templates
//! and the JSON API render. Every section carries its own empty state.

pub mod events;
pub mod news;
pub mod officers;
pub mod pr_board;
pub mod site;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::loader::PageData;

pub use events::EventsSection;
pub use news::NewsSection;
pub use officers::OfficersSection;
pub use pr_board::{Division, PrBoardSection};
pub use site::SiteView;

/// Rendered in place of a missing value. Distinct from a rendered zero.
pub const PLACEHOLDER: &str = "—";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmptyState {
    pub title: &'static str,
    pub message: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct PageView {
    pub site: SiteView,
    pub events: EventsSection,
    pub news: NewsSection,
    pub officers: OfficersSection,
    pub pr_board: Option<PrBoardSection>,
}

impl PageView {
    pub fn build(data: &PageData, division: Division, now: DateTime<Utc>) -> Self {
        let site = SiteView::from_settings(data.settings.as_ref());
        let pr_board = site
            .show_pr_board
            .then(|| PrBoardSection::build(&data.pr_records, division));

        Self {
            events: EventsSection::build(&data.upcoming, &data.archived),
            news: NewsSection::build(&data.updates, now),
            officers: OfficersSection::build(&data.officers),
            pr_board,
            site,
        }
    }
}

/// Text or the placeholder glyph.
pub fn text_or_placeholder(value: Option<&str>) -> String {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .unwrap_or(PLACEHOLDER)
        .to_string()
}
