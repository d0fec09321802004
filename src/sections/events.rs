use chrono::Datelike;
use serde::Serialize;

use super::EmptyState;
use crate::models::{Event, EventCategory};

const NO_UPCOMING: EmptyState = EmptyState {
    title: "Events Coming Soon",
    message: "No upcoming events right now. Check back soon.",
};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EventCard {
    pub id: String,
    pub title: String,
    pub date_label: String,
    pub month: String,
    pub day: u32,
    pub time_label: String,
    pub end_label: Option<String>,
    pub location: Option<String>,
    pub description: Option<String>,
    pub registration_link: Option<String>,
    pub category: &'static str,
    pub badge: &'static str,
    pub featured: bool,
}

impl EventCard {
    pub fn from_event(event: &Event) -> Self {
        let category = event.event_type.unwrap_or(EventCategory::Other);

        Self {
            id: event.id.clone(),
            title: event.title.clone(),
            date_label: event.date.format("%a, %b %-d, %Y").to_string(),
            month: event.date.format("%b").to_string().to_uppercase(),
            day: event.date.day(),
            time_label: event.date.format("%-I:%M %p").to_string(),
            end_label: event
                .end_date
                .map(|end| end.format("%a, %b %-d, %Y").to_string()),
            location: event.location.clone(),
            description: event.description.clone(),
            registration_link: event.registration_link.clone(),
            category: category.as_str(),
            badge: badge_class(category),
            featured: event.is_featured(),
        }
    }
}

/// Past events sit behind a disclosure that starts closed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArchiveView {
    pub count: usize,
    pub collapsed: bool,
    pub events: Vec<EventCard>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EventsSection {
    pub featured: Vec<EventCard>,
    pub regular: Vec<EventCard>,
    pub archive: Option<ArchiveView>,
    pub empty: Option<EmptyState>,
}

impl EventsSection {
    pub fn build(upcoming: &[Event], archived: &[Event]) -> Self {
        let (featured, regular): (Vec<EventCard>, Vec<EventCard>) = upcoming
            .iter()
            .map(EventCard::from_event)
            .partition(|card| card.featured);

        let archive = (!archived.is_empty()).then(|| ArchiveView {
            count: archived.len(),
            collapsed: true,
            events: archived.iter().map(EventCard::from_event).collect(),
        });

        Self {
            featured,
            regular,
            archive,
            empty: upcoming.is_empty().then_some(NO_UPCOMING),
        }
    }
}

pub fn badge_class(category: EventCategory) -> &'static str {
    match category {
        EventCategory::Competition => "badge-comp",
        EventCategory::Meet => "badge-meet",
        EventCategory::Practice => "badge-prac",
        EventCategory::Social => "badge-social",
        EventCategory::Other => "badge-other",
    }
}
