use std::cmp::Ordering;
use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering as AtomicOrdering};

use chrono::{DateTime, Utc};

use super::ContentStore;
use super::queries::{ARCHIVE_LIMIT, Query, UPDATES_LIMIT};
use crate::error::AppError;
use crate::models::{Event, Officer, PrRecord, SiteSettings, Update};

/// In-memory stand-in for the content store. Applies the same filters,
/// orderings and caps as the GROQ queries, counts calls, and can be told to
/// fail individual queries.
#[derive(Default)]
pub struct InMemoryStore {
    settings: Option<SiteSettings>,
    events: Vec<Event>,
    updates: Vec<Update>,
    officers: Vec<Officer>,
    pr_records: Vec<PrRecord>,
    failing: HashSet<Query>,
    calls: AtomicUsize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_settings(mut self, settings: SiteSettings) -> Self {
        self.settings = Some(settings);
        self
    }

    pub fn with_events(mut self, events: Vec<Event>) -> Self {
        self.events = events;
        self
    }

    pub fn with_updates(mut self, updates: Vec<Update>) -> Self {
        self.updates = updates;
        self
    }

    pub fn with_officers(mut self, officers: Vec<Officer>) -> Self {
        self.officers = officers;
        self
    }

    pub fn with_pr_records(mut self, pr_records: Vec<PrRecord>) -> Self {
        self.pr_records = pr_records;
        self
    }

    pub fn failing(mut self, query: Query) -> Self {
        self.failing.insert(query);
        self
    }

    /// Number of query calls received so far.
    pub fn calls(&self) -> usize {
        self.calls.load(AtomicOrdering::SeqCst)
    }

    fn begin(&self, query: Query) -> Result<(), AppError> {
        self.calls.fetch_add(1, AtomicOrdering::SeqCst);
        if self.failing.contains(&query) {
            return Err(AppError::UnexpectedStatus {
                query: query.name(),
                status: reqwest::StatusCode::BAD_GATEWAY,
            });
        }
        Ok(())
    }
}

fn missing_last<T: PartialOrd>(a: Option<T>, b: Option<T>, descending: bool) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => {
            let ord = a.partial_cmp(&b).unwrap_or(Ordering::Equal);
            if descending { ord.reverse() } else { ord }
        }
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

#[rocket::async_trait]
impl ContentStore for InMemoryStore {
    async fn site_settings(&self) -> Result<Option<SiteSettings>, AppError> {
        self.begin(Query::SiteSettings)?;
        Ok(self.settings.clone())
    }

    async fn upcoming_events(&self, cutoff: DateTime<Utc>) -> Result<Vec<Event>, AppError> {
        self.begin(Query::UpcomingEvents)?;
        let mut events: Vec<Event> = self
            .events
            .iter()
            .filter(|event| event.date >= cutoff)
            .cloned()
            .collect();
        events.sort_by_key(|event| event.date);
        Ok(events)
    }

    async fn archived_events(&self, cutoff: DateTime<Utc>) -> Result<Vec<Event>, AppError> {
        self.begin(Query::ArchivedEvents)?;
        let mut events: Vec<Event> = self
            .events
            .iter()
            .filter(|event| event.date < cutoff)
            .map(Event::archived_projection)
            .collect();
        events.sort_by(|a, b| b.date.cmp(&a.date));
        events.truncate(ARCHIVE_LIMIT);
        Ok(events)
    }

    async fn updates(&self) -> Result<Vec<Update>, AppError> {
        self.begin(Query::Updates)?;
        let mut updates = self.updates.clone();
        updates.sort_by(|a, b| {
            b.is_pinned()
                .cmp(&a.is_pinned())
                .then_with(|| missing_last(a.published_at, b.published_at, true))
        });
        updates.truncate(UPDATES_LIMIT);
        Ok(updates)
    }

    async fn officers(&self) -> Result<Vec<Officer>, AppError> {
        self.begin(Query::Officers)?;
        let mut officers = self.officers.clone();
        officers.sort_by(|a, b| missing_last(a.order, b.order, false));
        Ok(officers)
    }

    async fn pr_records(&self) -> Result<Vec<PrRecord>, AppError> {
        self.begin(Query::PrRecords)?;
        let mut records = self.pr_records.clone();
        records.sort_by(|a, b| missing_last(a.dots, b.dots, true));
        Ok(records)
    }
}
