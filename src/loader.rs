use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, info, instrument};

use crate::config::ContentStoreConfig;
use crate::content::{ContentStore, archive_cutoff};
use crate::error::AppError;
use crate::models::{Event, Officer, PrRecord, SiteSettings, Update};

/// Everything one page render needs. Lists are always present, possibly empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageData {
    pub settings: Option<SiteSettings>,
    pub upcoming: Vec<Event>,
    pub archived: Vec<Event>,
    pub updates: Vec<Update>,
    pub officers: Vec<Officer>,
    pub pr_records: Vec<PrRecord>,
}

impl PageData {
    /// The shape rendered when the content store is unconfigured or unreachable.
    pub fn disconnected() -> Self {
        Self::default()
    }
}

pub struct PageLoader {
    config: ContentStoreConfig,
    store: Arc<dyn ContentStore>,
}

impl PageLoader {
    pub fn new(config: ContentStoreConfig, store: Arc<dyn ContentStore>) -> Self {
        Self { config, store }
    }

    pub async fn load(&self) -> PageData {
        self.load_at(Utc::now()).await
    }

    /// Loads all page content as of `now`. Never fails: an unconfigured store
    /// or any failed query yields [`PageData::disconnected`].
    #[instrument(skip(self), fields(dataset = %self.config.dataset))]
    pub async fn load_at(&self, now: DateTime<Utc>) -> PageData {
        if !self.config.is_configured() {
            debug!(
                project_id = ?self.config.project_id,
                "Content store not configured, rendering empty sections"
            );
            return PageData::disconnected();
        }

        match self.fetch_all(archive_cutoff(now)).await {
            Ok(data) => {
                info!(
                    upcoming = data.upcoming.len(),
                    archived = data.archived.len(),
                    updates = data.updates.len(),
                    officers = data.officers.len(),
                    pr_records = data.pr_records.len(),
                    "Loaded page content"
                );
                data
            }
            Err(err) => {
                err.log_and_record("Loading page content");
                PageData::disconnected()
            }
        }
    }

    // Both event queries share one cutoff so every event lands in exactly one list.
    async fn fetch_all(&self, cutoff: DateTime<Utc>) -> Result<PageData, AppError> {
        let store = self.store.as_ref();

        let (settings, upcoming, archived, updates, officers, pr_records) = tokio::try_join!(
            store.site_settings(),
            store.upcoming_events(cutoff),
            store.archived_events(cutoff),
            store.updates(),
            store.officers(),
            store.pr_records(),
        )?;

        Ok(PageData {
            settings,
            upcoming,
            archived,
            updates,
            officers,
            pr_records,
        })
    }
}
