pub mod queries;
pub mod sanity;

#[cfg(test)]
pub mod memory;

use chrono::{DateTime, Utc};

use crate::error::AppError;
use crate::models::{Event, Officer, PrRecord, SiteSettings, Update};

pub use queries::{Query, archive_cutoff};
pub use sanity::SanityClient;

#[cfg(test)]
pub use memory::InMemoryStore;

/// Read-only access to the club's content. One method per named query; list
/// queries return an empty list when nothing matches.
#[rocket::async_trait]
pub trait ContentStore: Send + Sync {
    async fn site_settings(&self) -> Result<Option<SiteSettings>, AppError>;

    /// Events dated at or after `cutoff`, soonest first.
    async fn upcoming_events(&self, cutoff: DateTime<Utc>) -> Result<Vec<Event>, AppError>;

    /// Events dated before `cutoff`, most recent first, at most 20.
    async fn archived_events(&self, cutoff: DateTime<Utc>) -> Result<Vec<Event>, AppError>;

    /// Pinned updates first, then newest first, at most 10.
    async fn updates(&self) -> Result<Vec<Update>, AppError>;

    async fn officers(&self) -> Result<Vec<Officer>, AppError>;

    async fn pr_records(&self) -> Result<Vec<PrRecord>, AppError>;
}
