use std::fmt;

use chrono::{DateTime, Duration, SecondsFormat, Utc};

/// Events older than this many days move from the upcoming list to the archive.
pub const ARCHIVE_WINDOW_DAYS: i64 = 30;
pub const ARCHIVE_LIMIT: usize = 20;
pub const UPDATES_LIMIT: usize = 10;
pub const SITE_SETTINGS_ID: &str = "siteSettings";

/// The boundary between upcoming and archived events for a render at `now`.
pub fn archive_cutoff(now: DateTime<Utc>) -> DateTime<Utc> {
    now - Duration::days(ARCHIVE_WINDOW_DAYS)
}

/// ISO-8601 instant with millisecond precision, the form the store compares
/// `dateTime()` values against.
pub fn format_cutoff(cutoff: DateTime<Utc>) -> String {
    cutoff.to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Query {
    SiteSettings,
    UpcomingEvents,
    ArchivedEvents,
    Updates,
    Officers,
    PrRecords,
}

impl Query {
    pub fn name(&self) -> &'static str {
        match self {
            Query::SiteSettings => "site_settings",
            Query::UpcomingEvents => "upcoming_events",
            Query::ArchivedEvents => "archived_events",
            Query::Updates => "updates",
            Query::Officers => "officers",
            Query::PrRecords => "pr_records",
        }
    }

    /// Whether the query takes the `$cutoff` parameter.
    pub fn takes_cutoff(&self) -> bool {
        matches!(self, Query::UpcomingEvents | Query::ArchivedEvents)
    }

    pub fn groq(&self) -> String {
        match self {
            Query::SiteSettings => format!(
                r#"*[_type == "siteSettings" && _id == "{SITE_SETTINGS_ID}"][0] {{
  clubName, tagline, about, aboutStats, duesAmount, meetingInfo,
  instagramHandle, email, joinLink, showPRBoard
}}"#
            ),
            Query::UpcomingEvents => r#"*[_type == "event" && dateTime(date) >= dateTime($cutoff)]
| order(date asc) {
  _id, title, date, endDate, location, description, registrationLink, eventType, featured
}"#
            .to_string(),
            Query::ArchivedEvents => format!(
                r#"*[_type == "event" && dateTime(date) < dateTime($cutoff)]
| order(date desc) [0...{ARCHIVE_LIMIT}] {{
  _id, title, date, location, eventType
}}"#
            ),
            Query::Updates => format!(
                r#"*[_type == "update"] | order(pinned desc, publishedAt desc) [0...{UPDATES_LIMIT}] {{
  _id, title, publishedAt, category, body, pinned
}}"#
            ),
            Query::Officers => r#"*[_type == "officer"] | order(order asc) {
  _id, name, role, order, major, email, instagram
}"#
            .to_string(),
            Query::PrRecords => r#"*[_type == "prRecord"] | order(dots desc) {
  _id, lifterName, weightClass, sex, squat, bench, deadlift, total, dots, setAt, competition
}"#
            .to_string(),
        }
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
