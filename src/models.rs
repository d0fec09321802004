use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SiteSettings {
    pub club_name: Option<String>,
    pub tagline: Option<String>,
    #[serde(deserialize_with = "null_as_empty")]
    pub about: Vec<PortableTextBlock>,
    #[serde(deserialize_with = "null_as_empty")]
    pub about_stats: Vec<Stat>,
    pub dues_amount: Option<String>,
    pub meeting_info: Option<String>,
    pub instagram_handle: Option<String>,
    pub email: Option<String>,
    pub join_link: Option<String>,
    #[serde(rename = "showPRBoard")]
    pub show_pr_board: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Stat {
    pub value: Option<String>,
    pub label: Option<String>,
}

/// One entry of a rich-text field as stored by the content store.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PortableTextBlock {
    #[serde(rename = "_type")]
    pub kind: String,
    #[serde(rename = "_key")]
    pub key: Option<String>,
    pub style: Option<String>,
    #[serde(deserialize_with = "null_as_empty")]
    pub children: Vec<PortableTextSpan>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PortableTextSpan {
    #[serde(rename = "_key")]
    pub key: Option<String>,
    pub text: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub marks: Vec<String>,
}

/// Flattens rich text to plain text: span text concatenated per block, blocks
/// joined by a single space. Non-text blocks are skipped.
pub fn plain_text(blocks: &[PortableTextBlock]) -> String {
    blocks
        .iter()
        .filter(|block| block.kind == "block")
        .map(|block| {
            block
                .children
                .iter()
                .map(|span| span.text.as_str())
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum EventCategory {
    Competition,
    Meet,
    Practice,
    Social,
    Other,
}

impl EventCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventCategory::Competition => "competition",
            EventCategory::Meet => "meet",
            EventCategory::Practice => "practice",
            EventCategory::Social => "social",
            EventCategory::Other => "other",
        }
    }
}

impl From<String> for EventCategory {
    fn from(value: String) -> Self {
        match value.as_str() {
            "competition" => EventCategory::Competition,
            "meet" => EventCategory::Meet,
            "practice" => EventCategory::Practice,
            "social" => EventCategory::Social,
            _ => EventCategory::Other,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub date: DateTime<Utc>,
    #[serde(default)]
    pub end_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub registration_link: Option<String>,
    #[serde(default)]
    pub event_type: Option<EventCategory>,
    #[serde(default)]
    pub featured: Option<bool>,
}

impl Event {
    pub fn is_featured(&self) -> bool {
        self.featured.unwrap_or(false)
    }

    /// The fields the archive listing asks the store for.
    pub fn archived_projection(&self) -> Self {
        Self {
            id: self.id.clone(),
            title: self.title.clone(),
            date: self.date,
            end_date: None,
            location: self.location.clone(),
            description: None,
            registration_link: None,
            event_type: self.event_type,
            featured: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum UpdateCategory {
    Announcement,
    Result,
    News,
    Update,
}

impl UpdateCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            UpdateCategory::Announcement => "announcement",
            UpdateCategory::Result => "result",
            UpdateCategory::News => "news",
            UpdateCategory::Update => "update",
        }
    }
}

impl From<String> for UpdateCategory {
    fn from(value: String) -> Self {
        match value.as_str() {
            "announcement" => UpdateCategory::Announcement,
            "result" => UpdateCategory::Result,
            "news" => UpdateCategory::News,
            _ => UpdateCategory::Update,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Update {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub category: Option<UpdateCategory>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub body: Vec<PortableTextBlock>,
    #[serde(default)]
    pub pinned: Option<bool>,
}

impl Update {
    pub fn is_pinned(&self) -> bool {
        self.pinned.unwrap_or(false)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Officer {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub role: String,
    #[serde(default)]
    pub order: Option<f64>,
    #[serde(default)]
    pub major: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub instagram: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sex {
    M,
    W,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrRecord {
    #[serde(rename = "_id")]
    pub id: String,
    pub lifter_name: String,
    #[serde(default)]
    pub weight_class: Option<String>,
    #[serde(default)]
    pub sex: Option<Sex>,
    #[serde(default)]
    pub squat: Option<f64>,
    #[serde(default)]
    pub bench: Option<f64>,
    #[serde(default)]
    pub deadlift: Option<f64>,
    #[serde(default)]
    pub total: Option<f64>,
    #[serde(default)]
    pub dots: Option<f64>,
    #[serde(default)]
    pub set_at: Option<NaiveDate>,
    #[serde(default)]
    pub competition: Option<String>,
}

// The store projects missing array fields as `null`.
fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}
