use serde::Serialize;

use crate::models::{SiteSettings, Stat, plain_text};

pub const DEFAULT_CLUB_NAME: &str = "Gamecock Barbell Club";
pub const DEFAULT_TAGLINE: &str = "Lift Heavy. Compete Hard. Represent USC.";
pub const DEFAULT_DUES: &str = "$20/semester";
pub const DEFAULT_MEETING_INFO: &str = "Tuesdays & Thursdays · 6–8 PM";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatView {
    pub value: String,
    pub label: String,
}

/// Club-wide copy used by the hero, about, join and footer blocks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SiteView {
    pub club_name: String,
    pub tagline: String,
    pub about_text: Option<String>,
    pub stats: Vec<StatView>,
    pub dues_amount: String,
    pub meeting_info: String,
    pub instagram_handle: Option<String>,
    pub instagram_url: Option<String>,
    pub email: Option<String>,
    pub email_href: Option<String>,
    pub join_link: Option<String>,
    pub show_pr_board: bool,
}

impl SiteView {
    pub fn from_settings(settings: Option<&SiteSettings>) -> Self {
        let instagram_handle = setting(settings, |s| &s.instagram_handle)
            .map(|handle| handle.trim_start_matches('@').to_string());
        let email = setting(settings, |s| &s.email);

        let about_text = settings
            .map(|s| plain_text(&s.about))
            .filter(|text| !text.trim().is_empty());

        let stats = settings
            .map(|s| s.about_stats.iter().filter_map(stat_view).collect())
            .unwrap_or_default();

        Self {
            club_name: setting(settings, |s| &s.club_name).unwrap_or(DEFAULT_CLUB_NAME.to_string()),
            tagline: setting(settings, |s| &s.tagline).unwrap_or(DEFAULT_TAGLINE.to_string()),
            about_text,
            stats,
            dues_amount: setting(settings, |s| &s.dues_amount).unwrap_or(DEFAULT_DUES.to_string()),
            meeting_info: setting(settings, |s| &s.meeting_info)
                .unwrap_or(DEFAULT_MEETING_INFO.to_string()),
            instagram_url: instagram_handle
                .as_ref()
                .map(|handle| format!("https://instagram.com/{}", handle)),
            instagram_handle,
            email_href: email.as_ref().map(|email| format!("mailto:{}", email)),
            email,
            join_link: setting(settings, |s| &s.join_link),
            show_pr_board: settings.and_then(|s| s.show_pr_board).unwrap_or(true),
        }
    }
}

/// A trimmed, non-empty settings value.
fn setting<'a>(
    settings: Option<&'a SiteSettings>,
    pick: impl Fn(&'a SiteSettings) -> &'a Option<String>,
) -> Option<String> {
    settings
        .and_then(|s| pick(s).as_deref())
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}

// A stat needs both halves to be worth showing.
fn stat_view(stat: &Stat) -> Option<StatView> {
    match (stat.value.as_deref(), stat.label.as_deref()) {
        (Some(value), Some(label)) if !value.is_empty() && !label.is_empty() => Some(StatView {
            value: value.to_string(),
            label: label.to_string(),
        }),
        _ => None,
    }
}
