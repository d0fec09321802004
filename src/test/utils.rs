#[cfg(test)]
pub mod test_utils {
    use std::sync::Arc;
    use std::time::Duration;

    use base64::Engine;
    use base64::engine::general_purpose::STANDARD;
    use chrono::{DateTime, NaiveDate, TimeZone, Utc};
    use rocket::http::Header;
    use rocket::local::asynchronous::Client;

    use crate::config::{ContentStoreConfig, SiteConfig, StudioCredentials};
    use crate::content::InMemoryStore;
    use crate::init_rocket;
    use crate::loader::PageLoader;
    use crate::models::{
        Event, EventCategory, Officer, PortableTextBlock, PortableTextSpan, PrRecord, Sex,
        SiteSettings, Update,
    };

    pub const TEST_PROJECT: &str = "test-project";
    pub const STUDIO_USER: &str = "coach";
    pub const STUDIO_PASSWORD: &str = "lift:heavy";

    /// A fixed instant so date-relative assertions are stable.
    pub fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 10, 12, 0, 0).unwrap()
    }

    pub fn days_from(now: DateTime<Utc>, days: i64) -> DateTime<Utc> {
        now + chrono::Duration::days(days)
    }

    pub fn test_config() -> SiteConfig {
        SiteConfig {
            content: ContentStoreConfig::for_project(TEST_PROJECT),
            studio: StudioCredentials::new(STUDIO_USER, STUDIO_PASSWORD),
            revalidate: Duration::from_secs(60),
        }
    }

    pub fn loader_for(store: Arc<InMemoryStore>) -> PageLoader {
        PageLoader::new(ContentStoreConfig::for_project(TEST_PROJECT), store)
    }

    pub async fn setup_test_client(store: InMemoryStore) -> (Client, Arc<InMemoryStore>) {
        setup_test_client_with(store, test_config()).await
    }

    pub async fn setup_test_client_with(
        store: InMemoryStore,
        config: SiteConfig,
    ) -> (Client, Arc<InMemoryStore>) {
        let store = Arc::new(store);
        let rocket = init_rocket(config, store.clone());
        let client = Client::tracked(rocket)
            .await
            .expect("valid rocket instance");
        (client, store)
    }

    pub fn basic_auth(username: &str, password: &str) -> Header<'static> {
        let encoded = STANDARD.encode(format!("{}:{}", username, password));
        Header::new("Authorization", format!("Basic {}", encoded))
    }

    pub fn settings(club_name: &str) -> SiteSettings {
        SiteSettings {
            club_name: Some(club_name.to_string()),
            ..SiteSettings::default()
        }
    }

    pub fn text_block(text: &str) -> PortableTextBlock {
        PortableTextBlock {
            kind: "block".to_string(),
            children: vec![PortableTextSpan {
                text: text.to_string(),
                ..PortableTextSpan::default()
            }],
            ..PortableTextBlock::default()
        }
    }

    pub fn event(id: &str, date: DateTime<Utc>) -> Event {
        Event {
            id: id.to_string(),
            title: format!("Event {}", id),
            date,
            end_date: None,
            location: Some("Strom Thurmond Wellness Center".to_string()),
            description: Some("Bring your belt.".to_string()),
            registration_link: None,
            event_type: Some(EventCategory::Meet),
            featured: None,
        }
    }

    pub fn featured_event(id: &str, date: DateTime<Utc>) -> Event {
        Event {
            featured: Some(true),
            event_type: Some(EventCategory::Competition),
            ..event(id, date)
        }
    }

    pub fn update(id: &str, published_at: Option<DateTime<Utc>>, pinned: bool) -> Update {
        Update {
            id: id.to_string(),
            title: format!("Update {}", id),
            published_at,
            category: None,
            body: vec![text_block("Meet results are in.")],
            pinned: Some(pinned),
        }
    }

    pub fn officer(id: &str, order: Option<f64>) -> Officer {
        Officer {
            id: id.to_string(),
            name: format!("Officer {}", id),
            role: "Treasurer".to_string(),
            order,
            major: None,
            email: None,
            instagram: None,
        }
    }

    pub fn pr(id: &str, sex: Option<Sex>, dots: Option<f64>) -> PrRecord {
        PrRecord {
            id: id.to_string(),
            lifter_name: format!("Lifter {}", id),
            weight_class: Some("83kg".to_string()),
            sex,
            squat: Some(200.0),
            bench: Some(132.5),
            deadlift: Some(250.0),
            total: Some(582.5),
            dots,
            set_at: NaiveDate::from_ymd_opt(2024, 11, 2),
            competition: Some("Collegiate Nationals".to_string()),
        }
    }

    /// One of each content type, dated around the real clock so the cache
    /// and routes see them as current.
    pub fn standard_store() -> InMemoryStore {
        let now = Utc::now();
        InMemoryStore::new()
            .with_settings(settings("Test Barbell"))
            .with_events(vec![
                featured_event("meet", days_from(now, 14)),
                event("social", days_from(now, 3)),
                event("old", days_from(now, -45)),
            ])
            .with_updates(vec![update("results", Some(days_from(now, -1)), true)])
            .with_officers(vec![officer("president", Some(1.0))])
            .with_pr_records(vec![
                pr("m1", Some(Sex::M), Some(410.2)),
                pr("w1", Some(Sex::W), Some(380.0)),
                pr("w2", Some(Sex::W), Some(301.4)),
            ])
    }
}
