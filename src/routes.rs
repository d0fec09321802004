use std::path::PathBuf;

use chrono::Utc;
use rocket::State;
use rocket::http::Header;
use rocket_dyn_templates::{Template, context};
use tracing::info;

use crate::auth::StudioAdmin;
use crate::cache::PageCache;
use crate::config::{ContentStoreConfig, StudioCredentials};
use crate::sections::{Division, PageView};

/// A response that downstream caches may reuse for the revalidation window.
#[derive(Responder)]
pub struct Revalidated {
    inner: Template,
    cache_control: Header<'static>,
}

impl Revalidated {
    pub fn new(inner: Template, cache: &PageCache) -> Self {
        let max_age = cache.revalidate_after().as_secs();
        Self {
            inner,
            cache_control: Header::new(
                "Cache-Control",
                format!("public, max-age={max_age}"),
            ),
        }
    }
}

#[get("/?<division>")]
pub async fn index(division: Option<&str>, cache: &State<PageCache>) -> Revalidated {
    let data = cache.get().await;
    let page = PageView::build(&data, Division::parse(division), Utc::now());

    Revalidated::new(
        Template::render(
            "index",
            context! {
                title: format!("{} | Powerlifting", page.site.club_name),
                page: page,
            },
        ),
        cache,
    )
}

#[get("/studio/<path..>")]
pub fn studio(
    admin: StudioAdmin,
    path: PathBuf,
    content: &State<ContentStoreConfig>,
    studio: &State<StudioCredentials>,
) -> Template {
    info!(username = %admin.username, path = %path.display(), "Serving studio page");

    Template::render(
        "studio",
        context! {
            title: "Content Studio",
            username: admin.username,
            path: path.display().to_string(),
            project_id: content.valid_project_id(),
            dataset: &content.dataset,
            studio_url: studio.studio_url.as_deref(),
        },
    )
}
