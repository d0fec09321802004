use chrono::Utc;
use rocket::Request;
use rocket::State;
use rocket::http::Status;
use rocket::response::status::Custom;
use rocket::serde::json::Json;
use serde_json::{Value, json};

use crate::cache::PageCache;
use crate::loader::PageData;
use crate::sections::{Division, PageView, PrBoardSection};

#[get("/health")]
pub fn health() -> &'static str {
    "OK"
}

/// Raw loader output: settings plus the five content lists.
#[get("/content")]
pub async fn api_content(cache: &State<PageCache>) -> Json<PageData> {
    Json(cache.get().await.as_ref().clone())
}

#[get("/page?<division>")]
pub async fn api_page(division: Option<&str>, cache: &State<PageCache>) -> Json<PageView> {
    let data = cache.get().await;
    Json(PageView::build(&data, Division::parse(division), Utc::now()))
}

/// The PR board for one division, recomputed from the cached record list.
#[get("/pr-board?<division>")]
pub async fn api_pr_board(
    division: Option<&str>,
    cache: &State<PageCache>,
) -> Json<PrBoardSection> {
    let data = cache.get().await;
    Json(PrBoardSection::build(
        &data.pr_records,
        Division::parse(division),
    ))
}

#[catch(404)]
pub fn not_found_api(req: &Request) -> Custom<Json<Value>> {
    let error_json = json!({
        "error": "Not Found",
        "message": format!("No content route at {}", req.uri())
    });

    Custom(Status::NotFound, Json(error_json))
}
