//! The read-only catalog view.
//!
//! `GET /` wraps the manager's text in a small HTML page with a read-only,
//! non-wrapping text area. `GET /api/fish` returns the same text as
//! `text/plain`. An empty catalog shows `NO_RECORDS` instead of a blank area.

use crate::business::FishManager;
use actix_web::{web, HttpResponse, Responder};
use log::error;

pub const NO_RECORDS: &str = "No records to display.";

const PAGE_TITLE: &str = "DB Viewer";
const TEXT_AREA_STYLE: &str = "width:500px; height:600px; font-size:14pt; font-weight:bold; \
     font-family:Consolas, monaco, monospace";

/// Actix handler for `GET /`.
pub async fn page(manager: web::Data<FishManager>) -> impl Responder {
    match load_text(manager).await {
        Some(text) => HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(render_page(&text)),
        None => HttpResponse::InternalServerError().body("Viewer task failed"),
    }
}

/// Actix handler for `GET /api/fish`.
pub async fn text(manager: web::Data<FishManager>) -> impl Responder {
    match load_text(manager).await {
        Some(text) => HttpResponse::Ok()
            .content_type("text/plain; charset=utf-8")
            .body(text),
        None => HttpResponse::InternalServerError().body("Viewer task failed"),
    }
}

/// Runs the manager on the blocking pool. The manager already folds storage
/// errors into its text, so `None` only means the task itself died.
async fn load_text(manager: web::Data<FishManager>) -> Option<String> {
    match web::block(move || manager.retrieve_fish()).await {
        Ok(records) => Some(display_text(records)),
        Err(e) => {
            error!("Viewer task failed: {}", e);
            None
        }
    }
}

pub(crate) fn display_text(records: String) -> String {
    if records.is_empty() {
        NO_RECORDS.to_string()
    } else {
        records
    }
}

pub(crate) fn render_page(text: &str) -> String {
    format!(
        "<!DOCTYPE html>\n\
         <html>\n\
         <head><meta charset=\"utf-8\"><title>{title}</title></head>\n\
         <body>\n\
         <textarea readonly wrap=\"off\" style=\"{style}\">{body}</textarea>\n\
         </body>\n\
         </html>\n",
        title = PAGE_TITLE,
        style = TEXT_AREA_STYLE,
        body = escape_html(text),
    )
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
