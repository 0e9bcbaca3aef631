//! Read-only JSON lookups over the catalog.
//!
//! - `GET /api/fish/{id}`: one record, `404` when the id is not stored.
//! - `GET /api/fish/diet/{diet}`: every record with that exact diet, possibly
//!   an empty array.
//!
//! Storage failures answer `503 Service Unavailable` with the error text.

use crate::persistence::FishDao;
use actix_web::{web, HttpResponse, Responder};
use log::error;

pub async fn by_id(id: web::Path<i64>, fish_dao: web::Data<FishDao>) -> impl Responder {
    let id = id.into_inner();
    match web::block(move || fish_dao.find_by_id(id)).await {
        Ok(Ok(record)) if record.is_unset() => {
            HttpResponse::NotFound().body(format!("Fish {} not found", id))
        }
        Ok(Ok(record)) => HttpResponse::Ok().json(record),
        Ok(Err(e)) => HttpResponse::ServiceUnavailable()
            .body(format!("Error retrieving fish: {}", e)),
        Err(e) => {
            error!("Lookup task failed: {}", e);
            HttpResponse::InternalServerError().body("Lookup task failed")
        }
    }
}

pub async fn by_diet(diet: web::Path<String>, fish_dao: web::Data<FishDao>) -> impl Responder {
    let diet = diet.into_inner();
    match web::block(move || fish_dao.find_by_diet(&diet)).await {
        Ok(Ok(records)) => HttpResponse::Ok().json(records),
        Ok(Err(e)) => HttpResponse::ServiceUnavailable()
            .body(format!("Error retrieving fish: {}", e)),
        Err(e) => {
            error!("Lookup task failed: {}", e);
            HttpResponse::InternalServerError().body("Lookup task failed")
        }
    }
}
