use actix_web::{get, http::Method, post, web, HttpResponse, Responder};
use rand::{rngs::StdRng, SeedableRng};

use crate::{
    api::state::AppState,
    data::models::all_models,
    error::ApiError,
    logic::engine::plan_zones,
    models::request::{links, ApiResponse, ZoneRequest},
};

/// POST /api/zones
/// Classifies every flower cell into a light/moisture zone and picks a plant for it.
#[utoipa::path(
    post,
    path = "/api/zones",
    tag = "zones",
    request_body = ZoneRequest,
    responses(
        (status = 200, description = "One result per flower cell, in input order", body = [crate::models::zone::ZoneResult]),
        (status = 400, description = "Malformed request body", body = crate::models::request::ErrorResponse),
        (status = 503, description = "Catalogue unavailable", body = crate::models::request::ErrorResponse),
    )
)]
#[post("/zones")]
pub async fn post_zones(
    state: web::Data<AppState>,
    body: web::Json<ZoneRequest>,
) -> Result<HttpResponse, ApiError> {
    let request = body.into_inner();
    let mut rng = StdRng::from_entropy();
    let results = plan_zones(state.catalog.as_ref(), &request, &state.rules, &mut rng).await?;
    log::info!("planted {} flower cell(s)", results.len());
    Ok(HttpResponse::Ok().json(ApiResponse::new(
        results,
        links([
            ("self", "/api/zones".to_string(), Method::POST),
            ("models", "/api/models".to_string(), Method::GET),
            ("plants", "/api/plants".to_string(), Method::GET),
        ]),
    )))
}

/// GET /api/models
/// Returns the seasonal 3D model groups for each light category.
#[utoipa::path(
    get,
    path = "/api/models",
    tag = "zones",
    responses((status = 200, description = "Seasonal model table", body = [crate::data::models::LightModels]))
)]
#[get("/models")]
pub async fn get_models() -> impl Responder {
    HttpResponse::Ok().json(ApiResponse::new(
        all_models(),
        links([("self", "/api/models".to_string(), Method::GET)]),
    ))
}
