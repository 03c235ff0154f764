use actix_web::{get, http::Method, web, HttpResponse};

use crate::{
    api::state::AppState,
    error::ApiError,
    models::request::{links, ApiResponse, Pagination, PaginatedResponse, PlantResponse},
};

fn plant_links(id: &str) -> crate::models::request::Links {
    links([
        ("self", format!("/api/plants/{id}"), Method::GET),
        ("collection", "/api/plants".to_string(), Method::GET),
    ])
}

/// GET /api/plants
/// Returns every record of the plant catalogue.
#[utoipa::path(
    get,
    path = "/api/plants",
    tag = "plants",
    responses(
        (status = 200, description = "Full plant catalogue", body = [crate::models::plant::PlantRecord]),
        (status = 503, description = "Catalogue unavailable", body = crate::models::request::ErrorResponse),
    )
)]
#[get("/plants")]
pub async fn list_plants(state: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    let plants = state.catalog.all_plants().await?;
    let total = plants.len();
    let items: Vec<ApiResponse<PlantResponse>> = plants
        .into_iter()
        .map(|plant| {
            let links = plant_links(&plant.id);
            ApiResponse::new(PlantResponse { plant }, links)
        })
        .collect();
    Ok(HttpResponse::Ok().json(PaginatedResponse::new(
        items,
        links([("self", "/api/plants".to_string(), Method::GET)]),
        Pagination::single_page(total),
    )))
}

/// GET /api/plants/{id}
/// Returns a single plant by id.
#[utoipa::path(
    get,
    path = "/api/plants/{id}",
    tag = "plants",
    params(("id" = String, Path, description = "Plant id")),
    responses(
        (status = 200, description = "Plant record", body = crate::models::plant::PlantRecord),
        (status = 404, description = "Unknown plant", body = crate::models::request::ErrorResponse),
        (status = 503, description = "Catalogue unavailable", body = crate::models::request::ErrorResponse),
    )
)]
#[get("/plants/{id}")]
pub async fn get_plant(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    let plant = state
        .catalog
        .plant_by_id(&id)
        .await?
        .ok_or_else(|| ApiError::PlantNotFound(id.clone()))?;
    Ok(HttpResponse::Ok().json(ApiResponse::new(PlantResponse { plant }, plant_links(&id))))
}
