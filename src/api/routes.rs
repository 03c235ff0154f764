use actix_web::{error::InternalError, web, HttpResponse};

use crate::api::handlers::{get_models, get_plant, health::health, list_plants, post_zones};

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .service(health)
            .service(list_plants)
            .service(get_plant)
            .service(post_zones)
            .service(get_models),
    );
}

/// JSON extractor settings: body errors become `400 {"error": "..."}`.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        let message = format!("JSON deserialization error: {err}");
        InternalError::from_response(
            err,
            HttpResponse::BadRequest().json(serde_json::json!({ "error": message })),
        )
        .into()
    })
}
