use utoipa::OpenApi;

use crate::{
    data::models::LightModels,
    models::{
        plant::PlantRecord,
        request::{ErrorResponse, GardenStyle, Pagination, Property, ViewSeason, ZoneRequest},
        zone::{LightLevel, ModelGroup, ModelVariant, Moisture, PlantSummary, ZoneLabel, ZoneResult},
        Footprint, GridPosition,
    },
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Garden Zones API",
        description = "Planting-zone engine: classifies flower-bed cells of a garden design into light/moisture zones from nearby structures and water, then recommends a suitable plant per cell filtered by season, style, selection and cold hardiness.",
        version = "1.0.0",
        license(name = "MIT"),
    ),
    paths(
        crate::api::handlers::health::health,
        crate::api::handlers::plants::list_plants,
        crate::api::handlers::plants::get_plant,
        crate::api::handlers::zones::post_zones,
        crate::api::handlers::zones::get_models,
    ),
    components(
        schemas(
            // Enums
            ViewSeason, GardenStyle, LightLevel, Moisture, ZoneLabel,
            // Request
            GridPosition, Footprint, Property, ZoneRequest,
            // Response
            PlantSummary, ModelVariant, ModelGroup, ZoneResult, LightModels,
            // Catalogue
            PlantRecord,
            // Shared
            Pagination, ErrorResponse,
        )
    ),
    tags(
        (name = "zones",  description = "Zone classification and planting"),
        (name = "plants", description = "Plant catalogue"),
        (name = "meta",   description = "Service health"),
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_lists_every_route() {
        let doc = ApiDoc::openapi();
        for path in ["/api/zones", "/api/plants", "/api/plants/{id}", "/api/models", "/api/health"] {
            assert!(doc.paths.paths.contains_key(path), "missing {path}");
        }
    }
}
