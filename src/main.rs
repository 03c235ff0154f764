use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use garden_zones::{
    api::{openapi::ApiDoc, routes, state::AppState},
    config::AppConfig,
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let config = AppConfig::from_env().map_err(std::io::Error::other)?;
    let rules = config.zone_rules().map_err(|e| {
        log::error!("cannot load zone rules: {e}");
        std::io::Error::other(e)
    })?;
    let state = AppState::new(config.catalog(), rules);

    let bind_addr = config.bind_addr.clone();
    log::info!("🌱 Garden zones API started at http://{bind_addr}");
    log::info!("   POST /api/zones");
    log::info!("   GET  /api/plants");
    log::info!("   GET  /api/plants/{{id}}");
    log::info!("   GET  /api/models");
    match &config.catalog_path {
        Some(path) => log::info!("   catalogue → {}", path.display()),
        None => log::info!("   catalogue → built-in"),
    }
    log::info!("   📖 Swagger UI → http://{bind_addr}/swagger-ui/");

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Logger::default())
            .wrap(Cors::permissive())
            .app_data(web::Data::new(state.clone()))
            .app_data(routes::json_config())
            .configure(routes::configure)
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", ApiDoc::openapi()),
            )
    })
    .bind(bind_addr)?
    .run()
    .await
}
