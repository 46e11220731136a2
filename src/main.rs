use actix_web::{middleware::Logger, HttpServer};

use growth_mindset_server::{app_state::AppState, config::Config, handlers::build_app};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let config = Config::from_env();
    let bind_address = (config.web_server_host.clone(), config.web_server_port);
    let state = AppState::new(config);

    log::info!(
        "Starting HTTP server on http://{}:{}",
        bind_address.0,
        bind_address.1
    );

    HttpServer::new(move || build_app(state.clone()).wrap(Logger::default()))
        .bind(bind_address)?
        .run()
        .await
}
