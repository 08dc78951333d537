use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use env_logger::Env;

use examlink_server::{
    app_state::AppState,
    auth::AuthMiddleware,
    config::Config,
    handlers::{exam_attempts, get_exam, health_check, login, submit_exam},
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let config = Config::from_env();
    let state = AppState::new(config.clone())
        .await
        .expect("application state should initialise");

    log::info!(
        "starting HTTP server on {}:{}",
        config.web_server_host,
        config.web_server_port
    );

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(state.jwt_service.clone()))
            .wrap(Logger::default())
            .wrap(Cors::permissive())
            .service(health_check)
            .service(login)
            .service(get_exam)
            .service(submit_exam)
            .service(
                web::scope("/api/manage")
                    .wrap(AuthMiddleware)
                    .service(exam_attempts),
            )
    })
    .bind((config.web_server_host.as_str(), config.web_server_port))?
    .run()
    .await
}
