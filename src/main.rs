use actix_cors::Cors;
use actix_web::middleware::Logger;
use actix_web::{web, App, HttpServer};
use todovault::auth::{AuthMiddleware, TokenKeys};
use todovault::config::Config;
use todovault::routes;
use todovault::store::{TodoStore, UserStore};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();
    env_logger::init();

    let config = Config::from_env();

    // Shared state is built once and injected into every worker; the stores
    // live for the lifetime of the process.
    let token_keys = web::Data::new(TokenKeys::from_secret(config.jwt_secret.as_bytes()));
    let todo_store = web::Data::new(TodoStore::new());
    let user_store = web::Data::new(UserStore::seeded());

    println!("Starting todovault server at {}", config.server_url());
    HttpServer::new(move || {
        App::new()
            .app_data(token_keys.clone())
            .app_data(todo_store.clone())
            .app_data(user_store.clone())
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header()
                    .max_age(3600),
            )
            .wrap(Logger::default())
            .service(routes::health::index)
            .service(routes::health::health)
            .service(
                web::scope("/api")
                    .wrap(AuthMiddleware)
                    .configure(routes::config),
            )
    })
    .bind((config.server_host.as_str(), config.server_port))?
    .run()
    .await
}
