use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use dotenv::dotenv;
use sqlx::PgPool;
use taskpad::{
    config::Config,
    repo::{TaskRepository, UserRepository},
    routes,
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init();

    let config = Config::from_env();

    let pool = PgPool::connect(&config.database_url)
        .await
        .expect("Failed to connect to database");

    sqlx::migrate!()
        .run(&pool)
        .await
        .expect("Failed to run database migrations");

    let task_repo = TaskRepository::new(pool.clone());
    let user_repo = UserRepository::new(pool, config.bcrypt_cost);

    log::info!("Starting Taskpad server at {}", config.server_url());

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(task_repo.clone()))
            .app_data(web::Data::new(user_repo.clone()))
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header()
                    .max_age(3600),
            )
            .wrap(Logger::default())
            .service(routes::health::health)
            .configure(routes::config)
    })
    .bind((config.server_host.as_str(), config.server_port))?
    .run()
    .await
}
