pub mod application;
pub mod db;
pub mod domain;
pub mod errors;
pub mod handlers;
pub mod infrastructure;
pub mod schema;
pub mod seed;

use actix_web::{middleware::Logger, web, App, HttpServer};
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use application::return_service::ReturnService;
use infrastructure::artifact::{Base64QrImageProducer, LabelLinkRenderer};
use infrastructure::return_repo::DieselReturnStore;

pub use db::{create_pool, DbPool};

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// The concrete service wired into the HTTP layer.
pub type AppReturnService = ReturnService<DieselReturnStore, Base64QrImageProducer, LabelLinkRenderer>;

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::returns::create_return,
        handlers::returns::get_return,
        handlers::returns::get_customer_returns,
        handlers::returns::update_return_status,
        handlers::returns::health,
    ),
    components(schemas(
        handlers::returns::CreateReturnRequest,
        handlers::returns::ReturnItemRequest,
        handlers::returns::ReturnResponse,
        domain::returns::ReturnReason,
        domain::returns::ReturnMethod,
        domain::returns::ReturnStatus,
    )),
    tags((name = "returns", description = "Merchandise return management"))
)]
struct ApiDoc;

/// Run any pending Diesel migrations against the pool's database.
pub fn run_migrations(pool: &DbPool) {
    let mut conn = pool.get().expect("Failed to get DB connection for migrations");
    conn.run_pending_migrations(MIGRATIONS)
        .expect("Failed to run database migrations");
}

/// Build and return an actix-web `Server` bound to `host:port`.
///
/// The caller is responsible for `.await`-ing (or `tokio::spawn`-ing) the
/// returned server.
pub fn build_server(
    pool: DbPool,
    host: &str,
    port: u16,
) -> std::io::Result<actix_web::dev::Server> {
    let service = web::Data::new(ReturnService::new(
        DieselReturnStore::new(pool),
        Base64QrImageProducer,
        LabelLinkRenderer::default(),
    ));

    Ok(HttpServer::new(move || {
        App::new()
            .app_data(service.clone())
            .wrap(Logger::default())
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", ApiDoc::openapi()),
            )
            .service(
                web::scope("/returns")
                    .route("", web::post().to(handlers::returns::create_return))
                    .route("/health", web::get().to(handlers::returns::health))
                    .route(
                        "/customer/{customerId}",
                        web::get().to(handlers::returns::get_customer_returns),
                    )
                    .route("/{rmaNumber}", web::get().to(handlers::returns::get_return))
                    .route(
                        "/{rmaNumber}/status",
                        web::put().to(handlers::returns::update_return_status),
                    ),
            )
    })
    .bind((host.to_string(), port))?
    .run())
}
