//! REST surface over the note service.
//!
//! Routes:
//! - `POST   /notes`       create a note
//! - `GET    /notes`       list notes without content, `?sort=` optional
//! - `DELETE /notes`       delete every id in `{"ids": [...]}`
//! - `GET    /notes/{id}`  fetch one note
//! - `PATCH  /notes/{id}`  partial update
//! - `DELETE /notes/{id}`  delete one note
//! - `GET    /health`
//! - `GET    /api`                     Swagger UI
//! - `GET    /api-docs/openapi.json`   OpenAPI document

pub mod error;
pub mod routes;
pub mod validation;

use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::config::Config;
use crate::entity::{Note, NoteSummary};
use crate::error::Result;
use crate::repository::{FileNoteRepository, NoteRepository};
use crate::service::NoteService;
use crate::storage::JsonFileStore;

pub use error::ApiError;

pub const OPENAPI_PATH: &str = "/api-docs/openapi.json";

/// OpenAPI document generated from the handler annotations.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "quicknotes",
        description = "Text notes stored in a single JSON file"
    ),
    paths(
        routes::create_note,
        routes::list_notes,
        routes::get_note,
        routes::update_note,
        routes::delete_note,
        routes::delete_notes,
        routes::health,
    ),
    components(schemas(
        Note,
        NoteSummary,
        validation::CreateNoteRequest,
        validation::UpdateNoteRequest,
        validation::DeleteManyRequest,
        routes::HealthStatus,
        error::ErrorBody,
    )),
    tags(
        (name = "notes", description = "Create, list, read, update and delete notes"),
        (name = "health", description = "Liveness")
    )
)]
pub struct ApiDoc;

/// Shared state handed to every handler.
pub struct AppState<R> {
    pub service: Arc<NoteService<R>>,
}

impl<R> Clone for AppState<R> {
    fn clone(&self) -> Self {
        Self {
            service: Arc::clone(&self.service),
        }
    }
}

pub fn router<R: NoteRepository + 'static>(service: Arc<NoteService<R>>) -> Router {
    let state = AppState { service };

    Router::new()
        .route(
            "/notes",
            get(routes::list_notes::<R>)
                .post(routes::create_note::<R>)
                .delete(routes::delete_notes::<R>),
        )
        .route(
            "/notes/{id}",
            get(routes::get_note::<R>)
                .patch(routes::update_note::<R>)
                .delete(routes::delete_note::<R>),
        )
        .route("/health", get(routes::health::<R>))
        .with_state(state)
        .merge(SwaggerUi::new("/api").url(OPENAPI_PATH, ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
}

/// Composition root: store → repository → service → router.
pub fn build_service(config: &Config) -> NoteService<FileNoteRepository> {
    let store = JsonFileStore::new(&config.data_file).with_policy(config.read_policy);
    NoteService::new(FileNoteRepository::new(store))
}

/// Bind `config.bind` and serve until Ctrl-C.
pub async fn serve(config: &Config) -> Result<()> {
    let service = Arc::new(build_service(config));
    let app = router(service);

    let listener = TcpListener::bind(&config.bind).await?;
    tracing::info!(
        addr = %listener.local_addr()?,
        data_file = %config.data_file.display(),
        read_policy = %config.read_policy,
        "notes API listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
