use std::sync::Arc;

use axum::{
    extract::State,
    http::Uri,
    routing::{get, post},
    Json, Router,
};
use percent_encoding::percent_decode_str;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::catalog::{EnhancementType, TargetLanguage};
use crate::generator::TextGenerator;
use crate::response::ApiResponse;
use crate::service;

#[derive(OpenApi)]
#[openapi(
    paths(root, translate, enhance),
    components(schemas(ApiResponse, TargetLanguage, EnhancementType)),
    tags(
        (name = "ExpressAbleAI", description = "Translate and enhance text with Gemini")
    )
)]
pub struct ApiDoc;

/// Shared, read-only state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub generator: Arc<dyn TextGenerator>,
}

impl AppState {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self { generator }
    }
}

/// Build the HTTP router, including the Swagger UI at `/docs` and the
/// schema at `/openapi.json`.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(SwaggerUi::new("/docs").url("/openapi.json", ApiDoc::openapi()))
        .route("/", get(root))
        .route("/translate/:text/:target_language", post(translate))
        .route("/enhance/:text/:enhancement_type", post(enhance))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Last two segments of the request path, percent-decoded.
///
/// Bytes that are not valid UTF-8 become U+FFFD instead of failing the
/// request, so a malformed parameter still gets an `Error` body.
fn trailing_params(uri: &Uri) -> (String, String) {
    let mut segments = uri.path().rsplit('/');
    let last = segments.next().unwrap_or_default();
    let first = segments.next().unwrap_or_default();
    (decode_segment(first), decode_segment(last))
}

fn decode_segment(raw: &str) -> String {
    percent_decode_str(raw).decode_utf8_lossy().into_owned()
}

#[utoipa::path(
    get,
    path = "/",
    responses((status = 200, description = "Welcome message", body = ApiResponse)),
    tag = "ExpressAbleAI"
)]
async fn root() -> Json<ApiResponse> {
    Json(ApiResponse::welcome())
}

#[utoipa::path(
    post,
    path = "/translate/{text}/{target_language}",
    params(
        ("text" = String, Path, description = "The text to be translated."),
        ("target_language" = TargetLanguage, Path, description = "[Spanish, French, English, Arabic]")
    ),
    responses(
        (status = 200, description = "`translated_text` on success, `Error` otherwise", body = ApiResponse)
    ),
    tag = "ExpressAbleAI"
)]
async fn translate(State(state): State<AppState>, uri: Uri) -> Json<ApiResponse> {
    let (text, target_language) = trailing_params(&uri);
    Json(service::translate(state.generator.as_ref(), &text, &target_language).await)
}

#[utoipa::path(
    post,
    path = "/enhance/{text}/{enhancement_type}",
    params(
        ("text" = String, Path, description = "The text to be enhanced."),
        ("enhancement_type" = EnhancementType, Path, description = "[Formal, Friendly, Concise, Detailed]")
    ),
    responses(
        (status = 200, description = "`enhanced_text` on success, `Error` otherwise", body = ApiResponse)
    ),
    tag = "ExpressAbleAI"
)]
async fn enhance(State(state): State<AppState>, uri: Uri) -> Json<ApiResponse> {
    let (text, enhancement_type) = trailing_params(&uri);
    Json(service::enhance(state.generator.as_ref(), &text, &enhancement_type).await)
}
