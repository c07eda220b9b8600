// 🌐 Web API - Axum routes behind the browser form
// Each request builds its own form state; the server holds no BMI state between calls

use crate::bmi::BmiCategory;
use crate::form::BmiForm;
use crate::tips::tips_for;
use axum::{
    extract::Path,
    http::StatusCode,
    response::{Html, IntoResponse, Json},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// API Response wrapper
#[derive(Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: T,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
            error: None,
        }
    }

    fn err(data: T, message: impl Into<String>) -> Self {
        Self {
            success: false,
            data,
            error: Some(message.into()),
        }
    }
}

/// Raw form text, parsed exactly like the terminal inputs
#[derive(Debug, Default, Deserialize)]
pub struct BmiRequest {
    #[serde(default)]
    pub weight: String,
    #[serde(default)]
    pub height: String,
}

#[derive(Debug, Serialize)]
pub struct BmiResponse {
    /// None when the value isn't finite (JSON has no infinity)
    pub bmi: Option<f64>,
    pub display: String,
    pub category: BmiCategory,
    pub tips: Vec<&'static str>,
}

#[derive(Debug, Serialize)]
pub struct TipsResponse {
    pub category: BmiCategory,
    pub title: &'static str,
    pub tips: Vec<&'static str>,
}

// ============================================================================
// Handlers
// ============================================================================

/// GET / - Serve the form page
async fn serve_index() -> impl IntoResponse {
    Html(include_str!("../web/index.html"))
}

/// GET /api/health - Health check
async fn health_check() -> impl IntoResponse {
    Json(ApiResponse::ok("OK"))
}

/// POST /api/bmi - Calculate from raw form text; data is null when the input doesn't parse
async fn calculate(Json(req): Json<BmiRequest>) -> impl IntoResponse {
    let mut form = BmiForm::new();
    form.set_weight(req.weight);
    form.set_height(req.height);

    if !form.calculate() {
        tracing::debug!("Ignoring incomplete measurement");
        return Json(ApiResponse::<Option<BmiResponse>>::ok(None));
    }

    let response = form.result().map(|result| BmiResponse {
        bmi: Some(result.value).filter(|v| v.is_finite()),
        display: result.display_value(),
        category: result.category,
        tips: form.recommendations().to_vec(),
    });

    Json(ApiResponse::ok(response))
}

/// GET /api/tips/:category - Static tips for one category
async fn get_tips(Path(category): Path<String>) -> impl IntoResponse {
    match BmiCategory::parse(&category) {
        Some(category) => {
            let response = TipsResponse {
                category,
                title: crate::tips::RECOMMENDATIONS_TITLE,
                tips: tips_for(category).to_vec(),
            };
            (StatusCode::OK, Json(ApiResponse::ok(Some(response)))).into_response()
        }
        None => {
            tracing::warn!("Unknown category requested: {}", category);
            (
                StatusCode::NOT_FOUND,
                Json(ApiResponse::<Option<TipsResponse>>::err(
                    None,
                    format!("unknown category: {}", category),
                )),
            )
                .into_response()
        }
    }
}

/// Full application router: page + JSON API
pub fn router() -> Router {
    let api_routes = Router::new()
        .route("/health", get(health_check))
        .route("/bmi", post(calculate))
        .route("/tips/:category", get(get_tips));

    Router::new()
        .route("/", get(serve_index))
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

// ============================================================================
// TESTS
// ============================================================================
