use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Sales Prediction API",
        version = "0.1.0",
        description = r#"
Formula-based sales prediction for demo dashboards.

`POST /predict` accepts one quarter of business inputs and returns:

- a headline sales estimate with a synthetic confidence score,
- five fixed what-if scenarios re-scored through the same formula,
- a six-quarter compounding forecast.

There is no learned model behind this API; the estimate is a documented
deterministic formula with bounded random jitter for demo realism.
        "#,
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        )
    ),
    servers(
        (url = "http://localhost:8000", description = "Local development")
    ),
    tags(
        (name = "Prediction", description = "Sales estimation endpoints"),
        (name = "Health", description = "Health check endpoints")
    ),
    paths(
        crate::handlers::predict::predict,
        crate::handlers::health::root,
    ),
    components(schemas(
        crate::handlers::predict::SalesRequest,
        crate::models::prediction::PredictionOutcome,
        crate::models::prediction::ScenarioOutcome,
        crate::models::prediction::ForecastPoint,
        crate::errors::ErrorResponse,
    ))
)]
pub struct ApiDoc;

/// Swagger UI mounted at `/docs`, spec served at `/api-docs/openapi.json`.
pub fn swagger_ui() -> SwaggerUi {
    SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi())
}
