//! REST API server for phone formatting.
//!
//! # Usage
//!
//! ```bash
//! # Start server
//! phonefmt-server
//!
//! # With custom port and country table
//! phonefmt-server --port 8080 --countries countries.json
//!
//! # Same, via environment
//! PHONEFMT_PORT=8080 PHONEFMT_COUNTRIES=countries.json phonefmt-server
//! ```
//!
//! # Swagger UI
//!
//! Visit http://localhost:3000/swagger-ui/ for interactive API documentation.

use axum::{
    extract::{Query, State},
    http::{header, Method, StatusCode},
    response::Json,
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::{IntoParams, OpenApi, ToSchema};
use utoipa_swagger_ui::SwaggerUi;

use phone_format::registry::{CountryCatalog, CountryTable, JsonCountryLoader};
use phone_format::{format, validate, CountryPhoneSpec};

// ============================================================================
// OpenAPI Documentation
// ============================================================================

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Phone Format API",
        version = "0.1.0",
        description = "Country-aware phone number formatting and completeness checks.",
        license(name = "MIT"),
        contact(name = "API Support")
    ),
    tags(
        (name = "Countries", description = "Supported country catalog"),
        (name = "Formatting", description = "Normalization and display formatting"),
        (name = "Validation", description = "Completeness checks"),
        (name = "System", description = "Health and status endpoints")
    ),
    paths(
        list_countries,
        lookup_country,
        normalize,
        format_number,
        validate_number,
        validate_batch,
        health,
    ),
    components(schemas(
        CountryResponse,
        LookupQuery,
        NormalizeRequest,
        NormalizeResponse,
        FormatRequest,
        FormatResponse,
        ValidateRequest,
        ValidateResponse,
        BatchValidateRequest,
        BatchValidateResponse,
        BatchSummary,
        HealthResponse,
    ))
)]
struct ApiDoc;

// ============================================================================
// Configuration
// ============================================================================

const DEFAULT_PORT: u16 = 3000;

struct Config {
    port: u16,
    countries: Option<String>,
}

impl Config {
    /// Command-line flags win over environment variables.
    fn from_env_and_args() -> Self {
        let args: Vec<String> = std::env::args().collect();
        let flag = |name: &str| {
            args.iter()
                .skip_while(|a| a.as_str() != name)
                .nth(1)
                .cloned()
        };

        let port = flag("--port")
            .or_else(|| std::env::var("PHONEFMT_PORT").ok())
            .and_then(|p| p.parse().ok())
            .unwrap_or(DEFAULT_PORT);

        let countries = flag("--countries").or_else(|| std::env::var("PHONEFMT_COUNTRIES").ok());

        Self { port, countries }
    }
}

type AppState = Arc<CountryTable>;

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Serialize, ToSchema)]
#[schema(example = json!({
    "calling_code": "+91",
    "iso_country": "IN",
    "display_name": "India",
    "symbol": "🇮🇳",
    "format_template": "#####-#####",
    "placeholder_example": "98765-43210",
    "max_significant_digits": 10
}))]
struct CountryResponse {
    /// International calling code including the leading +
    calling_code: String,
    /// Two-letter country identifier
    iso_country: String,
    /// Human-readable name
    display_name: String,
    /// Flag glyph
    symbol: String,
    /// Display shape, # marks a digit
    format_template: String,
    /// Example formatted number
    placeholder_example: String,
    /// Digits required for a complete number
    max_significant_digits: usize,
}

impl From<&CountryPhoneSpec> for CountryResponse {
    fn from(spec: &CountryPhoneSpec) -> Self {
        Self {
            calling_code: spec.calling_code().to_string(),
            iso_country: spec.iso_country().to_string(),
            display_name: spec.display_name().to_string(),
            symbol: spec.symbol().to_string(),
            format_template: spec.format_template().to_string(),
            placeholder_example: spec.placeholder_example().to_string(),
            max_significant_digits: spec.max_significant_digits(),
        }
    }
}

#[derive(Deserialize, ToSchema, IntoParams)]
struct LookupQuery {
    /// Calling code, e.g. +1 (URL-encode the plus as %2B)
    calling_code: String,
    /// Optional ISO country to disambiguate shared calling codes
    iso_country: Option<String>,
}

#[derive(Deserialize, ToSchema)]
#[schema(example = json!({"raw": "+1 (555) 123-4567"}))]
struct NormalizeRequest {
    /// Arbitrary user input
    raw: String,
}

#[derive(Serialize, ToSchema)]
struct NormalizeResponse {
    /// ASCII digits of the input, in order
    digits: String,
}

#[derive(Deserialize, ToSchema)]
#[schema(example = json!({"digits": "5551234", "calling_code": "+1"}))]
struct FormatRequest {
    /// Number to format; separators are ignored
    digits: String,
    /// Calling code of the country
    calling_code: String,
    /// Optional ISO country
    iso_country: Option<String>,
}

#[derive(Serialize, ToSchema)]
struct FormatResponse {
    /// Display string
    formatted: String,
    /// Canonical digits after truncation
    digits: String,
    /// Whether the country was found. Unknown countries format as plain digits.
    known_country: bool,
}

#[derive(Deserialize, ToSchema)]
#[schema(example = json!({"digits": "98765 43210", "calling_code": "+91"}))]
struct ValidateRequest {
    /// Number to check
    digits: String,
    /// Calling code of the country
    calling_code: String,
    /// Optional ISO country
    iso_country: Option<String>,
}

#[derive(Serialize, ToSchema)]
#[schema(example = json!({
    "valid": true,
    "formatted": "98765-43210",
    "e164": "+919876543210"
}))]
struct ValidateResponse {
    /// Whether the number is complete for the country
    valid: bool,
    /// Display string when complete
    #[serde(skip_serializing_if = "Option::is_none")]
    formatted: Option<String>,
    /// E.164 rendering when complete
    #[serde(skip_serializing_if = "Option::is_none")]
    e164: Option<String>,
    /// User-facing reason when incomplete
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

#[derive(Deserialize, ToSchema)]
#[schema(example = json!({"numbers": ["5551234567", "555"], "calling_code": "+1"}))]
struct BatchValidateRequest {
    /// Numbers to check against one country
    numbers: Vec<String>,
    /// Calling code of the country
    calling_code: String,
    /// Optional ISO country
    iso_country: Option<String>,
}

#[derive(Serialize, ToSchema)]
struct BatchValidateResponse {
    /// Result per input, in order
    results: Vec<ValidateResponse>,
    /// Summary statistics
    summary: BatchSummary,
}

#[derive(Serialize, ToSchema)]
struct BatchSummary {
    /// Total numbers processed
    total: usize,
    /// Number of complete numbers
    valid: usize,
    /// Number of incomplete numbers
    invalid: usize,
}

#[derive(Serialize, ToSchema)]
struct HealthResponse {
    /// Service status
    status: String,
    /// API version
    version: String,
    /// Countries being served
    countries: usize,
}

// ============================================================================
// Handlers
// ============================================================================

/// List supported countries in display order
#[utoipa::path(
    get,
    path = "/countries",
    responses(
        (status = 200, description = "Country catalog", body = [CountryResponse])
    ),
    tag = "Countries"
)]
async fn list_countries(State(table): State<AppState>) -> Json<Vec<CountryResponse>> {
    Json(table.iter().map(CountryResponse::from).collect())
}

/// Look up a country by calling code
#[utoipa::path(
    get,
    path = "/lookup",
    params(LookupQuery),
    responses(
        (status = 200, description = "Country found", body = CountryResponse),
        (status = 404, description = "No such country")
    ),
    tag = "Countries"
)]
async fn lookup_country(
    State(table): State<AppState>,
    Query(query): Query<LookupQuery>,
) -> Result<Json<CountryResponse>, (StatusCode, String)> {
    table
        .lookup(&query.calling_code, query.iso_country.as_deref())
        .map(|c| Json(CountryResponse::from(c)))
        .ok_or_else(|| {
            (
                StatusCode::NOT_FOUND,
                format!("Unknown country: {}", query.calling_code),
            )
        })
}

/// Strip everything but digits
#[utoipa::path(
    post,
    path = "/normalize",
    request_body = NormalizeRequest,
    responses(
        (status = 200, description = "Normalized digits", body = NormalizeResponse)
    ),
    tag = "Formatting"
)]
async fn normalize(Json(req): Json<NormalizeRequest>) -> Json<NormalizeResponse> {
    Json(NormalizeResponse {
        digits: format::normalize_digits(&req.raw),
    })
}

/// Format a number for display
#[utoipa::path(
    post,
    path = "/format",
    request_body = FormatRequest,
    responses(
        (status = 200, description = "Formatted number", body = FormatResponse)
    ),
    tag = "Formatting"
)]
async fn format_number(
    State(table): State<AppState>,
    Json(req): Json<FormatRequest>,
) -> Json<FormatResponse> {
    match table.lookup(&req.calling_code, req.iso_country.as_deref()) {
        Some(country) => {
            let formatted = format::format_for_display(&req.digits, country);
            Json(FormatResponse {
                digits: format::normalize_digits(&formatted),
                formatted,
                known_country: true,
            })
        }
        None => {
            let digits = format::normalize_digits(&req.digits);
            Json(FormatResponse {
                formatted: digits.clone(),
                digits,
                known_country: false,
            })
        }
    }
}

/// Check that a number is complete
#[utoipa::path(
    post,
    path = "/validate",
    request_body = ValidateRequest,
    responses(
        (status = 200, description = "Validation result", body = ValidateResponse)
    ),
    tag = "Validation"
)]
async fn validate_number(
    State(table): State<AppState>,
    Json(req): Json<ValidateRequest>,
) -> Json<ValidateResponse> {
    let country = table.lookup(&req.calling_code, req.iso_country.as_deref());
    Json(validate_one(&req.digits, country))
}

/// Check many numbers against one country
#[utoipa::path(
    post,
    path = "/validate/batch",
    request_body = BatchValidateRequest,
    responses(
        (status = 200, description = "Batch validation results", body = BatchValidateResponse)
    ),
    tag = "Validation"
)]
async fn validate_batch(
    State(table): State<AppState>,
    Json(req): Json<BatchValidateRequest>,
) -> Json<BatchValidateResponse> {
    let country = table.lookup(&req.calling_code, req.iso_country.as_deref());
    let results: Vec<ValidateResponse> = req
        .numbers
        .iter()
        .map(|n| validate_one(n, country))
        .collect();

    let valid_count = results.iter().filter(|r| r.valid).count();
    tracing::debug!(total = results.len(), valid = valid_count, "batch validated");

    Json(BatchValidateResponse {
        summary: BatchSummary {
            total: results.len(),
            valid: valid_count,
            invalid: results.len() - valid_count,
        },
        results,
    })
}

/// Health check
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    ),
    tag = "System"
)]
async fn health(State(table): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        countries: table.len(),
    })
}

// ============================================================================
// Helpers
// ============================================================================

fn validate_one(digits: &str, country: Option<&CountryPhoneSpec>) -> ValidateResponse {
    match validate(digits, country) {
        Ok(phone) => ValidateResponse {
            valid: true,
            formatted: Some(phone.formatted()),
            e164: Some(phone.e164()),
            error: None,
        },
        Err(e) => ValidateResponse {
            valid: false,
            formatted: None,
            e164: None,
            error: Some(e.to_string()),
        },
    }
}

fn load_table(config: &Config) -> Result<CountryTable, phone_format::registry::RegistryError> {
    match &config.countries {
        Some(path) => {
            let table = JsonCountryLoader::from_file(path)?;
            tracing::info!(path = %path, countries = table.len(), "Loaded country table");
            Ok(table)
        }
        None => Ok(CountryTable::builtin()),
    }
}

// ============================================================================
// Main
// ============================================================================

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env_and_args();
    let table = load_table(&config).map_err(|e| {
        tracing::error!(error = %e, "Failed to load country table");
        e
    })?;
    let state: AppState = Arc::new(table);

    // CORS configuration
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .allow_origin(Any);

    // Build router with Swagger UI
    let app = Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .route("/countries", get(list_countries))
        .route("/lookup", get(lookup_country))
        .route("/normalize", post(normalize))
        .route("/format", post(format_number))
        .route("/validate", post(validate_number))
        .route("/validate/batch", post(validate_batch))
        .route("/health", get(health))
        .with_state(state)
        .layer(cors)
        .layer(tower_http::trace::TraceLayer::new_for_http());

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Starting server on http://{}", addr);
    tracing::info!(
        "Swagger UI available at http://{}:{}/swagger-ui/",
        "localhost",
        config.port
    );

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
