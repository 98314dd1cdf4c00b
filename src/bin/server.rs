use axum::{
    Json, Router,
    extract::rejection::JsonRejection,
    http::StatusCode,
    routing::{get, post},
};
use beam_cutter::error::PackingFailure;
use beam_cutter::input::{validate_requirements, validate_stock};
use beam_cutter::solver::Solver;
use beam_cutter::types::{Bin, PlanSummary, RequirementGroup, StockGroup};
use serde::{Deserialize, Serialize};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

#[derive(Deserialize, Serialize)]
struct OptimizeRequest {
    #[serde(default = "default_stock")]
    stock: Vec<StockGroup>,
    cuts: Vec<RequirementGroup>,
}

fn default_stock() -> Vec<StockGroup> {
    vec![StockGroup::default()]
}

#[derive(Serialize)]
struct OptimizeResponse {
    bins: Vec<Bin>,
    summary: PlanSummary,
}

#[derive(Serialize)]
struct ErrorResponse {
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    failure: Option<PackingFailure>,
}

type ApiError = (StatusCode, Json<ErrorResponse>);

fn bad_request(message: String) -> ApiError {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            message,
            failure: None,
        }),
    )
}

async fn optimize(
    payload: Result<Json<OptimizeRequest>, JsonRejection>,
) -> Result<Json<OptimizeResponse>, ApiError> {
    // Malformed bodies are bad input, not an impossible plan
    let Json(req) = payload.map_err(|rejection| bad_request(rejection.body_text()))?;
    tracing::info!(
        body = serde_json::to_string(&req).unwrap_or_default(),
        "POST /optimize"
    );

    validate_stock(&req.stock).map_err(|e| bad_request(e.to_string()))?;
    validate_requirements(&req.cuts).map_err(|e| bad_request(e.to_string()))?;

    let solver = Solver::new(req.stock, req.cuts);
    let plan = solver.solve().map_err(|failure| {
        (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(ErrorResponse {
                message: failure.to_string(),
                failure: Some(failure),
            }),
        )
    })?;

    let summary = plan.summary();
    Ok(Json(OptimizeResponse {
        bins: plan.bins,
        summary,
    }))
}

fn app() -> Router {
    Router::new()
        .route("/up", get(|| async { "ok" }))
        .route("/optimize", post(optimize))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
}

fn main() -> std::io::Result<()> {
    // Sentry has to be up before the runtime starts; a missing DSN disables it
    let _sentry = sentry::init((
        std::env::var("SENTRY_DSN").ok(),
        sentry::ClientOptions {
            release: sentry::release_name!(),
            ..Default::default()
        },
    ));

    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open("development.log")?;

    tracing_subscriber::fmt()
        .with_writer(log_file)
        .with_target(false)
        .with_ansi(false)
        .with_max_level(Level::INFO)
        .init();

    let port = std::env::var("PORT").unwrap_or_else(|_| "3001".to_string());
    let addr = format!("0.0.0.0:{port}");

    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(async {
            let listener = tokio::net::TcpListener::bind(&addr).await?;
            eprintln!("Listening on {addr}");
            axum::serve(listener, app()).await
        })
}
