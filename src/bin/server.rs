//! Bearing Solver HTTP Server

use axum::{
    extract::Json,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use tower_http::cors::{Any, CorsLayer};

use bearing_solver::prelude::*;

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: String,
    version: String,
}

#[derive(Debug, Deserialize)]
struct SolveRequest {
    bearing: BearingConfig,
    #[serde(default)]
    options: SolveOptionsData,
}

#[derive(Debug, Default, Deserialize)]
struct SolveOptionsData {
    /// Closed-form method; skipped when absent
    #[serde(default)]
    analytical: Option<AnalyticalMethod>,
    /// Numerical solver options; skipped when absent
    #[serde(default)]
    numerical: Option<NumericalOptions>,
    #[serde(default)]
    root_finding: RootFindingOptions,
    #[serde(default)]
    quadrature: Quadrature,
    /// Include the full pressure fields in the response
    #[serde(default)]
    include_fields: bool,
}

#[derive(Debug, Serialize)]
struct SolveResponse {
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    results: Option<ResultsData>,
}

#[derive(Debug, Serialize)]
struct ResultsData {
    summary: BearingSummary,
    #[serde(skip_serializing_if = "Option::is_none")]
    analytical_force: Option<OilFilmForce>,
    #[serde(skip_serializing_if = "Option::is_none")]
    numerical_force: Option<OilFilmForce>,
    #[serde(skip_serializing_if = "Option::is_none")]
    stiffness: Option<DynamicCoefficients>,
    #[serde(skip_serializing_if = "Option::is_none")]
    damping: Option<DynamicCoefficients>,
    #[serde(skip_serializing_if = "Option::is_none")]
    fields: Option<FieldsData>,
}

#[derive(Debug, Serialize)]
struct FieldsData {
    z: Vec<f64>,
    theta: Vec<f64>,
    /// Row-major [z][θ]
    analytical: Vec<Vec<f64>>,
    numerical: Vec<Vec<f64>>,
}

async fn health() -> impl IntoResponse {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

async fn solve(Json(request): Json<SolveRequest>) -> impl IntoResponse {
    let outcome = tokio::task::spawn_blocking(move || run_solve(request)).await;

    match outcome {
        Ok(Ok(results)) => (
            StatusCode::OK,
            Json(SolveResponse {
                success: true,
                error: None,
                results: Some(results),
            }),
        ),
        Ok(Err(e)) => (
            StatusCode::BAD_REQUEST,
            Json(SolveResponse {
                success: false,
                error: Some(e.to_string()),
                results: None,
            }),
        ),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(SolveResponse {
                success: false,
                error: Some(format!("solve task failed: {e}")),
                results: None,
            }),
        ),
    }
}

fn run_solve(request: SolveRequest) -> BearingResult<ResultsData> {
    let options = request.options;
    let mut bearing = JournalBearing::with_options(request.bearing, options.root_finding)?;

    let analytical_force = options.analytical.map(|method| {
        bearing.solve_analytical(method);
        bearing.oil_film_force_with(FieldSource::Analytical, options.quadrature)
    });

    let numerical_force = match options.numerical {
        Some(numerical) => {
            bearing.solve_numerical_with(numerical)?;
            Some(bearing.oil_film_force_with(FieldSource::Numerical, options.quadrature))
        }
        None => None,
    };

    // Coefficients are undefined for a centred journal
    let (stiffness, damping) = if bearing.eccentricity_ratio() > 0.0 {
        (Some(bearing.stiffness_matrix()?), Some(bearing.damping_matrix()?))
    } else {
        (None, None)
    };

    let fields = options.include_fields.then(|| FieldsData {
        z: bearing.z_coords(),
        theta: bearing.theta_coords(),
        analytical: rows(bearing.p_mat_analytical()),
        numerical: rows(bearing.p_mat_numerical()),
    });

    Ok(ResultsData {
        summary: bearing.summary(),
        analytical_force,
        numerical_force,
        stiffness,
        damping,
        fields,
    })
}

fn rows(field: &bearing_solver::math::Mat) -> Vec<Vec<f64>> {
    field
        .row_iter()
        .map(|row| row.iter().copied().collect())
        .collect()
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        .route("/health", get(health))
        .route("/api/v1/solve", post(solve))
        .layer(cors);

    let addr = SocketAddr::from(([0, 0, 0, 0], 8087));
    println!("Bearing Solver Server listening on http://{}", addr);
    println!("  Health check: GET  /health");
    println!("  Solve:        POST /api/v1/solve");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
