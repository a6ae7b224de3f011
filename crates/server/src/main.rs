use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::header::CONTENT_TYPE;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use dotenvy::dotenv;
use prometheus::{Encoder, IntCounter, IntCounterVec, TextEncoder};
use tokio::signal;
use tower_http::services::ServeFile;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use specled_core::ControlForm;
use specled_runner::{CommandSink, RunnerConfig, ScriptRunner};

mod page;

#[derive(Clone)]
struct AppState {
    sink: Arc<dyn CommandSink>,
    runner_cfg: RunnerConfig,
    metrics: Arc<Metrics>,
}

struct Metrics {
    panel_requests: IntCounter,
    commands_dispatched: IntCounterVec, // label: event
    command_failures: IntCounter,
}

impl Metrics {
    fn new() -> Arc<Self> {
        let panel_requests = IntCounter::new(
            "specled_panel_requests_total",
            "Total control panel page requests",
        )
        .unwrap();
        let commands_dispatched = IntCounterVec::new(
            prometheus::Opts::new(
                "specled_commands_dispatched_total",
                "Control script invocations by event symbol",
            ),
            &["event"],
        )
        .unwrap();
        let command_failures = IntCounter::new(
            "specled_command_failures_total",
            "Control script invocations that failed to spawn",
        )
        .unwrap();

        let registry = prometheus::default_registry();
        let _ = registry.register(Box::new(panel_requests.clone()));
        let _ = registry.register(Box::new(commands_dispatched.clone()));
        let _ = registry.register(Box::new(command_failures.clone()));

        Arc::new(Self { panel_requests, commands_dispatched, command_failures })
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    init_tracing();

    let runner_cfg = RunnerConfig::from_env();
    tracing::info!(program = %runner_cfg.program, script = %runner_cfg.script, "Configuring control script runner");
    if !runner_cfg.script_exists() {
        tracing::warn!(script = %runner_cfg.script, "Control script not found; dispatches will fail until it appears");
    }

    let metrics = Metrics::new();
    let state = AppState {
        sink: Arc::new(ScriptRunner::new(runner_cfg.clone())),
        runner_cfg,
        metrics,
    };

    // Stylesheet lives next to the binary's crate by default
    let server_crate_dir = env!("CARGO_MANIFEST_DIR");
    let default_static_dir = PathBuf::from(server_crate_dir).join("static");
    let static_dir = std::env::var("SPECLED_STATIC_DIR")
        .unwrap_or_else(|_| default_static_dir.to_string_lossy().to_string());

    let app = Router::new()
        .route("/", get(panel))
        .route_service("/web.css", ServeFile::new(format!("{}/web.css", static_dir)))
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        .route("/version", get(version))
        .route("/metrics", get(metrics_handler))
        .with_state(state);

    let addr: SocketAddr = std::env::var("SPECLED_HTTP_ADDR")
        .unwrap_or_else(|_| "0.0.0.0:8080".to_string())
        .parse()
        .expect("Invalid SPECLED_HTTP_ADDR");

    info!(%addr, "Starting HTTP server");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info,axum=info,hyper=info"))
        .unwrap();
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        let mut term = signal(SignalKind::terminate()).expect("failed to install signal handler");
        term.recv().await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}

// ----- Panel -----

/// The one consolidated panel contract: dispatch every trigger present in the
/// query string, then re-render the page echoing the submitted slider values.
/// Always 200; a sink failure is logged and swallowed, never surfaced.
async fn panel(State(state): State<AppState>, Query(form): Query<ControlForm>) -> Html<String> {
    state.metrics.panel_requests.inc();
    dispatch_events(&form, state.sink.as_ref(), &state.metrics).await;
    Html(page::render_panel(&form))
}

/// Run each event through the sink in fixed panel order, one at a time.
async fn dispatch_events(form: &ControlForm, sink: &dyn CommandSink, metrics: &Metrics) {
    for event in form.events() {
        match sink.send(&event).await {
            Ok(()) => {
                metrics
                    .commands_dispatched
                    .with_label_values(&[event.symbol()])
                    .inc();
            }
            Err(e) => {
                warn!(?e, event = event.symbol(), "Control script dispatch failed");
                metrics.command_failures.inc();
            }
        }
    }
}

// ----- Observability -----

async fn healthz() -> &'static str {
    "ok"
}

async fn readyz(State(state): State<AppState>) -> StatusCode {
    if state.runner_cfg.script_exists() {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    }
}

async fn version() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "name": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

async fn metrics_handler() -> Response {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    let mut buf = Vec::new();
    match encoder.encode(&metric_families, &mut buf) {
        Ok(()) => Response::builder()
            .status(StatusCode::OK)
            .header(CONTENT_TYPE, encoder.format_type())
            .body(axum::body::Body::from(buf))
            .unwrap_or_else(|_| StatusCode::INTERNAL_SERVER_ERROR.into_response()),
        Err(_) => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
    }
}
