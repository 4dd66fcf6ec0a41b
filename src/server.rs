//! HTTP surface: routing, locale resolution per request, and the contact post.

use crate::config::Config;
use crate::contact::{self, ContactOutcome, ContactSubmission};
use crate::i18n::{resolve_locale, Locale, LookupMetrics};
use crate::page::{render_page, ContactState};
use crate::preference;
use anyhow::{Context, Result};
use axum::{
    extract::{rejection::FormRejection, Path, State},
    http::{
        header::{ACCEPT_LANGUAGE, CONTENT_LANGUAGE, SET_COOKIE, VARY},
        HeaderMap, StatusCode,
    },
    response::{Html, IntoResponse, Redirect, Response},
    routing::get,
    Form, Json, Router,
};
use chrono::{NaiveDate, Utc};
use std::sync::Arc;
use std::time::Duration;
use tower_http::trace::TraceLayer;
use tracing::{debug, info, warn};

/// Shared, read-only state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub http: reqwest::Client,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.contact_timeout_secs))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            config: Arc::new(config),
            http,
        })
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(entry))
        .route("/health", get(health))
        .route("/lang/:locale", get(switch_language))
        .route("/:locale", get(page))
        .route("/:locale/", get(page))
        .route("/:locale/contact", get(page).post(submit_contact))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind the configured port and serve until Ctrl-C.
pub async fn serve(state: AppState) -> Result<()> {
    let addr = format!("0.0.0.0:{}", state.config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    info!("Listening on {}", addr);

    axum::serve(listener, router(state))
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            info!("Received shutdown signal");
        })
        .await
        .context("Server error")?;

    info!("Server shutdown complete");
    Ok(())
}

fn today() -> NaiveDate {
    Utc::now().date_naive()
}

fn accept_language(headers: &HeaderMap) -> Option<&str> {
    headers.get(ACCEPT_LANGUAGE).and_then(|value| value.to_str().ok())
}

/// Segments that look like file names (`favicon-32x32.png`, `site.webmanifest`)
/// are static assets, never a locale page.
fn is_asset_segment(segment: &str) -> bool {
    segment.contains('.')
}

fn html_response(locale: Locale, body: String) -> Response {
    ([(CONTENT_LANGUAGE, locale.code())], Html(body)).into_response()
}

/// `GET /`: a manual choice from this session wins, then the browser's
/// language preference.
async fn entry(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let locale = match preference::manual_choice(&headers, &state.config.preference_secret) {
        Some(locale) => {
            debug!(locale = %locale, "Entry redirect from manual choice");
            locale
        }
        None => {
            let locale = resolve_locale(None, accept_language(&headers));
            debug!(locale = %locale, "Entry redirect from Accept-Language");
            locale
        }
    };

    (
        [(VARY, "Accept-Language, Cookie")],
        Redirect::temporary(&locale.path()),
    )
        .into_response()
}

async fn page(
    State(state): State<AppState>,
    Path(segment): Path<String>,
    headers: HeaderMap,
) -> Response {
    if is_asset_segment(&segment) {
        return StatusCode::NOT_FOUND.into_response();
    }

    let locale = resolve_locale(Some(&segment), accept_language(&headers));
    let body = render_page(locale, &state.config, today(), &ContactState::Idle);
    html_response(locale, body)
}

async fn submit_contact(
    State(state): State<AppState>,
    Path(segment): Path<String>,
    headers: HeaderMap,
    form: Result<Form<ContactSubmission>, FormRejection>,
) -> Response {
    if is_asset_segment(&segment) {
        return StatusCode::NOT_FOUND.into_response();
    }

    let locale = resolve_locale(Some(&segment), accept_language(&headers));

    // An undecodable body is one more failed submission, not a framework error page
    let contact_state = match form {
        Ok(Form(submission)) => {
            match contact::submit(&state.http, &state.config, locale, &submission).await {
                ContactOutcome::Success => ContactState::Sent,
                ContactOutcome::Failure => ContactState::Failed(submission),
            }
        }
        Err(rejection) => {
            warn!(locale = %locale, "Contact form not decoded: {}", rejection.body_text());
            ContactState::Failed(ContactSubmission::default())
        }
    };

    let body = render_page(locale, &state.config, today(), &contact_state);
    html_response(locale, body)
}

/// `GET /lang/{locale}`: record the manual choice, then show that locale.
async fn switch_language(State(state): State<AppState>, Path(segment): Path<String>) -> Response {
    let locale = resolve_locale(Some(&segment), None);
    let cookie = preference::set_cookie_value(
        &state.config.preference_secret,
        locale,
        state.config.is_https(),
    );

    info!(locale = %locale, language = locale.name(), "Manual language choice");

    (
        [(SET_COOKIE, cookie)],
        Redirect::to(&format!("{}/", locale.path())),
    )
        .into_response()
}

async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "lookups": LookupMetrics::global().report(),
    }))
}
