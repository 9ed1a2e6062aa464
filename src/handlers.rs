use crate::errors::AppError;
use crate::models::{CountResponse, CounterData};
use crate::state::AppState;
use crate::storage::persist_data;
use crate::ui::render_page;
use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse},
    Json,
};
use chrono::Local;
use tokio::fs;
use tracing::error;

pub const UPDATE_FAILED_MESSAGE: &str = "Failed to update visitor count";

pub async fn count_visit(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let count = record_visit(&state).await.map_err(|err| {
        error!("An error occurred: {}", err.message);
        AppError::internal_message(UPDATE_FAILED_MESSAGE)
    })?;

    Ok((
        [(header::ACCESS_CONTROL_ALLOW_ORIGIN, "*")],
        Json(CountResponse { count }),
    ))
}

pub async fn preflight() -> impl IntoResponse {
    (
        StatusCode::OK,
        [
            (header::ACCESS_CONTROL_ALLOW_ORIGIN, "*"),
            (header::ACCESS_CONTROL_ALLOW_METHODS, "GET, POST, OPTIONS"),
            (header::ACCESS_CONTROL_ALLOW_HEADERS, "Content-Type"),
            (header::ACCESS_CONTROL_MAX_AGE, "3600"),
        ],
    )
}

pub async fn page() -> Html<String> {
    Html(render_page())
}

pub async fn pkg_asset(
    State(state): State<AppState>,
    Path(file): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    if !is_plain_file_name(&file) {
        return Err(AppError::not_found("asset not found"));
    }

    let bytes = match fs::read(state.pkg_dir.join(&file)).await {
        Ok(bytes) => bytes,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return Err(AppError::not_found("asset not found"));
        }
        Err(err) => return Err(err.into()),
    };

    Ok(([(header::CONTENT_TYPE, content_type(&file))], bytes))
}

async fn record_visit(state: &AppState) -> Result<u64, AppError> {
    let mut data = state.data.lock().await;
    let updated = CounterData {
        count: data.count.saturating_add(1),
        updated_at: Some(Local::now().to_rfc3339()),
    };

    persist_data(&state.data_path, &updated).await?;

    let count = updated.count;
    *data = updated;
    Ok(count)
}

fn is_plain_file_name(file: &str) -> bool {
    !file.is_empty()
        && file != "."
        && file != ".."
        && !file.contains(['/', '\\'])
        && !file.starts_with('.')
}

fn content_type(file: &str) -> &'static str {
    match file.rsplit_once('.').map(|(_, ext)| ext) {
        Some("js") => "text/javascript",
        Some("wasm") => "application/wasm",
        Some("json") => "application/json",
        Some("ts") => "text/plain",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::CapturedLogs;

    #[tokio::test]
    async fn store_failure_reports_generic_error_and_logs_detail() {
        let (logs, _guard) = CapturedLogs::install();
        // A directory as the data path makes every write fail.
        let state = AppState::new(
            std::env::temp_dir(),
            std::env::temp_dir(),
            CounterData::default(),
        );

        let Err(err) = count_visit(State(state.clone())).await else {
            panic!("visit should fail when the counter cannot be written");
        };

        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.message, UPDATE_FAILED_MESSAGE);
        assert_eq!(logs.lines_containing("An error occurred:"), 1);
        assert_eq!(state.data.lock().await.count, 0);
    }

    #[test]
    fn asset_names_cannot_escape_pkg_dir() {
        assert!(is_plain_file_name("visitor_counter.js"));
        assert!(is_plain_file_name("visitor_counter_bg.wasm"));
        assert!(!is_plain_file_name(""));
        assert!(!is_plain_file_name(".."));
        assert!(!is_plain_file_name("../Cargo.toml"));
        assert!(!is_plain_file_name("nested/file.js"));
        assert!(!is_plain_file_name("..\\secret"));
        assert!(!is_plain_file_name(".hidden"));
    }

    #[test]
    fn wasm_bundle_content_types() {
        assert_eq!(content_type("visitor_counter.js"), "text/javascript");
        assert_eq!(content_type("visitor_counter_bg.wasm"), "application/wasm");
        assert_eq!(content_type("README"), "application/octet-stream");
    }
}
