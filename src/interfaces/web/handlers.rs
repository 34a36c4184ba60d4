use super::models::{FileEntryDto, SysInfoDto};
use super::response;
use super::state::AppState;
use crate::application::use_cases::ShowSystemInfoUseCase;
use crate::domain::storage::FsPath;
use axum::{extract::State, response::Response};
use tracing::{debug, warn};

/// Start page served when it exists.
pub const INDEX_PAGE: &str = "/index.htm";

/// Redirect target when the filesystem has no start page yet.
pub const UPDATE_PAGE: &str = "/$update.htm";

/// `GET /`: redirect to the start page, or to the update page when there is none.
pub async fn redirect_home(State(state): State<AppState>) -> Response {
    let has_index = FsPath::parse(INDEX_PAGE)
        .and_then(|path| state.filesystem.exists(&path))
        .unwrap_or_else(|e| {
            debug!("Existence check for {} failed: {}", INDEX_PAGE, e);
            false
        });

    response::redirect(if has_index { INDEX_PAGE } else { UPDATE_PAGE })
}

/// `GET /$list`: every file of the filesystem root. Order is not defined.
pub async fn list_files(State(state): State<AppState>) -> Response {
    let entries: Vec<FileEntryDto> = match state.filesystem.list() {
        Ok(entries) => entries.into_iter().map(FileEntryDto::from).collect(),
        Err(e) => {
            warn!("Failed to list files: {}", e);
            Vec::new()
        }
    };

    response::json_no_cache(entries)
}

/// `GET /$sysinfo`
pub async fn system_info(State(state): State<AppState>) -> Response {
    let info = ShowSystemInfoUseCase::new(state.filesystem.clone(), state.platform.clone())
        .collect();

    response::json_no_cache(SysInfoDto::from(info))
}
