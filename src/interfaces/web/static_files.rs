use super::response;
use super::state::AppState;
use crate::domain::storage::FsPath;
use axum::{
    extract::State,
    http::{Method, Uri},
    response::Response,
};
use tracing::{debug, warn};

/// Default document of a directory request such as `/docs/`.
const DIRECTORY_INDEX: &str = "index.htm";

/// ファイルシステム上の静的ファイルを提供するフォールバックハンドラ
///
/// Only `GET` and `HEAD` are served; everything else that reaches the fallback is a 404.
pub async fn static_file_handler(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
) -> Response {
    if method != Method::GET && method != Method::HEAD {
        debug!("No route for {} {}", method, uri.path());
        return response::not_found();
    }

    let mut request_path = match urlencoding::decode(uri.path()) {
        Ok(decoded) => decoded.into_owned(),
        Err(e) => {
            debug!("Undecodable path {}: {}", uri.path(), e);
            return response::not_found();
        }
    };
    if request_path.ends_with('/') {
        request_path.push_str(DIRECTORY_INDEX);
    }

    let path = match FsPath::parse(&request_path) {
        Ok(path) => path,
        Err(e) => {
            debug!("Rejected static path: {}", e);
            return response::not_found();
        }
    };

    match state.filesystem.read(&path) {
        Ok(Some(contents)) => {
            let mime = mime_guess::from_path(path.as_str()).first_or_octet_stream();
            debug!("Serving {} ({} bytes, {})", path, contents.len(), mime);
            response::file(contents, mime.as_ref())
        }
        Ok(None) => {
            debug!("File not found: {}", path);
            response::not_found()
        }
        Err(e) => {
            warn!("Failed to read {}: {}", path, e);
            response::not_found()
        }
    }
}
