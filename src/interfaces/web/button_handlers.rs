use super::response;
use super::state::AppState;
use crate::domain::device::{ButtonId, parse_button_value};
use axum::{
    extract::{Query, State, rejection::QueryRejection},
    response::Response,
};
use tracing::{debug, info, warn};

/// Page the button endpoints redirect back to.
pub const BUTTON_PAGE: &str = "/button.htm";

/// Query arguments in request order. A malformed query string is not an error for
/// these endpoints; it is handled as if no arguments were sent.
pub type QueryArgs = Result<Query<Vec<(String, String)>>, QueryRejection>;

fn into_args(query: QueryArgs) -> Vec<(String, String)> {
    match query {
        Ok(Query(args)) => args,
        Err(e) => {
            warn!("Ignoring malformed query string: {}", e);
            Vec::new()
        }
    }
}

/// Stored mode: applies `B1` / `B2` to the device state and redirects with both flags.
///
/// Values other than `"0"` and `"1"` switch the button off.
pub async fn set_buttons(State(state): State<AppState>, query: QueryArgs) -> Response {
    let args = into_args(query);

    // write and read back under one guard
    let location = {
        let mut device = state.device.lock().await;
        for (name, value) in &args {
            let Some(button) = ButtonId::from_arg_name(name) else {
                debug!("Ignoring unknown button argument {:?}", name);
                continue;
            };

            let pressed = parse_button_value(button, value).unwrap_or_else(|e| {
                warn!("{}, treating as \"0\"", e);
                false
            });
            device.set(button, pressed);
            info!("Button {} is set to: {}", button.number(), pressed);
        }

        format!("{}?{}", BUTTON_PAGE, device.to_query())
    };

    response::redirect(&location)
}

/// Echo mode: sends the first query argument straight back without storing it.
pub async fn echo_button(button: ButtonId, query: QueryArgs) -> Response {
    let args = into_args(query);

    let location = match args.first() {
        Some((name, value)) => {
            info!("Button {} is set to: {}", button.number(), value);
            format!(
                "{}?{}={}",
                BUTTON_PAGE,
                urlencoding::encode(name),
                urlencoding::encode(value)
            )
        }
        None => {
            debug!("Button {} request without arguments", button.number());
            BUTTON_PAGE.to_string()
        }
    };

    response::redirect(&location)
}
