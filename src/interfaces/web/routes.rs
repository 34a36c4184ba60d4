//! Fixed route table of the device.
//!
//! Routes are plain data built once per button mode. The server turns each entry
//! into an axum route; anything not in the table falls through to the static
//! file handler.

use super::button_handlers::QueryArgs;
use super::state::AppState;
use super::{echo_button, list_files, redirect_home, set_buttons, system_info};
use crate::domain::device::{ButtonId, ButtonMode};
use axum::handler::Handler;
use axum::routing::{MethodRouter, any, get};
use std::collections::HashSet;
use std::fmt;
use thiserror::Error;

pub const HOME_PATH: &str = "/";
pub const LIST_PATH: &str = "/$list";
pub const SYSINFO_PATH: &str = "/$sysinfo";
pub const BUTTON_PUSH_PATH: &str = "/button.htm/push";
pub const BUTTON_1_PATH: &str = "/button.htm/1";
pub const BUTTON_2_PATH: &str = "/button.htm/2";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RouteMethod {
    Get,
    /// Any HTTP method.
    Any,
}

impl RouteMethod {
    fn on<H, T>(self, handler: H) -> MethodRouter<AppState>
    where
        H: Handler<T, AppState>,
        T: 'static,
    {
        match self {
            RouteMethod::Get => get(handler),
            RouteMethod::Any => any(handler),
        }
    }
}

impl fmt::Display for RouteMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RouteMethod::Get => f.write_str("GET"),
            RouteMethod::Any => f.write_str("ANY"),
        }
    }
}

/// What a route does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    RedirectHome,
    ListFiles,
    SystemInfo,
    StoredButtons,
    EchoButton(ButtonId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Route {
    pub method: RouteMethod,
    pub path: &'static str,
    pub endpoint: Endpoint,
}

impl Route {
    pub const fn new(method: RouteMethod, path: &'static str, endpoint: Endpoint) -> Self {
        Self {
            method,
            path,
            endpoint,
        }
    }

    pub(crate) fn method_router(&self) -> MethodRouter<AppState> {
        match self.endpoint {
            Endpoint::RedirectHome => self.method.on(redirect_home),
            Endpoint::ListFiles => self.method.on(list_files),
            Endpoint::SystemInfo => self.method.on(system_info),
            Endpoint::StoredButtons => self.method.on(set_buttons),
            Endpoint::EchoButton(button) => {
                self.method.on(move |args: QueryArgs| echo_button(button, args))
            }
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RouteTableError {
    #[error("Route registered twice: {method} {path}")]
    Duplicate { method: RouteMethod, path: String },
}

#[derive(Debug, Clone)]
pub struct RouteTable {
    routes: Vec<Route>,
}

impl RouteTable {
    pub fn new(routes: Vec<Route>) -> Self {
        Self { routes }
    }

    /// The device's routes for the given button mode.
    pub fn for_mode(mode: ButtonMode) -> Self {
        let mut routes = vec![
            Route::new(RouteMethod::Get, HOME_PATH, Endpoint::RedirectHome),
            Route::new(RouteMethod::Get, LIST_PATH, Endpoint::ListFiles),
            Route::new(RouteMethod::Get, SYSINFO_PATH, Endpoint::SystemInfo),
        ];

        match mode {
            ButtonMode::Stored => routes.push(Route::new(
                RouteMethod::Any,
                BUTTON_PUSH_PATH,
                Endpoint::StoredButtons,
            )),
            ButtonMode::Echo => routes.extend([
                Route::new(
                    RouteMethod::Any,
                    BUTTON_1_PATH,
                    Endpoint::EchoButton(ButtonId::B1),
                ),
                Route::new(
                    RouteMethod::Any,
                    BUTTON_2_PATH,
                    Endpoint::EchoButton(ButtonId::B2),
                ),
            ]),
        }

        Self::new(routes)
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Paths must be unique. A path registered for `ANY` also collides with a `GET`
    /// registration of the same path.
    pub fn validate(&self) -> Result<(), RouteTableError> {
        let mut seen = HashSet::new();
        for route in &self.routes {
            if !seen.insert(route.path) {
                return Err(RouteTableError::Duplicate {
                    method: route.method,
                    path: route.path.to_string(),
                });
            }
        }
        Ok(())
    }
}
