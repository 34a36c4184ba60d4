//! Web インターフェース
//!
//! デバイスの HTTP エンドポイントを提供します。
//! ルートテーブル、ハンドラ、共通のレスポンス組み立て、
//! 静的ファイルの配信と組み込みの 404 ページを含みます。

mod builtin_files;
mod button_handlers;
mod handlers;
mod models;
mod response;
mod static_files;

pub mod routes;
pub mod server;
pub mod state;

pub(crate) use button_handlers::{echo_button, set_buttons};
pub(crate) use handlers::{list_files, redirect_home, system_info};
pub(crate) use static_files::static_file_handler;
