//! アプリケーション層

pub mod use_cases;
