//! インフラストラクチャ層
//!
//! ドメイン層のトレイトに対する Linux 上の実装と、テスト・開発用の実装

pub mod storage;
pub mod system;
