use thiserror::Error;

use crate::domain::CatalogError;

/// 貸出管理アプリケーション層のエラー
#[derive(Debug, Error)]
pub enum LendingApplicationError {
    /// 目録のエラー（会員・資料の不在、貸出中、未貸出、重複登録）
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// 目録のロックが汚染されている（他の処理がパニックした）
    #[error("Catalog state is unavailable")]
    CatalogPoisoned,
}

/// アプリケーション層の Result型
pub type Result<T> = std::result::Result<T, LendingApplicationError>;
