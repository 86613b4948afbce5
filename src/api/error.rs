use crate::application::lending::LendingApplicationError;
use crate::domain::CatalogError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use super::types::ErrorResponse;

/// API層のエラー型
///
/// アプリケーション層のエラーをラップし、HTTPレスポンスへのマッピングを提供する。
#[derive(Debug)]
pub struct ApiError(LendingApplicationError);

impl From<LendingApplicationError> for ApiError {
    fn from(err: LendingApplicationError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type) = match &self.0 {
            // 404 Not Found - 識別子が解決できない
            LendingApplicationError::Catalog(CatalogError::MemberNotFound(_)) => {
                (StatusCode::NOT_FOUND, "MEMBER_NOT_FOUND")
            }
            LendingApplicationError::Catalog(CatalogError::ItemNotFound(_)) => {
                (StatusCode::NOT_FOUND, "ITEM_NOT_FOUND")
            }

            // 409 Conflict - 現在の状態と矛盾する要求
            LendingApplicationError::Catalog(CatalogError::ItemUnavailable { .. }) => {
                (StatusCode::CONFLICT, "ITEM_UNAVAILABLE")
            }
            LendingApplicationError::Catalog(CatalogError::ItemNotHeldByMember { .. }) => {
                (StatusCode::CONFLICT, "ITEM_NOT_HELD_BY_MEMBER")
            }
            LendingApplicationError::Catalog(CatalogError::DuplicateItem(_)) => {
                (StatusCode::CONFLICT, "DUPLICATE_ITEM")
            }
            LendingApplicationError::Catalog(CatalogError::DuplicateMember(_)) => {
                (StatusCode::CONFLICT, "DUPLICATE_MEMBER")
            }

            // 500 Internal Server Error - 内部の詳細はログにのみ残す
            LendingApplicationError::CatalogPoisoned => {
                tracing::error!("Catalog state error: {}", self.0);
                let body = Json(ErrorResponse::new(
                    "INTERNAL_ERROR",
                    "An unexpected error occurred",
                ));
                return (StatusCode::INTERNAL_SERVER_ERROR, body).into_response();
            }
        };

        let body = Json(ErrorResponse::new(error_type, self.0.to_string()));
        (status, body).into_response()
    }
}
