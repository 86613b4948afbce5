use crate::application::lending::{
    ServiceDependencies, borrow_item as execute_borrow_item, find_item, library_summary,
    member_loans, register_item, register_member, return_item as execute_return_item,
};
use crate::domain::value_objects::{ItemId, MemberId};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use std::sync::Arc;

use super::{
    error::ApiError,
    types::{
        CreateItemRequest, CreateMemberRequest, ItemBorrowedResponse, ItemResponse,
        ItemReturnedResponse, LoanRequest, MemberLoansResponse, MemberResponse,
    },
};

// ============================================================================
// State
// ============================================================================

/// ハンドラー間で共有されるアプリケーション状態
#[derive(Clone)]
pub struct AppState {
    pub service_deps: ServiceDependencies,
}

// ============================================================================
// Command handlers (POST)
// ============================================================================

/// POST /items - 資料を登録
pub async fn create_item(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateItemRequest>,
) -> Result<(StatusCode, Json<ItemResponse>), ApiError> {
    let item = register_item(&state.service_deps, req.into_item())?;
    Ok((StatusCode::CREATED, Json(ItemResponse::from(&item))))
}

/// POST /members - 会員を登録
pub async fn create_member(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateMemberRequest>,
) -> Result<(StatusCode, Json<MemberResponse>), ApiError> {
    let member = register_member(&state.service_deps, req.into_member())?;
    Ok((StatusCode::CREATED, Json(MemberResponse::from(&member))))
}

/// POST /loans - 資料を貸し出す
///
/// 強制されるビジネスルール:
/// - 会員と資料が存在すること
/// - 資料が貸出可能であること（同時要求でも成功するのは1件のみ）
pub async fn borrow_item(
    State(state): State<Arc<AppState>>,
    Json(req): Json<LoanRequest>,
) -> Result<Json<ItemBorrowedResponse>, ApiError> {
    let event = execute_borrow_item(&state.service_deps, req.to_borrow_command())?;
    Ok(Json(ItemBorrowedResponse::from(event)))
}

/// POST /loans/return - 資料を返却
///
/// 強制されるビジネスルール:
/// - 会員が存在すること
/// - 会員がその資料を借りていること
pub async fn return_item(
    State(state): State<Arc<AppState>>,
    Json(req): Json<LoanRequest>,
) -> Result<Json<ItemReturnedResponse>, ApiError> {
    let event = execute_return_item(&state.service_deps, req.to_return_command())?;
    Ok(Json(ItemReturnedResponse::from(event)))
}

// ============================================================================
// Query handlers (GET)
// ============================================================================

/// GET /items/:id - 資料の詳細と貸出状態
pub async fn get_item(
    State(state): State<Arc<AppState>>,
    Path(item_id): Path<String>,
) -> Result<Json<ItemResponse>, ApiError> {
    let item = find_item(&state.service_deps, &ItemId::new(item_id))?;
    Ok(Json(ItemResponse::from(&item)))
}

/// GET /members/:id/loans - 会員が借りている資料（貸出順）
pub async fn get_member_loans(
    State(state): State<Arc<AppState>>,
    Path(member_id): Path<String>,
) -> Result<Json<MemberLoansResponse>, ApiError> {
    let loans = member_loans(&state.service_deps, &MemberId::new(member_id))?;

    Ok(Json(MemberLoansResponse {
        member_id: loans.member.member_id().to_string(),
        name: loans.member.name().to_string(),
        items: loans.items.iter().map(ItemResponse::from).collect(),
        listing: loans.listing,
    }))
}

/// GET /summary - 目録全体の要約（テキスト）
pub async fn get_summary(State(state): State<Arc<AppState>>) -> Result<String, ApiError> {
    Ok(library_summary(&state.service_deps)?)
}
