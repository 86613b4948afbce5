use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{
    Availability, Item, ItemBorrowed, ItemId, ItemKind, ItemReturned, Member, MemberId,
    commands::{BorrowItem, ReturnItem},
};

/// 資料登録リクエスト（POST /items）
///
/// `kind`タグで種類を指定し、種類固有の属性を同じ階層に並べる。
#[derive(Debug, Deserialize)]
pub struct CreateItemRequest {
    pub item_id: String,
    pub title: String,
    #[serde(flatten)]
    pub kind: ItemKind,
}

impl CreateItemRequest {
    pub fn into_item(self) -> Item {
        Item::new(ItemId::new(self.item_id), self.title, self.kind)
    }
}

/// 会員登録リクエスト（POST /members）
#[derive(Debug, Deserialize)]
pub struct CreateMemberRequest {
    pub member_id: String,
    pub name: String,
}

impl CreateMemberRequest {
    pub fn into_member(self) -> Member {
        Member::new(MemberId::new(self.member_id), self.name)
    }
}

/// 貸出・返却リクエスト（POST /loans, POST /loans/return）
#[derive(Debug, Deserialize)]
pub struct LoanRequest {
    pub member_id: String,
    pub item_id: String,
}

impl LoanRequest {
    pub fn to_borrow_command(&self) -> BorrowItem {
        BorrowItem {
            member_id: MemberId::new(self.member_id.as_str()),
            item_id: ItemId::new(self.item_id.as_str()),
            requested_at: Utc::now(),
        }
    }

    pub fn to_return_command(&self) -> ReturnItem {
        ReturnItem {
            member_id: MemberId::new(self.member_id.as_str()),
            item_id: ItemId::new(self.item_id.as_str()),
            returned_at: Utc::now(),
        }
    }
}

/// 資料レスポンス
#[derive(Debug, Serialize, Deserialize)]
pub struct ItemResponse {
    pub item_id: String,
    pub title: String,
    #[serde(flatten)]
    pub kind: ItemKind,
    pub availability: Availability,
    pub details: String,
}

impl From<&Item> for ItemResponse {
    fn from(item: &Item) -> Self {
        Self {
            item_id: item.item_id().to_string(),
            title: item.title().to_string(),
            kind: item.kind().clone(),
            availability: item.availability(),
            details: item.details(),
        }
    }
}

/// 会員レスポンス
#[derive(Debug, Serialize, Deserialize)]
pub struct MemberResponse {
    pub member_id: String,
    pub name: String,
    pub borrowed_count: usize,
}

impl From<&Member> for MemberResponse {
    fn from(member: &Member) -> Self {
        Self {
            member_id: member.member_id().to_string(),
            name: member.name().to_string(),
            borrowed_count: member.ledger().len(),
        }
    }
}

/// 会員の貸出一覧レスポンス（GET /members/:id/loans）
#[derive(Debug, Serialize, Deserialize)]
pub struct MemberLoansResponse {
    pub member_id: String,
    pub name: String,
    pub items: Vec<ItemResponse>,
    pub listing: String,
}

/// 貸出レスポンス
#[derive(Debug, Serialize, Deserialize)]
pub struct ItemBorrowedResponse {
    pub loan_id: Uuid,
    pub item_id: String,
    pub member_id: String,
    pub borrowed_at: DateTime<Utc>,
    pub message: String,
}

impl From<ItemBorrowed> for ItemBorrowedResponse {
    fn from(event: ItemBorrowed) -> Self {
        Self {
            loan_id: event.loan_id.value(),
            item_id: event.item_id.to_string(),
            member_id: event.member_id.to_string(),
            borrowed_at: event.borrowed_at,
            message: event.message,
        }
    }
}

/// 返却レスポンス
#[derive(Debug, Serialize, Deserialize)]
pub struct ItemReturnedResponse {
    pub loan_id: Uuid,
    pub item_id: String,
    pub member_id: String,
    pub returned_at: DateTime<Utc>,
    pub message: String,
}

impl From<ItemReturned> for ItemReturnedResponse {
    fn from(event: ItemReturned) -> Self {
        Self {
            loan_id: event.loan_id.value(),
            item_id: event.item_id.to_string(),
            member_id: event.member_id.to_string(),
            returned_at: event.returned_at,
            message: event.message,
        }
    }
}

/// エラーレスポンス
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
        }
    }
}
