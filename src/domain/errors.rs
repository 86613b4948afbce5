use thiserror::Error;

use super::{ItemId, MemberId};

/// 貸出のエラー（資料単位）
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BorrowItemError {
    /// 既に貸出中
    #[error("{kind} \"{title}\" is not available")]
    ItemUnavailable {
        item_id: ItemId,
        kind: &'static str,
        title: String,
    },
}

/// 返却のエラー（会員の貸出台帳単位）
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReturnItemError {
    /// 台帳に記録されていない資料
    #[error("Item {0} not found in held items")]
    ItemNotHeld(ItemId),
}

/// 目録レベルのエラー
///
/// すべて事前条件違反であり、状態は一切変更されない。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// 会員が存在しない
    #[error("Member {0} not found")]
    MemberNotFound(MemberId),

    /// 資料が存在しない
    #[error("Item {0} not found")]
    ItemNotFound(ItemId),

    /// 資料が貸出中
    #[error("{kind} \"{title}\" is not available")]
    ItemUnavailable {
        item_id: ItemId,
        kind: &'static str,
        title: String,
    },

    /// 会員がその資料を借りていない
    #[error("Item {item_id} is not held by member {member_id}")]
    ItemNotHeldByMember { member_id: MemberId, item_id: ItemId },

    /// 資料IDの重複登録
    #[error("Item {0} is already registered")]
    DuplicateItem(ItemId),

    /// 会員IDの重複登録
    #[error("Member {0} is already registered")]
    DuplicateMember(MemberId),
}

impl CatalogError {
    /// 識別子が解決できなかったエラーか
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            CatalogError::MemberNotFound(_) | CatalogError::ItemNotFound(_)
        )
    }
}

impl From<BorrowItemError> for CatalogError {
    fn from(err: BorrowItemError) -> Self {
        match err {
            BorrowItemError::ItemUnavailable {
                item_id,
                kind,
                title,
            } => CatalogError::ItemUnavailable {
                item_id,
                kind,
                title,
            },
        }
    }
}
