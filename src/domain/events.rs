use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{ItemId, LoanId, MemberId};

/// イベント：資料が貸出された
///
/// `message`は資料の種類に応じた確認メッセージ（表示用であり契約ではない）。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemBorrowed {
    pub loan_id: LoanId,
    pub item_id: ItemId,
    pub member_id: MemberId,
    pub borrowed_at: DateTime<Utc>,
    pub message: String,
}

/// イベント：資料が返却された
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemReturned {
    pub loan_id: LoanId,
    pub item_id: ItemId,
    pub member_id: MemberId,
    pub borrowed_at: DateTime<Utc>,
    pub returned_at: DateTime<Utc>,
    pub message: String,
}
