use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{ItemId, MemberId};

/// コマンド：資料を貸し出す
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BorrowItem {
    pub member_id: MemberId,
    pub item_id: ItemId,
    pub requested_at: DateTime<Utc>,
}

/// コマンド：資料を返却する
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReturnItem {
    pub member_id: MemberId,
    pub item_id: ItemId,
    pub returned_at: DateTime<Utc>,
}
