use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{
    BorrowItemError, Item, ItemBorrowed, ItemId, ItemReturned, LoanId, MemberId, ReturnItemError,
};

/// 貸出中の資料がない場合の表示
pub const NO_BORROWED_ITEMS: &str = "No borrowed items";

/// 貸出台帳の1行
///
/// 資料本体は目録が所有するため、台帳はIDのみを保持する。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoanEntry {
    pub loan_id: LoanId,
    pub item_id: ItemId,
    pub borrowed_at: DateTime<Utc>,
}

/// 会員ごとの貸出台帳
///
/// 不変条件：
/// - 並び順は貸出順
/// - エントリは貸出成功時にのみ追加され、返却成功時にのみ削除される
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoanLedger {
    entries: Vec<LoanEntry>,
}

impl LoanLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[LoanEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// 指定した資料を借りているか
    pub fn holds(&self, item_id: &ItemId) -> bool {
        self.entries.iter().any(|entry| &entry.item_id == item_id)
    }

    /// 資料を借りる
    ///
    /// 貸出可否の判定は資料側に任せ、成功した場合のみ台帳に記録する。
    pub fn borrow(
        &mut self,
        item: &mut Item,
        member_id: &MemberId,
        borrower_name: &str,
        borrowed_at: DateTime<Utc>,
    ) -> Result<ItemBorrowed, BorrowItemError> {
        let message = item.borrow(borrower_name)?;

        let entry = LoanEntry {
            loan_id: LoanId::new(),
            item_id: item.item_id().clone(),
            borrowed_at,
        };
        self.entries.push(entry.clone());

        Ok(ItemBorrowed {
            loan_id: entry.loan_id,
            item_id: entry.item_id,
            member_id: member_id.clone(),
            borrowed_at,
            message,
        })
    }

    /// 資料を返却する
    ///
    /// 台帳にない資料は`ReturnItemError::ItemNotHeld`とし、資料の状態には触れない。
    /// 残りのエントリの順序は維持される。
    pub fn return_item(
        &mut self,
        item: &mut Item,
        member_id: &MemberId,
        returned_at: DateTime<Utc>,
    ) -> Result<ItemReturned, ReturnItemError> {
        let index = self
            .entries
            .iter()
            .position(|entry| &entry.item_id == item.item_id())
            .ok_or_else(|| ReturnItemError::ItemNotHeld(item.item_id().clone()))?;

        let entry = self.entries.remove(index);
        let message = item.return_item();

        Ok(ItemReturned {
            loan_id: entry.loan_id,
            item_id: entry.item_id,
            member_id: member_id.clone(),
            borrowed_at: entry.borrowed_at,
            returned_at,
            message,
        })
    }

    /// 借りている資料の説明文を貸出順に改行区切りで返す
    pub fn list_borrowed_items<'a, F>(&self, lookup: F) -> String
    where
        F: Fn(&ItemId) -> Option<&'a Item>,
    {
        let lines: Vec<String> = self
            .entries
            .iter()
            .filter_map(|entry| lookup(&entry.item_id))
            .map(Item::details)
            .collect();

        if lines.is_empty() {
            return NO_BORROWED_ITEMS.to_string();
        }
        lines.join("\n")
    }
}

/// 会員エンティティ
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    member_id: MemberId,
    name: String,
    ledger: LoanLedger,
}

impl Member {
    pub fn new(member_id: MemberId, name: impl Into<String>) -> Self {
        Self {
            member_id,
            name: name.into(),
            ledger: LoanLedger::new(),
        }
    }

    pub fn member_id(&self) -> &MemberId {
        &self.member_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn ledger(&self) -> &LoanLedger {
        &self.ledger
    }

    pub fn holds(&self, item_id: &ItemId) -> bool {
        self.ledger.holds(item_id)
    }

    /// 借りている資料のIDを貸出順で返す
    pub fn held_item_ids(&self) -> impl Iterator<Item = &ItemId> {
        self.ledger.entries().iter().map(|entry| &entry.item_id)
    }

    pub fn borrow_item(
        &mut self,
        item: &mut Item,
        borrowed_at: DateTime<Utc>,
    ) -> Result<ItemBorrowed, BorrowItemError> {
        self.ledger
            .borrow(item, &self.member_id, &self.name, borrowed_at)
    }

    pub fn return_item(
        &mut self,
        item: &mut Item,
        returned_at: DateTime<Utc>,
    ) -> Result<ItemReturned, ReturnItemError> {
        self.ledger.return_item(item, &self.member_id, returned_at)
    }

    pub fn list_borrowed_items<'a, F>(&self, lookup: F) -> String
    where
        F: Fn(&ItemId) -> Option<&'a Item>,
    {
        self.ledger.list_borrowed_items(lookup)
    }
}
