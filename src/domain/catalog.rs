use std::collections::HashMap;

use chrono::{DateTime, Utc};

use super::{
    CatalogError, Item, ItemBorrowed, ItemId, ItemReturned, Member, MemberId, ReturnItemError,
};

/// 目録 - すべての資料と会員を所有し、貸出・返却を振り分ける
///
/// 資料と会員は登録順に保持し、IDからの索引を別に持つ。
/// 貸出状態は資料側にのみ存在し、目録は複製しない。
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    items: Vec<Item>,
    item_index: HashMap<ItemId, usize>,
    members: Vec<Member>,
    member_index: HashMap<MemberId, usize>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// 資料を登録する
    ///
    /// # エラー
    /// 同じIDが登録済みの場合は`CatalogError::DuplicateItem`（目録は変更しない）
    pub fn add_item(&mut self, item: Item) -> Result<(), CatalogError> {
        if self.item_index.contains_key(item.item_id()) {
            return Err(CatalogError::DuplicateItem(item.item_id().clone()));
        }
        self.item_index
            .insert(item.item_id().clone(), self.items.len());
        self.items.push(item);
        Ok(())
    }

    /// 会員を登録する
    ///
    /// # エラー
    /// 同じIDが登録済みの場合は`CatalogError::DuplicateMember`（目録は変更しない）
    pub fn add_member(&mut self, member: Member) -> Result<(), CatalogError> {
        if self.member_index.contains_key(member.member_id()) {
            return Err(CatalogError::DuplicateMember(member.member_id().clone()));
        }
        self.member_index
            .insert(member.member_id().clone(), self.members.len());
        self.members.push(member);
        Ok(())
    }

    pub fn find_item_by_id(&self, item_id: &ItemId) -> Option<&Item> {
        self.item_index
            .get(item_id)
            .and_then(|&index| self.items.get(index))
    }

    pub fn find_member_by_id(&self, member_id: &MemberId) -> Option<&Member> {
        self.member_index
            .get(member_id)
            .and_then(|&index| self.members.get(index))
    }

    /// 登録順の資料一覧
    pub fn items(&self) -> impl Iterator<Item = &Item> {
        self.items.iter()
    }

    /// 登録順の会員一覧
    pub fn members(&self) -> impl Iterator<Item = &Member> {
        self.members.iter()
    }

    /// 資料を借りている会員
    pub fn holder_of(&self, item_id: &ItemId) -> Option<&Member> {
        self.members.iter().find(|member| member.holds(item_id))
    }

    pub fn borrow_item(
        &mut self,
        member_id: &MemberId,
        item_id: &ItemId,
    ) -> Result<ItemBorrowed, CatalogError> {
        self.borrow_item_at(member_id, item_id, Utc::now())
    }

    /// 資料を貸し出す
    ///
    /// 会員→資料の順に解決し、どちらかが存在しなければ状態に触れずにエラーを返す。
    /// 解決後は会員の貸出台帳に処理を委譲する。
    pub fn borrow_item_at(
        &mut self,
        member_id: &MemberId,
        item_id: &ItemId,
        borrowed_at: DateTime<Utc>,
    ) -> Result<ItemBorrowed, CatalogError> {
        let member = self
            .member_index
            .get(member_id)
            .and_then(|&index| self.members.get_mut(index))
            .ok_or_else(|| CatalogError::MemberNotFound(member_id.clone()))?;

        let item = self
            .item_index
            .get(item_id)
            .and_then(|&index| self.items.get_mut(index))
            .ok_or_else(|| CatalogError::ItemNotFound(item_id.clone()))?;

        member
            .borrow_item(item, borrowed_at)
            .map_err(CatalogError::from)
    }

    pub fn return_item(
        &mut self,
        member_id: &MemberId,
        item_id: &ItemId,
    ) -> Result<ItemReturned, CatalogError> {
        self.return_item_at(member_id, item_id, Utc::now())
    }

    /// 資料を返却する
    ///
    /// 会員のみを解決し、資料の存在確認は貸出台帳の検索で兼ねる。
    /// 台帳にない資料は`ItemNotHeldByMember`、目録にも存在しないIDは`ItemNotFound`。
    pub fn return_item_at(
        &mut self,
        member_id: &MemberId,
        item_id: &ItemId,
        returned_at: DateTime<Utc>,
    ) -> Result<ItemReturned, CatalogError> {
        let member = self
            .member_index
            .get(member_id)
            .and_then(|&index| self.members.get_mut(index))
            .ok_or_else(|| CatalogError::MemberNotFound(member_id.clone()))?;

        let not_held = || CatalogError::ItemNotHeldByMember {
            member_id: member_id.clone(),
            item_id: item_id.clone(),
        };

        if !member.holds(item_id) {
            if self.item_index.contains_key(item_id) {
                return Err(not_held());
            }
            return Err(CatalogError::ItemNotFound(item_id.clone()));
        }

        let item = self
            .item_index
            .get(item_id)
            .and_then(|&index| self.items.get_mut(index))
            .ok_or_else(|| CatalogError::ItemNotFound(item_id.clone()))?;

        member
            .return_item(item, returned_at)
            .map_err(|err| match err {
                ReturnItemError::ItemNotHeld(_) => not_held(),
            })
    }

    /// 会員が借りている資料の説明文一覧
    pub fn list_borrowed_items(&self, member_id: &MemberId) -> Result<String, CatalogError> {
        let member = self
            .find_member_by_id(member_id)
            .ok_or_else(|| CatalogError::MemberNotFound(member_id.clone()))?;

        Ok(member.list_borrowed_items(|id| self.find_item_by_id(id)))
    }

    /// 目録全体の要約（全資料の説明文と全会員名）
    pub fn library_summary(&self) -> String {
        let items = self
            .items
            .iter()
            .map(Item::details)
            .collect::<Vec<_>>()
            .join("\n");
        let members = self
            .members
            .iter()
            .map(Member::name)
            .collect::<Vec<_>>()
            .join(", ");

        format!("--- Library summary ---\nItems:\n{items}\n\nMembers:\n{members}\n")
    }
}
