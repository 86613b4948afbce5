use std::sync::{Arc, Mutex, MutexGuard};

use crate::domain::{
    Catalog, CatalogError, Item, ItemBorrowed, ItemId, ItemReturned, Member, MemberId,
    commands::{BorrowItem, ReturnItem},
};

use super::errors::{LendingApplicationError, Result};

/// サービスの依存関係
///
/// 目録は1つのMutexの内側にのみ存在する。
/// 貸出の「確認→状態変更→台帳記録」はロックを保持したまま行われるため、
/// 同じ資料への同時貸出が両方成功することはない。
#[derive(Clone)]
pub struct ServiceDependencies {
    pub catalog: Arc<Mutex<Catalog>>,
}

impl ServiceDependencies {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog: Arc::new(Mutex::new(catalog)),
        }
    }
}

/// 目録のロックを取得するヘルパー関数
///
/// # エラー
/// - CatalogPoisoned: ロック保持中に他のスレッドがパニックした
fn lock_catalog(deps: &ServiceDependencies) -> Result<MutexGuard<'_, Catalog>> {
    deps.catalog.lock().map_err(|_| {
        tracing::error!("Catalog mutex poisoned");
        LendingApplicationError::CatalogPoisoned
    })
}

/// 資料を登録する
///
/// 同じIDの資料が既にある場合は登録せず`DuplicateItem`を返す。
pub fn register_item(deps: &ServiceDependencies, item: Item) -> Result<Item> {
    let mut catalog = lock_catalog(deps)?;
    let registered = item.clone();

    if let Err(err) = catalog.add_item(item) {
        tracing::warn!(item_id = %registered.item_id(), "Item registration rejected: {}", err);
        return Err(err.into());
    }

    tracing::info!(
        item_id = %registered.item_id(),
        kind = registered.kind().label(),
        "Item registered"
    );
    Ok(registered)
}

/// 会員を登録する
///
/// 同じIDの会員が既にある場合は登録せず`DuplicateMember`を返す。
pub fn register_member(deps: &ServiceDependencies, member: Member) -> Result<Member> {
    let mut catalog = lock_catalog(deps)?;
    let registered = member.clone();

    if let Err(err) = catalog.add_member(member) {
        tracing::warn!(member_id = %registered.member_id(), "Member registration rejected: {}", err);
        return Err(err.into());
    }

    tracing::info!(member_id = %registered.member_id(), "Member registered");
    Ok(registered)
}

/// 資料を貸し出す
///
/// ビジネスルール：
/// - 会員が存在すること
/// - 資料が存在すること
/// - 資料が貸出可能であること
///
/// いずれかに違反した場合は状態を変更せずにエラーを返す。
pub fn borrow_item(deps: &ServiceDependencies, cmd: BorrowItem) -> Result<ItemBorrowed> {
    let mut catalog = lock_catalog(deps)?;

    match catalog.borrow_item_at(&cmd.member_id, &cmd.item_id, cmd.requested_at) {
        Ok(event) => {
            tracing::info!(
                member_id = %event.member_id,
                item_id = %event.item_id,
                loan_id = %event.loan_id.value(),
                "{}",
                event.message
            );
            Ok(event)
        }
        Err(err) => {
            tracing::warn!(
                member_id = %cmd.member_id,
                item_id = %cmd.item_id,
                "Borrow rejected: {}",
                err
            );
            Err(err.into())
        }
    }
}

/// 資料を返却する
///
/// ビジネスルール：
/// - 会員が存在すること
/// - 会員がその資料を借りていること
pub fn return_item(deps: &ServiceDependencies, cmd: ReturnItem) -> Result<ItemReturned> {
    let mut catalog = lock_catalog(deps)?;

    match catalog.return_item_at(&cmd.member_id, &cmd.item_id, cmd.returned_at) {
        Ok(event) => {
            tracing::info!(
                member_id = %event.member_id,
                item_id = %event.item_id,
                loan_id = %event.loan_id.value(),
                "{}",
                event.message
            );
            Ok(event)
        }
        Err(err) => {
            tracing::warn!(
                member_id = %cmd.member_id,
                item_id = %cmd.item_id,
                "Return rejected: {}",
                err
            );
            Err(err.into())
        }
    }
}

pub fn find_item(deps: &ServiceDependencies, item_id: &ItemId) -> Result<Item> {
    let catalog = lock_catalog(deps)?;
    catalog
        .find_item_by_id(item_id)
        .cloned()
        .ok_or_else(|| CatalogError::ItemNotFound(item_id.clone()).into())
}

pub fn find_member(deps: &ServiceDependencies, member_id: &MemberId) -> Result<Member> {
    let catalog = lock_catalog(deps)?;
    catalog
        .find_member_by_id(member_id)
        .cloned()
        .ok_or_else(|| CatalogError::MemberNotFound(member_id.clone()).into())
}

/// 会員が借りている資料（貸出順）
pub fn borrowed_items(deps: &ServiceDependencies, member_id: &MemberId) -> Result<Vec<Item>> {
    let catalog = lock_catalog(deps)?;
    let member = catalog
        .find_member_by_id(member_id)
        .ok_or_else(|| CatalogError::MemberNotFound(member_id.clone()))?;

    Ok(member
        .held_item_ids()
        .filter_map(|id| catalog.find_item_by_id(id))
        .cloned()
        .collect())
}

pub fn list_borrowed_items(deps: &ServiceDependencies, member_id: &MemberId) -> Result<String> {
    let catalog = lock_catalog(deps)?;
    Ok(catalog.list_borrowed_items(member_id)?)
}

/// 会員と貸出中の資料を同一時点の状態で返す
#[derive(Debug, Clone)]
pub struct MemberLoans {
    pub member: Member,
    pub items: Vec<Item>,
    pub listing: String,
}

/// 会員の貸出状況を取得する
///
/// 会員・資料・一覧表示を1回のロック内で組み立てるため、
/// 途中で他の貸出や返却が割り込むことはない。
pub fn member_loans(deps: &ServiceDependencies, member_id: &MemberId) -> Result<MemberLoans> {
    let catalog = lock_catalog(deps)?;
    let member = catalog
        .find_member_by_id(member_id)
        .ok_or_else(|| CatalogError::MemberNotFound(member_id.clone()))?;

    let items = member
        .held_item_ids()
        .filter_map(|id| catalog.find_item_by_id(id))
        .cloned()
        .collect();
    let listing = catalog.list_borrowed_items(member_id)?;

    Ok(MemberLoans {
        member: member.clone(),
        items,
        listing,
    })
}

pub fn library_summary(deps: &ServiceDependencies) -> Result<String> {
    let catalog = lock_catalog(deps)?;
    Ok(catalog.library_summary())
}
