use crate::domain::{Catalog, CatalogError, Item, ItemId, Member, MemberId};

/// デモ用の目録を構築する
///
/// 5種類の資料を1点ずつと、会員2名（Alice, Bob）を登録する。
pub fn demo_catalog() -> Result<Catalog, CatalogError> {
    let mut catalog = Catalog::new();

    catalog.add_item(Item::book(
        ItemId::new("B001"),
        "TypeScript Guide",
        "John Doe",
    ))?;
    catalog.add_item(Item::magazine(
        ItemId::new("M001"),
        "Tech Monthly",
        "2023-09",
    ))?;
    catalog.add_item(Item::audio_book(
        ItemId::new("AB001"),
        "Learn TypeScript",
        "Jane Smith",
        180,
        "Narrator Joe",
    ))?;
    catalog.add_item(Item::digital_media(
        ItemId::new("DM001"),
        "JavaScript Patterns",
        "PDF",
        15,
    ))?;
    catalog.add_item(Item::equipment(
        ItemId::new("EQ001"),
        "Chess Set",
        "Board Game",
        2,
    ))?;

    catalog.add_member(Member::new(MemberId::new("MEM001"), "Alice"))?;
    catalog.add_member(Member::new(MemberId::new("MEM002"), "Bob"))?;

    Ok(catalog)
}

/// 起動時の目録を構築する（デモデータを入れるか、空のまま）
pub fn initial_catalog(seed_demo: bool) -> Result<Catalog, CatalogError> {
    if seed_demo {
        tracing::info!("Seeding catalog with demo data");
        demo_catalog()
    } else {
        Ok(Catalog::new())
    }
}
