use serde::{Deserialize, Serialize};

use super::{Availability, BorrowItemError, ItemId};

/// 資料の種類ごとの属性
///
/// 種類は説明文と確認メッセージにのみ影響し、貸出の状態遷移は全種類で共通。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ItemKind {
    Book {
        author: String,
    },
    Magazine {
        issue_date: String,
    },
    AudioBook {
        author: String,
        narrator: String,
        duration_minutes: u32,
    },
    DigitalMedia {
        file_format: String,
        file_size_mb: u32,
    },
    Equipment {
        equipment_type: String,
        quantity: u32,
    },
}

impl ItemKind {
    /// メッセージ用の種類名
    pub fn label(&self) -> &'static str {
        match self {
            ItemKind::Book { .. } => "Book",
            ItemKind::Magazine { .. } => "Magazine",
            ItemKind::AudioBook { .. } => "Audiobook",
            ItemKind::DigitalMedia { .. } => "Digital media",
            ItemKind::Equipment { .. } => "Equipment",
        }
    }
}

/// 資料エンティティ - 貸出可能な1単位
///
/// 不変条件：
/// - item_idとtitleは生成後に変更されない
/// - availabilityは貸出可否の唯一の情報源であり、生成時はAvailable
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    item_id: ItemId,
    title: String,
    availability: Availability,
    #[serde(flatten)]
    kind: ItemKind,
}

impl Item {
    pub fn new(item_id: ItemId, title: impl Into<String>, kind: ItemKind) -> Self {
        Self {
            item_id,
            title: title.into(),
            availability: Availability::Available,
            kind,
        }
    }

    pub fn book(item_id: ItemId, title: impl Into<String>, author: impl Into<String>) -> Self {
        Self::new(
            item_id,
            title,
            ItemKind::Book {
                author: author.into(),
            },
        )
    }

    pub fn magazine(
        item_id: ItemId,
        title: impl Into<String>,
        issue_date: impl Into<String>,
    ) -> Self {
        Self::new(
            item_id,
            title,
            ItemKind::Magazine {
                issue_date: issue_date.into(),
            },
        )
    }

    pub fn audio_book(
        item_id: ItemId,
        title: impl Into<String>,
        author: impl Into<String>,
        duration_minutes: u32,
        narrator: impl Into<String>,
    ) -> Self {
        Self::new(
            item_id,
            title,
            ItemKind::AudioBook {
                author: author.into(),
                narrator: narrator.into(),
                duration_minutes,
            },
        )
    }

    pub fn digital_media(
        item_id: ItemId,
        title: impl Into<String>,
        file_format: impl Into<String>,
        file_size_mb: u32,
    ) -> Self {
        Self::new(
            item_id,
            title,
            ItemKind::DigitalMedia {
                file_format: file_format.into(),
                file_size_mb,
            },
        )
    }

    pub fn equipment(
        item_id: ItemId,
        title: impl Into<String>,
        equipment_type: impl Into<String>,
        quantity: u32,
    ) -> Self {
        Self::new(
            item_id,
            title,
            ItemKind::Equipment {
                equipment_type: equipment_type.into(),
                quantity,
            },
        )
    }

    pub fn item_id(&self) -> &ItemId {
        &self.item_id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn kind(&self) -> &ItemKind {
        &self.kind
    }

    pub fn availability(&self) -> Availability {
        self.availability
    }

    pub fn is_available(&self) -> bool {
        self.availability.is_available()
    }

    /// 資料を貸し出す
    ///
    /// 貸出可否の確認と状態変更を1ステップで行う。
    /// Available → Borrowed への遷移はここでのみ発生する。
    ///
    /// # エラー
    /// 既に貸出中の場合は`BorrowItemError::ItemUnavailable`（状態は変更しない）
    pub fn borrow(&mut self, borrower_name: &str) -> Result<String, BorrowItemError> {
        if !self.availability.is_available() {
            return Err(BorrowItemError::ItemUnavailable {
                item_id: self.item_id.clone(),
                kind: self.kind.label(),
                title: self.title.clone(),
            });
        }

        self.availability = Availability::Borrowed;
        Ok(format!(
            "{} \"{}\" borrowed by {}",
            self.kind.label(),
            self.title,
            borrower_name
        ))
    }

    /// 資料を返却する
    ///
    /// 無条件にAvailableへ戻す。貸出可能な資料の返却も成功として扱う。
    pub fn return_item(&mut self) -> String {
        self.availability = Availability::Available;
        format!("{} \"{}\" returned", self.kind.label(), self.title)
    }

    /// 種類ごとの説明文（ID と種類固有の属性をすべて含む）
    pub fn details(&self) -> String {
        let title = &self.title;
        let id = &self.item_id;
        match &self.kind {
            ItemKind::Book { author } => format!("Book: \"{title}\" by {author} (ID: {id})"),
            ItemKind::Magazine { issue_date } => {
                format!("Magazine: \"{title}\" issue {issue_date} (ID: {id})")
            }
            ItemKind::AudioBook {
                author,
                narrator,
                duration_minutes,
            } => format!(
                "Audiobook: \"{title}\" by {author}, narrated by {narrator}, duration: {duration_minutes} min (ID: {id})"
            ),
            ItemKind::DigitalMedia {
                file_format,
                file_size_mb,
            } => format!(
                "Digital media: \"{title}\" format: {file_format}, size: {file_size_mb}MB (ID: {id})"
            ),
            ItemKind::Equipment {
                equipment_type,
                quantity,
            } => format!(
                "Equipment: \"{title}\" type: {equipment_type}, quantity: {quantity} (ID: {id})"
            ),
        }
    }
}
