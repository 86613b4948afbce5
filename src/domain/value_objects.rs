use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 資料ID - 目録内で一意な資料の識別子（例: "B001"）
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ItemId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// 会員ID - 目録内で一意な会員の識別子（例: "MEM001"）
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MemberId(String);

impl MemberId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for MemberId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for MemberId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// 貸出ID - 貸出が成立するたびに採番される
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LoanId(Uuid);

impl LoanId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl Default for LoanId {
    fn default() -> Self {
        Self::new()
    }
}

/// 貸出可否の状態
///
/// 状態遷移：
/// - Available → Borrowed（貸出成功時のみ）
/// - Borrowed → Available（返却時）
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Availability {
    /// 貸出可能
    #[default]
    Available,
    /// 貸出中
    Borrowed,
}

impl Availability {
    pub fn is_available(&self) -> bool {
        matches!(self, Availability::Available)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_id_display_and_as_str() {
        let id = ItemId::new("B001");
        assert_eq!(id.as_str(), "B001");
        assert_eq!(id.to_string(), "B001");
        assert_eq!(id, ItemId::from("B001"));
    }

    #[test]
    fn test_member_id_equality() {
        assert_eq!(MemberId::new("MEM001"), MemberId::from("MEM001"));
        assert_ne!(MemberId::new("MEM001"), MemberId::new("MEM002"));
    }

    #[test]
    fn test_item_id_serializes_transparently() {
        let json = serde_json::to_string(&ItemId::new("EQ001")).unwrap();
        assert_eq!(json, "\"EQ001\"");
    }

    #[test]
    fn test_loan_id_creation() {
        let id1 = LoanId::new();
        let id2 = LoanId::new();
        assert_ne!(id1, id2);
    }

    #[test]
    fn test_availability_defaults_to_available() {
        let availability = Availability::default();
        assert!(availability.is_available());
        assert!(!Availability::Borrowed.is_available());
    }

    #[test]
    fn test_availability_serializes_lowercase() {
        let json = serde_json::to_string(&Availability::Borrowed).unwrap();
        assert_eq!(json, "\"borrowed\"");
        let parsed: Availability = serde_json::from_str("\"available\"").unwrap();
        assert_eq!(parsed, Availability::Available);
    }
}
