use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use thiserror::Error;
use crate::domain::common::AggregateId;

// ============================================================================
// ID Type
// ============================================================================

/// Идентификатор поставщика, назначаемый бэкендом.
///
/// Для клиента непрозрачен: ключ таблицы может быть числовым (`int8 identity`)
/// или строковым (`uuid`, `text`), в JSON он приходит числом или строкой
/// и уходит обратно в том же виде.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SupplierId {
    Int(i64),
    Text(String),
}

impl AggregateId for SupplierId {
    fn as_string(&self) -> String {
        match self {
            SupplierId::Int(n) => n.to_string(),
            SupplierId::Text(s) => s.clone(),
        }
    }
}

impl std::fmt::Display for SupplierId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_string())
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Поставщик: строка таблицы `suppliers`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Supplier {
    pub id: SupplierId,
    pub name: String,

    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub sales_person: Option<String>,
    #[serde(default)]
    pub wechat_whatsapp: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
}

impl Supplier {
    pub fn collection_name() -> &'static str {
        "suppliers"
    }

    pub fn list_name() -> &'static str {
        "Suppliers"
    }

    /// Два символа для аватара: первые буквы имени в верхнем регистре
    pub fn avatar_initials(&self) -> String {
        self.name.chars().take(2).collect::<String>().to_uppercase()
    }

    /// Цвет фона аватара, детерминированно зависящий от первой буквы имени
    pub fn avatar_color(&self) -> &'static str {
        avatar_color_for(&self.name)
    }

    /// Совпадает ли поставщик с поисковой строкой.
    ///
    /// Поиск без учета регистра по подстроке в полях: имя, email, менеджер, адрес.
    /// Пустая строка совпадает со всеми.
    pub fn matches_filter(&self, filter: &str) -> bool {
        if filter.is_empty() {
            return true;
        }
        let needle = filter.to_lowercase();
        let contains = |value: &str| value.to_lowercase().contains(&needle);

        contains(&self.name)
            || self.email.as_deref().is_some_and(contains)
            || self.sales_person.as_deref().is_some_and(contains)
            || self.address.as_deref().is_some_and(contains)
    }
}

/// Палитра фонов для аватаров
pub const AVATAR_PALETTE: [&str; 8] = [
    "#3b82f6", // blue
    "#10b981", // emerald
    "#f59e0b", // amber
    "#ef4444", // red
    "#8b5cf6", // violet
    "#ec4899", // pink
    "#14b8a6", // teal
    "#6366f1", // indigo
];

pub fn avatar_color_for(name: &str) -> &'static str {
    let index = name
        .chars()
        .next()
        .map(|c| c as usize % AVATAR_PALETTE.len())
        .unwrap_or(0);
    AVATAR_PALETTE[index]
}

/// Порядок по имени: без учета регистра, при равенстве побайтно
pub fn compare_by_name(a: &Supplier, b: &Supplier) -> Ordering {
    a.name
        .to_lowercase()
        .cmp(&b.name.to_lowercase())
        .then_with(|| a.name.cmp(&b.name))
}

/// Подпись бейджа с количеством позиций; `None` для нуля
pub fn item_count_label(count: usize) -> Option<String> {
    match count {
        0 => None,
        1 => Some("1 item".to_string()),
        n => Some(format!("{} items", n)),
    }
}

// ============================================================================
// Validation
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SupplierValidationError {
    #[error("Supplier name is required")]
    NameRequired,
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// Состояние формы редактирования: все поля как строки ввода
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SupplierDto {
    pub name: String,
    pub address: String,
    pub email: String,
    pub sales_person: String,
    pub wechat_whatsapp: String,
    pub website: String,
}

impl SupplierDto {
    pub fn is_name_filled(&self) -> bool {
        !self.name.trim().is_empty()
    }

    pub fn validate(&self) -> Result<(), SupplierValidationError> {
        if !self.is_name_filled() {
            return Err(SupplierValidationError::NameRequired);
        }
        Ok(())
    }

    /// Проверить форму и собрать тело запроса для вставки/обновления
    pub fn to_payload(&self) -> Result<SupplierPayload, SupplierValidationError> {
        self.validate()?;
        Ok(SupplierPayload {
            name: self.name.trim().to_string(),
            address: optional(&self.address),
            email: optional(&self.email),
            sales_person: optional(&self.sales_person),
            wechat_whatsapp: optional(&self.wechat_whatsapp),
            website: optional(&self.website),
        })
    }
}

impl From<&Supplier> for SupplierDto {
    fn from(s: &Supplier) -> Self {
        Self {
            name: s.name.clone(),
            address: s.address.clone().unwrap_or_default(),
            email: s.email.clone().unwrap_or_default(),
            sales_person: s.sales_person.clone().unwrap_or_default(),
            wechat_whatsapp: s.wechat_whatsapp.clone().unwrap_or_default(),
            website: s.website.clone().unwrap_or_default(),
        }
    }
}

fn optional(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Тело запроса insert/update: без `id`, пустые поля отправляются как `null`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupplierPayload {
    pub name: String,
    pub address: Option<String>,
    pub email: Option<String>,
    pub sales_person: Option<String>,
    pub wechat_whatsapp: Option<String>,
    pub website: Option<String>,
}

impl SupplierPayload {
    /// Строка, которую вернул бы бэкенд после записи с данным ID
    pub fn into_supplier(self, id: SupplierId) -> Supplier {
        Supplier {
            id,
            name: self.name,
            address: self.address,
            email: self.email,
            sales_person: self.sales_person,
            wechat_whatsapp: self.wechat_whatsapp,
            website: self.website,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn supplier(name: &str) -> Supplier {
        Supplier {
            id: SupplierId::Int(1),
            name: name.to_string(),
            address: None,
            email: None,
            sales_person: None,
            wechat_whatsapp: None,
            website: None,
        }
    }

    #[test]
    fn test_avatar_initials() {
        assert_eq!(supplier("acme co").avatar_initials(), "AC");
        assert_eq!(supplier("X").avatar_initials(), "X");
        assert_eq!(supplier("Öl GmbH").avatar_initials(), "ÖL");
    }

    #[test]
    fn test_avatar_color_depends_on_first_char_only() {
        assert_eq!(avatar_color_for("Acme"), avatar_color_for("Apex"));
        assert_eq!(avatar_color_for("A"), AVATAR_PALETTE['A' as usize % 8]);
        assert_eq!(avatar_color_for(""), AVATAR_PALETTE[0]);
    }

    #[test]
    fn test_matches_filter() {
        let acme = supplier("Acme Co");
        let mut by_email = supplier("Initech");
        by_email.email = Some("sales@acme.com".to_string());
        let globex = supplier("Globex");

        assert!(acme.matches_filter("acme"));
        assert!(by_email.matches_filter("acme"));
        assert!(!globex.matches_filter("acme"));
        assert!(globex.matches_filter(""));
    }

    #[test]
    fn test_matches_filter_ignores_contact_and_website() {
        let mut s = supplier("Globex");
        s.wechat_whatsapp = Some("acme-wechat".to_string());
        s.website = Some("https://acme.example".to_string());
        assert!(!s.matches_filter("acme"));

        s.sales_person = Some("Wile E. ACME".to_string());
        assert!(s.matches_filter("acme"));
    }

    #[test]
    fn test_item_count_label() {
        assert_eq!(item_count_label(0), None);
        assert_eq!(item_count_label(1).as_deref(), Some("1 item"));
        assert_eq!(item_count_label(7).as_deref(), Some("7 items"));
    }

    #[test]
    fn test_validate_requires_name() {
        let mut dto = SupplierDto::default();
        assert_eq!(dto.validate(), Err(SupplierValidationError::NameRequired));
        dto.name = "   ".to_string();
        assert_eq!(dto.validate(), Err(SupplierValidationError::NameRequired));
        dto.name = "Acme".to_string();
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn test_payload_trims_and_nulls_empty_fields() {
        let dto = SupplierDto {
            name: "  Acme Co ".to_string(),
            email: " sales@acme.com ".to_string(),
            address: "   ".to_string(),
            ..Default::default()
        };
        let payload = dto.to_payload().unwrap();
        assert_eq!(payload.name, "Acme Co");
        assert_eq!(payload.email.as_deref(), Some("sales@acme.com"));
        assert_eq!(payload.address, None);

        let json = serde_json::to_value(&payload).unwrap();
        assert!(json.get("id").is_none());
        assert!(json["website"].is_null());
    }

    #[test]
    fn test_deserialize_row_with_nulls_and_extra_columns() {
        let row = r#"{
            "id": "6f1c7f7e-3a52-4d4a-9a1e-1c2b3d4e5f60",
            "name": "Acme Co",
            "email": null,
            "created_at": "2024-03-15T14:02:26Z"
        }"#;
        let s: Supplier = serde_json::from_str(row).unwrap();
        assert_eq!(s.name, "Acme Co");
        assert_eq!(s.email, None);
        assert_eq!(s.website, None);
        assert_eq!(
            s.id,
            SupplierId::Text("6f1c7f7e-3a52-4d4a-9a1e-1c2b3d4e5f60".to_string())
        );
    }

    #[test]
    fn test_deserialize_numeric_and_text_ids() {
        let rows = r#"[
            {"id": 1, "name": "Acme Co", "email": null},
            {"id": "acme-2", "name": "Acme Two"}
        ]"#;
        let list: Vec<Supplier> = serde_json::from_str(rows).unwrap();
        assert_eq!(list[0].id, SupplierId::Int(1));
        assert_eq!(list[1].id, SupplierId::Text("acme-2".to_string()));
        assert_eq!(list[0].id.as_string(), "1");
        assert_eq!(list[1].id.to_string(), "acme-2");

        // Обратно уходит в исходном виде
        assert_eq!(serde_json::to_string(&list[0].id).unwrap(), "1");
        assert_eq!(serde_json::to_string(&list[1].id).unwrap(), "\"acme-2\"");
    }

    #[test]
    fn test_compare_by_name_is_case_insensitive() {
        let mut list = vec![supplier("beta"), supplier("Alpha"), supplier("alpha")];
        list.sort_by(compare_by_name);
        let names: Vec<&str> = list.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Alpha", "alpha", "beta"]);
    }
}
