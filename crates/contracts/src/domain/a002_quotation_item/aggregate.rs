use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use crate::domain::a001_supplier::SupplierId;

/// Проекция строки `quotation_items`: только ссылка на поставщика
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuotationItemRef {
    #[serde(default)]
    pub supplier_id: Option<SupplierId>,
}

impl QuotationItemRef {
    pub fn collection_name() -> &'static str {
        "quotation_items"
    }
}

/// Количество позиций коммерческих предложений по каждому поставщику
pub fn count_by_supplier<'a, I>(items: I) -> HashMap<SupplierId, usize>
where
    I: IntoIterator<Item = &'a QuotationItemRef>,
{
    let mut counts = HashMap::new();
    for supplier_id in items.into_iter().filter_map(|item| item.supplier_id.clone()) {
        *counts.entry(supplier_id).or_insert(0) += 1;
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_by_supplier_skips_missing_refs() {
        let a = SupplierId::Int(1);
        let b = SupplierId::Text("b".to_string());
        let items = vec![
            QuotationItemRef { supplier_id: Some(a.clone()) },
            QuotationItemRef { supplier_id: None },
            QuotationItemRef { supplier_id: Some(b.clone()) },
            QuotationItemRef { supplier_id: Some(a.clone()) },
        ];

        let counts = count_by_supplier(&items);
        assert_eq!(counts.len(), 2);
        assert_eq!(counts[&a], 2);
        assert_eq!(counts[&b], 1);
    }

    #[test]
    fn test_deserialize_projection() {
        let rows = r#"[
            {"supplier_id": "6f1c7f7e-3a52-4d4a-9a1e-1c2b3d4e5f60"},
            {"supplier_id": 42},
            {"supplier_id": null}
        ]"#;
        let items: Vec<QuotationItemRef> = serde_json::from_str(rows).unwrap();
        assert!(matches!(items[0].supplier_id, Some(SupplierId::Text(_))));
        assert_eq!(items[1].supplier_id, Some(SupplierId::Int(42)));
        assert!(items[2].supplier_id.is_none());
    }
}
