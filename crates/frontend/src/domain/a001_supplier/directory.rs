//! Справочник поставщиков в памяти страницы
//!
//! Кэш состояния бэкенда: целиком заменяется при загрузке и точечно
//! правится после каждой успешной операции в редакторе. Счетчики позиций
//! после правок не пересчитываются до следующей полной загрузки.

use super::api::SupplierStore;
use super::ui::details::EditorOutcome;
use crate::shared::list_utils::{filter_list, Searchable};
use crate::shared::rest::ServiceError;
use contracts::domain::a001_supplier::{compare_by_name, Supplier, SupplierId};
use contracts::domain::a002_quotation_item::count_by_supplier;
use std::collections::HashMap;

impl Searchable for Supplier {
    fn matches_filter(&self, filter: &str) -> bool {
        Supplier::matches_filter(self, filter)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SupplierDirectory {
    suppliers: Vec<Supplier>,
    item_counts: HashMap<SupplierId, usize>,
}

impl SupplierDirectory {
    pub fn new(suppliers: Vec<Supplier>, item_counts: HashMap<SupplierId, usize>) -> Self {
        Self {
            suppliers,
            item_counts,
        }
    }

    pub fn suppliers(&self) -> &[Supplier] {
        &self.suppliers
    }

    pub fn len(&self) -> usize {
        self.suppliers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.suppliers.is_empty()
    }

    pub fn item_count(&self, id: &SupplierId) -> usize {
        self.item_counts.get(id).copied().unwrap_or(0)
    }

    /// Поставщики, подходящие под поисковую строку, в порядке списка
    pub fn filtered(&self, query: &str) -> Vec<Supplier> {
        filter_list(&self.suppliers, query)
    }

    /// Применить результат редактора к списку
    pub fn apply(&mut self, outcome: &EditorOutcome) {
        match outcome {
            EditorOutcome::Created(s) => {
                self.suppliers.push(s.clone());
                self.suppliers.sort_by(compare_by_name);
            }
            EditorOutcome::Updated(s) => {
                if let Some(slot) = self.suppliers.iter_mut().find(|x| x.id == s.id) {
                    *slot = s.clone();
                }
            }
            EditorOutcome::Deleted(s) => {
                self.suppliers.retain(|x| x.id != s.id);
            }
        }
    }
}

/// Загрузить поставщиков и счетчики позиций КП
pub async fn load_directory(store: &dyn SupplierStore) -> Result<SupplierDirectory, ServiceError> {
    let suppliers = store.list_suppliers().await?;
    let item_refs = store.list_item_refs().await?;
    let item_counts = count_by_supplier(&item_refs);
    log::debug!(
        "loaded {} suppliers, {} quotation item refs",
        suppliers.len(),
        item_refs.len()
    );
    Ok(SupplierDirectory::new(suppliers, item_counts))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_supplier::api::memory::MemoryStore;
    use contracts::domain::a002_quotation_item::QuotationItemRef;
    use futures::executor::block_on;
    use std::sync::atomic::{AtomicI64, Ordering};

    static NEXT_ID: AtomicI64 = AtomicI64::new(1);

    fn supplier(name: &str) -> Supplier {
        Supplier {
            id: SupplierId::Int(NEXT_ID.fetch_add(1, Ordering::Relaxed)),
            name: name.to_string(),
            address: None,
            email: None,
            sales_person: None,
            wechat_whatsapp: None,
            website: None,
        }
    }

    fn directory(names: &[&str]) -> SupplierDirectory {
        SupplierDirectory::new(names.iter().map(|n| supplier(n)).collect(), HashMap::new())
    }

    fn names(d: &SupplierDirectory) -> Vec<String> {
        d.suppliers().iter().map(|s| s.name.clone()).collect()
    }

    #[test]
    fn test_created_is_appended_and_sorted() {
        let mut d = directory(&["Beta", "Zeta"]);
        d.apply(&EditorOutcome::Created(supplier("Acme Co")));
        assert_eq!(d.len(), 3);
        assert_eq!(names(&d), vec!["Acme Co", "Beta", "Zeta"]);
    }

    #[test]
    fn test_updated_replaces_by_id() {
        let mut d = directory(&["Acme Co", "Globex"]);
        let mut changed = d.suppliers()[0].clone();
        changed.email = Some("new@acme.com".to_string());

        d.apply(&EditorOutcome::Updated(changed.clone()));

        assert_eq!(d.len(), 2);
        let stored = d.suppliers().iter().find(|s| s.id == changed.id).unwrap();
        assert_eq!(stored.email.as_deref(), Some("new@acme.com"));
    }

    #[test]
    fn test_deleted_removes_by_id() {
        let mut d = directory(&["Acme Co", "Globex"]);
        let victim = d.suppliers()[1].clone();
        d.apply(&EditorOutcome::Deleted(victim.clone()));
        assert_eq!(d.len(), 1);
        assert!(d.suppliers().iter().all(|s| s.id != victim.id));
    }

    #[test]
    fn test_filtered() {
        let mut by_email = supplier("Initech");
        by_email.email = Some("sales@acme.com".to_string());
        let d = SupplierDirectory::new(
            vec![supplier("Acme Co"), by_email, supplier("Globex")],
            HashMap::new(),
        );

        let found: Vec<String> = d.filtered("acme").into_iter().map(|s| s.name).collect();
        assert_eq!(found, vec!["Acme Co", "Initech"]);
        assert_eq!(d.filtered("").len(), 3);
    }

    #[test]
    fn test_counts_are_not_recomputed_after_mutation() {
        let acme = supplier("Acme Co");
        let mut counts = HashMap::new();
        counts.insert(acme.id.clone(), 3);
        let mut d = SupplierDirectory::new(vec![acme.clone()], counts);

        d.apply(&EditorOutcome::Deleted(acme.clone()));
        assert_eq!(d.item_count(&acme.id), 3);
        assert_eq!(d.item_count(&SupplierId::Int(-1)), 0);
    }

    #[test]
    fn test_load_directory() {
        let acme = supplier("Acme Co");
        let globex = supplier("Globex");
        let refs = vec![
            QuotationItemRef { supplier_id: Some(acme.id.clone()) },
            QuotationItemRef { supplier_id: Some(acme.id.clone()) },
            QuotationItemRef { supplier_id: None },
        ];
        let store = MemoryStore::with(vec![globex.clone(), acme.clone()], refs);

        let d = block_on(load_directory(&store)).unwrap();

        assert_eq!(names(&d), vec!["Acme Co", "Globex"]);
        assert_eq!(d.item_count(&acme.id), 2);
        assert_eq!(d.item_count(&globex.id), 0);
    }

    #[test]
    fn test_load_failure_reports_raw_message() {
        let store = MemoryStore::with(vec![supplier("Acme Co")], vec![]);
        store.fail("network error");

        let err = block_on(load_directory(&store)).unwrap_err();

        assert_eq!(err.to_string(), "network error");
        assert_eq!(store.calls(), 1);
    }
}
