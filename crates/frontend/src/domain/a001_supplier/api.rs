//! Доступ к таблицам `suppliers` и `quotation_items`
//!
//! Страница работает с бэкендом только через [`SupplierStore`]; реализация
//! создается в `App` и передается через контекст ([`SupplierStoreHandle`]).

use crate::shared::rest::{RestClient, ServiceError, TableQuery};
use async_trait::async_trait;
use contracts::domain::a001_supplier::{Supplier, SupplierId, SupplierPayload};
use contracts::domain::a002_quotation_item::QuotationItemRef;
use contracts::domain::common::AggregateId;
use leptos::prelude::*;
use std::sync::Arc;

#[async_trait(?Send)]
pub trait SupplierStore: Send + Sync {
    /// Все поставщики, упорядоченные по имени
    async fn list_suppliers(&self) -> Result<Vec<Supplier>, ServiceError>;

    /// Ссылки на поставщиков из позиций КП (только непустые)
    async fn list_item_refs(&self) -> Result<Vec<QuotationItemRef>, ServiceError>;

    async fn insert_supplier(&self, payload: &SupplierPayload) -> Result<Supplier, ServiceError>;

    async fn update_supplier(
        &self,
        id: &SupplierId,
        payload: &SupplierPayload,
    ) -> Result<Supplier, ServiceError>;

    async fn delete_supplier(&self, id: &SupplierId) -> Result<(), ServiceError>;
}

/// Хранилище поверх REST-интерфейса бэкенда
pub struct RestSupplierStore {
    client: RestClient,
}

impl RestSupplierStore {
    pub fn new(client: RestClient) -> Self {
        Self { client }
    }

    fn by_id(id: &SupplierId) -> TableQuery {
        TableQuery::new(Supplier::collection_name()).eq("id", &id.as_string())
    }
}

#[async_trait(?Send)]
impl SupplierStore for RestSupplierStore {
    async fn list_suppliers(&self) -> Result<Vec<Supplier>, ServiceError> {
        let query = TableQuery::new(Supplier::collection_name())
            .select("*")
            .order_asc("name");
        self.client.select(&query).await
    }

    async fn list_item_refs(&self) -> Result<Vec<QuotationItemRef>, ServiceError> {
        let query = TableQuery::new(QuotationItemRef::collection_name())
            .select("supplier_id")
            .not_null("supplier_id");
        self.client.select(&query).await
    }

    async fn insert_supplier(&self, payload: &SupplierPayload) -> Result<Supplier, ServiceError> {
        self.client
            .insert(Supplier::collection_name(), payload)
            .await
    }

    async fn update_supplier(
        &self,
        id: &SupplierId,
        payload: &SupplierPayload,
    ) -> Result<Supplier, ServiceError> {
        self.client.update(&Self::by_id(id), payload).await
    }

    async fn delete_supplier(&self, id: &SupplierId) -> Result<(), ServiceError> {
        self.client.delete(&Self::by_id(id)).await
    }
}

/// Хранилище в контексте Leptos
#[derive(Clone)]
pub struct SupplierStoreHandle(pub Arc<dyn SupplierStore>);

impl SupplierStoreHandle {
    pub fn new(store: impl SupplierStore + 'static) -> Self {
        Self(Arc::new(store))
    }

    pub fn store(&self) -> &dyn SupplierStore {
        self.0.as_ref()
    }
}

pub fn use_supplier_store() -> SupplierStoreHandle {
    use_context::<SupplierStoreHandle>().expect("SupplierStoreHandle not found in context")
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_by_id_filter_for_numeric_and_text_keys() {
        assert_eq!(
            RestSupplierStore::by_id(&SupplierId::Int(7)).to_path(),
            "suppliers?id=eq.7"
        );
        assert_eq!(
            RestSupplierStore::by_id(&SupplierId::Text(
                "6f1c7f7e-3a52-4d4a-9a1e-1c2b3d4e5f60".to_string()
            ))
            .to_path(),
            "suppliers?id=eq.6f1c7f7e-3a52-4d4a-9a1e-1c2b3d4e5f60"
        );
    }
}
