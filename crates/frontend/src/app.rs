use crate::domain::a001_supplier::api::{RestSupplierStore, SupplierStoreHandle};
use crate::domain::a001_supplier::ui::list::SupplierList;
use crate::shared::api_utils::page_origin;
use crate::shared::config::{load_config, AppConfig};
use crate::shared::rest::RestClient;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    let config = load_config().unwrap_or_else(|e| {
        log::error!("invalid embedded configuration: {}", e);
        AppConfig::default()
    });

    // Клиент бэкенда создается один раз и передается странице через контекст
    let client = RestClient::from_config(&config.backend, &page_origin());
    provide_context(SupplierStoreHandle::new(RestSupplierStore::new(client)));

    view! {
        <SupplierList />
    }
}
