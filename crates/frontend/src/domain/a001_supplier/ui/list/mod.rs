mod card;

pub use card::SupplierCard;

use crate::domain::a001_supplier::api::use_supplier_store;
use crate::domain::a001_supplier::directory::{load_directory, SupplierDirectory};
use crate::domain::a001_supplier::ui::details::{EditorOutcome, EditorState, SupplierDetails};
use crate::shared::icons::icon;
use crate::shared::list_utils::SearchInput;
use contracts::domain::a001_supplier::Supplier;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

/// Подпись количества в заголовке: "10" или "3 of 10" при активном фильтре
pub fn count_caption(shown: usize, total: usize) -> String {
    if shown == total {
        total.to_string()
    } else {
        format!("{} of {}", shown, total)
    }
}

/// Текст пустого списка
pub fn empty_caption(total: usize, query: &str) -> String {
    if total == 0 {
        "No suppliers yet. Create the first one.".to_string()
    } else {
        format!("No suppliers match \"{}\"", query)
    }
}

#[component]
#[allow(non_snake_case)]
pub fn SupplierList() -> impl IntoView {
    let store = StoredValue::new(use_supplier_store());
    let directory = RwSignal::new(SupplierDirectory::default());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal::<Option<String>>(None);
    let search_query = RwSignal::new(String::new());
    let editor = RwSignal::new(EditorState::Closed);

    // Полная загрузка: при ошибке список остается прежним (пустым при первом открытии)
    let fetch = move || {
        let store = store.get_value();
        set_loading.set(true);
        spawn_local(async move {
            match load_directory(store.store()).await {
                Ok(d) => {
                    directory.set(d);
                    set_error.set(None);
                }
                Err(e) => {
                    log::error!("failed to load suppliers: {}", e);
                    set_error.set(Some(e.to_string()));
                }
            }
            set_loading.set(false);
        });
    };

    let filtered = Memo::new(move |_| {
        let query = search_query.get();
        directory.with(|d| d.filtered(&query))
    });

    let on_select = Callback::new(move |s: Supplier| editor.set(EditorState::Editing(s)));

    let on_done = Callback::new(move |outcome: EditorOutcome| {
        directory.update(|d| d.apply(&outcome));
        editor.set(EditorState::Closed);
    });

    let on_close = Callback::new(move |_: ()| editor.set(EditorState::Closed));

    fetch();

    view! {
        <div class="page suppliers-page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">
                        {icon("suppliers")}
                        {Supplier::list_name()}
                    </h1>
                    <span class="header__count">
                        {move || count_caption(filtered.with(Vec::len), directory.with(SupplierDirectory::len))}
                    </span>
                </div>
                <div class="header__actions">
                    <SearchInput
                        value=search_query
                        placeholder="Search by name, email, sales person or address"
                    />
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| editor.set(EditorState::Creating)
                    >
                        {icon("plus")}
                        " New supplier"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| fetch()
                        disabled=Signal::derive(move || loading.get())
                    >
                        {icon("refresh")}
                        " Refresh"
                    </Button>
                </div>
            </div>

            {move || error.get().map(|e| view! {
                <div class="warning-box" style="background: var(--color-error-50); border-color: var(--color-error-100);">
                    <span class="warning-box__icon" style="color: var(--color-error);">"⚠"</span>
                    <span class="warning-box__text" style="color: var(--color-error);">{e}</span>
                </div>
            })}

            <Show
                when=move || !loading.get()
                fallback=|| view! {
                    <div class="loading" style="padding: 48px; text-align: center;">
                        <Spinner />
                    </div>
                }
            >
                <Show
                    when=move || !filtered.with(Vec::is_empty)
                    fallback=move || view! {
                        <div class="empty-state" style="padding: 48px; text-align: center;">
                            <p>{move || empty_caption(directory.with(SupplierDirectory::len), &search_query.get())}</p>
                        </div>
                    }
                >
                    <div class="supplier-grid">
                        {move || {
                            let query = search_query.get();
                            filtered.get().into_iter().map(|s| {
                                let count = directory.with(|d| d.item_count(&s.id));
                                view! {
                                    <SupplierCard
                                        supplier=s
                                        item_count=count
                                        query=query.clone()
                                        on_select=on_select
                                    />
                                }
                            }).collect_view()
                        }}
                    </div>
                </Show>
            </Show>

            {move || editor.with(EditorState::mode).map(|mode| view! {
                <SupplierDetails mode=mode on_done=on_done on_close=on_close />
            })}
        </div>
    }
}
