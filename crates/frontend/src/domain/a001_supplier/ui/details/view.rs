use super::model::{EditorMode, EditorOutcome};
use super::view_model::SupplierDetailsViewModel;
use crate::domain::a001_supplier::api::use_supplier_store;
use crate::shared::icons::icon;
use crate::shared::modal::Modal;
use contracts::domain::a001_supplier::SupplierDto;
use leptos::prelude::*;
use thaw::*;

/// Поле формы, привязанное к одному полю `SupplierDto`; при `rows > 1` это textarea
fn text_field(
    vm: SupplierDetailsViewModel,
    id: &'static str,
    label: &'static str,
    placeholder: &'static str,
    rows: u32,
    get: fn(&SupplierDto) -> String,
    set: fn(&mut SupplierDto, String),
) -> impl IntoView {
    let on_input = move |ev: leptos::ev::Event| {
        let value = event_target_value(&ev);
        vm.form.update(|f| set(f, value));
    };

    let control = if rows > 1 {
        view! {
            <textarea
                id=id
                prop:value=move || vm.form.with(get)
                on:input=on_input
                prop:disabled=move || vm.busy.get()
                placeholder=placeholder
                rows=rows.to_string()
            />
        }
        .into_any()
    } else {
        view! {
            <input
                type="text"
                id=id
                prop:value=move || vm.form.with(get)
                on:input=on_input
                prop:disabled=move || vm.busy.get()
                placeholder=placeholder
            />
        }
        .into_any()
    };

    view! {
        <div class="form-group">
            <label for=id>{label}</label>
            {control}
        </div>
    }
}

#[component]
pub fn SupplierDetails(
    mode: EditorMode,
    /// Успешное сохранение или удаление
    on_done: Callback<EditorOutcome>,
    /// Закрытие без изменений
    on_close: Callback<()>,
) -> impl IntoView {
    let vm = SupplierDetailsViewModel::new(mode, use_supplier_store());
    let title = vm.title();

    view! {
        <Modal title=title on_close=on_close>
            <div class="details-container supplier-details">
                {move || vm.error.get().map(|e| view! { <div class="error">{e}</div> })}

                <div class="details-form">
                    {text_field(vm, "name", "Name *", "Company name", 1,
                        |f| f.name.clone(), |f, v| f.name = v)}
                    {text_field(vm, "email", "Email", "sales@example.com", 1,
                        |f| f.email.clone(), |f, v| f.email = v)}
                    {text_field(vm, "sales_person", "Sales person", "Contact name", 1,
                        |f| f.sales_person.clone(), |f, v| f.sales_person = v)}
                    {text_field(vm, "wechat_whatsapp", "WeChat / WhatsApp", "ID or phone number", 1,
                        |f| f.wechat_whatsapp.clone(), |f, v| f.wechat_whatsapp = v)}
                    {text_field(vm, "website", "Website", "https://", 1,
                        |f| f.website.clone(), |f, v| f.website = v)}
                    {text_field(vm, "address", "Address", "Street, city, country", 3,
                        |f| f.address.clone(), |f, v| f.address = v)}
                </div>

                <div class="details-actions">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| vm.save_command(on_done)
                        disabled=Signal::derive(move || !vm.can_save())
                    >
                        {icon("save")}
                        {move || if vm.busy.get() {
                            " Saving..."
                        } else if vm.is_edit_mode() {
                            " Save"
                        } else {
                            " Create"
                        }}
                    </Button>
                    <Show when=move || vm.is_edit_mode()>
                        <Button
                            appearance=ButtonAppearance::Secondary
                            on_click=move |_| vm.delete_command(on_done)
                            disabled=Signal::derive(move || !vm.can_delete())
                        >
                            {icon("delete")}
                            " Delete"
                        </Button>
                    </Show>
                    <Button
                        appearance=ButtonAppearance::Subtle
                        on_click=move |_| on_close.run(())
                    >
                        " Cancel"
                    </Button>
                </div>
            </div>
        </Modal>
    }
}
