use super::model::{self, EditorMode, EditorOutcome};
use crate::domain::a001_supplier::api::SupplierStoreHandle;
use crate::shared::dialogs;
use contracts::domain::a001_supplier::SupplierDto;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// ViewModel for Supplier editor form
#[derive(Clone, Copy)]
pub struct SupplierDetailsViewModel {
    pub form: RwSignal<SupplierDto>,
    pub error: RwSignal<Option<String>>,
    /// Идет сохранение или удаление; все действия заблокированы
    pub busy: RwSignal<bool>,
    mode: StoredValue<EditorMode>,
    store: StoredValue<SupplierStoreHandle>,
}

impl SupplierDetailsViewModel {
    pub fn new(mode: EditorMode, store: SupplierStoreHandle) -> Self {
        Self {
            form: RwSignal::new(mode.initial_form()),
            error: RwSignal::new(None),
            busy: RwSignal::new(false),
            mode: StoredValue::new(mode),
            store: StoredValue::new(store),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.mode.with_value(|m| m.is_edit())
    }

    pub fn title(&self) -> String {
        self.mode.with_value(|m| match m {
            EditorMode::Create => "New supplier".to_string(),
            EditorMode::Edit(s) => format!("Edit supplier: {}", s.name),
        })
    }

    pub fn can_save(&self) -> bool {
        !self.busy.get() && self.form.with(|f| f.is_name_filled())
    }

    pub fn can_delete(&self) -> bool {
        self.is_edit_mode() && !self.busy.get()
    }

    /// Save form data to backend
    pub fn save_command(&self, on_done: Callback<EditorOutcome>) {
        if self.busy.get_untracked() {
            return;
        }

        let current = self.form.get_untracked();

        // Validate
        if let Err(e) = current.validate() {
            self.error.set(Some(e.to_string()));
            return;
        }

        let mode = self.mode.get_value();
        let store = self.store.get_value();
        let error = self.error;
        let busy = self.busy;
        busy.set(true);
        error.set(None);

        spawn_local(async move {
            let result = model::submit(store.store(), &mode, &current).await;
            busy.set(false);
            match result {
                Ok(outcome) => {
                    log::info!("supplier saved: {}", outcome.supplier().id);
                    on_done.run(outcome);
                }
                Err(e) => {
                    log::error!("failed to save supplier: {}", e);
                    error.set(Some(e.to_string()));
                }
            }
        });
    }

    /// Delete the edited supplier after explicit confirmation
    pub fn delete_command(&self, on_done: Callback<EditorOutcome>) {
        if self.busy.get_untracked() {
            return;
        }

        let original = match self.mode.get_value() {
            EditorMode::Edit(s) => s,
            EditorMode::Create => return,
        };

        if !model::confirm_delete(&original, dialogs::confirm) {
            return;
        }

        let store = self.store.get_value();
        let error = self.error;
        let busy = self.busy;
        busy.set(true);
        error.set(None);

        spawn_local(async move {
            let result = model::delete(store.store(), original).await;
            busy.set(false);
            match result {
                Ok(outcome) => {
                    log::info!("supplier deleted: {}", outcome.supplier().id);
                    on_done.run(outcome);
                }
                Err(e) => {
                    log::error!("failed to delete supplier: {}", e);
                    error.set(Some(e.to_string()));
                }
            }
        });
    }
}
