use crate::domain::a001_supplier::api::SupplierStore;
use crate::shared::rest::ServiceError;
use contracts::domain::a001_supplier::{Supplier, SupplierDto, SupplierValidationError};
use thiserror::Error;

/// Состояние редактора на странице списка
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum EditorState {
    #[default]
    Closed,
    Creating,
    Editing(Supplier),
}

impl EditorState {
    pub fn mode(&self) -> Option<EditorMode> {
        match self {
            EditorState::Closed => None,
            EditorState::Creating => Some(EditorMode::Create),
            EditorState::Editing(s) => Some(EditorMode::Edit(s.clone())),
        }
    }
}

/// С чем открыт редактор
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorMode {
    Create,
    Edit(Supplier),
}

impl EditorMode {
    pub fn is_edit(&self) -> bool {
        matches!(self, EditorMode::Edit(_))
    }

    /// Начальное состояние формы
    pub fn initial_form(&self) -> SupplierDto {
        match self {
            EditorMode::Create => SupplierDto::default(),
            EditorMode::Edit(s) => SupplierDto::from(s),
        }
    }
}

/// Результат работы редактора, передаваемый списку
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorOutcome {
    Created(Supplier),
    Updated(Supplier),
    Deleted(Supplier),
}

impl EditorOutcome {
    pub fn supplier(&self) -> &Supplier {
        match self {
            EditorOutcome::Created(s) | EditorOutcome::Updated(s) | EditorOutcome::Deleted(s) => s,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditorError {
    #[error(transparent)]
    Validation(#[from] SupplierValidationError),
    #[error(transparent)]
    Service(#[from] ServiceError),
}

/// Сохранить форму: вставка для нового, обновление по ID для существующего.
///
/// Невалидная форма отклоняется до обращения к хранилищу.
pub async fn submit(
    store: &dyn SupplierStore,
    mode: &EditorMode,
    form: &SupplierDto,
) -> Result<EditorOutcome, EditorError> {
    let payload = form.to_payload()?;
    let outcome = match mode {
        EditorMode::Create => EditorOutcome::Created(store.insert_supplier(&payload).await?),
        EditorMode::Edit(original) => {
            EditorOutcome::Updated(store.update_supplier(&original.id, &payload).await?)
        }
    };
    Ok(outcome)
}

/// Текст подтверждения удаления
pub fn delete_prompt(supplier: &Supplier) -> String {
    format!("Delete supplier \"{}\"? This cannot be undone.", supplier.name)
}

/// Спросить подтверждение удаления через `confirm`
pub fn confirm_delete(supplier: &Supplier, confirm: impl FnOnce(&str) -> bool) -> bool {
    confirm(&delete_prompt(supplier))
}

/// Удалить поставщика по ID, в результате исходная запись
pub async fn delete(
    store: &dyn SupplierStore,
    supplier: Supplier,
) -> Result<EditorOutcome, ServiceError> {
    store.delete_supplier(&supplier.id).await?;
    Ok(EditorOutcome::Deleted(supplier))
}
