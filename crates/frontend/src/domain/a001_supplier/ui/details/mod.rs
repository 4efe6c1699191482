//! Supplier Details UI Module
//!
//! Simplified MVVM pattern implementation:
//! - model.rs: editor state, outcome and store calls (save, delete)
//! - view_model.rs: ViewModel with commands and state management
//! - view.rs: Leptos component (pure UI)

mod model;
mod view;
mod view_model;

pub use model::{
    confirm_delete, delete, delete_prompt, submit, EditorError, EditorMode, EditorOutcome,
    EditorState,
};
pub use view::SupplierDetails;
