pub mod api_utils;
pub mod config;
pub mod dialogs;
pub mod icons;
pub mod list_utils;
pub mod modal;
pub mod rest;
