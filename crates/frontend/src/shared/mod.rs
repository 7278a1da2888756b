pub mod api_utils;
pub mod components;
pub mod format;
pub mod integrations;
pub mod modal;
pub mod toast;
