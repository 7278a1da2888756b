pub mod details;
pub mod lots_view;
