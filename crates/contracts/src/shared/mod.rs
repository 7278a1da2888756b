pub mod navigation;
pub mod selection;
pub mod validation;
