pub mod client;
pub mod common;
pub mod field;
pub mod lot;
pub mod machinery;
pub mod service;
pub mod work_order;
