//! Integraciones de solo lectura con APIs públicas (cotización y clima).
//! Un fetch directo por tarjeta, sin reintentos ni backoff.

pub mod currency;
pub mod weather;
