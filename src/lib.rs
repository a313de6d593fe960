//! ZeroTrace Lookup: IP address classification and geolocation.

pub mod app;
pub mod console;
pub mod i18n;
pub mod logging;
pub mod lookup;
pub mod render;
