//! Oil, gas and energy-sector price monitor
//!
//! - Live quotes with fixed fallbacks in `prices/`
//! - Static industry tables in `reference/`
//! - HTML pages and the JSON API in `endpoints/`
//! - Configured through `MONITOR_*` env vars, see `config`

pub mod config;
pub mod endpoints;
pub mod prices;
pub mod reference;
pub mod router;
pub mod state;
pub mod templates;
