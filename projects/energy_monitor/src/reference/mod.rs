//! Constant tables shown on the pages. Nothing here touches the network
//! or changes at runtime.

pub mod fuel;
pub mod industry;

pub use fuel::{fuel_prices, FuelPrice};
pub use industry::{industry_stats, timeline, world_comparison, IndustryStat, TimelineEntry, WorldRow};
