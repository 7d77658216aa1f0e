//! Domain models for `eecalc`.
//!
//! ## Submodules
//!
//! - [`building`] - Building submissions (`BuildingRecord`)
//! - [`heat_pump`] - Heat pump catalog (`HeatPumpPackage`, `CostLineItem`)
//! - [`weather`] - Weather resolved for a design region (`LocationWeather`)

mod building;
mod heat_pump;
mod weather;

// Re-export everything at the models level
pub use building::{BuildingRecord, find_building};
pub use heat_pump::{CostLineItem, HeatPumpPackage};
pub use weather::LocationWeather;
