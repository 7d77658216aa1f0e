// Lint configuration for this crate
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! # `eecalc` Core
//!
//! Core types, models, and calculations for the `eecalc` heat pump
//! cost estimator.
//!
//! This crate provides the foundational abstractions used across all other
//! `eecalc` crates, including:
//!
//! - Domain models (building submissions, heat pump packages, weather)
//! - The weather client error taxonomy
//! - The [`WeatherSource`] trait implemented by the remote client
//! - The calculation engine and recommendation selector
//!
//! ## Key Types
//!
//! ### Models
//! - [`BuildingRecord`] - A building submission and its empirical factors
//! - [`HeatPumpPackage`] - A catalog package with itemized costs
//! - [`CostLineItem`] - A single labelled cost
//! - [`LocationWeather`] - Weather data resolved for a design region
//!
//! ### Calculations
//! - [`calc::heat_loss`] - Building heat loss
//! - [`calc::power_heat_loss`] - Heat loss normalised by degree-days
//! - [`calc::total_cost`] - Package cost including VAT
//! - [`select::select_package`] - Smallest package covering a power heat loss
//! - [`pipeline::estimate`] - The full estimate for one submission

pub mod calc;
pub mod error;
pub mod models;
pub mod pipeline;
pub mod select;
pub mod traits;

// Re-export error types
pub use error::{ClientError, CoreError};

// Re-export all model types
pub use models::{BuildingRecord, CostLineItem, HeatPumpPackage, LocationWeather, find_building};

pub use pipeline::{CostEstimate, EstimateError, estimate};
pub use traits::WeatherSource;
