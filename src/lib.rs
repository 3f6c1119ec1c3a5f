//! # Twine Inlet Profiles
//!
//! Inlet velocity boundary profiles for CFD solvers, built as
//! [Twine](https://github.com/isentropic-dev/twine) models.
//!
//! ## Crate layout
//!
//! - [`models`]: Profile evaluators and their [`twine_core::Model`] adapters.
//! - [`support`]: Supporting utilities used by models, including the
//!   host-facing boundary contract.
//!
//! ## Quick start
//!
//! ```
//! use twine_inlet_profiles::models::fluid::inlet_profile::{InletProfileConfig, PowerLawProfile};
//! use uom::si::{f64::Length, length::meter, velocity::meter_per_second};
//!
//! let profile = PowerLawProfile::new(InletProfileConfig::default()).unwrap();
//! let u = profile.velocity_at(Length::new::<meter>(0.2032)).unwrap();
//! assert!((u.get::<meter_per_second>() - 8.0 / 7.0).abs() < 1e-12);
//! ```
//!
//! ## Support lifecycle
//!
//! Modules in [`support`] are part of the public API because they're useful,
//! but their APIs are not stable. Breaking changes may occur as needed.

pub mod models;
pub mod support;
