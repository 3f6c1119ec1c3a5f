//! Fluid boundary-condition models.
//!
//! This module contains profile models that CFD hosts apply to boundary zones.

pub mod inlet_profile;
