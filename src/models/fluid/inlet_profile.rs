//! Power-law inlet velocity profile.
//!
//! Assigns each inlet face a velocity from the 1/7th-power turbulent
//! boundary-layer law, as a function of the face's wall-normal position in a
//! channel of known height. The computational core is in the internal `core`
//! module; [`PowerLawInlet`] adapts it to [`twine_core::Model`], and
//! [`default_registry`] registers it under [`X_VELOCITY`] for hosts that
//! resolve profiles by name.

mod core;

pub use self::core::{
    ChannelGeometry, CoordinateOrigin, DomainPolicy, InletProfileConfig, PowerLawProfile,
    ProfileError, ProfileParams, evaluate_profile,
};

use twine_core::Model;
use uom::si::f64::{Length, Velocity};

use crate::support::boundary::registry::ProfileRegistry;

/// Name the x-velocity inlet profile is registered under.
pub const X_VELOCITY: &str = "x_velocity";

/// Returns a registry holding the default power-law profile as [`X_VELOCITY`].
///
/// # Panics
///
/// Never in practice; the default configuration is always valid.
#[must_use]
pub fn default_registry<const ND: usize>() -> ProfileRegistry<ND, ProfileError> {
    let profile = PowerLawProfile::new(InletProfileConfig::default())
        .expect("default inlet profile configuration should be valid");

    let mut registry = ProfileRegistry::new();
    registry
        .register(X_VELOCITY, profile)
        .expect("empty registry should accept the first profile");
    registry
}

/// [`Model`] adapter mapping a wall-normal position to an inlet velocity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PowerLawInlet {
    profile: PowerLawProfile,
}

impl PowerLawInlet {
    /// Creates the model from a profile configuration.
    ///
    /// # Errors
    ///
    /// Returns a [`ProfileError`] if the configuration is invalid.
    pub fn new(config: InletProfileConfig) -> Result<Self, ProfileError> {
        Ok(Self {
            profile: PowerLawProfile::new(config)?,
        })
    }

    #[must_use]
    pub fn profile(&self) -> &PowerLawProfile {
        &self.profile
    }
}

impl From<PowerLawProfile> for PowerLawInlet {
    fn from(profile: PowerLawProfile) -> Self {
        Self { profile }
    }
}

impl Model for PowerLawInlet {
    type Input = Length;
    type Output = Velocity;
    type Error = ProfileError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        self.profile.velocity_at(*input)
    }
}
