//! Named boundary profiles.
//!
//! Simulation configurations assign a profile to a boundary zone by name,
//! using a reference such as `<x_velocity::libudf>`. A [`ProfileRegistry`]
//! maps those names to profile implementations.
//!
//! ```
//! use twine_inlet_profiles::models::fluid::inlet_profile::default_registry;
//! use twine_inlet_profiles::support::boundary::registry::ProfileRef;
//!
//! let registry = default_registry::<3>();
//! let reference: ProfileRef = "<x_velocity::libudf>".parse().unwrap();
//!
//! assert!(registry.resolve(&reference).is_ok());
//! ```

mod profile_ref;

use std::{collections::BTreeMap, fmt};

use thiserror::Error;

use super::BoundaryProfile;

pub use profile_ref::{ParseProfileRefError, ProfileRef};

/// A boxed, thread-shareable profile with error type `E`.
pub type DynProfile<const ND: usize, E> = dyn BoundaryProfile<ND, Error = E> + Send + Sync;

/// Errors from registering or resolving named profiles.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// No profile is registered under the requested name.
    #[error("unknown profile: {name}")]
    UnknownProfile { name: String },

    /// A profile is already registered under this name.
    #[error("profile already registered: {name}")]
    DuplicateProfile { name: String },
}

/// Profiles keyed by their registered name.
pub struct ProfileRegistry<const ND: usize, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    profiles: BTreeMap<String, Box<DynProfile<ND, E>>>,
}

impl<const ND: usize, E> ProfileRegistry<ND, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    #[must_use]
    pub fn new() -> Self {
        Self {
            profiles: BTreeMap::new(),
        }
    }

    /// Registers `profile` under `name`.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::DuplicateProfile`] if the name is taken.
    pub fn register<P>(&mut self, name: impl Into<String>, profile: P) -> Result<(), RegistryError>
    where
        P: BoundaryProfile<ND, Error = E> + Send + Sync + 'static,
    {
        let name = name.into();
        if self.profiles.contains_key(&name) {
            return Err(RegistryError::DuplicateProfile { name });
        }
        log::debug!("registered boundary profile {name}");
        self.profiles.insert(name, Box::new(profile));
        Ok(())
    }

    /// Returns the profile registered under `name`, if any.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&DynProfile<ND, E>> {
        self.profiles.get(name).map(|profile| &**profile)
    }

    /// Resolves a configuration reference to its profile.
    ///
    /// Only the profile name is used for lookup; the library part of the
    /// reference names where the host loads it from.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::UnknownProfile`] if nothing is registered
    /// under the reference's name.
    pub fn resolve(&self, reference: &ProfileRef) -> Result<&DynProfile<ND, E>, RegistryError> {
        self.get(reference.name())
            .ok_or_else(|| RegistryError::UnknownProfile {
                name: reference.name().to_owned(),
            })
    }

    /// Registered names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.profiles.keys().map(String::as_str)
    }
}

impl<const ND: usize, E> Default for ProfileRegistry<ND, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<const ND: usize, E> fmt::Debug for ProfileRegistry<ND, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProfileRegistry")
            .field("names", &self.profiles.keys().collect::<Vec<_>>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::convert::Infallible;

    use approx::assert_relative_eq;
    use uom::si::{
        f64::{Length, Velocity},
        length::meter,
        velocity::meter_per_second,
    };

    use super::*;

    struct Uniform(f64);

    impl BoundaryProfile<2> for Uniform {
        type Error = Infallible;

        fn evaluate(&self, _centroid: &[Length; 2]) -> Result<Velocity, Infallible> {
            Ok(Velocity::new::<meter_per_second>(self.0))
        }
    }

    #[test]
    fn resolves_registered_reference() {
        let mut registry = ProfileRegistry::<2, Infallible>::new();
        registry.register("uniform", Uniform(2.5)).unwrap();

        let reference: ProfileRef = "<uniform::libprofiles>".parse().unwrap();
        let profile = registry.resolve(&reference).unwrap();
        let u = profile.evaluate(&[Length::new::<meter>(0.0); 2]).unwrap();

        assert_relative_eq!(u.get::<meter_per_second>(), 2.5);
    }

    #[test]
    fn unknown_reference_is_an_error() {
        let registry = ProfileRegistry::<2, Infallible>::default();
        let reference: ProfileRef = "<y_velocity::libudf>".parse().unwrap();

        assert_eq!(
            registry.resolve(&reference).err(),
            Some(RegistryError::UnknownProfile {
                name: "y_velocity".into()
            })
        );
    }

    #[test]
    fn duplicate_names_are_rejected() {
        let mut registry = ProfileRegistry::<2, Infallible>::new();
        registry.register("uniform", Uniform(1.0)).unwrap();

        assert_eq!(
            registry.register("uniform", Uniform(2.0)),
            Err(RegistryError::DuplicateProfile {
                name: "uniform".into()
            })
        );
        assert_eq!(registry.names().collect::<Vec<_>>(), ["uniform"]);
    }
}
