//! The contract between a CFD host and a boundary profile.
//!
//! A host solver owns the mesh, iterates the faces of a boundary zone, and
//! owns the per-face output slots. A profile only sees what the host hands
//! it: a sequence of read-only [`Face`] records in, and a [`ProfileSink`] to
//! write values out. [`apply_profile`] drives one zone through a
//! [`BoundaryProfile`].
//!
//! Sinks never grow on their own: [`FieldSlots`] holds one field with as many
//! slots as the host allocated, and a write it cannot place is a
//! [`SinkError`] rather than a panic or a reallocation.
//!
//! # Example
//!
//! ```
//! use std::collections::HashMap;
//!
//! use uom::si::f64::Velocity;
//! use twine_inlet_profiles::models::fluid::inlet_profile::{InletProfileConfig, PowerLawProfile};
//! use twine_inlet_profiles::support::boundary::{
//!     apply_profile, Face, FaceId, FieldIndex, FieldSlots,
//! };
//!
//! let profile = PowerLawProfile::new(InletProfileConfig::default()).unwrap();
//! let faces = [
//!     Face::from_meters(0, [0.0, 0.1016]),
//!     Face::from_meters(1, [0.0, 0.2032]),
//! ];
//!
//! let mut slots: HashMap<(FaceId, FieldIndex), Velocity> = HashMap::new();
//! let written = apply_profile(&profile, faces, FieldIndex(0), &mut slots).unwrap();
//!
//! assert_eq!(written, 2);
//! assert!(slots.contains_key(&(FaceId(1), FieldIndex(0))));
//!
//! let mut field = FieldSlots::new(FieldIndex(0), 2);
//! apply_profile(&profile, faces, FieldIndex(0), &mut field).unwrap();
//! assert_eq!(field.get(FaceId(1)), slots.get(&(FaceId(1), FieldIndex(0))).copied());
//! ```

mod apply;
mod face;
pub mod registry;

pub use apply::{ApplyError, FieldSlots, ProfileSink, SinkError, apply_profile};
pub use face::{Face, FaceId, FieldIndex};

use uom::si::f64::{Length, Velocity};

/// A profile that assigns a velocity to a boundary face from its centroid.
///
/// `ND` is the spatial dimension of the host mesh (2 or 3).
/// Implementations must be pure: the value may depend only on the centroid
/// and on state fixed at construction, never on visiting order.
pub trait BoundaryProfile<const ND: usize> {
    /// Error returned when a centroid cannot be evaluated.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Evaluates the profile at a face centroid.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the implementation rejects the centroid.
    fn evaluate(&self, centroid: &[Length; ND]) -> Result<Velocity, Self::Error>;
}
