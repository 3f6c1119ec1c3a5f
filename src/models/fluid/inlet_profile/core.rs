//! Power-law inlet velocity profile for a channel bounded by two walls.
//!
//! Each wall carries a boundary layer of thickness `del = del_over_h * h`.
//! Within distance `d` of the nearer wall the velocity follows
//! `u_free * (d / del)^B`, where `u_free = u_mean * (B + 1)`.
//!
//! Two evaluation paths are provided:
//!
//! - [`evaluate_profile`] applies the formula to a raw coordinate with no
//!   checks. A zero boundary-layer thickness gives a non-finite result and a
//!   coordinate outside `[0, h]` gives NaN.
//! - [`PowerLawProfile`] validates its [`InletProfileConfig`] once at
//!   construction, and applies the configured [`CoordinateOrigin`] and
//!   [`DomainPolicy`] on every evaluation.

mod config;
mod error;
mod geometry;
mod params;

pub use config::{CoordinateOrigin, DomainPolicy, InletProfileConfig};
pub use error::ProfileError;
pub use geometry::ChannelGeometry;
pub use params::ProfileParams;

use uom::{
    ConstZero,
    si::{
        f64::{Length, Ratio, Velocity},
        ratio::ratio,
    },
};

use crate::support::{
    boundary::BoundaryProfile,
    constraint::{NonNegative, StrictlyPositive, UnitIntervalLowerOpen},
};

/// Evaluates the power-law profile at wall-normal coordinate `y`.
///
/// The coordinate is used as the distance from the lower wall, so this
/// assumes `geometry.y_min` is zero. Nothing is validated.
///
/// # Examples
///
/// ```
/// use twine_inlet_profiles::models::fluid::inlet_profile::{
///     ChannelGeometry, ProfileParams, evaluate_profile,
/// };
/// use uom::si::{f64::Length, length::meter, velocity::meter_per_second};
///
/// let u = evaluate_profile(
///     Length::new::<meter>(0.1016),
///     ChannelGeometry::default(),
///     ProfileParams::default(),
/// );
/// assert!((u.get::<meter_per_second>() - 1.0351).abs() < 1e-4);
/// ```
#[must_use]
pub fn evaluate_profile(y: Length, geometry: ChannelGeometry, params: ProfileParams) -> Velocity {
    let height = geometry.height();
    power_law(
        y,
        height,
        params.boundary_layer_thickness(height),
        params.free_stream_velocity(),
        params.exponent.get::<ratio>(),
    )
}

/// The near-wall branch includes `y == thickness`.
fn power_law(
    y: Length,
    height: Length,
    thickness: Length,
    free_stream: Velocity,
    exponent: f64,
) -> Velocity {
    let wall_distance = if y <= thickness { y } else { height - y };
    free_stream * (wall_distance / thickness).get::<ratio>().powf(exponent)
}

/// A validated power-law inlet profile.
///
/// Derived quantities are computed once at construction. The profile is
/// immutable and `Send + Sync`, so hosts may evaluate faces concurrently.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PowerLawProfile {
    geometry: ChannelGeometry,
    height: Length,
    thickness: Length,
    free_stream: Velocity,
    exponent: f64,
    origin: CoordinateOrigin,
    domain: DomainPolicy,
    axis: usize,
}

impl PowerLawProfile {
    /// Builds a profile from its configuration.
    ///
    /// # Errors
    ///
    /// - [`ProfileError::InvalidParameter`] if the channel height or exponent
    ///   is not strictly positive, the mean velocity is negative, or the
    ///   boundary-layer fraction is not in `(0, 1]`.
    /// - [`ProfileError::BoundaryLayerTooThick`] if the fraction exceeds 0.5.
    pub fn new(config: InletProfileConfig) -> Result<Self, ProfileError> {
        let InletProfileConfig {
            geometry,
            params,
            origin,
            domain,
            wall_normal_axis,
        } = config;

        let height = StrictlyPositive::new(geometry.height())
            .map_err(ProfileError::invalid("channel height"))?
            .into_inner();
        NonNegative::new(params.u_mean).map_err(ProfileError::invalid("mean velocity"))?;
        let exponent = StrictlyPositive::new(params.exponent)
            .map_err(ProfileError::invalid("power-law exponent"))?
            .into_inner();
        let del_over_h = UnitIntervalLowerOpen::new(params.del_over_h)
            .map_err(ProfileError::invalid("boundary layer fraction"))?
            .into_inner();

        if del_over_h > Ratio::new::<ratio>(0.5) {
            return Err(ProfileError::BoundaryLayerTooThick { del_over_h });
        }

        Ok(Self {
            geometry,
            height,
            thickness: params.boundary_layer_thickness(height),
            free_stream: params.free_stream_velocity(),
            exponent: exponent.get::<ratio>(),
            origin,
            domain,
            axis: wall_normal_axis,
        })
    }

    #[must_use]
    pub fn geometry(&self) -> ChannelGeometry {
        self.geometry
    }

    #[must_use]
    pub fn height(&self) -> Length {
        self.height
    }

    /// Boundary-layer thickness on each wall.
    #[must_use]
    pub fn boundary_layer_thickness(&self) -> Length {
        self.thickness
    }

    /// Velocity at the edge of each boundary layer.
    #[must_use]
    pub fn free_stream_velocity(&self) -> Velocity {
        self.free_stream
    }

    /// Evaluates the profile at a wall-normal coordinate.
    ///
    /// # Errors
    ///
    /// Returns [`ProfileError::OutsideChannel`] if the position lies outside
    /// the channel and the domain policy is [`DomainPolicy::Reject`].
    pub fn velocity_at(&self, position: Length) -> Result<Velocity, ProfileError> {
        let (wall_distance, inside) = match self.origin {
            // Rounding in `position - y_min` must not push the upper wall
            // past `height`, where the power law has no real value.
            CoordinateOrigin::ChannelFloor => {
                let inside = self.geometry.contains(position);
                let distance = position - self.geometry.y_min;
                (if inside { distance.min(self.height) } else { distance }, inside)
            }
            CoordinateOrigin::Absolute => {
                (position, (Length::ZERO..=self.height).contains(&position))
            }
        };

        if self.domain == DomainPolicy::Reject && !inside {
            return Err(ProfileError::OutsideChannel {
                position,
                height: self.height,
            });
        }

        Ok(power_law(
            wall_distance,
            self.height,
            self.thickness,
            self.free_stream,
            self.exponent,
        ))
    }

    /// Evaluates the profile at a face centroid, reading the wall-normal axis.
    ///
    /// # Errors
    ///
    /// Returns [`ProfileError::AxisOutOfRange`] if the configured axis is not
    /// a component of `centroid`, or any error from [`Self::velocity_at`].
    pub fn at_centroid<const ND: usize>(
        &self,
        centroid: &[Length; ND],
    ) -> Result<Velocity, ProfileError> {
        let position = centroid
            .get(self.axis)
            .copied()
            .ok_or(ProfileError::AxisOutOfRange {
                axis: self.axis,
                dimensions: ND,
            })?;
        self.velocity_at(position)
    }
}

impl<const ND: usize> BoundaryProfile<ND> for PowerLawProfile {
    type Error = ProfileError;

    fn evaluate(&self, centroid: &[Length; ND]) -> Result<Velocity, ProfileError> {
        const {
            assert!(
                ND >= 2,
                "boundary face centroids need at least 2 components (x and y)"
            );
        };
        self.at_centroid(centroid)
    }
}
