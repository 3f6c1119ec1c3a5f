use super::{ChannelGeometry, ProfileParams};

/// Where wall-normal distance is measured from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CoordinateOrigin {
    /// Distance is measured from the lower wall, `y - y_min`.
    #[default]
    ChannelFloor,

    /// The raw coordinate is used as the distance from the lower wall.
    ///
    /// Only equivalent to [`CoordinateOrigin::ChannelFloor`] when `y_min` is zero.
    Absolute,
}

/// What to do with positions outside the channel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DomainPolicy {
    /// Evaluate anyway; the fractional power of a negative base yields NaN,
    /// which is written to the host unchanged.
    #[default]
    Propagate,

    /// Fail with [`ProfileError::OutsideChannel`](super::ProfileError::OutsideChannel).
    Reject,
}

/// Configuration for a [`PowerLawProfile`](super::PowerLawProfile).
///
/// The default describes the 16 in (0.4064 m) channel with a 1 m/s mean
/// velocity and the 1/7th-power law filling each half of the channel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InletProfileConfig {
    pub geometry: ChannelGeometry,
    pub params: ProfileParams,
    pub origin: CoordinateOrigin,
    pub domain: DomainPolicy,

    /// Centroid component holding the wall-normal coordinate (`1` is `y`).
    pub wall_normal_axis: usize,
}

impl Default for InletProfileConfig {
    fn default() -> Self {
        Self {
            geometry: ChannelGeometry::default(),
            params: ProfileParams::default(),
            origin: CoordinateOrigin::default(),
            domain: DomainPolicy::default(),
            wall_normal_axis: 1,
        }
    }
}
