use uom::si::{
    f64::{Length, Ratio, Velocity},
    ratio::ratio,
    velocity::meter_per_second,
};

/// Parameters of a power-law velocity profile.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProfileParams {
    /// Mean (bulk) velocity across the channel.
    pub u_mean: Velocity,

    /// Power-law exponent `B`; 1/7 for a turbulent boundary layer.
    pub exponent: Ratio,

    /// Boundary-layer thickness as a fraction of channel height, per wall.
    pub del_over_h: Ratio,
}

impl ProfileParams {
    #[must_use]
    pub fn new(u_mean: Velocity, exponent: Ratio, del_over_h: Ratio) -> Self {
        Self {
            u_mean,
            exponent,
            del_over_h,
        }
    }

    /// Boundary-layer thickness for a channel of the given height.
    #[must_use]
    pub fn boundary_layer_thickness(&self, height: Length) -> Length {
        self.del_over_h * height
    }

    /// Free-stream velocity implied by the mean velocity, `u_mean * (B + 1)`.
    ///
    /// Averaging `(y / del)^B` over `[0, del]` gives `1 / (B + 1)`, so this
    /// scaling makes the profile's mean across each boundary layer equal
    /// `u_mean`.
    #[must_use]
    pub fn free_stream_velocity(&self) -> Velocity {
        self.u_mean * (self.exponent.get::<ratio>() + 1.0)
    }
}

/// A 1 m/s mean velocity with the 1/7th-power law filling each channel half.
impl Default for ProfileParams {
    fn default() -> Self {
        Self {
            u_mean: Velocity::new::<meter_per_second>(1.0),
            exponent: Ratio::new::<ratio>(1.0 / 7.0),
            del_over_h: Ratio::new::<ratio>(0.5),
        }
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use uom::si::length::meter;

    use super::*;

    #[test]
    fn derived_quantities() {
        let params = ProfileParams::default();

        let del = params.boundary_layer_thickness(Length::new::<meter>(0.4064));
        assert_relative_eq!(del.get::<meter>(), 0.2032);
        assert_relative_eq!(
            params.free_stream_velocity().get::<meter_per_second>(),
            8.0 / 7.0,
            epsilon = 1e-12
        );
    }
}
