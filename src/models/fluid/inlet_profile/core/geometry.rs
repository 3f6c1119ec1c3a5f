use uom::si::{f64::Length, length::meter};

/// Vertical extent of a channel, bounded by a wall at each end.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChannelGeometry {
    /// Lower wall position.
    pub y_min: Length,
    /// Upper wall position.
    pub y_max: Length,
}

impl ChannelGeometry {
    #[must_use]
    pub fn new(y_min: Length, y_max: Length) -> Self {
        Self { y_min, y_max }
    }

    /// Channel height, `y_max - y_min`.
    #[must_use]
    pub fn height(&self) -> Length {
        self.y_max - self.y_min
    }

    /// Returns `true` if `position` lies between the walls, inclusive.
    #[must_use]
    pub fn contains(&self, position: Length) -> bool {
        self.y_min <= position && position <= self.y_max
    }
}

/// A 0.4064 m (16 in) channel with its lower wall at the origin.
impl Default for ChannelGeometry {
    fn default() -> Self {
        Self {
            y_min: Length::new::<meter>(0.0),
            y_max: Length::new::<meter>(0.4064),
        }
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    fn m(value: f64) -> Length {
        Length::new::<meter>(value)
    }

    #[test]
    fn contains_is_inclusive_of_both_walls() {
        let channel = ChannelGeometry::new(m(1.0), m(1.4064));

        assert!(channel.contains(m(1.0)));
        assert!(channel.contains(m(1.2)));
        assert!(channel.contains(m(1.4064)));
        assert!(!channel.contains(m(0.9)));
        assert!(!channel.contains(m(1.5)));
        assert!(!channel.contains(m(f64::NAN)));
        assert_relative_eq!(channel.height().get::<meter>(), 0.4064, epsilon = 1e-12);
    }
}
