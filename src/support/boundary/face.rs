use std::fmt;

use uom::si::{f64::Length, length::meter};

/// Host-assigned identifier of a face within a boundary zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FaceId(pub usize);

/// Selects which scalar field of a face is being populated.
///
/// Hosts use this to tell one velocity component (or other profiled
/// quantity) apart from another on the same zone.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FieldIndex(pub usize);

impl fmt::Display for FaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for FieldIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A read-only boundary face record: its identifier and centroid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Face<const ND: usize> {
    pub id: FaceId,
    pub centroid: [Length; ND],
}

impl<const ND: usize> Face<ND> {
    #[must_use]
    pub fn new(id: usize, centroid: [Length; ND]) -> Self {
        Self {
            id: FaceId(id),
            centroid,
        }
    }

    /// Creates a face from centroid coordinates given in meters.
    #[must_use]
    pub fn from_meters(id: usize, centroid: [f64; ND]) -> Self {
        Self::new(id, centroid.map(Length::new::<meter>))
    }
}
