use std::collections::HashMap;

use thiserror::Error;
use uom::si::{f64::Velocity, velocity::meter_per_second};

use super::{BoundaryProfile, Face, FaceId, FieldIndex};

/// Host-owned, write-only output slots for profile values.
pub trait ProfileSink {
    /// Stores the profile value for `field` on `face`.
    ///
    /// # Errors
    ///
    /// Returns a [`SinkError`] if the sink has no slot for `(face, field)`.
    fn set(&mut self, face: FaceId, field: FieldIndex, value: Velocity) -> Result<(), SinkError>;
}

/// Errors from writing into a [`ProfileSink`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SinkError {
    /// The face id is past the last slot the host allocated.
    #[error("face {face} has no output slot ({slots} slots allocated)")]
    FaceOutOfRange { face: FaceId, slots: usize },

    /// The sink holds a different field than the one written.
    #[error("sink holds field {expected}, not field {found}")]
    WrongField {
        expected: FieldIndex,
        found: FieldIndex,
    },
}

/// Errors from [`apply_profile`].
#[derive(Debug, Error)]
pub enum ApplyError<E> {
    /// The profile rejected a face.
    #[error("profile evaluation failed on face {face}")]
    Profile {
        face: FaceId,
        #[source]
        source: E,
    },

    /// The sink could not store a value.
    #[error("could not store profile value")]
    Sink(#[from] SinkError),
}

impl ProfileSink for HashMap<(FaceId, FieldIndex), Velocity> {
    fn set(&mut self, face: FaceId, field: FieldIndex, value: Velocity) -> Result<(), SinkError> {
        self.insert((face, field), value);
        Ok(())
    }
}

/// Output slots for a single field of a zone, indexed by face id.
///
/// The host sizes the slots up front; they never grow, so a face id the host
/// did not allocate for is reported rather than written. Unwritten slots
/// hold NaN.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldSlots {
    field: FieldIndex,
    values: Vec<Velocity>,
}

impl FieldSlots {
    /// Allocates `faces` slots for `field`.
    #[must_use]
    pub fn new(field: FieldIndex, faces: usize) -> Self {
        Self {
            field,
            values: vec![Velocity::new::<meter_per_second>(f64::NAN); faces],
        }
    }

    #[must_use]
    pub fn field(&self) -> FieldIndex {
        self.field
    }

    #[must_use]
    pub fn get(&self, face: FaceId) -> Option<Velocity> {
        self.values.get(face.0).copied()
    }

    #[must_use]
    pub fn values(&self) -> &[Velocity] {
        &self.values
    }

    #[must_use]
    pub fn into_values(self) -> Vec<Velocity> {
        self.values
    }
}

impl ProfileSink for FieldSlots {
    fn set(&mut self, face: FaceId, field: FieldIndex, value: Velocity) -> Result<(), SinkError> {
        if field != self.field {
            return Err(SinkError::WrongField {
                expected: self.field,
                found: field,
            });
        }

        let slots = self.values.len();
        let slot = self
            .values
            .get_mut(face.0)
            .ok_or(SinkError::FaceOutOfRange { face, slots })?;
        *slot = value;
        Ok(())
    }
}

/// Evaluates `profile` on every face and writes each value to `sink`.
///
/// Faces are visited in the order the iterator yields them; since each value
/// depends only on its own centroid, the order does not affect the result.
/// Non-finite values are written as-is and reported with a warning.
///
/// Returns the number of faces written.
///
/// # Errors
///
/// Stops at the first face the profile rejects or the sink cannot store.
/// Faces visited before it have already been written.
pub fn apply_profile<P, S, const ND: usize>(
    profile: &P,
    faces: impl IntoIterator<Item = Face<ND>>,
    field: FieldIndex,
    sink: &mut S,
) -> Result<usize, ApplyError<P::Error>>
where
    P: BoundaryProfile<ND> + ?Sized,
    S: ProfileSink + ?Sized,
{
    let mut written = 0;

    for face in faces {
        let value = profile
            .evaluate(&face.centroid)
            .map_err(|source| ApplyError::Profile {
                face: face.id,
                source,
            })?;
        if !value.get::<meter_per_second>().is_finite() {
            log::warn!(
                "non-finite profile value {value:?} on face {} (field {field})",
                face.id
            );
        }
        sink.set(face.id, field, value)?;
        written += 1;
    }

    log::debug!("wrote {written} profile values to field {field}");
    Ok(written)
}

#[cfg(test)]
mod tests {
    use std::convert::Infallible;

    use approx::assert_relative_eq;
    use uom::si::{f64::Length, length::meter};

    use super::*;

    /// Velocity equal to the wall-normal coordinate, in m/s.
    struct Linear;

    impl BoundaryProfile<2> for Linear {
        type Error = Infallible;

        fn evaluate(&self, centroid: &[Length; 2]) -> Result<Velocity, Infallible> {
            Ok(Velocity::new::<meter_per_second>(centroid[1].get::<meter>()))
        }
    }

    #[derive(Debug, Error)]
    #[error("rejected")]
    struct Rejected;

    struct RejectAbove(f64);

    impl BoundaryProfile<2> for RejectAbove {
        type Error = Rejected;

        fn evaluate(&self, centroid: &[Length; 2]) -> Result<Velocity, Rejected> {
            let y = centroid[1].get::<meter>();
            if y > self.0 {
                return Err(Rejected);
            }
            Ok(Velocity::new::<meter_per_second>(y))
        }
    }

    fn faces() -> Vec<Face<2>> {
        vec![
            Face::from_meters(0, [0.0, 0.1]),
            Face::from_meters(1, [0.0, 0.2]),
            Face::from_meters(2, [0.0, 0.3]),
        ]
    }

    fn mps(value: f64) -> Velocity {
        Velocity::new::<meter_per_second>(value)
    }

    #[test]
    fn writes_one_value_per_face() {
        let mut slots: HashMap<(FaceId, FieldIndex), Velocity> = HashMap::new();
        let written = apply_profile(&Linear, faces(), FieldIndex(3), &mut slots).unwrap();

        assert_eq!(written, 3);
        assert_eq!(slots.len(), 3);
        assert_relative_eq!(
            slots[&(FaceId(2), FieldIndex(3))].get::<meter_per_second>(),
            0.3
        );
    }

    #[test]
    fn visiting_order_does_not_matter() {
        let mut forward = FieldSlots::new(FieldIndex(0), 3);
        apply_profile(&Linear, faces(), FieldIndex(0), &mut forward).unwrap();

        let mut reverse = FieldSlots::new(FieldIndex(0), 3);
        apply_profile(&Linear, faces().into_iter().rev(), FieldIndex(0), &mut reverse).unwrap();

        assert_eq!(forward, reverse);
    }

    #[test]
    fn field_slots_leave_unwritten_faces_nan() {
        let mut slots = FieldSlots::new(FieldIndex(0), 3);
        apply_profile(
            &Linear,
            [Face::from_meters(2, [0.0, 0.5])],
            FieldIndex(0),
            &mut slots,
        )
        .unwrap();

        assert!(slots.values()[0].get::<meter_per_second>().is_nan());
        assert_relative_eq!(
            slots.get(FaceId(2)).unwrap().get::<meter_per_second>(),
            0.5
        );
        assert_eq!(slots.get(FaceId(3)), None);
    }

    #[test]
    fn field_slots_reject_faces_past_the_last_slot() {
        let mut slots = FieldSlots::new(FieldIndex(0), 2);

        assert_eq!(
            slots.set(FaceId(usize::MAX), FieldIndex(0), mps(1.0)),
            Err(SinkError::FaceOutOfRange {
                face: FaceId(usize::MAX),
                slots: 2
            })
        );
        assert_eq!(
            slots.set(FaceId(2), FieldIndex(0), mps(1.0)),
            Err(SinkError::FaceOutOfRange {
                face: FaceId(2),
                slots: 2
            })
        );
        assert_eq!(slots.values().len(), 2);
    }

    #[test]
    fn field_slots_reject_other_fields() {
        let mut slots = FieldSlots::new(FieldIndex(0), 1);
        slots.set(FaceId(0), FieldIndex(0), mps(1.0)).unwrap();

        assert_eq!(
            slots.set(FaceId(0), FieldIndex(1), mps(2.0)),
            Err(SinkError::WrongField {
                expected: FieldIndex(0),
                found: FieldIndex(1)
            })
        );
        assert_relative_eq!(
            slots.get(FaceId(0)).unwrap().get::<meter_per_second>(),
            1.0
        );
    }

    #[test]
    fn sink_failure_stops_the_zone() {
        let mut slots = FieldSlots::new(FieldIndex(0), 1);
        let result = apply_profile(&Linear, faces(), FieldIndex(0), &mut slots);

        assert!(matches!(
            result,
            Err(ApplyError::Sink(SinkError::FaceOutOfRange {
                face: FaceId(1),
                slots: 1
            }))
        ));
        assert_relative_eq!(
            slots.get(FaceId(0)).unwrap().get::<meter_per_second>(),
            0.1
        );
    }

    #[test]
    fn stops_at_first_rejected_face() {
        let mut slots: HashMap<(FaceId, FieldIndex), Velocity> = HashMap::new();
        let result = apply_profile(&RejectAbove(0.15), faces(), FieldIndex(0), &mut slots);

        assert!(matches!(
            result,
            Err(ApplyError::Profile {
                face: FaceId(1),
                ..
            })
        ));
        assert_eq!(slots.len(), 1);
    }

    #[test]
    fn empty_zone_writes_nothing() {
        let mut slots: HashMap<(FaceId, FieldIndex), Velocity> = HashMap::new();
        let written = apply_profile(&Linear, Vec::<Face<2>>::new(), FieldIndex(0), &mut slots)
            .unwrap();
        assert_eq!(written, 0);
        assert!(slots.is_empty());
    }
}
