/// A one-shot request to pre-allocate capacity without exposing any element.
///
/// A `Reservation` carries only the requested slot count. It has no default
/// value and is deliberately neither `Copy` nor `Clone`, so it is consumed
/// exactly once by [`GrowVec::with_reservation`](crate::GrowVec::with_reservation).
#[derive(Debug, PartialEq, Eq)]
pub struct Reservation {
    capacity: usize,
}

impl Reservation {
    /// Creates a reservation for `capacity` slots.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self { capacity }
    }

    /// The number of slots this reservation asks for.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

/// Builds a capacity reservation to pass to
/// [`GrowVec::with_reservation`](crate::GrowVec::with_reservation).
///
/// ```
/// use growvec::{reserve, GrowVec};
///
/// let vec: GrowVec<u8> = GrowVec::with_reservation(reserve(16)).unwrap();
/// assert_eq!(vec.len(), 0);
/// assert_eq!(vec.capacity(), 16);
/// ```
#[must_use]
pub fn reserve(capacity: usize) -> Reservation {
    Reservation::new(capacity)
}
