#![no_std]

//! `GrowVec`: a growable array container built on its own buffer ownership
//! type.
//!
//! The crate reimplements the dynamic-array abstraction from scratch: a
//! private raw buffer type owns a single heap allocation and nothing else,
//! while [`GrowVec`] layers a logical length, amortized-doubling growth and
//! the shifting algorithms for insertion and removal on top of it. Every
//! reallocation builds a complete replacement buffer and swaps it in, so a
//! failed allocation or a panicking element constructor leaves the container
//! exactly as it was.
//!
//! This crate is `no_std` compatible; it depends on `alloc` for the backing
//! buffer and on nothing else at runtime. Enable the optional `std` feature
//! to forward `thiserror/std`.
//!
//! # Growth policy
//!
//! Appending to a full vector doubles its capacity; a vector with capacity 0
//! grows to capacity exactly 1. [`GrowVec::resize`] grows to
//! `max(new_len, capacity * 2)`. This is the load-bearing amortized O(1)
//! append guarantee.
//!
//! ```
//! use growvec::GrowVec;
//!
//! let mut vec: GrowVec<u32> = GrowVec::new();
//! assert_eq!(vec.capacity(), 0);
//!
//! vec.push(1).unwrap();
//! assert_eq!(vec.capacity(), 1);
//! vec.push(2).unwrap();
//! assert_eq!(vec.capacity(), 2);
//! vec.push(3).unwrap();
//! assert_eq!(vec.capacity(), 4);
//! ```
//!
//! # Access tiers
//!
//! Indexed access comes in three deliberate tiers: `vec[i]` panics on misuse
//! (the conventional operator contract), [`GrowVec::try_get`] reports
//! [`GrowVecError::IndexOutOfBounds`], and the `unsafe`
//! [`GrowVec::get_unchecked`] skips the check entirely for hot paths.
//!
//! ```
//! use growvec::{GrowVec, GrowVecError};
//!
//! let mut vec = GrowVec::from_slice(&[10, 20, 30]).unwrap();
//! assert_eq!(vec[1], 20);
//! assert_eq!(
//!     vec.try_get(3),
//!     Err(GrowVecError::IndexOutOfBounds { index: 3, length: 3 })
//! );
//!
//! vec.insert(1, 15).unwrap();
//! assert_eq!(vec.as_slice(), &[10, 15, 20, 30]);
//! let removed = vec.remove(0);
//! assert_eq!(removed, 10);
//! assert_eq!(vec.as_slice(), &[15, 20, 30]);
//! ```
//!
//! # Pre-sizing
//!
//! A [`Reservation`] communicates "allocate this much, expose nothing yet"
//! and is consumed exactly once:
//!
//! ```
//! use growvec::{reserve, GrowVec};
//!
//! let mut vec: GrowVec<u64> = GrowVec::with_reservation(reserve(8)).unwrap();
//! assert_eq!((vec.len(), vec.capacity()), (0, 8));
//!
//! for i in 0..8 {
//!     vec.push(i).unwrap();
//! }
//! // Still the reserved allocation, no regrowth happened.
//! assert_eq!(vec.capacity(), 8);
//! ```

extern crate alloc;

mod buffer;
pub mod error;
pub mod growvec;
pub mod iter;
pub mod reserve;

pub use error::GrowVecError;
pub use error::Result;
pub use growvec::GrowVec;
pub use iter::IntoIter;
pub use reserve::{reserve, Reservation};
