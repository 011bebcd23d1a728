// Copyright 2025 the Plinth Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Plinth Region: rectangles and an ordered region list for flat widget sets.
//!
//! - [`Region`] stores origin and size and hit-tests on the closed interval:
//!   a point on the right or bottom edge is inside.
//! - [`RegionList`] keeps regions with payloads in insertion order and hands out
//!   stable [`Key`]s that are never reused.
//! - Point queries scan linearly and report matches in insertion order, so the
//!   earliest inserted region is the winner for overlapping regions.
//!
//! It is generic over the scalar type `T` (`i32`, `i64`, `f32`, `f64`) and does
//! not depend on any geometry crate.
//!
//! # Example
//!
//! ```rust
//! use plinth_region::{Region, RegionList};
//!
//! let mut list: RegionList<i32, &str> = RegionList::new();
//! let left = list.push(Region::new(0, 0, 10, 10), "left");
//! let right = list.push(Region::new(20, 0, 10, 10), "right");
//!
//! // Edges count as inside.
//! assert_eq!(list.first_at(10, 10), Some(left));
//! assert_eq!(list.first_at(20, 0), Some(right));
//! assert_eq!(list.first_at(15, 5), None);
//!
//! assert_eq!(list.get(right), Some(&"right"));
//! ```
//!
//! ### Float semantics
//!
//! NaN coordinates never hit anything. Infinite extents behave as expected.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod list;
pub mod types;

pub use list::{Key, RegionList};
pub use types::{Region, Scalar};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_widgets_side_by_side() {
        let mut list: RegionList<f64, u32> = RegionList::new();
        let w1 = list.push(Region::new(0.0, 0.0, 10.0, 10.0), 1);
        let w2 = list.push(Region::new(20.0, 0.0, 10.0, 10.0), 2);
        assert_eq!(list.first_at(5.0, 5.0), Some(w1));
        assert_eq!(list.first_at(25.0, 5.0), Some(w2));
        assert_eq!(list.first_at(25.0, 25.0), None);
        assert_eq!(list.first_at(15.0, 5.0), None);
    }

    #[test]
    fn identical_regions_resolve_to_first() {
        let mut list: RegionList<i32, ()> = RegionList::new();
        let first = list.push(Region::new(0, 0, 5, 5), ());
        let _second = list.push(Region::new(0, 0, 5, 5), ());
        for x in 0..=5 {
            for y in 0..=5 {
                assert_eq!(list.first_at(x, y), Some(first));
            }
        }
    }
}
