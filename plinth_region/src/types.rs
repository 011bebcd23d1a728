// Copyright 2025 the Plinth Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Primitive geometry types and helpers.

use core::cmp::Ordering;
use core::fmt::Debug;

/// Numeric scalar abstraction for region coordinates.
///
/// Regions are stored as origin and size, so the only arithmetic needed is
/// addition (to find the far edges). Integer implementations saturate instead
/// of overflowing.
pub trait Scalar: Copy + PartialOrd + Debug {
    /// Add two scalar values.
    fn add(a: Self, b: Self) -> Self;

    /// Zero value for the scalar type.
    fn zero() -> Self;
}

impl Scalar for i32 {
    #[inline]
    fn add(a: Self, b: Self) -> Self {
        a.saturating_add(b)
    }

    #[inline]
    fn zero() -> Self {
        0
    }
}

impl Scalar for i64 {
    #[inline]
    fn add(a: Self, b: Self) -> Self {
        a.saturating_add(b)
    }

    #[inline]
    fn zero() -> Self {
        0
    }
}

impl Scalar for f32 {
    #[inline]
    fn add(a: Self, b: Self) -> Self {
        a + b
    }

    #[inline]
    fn zero() -> Self {
        0.0
    }
}

impl Scalar for f64 {
    #[inline]
    fn add(a: Self, b: Self) -> Self {
        a + b
    }

    #[inline]
    fn zero() -> Self {
        0.0
    }
}

/// A rectangular region given by its top-left corner and its size.
///
/// Regions are closed on every edge: a point lying exactly on the right or
/// bottom edge is inside. A region with zero width and height still contains
/// its own origin.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Region<T> {
    /// Left edge.
    pub x: T,
    /// Top edge.
    pub y: T,
    /// Horizontal extent.
    pub width: T,
    /// Vertical extent.
    pub height: T,
}

impl<T> Region<T> {
    /// Create a region from origin and size.
    pub const fn new(x: T, y: T, width: T, height: T) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

impl<T: Scalar> Region<T> {
    /// The right edge, `x + width`.
    #[inline]
    pub fn right(&self) -> T {
        T::add(self.x, self.width)
    }

    /// The bottom edge, `y + height`.
    #[inline]
    pub fn bottom(&self) -> T {
        T::add(self.y, self.height)
    }

    /// Whether the point lies in `[x, x + width] × [y, y + height]`.
    ///
    /// Returns `false` for unordered inputs (NaN coordinates).
    pub fn contains_point(&self, x: T, y: T) -> bool {
        le(self.x, x) && le(x, self.right()) && le(self.y, y) && le(y, self.bottom())
    }

    /// Whether two regions share at least one point (edges included).
    pub fn intersects(&self, other: &Self) -> bool {
        le(self.x, other.right())
            && le(other.x, self.right())
            && le(self.y, other.bottom())
            && le(other.y, self.bottom())
    }

    /// True if either extent is negative. Zero-sized regions are not empty.
    pub fn is_empty(&self) -> bool {
        lt(self.width, T::zero()) || lt(self.height, T::zero())
    }
}

pub(crate) fn le<T: PartialOrd>(a: T, b: T) -> bool {
    a.partial_cmp(&b)
        .map(|o| o != Ordering::Greater)
        .unwrap_or(false)
}

pub(crate) fn lt<T: PartialOrd>(a: T, b: T) -> bool {
    a.partial_cmp(&b)
        .map(|o| o == Ordering::Less)
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edges_are_inside() {
        let r = Region::new(10, 20, 30, 40);
        assert!(r.contains_point(10, 20));
        assert!(r.contains_point(40, 60));
        assert!(r.contains_point(10, 60));
        assert!(r.contains_point(40, 20));
        assert!(r.contains_point(25, 35));
    }

    #[test]
    fn just_outside_is_outside() {
        let r = Region::new(10, 20, 30, 40);
        assert!(!r.contains_point(9, 20));
        assert!(!r.contains_point(41, 20));
        assert!(!r.contains_point(10, 19));
        assert!(!r.contains_point(10, 61));
    }

    #[test]
    fn float_boundaries_are_closed() {
        let r = Region::new(0.0_f64, 0.0, 10.0, 10.0);
        assert!(r.contains_point(10.0, 10.0));
        assert!(r.contains_point(0.0, 0.0));
        assert!(!r.contains_point(10.000_001, 5.0));
        assert!(!r.contains_point(-0.000_001, 5.0));
    }

    #[test]
    fn nan_is_never_inside() {
        let r = Region::new(0.0_f32, 0.0, 10.0, 10.0);
        assert!(!r.contains_point(f32::NAN, 5.0));
        assert!(!r.contains_point(5.0, f32::NAN));
    }

    #[test]
    fn zero_sized_region_contains_its_origin() {
        let r = Region::new(3_i64, 4, 0, 0);
        assert!(r.contains_point(3, 4));
        assert!(!r.contains_point(3, 5));
        assert!(!r.is_empty());
    }

    #[test]
    fn negative_extent_is_empty_and_contains_nothing() {
        let r = Region::new(5, 5, -2, 3);
        assert!(r.is_empty());
        assert!(!r.contains_point(4, 6));
        assert!(!r.contains_point(5, 6));
    }

    #[test]
    fn integer_edges_saturate() {
        let r = Region::new(i32::MAX - 1, 0, 10, 10);
        assert_eq!(r.right(), i32::MAX);
        assert!(r.contains_point(i32::MAX, 0));
    }

    #[test]
    fn touching_regions_intersect() {
        let a = Region::new(0, 0, 10, 10);
        let b = Region::new(10, 10, 5, 5);
        let c = Region::new(11, 0, 5, 5);
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
        assert!(!a.intersects(&c));
    }
}
