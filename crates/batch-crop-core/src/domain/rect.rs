//! The crop rectangle applied to every image in a batch.

use serde::{Deserialize, Serialize};

use crate::error::BatchError;

/// Axis-aligned crop region `(left, top, right, bottom)` in source
/// pixel coordinates.
///
/// Validated once at construction (`left < right`, `top < bottom`) and
/// immutable afterwards. Coordinates may be negative or extend past the
/// source image; the crop engine pads such regions rather than failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CropRect {
    left: i64,
    top: i64,
    right: i64,
    bottom: i64,
}

impl CropRect {
    /// Creates a validated crop rectangle.
    ///
    /// # Errors
    ///
    /// Returns [`BatchError::InvalidRect`] unless `left < right` and
    /// `top < bottom`, or when the span between the edges overflows
    /// `i64`.
    pub fn new(left: i64, top: i64, right: i64, bottom: i64) -> Result<Self, BatchError> {
        if left >= right || top >= bottom {
            return Err(BatchError::InvalidRect {
                left,
                top,
                right,
                bottom,
            });
        }
        // Edge pairs of extreme opposite sign would overflow the
        // width/height subtraction.
        if right.checked_sub(left).is_none() || bottom.checked_sub(top).is_none() {
            return Err(BatchError::InvalidRect {
                left,
                top,
                right,
                bottom,
            });
        }
        Ok(Self {
            left,
            top,
            right,
            bottom,
        })
    }

    /// Left edge in source pixels.
    #[must_use]
    pub const fn left(&self) -> i64 {
        self.left
    }

    /// Top edge in source pixels.
    #[must_use]
    pub const fn top(&self) -> i64 {
        self.top
    }

    /// Right edge in source pixels (exclusive).
    #[must_use]
    pub const fn right(&self) -> i64 {
        self.right
    }

    /// Bottom edge in source pixels (exclusive).
    #[must_use]
    pub const fn bottom(&self) -> i64 {
        self.bottom
    }

    /// Output width in pixels.
    ///
    /// The subtraction cannot overflow; the constructor rejects spans
    /// wider than `i64`.
    #[must_use]
    #[allow(clippy::cast_sign_loss)]
    pub const fn width(&self) -> u64 {
        (self.right - self.left) as u64
    }

    /// Output height in pixels.
    #[must_use]
    #[allow(clippy::cast_sign_loss)]
    pub const fn height(&self) -> u64 {
        (self.bottom - self.top) as u64
    }
}
