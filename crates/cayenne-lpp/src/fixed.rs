//! Big-endian fixed-point fields.
//!
//! Every LPP value is one or more big-endian integers of 1, 2 or 3 bytes,
//! optionally two's-complement, divided by a constant to get the measurement.

use bytes::{Buf, BufMut};

/// Layout of a single fixed-point field inside a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldFormat {
    /// Width in bytes (1..=3).
    pub width: usize,
    /// Two's-complement over `width` bytes when true.
    pub signed: bool,
    /// The measurement is `raw / divisor`.
    pub divisor: u32,
}

impl FieldFormat {
    /// An unsigned field.
    pub const fn unsigned(width: usize, divisor: u32) -> Self {
        Self {
            width,
            signed: false,
            divisor,
        }
    }

    /// A two's-complement field.
    pub const fn signed(width: usize, divisor: u32) -> Self {
        Self {
            width,
            signed: true,
            divisor,
        }
    }

    /// Smallest raw integer the field can carry.
    pub fn min_raw(&self) -> i64 {
        if self.signed {
            -(1i64 << (self.bits() - 1))
        } else {
            0
        }
    }

    /// Largest raw integer the field can carry.
    pub fn max_raw(&self) -> i64 {
        if self.signed {
            (1i64 << (self.bits() - 1)) - 1
        } else {
            (1i64 << self.bits()) - 1
        }
    }

    /// Read the raw integer. The caller guarantees `width` bytes remain.
    pub fn read_raw(&self, src: &mut impl Buf) -> i64 {
        let raw = src.get_uint(self.width) as i64;
        if self.signed {
            sign_extend(raw, self.width)
        } else {
            raw
        }
    }

    /// Write the low `width` bytes of `raw`, big-endian.
    pub fn write_raw(&self, raw: i64, dst: &mut impl BufMut) {
        dst.put_int(raw, self.width);
    }

    /// Scale a raw integer into a measurement.
    pub fn to_value(&self, raw: i64) -> f64 {
        raw as f64 / f64::from(self.divisor)
    }

    /// Descale a measurement, rounding to nearest (ties away from zero).
    ///
    /// Returns `None` when the value is not finite or does not fit the field.
    pub fn to_raw(&self, value: f64) -> Option<i64> {
        let raw = self.descale(value)?;
        if raw < self.min_raw() as f64 || raw > self.max_raw() as f64 {
            return None;
        }
        Some(raw as i64)
    }

    /// Like [`FieldFormat::to_raw`], but saturates at the field bounds.
    ///
    /// Non-finite values still return `None`.
    pub fn to_raw_saturating(&self, value: f64) -> Option<i64> {
        let raw = self.descale(value)?;
        Some(raw.clamp(self.min_raw() as f64, self.max_raw() as f64) as i64)
    }

    fn descale(&self, value: f64) -> Option<f64> {
        if !value.is_finite() {
            return None;
        }
        let raw = (value * f64::from(self.divisor)).round();
        // Large finite inputs can still overflow to infinity.
        raw.is_finite().then_some(raw)
    }

    fn bits(&self) -> u32 {
        8 * self.width as u32
    }
}

/// Reinterpret the low `width` bytes of `raw` as two's-complement.
///
/// Values at or above half the width's range wrap to negative, so a 3-byte
/// field has its sign at bit 23.
pub fn sign_extend(raw: i64, width: usize) -> i64 {
    let bits = 8 * width as u32;
    let half = 1i64 << (bits - 1);
    if raw >= half {
        raw - (1i64 << bits)
    } else {
        raw
    }
}
