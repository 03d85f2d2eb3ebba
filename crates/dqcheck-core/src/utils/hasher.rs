use std::hash::{BuildHasher, Hasher};
use xxhash_rust::xxh3::Xxh3;

use crate::types::Value;

#[derive(Default, Clone)]
pub struct Xxh3Hasher(Xxh3);

impl Hasher for Xxh3Hasher {
    #[inline]
    fn finish(&self) -> u64 {
        self.0.finish()
    }
    #[inline]
    fn write(&mut self, bytes: &[u8]) {
        self.0.write(bytes);
    }
}

/// `BuildHasher` for the hash sets and maps keyed by [`ValueKey`].
#[derive(Clone, Default)]
pub struct Xxh3Builder;

impl BuildHasher for Xxh3Builder {
    type Hasher = Xxh3Hasher;

    #[inline]
    fn build_hasher(&self) -> Self::Hasher {
        Xxh3Hasher(Xxh3::new())
    }
}

/// Exact identity of a non-missing cell, used as a hash map key.
///
/// Numbers compare by value: an integral float that fits a 64-bit integer
/// keys as that integer, so `1` and `1.0` are equal while `2^53` and
/// `2^53 + 1` stay distinct.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ValueKey {
    Integer(i64),
    /// Above `i64::MAX`.
    Unsigned(u64),
    /// Bit pattern of a non-integral or out-of-range float.
    Float(u64),
    Text(String),
    Boolean(bool),
}

const TWO_POW_63: f64 = 9_223_372_036_854_775_808.0;
const TWO_POW_64: f64 = 18_446_744_073_709_551_616.0;

impl ValueKey {
    /// `None` for a missing value.
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Null => None,
            Value::Integer(i) => Some(ValueKey::Integer(*i)),
            Value::Unsigned(u) => Some(Self::from_unsigned(*u)),
            Value::Float(f) => Self::from_float(*f),
            Value::Text(s) => Some(ValueKey::Text(s.clone())),
            Value::Boolean(b) => Some(ValueKey::Boolean(*b)),
        }
    }

    fn from_unsigned(u: u64) -> Self {
        i64::try_from(u).map_or(ValueKey::Unsigned(u), ValueKey::Integer)
    }

    fn from_float(f: f64) -> Option<Self> {
        if f.is_nan() {
            return None;
        }
        if f.fract() == 0.0 {
            // -0.0 lands on Integer(0)
            if (-TWO_POW_63..TWO_POW_63).contains(&f) {
                return Some(ValueKey::Integer(f as i64));
            }
            if (TWO_POW_63..TWO_POW_64).contains(&f) {
                return Some(ValueKey::Unsigned(f as u64));
            }
        }
        Some(ValueKey::Float(f.to_bits()))
    }
}
