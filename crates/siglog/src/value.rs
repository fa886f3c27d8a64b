use num_bigint::BigUint;
use num_traits::{One, Zero};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ValueError {
    #[error("invalid bit character {0:?}")]
    InvalidBitChar(char),
    #[error("value does not fit in {width} bits")]
    Overflow { width: usize },
}

/// A captured four-state signal value.
///
/// Stored as a value/mask plane pair: a set mask bit marks an undefined
/// (`x`) position. Value bits under the mask are kept cleared, so two
/// snapshots compare equal exactly when they render the same.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignalValue {
    width: usize,
    value: BigUint,
    mask: BigUint,
}

impl SignalValue {
    /// Parse a bit-text representation (`0`, `1`, `x`, `z`, any case).
    ///
    /// Surrounding whitespace is ignored. `z` is treated as undefined and
    /// collapses to `x`.
    pub fn from_bits(text: &str) -> Result<Self, ValueError> {
        let text = text.trim();
        let mut value = BigUint::zero();
        let mut mask = BigUint::zero();
        for c in text.chars() {
            value <<= 1;
            mask <<= 1;
            match c {
                '0' => {}
                '1' => value |= BigUint::one(),
                'x' | 'X' | 'z' | 'Z' => mask |= BigUint::one(),
                other => return Err(ValueError::InvalidBitChar(other)),
            }
        }
        Ok(Self {
            width: text.len(),
            value,
            mask,
        })
    }

    /// Build a fully defined value of the given width.
    pub fn from_int(width: usize, value: impl Into<BigUint>) -> Result<Self, ValueError> {
        let value = value.into();
        if value.bits() > width as u64 {
            return Err(ValueError::Overflow { width });
        }
        Ok(Self {
            width,
            value,
            mask: BigUint::zero(),
        })
    }

    /// Build from a simulator-style `(value, mask)` plane pair.
    ///
    /// Both planes are truncated to `width`, and value bits at undefined
    /// positions are cleared.
    pub fn from_four_state(width: usize, value: BigUint, mask: BigUint) -> Self {
        let ones = (BigUint::one() << width) - BigUint::one();
        let mask = mask & &ones;
        let value = value & &ones & (&ones ^ &mask);
        Self { width, value, mask }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn value(&self) -> &BigUint {
        &self.value
    }

    pub fn mask(&self) -> &BigUint {
        &self.mask
    }

    /// True when no bit is undefined.
    pub fn is_fully_defined(&self) -> bool {
        self.mask.is_zero()
    }

    /// The integer value, or `None` if any bit is undefined.
    pub fn to_integer(&self) -> Option<&BigUint> {
        self.mask.is_zero().then_some(&self.value)
    }
}

impl std::fmt::Display for SignalValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for i in (0..self.width).rev() {
            let c = if self.mask.bit(i as u64) {
                'x'
            } else if self.value.bit(i as u64) {
                '1'
            } else {
                '0'
            };
            write!(f, "{c}")?;
        }
        Ok(())
    }
}
