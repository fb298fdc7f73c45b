use std::fmt;
use std::fmt::Display;

/// Encapsulation of the TIFF type that represents a signed rational number
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct IRational {
    pub numerator: i32,
    pub denominator: i32,
}

impl IRational {
    /// Floating point value (numerator divided by denominator)
    #[must_use]
    pub fn value(&self) -> f64 {
        f64::from(self.numerator) / f64::from(self.denominator)
    }

    pub(crate) fn write(&self, le: bool, out: &mut Vec<u8>) {
        out.extend_from_slice(&if le { self.numerator.to_le_bytes() } else { self.numerator.to_be_bytes() });
        out.extend_from_slice(&if le { self.denominator.to_le_bytes() } else { self.denominator.to_be_bytes() });
    }
}

impl Display for IRational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
/// Encapsulation of the TIFF type that represents an unsigned rational number
pub struct URational {
    pub numerator: u32,
    pub denominator: u32,
}

impl URational {
    /// Floating point value (numerator divided by denominator)
    #[must_use]
    pub fn value(&self) -> f64 {
        f64::from(self.numerator) / f64::from(self.denominator)
    }

    pub(crate) fn write(&self, le: bool, out: &mut Vec<u8>) {
        out.extend_from_slice(&if le { self.numerator.to_le_bytes() } else { self.numerator.to_be_bytes() });
        out.extend_from_slice(&if le { self.denominator.to_le_bytes() } else { self.denominator.to_be_bytes() });
    }
}

impl Display for URational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}
