//! Value model (component C2): a tagged sum type with one arm per TIFF primitive, plus
//! `EmbeddedIfd` for child directories and `Foreign` for maker-note sub-descriptors.

use crate::descriptor::Descriptor;
use crate::ifd::Ifd;
use crate::rational::{IRational, URational};
use crate::tags::{KnownTag, ReadableFn};
use std::cell::Cell;
use std::fmt;

/// TIFF primitive type codes, per the specification's numeric assignments.
///
/// `Unknown` preserves the original on-disk type code for a type this crate doesn't
/// recognize, so that `Keep`-policy round-tripping reproduces the exact original code
/// rather than coercing it to `UnsignedByte` (see SPEC_FULL.md open-question decisions).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TiffType {
    UnsignedByte,
    AsciiString,
    UnsignedShort,
    UnsignedLong,
    UnsignedRational,
    SignedByte,
    Undefined,
    SignedShort,
    SignedLong,
    SignedRational,
    Float,
    Double,
    Unknown(u16),
}

impl TiffType {
    #[must_use]
    pub fn from_code(code: u16) -> Self {
        match code {
            1 => Self::UnsignedByte,
            2 => Self::AsciiString,
            3 => Self::UnsignedShort,
            4 => Self::UnsignedLong,
            5 => Self::UnsignedRational,
            6 => Self::SignedByte,
            7 => Self::Undefined,
            8 => Self::SignedShort,
            9 => Self::SignedLong,
            10 => Self::SignedRational,
            11 => Self::Float,
            12 => Self::Double,
            n => Self::Unknown(n),
        }
    }

    #[must_use]
    pub fn code(&self) -> u16 {
        match self {
            Self::UnsignedByte => 1,
            Self::AsciiString => 2,
            Self::UnsignedShort => 3,
            Self::UnsignedLong => 4,
            Self::UnsignedRational => 5,
            Self::SignedByte => 6,
            Self::Undefined => 7,
            Self::SignedShort => 8,
            Self::SignedLong => 9,
            Self::SignedRational => 10,
            Self::Float => 11,
            Self::Double => 12,
            Self::Unknown(n) => *n,
        }
    }

    /// Size in bytes of a single element of this type. Matches `IfdEntry::size()` in the
    /// teacher crate; `Unknown` is treated as opaque bytes, one byte per element.
    #[must_use]
    pub fn element_size(&self) -> usize {
        match self {
            Self::UnsignedByte | Self::AsciiString | Self::SignedByte | Self::Undefined | Self::Unknown(_) => 1,
            Self::UnsignedShort | Self::SignedShort => 2,
            Self::UnsignedLong | Self::SignedLong | Self::Float => 4,
            Self::UnsignedRational | Self::SignedRational | Self::Double => 8,
        }
    }
}

/// Sum-type payload carried by a `Value`. Each arm is the decoded array for one TIFF
/// primitive, plus the two tree-structural arms (`EmbeddedIfd`, `Foreign`).
pub enum Payload {
    UByte(Vec<u8>),
    SByte(Vec<i8>),
    /// Raw ASCII/UTF-8 bytes, NUL included if present in `count`. Kept as raw bytes (not a
    /// lossily-decoded `String`, unlike the teacher) so that byte-for-byte round-tripping
    /// (P1) holds even for tags whose bytes aren't valid UTF-8.
    Ascii(Vec<u8>),
    UShort(Vec<u16>),
    SShort(Vec<i16>),
    ULong(Vec<u32>),
    SLong(Vec<i32>),
    URational(Vec<URational>),
    SRational(Vec<IRational>),
    Float(Vec<f32>),
    Double(Vec<f64>),
    /// Opaque bytes for `Undefined`-typed tags and for recognized-but-undecoded type codes.
    /// `bool` records this descriptor's endianness, for payloads whose internal structure
    /// (e.g. a UTF-16 comment) is endian-sensitive.
    Unknown(Vec<u8>, bool),
    /// A child IFD reachable from this entry (EXIF/GPS/IOP/embedded sub-images). Owned: the
    /// tree holds the only reference, dropping this value drops the whole subtree.
    EmbeddedIfd(Box<Ifd>),
    /// A maker-note sub-descriptor with its own endianness/origin (component C8).
    Foreign(Box<ForeignDescriptor>),
}

/// A maker-note sub-region: a byte prefix (vendor signature/version) that isn't itself an
/// IFD, followed by a nested `Descriptor` whose offsets are relative to its own buffer.
pub struct ForeignDescriptor {
    pub prefix: Vec<u8>,
    pub ifd_origin: u32,
    pub descriptor: Descriptor,
    /// Total serialized size (prefix + IFD entries + IFD data), filled in by the probe pass
    /// of the serializer (C10) and reused for the real pass. `None` until first serialized.
    pub(crate) cached_size: Cell<Option<u32>>,
}

/// One parsed IFD entry: the (tag, type, count) triple plus its decoded payload.
pub struct Value {
    pub tag: u16,
    pub ty: TiffType,
    pub count: u32,
    pub payload: Payload,
    /// External-collaborator concerns: a known name and a display-formatting callback.
    /// `None` for tags the catalog didn't recognize (`UnknownToMe`).
    pub name: Option<KnownTag>,
    pub readable: Option<ReadableFn>,
}

impl Value {
    pub(crate) fn new(tag: u16, ty: TiffType, count: u32, payload: Payload) -> Self {
        Self { tag, ty, count, payload, name: None, readable: None }
    }

    pub(crate) fn with_name(mut self, name: KnownTag, readable: ReadableFn) -> Self {
        self.name = Some(name);
        self.readable = Some(readable);
        self
    }

    /// Human-readable rendering of this value, using the tag's display callback if known,
    /// falling back to the raw payload's `Display` impl otherwise. Component C11 territory;
    /// never affects round-tripping.
    #[must_use]
    pub fn readable_string(&self) -> String {
        if let Some(f) = self.readable {
            if let Some(s) = f(self.tag, self) {
                return s.into_owned();
            }
        }
        self.payload.to_string()
    }

    /// Get value as an integer. Out of bounds indexes and non-integer payloads return `None`.
    #[must_use]
    pub fn to_i64(&self, index: usize) -> Option<i64> {
        match &self.payload {
            Payload::UByte(v) => v.get(index).copied().map(From::from),
            Payload::UShort(v) => v.get(index).copied().map(From::from),
            Payload::ULong(v) => v.get(index).copied().map(From::from),
            Payload::SByte(v) => v.get(index).copied().map(From::from),
            Payload::SShort(v) => v.get(index).copied().map(From::from),
            Payload::SLong(v) => v.get(index).copied().map(From::from),
            _ => None,
        }
    }

    /// Get value as a floating-point number. Out of bounds indexes and non-numeric payloads
    /// return `None`.
    #[must_use]
    pub fn to_f64(&self, index: usize) -> Option<f64> {
        match &self.payload {
            Payload::UByte(v) => v.get(index).copied().map(From::from),
            Payload::UShort(v) => v.get(index).copied().map(From::from),
            Payload::ULong(v) => v.get(index).copied().map(From::from),
            Payload::SByte(v) => v.get(index).copied().map(From::from),
            Payload::SShort(v) => v.get(index).copied().map(From::from),
            Payload::SLong(v) => v.get(index).copied().map(From::from),
            Payload::Float(v) => v.get(index).copied().map(From::from),
            Payload::Double(v) => v.get(index).copied(),
            Payload::URational(v) => v.get(index).map(URational::value),
            Payload::SRational(v) => v.get(index).map(IRational::value),
            _ => None,
        }
    }

    /// Raw byte size of this value's encoded form (`count * size_of(type)`, rationals
    /// counted as 8 bytes each). Per invariant I1 this determines whether the value is
    /// stored inline (`<= 4`) or in the data area.
    #[must_use]
    pub(crate) fn byte_size(&self) -> u32 {
        match &self.payload {
            Payload::EmbeddedIfd(_) | Payload::Foreign(_) => 4,
            _ => self.count.saturating_mul(self.ty.element_size() as u32),
        }
    }

    #[must_use]
    pub(crate) fn is_inline(&self) -> bool {
        self.byte_size() <= 4
    }
}

impl fmt::Display for Payload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn join<T: fmt::Display>(f: &mut fmt::Formatter<'_>, v: &[T]) -> fmt::Result {
            if v.len() == 1 {
                return write!(f, "{}", v[0]);
            }
            f.write_str("[")?;
            for (i, x) in v.iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{x}")?;
            }
            f.write_str("]")
        }
        match self {
            Self::Ascii(b) => f.write_str(&String::from_utf8_lossy(strip_nul(b))),
            Self::UByte(v) => join(f, v),
            Self::SByte(v) => join(f, v),
            Self::UShort(v) => join(f, v),
            Self::SShort(v) => join(f, v),
            Self::ULong(v) => join(f, v),
            Self::SLong(v) => join(f, v),
            Self::Float(v) => join(f, v),
            Self::Double(v) => join(f, v),
            Self::URational(v) => join(f, v),
            Self::SRational(v) => join(f, v),
            Self::Unknown(v, _) => write!(f, "<{} bytes>", v.len()),
            Self::EmbeddedIfd(_) => f.write_str("<embedded IFD>"),
            Self::Foreign(_) => f.write_str("<maker note>"),
        }
    }
}

fn strip_nul(b: &[u8]) -> &[u8] {
    match b.iter().position(|&c| c == 0) {
        Some(i) => &b[..i],
        None => b,
    }
}
