use std::fmt;

/// Well-known IFD identifiers.
///
/// Numeric values match the internal enum assignments from the specification so that callers
/// passing raw ids (e.g. through a CLI) can map back and forth without a lookup table.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum IfdId {
    Primary = 0,
    Thumbnail = 1,
    Exif = 2,
    Gps = 3,
    Iop = 4,
    Maker = 5,
    Embedded = 6,
}

impl IfdId {
    #[must_use]
    pub fn from_u32(n: u32) -> Option<Self> {
        match n {
            0 => Some(Self::Primary),
            1 => Some(Self::Thumbnail),
            2 => Some(Self::Exif),
            3 => Some(Self::Gps),
            4 => Some(Self::Iop),
            5 => Some(Self::Maker),
            6 => Some(Self::Embedded),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Primary => "PRIMARY",
            Self::Thumbnail => "THUMBNAIL",
            Self::Exif => "EXIF",
            Self::Gps => "GPS",
            Self::Iop => "IOP",
            Self::Maker => "MAKER",
            Self::Embedded => "EMBEDDED",
        }
    }
}

impl fmt::Display for IfdId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where a non-root IFD hangs off the tree, so the editor (C9) can reach the owning slot
/// without a true back-pointer (see design notes: "cyclic or back-referenced graph").
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum IfdLocation {
    /// The PRIMARY IFD itself; the tree root.
    Root,
    /// Reachable only via PRIMARY's `next` link (THUMBNAIL).
    Chained,
    /// Owned by a `Value::EmbeddedIfd`/`Value::Foreign` at `tag` inside the IFD `parent`.
    EmbeddedIn { parent: IfdId, tag: u16 },
}
