//! Interoperability sub-IFD tag catalog, split out from GPS because both directories use
//! small tag numbers starting at 0x0001.

use super::{CountSpec, FormatSpec, KnownTag, TagInfo};
use crate::exifreadable::*;
use crate::value::TiffType::*;

pub(crate) fn lookup(tag: u16) -> Option<TagInfo> {
    Some(match tag {
        0x0001 => TagInfo {
            name: KnownTag::InteroperabilityIndex,
            unit: "none",
            format: FormatSpec::Exact(AsciiString),
            count: CountSpec::Any,
            readable: strpass,
        },
        0x0002 => TagInfo {
            name: KnownTag::InteroperabilityVersion,
            unit: "none",
            format: FormatSpec::Exact(Undefined),
            count: CountSpec::Any,
            readable: undefined_as_ascii,
        },
        _ => return None,
    })
}
