//! Nikon maker-note dialect (component C8).
//!
//! Layout: an 8-byte vendor prefix (`Nikon\0` plus a 2-byte format version) followed by a
//! complete, self-contained TIFF structure — its own endian marker, magic number, and
//! first-IFD offset, all relative to the start of that nested TIFF (payload offset 8).
//! Grounded on `examples/other_examples/366b99c1_elvis-epx-rexif__src-nikon.rs.rs`, which
//! re-enters ordinary TIFF IFD parsing on `payload[8..]`.

use crate::descriptor::{Control, Descriptor};
use crate::error::ExifError;
use crate::ids::IfdId;
use crate::tags::{CountSpec, FormatSpec, KnownTag, TagInfo};
use crate::value::{ForeignDescriptor, Payload, TiffType, Value};
use std::cell::Cell;

const PREFIX: &[u8] = b"Nikon\0";

pub(crate) fn try_parse(tag: u16, bytes: &[u8], control: &Control) -> Result<Option<Value>, ExifError> {
    if bytes.len() < 18 || &bytes[0..6] != PREFIX {
        return Ok(None);
    }
    let le = match &bytes[8..10] {
        b"II" => true,
        b"MM" => false,
        _ => return Ok(None),
    };
    let magic = crate::lowlevel::read_u16(le, &bytes[10..12]);
    if magic != Some(0x002A) {
        return Ok(None);
    }
    let ifd0 = crate::lowlevel::read_u32(le, &bytes[12..16]).ok_or(ExifError::TiffTruncated)? as usize;

    let mut sub = Descriptor::empty(bytes.to_vec(), le, 0, control.clone());
    let (root, _next) = crate::parser::walk_maker_ifd(&mut sub, IfdId::Maker, 8 + ifd0, lookup)?;
    sub.root = Some(root);
    sub.register(IfdId::Maker, crate::ids::IfdLocation::Root);

    let foreign = ForeignDescriptor { prefix: bytes[0..8].to_vec(), ifd_origin: 8, descriptor: sub, cached_size: Cell::new(None) };
    Ok(Some(Value::new(tag, TiffType::Undefined, bytes.len() as u32, Payload::Foreign(Box::new(foreign)))))
}

fn lookup(tag: u16) -> Option<TagInfo> {
    Some(match tag {
        0x0002 => TagInfo {
            name: KnownTag::NikonISOSettings,
            unit: "ISO",
            format: FormatSpec::Exact(TiffType::UnsignedRational),
            count: CountSpec::Any,
            readable: crate::exifreadable::rational_values,
        },
        0x0003 => TagInfo {
            name: KnownTag::NikonColorMode,
            unit: "none",
            format: FormatSpec::Exact(TiffType::AsciiString),
            count: CountSpec::Any,
            readable: crate::exifreadable::strpass,
        },
        0x0004 => TagInfo {
            name: KnownTag::NikonQuality,
            unit: "none",
            format: FormatSpec::Exact(TiffType::AsciiString),
            count: CountSpec::Any,
            readable: crate::exifreadable::strpass,
        },
        0x0005 => TagInfo {
            name: KnownTag::NikonWhiteBalance,
            unit: "none",
            format: FormatSpec::Exact(TiffType::AsciiString),
            count: CountSpec::Any,
            readable: crate::exifreadable::strpass,
        },
        0x0007 => TagInfo {
            name: KnownTag::NikonFocusMode,
            unit: "none",
            format: FormatSpec::Exact(TiffType::AsciiString),
            count: CountSpec::Any,
            readable: crate::exifreadable::strpass,
        },
        0x0084 => TagInfo {
            name: KnownTag::NikonLensType,
            unit: "none",
            format: FormatSpec::Exact(TiffType::UnsignedRational),
            count: CountSpec::Exact(4),
            readable: crate::exifreadable::rational_values,
        },
        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_non_nikon_prefix() {
        let control = Control::default();
        let bytes = vec![0u8; 20];
        assert!(try_parse(0x927c, &bytes, &control).unwrap().is_none());
    }

    #[test]
    fn parses_embedded_nikon_tiff() {
        let mut bytes = b"Nikon\0".to_vec();
        bytes.extend_from_slice(&[0x02, 0x10]); // version
        bytes.extend_from_slice(b"II");
        bytes.extend_from_slice(&0x002Au16.to_le_bytes());
        bytes.extend_from_slice(&8u32.to_le_bytes()); // ifd0 @ +8 within nested tiff
        bytes.extend_from_slice(&0u16.to_le_bytes()); // 0 entries
        bytes.extend_from_slice(&0u32.to_le_bytes()); // next = 0

        let control = Control::default();
        let v = try_parse(0x927c, &bytes, &control).unwrap().unwrap();
        match v.payload {
            Payload::Foreign(f) => assert!(f.descriptor.has_ifd(IfdId::Maker)),
            _ => panic!("expected Foreign payload"),
        }
    }
}
