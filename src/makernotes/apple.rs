//! Apple maker-note dialect (component C8).
//!
//! Layout: `Apple iOS\0` (10 bytes) + a big-endian `u16` version (must be 1) + a 2-byte
//! endian marker at payload offset 12, then a TIFF-style IFD at payload offset 14 whose entry
//! offsets are relative to the start of the payload (not to the IFD itself). Several entries
//! are themselves binary property lists (`bplist00`), rendered through `super::bplist`.

use super::bplist;
use crate::descriptor::{Control, Descriptor};
use crate::error::ExifError;
use crate::ids::IfdId;
use crate::tags::{CountSpec, FormatSpec, KnownTag, TagInfo};
use crate::value::{ForeignDescriptor, Payload, TiffType, Value};
use std::borrow::Cow;
use std::cell::Cell;

const SIGNATURE: &[u8] = b"Apple iOS\0";

/// Try to parse `bytes` (the full decoded MakerNote payload) as an Apple maker note. Returns
/// `Ok(None)` if the signature doesn't match, so the caller can try the next vendor.
pub(crate) fn try_parse(tag: u16, bytes: &[u8], control: &Control) -> Result<Option<Value>, ExifError> {
    if bytes.len() < 16 || &bytes[0..10] != SIGNATURE {
        return Ok(None);
    }
    let version = u16::from_be_bytes([bytes[10], bytes[11]]);
    if version != 1 {
        return Ok(None);
    }
    let le = match &bytes[12..14] {
        b"II" => true,
        b"MM" => false,
        _ => return Ok(None),
    };

    let mut sub = Descriptor::empty(bytes.to_vec(), le, 0, control.clone());
    let (root, _next) = crate::parser::walk_maker_ifd(&mut sub, IfdId::Maker, 14, lookup)?;
    sub.root = Some(root);
    sub.register(IfdId::Maker, crate::ids::IfdLocation::Root);

    let foreign = ForeignDescriptor { prefix: bytes[0..14].to_vec(), ifd_origin: 14, descriptor: sub, cached_size: Cell::new(None) };
    Ok(Some(Value::new(tag, TiffType::Undefined, bytes.len() as u32, Payload::Foreign(Box::new(foreign)))))
}

fn lookup(tag: u16) -> Option<TagInfo> {
    Some(match tag {
        0x0002 | 0x0003 => TagInfo {
            name: KnownTag::AppleUnknownPlist,
            unit: "none",
            format: FormatSpec::Exact(TiffType::Undefined),
            count: CountSpec::Any,
            readable: plist_readable,
        },
        0x0008 => TagInfo {
            name: KnownTag::AppleAccelerationVector,
            unit: "g",
            format: FormatSpec::Exact(TiffType::SignedRational),
            count: CountSpec::Exact(3),
            readable: crate::exifreadable::signed_rational_values,
        },
        0x000a => TagInfo {
            name: KnownTag::AppleHDRImageType,
            unit: "none",
            format: FormatSpec::OneOf(&[TiffType::UnsignedLong, TiffType::UnsignedShort]),
            count: CountSpec::Exact(1),
            readable: crate::exifreadable::strpass,
        },
        0x000e => TagInfo {
            name: KnownTag::AppleOrientation,
            unit: "none",
            format: FormatSpec::OneOf(&[TiffType::UnsignedLong, TiffType::UnsignedShort]),
            count: CountSpec::Exact(1),
            readable: crate::exifreadable::strpass,
        },
        0x0011 => TagInfo {
            name: KnownTag::AppleRunTime,
            unit: "none",
            format: FormatSpec::Exact(TiffType::Undefined),
            count: CountSpec::Any,
            readable: plist_readable,
        },
        _ => return None,
    })
}

fn plist_readable(_tag: u16, v: &Value) -> Option<Cow<'static, str>> {
    match &v.payload {
        Payload::Unknown(bytes, _) => bplist::parse(bytes).ok().map(|p| Cow::Owned(p.to_string())),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_non_apple_signature() {
        let control = Control::default();
        let bytes = b"not apple at all, sixteen bytes".to_vec();
        assert!(try_parse(0x927c, &bytes, &control).unwrap().is_none());
    }
}
