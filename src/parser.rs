//! Parser: generic IFD walker (C6) and per-entry validation (C7 dispatch glue).
//!
//! Grounded on `parse_tiff`/`parse_ifds`/`parse_exif_ifd` in the pack's rexif-fork
//! `src/tiff.rs` (`examples/other_examples/f75b9517_...`), restructured around the tree model:
//! each embedded IFD becomes a `Payload::EmbeddedIfd` on the owning value rather than a flat
//! `Vec<ExifEntry>`, and unknown-tag handling follows `Control::unknown` instead of a
//! hardcoded `UnknownToMe` fallback.

use crate::descriptor::{Control, Descriptor, UnknownTagPolicy};
use crate::error::{ExifError, InvalidReason};
use crate::ids::{IfdId, IfdLocation};
use crate::ifd::Ifd;
use crate::lowlevel::*;
use crate::search::{find_exif_signature, EXIF_SIGNATURE};
use crate::tags::{self, TagInfo};
use crate::value::{Payload, TiffType, Value};

/// Locate the EXIF signature starting at `start`, returning the slice beginning at its first
/// byte. Mirrors `search(buf, start) -> &[u8] | Err` from the public API surface.
pub fn search(buf: &[u8], start: usize) -> Result<&[u8], ExifError> {
    let haystack = buf.get(start..).ok_or(ExifError::Truncated)?;
    let rel = find_exif_signature(haystack).ok_or(ExifError::SignatureMissing)?;
    Ok(&haystack[rel..])
}

/// Parse the region `buf[start..start+len]`, which must begin with `Exif\x00\x00` followed by
/// a TIFF header, into a `Descriptor`.
pub fn parse(buf: &[u8], start: usize, len: usize, control: Control) -> Result<Descriptor, ExifError> {
    let end = start.checked_add(len).ok_or(ExifError::Truncated)?;
    let region = buf.get(start..end).ok_or(ExifError::Truncated)?;
    if region.len() < EXIF_SIGNATURE.len() || &region[..EXIF_SIGNATURE.len()] != EXIF_SIGNATURE {
        return Err(ExifError::SignatureMissing);
    }
    parse_tiff(region[EXIF_SIGNATURE.len()..].to_vec(), control)
}

/// Parse a buffer already positioned at the TIFF header (as produced by `search` plus
/// skipping the 6-byte signature, or as handed directly to a maker-note sub-parser).
pub fn parse_tiff(tiff: Vec<u8>, control: Control) -> Result<Descriptor, ExifError> {
    if tiff.len() < 8 {
        return Err(ExifError::TiffTruncated);
    }
    let le = match &tiff[0..2] {
        b"II" => true,
        b"MM" => false,
        _ => return Err(ExifError::BadEndian),
    };
    let magic = read_u16(le, &tiff[2..4]).ok_or(ExifError::Truncated)?;
    if magic != 0x002A {
        return Err(ExifError::BadTiffMagic);
    }
    let ifd0_offset = read_u32(le, &tiff[4..8]).ok_or(ExifError::Truncated)? as usize;

    let mut desc = Descriptor::empty(tiff, le, 0, control);
    let (mut primary, next) = walk_ifd(&mut desc, IfdId::Primary, ifd0_offset)?;
    desc.register(IfdId::Primary, IfdLocation::Root);

    if next != 0 {
        let (thumb, _) = walk_ifd(&mut desc, IfdId::Thumbnail, next as usize)?;
        primary.next = Some(Box::new(thumb));
        desc.register(IfdId::Thumbnail, IfdLocation::Chained);
    }
    desc.root = Some(primary);
    Ok(desc)
}

/// Walk one TIFF-ish directory (PRIMARY, THUMBNAIL, EXIF, GPS, IOP, or EMBEDDED), looking up
/// each tag in that directory's catalog via `tags::lookup`. Returns the node plus the raw
/// next-IFD offset (0 = none).
fn walk_ifd(desc: &mut Descriptor, id: IfdId, offset: usize) -> Result<(Ifd, u32), ExifError> {
    let mut node = Ifd::new(id);
    let count = read_u16(desc.le, desc.buf.get(offset..offset + 2).ok_or(ExifError::IfdTruncated)?)
        .ok_or(ExifError::IfdTruncated)?;

    for i in 0..count as usize {
        let entry_pos = offset + 2 + 12 * i;
        let entry = desc.buf.get(entry_pos..entry_pos + 12).ok_or(ExifError::IfdTruncated)?;
        let tag = read_u16(desc.le, &entry[0..2]).ok_or(ExifError::IfdTruncated)?;
        let ty_code = read_u16(desc.le, &entry[2..4]).ok_or(ExifError::IfdTruncated)?;
        let entry_count = read_u32(desc.le, &entry[4..8]).ok_or(ExifError::IfdTruncated)?;
        let value_pos = entry_pos + 8;

        if let Some(v) = parse_entry(desc, id, tag, ty_code, entry_count, value_pos)? {
            note_side_channel(desc, id, tag, &v);
            node.push(v);
        }
    }

    let next_pos = offset + 2 + 12 * count as usize;
    let next = read_u32(desc.le, desc.buf.get(next_pos..next_pos + 4).ok_or(ExifError::IfdTruncated)?)
        .ok_or(ExifError::IfdTruncated)?;
    Ok((node, next))
}

/// Walk a vendor maker-note's own fake-TIFF IFD, using a vendor-supplied tag catalog instead
/// of `tags::lookup`. Unlike `walk_ifd`, this never recurses into EXIF/GPS/IOP sub-IFDs or
/// delegates to another maker-note handler — no vendor dialect observed nests one inside
/// another.
pub(crate) fn walk_maker_ifd(
    desc: &mut Descriptor,
    id: IfdId,
    offset: usize,
    lookup: fn(u16) -> Option<TagInfo>,
) -> Result<(Ifd, u32), ExifError> {
    let mut node = Ifd::new(id);
    let count = read_u16(desc.le, desc.buf.get(offset..offset + 2).ok_or(ExifError::IfdTruncated)?)
        .ok_or(ExifError::IfdTruncated)?;

    for i in 0..count as usize {
        let entry_pos = offset + 2 + 12 * i;
        let entry = desc.buf.get(entry_pos..entry_pos + 12).ok_or(ExifError::IfdTruncated)?;
        let tag = read_u16(desc.le, &entry[0..2]).ok_or(ExifError::IfdTruncated)?;
        let ty_code = read_u16(desc.le, &entry[2..4]).ok_or(ExifError::IfdTruncated)?;
        let entry_count = read_u32(desc.le, &entry[4..8]).ok_or(ExifError::IfdTruncated)?;
        let value_pos = entry_pos + 8;
        let ty = TiffType::from_code(ty_code);

        let info = lookup(tag);
        if let Some(info) = &info {
            if !info.format.matches(ty) {
                return Err(ExifError::InvalidEntry(tag, InvalidReason::WrongType));
            }
            if !info.count.matches(entry_count) {
                return Err(ExifError::InvalidEntry(tag, InvalidReason::WrongCount));
            }
        } else if desc.control.unknown == UnknownTagPolicy::Remove {
            continue;
        } else if desc.control.unknown == UnknownTagPolicy::Stop {
            return Err(ExifError::UnknownTag(tag, id.as_str().to_string()));
        }

        let payload = decode_payload(desc, ty, entry_count, value_pos)?;
        let mut value = Value::new(tag, ty, entry_count, payload);
        if let Some(info) = info {
            value = value.with_name(info.name, info.readable);
        }
        node.push(value);
    }

    let next_pos = offset + 2 + 12 * count as usize;
    let next = read_u32(desc.le, desc.buf.get(next_pos..next_pos + 4).ok_or(ExifError::IfdTruncated)?)
        .ok_or(ExifError::IfdTruncated)?;
    Ok((node, next))
}

fn parse_entry(
    desc: &mut Descriptor,
    id: IfdId,
    tag: u16,
    ty_code: u16,
    count: u32,
    value_pos: usize,
) -> Result<Option<Value>, ExifError> {
    let ty = TiffType::from_code(ty_code);

    match (id, tag) {
        (IfdId::Primary | IfdId::Thumbnail | IfdId::Embedded, 0x8769) => {
            return parse_embedded(desc, id, IfdId::Exif, tag, value_pos).map(Some);
        }
        (IfdId::Primary | IfdId::Thumbnail | IfdId::Embedded, 0x8825) => {
            return parse_embedded(desc, id, IfdId::Gps, tag, value_pos).map(Some);
        }
        (IfdId::Exif, 0xa005) => {
            return parse_embedded(desc, id, IfdId::Iop, tag, value_pos).map(Some);
        }
        (IfdId::Exif, 0x927c) => {
            return crate::makernotes::parse(desc, tag, count, value_pos).map(Some);
        }
        _ => {}
    }

    let info = tags::lookup(id, tag);
    let info = match info {
        Some(info) => {
            if !info.format.matches(ty) {
                return Err(ExifError::InvalidEntry(tag, InvalidReason::WrongType));
            }
            if !info.count.matches(count) {
                return Err(ExifError::InvalidEntry(tag, InvalidReason::WrongCount));
            }
            Some(info)
        }
        None => match desc.control.unknown {
            UnknownTagPolicy::Stop => return Err(ExifError::UnknownTag(tag, id.as_str().to_string())),
            UnknownTagPolicy::Remove => return Ok(None),
            UnknownTagPolicy::Keep => None,
        },
    };

    let payload = decode_payload(desc, ty, count, value_pos)?;
    let mut value = Value::new(tag, ty, count, payload);
    if let Some(info) = info {
        value = value.with_name(info.name, info.readable);
    }
    Ok(Some(value))
}

fn parse_embedded(
    desc: &mut Descriptor,
    parent: IfdId,
    child_id: IfdId,
    tag: u16,
    value_pos: usize,
) -> Result<Value, ExifError> {
    let offset =
        read_u32(desc.le, desc.buf.get(value_pos..value_pos + 4).ok_or(ExifError::IfdTruncated)?)
            .ok_or(ExifError::IfdTruncated)? as usize;
    let (child, _next) = walk_ifd(desc, child_id, offset)?;
    desc.register(child_id, IfdLocation::EmbeddedIn { parent, tag });
    let mut value = Value::new(tag, TiffType::UnsignedLong, 1, Payload::EmbeddedIfd(Box::new(child)));
    if let Some(info) = tags::lookup(parent, tag) {
        value = value.with_name(info.name, info.readable);
    }
    Ok(value)
}

fn note_side_channel(desc: &mut Descriptor, id: IfdId, tag: u16, v: &Value) {
    match (id, tag) {
        (IfdId::Thumbnail | IfdId::Embedded, 0x0201) => {
            if let Some(off) = v.to_i64(0) {
                desc.side.thumb_offset = Some(off as u32);
            }
        }
        (IfdId::Thumbnail | IfdId::Embedded, 0x0202) => {
            if let Some(n) = v.to_i64(0) {
                desc.side.thumb_len = Some(n as u32);
            }
        }
        (IfdId::Thumbnail | IfdId::Embedded, 0x0103) => {
            if let Some(c) = v.to_i64(0) {
                desc.side.thumb_compression = Some(c as u16);
            }
        }
        (IfdId::Primary, 0x0103) => {
            if desc.control.warn {
                if let Some(c) = v.to_i64(0) {
                    if c != 6 {
                        desc.warnings.push(format!("PRIMARY Compression tag is {c}, expected 6 (JPEG)"));
                    }
                }
            }
        }
        _ => {}
    }
}

/// Decode the payload for one entry: either the 4 inline bytes at `value_pos`, or the bytes
/// at the offset those 4 bytes encode, per invariant I1.
pub(crate) fn decode_payload(
    desc: &Descriptor,
    ty: TiffType,
    count: u32,
    value_pos: usize,
) -> Result<Payload, ExifError> {
    let le = desc.le;
    let sz = (count as usize)
        .checked_mul(ty.element_size())
        .ok_or(ExifError::InvalidEntry(0, InvalidReason::OutOfRange))?;

    let bytes: &[u8] = if sz <= 4 {
        desc.buf.get(value_pos..value_pos + sz).ok_or(ExifError::Truncated)?
    } else {
        let off = read_u32(le, desc.buf.get(value_pos..value_pos + 4).ok_or(ExifError::Truncated)?)
            .ok_or(ExifError::Truncated)? as usize;
        let end = off.checked_add(sz).ok_or(ExifError::Truncated)?;
        desc.buf.get(off..end).ok_or(ExifError::Truncated)?
    };

    Ok(match ty {
        TiffType::UnsignedByte => Payload::UByte(bytes.to_vec()),
        TiffType::SignedByte => Payload::SByte(read_i8_array(count, bytes).ok_or(ExifError::Truncated)?),
        TiffType::AsciiString => Payload::Ascii(bytes.to_vec()),
        TiffType::UnsignedShort => Payload::UShort(read_u16_array(le, count, bytes).ok_or(ExifError::Truncated)?),
        TiffType::SignedShort => Payload::SShort(read_i16_array(le, count, bytes).ok_or(ExifError::Truncated)?),
        TiffType::UnsignedLong => Payload::ULong(read_u32_array(le, count, bytes).ok_or(ExifError::Truncated)?),
        TiffType::SignedLong => Payload::SLong(read_i32_array(le, count, bytes).ok_or(ExifError::Truncated)?),
        TiffType::UnsignedRational => {
            Payload::URational(read_urational_array(le, count, bytes).ok_or(ExifError::Truncated)?)
        }
        TiffType::SignedRational => {
            Payload::SRational(read_irational_array(le, count, bytes).ok_or(ExifError::Truncated)?)
        }
        TiffType::Float => Payload::Float(read_f32_array(le, count, bytes).ok_or(ExifError::Truncated)?),
        TiffType::Double => Payload::Double(read_f64_array(le, count, bytes).ok_or(ExifError::Truncated)?),
        TiffType::Undefined | TiffType::Unknown(_) => Payload::Unknown(bytes.to_vec(), le),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::Control;

    fn minimal_ifd0() -> Vec<u8> {
        vec![
            0x45, 0x78, 0x69, 0x66, 0x00, 0x00, // Exif\0\0
            0x49, 0x49, 0x2A, 0x00, // II*\0
            0x08, 0x00, 0x00, 0x00, // IFD0 @ 8
            0x00, 0x00, // 0 entries
            0x00, 0x00, 0x00, 0x00, // next = 0
        ]
    }

    #[test]
    fn parses_minimal_ifd0() {
        let buf = minimal_ifd0();
        let desc = parse(&buf, 0, buf.len(), Control::default()).unwrap();
        assert!(desc.has_ifd(IfdId::Primary));
        assert_eq!(desc.ifd(IfdId::Primary).unwrap().len(), 0);
        assert!(!desc.has_ifd(IfdId::Thumbnail));
    }

    #[test]
    fn rejects_missing_signature() {
        let buf = b"NOTEXIF\0II*\0".to_vec();
        assert!(matches!(parse(&buf, 0, buf.len(), Control::default()), Err(ExifError::SignatureMissing)));
    }

    #[test]
    fn parses_inline_orientation() {
        let mut buf = vec![0x45, 0x78, 0x69, 0x66, 0x00, 0x00, 0x49, 0x49, 0x2A, 0x00, 0x08, 0x00, 0x00, 0x00];
        buf.extend_from_slice(&1u16.to_le_bytes()); // 1 entry
        buf.extend_from_slice(&0x0112u16.to_le_bytes()); // Orientation
        buf.extend_from_slice(&3u16.to_le_bytes()); // Short
        buf.extend_from_slice(&1u32.to_le_bytes()); // count
        buf.extend_from_slice(&1u16.to_le_bytes()); // value = 1
        buf.extend_from_slice(&[0, 0]); // pad to 4 bytes
        buf.extend_from_slice(&0u32.to_le_bytes()); // next = 0

        let desc = parse(&buf, 0, buf.len(), Control::default()).unwrap();
        let ifd = desc.ifd(IfdId::Primary).unwrap();
        let v = ifd.get(0x0112).unwrap();
        assert_eq!(v.to_i64(0), Some(1));
    }

    #[test]
    fn search_finds_signature_past_jpeg_prefix() {
        let mut buf = vec![0u8, 0, 0];
        buf.extend_from_slice(EXIF_SIGNATURE);
        buf.extend_from_slice(b"II*\0");
        let found = search(&buf, 0).unwrap();
        assert_eq!(&found[..6], EXIF_SIGNATURE);
    }
}
