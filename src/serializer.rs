//! Serializer (component C10): two-phase write with offset resolution.
//!
//! Grounded on the layered algorithm in the data-model notes this crate was redesigned
//! around (entries pass computes a running data cursor per node; a second pass emits the
//! data area at the offsets the first pass promised). Embedded IFDs and maker-note
//! sub-descriptors are probed first (built once into a throwaway buffer to learn their size)
//! so the parent's entry can commit to an offset before the child's bytes are known; an
//! `InvariantViolation` surfaces if the probed and real sizes ever disagree.

use crate::descriptor::Descriptor;
use crate::error::ExifError;
use crate::ifd::Ifd;
use crate::lowlevel::{write_f32, write_f64, write_u16, write_u32};
use crate::search::EXIF_SIGNATURE;
use crate::value::{ForeignDescriptor, Payload, TiffType, Value};

impl Descriptor {
    /// Serialize the (possibly edited) tree back into a fresh `Exif\x00\x00`-prefixed TIFF
    /// blob. A round-trip `parse` of the output reproduces every value still in the tree.
    pub fn serialize(&self) -> Result<Vec<u8>, ExifError> {
        let mut out = Vec::new();
        out.extend_from_slice(EXIF_SIGNATURE);
        out.extend_from_slice(if self.le { b"II" } else { b"MM" });
        write_u16(self.le, 0x002A, &mut out);
        write_u32(self.le, 8, &mut out);

        let root = self.root.as_ref().ok_or(ExifError::IfdNotPresent)?;
        write_chain(self, root, 8, &mut out)?;
        Ok(out)
    }

    /// Write the signature followed by the untouched original TIFF buffer, bypassing the
    /// tree entirely. Used when the caller wants the bytes as originally parsed regardless
    /// of any in-memory edits.
    #[must_use]
    pub fn write_original(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(EXIF_SIGNATURE.len() + self.buf.len());
        out.extend_from_slice(EXIF_SIGNATURE);
        out.extend_from_slice(&self.buf);
        out
    }
}

/// Write `node`, and recurse into its chained sibling (THUMBNAIL off PRIMARY) immediately
/// after this node's own data area, per invariant I4 (only PRIMARY uses `next`).
fn write_chain(desc: &Descriptor, node: &Ifd, offset_start: u32, out: &mut Vec<u8>) -> Result<(), ExifError> {
    let next_offset = match &node.next {
        Some(_) => {
            let probed = build_ifd(desc, node, offset_start, 0)?.len() as u32;
            Some(offset_start + probed)
        }
        None => None,
    };

    let mut real = build_ifd(desc, node, offset_start, next_offset.unwrap_or(0))?;
    if let Some(expect) = next_offset {
        if offset_start + real.len() as u32 != expect {
            return Err(ExifError::InvariantViolation("IFD probe/actual size mismatch".into()));
        }
    }
    patch_thumbnail_offset(desc, node, offset_start, &mut real)?;
    out.extend_from_slice(&real);

    if let Some(next) = &node.next {
        write_chain(desc, next, next_offset.expect("chained sibling implies a computed offset"), out)?;
    }
    Ok(())
}

/// The JPEGInterchangeFormat tag (0x0201) is stored inline (its count×size is 4 bytes), but
/// its *meaning* is an offset into this output buffer, which this node's own serialization
/// can't know in advance. Patch it to point just past this IFD, then append the thumbnail
/// bytes there (open-question decision: recomputed at serialize time, never preserved
/// blindly — a stale offset after editing would point at garbage).
fn patch_thumbnail_offset(desc: &Descriptor, node: &Ifd, offset_start: u32, real: &mut Vec<u8>) -> Result<(), ExifError> {
    let thumb = match desc.get_thumbnail(node.id) {
        Ok(bytes) => bytes,
        Err(ExifError::IfdNotPresent) => return Ok(()),
        Err(e) => return Err(e),
    };
    let Some(idx) = node.iter().position(|v| v.tag == 0x0201) else { return Ok(()) };
    let patch_at = 2 + 12 * idx + 8;
    if real.len() < patch_at + 4 {
        return Ok(());
    }
    let new_offset = offset_start + real.len() as u32;
    let encoded = if desc.le { new_offset.to_le_bytes() } else { new_offset.to_be_bytes() };
    real[patch_at..patch_at + 4].copy_from_slice(&encoded);
    real.extend_from_slice(thumb);
    Ok(())
}

/// Build the complete byte layout for one IFD: `count:u16`, `count` 12-byte entries, the
/// caller-supplied `next` offset, then the data area for any out-of-line values. `desc` only
/// matters for its endianness and (for maker-note sub-descriptors) its own buffer.
fn build_ifd(desc: &Descriptor, node: &Ifd, offset_start: u32, next_ptr: u32) -> Result<Vec<u8>, ExifError> {
    let values: Vec<&Value> = node.iter().collect();
    let k = u16::try_from(values.len()).map_err(|_| ExifError::InvariantViolation("IFD entry count overflow".into()))?;
    let mut cursor = offset_start + 2 + 12 * u32::from(k) + 4;

    let mut entries = Vec::with_capacity(12 * values.len());
    let mut data = Vec::new();
    for value in values {
        let (entry, datum) = build_value(desc, value, &mut cursor)?;
        entries.extend_from_slice(&entry);
        if let Some(bytes) = datum {
            data.extend_from_slice(&bytes);
        }
    }

    let mut out = Vec::with_capacity(2 + entries.len() + 4 + data.len());
    write_u16(desc.le, k, &mut out);
    out.extend_from_slice(&entries);
    write_u32(desc.le, next_ptr, &mut out);
    out.extend_from_slice(&data);
    Ok(out)
}

/// Build one entry's 12 bytes plus, if the value doesn't fit inline, its data-area bytes.
/// `cursor` tracks the node's running data offset and is advanced by whatever this value
/// consumes (padded to an even length, per TIFF's 2-byte data alignment).
fn build_value(desc: &Descriptor, value: &Value, cursor: &mut u32) -> Result<(Vec<u8>, Option<Vec<u8>>), ExifError> {
    let mut entry = Vec::with_capacity(12);
    write_u16(desc.le, value.tag, &mut entry);

    match &value.payload {
        Payload::EmbeddedIfd(child) => {
            write_u16(desc.le, TiffType::UnsignedLong.code(), &mut entry);
            write_u32(desc.le, 1, &mut entry);
            let child_offset = *cursor;
            write_u32(desc.le, child_offset, &mut entry);

            let probed = build_ifd(desc, child, child_offset, 0)?.len() as u32;
            let real = build_ifd(desc, child, child_offset, 0)?;
            if real.len() as u32 != probed {
                return Err(ExifError::InvariantViolation("embedded IFD probe/actual size mismatch".into()));
            }
            child.cached_size.set(Some(real.len() as u32));

            let padded = pad_even(real);
            *cursor += padded.len() as u32;
            return Ok((entry, Some(padded)));
        }
        Payload::Foreign(foreign) => {
            write_u16(desc.le, TiffType::Undefined.code(), &mut entry);
            let blob = build_foreign(foreign)?;
            write_u32(desc.le, blob.len() as u32, &mut entry);
            write_u32(desc.le, *cursor, &mut entry);
            foreign.cached_size.set(Some(blob.len() as u32));

            let padded = pad_even(blob);
            *cursor += padded.len() as u32;
            return Ok((entry, Some(padded)));
        }
        _ => {}
    }

    write_u16(desc.le, value.ty.code(), &mut entry);
    write_u32(desc.le, value.count, &mut entry);

    let bytes = encode_payload(desc.le, &value.payload);
    if bytes.len() <= 4 {
        let mut inline = bytes;
        inline.resize(4, 0);
        entry.extend_from_slice(&inline);
        Ok((entry, None))
    } else {
        write_u32(desc.le, *cursor, &mut entry);
        let padded = pad_even(bytes);
        *cursor += padded.len() as u32;
        Ok((entry, Some(padded)))
    }
}

/// A maker note's nested descriptor has its own coordinate system (origin 0): its content is
/// entirely self-describing and doesn't depend on where the parent ends up placing it, so it
/// can be built once and reused verbatim.
fn build_foreign(foreign: &ForeignDescriptor) -> Result<Vec<u8>, ExifError> {
    let child = &foreign.descriptor;
    let root = child.root.as_ref().ok_or(ExifError::IfdNotPresent)?;
    let mut out = Vec::with_capacity(foreign.prefix.len());
    out.extend_from_slice(&foreign.prefix);
    out.extend_from_slice(&build_ifd(child, root, foreign.ifd_origin, 0)?);
    Ok(out)
}

fn pad_even(mut bytes: Vec<u8>) -> Vec<u8> {
    if bytes.len() % 2 == 1 {
        bytes.push(0);
    }
    bytes
}

fn encode_payload(le: bool, payload: &Payload) -> Vec<u8> {
    let mut out = Vec::new();
    match payload {
        Payload::UByte(v) => out.extend_from_slice(v),
        Payload::SByte(v) => out.extend(v.iter().map(|&b| b as u8)),
        Payload::Ascii(v) => out.extend_from_slice(v),
        Payload::UShort(v) => v.iter().for_each(|&x| write_u16(le, x, &mut out)),
        Payload::SShort(v) => v.iter().for_each(|&x| write_u16(le, x as u16, &mut out)),
        Payload::ULong(v) => v.iter().for_each(|&x| write_u32(le, x, &mut out)),
        Payload::SLong(v) => v.iter().for_each(|&x| write_u32(le, x as u32, &mut out)),
        Payload::URational(v) => v.iter().for_each(|r| r.write(le, &mut out)),
        Payload::SRational(v) => v.iter().for_each(|r| r.write(le, &mut out)),
        Payload::Float(v) => v.iter().for_each(|&x| write_f32(le, x, &mut out)),
        Payload::Double(v) => v.iter().for_each(|&x| write_f64(le, x, &mut out)),
        Payload::Unknown(bytes, _) => out.extend_from_slice(bytes),
        Payload::EmbeddedIfd(_) | Payload::Foreign(_) => unreachable!("handled directly in build_value"),
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::Control;
    use crate::ids::IfdId;
    use crate::parser;

    fn orientation_only() -> Vec<u8> {
        let mut buf = vec![0x45, 0x78, 0x69, 0x66, 0x00, 0x00, 0x49, 0x49, 0x2A, 0x00, 0x08, 0x00, 0x00, 0x00];
        buf.extend_from_slice(&1u16.to_le_bytes());
        buf.extend_from_slice(&0x0112u16.to_le_bytes());
        buf.extend_from_slice(&3u16.to_le_bytes());
        buf.extend_from_slice(&1u32.to_le_bytes());
        buf.extend_from_slice(&1u16.to_le_bytes());
        buf.extend_from_slice(&[0, 0]);
        buf.extend_from_slice(&0u32.to_le_bytes());
        buf
    }

    #[test]
    fn round_trips_a_minimal_ifd() {
        let original = orientation_only();
        let desc = parser::parse(&original, 0, original.len(), Control::default()).unwrap();
        let serialized = desc.serialize().unwrap();
        let reparsed = parser::parse(&serialized, 0, serialized.len(), Control::default()).unwrap();
        let v = reparsed.ifd(IfdId::Primary).unwrap().get(0x0112).unwrap();
        assert_eq!(v.to_i64(0), Some(1));
    }

    #[test]
    fn write_original_preserves_source_bytes() {
        let original = orientation_only();
        let desc = parser::parse(&original, 0, original.len(), Control::default()).unwrap();
        assert_eq!(desc.write_original(), original);
    }
}
