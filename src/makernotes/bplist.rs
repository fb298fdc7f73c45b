//! Minimal reader for Apple's binary property list format (`bplist00`), just deep enough to
//! render the plist-valued entries Apple maker notes embed (unknown opaque dictionaries,
//! run-time blobs).
//!
//! Grounded on the general bplist layout (header, object table, offset table, trailer) as
//! consumed by Apple's own `CFPropertyList` — there is no teacher precedent for this format in
//! the pack, so the reader is written in the same defensive, bounds-checked style as
//! `crate::lowlevel` rather than modeled on any one source file.

use crate::error::ExifError;
use std::fmt;

/// A decoded plist object. Dates and UIDs collapse to their underlying representations since
/// this crate only needs to *display* maker-note plists, never round-trip them independently
/// (the raw bytes are what's preserved for round-tripping).
#[derive(Debug, Clone)]
pub enum PlistValue {
    Null,
    Bool(bool),
    Int(i64),
    Real(f64),
    Data(Vec<u8>),
    Ascii(String),
    Array(Vec<PlistValue>),
    Set(Vec<PlistValue>),
    Dict(Vec<(PlistValue, PlistValue)>),
}

impl fmt::Display for PlistValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("null"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(i) => write!(f, "{i}"),
            Self::Real(r) => write!(f, "{r}"),
            Self::Data(d) => write!(f, "<{} bytes>", d.len()),
            Self::Ascii(s) => f.write_str(s),
            Self::Array(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
            Self::Set(items) => {
                f.write_str("{")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("}")
            }
            Self::Dict(entries) => {
                f.write_str("{")?;
                for (i, (k, v)) in entries.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{k}: {v}")?;
                }
                f.write_str("}")
            }
        }
    }
}

/// Parse a complete bplist00 buffer into its top-level object.
pub(crate) fn parse(buf: &[u8]) -> Result<PlistValue, ExifError> {
    if buf.len() < 40 || &buf[0..8] != b"bplist00" {
        return Err(ExifError::BadPlist("missing bplist00 header".into()));
    }
    let trailer = &buf[buf.len() - 32..];
    let offset_size = trailer[6] as usize;
    let ref_size = trailer[7] as usize;
    let num_objects = be_u64(&trailer[8..16])? as usize;
    let top_object = be_u64(&trailer[16..24])? as usize;
    let offset_table_offset = be_u64(&trailer[24..32])? as usize;

    let mut offsets = Vec::with_capacity(num_objects);
    for i in 0..num_objects {
        let pos = offset_table_offset + i * offset_size;
        let raw = buf.get(pos..pos + offset_size).ok_or_else(|| ExifError::BadPlist("offset table truncated".into()))?;
        offsets.push(be_uint(raw)? as usize);
    }

    decode_object(buf, &offsets, ref_size, top_object)
}

fn decode_object(buf: &[u8], offsets: &[usize], ref_size: usize, index: usize) -> Result<PlistValue, ExifError> {
    let pos = *offsets.get(index).ok_or_else(|| ExifError::BadPlist("object index out of range".into()))?;
    let marker = *buf.get(pos).ok_or_else(|| ExifError::BadPlist("object offset out of range".into()))?;
    let hi = marker >> 4;
    let lo = marker & 0x0f;

    match hi {
        0x0 => match lo {
            0x0 => Ok(PlistValue::Null),
            0x8 => Ok(PlistValue::Bool(false)),
            0x9 => Ok(PlistValue::Bool(true)),
            _ => Ok(PlistValue::Null),
        },
        0x1 => {
            let n = 1usize << lo;
            let raw = buf.get(pos + 1..pos + 1 + n).ok_or_else(|| ExifError::BadPlist("int truncated".into()))?;
            Ok(PlistValue::Int(be_int(raw)?))
        }
        0x2 => {
            let n = 1usize << lo;
            let raw = buf.get(pos + 1..pos + 1 + n).ok_or_else(|| ExifError::BadPlist("real truncated".into()))?;
            let v = if n == 4 {
                f32::from_be_bytes(raw.try_into().map_err(|_| ExifError::BadPlist("real width".into()))?) as f64
            } else if n == 8 {
                f64::from_be_bytes(raw.try_into().map_err(|_| ExifError::BadPlist("real width".into()))?)
            } else {
                return Err(ExifError::BadPlist("unsupported real width".into()));
            };
            Ok(PlistValue::Real(v))
        }
        0x3 => Ok(PlistValue::Real(0.0)), // date; displayed as its raw seconds offset is out of scope
        0x4 => {
            let (n, start) = read_size(buf, pos, lo)?;
            let raw = buf.get(start..start + n).ok_or_else(|| ExifError::BadPlist("data truncated".into()))?;
            Ok(PlistValue::Data(raw.to_vec()))
        }
        0x5 => {
            let (n, start) = read_size(buf, pos, lo)?;
            let raw = buf.get(start..start + n).ok_or_else(|| ExifError::BadPlist("ascii truncated".into()))?;
            Ok(PlistValue::Ascii(String::from_utf8_lossy(raw).into_owned()))
        }
        0x6 => {
            let (n, start) = read_size(buf, pos, lo)?;
            let raw = buf.get(start..start + n * 2).ok_or_else(|| ExifError::BadPlist("utf16 truncated".into()))?;
            let units: Vec<u16> = raw.chunks_exact(2).map(|c| u16::from_be_bytes([c[0], c[1]])).collect();
            Ok(PlistValue::Ascii(String::from_utf16_lossy(&units)))
        }
        0x8 => Ok(PlistValue::Int(lo as i64)), // UID; rendered as its raw index
        0xa => {
            let (n, start) = read_size(buf, pos, lo)?;
            let mut items = Vec::with_capacity(n);
            for i in 0..n {
                let raw = buf.get(start + i * ref_size..start + (i + 1) * ref_size).ok_or_else(|| ExifError::BadPlist("array refs truncated".into()))?;
                items.push(decode_object(buf, offsets, ref_size, be_uint(raw)? as usize)?);
            }
            Ok(PlistValue::Array(items))
        }
        0xc => {
            // Sets share array's flat ref-list encoding; only the marker nibble distinguishes them.
            let (n, start) = read_size(buf, pos, lo)?;
            let mut items = Vec::with_capacity(n);
            for i in 0..n {
                let raw = buf.get(start + i * ref_size..start + (i + 1) * ref_size).ok_or_else(|| ExifError::BadPlist("set refs truncated".into()))?;
                items.push(decode_object(buf, offsets, ref_size, be_uint(raw)? as usize)?);
            }
            Ok(PlistValue::Set(items))
        }
        0xd => {
            let (n, start) = read_size(buf, pos, lo)?;
            let keys_start = start;
            let vals_start = start + n * ref_size;
            let mut entries = Vec::with_capacity(n);
            for i in 0..n {
                let kraw = buf.get(keys_start + i * ref_size..keys_start + (i + 1) * ref_size).ok_or_else(|| ExifError::BadPlist("dict keys truncated".into()))?;
                let vraw = buf.get(vals_start + i * ref_size..vals_start + (i + 1) * ref_size).ok_or_else(|| ExifError::BadPlist("dict values truncated".into()))?;
                let k = decode_object(buf, offsets, ref_size, be_uint(kraw)? as usize)?;
                let v = decode_object(buf, offsets, ref_size, be_uint(vraw)? as usize)?;
                entries.push((k, v));
            }
            Ok(PlistValue::Dict(entries))
        }
        _ => Err(ExifError::BadPlist(format!("unrecognized object marker 0x{marker:02x}"))),
    }
}

/// Decode a collection's element count, handling the 0xF size-escape (a trailing int object
/// holds the real count when it doesn't fit in the 4-bit nibble). Returns `(count, data_start)`.
fn read_size(buf: &[u8], pos: usize, lo: u8) -> Result<(usize, usize), ExifError> {
    if lo != 0x0f {
        return Ok((lo as usize, pos + 1));
    }
    let int_marker = *buf.get(pos + 1).ok_or_else(|| ExifError::BadPlist("size escape truncated".into()))?;
    if int_marker >> 4 != 0x1 {
        return Err(ExifError::BadPlist("size escape is not an int object".into()));
    }
    let width = 1usize << (int_marker & 0x0f);
    let raw = buf.get(pos + 2..pos + 2 + width).ok_or_else(|| ExifError::BadPlist("size escape int truncated".into()))?;
    Ok((be_uint(raw)? as usize, pos + 2 + width))
}

fn be_uint(raw: &[u8]) -> Result<u64, ExifError> {
    if raw.is_empty() || raw.len() > 8 {
        return Err(ExifError::BadPlist("integer width out of range".into()));
    }
    Ok(raw.iter().fold(0u64, |acc, &b| (acc << 8) | b as u64))
}

fn be_int(raw: &[u8]) -> Result<i64, ExifError> {
    let u = be_uint(raw)?;
    let bits = raw.len() * 8;
    Ok(if bits < 64 && u & (1 << (bits - 1)) != 0 { (u as i64) - (1i64 << bits) } else { u as i64 })
}

fn be_u64(raw: &[u8]) -> Result<u64, ExifError> {
    Ok(u64::from_be_bytes(raw.try_into().map_err(|_| ExifError::BadPlist("trailer field width".into()))?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_missing_header() {
        assert!(matches!(parse(b"not a plist"), Err(ExifError::BadPlist(_))));
    }

    #[test]
    fn rejects_truncated_trailer() {
        let mut buf = b"bplist00".to_vec();
        buf.extend_from_slice(&[0u8; 10]);
        assert!(matches!(parse(&buf), Err(ExifError::BadPlist(_))));
    }
}
