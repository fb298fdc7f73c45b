//! Maker-note dispatch (component C8): probes the MakerNote payload against each known vendor
//! dialect in turn, falling back to an opaque blob when none match. Grounded on the pack's
//! Nikon/Apple precedents; the probe order doesn't matter since the signatures are disjoint.

mod apple;
mod bplist;
mod nikon;

use crate::descriptor::Descriptor;
use crate::error::ExifError;
use crate::ids::IfdId;
use crate::value::{Payload, TiffType, Value};

pub(crate) fn parse(desc: &mut Descriptor, tag: u16, count: u32, value_pos: usize) -> Result<Value, ExifError> {
    let payload = crate::parser::decode_payload(desc, TiffType::Undefined, count, value_pos)?;
    let bytes = match payload {
        Payload::Unknown(b, _) => b,
        _ => unreachable!("decode_payload(Undefined) always returns Payload::Unknown"),
    };

    let value = if let Some(v) = apple::try_parse(tag, &bytes, &desc.control)? {
        v
    } else if let Some(v) = nikon::try_parse(tag, &bytes, &desc.control)? {
        v
    } else {
        Value::new(tag, TiffType::Undefined, count, Payload::Unknown(bytes, desc.le))
    };

    Ok(match crate::tags::lookup(IfdId::Exif, tag) {
        Some(info) => value.with_name(info.name, info.readable),
        None => value,
    })
}
