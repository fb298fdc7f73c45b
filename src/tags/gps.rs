//! GPS sub-IFD tag catalog. Grounded on `tag_to_exif` in the teacher crate's `src/exif.rs`
//! (the GPS-range arms, renumbered into a dedicated table since GPS and IOP both start
//! their tag numbers at 0x0001).

use super::{CountSpec, FormatSpec, KnownTag, TagInfo};
use crate::exifreadable::*;
use crate::value::TiffType::*;

macro_rules! info {
    ($name:ident, $unit:expr, $fmt:expr, $count:expr, $readable:expr) => {
        TagInfo { name: KnownTag::$name, unit: $unit, format: $fmt, count: $count, readable: $readable }
    };
}

pub(crate) fn lookup(tag: u16) -> Option<TagInfo> {
    Some(match tag {
        0x00 => info!(GPSVersionID, "none", FormatSpec::Exact(UnsignedByte), CountSpec::Exact(4), strpass),
        0x01 => info!(GPSLatitudeRef, "none", FormatSpec::Exact(AsciiString), CountSpec::Any, strpass),
        0x02 => info!(GPSLatitude, "D/M/S", FormatSpec::Exact(UnsignedRational), CountSpec::Exact(3), dms),
        0x03 => info!(GPSLongitudeRef, "none", FormatSpec::Exact(AsciiString), CountSpec::Any, strpass),
        0x04 => info!(GPSLongitude, "D/M/S", FormatSpec::Exact(UnsignedRational), CountSpec::Exact(3), dms),
        0x05 => info!(GPSAltitudeRef, "none", FormatSpec::Exact(UnsignedByte), CountSpec::Exact(1), gps_alt_ref),
        0x06 => info!(GPSAltitude, "m", FormatSpec::Exact(UnsignedRational), CountSpec::Exact(1), meters),
        0x07 => info!(GPSTimeStamp, "UTC time", FormatSpec::Exact(UnsignedRational), CountSpec::Exact(3), gpstimestamp),
        0x08 => info!(GPSSatellites, "none", FormatSpec::Exact(AsciiString), CountSpec::Any, strpass),
        0x09 => info!(GPSStatus, "none", FormatSpec::Exact(AsciiString), CountSpec::Any, gpsstatus),
        0x0a => info!(GPSMeasureMode, "none", FormatSpec::Exact(AsciiString), CountSpec::Any, gpsmeasuremode),
        0x0b => info!(GPSDOP, "none", FormatSpec::Exact(UnsignedRational), CountSpec::Exact(1), rational_value),
        0x0c => info!(GPSSpeedRef, "none", FormatSpec::Exact(AsciiString), CountSpec::Any, gpsspeedref),
        0x0d => info!(GPSSpeed, "@GPSSpeedRef", FormatSpec::Exact(UnsignedRational), CountSpec::Exact(1), gpsspeed),
        0x0e => info!(GPSTrackRef, "none", FormatSpec::Exact(AsciiString), CountSpec::Any, gpsbearingref),
        0x0f => info!(GPSTrack, "deg", FormatSpec::Exact(UnsignedRational), CountSpec::Exact(1), gpsbearing),
        0x10 => info!(GPSImgDirectionRef, "none", FormatSpec::Exact(AsciiString), CountSpec::Any, gpsbearingref),
        0x11 => info!(GPSImgDirection, "deg", FormatSpec::Exact(UnsignedRational), CountSpec::Exact(1), gpsbearing),
        0x12 => info!(GPSMapDatum, "none", FormatSpec::Exact(AsciiString), CountSpec::Any, strpass),
        0x13 => info!(GPSDestLatitudeRef, "none", FormatSpec::Exact(AsciiString), CountSpec::Any, strpass),
        0x14 => info!(GPSDestLatitude, "D/M/S", FormatSpec::Exact(UnsignedRational), CountSpec::Exact(3), dms),
        0x15 => info!(GPSDestLongitudeRef, "none", FormatSpec::Exact(AsciiString), CountSpec::Any, strpass),
        0x16 => info!(GPSDestLongitude, "D/M/S", FormatSpec::Exact(UnsignedRational), CountSpec::Exact(3), dms),
        0x17 => info!(GPSDestBearingRef, "none", FormatSpec::Exact(AsciiString), CountSpec::Any, gpsbearingref),
        0x18 => info!(GPSDestBearing, "deg", FormatSpec::Exact(UnsignedRational), CountSpec::Exact(1), gpsbearing),
        0x19 => info!(GPSDestDistanceRef, "none", FormatSpec::Exact(AsciiString), CountSpec::Any, gpsdestdistanceref),
        0x1a => info!(GPSDestDistance, "@GPSDestDistanceRef", FormatSpec::Exact(UnsignedRational), CountSpec::Exact(1), gpsdestdistance),
        0x1b => info!(GPSProcessingMethod, "none", FormatSpec::Exact(Undefined), CountSpec::Any, undefined_as_encoded_string),
        0x1c => info!(GPSAreaInformation, "none", FormatSpec::Exact(Undefined), CountSpec::Any, undefined_as_encoded_string),
        0x1d => info!(GPSDateStamp, "none", FormatSpec::Exact(AsciiString), CountSpec::Any, strpass),
        0x1e => info!(GPSDifferential, "none", FormatSpec::Exact(UnsignedShort), CountSpec::Exact(1), gpsdiff),
        _ => return None,
    })
}
