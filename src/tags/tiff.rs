//! Baseline TIFF tag catalog, shared by PRIMARY, THUMBNAIL, and EMBEDDED directories.
//!
//! Grounded on `tag_to_exif` in the teacher crate's `src/exif.rs`, extended with the baseline
//! image tags (`ImageWidth`, `Compression`, `StripOffsets`, ...) that rexif's table omits
//! because it focuses on EXIF/GPS; those are filled in from the TIFF 6.0 baseline tag set.

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
        0x0100 => info!(ImageWidth, "px", FormatSpec::OneOf(&[UnsignedShort, UnsignedLong]), CountSpec::Exact(1), strpass),
        0x0101 => info!(ImageLength, "px", FormatSpec::OneOf(&[UnsignedShort, UnsignedLong]), CountSpec::Exact(1), strpass),
        0x0102 => info!(BitsPerSample, "bits", FormatSpec::Exact(UnsignedShort), CountSpec::Any, strpass),
        0x0103 => info!(Compression, "none", FormatSpec::Exact(UnsignedShort), CountSpec::Exact(1), strpass),
        0x0106 => info!(PhotometricInterpretation, "none", FormatSpec::Exact(UnsignedShort), CountSpec::Exact(1), strpass),
        0x010e => info!(ImageDescription, "none", FormatSpec::Exact(AsciiString), CountSpec::Any, strpass),
        0x010f => info!(Make, "none", FormatSpec::Exact(AsciiString), CountSpec::Any, strpass),
        0x0110 => info!(Model, "none", FormatSpec::Exact(AsciiString), CountSpec::Any, strpass),
        0x0111 => info!(StripOffsets, "byte offset", FormatSpec::OneOf(&[UnsignedShort, UnsignedLong]), CountSpec::Any, strpass),
        0x0112 => info!(Orientation, "none", FormatSpec::Exact(UnsignedShort), CountSpec::Exact(1), orientation),
        0x0115 => info!(SamplesPerPixel, "none", FormatSpec::Exact(UnsignedShort), CountSpec::Exact(1), strpass),
        0x0116 => info!(RowsPerStrip, "rows", FormatSpec::OneOf(&[UnsignedShort, UnsignedLong]), CountSpec::Exact(1), strpass),
        0x0117 => info!(StripByteCounts, "bytes", FormatSpec::OneOf(&[UnsignedShort, UnsignedLong]), CountSpec::Any, strpass),
        0x011a => info!(XResolution, "pixels per res unit", FormatSpec::Exact(UnsignedRational), CountSpec::Exact(1), rational_value),
        0x011b => info!(YResolution, "pixels per res unit", FormatSpec::Exact(UnsignedRational), CountSpec::Exact(1), rational_value),
        0x011c => info!(PlanarConfiguration, "none", FormatSpec::Exact(UnsignedShort), CountSpec::Exact(1), strpass),
        0x0128 => info!(ResolutionUnit, "none", FormatSpec::Exact(UnsignedShort), CountSpec::Exact(1), resolution_unit),
        0x0131 => info!(Software, "none", FormatSpec::Exact(AsciiString), CountSpec::Any, strpass),
        0x0132 => info!(DateTime, "none", FormatSpec::Exact(AsciiString), CountSpec::Any, strpass),
        0x013c => info!(HostComputer, "none", FormatSpec::Exact(AsciiString), CountSpec::Any, strpass),
        0x013e => info!(WhitePoint, "CIE 1931 coordinates", FormatSpec::Exact(UnsignedRational), CountSpec::Exact(2), rational_values),
        0x013f => info!(PrimaryChromaticities, "CIE 1931 coordinates", FormatSpec::Exact(UnsignedRational), CountSpec::Exact(6), rational_values),
        0x0201 => info!(JPEGInterchangeFormat, "byte offset", FormatSpec::Exact(UnsignedLong), CountSpec::Exact(1), strpass),
        0x0202 => info!(JPEGInterchangeFormatLength, "bytes", FormatSpec::Exact(UnsignedLong), CountSpec::Exact(1), strpass),
        0x0211 => info!(YCbCrCoefficients, "none", FormatSpec::Exact(UnsignedRational), CountSpec::Exact(3), rational_values),
        0x0212 => info!(YCbCrSubSampling, "none", FormatSpec::Exact(UnsignedShort), CountSpec::Exact(2), strpass),
        0x0213 => info!(YCbCrPositioning, "none", FormatSpec::Exact(UnsignedShort), CountSpec::Exact(1), strpass),
        0x0214 => info!(ReferenceBlackWhite, "RGB or YCbCr", FormatSpec::Exact(UnsignedRational), CountSpec::Exact(6), rational_values),
        0x8298 => info!(Copyright, "none", FormatSpec::Exact(AsciiString), CountSpec::Any, strpass),
        0x8769 => info!(ExifOffset, "byte offset", FormatSpec::Exact(UnsignedLong), CountSpec::Exact(1), strpass),
        0x8825 => info!(GPSOffset, "byte offset", FormatSpec::Exact(UnsignedLong), CountSpec::Exact(1), strpass),
        _ => return None,
    })
}
