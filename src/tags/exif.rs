//! EXIF sub-IFD tag catalog. Grounded directly on `tag_to_exif` in the teacher crate's
//! `src/exif.rs` (the EXIF-range arms).

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
        0x829a => info!(ExposureTime, "s", FormatSpec::Exact(UnsignedRational), CountSpec::Exact(1), exposure_time),
        0x829d => info!(FNumber, "f-number", FormatSpec::Exact(UnsignedRational), CountSpec::Exact(1), f_number),
        0x8822 => info!(ExposureProgram, "none", FormatSpec::Exact(UnsignedShort), CountSpec::Exact(1), exposure_program),
        0x8824 => info!(SpectralSensitivity, "ASTM string", FormatSpec::Exact(AsciiString), CountSpec::Any, strpass),
        0x8827 => info!(ISOSpeedRatings, "ISO", FormatSpec::Exact(UnsignedShort), CountSpec::Range(1, 3), iso_speeds),
        0x8828 => info!(OECF, "none", FormatSpec::Exact(Undefined), CountSpec::Any, undefined_as_blob),
        0x8830 => info!(SensitivityType, "none", FormatSpec::Exact(UnsignedShort), CountSpec::Exact(1), sensitivity_type),
        0x9000 => info!(ExifVersion, "none", FormatSpec::Exact(Undefined), CountSpec::Any, undefined_as_ascii),
        0x9003 => info!(DateTimeOriginal, "none", FormatSpec::Exact(AsciiString), CountSpec::Any, strpass),
        0x9004 => info!(DateTimeDigitized, "none", FormatSpec::Exact(AsciiString), CountSpec::Any, strpass),
        0x9101 => info!(ComponentsConfiguration, "none", FormatSpec::Exact(Undefined), CountSpec::Exact(4), undefined_as_u8),
        0x9102 => info!(CompressedBitsPerPixel, "none", FormatSpec::Exact(UnsignedRational), CountSpec::Exact(1), rational_value),
        0x9201 => info!(ShutterSpeedValue, "APEX", FormatSpec::Exact(SignedRational), CountSpec::Exact(1), apex_tv),
        0x9202 => info!(ApertureValue, "APEX", FormatSpec::Exact(UnsignedRational), CountSpec::Exact(1), apex_av),
        0x9203 => info!(BrightnessValue, "APEX", FormatSpec::Exact(SignedRational), CountSpec::Exact(1), apex_brightness),
        0x9204 => info!(ExposureBiasValue, "APEX", FormatSpec::Exact(SignedRational), CountSpec::Exact(1), apex_ev),
        0x9205 => info!(MaxApertureValue, "APEX", FormatSpec::Exact(UnsignedRational), CountSpec::Exact(1), apex_av),
        0x9206 => info!(SubjectDistance, "m", FormatSpec::Exact(UnsignedRational), CountSpec::Exact(1), meters),
        0x9207 => info!(MeteringMode, "none", FormatSpec::Exact(UnsignedShort), CountSpec::Exact(1), metering_mode),
        0x9208 => info!(LightSource, "none", FormatSpec::Exact(UnsignedShort), CountSpec::Exact(1), light_source),
        0x9209 => info!(Flash, "none", FormatSpec::Exact(UnsignedShort), CountSpec::Range(1, 2), flash),
        0x920a => info!(FocalLength, "mm", FormatSpec::Exact(UnsignedRational), CountSpec::Exact(1), focal_length),
        0x9214 => info!(SubjectArea, "px", FormatSpec::Exact(UnsignedShort), CountSpec::Range(2, 4), subject_area),
        0x927c => info!(MakerNote, "none", FormatSpec::Exact(Undefined), CountSpec::Any, undefined_as_blob),
        0x9286 => info!(UserComment, "none", FormatSpec::Exact(Undefined), CountSpec::Any, undefined_as_encoded_string),
        0x9290 => info!(SubSecTime, "none", FormatSpec::Exact(AsciiString), CountSpec::Any, strpass),
        0x9291 => info!(SubSecTimeOriginal, "none", FormatSpec::Exact(AsciiString), CountSpec::Any, strpass),
        0x9292 => info!(SubSecTimeDigitized, "none", FormatSpec::Exact(AsciiString), CountSpec::Any, strpass),
        0xa000 => info!(FlashPixVersion, "none", FormatSpec::Exact(Undefined), CountSpec::Any, undefined_as_ascii),
        0xa001 => info!(ColorSpace, "none", FormatSpec::Exact(UnsignedShort), CountSpec::Exact(1), color_space),
        0xa002 => info!(PixelXDimension, "px", FormatSpec::OneOf(&[UnsignedShort, UnsignedLong]), CountSpec::Exact(1), strpass),
        0xa003 => info!(PixelYDimension, "px", FormatSpec::OneOf(&[UnsignedShort, UnsignedLong]), CountSpec::Exact(1), strpass),
        0xa004 => info!(RelatedSoundFile, "none", FormatSpec::Exact(AsciiString), CountSpec::Any, strpass),
        0xa005 => info!(InteroperabilityOffset, "byte offset", FormatSpec::Exact(UnsignedLong), CountSpec::Exact(1), strpass),
        0xa20b => info!(FlashEnergy, "BCPS", FormatSpec::Exact(UnsignedRational), CountSpec::Exact(1), flash_energy),
        0xa20e => info!(FocalPlaneXResolution, "@FocalPlaneResolutionUnit", FormatSpec::Exact(UnsignedRational), CountSpec::Exact(1), rational_value),
        0xa20f => info!(FocalPlaneYResolution, "@FocalPlaneResolutionUnit", FormatSpec::Exact(UnsignedRational), CountSpec::Exact(1), rational_value),
        0xa210 => info!(FocalPlaneResolutionUnit, "none", FormatSpec::Exact(UnsignedShort), CountSpec::Exact(1), resolution_unit),
        0xa214 => info!(SubjectLocation, "X,Y", FormatSpec::Exact(UnsignedShort), CountSpec::Exact(2), subject_location),
        0xa215 => info!(ExposureIndex, "EI", FormatSpec::Exact(UnsignedRational), CountSpec::Exact(1), rational_value),
        0xa217 => info!(SensingMethod, "none", FormatSpec::Exact(UnsignedShort), CountSpec::Exact(1), sensing_method),
        0xa300 => info!(FileSource, "none", FormatSpec::Exact(Undefined), CountSpec::Exact(1), file_source),
        0xa301 => info!(SceneType, "none", FormatSpec::Exact(Undefined), CountSpec::Exact(1), scene_type),
        0xa302 => info!(CFAPattern, "none", FormatSpec::Exact(Undefined), CountSpec::Any, undefined_as_u8),
        0xa401 => info!(CustomRendered, "none", FormatSpec::Exact(UnsignedShort), CountSpec::Exact(1), custom_rendered),
        0xa402 => info!(ExposureMode, "none", FormatSpec::Exact(UnsignedShort), CountSpec::Exact(1), exposure_mode),
        0xa403 => info!(WhiteBalanceMode, "none", FormatSpec::Exact(UnsignedShort), CountSpec::Exact(1), white_balance_mode),
        0xa404 => info!(DigitalZoomRatio, "none", FormatSpec::Exact(UnsignedRational), CountSpec::Exact(1), rational_value),
        0xa405 => info!(FocalLengthIn35mmFilm, "mm", FormatSpec::Exact(UnsignedShort), CountSpec::Exact(1), focal_length_35),
        0xa406 => info!(SceneCaptureType, "none", FormatSpec::Exact(UnsignedShort), CountSpec::Exact(1), scene_capture_type),
        0xa407 => info!(GainControl, "none", FormatSpec::Exact(UnsignedShort), CountSpec::Exact(1), gain_control),
        0xa408 => info!(Contrast, "none", FormatSpec::Exact(UnsignedShort), CountSpec::Exact(1), contrast),
        0xa409 => info!(Saturation, "none", FormatSpec::Exact(UnsignedShort), CountSpec::Exact(1), saturation),
        0xa40a => info!(Sharpness, "none", FormatSpec::Exact(UnsignedShort), CountSpec::Exact(1), sharpness),
        0xa40b => info!(DeviceSettingDescription, "none", FormatSpec::Exact(Undefined), CountSpec::Any, undefined_as_blob),
        0xa40c => info!(SubjectDistanceRange, "none", FormatSpec::Exact(UnsignedShort), CountSpec::Exact(1), subject_distance_range),
        0xa420 => info!(ImageUniqueID, "none", FormatSpec::Exact(AsciiString), CountSpec::Any, strpass),
        0xa432 => info!(LensSpecification, "none", FormatSpec::Exact(UnsignedRational), CountSpec::Exact(4), lens_spec),
        0xa433 => info!(LensMake, "none", FormatSpec::Exact(AsciiString), CountSpec::Any, strpass),
        0xa434 => info!(LensModel, "none", FormatSpec::Exact(AsciiString), CountSpec::Any, strpass),
        0xa500 => info!(Gamma, "none", FormatSpec::Exact(UnsignedRational), CountSpec::Exact(1), rational_value),
        _ => return None,
    })
}
