//! Tag catalog and per-(directory, tag) validation (component C7).
//!
//! Each directory (TIFF-ish PRIMARY/THUMBNAIL/EMBEDDED, EXIF, GPS, IOP) gets its own lookup
//! table, mirroring the fact that tag numbers are only meaningful together with the directory
//! they appear in (IOP and GPS both use small tag numbers starting at 0x0001).

mod exif;
mod gps;
mod iop;
mod tiff;

use crate::ids::IfdId;
use crate::value::{TiffType, Value};
use std::borrow::Cow;
use std::fmt;

/// Human-readable-formatting callback for a tag's value. For display only; never affects
/// round-tripping.
pub type ReadableFn = fn(u16, &Value) -> Option<Cow<'static, str>>;

/// Expected TIFF type(s) for a tag. Most tags have exactly one; a handful (e.g.
/// `FlashpixVersion`, `PixelXDimension`) historically allow more than one encoding.
#[derive(Copy, Clone, Debug)]
pub enum FormatSpec {
    Exact(TiffType),
    OneOf(&'static [TiffType]),
}

impl FormatSpec {
    pub(crate) fn matches(&self, ty: TiffType) -> bool {
        match self {
            Self::Exact(t) => *t == ty,
            Self::OneOf(ts) => ts.iter().any(|t| *t == ty),
        }
    }
}

/// Expected element count for a tag.
#[derive(Copy, Clone, Debug)]
pub enum CountSpec {
    Any,
    Exact(u32),
    Range(u32, u32),
}

impl CountSpec {
    pub(crate) fn matches(&self, count: u32) -> bool {
        match self {
            Self::Any => true,
            Self::Exact(n) => count == *n,
            Self::Range(lo, hi) => count >= *lo && count <= *hi,
        }
    }
}

/// Static description of a known tag, returned by each directory's lookup table.
#[derive(Copy, Clone)]
pub struct TagInfo {
    pub name: KnownTag,
    pub unit: &'static str,
    pub format: FormatSpec,
    pub count: CountSpec,
    pub readable: ReadableFn,
}

/// Look up a tag's static description within a specific IFD. Returns `None` for tags the
/// catalog doesn't recognize in that directory (the caller then applies the unknown-tag
/// policy from `Control`).
pub(crate) fn lookup(dir: IfdId, tag: u16) -> Option<TagInfo> {
    match dir {
        IfdId::Primary | IfdId::Thumbnail | IfdId::Embedded => tiff::lookup(tag),
        IfdId::Exif => exif::lookup(tag),
        IfdId::Gps => gps::lookup(tag),
        IfdId::Iop => iop::lookup(tag),
        // MAKER directories are dispatched through `crate::makernotes`, which owns its own
        // vendor-specific catalogs; the generic walker never calls `lookup` for them.
        IfdId::Maker => None,
    }
}

/// Enumeration of every tag name this crate knows about, across all directories. Tags that
/// only differ by directory (e.g. GPS vs. IOP both using small tag numbers) get distinct
/// variants so there's never ambiguity about which table a name came from.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum KnownTag {
    UnknownToMe,

    // --- TIFF-ish (PRIMARY / THUMBNAIL / EMBEDDED) ---
    ImageWidth,
    ImageLength,
    BitsPerSample,
    Compression,
    PhotometricInterpretation,
    ImageDescription,
    Make,
    Model,
    StripOffsets,
    Orientation,
    SamplesPerPixel,
    RowsPerStrip,
    StripByteCounts,
    XResolution,
    YResolution,
    PlanarConfiguration,
    ResolutionUnit,
    Software,
    DateTime,
    HostComputer,
    WhitePoint,
    PrimaryChromaticities,
    JPEGInterchangeFormat,
    JPEGInterchangeFormatLength,
    YCbCrCoefficients,
    YCbCrSubSampling,
    YCbCrPositioning,
    ReferenceBlackWhite,
    Copyright,
    ExifOffset,
    GPSOffset,

    // --- EXIF ---
    ExposureTime,
    FNumber,
    ExposureProgram,
    SpectralSensitivity,
    ISOSpeedRatings,
    SensitivityType,
    OECF,
    ExifVersion,
    DateTimeOriginal,
    DateTimeDigitized,
    ComponentsConfiguration,
    CompressedBitsPerPixel,
    ShutterSpeedValue,
    ApertureValue,
    BrightnessValue,
    ExposureBiasValue,
    MaxApertureValue,
    SubjectDistance,
    MeteringMode,
    LightSource,
    Flash,
    FocalLength,
    SubjectArea,
    MakerNote,
    UserComment,
    SubSecTime,
    SubSecTimeOriginal,
    SubSecTimeDigitized,
    FlashPixVersion,
    ColorSpace,
    PixelXDimension,
    PixelYDimension,
    RelatedSoundFile,
    InteroperabilityOffset,
    FlashEnergy,
    FocalPlaneXResolution,
    FocalPlaneYResolution,
    FocalPlaneResolutionUnit,
    SubjectLocation,
    ExposureIndex,
    SensingMethod,
    FileSource,
    SceneType,
    CFAPattern,
    CustomRendered,
    ExposureMode,
    WhiteBalanceMode,
    DigitalZoomRatio,
    FocalLengthIn35mmFilm,
    SceneCaptureType,
    GainControl,
    Contrast,
    Saturation,
    Sharpness,
    DeviceSettingDescription,
    SubjectDistanceRange,
    ImageUniqueID,
    LensSpecification,
    LensMake,
    LensModel,
    Gamma,

    // --- GPS ---
    GPSVersionID,
    GPSLatitudeRef,
    GPSLatitude,
    GPSLongitudeRef,
    GPSLongitude,
    GPSAltitudeRef,
    GPSAltitude,
    GPSTimeStamp,
    GPSSatellites,
    GPSStatus,
    GPSMeasureMode,
    GPSDOP,
    GPSSpeedRef,
    GPSSpeed,
    GPSTrackRef,
    GPSTrack,
    GPSImgDirectionRef,
    GPSImgDirection,
    GPSMapDatum,
    GPSDestLatitudeRef,
    GPSDestLatitude,
    GPSDestLongitudeRef,
    GPSDestLongitude,
    GPSDestBearingRef,
    GPSDestBearing,
    GPSDestDistanceRef,
    GPSDestDistance,
    GPSProcessingMethod,
    GPSAreaInformation,
    GPSDateStamp,
    GPSDifferential,

    // --- IOP ---
    InteroperabilityIndex,
    InteroperabilityVersion,

    // --- Apple maker note ---
    AppleAccelerationVector,
    AppleHDRImageType,
    AppleOrientation,
    AppleRunTime,
    AppleUnknownPlist,

    // --- Nikon maker note ---
    NikonISOSettings,
    NikonColorMode,
    NikonQuality,
    NikonWhiteBalance,
    NikonFocusMode,
    NikonLensType,
}

impl KnownTag {
    #[must_use]
    pub fn human_name(&self) -> &'static str {
        match self {
            Self::UnknownToMe => "Unknown to this library, or manufacturer-specific",
            Self::ImageWidth => "Image width",
            Self::ImageLength => "Image height",
            Self::BitsPerSample => "Bits per sample",
            Self::Compression => "Compression",
            Self::PhotometricInterpretation => "Photometric interpretation",
            Self::ImageDescription => "Image Description",
            Self::Make => "Manufacturer",
            Self::Model => "Model",
            Self::StripOffsets => "Strip offsets",
            Self::Orientation => "Orientation",
            Self::SamplesPerPixel => "Samples per pixel",
            Self::RowsPerStrip => "Rows per strip",
            Self::StripByteCounts => "Strip byte counts",
            Self::XResolution => "X Resolution",
            Self::YResolution => "Y Resolution",
            Self::PlanarConfiguration => "Planar configuration",
            Self::ResolutionUnit => "Resolution Unit",
            Self::Software => "Software",
            Self::DateTime => "Image date",
            Self::HostComputer => "Host computer",
            Self::WhitePoint => "White Point",
            Self::PrimaryChromaticities => "Primary Chromaticities",
            Self::JPEGInterchangeFormat => "Thumbnail offset",
            Self::JPEGInterchangeFormatLength => "Thumbnail length",
            Self::YCbCrCoefficients => "YCbCr Coefficients",
            Self::YCbCrSubSampling => "YCbCr subsampling",
            Self::YCbCrPositioning => "YCbCr positioning",
            Self::ReferenceBlackWhite => "Reference Black/White",
            Self::Copyright => "Copyright",
            Self::ExifOffset => "This image has an Exif SubIFD",
            Self::GPSOffset => "This image has a GPS SubIFD",
            Self::ExposureTime => "Exposure time",
            Self::FNumber => "Aperture",
            Self::ExposureProgram => "Exposure program",
            Self::SpectralSensitivity => "Spectral sensitivity",
            Self::ISOSpeedRatings => "ISO speed ratings",
            Self::SensitivityType => "Sensitivity type",
            Self::OECF => "OECF",
            Self::ExifVersion => "Exif version",
            Self::DateTimeOriginal => "Date of original image",
            Self::DateTimeDigitized => "Date of image digitalization",
            Self::ComponentsConfiguration => "Components configuration",
            Self::CompressedBitsPerPixel => "Compressed bits per pixel",
            Self::ShutterSpeedValue => "Shutter speed",
            Self::ApertureValue => "Aperture value",
            Self::BrightnessValue => "Brightness value",
            Self::ExposureBiasValue => "Exposure bias value",
            Self::MaxApertureValue => "Maximum aperture value",
            Self::SubjectDistance => "Subject distance",
            Self::MeteringMode => "Metering mode",
            Self::LightSource => "Light source",
            Self::Flash => "Flash",
            Self::FocalLength => "Focal length",
            Self::SubjectArea => "Subject area",
            Self::MakerNote => "Maker note",
            Self::UserComment => "User comment",
            Self::SubSecTime => "Sub-second time",
            Self::SubSecTimeOriginal => "Sub-second time (original)",
            Self::SubSecTimeDigitized => "Sub-second time (digitized)",
            Self::FlashPixVersion => "Flashpix version",
            Self::ColorSpace => "Color space",
            Self::PixelXDimension => "Pixel X dimension",
            Self::PixelYDimension => "Pixel Y dimension",
            Self::RelatedSoundFile => "Related sound file",
            Self::InteroperabilityOffset => "This image has an Interoperability SubIFD",
            Self::FlashEnergy => "Flash energy",
            Self::FocalPlaneXResolution => "Focal plane X resolution",
            Self::FocalPlaneYResolution => "Focal plane Y resolution",
            Self::FocalPlaneResolutionUnit => "Focal plane resolution unit",
            Self::SubjectLocation => "Subject location",
            Self::ExposureIndex => "Exposure index",
            Self::SensingMethod => "Sensing method",
            Self::FileSource => "File source",
            Self::SceneType => "Scene type",
            Self::CFAPattern => "CFA Pattern",
            Self::CustomRendered => "Custom rendered",
            Self::ExposureMode => "Exposure mode",
            Self::WhiteBalanceMode => "White balance mode",
            Self::DigitalZoomRatio => "Digital zoom ratio",
            Self::FocalLengthIn35mmFilm => "Equivalent focal length in 35mm",
            Self::SceneCaptureType => "Scene capture type",
            Self::GainControl => "Gain control",
            Self::Contrast => "Contrast",
            Self::Saturation => "Saturation",
            Self::Sharpness => "Sharpness",
            Self::DeviceSettingDescription => "Device setting description",
            Self::SubjectDistanceRange => "Subject distance range",
            Self::ImageUniqueID => "Image unique ID",
            Self::LensSpecification => "Lens specification",
            Self::LensMake => "Lens manufacturer",
            Self::LensModel => "Lens model",
            Self::Gamma => "Gamma",
            Self::GPSVersionID => "GPS version ID",
            Self::GPSLatitudeRef => "GPS latitude ref",
            Self::GPSLatitude => "GPS latitude",
            Self::GPSLongitudeRef => "GPS longitude ref",
            Self::GPSLongitude => "GPS longitude",
            Self::GPSAltitudeRef => "GPS altitude ref",
            Self::GPSAltitude => "GPS altitude",
            Self::GPSTimeStamp => "GPS timestamp",
            Self::GPSSatellites => "GPS satellites",
            Self::GPSStatus => "GPS status",
            Self::GPSMeasureMode => "GPS measure mode",
            Self::GPSDOP => "GPS Data Degree of Precision (DOP)",
            Self::GPSSpeedRef => "GPS speed ref",
            Self::GPSSpeed => "GPS speed",
            Self::GPSTrackRef => "GPS track ref",
            Self::GPSTrack => "GPS track",
            Self::GPSImgDirectionRef => "GPS image direction ref",
            Self::GPSImgDirection => "GPS image direction",
            Self::GPSMapDatum => "GPS map datum",
            Self::GPSDestLatitudeRef => "GPS destination latitude ref",
            Self::GPSDestLatitude => "GPS destination latitude",
            Self::GPSDestLongitudeRef => "GPS destination longitude ref",
            Self::GPSDestLongitude => "GPS destination longitude",
            Self::GPSDestBearingRef => "GPS destination bearing ref",
            Self::GPSDestBearing => "GPS destination bearing",
            Self::GPSDestDistanceRef => "GPS destination distance ref",
            Self::GPSDestDistance => "GPS destination distance",
            Self::GPSProcessingMethod => "GPS processing method",
            Self::GPSAreaInformation => "GPS area information",
            Self::GPSDateStamp => "GPS date stamp",
            Self::GPSDifferential => "GPS differential",
            Self::InteroperabilityIndex => "Interoperability index",
            Self::InteroperabilityVersion => "Interoperability version",
            Self::AppleAccelerationVector => "Apple acceleration vector",
            Self::AppleHDRImageType => "Apple HDR image type",
            Self::AppleOrientation => "Apple orientation",
            Self::AppleRunTime => "Apple run time",
            Self::AppleUnknownPlist => "Apple property list",
            Self::NikonISOSettings => "Nikon ISO settings",
            Self::NikonColorMode => "Nikon color mode",
            Self::NikonQuality => "Nikon quality",
            Self::NikonWhiteBalance => "Nikon white balance",
            Self::NikonFocusMode => "Nikon focus mode",
            Self::NikonLensType => "Nikon lens type",
        }
    }
}

impl fmt::Display for KnownTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.human_name())
    }
}
