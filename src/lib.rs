//! `exifrw`: parses, edits, and re-serializes EXIF metadata embedded in TIFF/JPEG containers.
//!
//! The entry points are [`search`] (locate the `Exif\x00\x00` signature in an arbitrary byte
//! buffer), [`parse`] (decode the metadata tree that follows it), [`read`]/[`write`] (thin
//! file-system collaborators), and [`Descriptor::remove`]/[`Descriptor::serialize`] for
//! editing and re-encoding a parsed tree.

mod descriptor;
mod editor;
mod error;
mod exifreadable;
mod ids;
mod ifd;
mod image;
mod lowlevel;
mod makernotes;
mod parser;
mod rational;
mod search;
mod serializer;
mod tags;
mod value;

use std::fs;
use std::io::Write as _;
use std::path::Path;

pub use descriptor::{Control, Descriptor, SideChannel, UnknownTagPolicy};
pub use error::{ExifError, InvalidReason};
pub use ids::IfdId;
pub use ifd::Ifd;
pub use image::{detect_type, find_embedded_tiff_in_jpeg, FileType};
pub use rational::{IRational, URational};
pub use search::{find_all_exif_signatures, find_exif_signature, EXIF_SIGNATURE};
pub use tags::KnownTag;
pub use value::{ForeignDescriptor, Payload, TiffType, Value};

/// Locate the EXIF signature at or after `start`, returning the slice beginning at its first
/// byte (ready to hand to [`parse`]).
pub fn search(buf: &[u8], start: usize) -> Result<&[u8], ExifError> {
    parser::search(buf, start)
}

/// Parse the region `buf[start..start+len]` (which must begin with `Exif\x00\x00`) into a
/// [`Descriptor`].
pub fn parse(buf: &[u8], start: usize, len: usize, control: Control) -> Result<Descriptor, ExifError> {
    parser::parse(buf, start, len, control)
}

/// Read a JPEG or TIFF file from disk and parse its EXIF metadata.
///
/// For a JPEG, this locates the `APP1` segment via [`find_embedded_tiff_in_jpeg`] first. For a
/// bare TIFF, the whole file (after the 8-byte TIFF header check) is treated as the metadata
/// region, matching how the teacher's `rexif::parse_buffer` distinguishes the two containers.
pub fn read(path: impl AsRef<Path>, control: Control) -> Result<Descriptor, ExifError> {
    let contents = fs::read(path)?;
    match image::detect_type(&contents) {
        FileType::JPEG => {
            let (start, len) = image::find_embedded_tiff_in_jpeg(&contents)?;
            parser::parse(&contents, start, len, control)
        }
        FileType::TIFF => parser::parse_tiff(contents, control),
        FileType::Unknown => Err(ExifError::FileTypeUnknown),
    }
}

/// Serialize `desc` and write the result to `path`, replacing its contents.
///
/// This writes only the `Exif\x00\x00`-prefixed TIFF blob, not a full JPEG container; callers
/// that need to splice the result back into a JPEG's `APP1` segment do so themselves.
pub fn write(desc: &Descriptor, path: impl AsRef<Path>) -> Result<usize, ExifError> {
    let bytes = desc.serialize()?;
    let mut file = fs::File::create(path)?;
    file.write_all(&bytes)?;
    Ok(bytes.len())
}
