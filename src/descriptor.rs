//! Descriptor (component C4): the root container of a parsed metadata tree.

use crate::error::ExifError;
use crate::ids::{IfdId, IfdLocation};
use crate::ifd::Ifd;
use crate::value::Payload;
use std::collections::HashMap;

/// Policy applied to a tag the catalog doesn't recognize within its directory.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum UnknownTagPolicy {
    /// Store the raw bytes as `Payload::Unknown`, preserving them for round-tripping.
    Keep,
    /// Drop the entry silently.
    Remove,
    /// Fail the parse with `ExifError::UnknownTag`.
    Stop,
}

/// Caller-supplied parsing/serialization controls (a stand-in for the process-level flags
/// the teacher threads through its parse calls).
#[derive(Clone, Debug)]
pub struct Control {
    pub unknown: UnknownTagPolicy,
    pub warn: bool,
    pub parse_debug: bool,
    pub serialize_debug: bool,
}

impl Default for Control {
    fn default() -> Self {
        Self { unknown: UnknownTagPolicy::Keep, warn: false, parse_debug: false, serialize_debug: false }
    }
}

/// Cross-directory facts the parser discovers in one IFD but that the formatter/thumbnail
/// extractor need to read back out, keyed by concept rather than by owning IFD.
#[derive(Clone, Debug, Default)]
pub struct SideChannel {
    pub thumb_offset: Option<u32>,
    pub thumb_len: Option<u32>,
    pub thumb_compression: Option<u16>,
}

/// Root of a parsed EXIF metadata tree.
///
/// Owns the buffer it was parsed from (so edit-then-serialize can outlive the original
/// source), the endianness of all reads within that buffer, and an index recording where
/// every non-root IFD hangs off the tree (so the editor can reach it without a true
/// back-pointer; see `crate::ids::IfdLocation`).
pub struct Descriptor {
    pub(crate) buf: Vec<u8>,
    pub le: bool,
    /// Base offset this descriptor's own coordinate system is relative to. Zero for the main
    /// descriptor and for every descriptor whose `buf` was already sliced to start at its own
    /// origin (which is how this crate always constructs sub-descriptors); kept as an explicit
    /// field because it documents invariant I3 even though it is always 0 in this
    /// implementation (see DESIGN.md).
    pub origin: u32,
    pub(crate) root: Option<Ifd>,
    pub(crate) locations: HashMap<IfdId, IfdLocation>,
    pub side: SideChannel,
    pub control: Control,
    pub warnings: Vec<String>,
}

impl Descriptor {
    pub(crate) fn empty(buf: Vec<u8>, le: bool, origin: u32, control: Control) -> Self {
        Self {
            buf,
            le,
            origin,
            root: None,
            locations: HashMap::new(),
            side: SideChannel::default(),
            control,
            warnings: Vec::new(),
        }
    }

    #[must_use]
    pub fn buffer(&self) -> &[u8] {
        &self.buf
    }

    /// Whether an IFD with this id is currently reachable from the root (invariant I5).
    #[must_use]
    pub fn has_ifd(&self, id: IfdId) -> bool {
        if id == IfdId::Primary {
            return self.root.is_some();
        }
        self.ifd(id).is_some()
    }

    /// Navigate the tree to the IFD with the given id, if it's reachable.
    #[must_use]
    pub fn ifd(&self, id: IfdId) -> Option<&Ifd> {
        if id == IfdId::Primary {
            return self.root.as_ref();
        }
        match self.locations.get(&id)? {
            IfdLocation::Root => self.root.as_ref(),
            IfdLocation::Chained => self.root.as_ref()?.next.as_deref(),
            IfdLocation::EmbeddedIn { parent, tag } => {
                let parent_ifd = self.ifd(*parent)?;
                match &parent_ifd.get(*tag)?.payload {
                    Payload::EmbeddedIfd(child) => Some(child),
                    _ => None,
                }
            }
        }
    }

    pub(crate) fn ifd_mut(&mut self, id: IfdId) -> Option<&mut Ifd> {
        if id == IfdId::Primary {
            return self.root.as_mut();
        }
        let location = *self.locations.get(&id)?;
        match location {
            IfdLocation::Root => self.root.as_mut(),
            IfdLocation::Chained => self.root.as_mut()?.next.as_deref_mut(),
            IfdLocation::EmbeddedIn { parent, tag } => {
                let parent_ifd = self.ifd_mut(parent)?;
                for slot in &mut parent_ifd.values {
                    if let Some(v) = slot {
                        if v.tag == tag {
                            if let Payload::EmbeddedIfd(child) = &mut v.payload {
                                return Some(child);
                            }
                        }
                    }
                }
                None
            }
        }
    }

    pub(crate) fn register(&mut self, id: IfdId, location: IfdLocation) {
        self.locations.insert(id, location);
    }

    pub(crate) fn unregister(&mut self, id: IfdId) {
        self.locations.remove(&id);
    }

    /// Extract the raw bytes of a thumbnail image, if the side-channel recorded one for this
    /// directory's parse. Distinguishes genuine absence (`IfdNotPresent`, no thumbnail tracked)
    /// from a recorded offset/length that falls outside the buffer (`Truncated`), rather than
    /// collapsing both into `None`.
    pub fn get_thumbnail(&self, id: IfdId) -> Result<&[u8], ExifError> {
        self.ifd(id).ok_or(ExifError::IfdNotPresent)?;
        let off = self.side.thumb_offset.ok_or(ExifError::IfdNotPresent)? as usize;
        let len = self.side.thumb_len.ok_or(ExifError::IfdNotPresent)? as usize;
        let end = off.checked_add(len).ok_or(ExifError::Truncated)?;
        self.buf.get(off..end).ok_or(ExifError::Truncated)
    }

    /// List `(ifd id, offset, length, compression)` for every thumbnail the side-channel
    /// knows about. Only one thumbnail is tracked in this implementation (THUMBNAIL/EMBEDDED
    /// share the side-channel, matching the teacher's single-thumbnail scope), but the
    /// plural API leaves room for more without a breaking change.
    #[must_use]
    pub fn get_thumbnail_info(&self) -> Vec<(IfdId, u32, u32, Option<u16>)> {
        let mut out = Vec::new();
        if let (Some(off), Some(len)) = (self.side.thumb_offset, self.side.thumb_len) {
            let id = if self.has_ifd(IfdId::Thumbnail) { IfdId::Thumbnail } else { IfdId::Embedded };
            out.push((id, off, len, self.side.thumb_compression));
        }
        out
    }
}
