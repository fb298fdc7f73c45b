//! Editor (component C9): tag and sub-directory removal with cascading integrity rules.
//!
//! No teacher precedent exists for mutation (the rexif fork this crate started from is
//! read-only); this module is grounded on the IFD/value model itself (`crate::ifd`,
//! `crate::descriptor`) and written in the same bounds-checked, no-panic style as the parser.

use crate::descriptor::Descriptor;
use crate::error::ExifError;
use crate::ids::{IfdId, IfdLocation};

/// THUMBNAIL/EMBEDDED tags that must be removed together (invariant I6): a dangling thumbnail
/// offset or length is worse than no thumbnail tag at all.
const THUMBNAIL_PAIR: [u16; 2] = [0x0201, 0x0202];

impl Descriptor {
    /// Remove a tag from an IFD, or the whole IFD, per the rules in the operation surface:
    /// `tag = -1` detaches the entire IFD; `id = 0 && tag = 0` wipes every IFD (the whole
    /// metadata tree); otherwise the single matching tag is nulled.
    pub fn remove(&mut self, id: u32, tag: i32) -> Result<(), ExifError> {
        if id == 0 && tag == 0 {
            return self.wipe_all();
        }

        let ifd_id = IfdId::from_u32(id).ok_or(ExifError::InvalidIfdId)?;

        if tag == -1 {
            return self.detach_ifd(ifd_id);
        }

        let tag = u16::try_from(tag).map_err(|_| ExifError::TagOutOfRange(tag as u32))?;

        if !self.has_ifd(ifd_id) {
            return Err(ExifError::IfdNotPresent);
        }

        let removed = self.ifd_mut(ifd_id).ok_or(ExifError::IfdNotPresent)?.remove_tag(tag);
        if removed && THUMBNAIL_PAIR.contains(&tag) && matches!(ifd_id, IfdId::Primary | IfdId::Thumbnail | IfdId::Embedded) {
            let sibling = if tag == THUMBNAIL_PAIR[0] { THUMBNAIL_PAIR[1] } else { THUMBNAIL_PAIR[0] };
            if let Some(ifd) = self.ifd_mut(ifd_id) {
                ifd.remove_tag(sibling);
            }
            self.side.thumb_offset = None;
            self.side.thumb_len = None;
            self.side.thumb_compression = None;
        }

        if !removed && self.control.warn {
            self.warnings.push(format!("tag {tag:04x} not present in {ifd_id}"));
        }
        Ok(())
    }

    fn wipe_all(&mut self) -> Result<(), ExifError> {
        self.root = None;
        self.locations.clear();
        self.side = crate::descriptor::SideChannel::default();
        Ok(())
    }

    fn detach_ifd(&mut self, id: IfdId) -> Result<(), ExifError> {
        if id == IfdId::Primary {
            return Err(ExifError::RemovePrimary);
        }
        let location = *self.locations.get(&id).ok_or(ExifError::IfdNotPresent)?;
        match location {
            IfdLocation::Root => return Err(ExifError::RemovePrimary),
            IfdLocation::Chained => {
                if let Some(root) = self.root.as_mut() {
                    root.next = None;
                }
            }
            IfdLocation::EmbeddedIn { parent, tag } => {
                if let Some(parent_ifd) = self.ifd_mut(parent) {
                    for slot in &mut parent_ifd.values {
                        if matches!(slot, Some(v) if v.tag == tag) {
                            *slot = None;
                        }
                    }
                }
            }
        }
        self.unregister(id);
        if matches!(id, IfdId::Thumbnail | IfdId::Embedded) {
            self.side.thumb_offset = None;
            self.side.thumb_len = None;
            self.side.thumb_compression = None;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::Control;
    use crate::parser;

    fn sample() -> Descriptor {
        let mut buf = vec![0x45, 0x78, 0x69, 0x66, 0x00, 0x00, 0x49, 0x49, 0x2A, 0x00, 0x08, 0x00, 0x00, 0x00];
        buf.extend_from_slice(&2u16.to_le_bytes());
        buf.extend_from_slice(&0x0201u16.to_le_bytes());
        buf.extend_from_slice(&4u16.to_le_bytes()); // ULong
        buf.extend_from_slice(&1u32.to_le_bytes());
        buf.extend_from_slice(&100u32.to_le_bytes());
        buf.extend_from_slice(&0x0202u16.to_le_bytes());
        buf.extend_from_slice(&4u16.to_le_bytes());
        buf.extend_from_slice(&1u32.to_le_bytes());
        buf.extend_from_slice(&50u32.to_le_bytes());
        buf.extend_from_slice(&0u32.to_le_bytes());
        parser::parse(&buf, 0, buf.len(), Control::default()).unwrap()
    }

    #[test]
    fn removing_thumbnail_offset_cascades_to_length() {
        let mut desc = sample();
        desc.remove(IfdId::Primary as u32, 0x0201).unwrap();
        let ifd = desc.ifd(IfdId::Primary).unwrap();
        assert!(ifd.get(0x0201).is_none());
        assert!(ifd.get(0x0202).is_none());
    }

    #[test]
    fn removing_primary_is_rejected() {
        let mut desc = sample();
        assert!(matches!(desc.remove(IfdId::Primary as u32, -1), Err(ExifError::RemovePrimary)));
    }

    #[test]
    fn wipe_all_clears_tree() {
        let mut desc = sample();
        desc.remove(0, 0).unwrap();
        assert!(!desc.has_ifd(IfdId::Primary));
    }

    #[test]
    fn invalid_ifd_id_rejected() {
        let mut desc = sample();
        assert!(matches!(desc.remove(99, 0), Err(ExifError::InvalidIfdId)));
    }
}
