//! Exact-match search for the EXIF header signature (component C5).
//!
//! Uses the bitap (shift-or) algorithm: a 256-entry bitmask table built once from the fixed
//! 6-byte pattern, then a single O(n) scan over the haystack with O(1) memory per step. This
//! is overkill for a fixed 6-byte needle versus e.g. `memchr`-based search, but it generalizes
//! cleanly if the signature set ever grows (e.g. searching for `II*\0`/`MM\0*` TIFF headers
//! directly), and keeps the search free of any allocation.

/// The 6-byte ASCII signature that opens every EXIF TIFF blob.
pub const EXIF_SIGNATURE: &[u8; 6] = b"Exif\0\0";

/// Find the first occurrence of `EXIF_SIGNATURE` in `haystack`, returning the offset of its
/// first byte. Exhaustive: scans every byte position, never skips based on assumptions about
/// alignment or prior matches.
#[must_use]
pub fn find_exif_signature(haystack: &[u8]) -> Option<usize> {
    find(haystack, EXIF_SIGNATURE)
}

/// Find every non-overlapping occurrence of `EXIF_SIGNATURE`, in order.
#[must_use]
pub fn find_all_exif_signatures(haystack: &[u8]) -> Vec<usize> {
    let mut out = Vec::new();
    let mut start = 0;
    while let Some(rel) = find(&haystack[start..], EXIF_SIGNATURE) {
        let abs = start + rel;
        out.push(abs);
        start = abs + EXIF_SIGNATURE.len();
        if start >= haystack.len() {
            break;
        }
    }
    out
}

fn find(haystack: &[u8], pattern: &[u8]) -> Option<usize> {
    if pattern.is_empty() || pattern.len() > haystack.len() {
        return None;
    }
    if pattern.len() > 32 {
        // bitap's mask word can't represent a pattern this long; no signature this crate
        // searches for is anywhere near that size, but fail safe rather than truncate it.
        return None;
    }

    let mut masks = [!0u32; 256];
    for (i, &b) in pattern.iter().enumerate() {
        masks[b as usize] &= !(1u32 << i);
    }

    let match_bit = 1u32 << (pattern.len() - 1);
    let mut state = !0u32;

    for (i, &b) in haystack.iter().enumerate() {
        state = (state << 1) | masks[b as usize];
        if state & match_bit == 0 {
            return Some(i + 1 - pattern.len());
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_signature_at_start() {
        let buf = b"Exif\0\0II*\0rest";
        assert_eq!(find_exif_signature(buf), Some(0));
    }

    #[test]
    fn finds_signature_after_jpeg_preamble() {
        let mut buf = vec![0xffu8, 0xe1, 0x00, 0x10];
        buf.extend_from_slice(b"Exif\0\0");
        buf.extend_from_slice(b"II*\0");
        assert_eq!(find_exif_signature(&buf), Some(4));
    }

    #[test]
    fn no_false_positive_on_partial_match() {
        let buf = b"Exif\0X not a real header";
        assert_eq!(find_exif_signature(buf), None);
    }

    #[test]
    fn finds_all_occurrences() {
        let mut buf = Vec::new();
        buf.extend_from_slice(b"Exif\0\0");
        buf.extend_from_slice(&[0u8; 10]);
        buf.extend_from_slice(b"Exif\0\0");
        assert_eq!(find_all_exif_signatures(&buf), vec![0, 16]);
    }

    #[test]
    fn empty_haystack_finds_nothing() {
        assert_eq!(find_exif_signature(b""), None);
    }
}
