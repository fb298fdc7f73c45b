//! Literal-byte-array scenarios, mirroring the six worked examples this crate is built against.
//! Colocated `#[cfg(test)]` modules in `src/*.rs` cover the unit-level behavior of each
//! component; these exercise the public API end to end.

use exifrw::{Control, IfdId};

fn le_header(ifd0_offset: u32) -> Vec<u8> {
    let mut v = b"Exif\0\0II*\0".to_vec();
    v.extend_from_slice(&ifd0_offset.to_le_bytes());
    v
}

#[test]
fn minimal_ifd0_round_trips() {
    let buf: Vec<u8> = vec![
        0x45, 0x78, 0x69, 0x66, 0x00, 0x00, 0x49, 0x49, 0x2A, 0x00, 0x08, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00,
    ];
    let desc = exifrw::parse(&buf, 0, buf.len(), Control::default()).unwrap();
    assert!(desc.has_ifd(IfdId::Primary));
    assert_eq!(desc.ifd(IfdId::Primary).unwrap().len(), 0);
    assert!(!desc.has_ifd(IfdId::Thumbnail));

    let out = desc.serialize().unwrap();
    let reparsed = exifrw::parse(&out, 0, out.len(), Control::default()).unwrap();
    assert_eq!(reparsed.ifd(IfdId::Primary).unwrap().len(), 0);
    assert!(!reparsed.has_ifd(IfdId::Thumbnail));
}

#[test]
fn inline_orientation_round_trips() {
    let mut buf = le_header(8);
    buf.extend_from_slice(&1u16.to_le_bytes());
    buf.extend_from_slice(&0x0112u16.to_le_bytes());
    buf.extend_from_slice(&3u16.to_le_bytes());
    buf.extend_from_slice(&1u32.to_le_bytes());
    buf.extend_from_slice(&1u16.to_le_bytes());
    buf.extend_from_slice(&[0, 0]);
    buf.extend_from_slice(&0u32.to_le_bytes());

    let desc = exifrw::parse(&buf, 0, buf.len(), Control::default()).unwrap();
    let v = desc.ifd(IfdId::Primary).unwrap().get(0x0112).unwrap();
    assert_eq!(v.to_i64(0), Some(1));

    let out = desc.serialize().unwrap();
    let reparsed = exifrw::parse(&out, 0, out.len(), Control::default()).unwrap();
    let v2 = reparsed.ifd(IfdId::Primary).unwrap().get(0x0112).unwrap();
    assert_eq!(v2.to_i64(0), Some(1));
}

#[test]
fn out_of_line_rational_decodes_and_round_trips() {
    // big-endian: PRIMARY has one entry, XResolution (0x011A, type 5 Rational, count 1),
    // pointing at an 8-byte rational sitting right after the IFD (entries+next).
    let mut buf = b"Exif\0\0MM\x00\x2A".to_vec();
    buf.extend_from_slice(&8u32.to_be_bytes()); // IFD0 @ 8
    buf.extend_from_slice(&1u16.to_be_bytes()); // 1 entry
    buf.extend_from_slice(&0x011Au16.to_be_bytes());
    buf.extend_from_slice(&5u16.to_be_bytes()); // Rational
    buf.extend_from_slice(&1u32.to_be_bytes()); // count
    let data_offset = 8u32 + 2 + 12 + 4; // right after count+entry+next
    buf.extend_from_slice(&data_offset.to_be_bytes());
    buf.extend_from_slice(&0u32.to_be_bytes()); // next = 0
    buf.extend_from_slice(&72u32.to_be_bytes());
    buf.extend_from_slice(&1u32.to_be_bytes());

    let desc = exifrw::parse(&buf, 0, buf.len(), Control::default()).unwrap();
    let v = desc.ifd(IfdId::Primary).unwrap().get(0x011A).unwrap();
    assert_eq!(v.to_f64(0), Some(72.0));

    let out = desc.serialize().unwrap();
    let reparsed = exifrw::parse(&out, 0, out.len(), Control::default()).unwrap();
    let v2 = reparsed.ifd(IfdId::Primary).unwrap().get(0x011A).unwrap();
    assert_eq!(v2.to_f64(0), Some(72.0));
}

#[test]
fn embedded_exif_ifd_round_trips() {
    // PRIMARY has a single tag 0x8769 pointing at an EXIF IFD holding ExifVersion "0230".
    let mut buf = le_header(8);
    buf.extend_from_slice(&1u16.to_le_bytes());
    buf.extend_from_slice(&0x8769u16.to_le_bytes());
    buf.extend_from_slice(&4u16.to_le_bytes()); // ULong
    buf.extend_from_slice(&1u32.to_le_bytes());
    let exif_ifd_offset = 10u32 + 12 + 4; // header(10) + 1 entry(12) + next(4)
    buf.extend_from_slice(&exif_ifd_offset.to_le_bytes());
    buf.extend_from_slice(&0u32.to_le_bytes()); // PRIMARY next = 0
    buf.extend_from_slice(&1u16.to_le_bytes()); // EXIF IFD: 1 entry
    buf.extend_from_slice(&0x9000u16.to_le_bytes());
    buf.extend_from_slice(&7u16.to_le_bytes()); // Undefined
    buf.extend_from_slice(&4u32.to_le_bytes());
    buf.extend_from_slice(b"0230");
    buf.extend_from_slice(&0u32.to_le_bytes()); // EXIF IFD next = 0

    let desc = exifrw::parse(&buf, 0, buf.len(), Control::default()).unwrap();
    let exif = desc.ifd(IfdId::Exif).unwrap();
    let v = exif.get(0x9000).unwrap();
    match &v.payload {
        exifrw::Payload::Unknown(bytes, _) => assert_eq!(bytes.as_slice(), b"0230"),
        _ => panic!("unexpected payload for ExifVersion"),
    }

    let out = desc.serialize().unwrap();
    let reparsed = exifrw::parse(&out, 0, out.len(), Control::default()).unwrap();
    assert!(reparsed.has_ifd(IfdId::Exif));
    let v2 = reparsed.ifd(IfdId::Exif).unwrap().get(0x9000).unwrap();
    match &v2.payload {
        exifrw::Payload::Unknown(bytes, _) => assert_eq!(bytes.as_slice(), b"0230"),
        _ => panic!("unexpected payload for ExifVersion"),
    }
}

#[test]
fn remove_and_round_trip_preserves_the_rest() {
    let mut buf = le_header(8);
    buf.extend_from_slice(&3u16.to_le_bytes());
    // Make (ascii, inline-padded though really out of line since "Acme\0" > 4 bytes)
    let data_start = 10u32 + 3 * 12 + 4;
    buf.extend_from_slice(&0x010Fu16.to_le_bytes());
    buf.extend_from_slice(&2u16.to_le_bytes()); // Ascii
    buf.extend_from_slice(&5u32.to_le_bytes()); // "Acme\0"
    buf.extend_from_slice(&data_start.to_le_bytes());
    // Model
    buf.extend_from_slice(&0x0110u16.to_le_bytes());
    buf.extend_from_slice(&2u16.to_le_bytes());
    buf.extend_from_slice(&3u32.to_le_bytes()); // "X\0" + pad... use count 2 "X\0"
    buf.extend_from_slice(b"X\0\0\0");
    // Orientation (inline)
    buf.extend_from_slice(&0x0112u16.to_le_bytes());
    buf.extend_from_slice(&3u16.to_le_bytes());
    buf.extend_from_slice(&1u32.to_le_bytes());
    buf.extend_from_slice(&1u16.to_le_bytes());
    buf.extend_from_slice(&[0, 0]);
    buf.extend_from_slice(&0u32.to_le_bytes()); // next = 0
    buf.extend_from_slice(b"Acme\0");

    let mut desc = exifrw::parse(&buf, 0, buf.len(), Control::default()).unwrap();
    let tags: Vec<u16> = desc.ifd(IfdId::Primary).unwrap().iter().map(|v| v.tag).collect();
    assert_eq!(tags, vec![0x010F, 0x0110, 0x0112]);

    desc.remove(IfdId::Primary as u32, 0x010F).unwrap();

    let out = desc.serialize().unwrap();
    let reparsed = exifrw::parse(&out, 0, out.len(), Control::default()).unwrap();
    let tags2: Vec<u16> = reparsed.ifd(IfdId::Primary).unwrap().iter().map(|v| v.tag).collect();
    assert_eq!(tags2, vec![0x0110, 0x0112]);
    let orientation = reparsed.ifd(IfdId::Primary).unwrap().get(0x0112).unwrap();
    assert_eq!(orientation.to_i64(0), Some(1));
}

#[test]
fn search_locates_signature_after_noise_and_reports_no_match() {
    let mut buf = vec![0u8, 0, 0];
    buf.extend_from_slice(b"Exif\0\0");
    buf.extend_from_slice(b"\xff\xff");
    let found = exifrw::search(&buf, 0).unwrap();
    assert_eq!(&found[..6], b"Exif\0\0");

    let haystack = vec![0x41u8; 1000];
    assert!(exifrw::search(&haystack, 0).is_err());
}
