use merger::{MAX_CONTROL_RATIO, looks_like_text, merge_into};
use proptest::prelude::*;
use std::fs;
use tempfile::tempdir;

proptest! {
    #[test]
    fn test_zero_byte_is_never_text(
        mut probe in proptest::collection::vec(any::<u8>(), 0..1024),
        at in any::<prop::sample::Index>(),
    ) {
        probe.push(0);
        let i = at.index(probe.len());
        let last = probe.len() - 1;
        probe.swap(i, last);
        prop_assert!(!looks_like_text(&probe));
    }

    #[test]
    fn test_plain_utf8_is_text(content in "[a-zA-Z0-9 .,;\t\r\n\u{e9}\u{4e2d}\u{1f600}]{0,400}") {
        prop_assert!(looks_like_text(content.as_bytes()));
    }

    #[test]
    fn test_control_ratio_decides(controls in 0usize..60, letters in 1usize..60) {
        let mut probe = vec![0x01u8; controls];
        probe.extend(std::iter::repeat_n(b'x', letters));
        let ratio = controls as f64 / probe.len() as f64;
        prop_assert_eq!(looks_like_text(&probe), ratio <= MAX_CONTROL_RATIO);
    }

    #[test]
    fn test_block_holds_exact_bytes(content in "[^\\x00]{0,300}") {
        let dir = tempdir().unwrap();
        let path = dir.path().join("doc.txt");
        fs::write(&path, &content).unwrap();
        let mut out = Vec::new();
        let mut warnings = Vec::new();

        merge_into(&mut out, &[path], Some(dir.path()), &mut warnings).unwrap();

        let header = b"==== doc.txt ====\n";
        prop_assert!(out.starts_with(header));
        prop_assert!(out.ends_with(b"\n\n"));
        prop_assert_eq!(&out[header.len()..out.len() - 2], content.as_bytes());
    }
}
