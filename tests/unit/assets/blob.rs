use super::*;

fn record(w: u32, h: u32, payload: &[u8]) -> Vec<u8> {
    let mut out = w.to_le_bytes().to_vec();
    out.extend_from_slice(&h.to_le_bytes());
    out.extend_from_slice(payload);
    out
}

#[test]
fn parses_consecutive_records() {
    let mut blob = record(2, 1, &[1, 2]);
    blob.extend(record(1, 3, &[0, 1, 2]));
    let masks = parse_mask_blob(&blob).unwrap();
    assert_eq!(masks.len(), 2);
    assert_eq!(masks[0].dims(), (2, 1));
    assert_eq!(masks[0].as_slice(), &[1, 2]);
    assert_eq!(masks[1].dims(), (1, 3));
    assert_eq!(masks[1].as_slice(), &[0, 1, 2]);
}

#[test]
fn empty_blob_has_no_masks() {
    assert!(parse_mask_blob(&[]).unwrap().is_empty());
}

#[test]
fn write_produces_parseable_layout() {
    let masks = vec![
        Image::from_vec(3, 2, vec![0u8, 1, 2, 2, 1, 0]).unwrap(),
        Image::new(1, 1, 9u8).unwrap(),
    ];
    let blob = write_mask_blob(&masks).unwrap();
    assert_eq!(blob.len(), 8 + 6 + 8 + 1);
    assert_eq!(&blob[..8], &[3, 0, 0, 0, 2, 0, 0, 0]);
    assert_eq!(parse_mask_blob(&blob).unwrap(), masks);
}

#[test]
fn malformed_blobs_are_decode_errors() {
    let cases: Vec<(&str, Vec<u8>)> = vec![
        ("short header", vec![1, 0, 0]),
        ("missing height", vec![1, 0, 0, 0, 1]),
        ("zero width", record(0, 4, &[])),
        ("zero height", record(4, 0, &[])),
        ("short payload", record(2, 2, &[1, 2, 3])),
        ("huge payload", record(u32::MAX, u32::MAX, &[1])),
    ];
    for (name, blob) in cases {
        let err = parse_mask_blob(&blob).unwrap_err();
        assert!(matches!(err, PixError::Decode(_)), "{name}: {err}");
    }

    let mut trailing = record(1, 1, &[5]);
    trailing.push(0);
    assert!(matches!(
        parse_mask_blob(&trailing),
        Err(PixError::Decode(_))
    ));
}
