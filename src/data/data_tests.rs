use std::io::Cursor;

use super::*;

fn record_line(label: u8) -> String {
    let mut line = label.to_string();
    for k in 0..IMAGE_PIXELS {
        line.push(',');
        line.push_str(&(k % 256).to_string());
    }
    line
}

fn record_file(labels: &[u8]) -> String {
    let mut text = String::from("label,pixels\n");
    for &label in labels {
        text.push_str(&record_line(label));
        text.push('\n');
    }
    text
}

#[test]
fn test_read_single_record() {
    let text = record_file(&[7]);
    let images = read_images(Cursor::new(text), 1).expect("record is well-formed");

    assert_eq!(images.len(), 1);
    assert_eq!(images[0].label, 7);
    assert_eq!(images[0].pixels.shape(), (IMAGE_SIDE, IMAGE_SIDE));

    // Pixel k sits at (k / 28, k % 28), normalized by 255.
    for k in [0, 1, 27, 28, 255, 256, IMAGE_PIXELS - 1] {
        let expected = (k % 256) as f64 / PIXEL_MAX;
        let actual = images[0].pixels.get(k / IMAGE_SIDE, k % IMAGE_SIDE);
        assert!((actual - expected).abs() < 1e-12, "pixel {k}");
    }
}

#[test]
fn test_read_honors_count() {
    let text = record_file(&[1, 2, 3]);
    let images = read_images(Cursor::new(text), 2).expect("records are well-formed");
    assert_eq!(images.len(), 2);
    assert_eq!(images[0].label, 1);
    assert_eq!(images[1].label, 2);
}

#[test]
fn test_read_fewer_records_than_count() {
    let text = record_file(&[5]);
    let images = read_images(Cursor::new(text), 10).expect("record is well-formed");
    assert_eq!(images.len(), 1);
}

#[test]
fn test_read_empty_stream() {
    let images = read_images(Cursor::new(""), 4).expect("empty input yields no samples");
    assert!(images.is_empty());
}

#[test]
fn test_read_header_only() {
    let images = read_images(Cursor::new("label,pixels\n"), 4)
        .expect("header with no records yields no samples");
    assert!(images.is_empty());
}

#[test]
fn test_short_record_error() {
    let text = "label,pixels\n3,1,2,3\n";
    assert!(read_images(Cursor::new(text), 1).is_err());
}

#[test]
fn test_long_record_error() {
    let mut text = record_file(&[3]);
    text.pop();
    text.push_str(",9\n");
    assert!(read_images(Cursor::new(text), 1).is_err());
}

#[test]
fn test_bad_label_error() {
    let mut line = String::from("label,pixels\nx");
    for _ in 0..IMAGE_PIXELS {
        line.push_str(",0");
    }
    line.push('\n');
    assert!(read_images(Cursor::new(line), 1).is_err());
}

#[test]
fn test_bad_pixel_error() {
    let text = record_file(&[2]).replace(",17,", ",abc,");
    assert!(read_images(Cursor::new(text), 1).is_err());
}

#[test]
fn test_load_from_file() {
    let dir = tempfile::tempdir().expect("temp dir is creatable");
    let path = dir.path().join("records.csv");
    std::fs::write(&path, record_file(&[9, 4])).expect("temp file is writable");

    let images = load_images(&path, 2).expect("file holds two well-formed records");
    assert_eq!(images.len(), 2);
    assert_eq!(images[0].label, 9);
    assert_eq!(images[1].label, 4);
}
