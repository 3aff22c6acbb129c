use super::*;

#[test]
fn rejects_mismatched_length() {
    assert!(Bitmap::from_premul(2, 2, vec![0; 15]).is_err());
    assert!(Bitmap::from_premul(2, 2, vec![0; 16]).is_ok());
}

#[test]
fn pixel_reads_row_major() {
    let mut data = vec![0u8; 2 * 2 * 4];
    data[12..16].copy_from_slice(&[9, 8, 7, 255]);
    let bmp = Bitmap::from_premul(2, 2, data).unwrap();
    assert_eq!(bmp.pixel(1, 1), Some([9, 8, 7, 255]));
    assert_eq!(bmp.pixel(0, 0), Some([0, 0, 0, 0]));
    assert_eq!(bmp.pixel(2, 0), None);
}

#[test]
fn content_hash_tracks_pixels_and_size() {
    let a = Bitmap::from_premul(1, 2, vec![1; 8]).unwrap();
    let b = Bitmap::from_premul(1, 2, vec![1; 8]).unwrap();
    let c = Bitmap::from_premul(2, 1, vec![1; 8]).unwrap();
    let d = Bitmap::from_premul(1, 2, vec![2; 8]).unwrap();
    assert_eq!(a.content_hash(), b.content_hash());
    assert_ne!(a.content_hash(), c.content_hash());
    assert_ne!(a.content_hash(), d.content_hash());
}

#[test]
fn rgba_image_is_unpremultiplied() {
    let bmp = Bitmap::from_premul(1, 1, vec![64, 0, 128, 128]).unwrap();
    let img = bmp.to_rgba_image();
    assert_eq!(img.get_pixel(0, 0).0, [128, 0, 255, 128]);
}
