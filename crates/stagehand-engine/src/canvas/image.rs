//! Solid-color canvas images.

use std::io::Cursor;
use std::path::Path;

use stagehand_common::{CanvasError, Color, Size};

/// Write a `size` PNG filled with `color` to `path`.
pub fn write_solid_png(path: &Path, size: Size, color: Color) -> Result<(), CanvasError> {
    let fail = |reason: String| CanvasError::ImageWrite {
        path: path.to_path_buf(),
        reason,
    };

    let pixels = color
        .to_rgba_bytes()
        .repeat(size.width as usize * size.height as usize);
    let png = encode_rgba(size, &pixels).map_err(fail)?;

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| fail(e.to_string()))?;
    }
    std::fs::write(path, png).map_err(|e| fail(e.to_string()))
}

fn encode_rgba(size: Size, rgba: &[u8]) -> Result<Vec<u8>, String> {
    let mut buf = Cursor::new(Vec::new());
    {
        let mut encoder = png::Encoder::new(&mut buf, size.width, size.height);
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);
        encoder.set_compression(png::Compression::Fast);
        let mut writer = encoder.write_header().map_err(|e| e.to_string())?;
        writer.write_image_data(rgba).map_err(|e| e.to_string())?;
    }
    Ok(buf.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;

    #[test]
    fn writes_png_of_requested_size_and_color() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("canvas.png");
        let color = Color::from_hex("#1e1e2e").unwrap();

        write_solid_png(&path, Size::new(64, 32), color).unwrap();

        let decoder = png::Decoder::new(File::open(&path).unwrap());
        let mut reader = decoder.read_info().unwrap();
        assert_eq!(reader.info().width, 64);
        assert_eq!(reader.info().height, 32);

        let mut buf = vec![0; reader.output_buffer_size()];
        reader.next_frame(&mut buf).unwrap();
        assert_eq!(&buf[..4], &[0x1e, 0x1e, 0x2e, 255]);
        assert_eq!(&buf[buf.len() - 4..], &[0x1e, 0x1e, 0x2e, 255]);
    }

    #[test]
    fn unwritable_path_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("file");
        std::fs::write(&blocker, b"x").unwrap();

        let err = write_solid_png(&blocker.join("canvas.png"), Size::new(1, 1), Color::BLACK)
            .unwrap_err();
        assert!(matches!(err, CanvasError::ImageWrite { .. }));
    }
}
