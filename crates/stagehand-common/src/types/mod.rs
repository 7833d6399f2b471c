mod color;
mod core;

pub use self::core::*;
pub use color::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn geometry_fullscreen_is_anchored_at_origin() {
        let g = Geometry::fullscreen(Size::new(2560, 1440));
        assert_eq!(g, Geometry::new(0, 0, 2560, 1440));
        assert_eq!(g.size(), Size::new(2560, 1440));
    }

    #[test]
    fn geometry_serialization() {
        let g = Geometry::new(100, 110, 336, 166);
        let json = serde_json::to_string(&g).unwrap();
        let deserialized: Geometry = serde_json::from_str(&json).unwrap();
        assert_eq!(g, deserialized);
    }

    #[test]
    fn size_display() {
        assert_eq!(Size::new(1920, 1080).to_string(), "1920x1080");
    }

    #[test]
    fn color_from_hex_6() {
        let c = Color::from_hex("#1e1e2e").unwrap();
        assert_eq!(c, Color::from_rgba(0x1e, 0x1e, 0x2e, 255));
    }

    #[test]
    fn color_from_hex_8() {
        let c = Color::from_hex("#ff880080").unwrap();
        assert_eq!(c, Color::from_rgba(255, 136, 0, 128));
    }

    #[test]
    fn color_from_hex_no_hash() {
        let c = Color::from_hex("222222").unwrap();
        assert_eq!(c, Color::from_rgba(0x22, 0x22, 0x22, 255));
    }

    #[test]
    fn color_from_hex_invalid() {
        assert!(Color::from_hex("zzzzzz").is_none());
        assert!(Color::from_hex("#abc").is_none());
        assert!(Color::from_hex("").is_none());
        assert!(Color::from_hex("#ééé").is_none());
    }

    #[test]
    fn color_to_hex() {
        assert_eq!(Color::from_rgba(255, 0, 128, 255).to_hex(), "#ff0080");
        assert_eq!(Color::from_rgba(255, 0, 128, 128).to_hex(), "#ff008080");
    }

    #[test]
    fn color_rgba_bytes() {
        assert_eq!(Color::BLACK.to_rgba_bytes(), [0, 0, 0, 255]);
    }
}
