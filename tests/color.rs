mod tests {
    use ring_clock::Frame;
    use ring_clock::color::{BLACK, ColorOrder, Rgb, add_colors, is_black};

    const RED: Rgb = Rgb { r: 255, g: 0, b: 0 };
    const DIM: Rgb = Rgb { r: 10, g: 20, b: 30 };

    #[test]
    fn test_add_colors() {
        assert_eq!(add_colors(BLACK, DIM), DIM);
        assert_eq!(add_colors(DIM, DIM), Rgb { r: 20, g: 40, b: 60 });
    }

    #[test]
    fn test_add_colors_saturates() {
        assert_eq!(add_colors(RED, DIM), Rgb { r: 255, g: 20, b: 30 });
        let white = Rgb {
            r: 255,
            g: 255,
            b: 255,
        };
        assert_eq!(add_colors(white, white), white);
    }

    #[test]
    fn test_is_black() {
        assert!(is_black(BLACK));
        assert!(!is_black(Rgb { r: 0, g: 0, b: 1 }));
    }

    #[test]
    fn test_frame_blend_add_wraps_index() {
        let mut frame = Frame::<12>::new();
        frame.blend_add(13, DIM);
        assert_eq!(frame[1], DIM);
        frame.blend_add(1, DIM);
        assert_eq!(frame[1], Rgb { r: 20, g: 40, b: 60 });
        assert_eq!(frame.lit_count(), 1);
    }

    #[test]
    fn test_frame_starts_black() {
        let frame = Frame::<60>::default();
        assert_eq!(frame.len(), 60);
        assert_eq!(frame.lit_count(), 0);
        assert!(frame.as_slice().iter().all(|p| is_black(*p)));
    }

    #[test]
    fn test_color_order_to_wire() {
        let c = Rgb { r: 1, g: 2, b: 3 };
        assert_eq!(ColorOrder::Rgb.to_wire(c), Rgb { r: 1, g: 2, b: 3 });
        assert_eq!(ColorOrder::Grb.to_wire(c), Rgb { r: 2, g: 1, b: 3 });
        assert_eq!(ColorOrder::Bgr.to_wire(c), Rgb { r: 3, g: 2, b: 1 });
        assert_eq!(ColorOrder::Brg.to_wire(c), Rgb { r: 3, g: 1, b: 2 });
        assert_eq!(ColorOrder::Gbr.to_wire(c), Rgb { r: 2, g: 3, b: 1 });
        assert_eq!(ColorOrder::Rbg.to_wire(c), Rgb { r: 1, g: 3, b: 2 });
    }
}
