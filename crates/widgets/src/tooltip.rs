use iced::{Point, Size};

/// Gap between the pointer and the tooltip.
const OFFSET: f32 = 12.0;
/// Horizontal padding inside the tooltip box, both sides together.
const BOX_PADDING: f32 = 16.0;
/// Approximate advance of one glyph relative to the font size.
const GLYPH_RATIO: f32 = 0.6;

/// Top-left corner for a tooltip of `tip` size near `pointer`.
///
/// Sits below-right of the pointer, flipping to the left and/or above when it
/// would overflow `container`.
pub fn place(pointer: Point, tip: Size, container: Size) -> Point {
    let mut x = pointer.x + OFFSET;
    let mut y = pointer.y + OFFSET;

    if x + tip.width > container.width {
        x = pointer.x - tip.width - OFFSET;
    }
    if y + tip.height > container.height {
        y = pointer.y - tip.height - OFFSET;
    }

    Point::new(x.max(0.0), y.max(0.0))
}

/// Rough rendered size of a single-line tooltip, good enough for placement.
pub fn estimate_size(text: &str, font_size: f32) -> Size {
    Size::new(
        text.chars().count() as f32 * font_size * GLYPH_RATIO + BOX_PADDING,
        font_size + 12.0,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const CONTAINER: Size = Size::new(400.0, 180.0);
    const TIP: Size = Size::new(60.0, 24.0);

    #[test]
    fn sits_below_right_when_room() {
        assert_eq!(place(Point::new(100.0, 50.0), TIP, CONTAINER), Point::new(112.0, 62.0));
    }

    #[test]
    fn flips_left_near_right_edge() {
        let at = place(Point::new(380.0, 50.0), TIP, CONTAINER);
        assert_eq!(at, Point::new(308.0, 62.0));
    }

    #[test]
    fn flips_up_near_bottom_edge() {
        let at = place(Point::new(100.0, 170.0), TIP, CONTAINER);
        assert_eq!(at, Point::new(112.0, 134.0));
    }

    #[test]
    fn never_negative() {
        let at = place(Point::new(5.0, 5.0), Size::new(500.0, 500.0), CONTAINER);
        assert_eq!(at, Point::ORIGIN);
    }

    #[test]
    fn estimate_grows_with_text() {
        assert!(estimate_size("1234 TP", 12.0).width > estimate_size("1 TP", 12.0).width);
    }
}
