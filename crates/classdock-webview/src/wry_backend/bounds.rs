//! Coordinate conversion between layout rects and wry rects.

use classdock_common::Rect;

/// Convert a layout `Rect` (f64 logical coords) to a wry `Rect`.
pub fn to_wry(rect: &Rect) -> wry::Rect {
    wry::Rect {
        position: wry::dpi::Position::Logical(wry::dpi::LogicalPosition::new(rect.x, rect.y)),
        size: wry::dpi::Size::Logical(wry::dpi::LogicalSize::new(rect.width, rect.height)),
    }
}

/// Convert a wry `Rect` back to logical coordinates. Some platforms report
/// physical pixels, hence the scale factor.
pub fn from_wry(rect: &wry::Rect, scale_factor: f64) -> Rect {
    let position: wry::dpi::LogicalPosition<f64> = rect.position.to_logical(scale_factor);
    let size: wry::dpi::LogicalSize<f64> = rect.size.to_logical(scale_factor);
    Rect::new(position.x, position.y, size.width, size.height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_rect_converts_to_logical_wry_rect() {
        let wry_rect = to_wry(&Rect::new(0.0, 48.0, 1000.0, 752.0));

        match wry_rect.position {
            wry::dpi::Position::Logical(pos) => {
                assert!((pos.x).abs() < f64::EPSILON);
                assert!((pos.y - 48.0).abs() < f64::EPSILON);
            }
            _ => panic!("Expected logical position"),
        }
        match wry_rect.size {
            wry::dpi::Size::Logical(size) => {
                assert!((size.width - 1000.0).abs() < f64::EPSILON);
                assert!((size.height - 752.0).abs() < f64::EPSILON);
            }
            _ => panic!("Expected logical size"),
        }
    }

    #[test]
    fn logical_rect_survives_round_trip() {
        let rect = Rect::new(0.0, 48.0, 1280.0, 752.0);
        assert_eq!(from_wry(&to_wry(&rect), 2.0), rect);
    }

    #[test]
    fn physical_rect_is_scaled_down() {
        let physical = wry::Rect {
            position: wry::dpi::Position::Physical(wry::dpi::PhysicalPosition::new(0, 96)),
            size: wry::dpi::Size::Physical(wry::dpi::PhysicalSize::new(2560, 1504)),
        };
        assert_eq!(
            from_wry(&physical, 2.0),
            Rect::new(0.0, 48.0, 1280.0, 752.0)
        );
    }

    #[test]
    fn zero_rect_stays_degenerate() {
        let rect = from_wry(&to_wry(&Rect::default()), 1.0);
        assert!(rect.is_degenerate());
    }
}
