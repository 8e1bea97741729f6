//! Terminal scenes. Everything here reads the session, never mutates it.

pub mod game_over_scene;
pub mod play_scene;
pub mod start_scene;

use ratatui::layout::Rect;

/// A `width`x`height` rect centered inside `area`, clamped to fit.
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect_fits() {
        let area = Rect::new(0, 0, 80, 24);
        let rect = centered_rect(20, 5, area);
        assert_eq!(rect.width, 20);
        assert_eq!(rect.height, 5);
        assert!(rect.x + rect.width <= area.width);
        assert!(rect.y + rect.height <= area.height);
    }

    #[test]
    fn test_centered_rect_clamps_to_small_area() {
        let area = Rect::new(0, 0, 10, 3);
        let rect = centered_rect(100, 100, area);
        assert_eq!(rect.width, 10);
        assert_eq!(rect.height, 3);
    }
}
