// src/views/button_bar.rs
//
// On-screen mosaic selector.
// One button per mosaic id along the bottom of the window; the active one
// mirrors the controller's current selection.

use nannou::prelude::*;

const BUTTON_W: f32 = 120.0;
const BUTTON_H: f32 = 36.0;
const GAP: f32 = 12.0;
const MARGIN: f32 = 28.0;

#[derive(Debug, Clone)]
struct SelectButton {
    id: String,
    rect: Rect,
    active: bool,
}

#[derive(Debug, Clone)]
pub struct ButtonBar {
    buttons: Vec<SelectButton>,
}

impl ButtonBar {
    pub fn new(ids: &[String], window: Rect) -> Self {
        let buttons = ids
            .iter()
            .map(|id| SelectButton {
                id: id.clone(),
                rect: Rect::from_w_h(BUTTON_W, BUTTON_H),
                active: false,
            })
            .collect();
        let mut bar = Self { buttons };
        bar.layout(window);
        bar
    }

    /// Centres the row of buttons at the bottom of `window`.
    pub fn layout(&mut self, window: Rect) {
        let count = self.buttons.len() as f32;
        let total_w = count * BUTTON_W + (count - 1.0).max(0.0) * GAP;
        let y = window.bottom() + MARGIN + BUTTON_H / 2.0;
        let mut x = window.x() - total_w / 2.0 + BUTTON_W / 2.0;

        for button in self.buttons.iter_mut() {
            button.rect = Rect::from_x_y_w_h(x, y, BUTTON_W, BUTTON_H);
            x += BUTTON_W + GAP;
        }
    }

    pub fn hit(&self, point: Point2) -> Option<&str> {
        self.buttons
            .iter()
            .find(|b| b.rect.contains(point))
            .map(|b| b.id.as_str())
    }

    pub fn set_active(&mut self, id: &str) {
        for button in self.buttons.iter_mut() {
            button.active = button.id == id;
        }
    }

    pub fn draw(&self, draw: &Draw) {
        for button in &self.buttons {
            let (fill, text) = if button.active {
                (rgba(1.0, 1.0, 1.0, 0.9), rgb(0.05, 0.05, 0.05))
            } else {
                (rgba(1.0, 1.0, 1.0, 0.12), rgb(0.9, 0.9, 0.9))
            };
            draw.rect()
                .xy(button.rect.xy())
                .wh(button.rect.wh())
                .color(fill);
            draw.text(&button.id)
                .xy(button.rect.xy())
                .wh(button.rect.wh())
                .font_size(14)
                .color(text);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids() -> Vec<String> {
        vec!["heart".to_string(), "codrops".to_string(), "smile".to_string()]
    }

    fn active(bar: &ButtonBar) -> Option<&str> {
        bar.buttons.iter().find(|b| b.active).map(|b| b.id.as_str())
    }

    fn window() -> Rect {
        Rect::from_w_h(1280.0, 800.0)
    }

    #[test]
    fn test_layout_is_centred_at_bottom() {
        let bar = ButtonBar::new(&ids(), window());
        let buttons = &bar.buttons;
        assert_eq!(buttons.len(), 3);
        // middle button sits on the centre line
        assert!(buttons[1].rect.x().abs() < 1e-4);
        assert!((buttons[0].rect.x() + (BUTTON_W + GAP)).abs() < 1e-4);
        for b in buttons {
            assert!((b.rect.bottom() - (-400.0 + MARGIN)).abs() < 1e-4);
        }
    }

    #[test]
    fn test_hit_testing() {
        let bar = ButtonBar::new(&ids(), window());
        let smile = bar.buttons[2].rect.xy();
        assert_eq!(bar.hit(smile), Some("smile"));
        assert_eq!(bar.hit(pt2(0.0, 0.0)), None);
        // the gap between buttons is not a hit
        let gap_x = BUTTON_W / 2.0 + GAP / 2.0;
        assert_eq!(bar.hit(pt2(gap_x, smile.y)), None);
    }

    #[test]
    fn test_single_active_button() {
        let mut bar = ButtonBar::new(&ids(), window());
        assert_eq!(active(&bar), None);
        bar.set_active("codrops");
        assert_eq!(active(&bar), Some("codrops"));
        bar.set_active("smile");
        assert_eq!(active(&bar), Some("smile"));
        assert_eq!(bar.buttons.iter().filter(|b| b.active).count(), 1);
    }

    #[test]
    fn test_relayout_follows_window() {
        let mut bar = ButtonBar::new(&ids(), window());
        bar.layout(Rect::from_w_h(640.0, 480.0));
        assert!((bar.buttons[0].rect.bottom() - (-240.0 + MARGIN)).abs() < 1e-4);
    }
}
