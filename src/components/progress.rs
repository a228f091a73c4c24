use gpui::{IntoElement, ParentElement, RenderOnce, Styled, div, px, relative};

use crate::theme::ThemeExt;

/// A determinate progress bar. Values are clamped to `0.0..=100.0`.
#[derive(IntoElement)]
pub struct Progress {
    value: f32,
}

impl Progress {
    pub fn new() -> Self {
        Self { value: 0. }
    }

    pub fn value(mut self, value: f32) -> Self {
        self.value = value.clamp(0., 100.);
        self
    }
}

impl Default for Progress {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderOnce for Progress {
    fn render(self, _window: &mut gpui::Window, cx: &mut gpui::App) -> impl IntoElement {
        let colors = &cx.get_theme().variants.active(cx).colors;
        let track_color = colors.background.secondary;
        let indicator_color = colors.accent.primary;
        let height = cx.get_theme().layout.size.md;

        div()
            .w_full()
            .h(height)
            .rounded(px(100.))
            .overflow_hidden()
            .bg(track_color)
            .child(
                div()
                    .w(relative(self.value / 100.))
                    .h_full()
                    .bg(indicator_color),
            )
    }
}

#[cfg(all(test, feature = "test-support"))]
mod tests {
    use gpui::TestAppContext;

    use super::*;

    #[gpui::test]
    fn test_progress_clamps_value(cx: &mut TestAppContext) {
        cx.update(|_cx| {
            assert_eq!(Progress::new().value(50.).value, 50.);
            assert_eq!(Progress::new().value(250.).value, 100.);
            assert_eq!(Progress::new().value(-3.).value, 0.);
        });
    }
}
