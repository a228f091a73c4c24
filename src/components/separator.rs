use gpui::{IntoElement, RenderOnce, Styled, div, px};

use crate::theme::{ThemeBackgroundKind, ThemeExt};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SeparatorOrientation {
    Horizontal,
    Vertical,
}

/// A thin rule between sibling elements.
#[derive(IntoElement)]
pub struct Separator {
    orientation: SeparatorOrientation,
}

impl Separator {
    pub fn new() -> Self {
        Self {
            orientation: SeparatorOrientation::Horizontal,
        }
    }

    pub fn vertical(mut self) -> Self {
        self.orientation = SeparatorOrientation::Vertical;
        self
    }
}

impl Default for Separator {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderOnce for Separator {
    fn render(self, _window: &mut gpui::Window, cx: &mut gpui::App) -> impl IntoElement {
        let color = ThemeBackgroundKind::Tertiary.resolve(cx);

        let rule = div().flex_none().bg(color);

        match self.orientation {
            SeparatorOrientation::Horizontal => rule.w_full().h(px(1.)),
            SeparatorOrientation::Vertical => rule.h_full().w(px(1.)),
        }
    }
}
