use gpui::{
    Hsla, IntoElement, Length, Radians, RenderOnce, SharedString, Styled, Transformation,
    prelude::FluentBuilder, px, svg,
};

use crate::theme::ThemeExt;

/// An SVG icon with configurable size, color, and rotation.
///
/// Defaults to the active variant's primary text color.
#[derive(IntoElement)]
pub struct Icon {
    path: SharedString,
    size: Length,
    rotate: Radians,
    color: Option<Hsla>,
}

impl Icon {
    /// Creates a new icon from an SVG asset path.
    pub fn new(path: impl Into<SharedString>) -> Self {
        Self {
            path: path.into(),
            size: px(14.).into(),
            rotate: Radians(0.),
            color: None,
        }
    }

    /// Sets uniform width and height for the icon.
    pub fn size(mut self, size: impl Into<Length>) -> Self {
        self.size = size.into();
        self
    }

    /// Sets a custom color, overriding the theme's primary text color.
    pub fn color(mut self, color: impl Into<Hsla>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Applies a rotation transformation to the icon.
    pub fn rotate(mut self, rotate: impl Into<Radians>) -> Self {
        self.rotate = rotate.into();
        self
    }
}

impl RenderOnce for Icon {
    fn render(self, _window: &mut gpui::Window, cx: &mut gpui::App) -> impl IntoElement {
        let primary_text_color = cx.get_theme().variants.active(cx).colors.text.primary;

        svg()
            .path(self.path)
            .text_color(primary_text_color)
            .w(self.size)
            .min_w(self.size)
            .h(self.size)
            .min_h(self.size)
            .with_transformation(Transformation::rotate(self.rotate))
            .when_some(self.color, |this, color| this.text_color(color))
    }
}

#[cfg(all(test, feature = "test-support"))]
mod tests {
    use gpui::{TestAppContext, hsla};

    use super::*;

    #[gpui::test]
    fn test_icon_creation(cx: &mut TestAppContext) {
        cx.update(|_cx| {
            let icon = Icon::new("icons/sun.svg");
            assert_eq!(icon.path, SharedString::from("icons/sun.svg"));
            assert!(icon.color.is_none(), "Icon should start with no color");
            assert_eq!(icon.rotate.0, 0.0, "Icon should start with no rotation");
        });
    }

    #[gpui::test]
    fn test_icon_builder_chain(cx: &mut TestAppContext) {
        cx.update(|_cx| {
            let icon = Icon::new("icons/moon.svg")
                .size(px(24.))
                .color(hsla(0.5, 0.5, 0.5, 1.0))
                .rotate(Radians(1.5));

            assert!(icon.color.is_some());
            assert_eq!(icon.rotate.0, 1.5);
        });
    }
}
