use gpui::{
    IntoElement, ParentElement, Pixels, RenderOnce, SharedString, Styled, div, img,
    prelude::FluentBuilder, px,
};

use crate::theme::ThemeExt;

/// A round user image with a textual fallback (initials) when no image
/// source is set or the image cannot load.
#[derive(IntoElement)]
pub struct Avatar {
    src: Option<SharedString>,
    fallback: Option<SharedString>,
    size: Pixels,
}

impl Avatar {
    pub fn new() -> Self {
        Self {
            src: None,
            fallback: None,
            size: px(40.),
        }
    }

    pub fn src(mut self, src: impl Into<SharedString>) -> Self {
        self.src = Some(src.into());
        self
    }

    pub fn fallback(mut self, fallback: impl Into<SharedString>) -> Self {
        self.fallback = Some(fallback.into());
        self
    }

    pub fn size(mut self, size: Pixels) -> Self {
        self.size = size;
        self
    }
}

impl Default for Avatar {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderOnce for Avatar {
    fn render(self, _window: &mut gpui::Window, cx: &mut gpui::App) -> impl IntoElement {
        let colors = &cx.get_theme().variants.active(cx).colors;
        let fallback_bg = colors.background.tertiary;
        let fallback_text_color = colors.text.primary;
        let text_size = cx.get_theme().layout.text.default_font.sizes.caption;
        let size = self.size;

        div()
            .w(size)
            .min_w(size)
            .h(size)
            .min_h(size)
            .rounded(px(100.))
            .overflow_hidden()
            .flex()
            .items_center()
            .justify_center()
            .map(|this| match self.src {
                Some(src) => this.child(img(src).w_full().h_full()),
                None => this
                    .bg(fallback_bg)
                    .text_color(fallback_text_color)
                    .text_size(text_size)
                    .when_some(self.fallback, |this, fallback| this.child(fallback)),
            })
    }
}

#[cfg(all(test, feature = "test-support"))]
mod tests {
    use gpui::TestAppContext;

    use super::*;

    #[gpui::test]
    fn test_avatar_defaults(cx: &mut TestAppContext) {
        cx.update(|_cx| {
            let avatar = Avatar::new();
            assert!(avatar.src.is_none());
            assert!(avatar.fallback.is_none());
            assert_eq!(avatar.size, px(40.));
        });
    }

    #[gpui::test]
    fn test_avatar_builder_chain(cx: &mut TestAppContext) {
        cx.update(|_cx| {
            let avatar = Avatar::new().src("avatars/me.png").fallback("ME").size(px(24.));
            assert_eq!(avatar.src, Some(SharedString::from("avatars/me.png")));
            assert_eq!(avatar.fallback, Some(SharedString::from("ME")));
            assert_eq!(avatar.size, px(24.));
        });
    }
}
