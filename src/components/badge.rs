use gpui::{
    FontWeight, IntoElement, RenderOnce, SharedString, Styled, div, prelude::*, px,
};

use crate::theme::ThemeExt;

/// A small pill label drawn with inverted colors: primary text color as the
/// fill, primary background color as the text.
#[derive(IntoElement)]
pub struct Badge {
    text: SharedString,
}

impl Badge {
    pub fn new(text: impl Into<SharedString>) -> Self {
        Self { text: text.into() }
    }
}

impl RenderOnce for Badge {
    fn render(self, _window: &mut gpui::Window, cx: &mut gpui::App) -> impl IntoElement {
        let colors = &cx.get_theme().variants.active(cx).colors;
        let fill = colors.text.primary;
        let text_color = colors.background.primary;
        let font_family = cx.get_theme().layout.text.default_font.family[0].clone();
        let text_size = cx.get_theme().layout.text.default_font.sizes.caption;

        div()
            .flex()
            .items_center()
            .rounded(px(100.))
            .bg(fill)
            .text_color(text_color)
            .pl(px(10.))
            .pr(px(10.))
            .pt(px(2.))
            .pb(px(2.))
            .font_family(font_family)
            .font_weight(FontWeight::SEMIBOLD)
            .text_size(text_size)
            .child(self.text)
    }
}

#[cfg(all(test, feature = "test-support"))]
mod tests {
    use gpui::TestAppContext;

    use super::*;

    #[gpui::test]
    fn test_badge_keeps_its_text(cx: &mut TestAppContext) {
        cx.update(|_cx| {
            let badge = Badge::new("New");
            assert_eq!(badge.text, SharedString::from("New"));
        });
    }
}
