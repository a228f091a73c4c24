use gpui::{
    AnyView, Context, FontWeight, InteractiveElement, IntoElement, ParentElement, Render,
    SharedString, Styled, Window, div, prelude::FluentBuilder, px,
};

use crate::{components::ThemeToggle, theme::ThemeExt};

/// Application frame: a navigation rail carrying the theme toggle, next to
/// a centered content column with a bottom-bordered header.
pub struct Shell {
    title: SharedString,
    subtitle: Option<SharedString>,
    content: AnyView,
}

impl Shell {
    /// Creates a new shell around the given content view.
    pub fn new(content: impl Into<AnyView>, _window: &mut Window, _cx: &mut Context<Self>) -> Self {
        Self {
            title: SharedString::default(),
            subtitle: None,
            content: content.into(),
        }
    }

    pub fn title(mut self, title: impl Into<SharedString>) -> Self {
        self.title = title.into();
        self
    }

    pub fn subtitle(mut self, subtitle: impl Into<SharedString>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }
}

impl Render for Shell {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        crate::init_for_window(window, cx);

        let colors = &cx.get_theme().variants.active(cx).colors;
        let background_color = colors.background.primary;
        let border_color = colors.background.tertiary;
        let text_color = colors.text.primary;
        let secondary_text_color = colors.text.secondary;

        let font_family = cx.get_theme().layout.text.default_font.family[0].clone();
        let body_size = cx.get_theme().layout.text.default_font.sizes.body;
        let heading_size = cx.get_theme().layout.text.default_font.sizes.heading_lg;
        let caption_size = cx.get_theme().layout.text.default_font.sizes.caption;

        div()
            .id("shell")
            .size_full()
            .bg(background_color)
            .text_color(text_color)
            .font_family(font_family)
            .text_size(body_size)
            .flex()
            .justify_center()
            .gap(px(32.))
            .pb(px(32.))
            .child(
                div()
                    .id("shell-nav")
                    .w(px(256.))
                    .flex()
                    .flex_col()
                    .gap(px(16.))
                    .pt(px(32.))
                    .child(ThemeToggle::new("theme-toggle")),
            )
            .child(
                div()
                    .id("shell-content")
                    .w_full()
                    .max_w(px(672.))
                    .flex()
                    .flex_col()
                    .child(
                        div()
                            .id("shell-header")
                            .mb(px(16.))
                            .p(px(16.))
                            .border_b_1()
                            .border_color(border_color)
                            .flex()
                            .flex_col()
                            .items_center()
                            .child(
                                div()
                                    .text_size(heading_size)
                                    .font_weight(FontWeight::BOLD)
                                    .child(self.title.clone()),
                            )
                            .when_some(self.subtitle.clone(), |this, subtitle| {
                                this.child(
                                    div()
                                        .text_size(caption_size)
                                        .text_color(secondary_text_color)
                                        .child(subtitle),
                                )
                            }),
                    )
                    .child(self.content.clone()),
            )
    }
}
