use std::time::Duration;

use gpui::{
    AnyElement, App, ClickEvent, CursorStyle, ElementId, InteractiveElement, IntoElement,
    JustifyContent, Length, ParentElement, RenderOnce, Rgba, SharedString,
    StatefulInteractiveElement, Styled, Window, div, linear_color_stop, linear_gradient,
    prelude::FluentBuilder, px, relative,
};
use gpui_squircle::{SquircleStyled, squircle};
use gpui_transitions::TransitionExt;
use smallvec::SmallVec;

use crate::{
    components::Icon,
    primitives::{FocusRing, min_w0_wrapper},
    theme::ThemeExt,
    utils::{
        ElementIdExt, PixelsExt, RgbaExt, SquircleExt, disabled_transition, rgb_a, transition_to,
    },
};

#[derive(IntoElement)]
pub struct Button {
    id: ElementId,
    text: Option<SharedString>,
    icon: Option<SharedString>,
    icon_size: Length,
    variant: ButtonVariant,
    disabled: bool,
    on_click: Option<Box<dyn Fn(&ClickEvent, &mut Window, &mut App) + 'static>>,
    children: SmallVec<[AnyElement; 2]>,
    justify_content: JustifyContent,
    width: Length,
}

impl Button {
    pub fn new(id: impl Into<ElementId>) -> Self {
        Self {
            id: id.into(),
            text: None,
            icon: None,
            icon_size: px(14.).into(),
            variant: ButtonVariant::Primary,
            disabled: false,
            on_click: None,
            children: SmallVec::new(),
            justify_content: JustifyContent::Center,
            width: Length::Auto,
        }
    }

    pub fn text(mut self, text: impl Into<SharedString>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn icon(mut self, icon: impl Into<SharedString>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn icon_size(mut self, icon_size: impl Into<Length>) -> Self {
        self.icon_size = icon_size.into();
        self
    }

    pub fn variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn on_click(
        mut self,
        on_click: impl Fn(&ClickEvent, &mut Window, &mut App) + 'static,
    ) -> Self {
        self.on_click = Some(Box::new(on_click));
        self
    }

    /// Aligns the label row against the start of the main axis.
    pub fn justify_start(mut self) -> Self {
        self.justify_content = JustifyContent::Start;
        self
    }

    /// Centers the label row along the main axis.
    pub fn justify_center(mut self) -> Self {
        self.justify_content = JustifyContent::Center;
        self
    }

    pub fn w(mut self, width: impl Into<Length>) -> Self {
        self.width = width.into();
        self
    }

    pub fn w_full(mut self) -> Self {
        self.width = relative(100.).into();
        self
    }
}

impl ParentElement for Button {
    fn extend(&mut self, elements: impl IntoIterator<Item = AnyElement>) {
        self.children.extend(elements);
    }
}

impl RenderOnce for Button {
    fn render(self, window: &mut gpui::Window, cx: &mut gpui::App) -> impl IntoElement {
        let variant = self.variant.as_granular(cx);
        let font_family = cx.get_theme().layout.text.default_font.family[0].clone();
        let line_height = cx.get_theme().layout.text.default_font.line_height;
        let text_size = cx.get_theme().layout.text.default_font.sizes.body;
        let corner_radius = cx.get_theme().layout.corner_radii.md;
        let horizontal_padding = cx.get_theme().layout.padding.lg;
        let gap = cx.get_theme().layout.padding.md;
        let vertical_padding =
            cx.get_theme()
                .layout
                .size
                .xl
                .padding_needed_for_height(window, text_size, line_height);

        let is_hover_state =
            window.use_keyed_state(self.id.with_suffix("state:hover"), cx, |_cx, _window| false);
        let is_hover = *is_hover_state.read(cx);

        let is_click_down_state = window.use_keyed_state(
            self.id.with_suffix("state:click_down"),
            cx,
            |_cx, _window| false,
        );
        let is_click_down = *is_click_down_state.read(cx);

        let focus_handle = window
            .use_keyed_state(
                self.id.with_suffix("state:focus_handle"),
                cx,
                |_window, cx| cx.focus_handle().tab_stop(true),
            )
            .read(cx)
            .clone();
        let is_focus = focus_handle.is_focused(window);

        let is_disabled = self.disabled;
        let disabled_transition_state =
            disabled_transition(self.id.clone(), window, cx, is_disabled);

        if is_focus && is_disabled {
            window.blur();
        }

        let is_active = is_hover || is_click_down || is_focus;

        let bg_opacity_state = transition_to(
            self.id.with_suffix("state:transition:bg_opacity"),
            window,
            cx,
            Duration::from_millis(250),
            if is_active {
                variant.bg_hover_opacity
            } else {
                variant.bg_rest_opacity
            },
        );

        let text_color_state = transition_to(
            self.id.with_suffix("state:transition:text_color"),
            window,
            cx,
            Duration::from_millis(250),
            if is_active {
                variant.text_hover_color
            } else {
                variant.text_color
            },
        );

        div()
            .id(self.id.clone())
            .cursor(if is_disabled {
                CursorStyle::OperationNotAllowed
            } else {
                CursorStyle::PointingHand
            })
            .w(self.width)
            .h_auto()
            .pt(vertical_padding)
            .pb(vertical_padding)
            .pl(horizontal_padding)
            .pr(horizontal_padding)
            .flex()
            .flex_col()
            .with_transitions(disabled_transition_state, |_cx, this, opacity| {
                this.opacity(opacity)
            })
            .child(
                FocusRing::new(self.id.with_suffix("focus_ring"), focus_handle.clone())
                    .rounded(corner_radius),
            )
            .child(
                squircle()
                    .absolute_expand()
                    .rounded(corner_radius)
                    .map(|this| match variant.fill {
                        ButtonFill::Solid(color) => this.bg(color),
                        ButtonFill::Gradient(from, to) => this.bg(linear_gradient(
                            90.,
                            linear_color_stop(from, 0.),
                            linear_color_stop(to, 1.),
                        )),
                    })
                    .when_some(variant.border_color, |this, color| {
                        this.border(px(1.)).border_inside().border_color(color)
                    })
                    .when(variant.highlight_alpha > 0., |this| {
                        this.border(px(1.))
                            .border_inside()
                            .border_highlight_color(variant.highlight_alpha)
                    })
                    .with_transitions(bg_opacity_state, |_cx, this, opacity| this.opacity(opacity)),
            )
            .child(
                div()
                    .w_full()
                    .flex()
                    .gap(gap)
                    .map(|mut this| {
                        this.style().justify_content = Some(self.justify_content);
                        this
                    })
                    .items_center()
                    .with_transitions(text_color_state, move |_cx, this, text_color| {
                        this.text_color(text_color)
                            .when_some(self.icon.as_ref(), |this, icon| {
                                this.child(
                                    Icon::new(icon.clone())
                                        .color(text_color)
                                        .size(self.icon_size),
                                )
                            })
                    })
                    .when_some(self.text, |this, text| {
                        this.child(
                            min_w0_wrapper()
                                .font_family(font_family.clone())
                                .text_size(text_size)
                                .text_ellipsis()
                                .child(text),
                        )
                    })
                    .children(self.children),
            )
            .when(!is_disabled, |this| {
                let is_hover_state_on_hover = is_hover_state.clone();
                let is_click_down_state_on_mouse_down = is_click_down_state.clone();
                let is_click_down_state_on_click = is_click_down_state.clone();
                let on_click = self.on_click;

                this.on_hover(move |hover, _window, cx| {
                    is_hover_state_on_hover.update(cx, |this, _cx| *this = *hover);
                    cx.notify(is_hover_state_on_hover.entity_id());
                })
                .on_mouse_down(gpui::MouseButton::Left, move |_, window, cx| {
                    // Prevents focus ring from appearing when clicked.
                    window.prevent_default();

                    is_click_down_state_on_mouse_down.update(cx, |this, _cx| *this = true);
                    cx.notify(is_click_down_state_on_mouse_down.entity_id());
                })
                .on_click(move |event, window, cx| {
                    window.prevent_default();

                    if !is_focus {
                        // We only want to blur if something else may be focused.
                        window.blur();
                    }

                    is_click_down_state_on_click.update(cx, |this, _cx| *this = false);
                    cx.notify(is_click_down_state_on_click.entity_id());

                    if let Some(on_click) = &on_click {
                        (on_click)(event, window, cx);
                    }
                })
                .on_mouse_up_out(gpui::MouseButton::Left, move |_event, _window, cx| {
                    // We need to clean up states when the mouse clicks down on the component, leaves its bounds, then unclicks.

                    is_hover_state.update(cx, |this, _cx| *this = false);
                    cx.notify(is_hover_state.entity_id());

                    is_click_down_state.update(cx, |this, _cx| *this = false);
                    cx.notify(is_click_down_state.entity_id());
                })
                .track_focus(&focus_handle)
            })
    }
}

/// How a button variant fills its surface.
#[derive(Clone, Copy)]
pub enum ButtonFill {
    Solid(Rgba),
    Gradient(Rgba, Rgba),
}

/// A fully resolved set of colors for one button appearance.
#[derive(Clone)]
pub struct GranularButtonVariant {
    pub fill: ButtonFill,
    /// Surface opacity when idle; link-like variants sit at zero.
    pub bg_rest_opacity: f32,
    /// Surface opacity while hovered, pressed, or focused.
    pub bg_hover_opacity: f32,
    pub text_color: Rgba,
    pub text_hover_color: Rgba,
    pub border_color: Option<Rgba>,
    pub highlight_alpha: f32,
}

/// The button appearances of the design system.
pub enum ButtonVariant {
    /// Accent gradient fill, the default call-to-action look.
    Primary,
    /// Transparent with a visible border; fills on hover.
    Outline,
    /// Transparent; fills on hover.
    Ghost,
    /// Renders like inline link text.
    Link,
    /// Solid destructive fill.
    Destructive,
    /// Destructive link text.
    DestructiveLink,
}

impl ButtonVariant {
    pub fn as_granular(&self, cx: &App) -> GranularButtonVariant {
        const HOVER_FILL_OPACITY: f32 = 0.7;

        let colors = &cx.get_theme().variants.active(cx).colors;

        match self {
            ButtonVariant::Primary => GranularButtonVariant {
                fill: ButtonFill::Gradient(colors.accent.primary, colors.accent.secondary),
                bg_rest_opacity: 1.,
                bg_hover_opacity: HOVER_FILL_OPACITY,
                text_color: colors.text.on_accent,
                text_hover_color: colors.text.on_accent,
                border_color: None,
                highlight_alpha: 0.15,
            },

            ButtonVariant::Outline => GranularButtonVariant {
                fill: ButtonFill::Solid(colors.background.tertiary),
                bg_rest_opacity: 0.,
                bg_hover_opacity: 1.,
                text_color: colors.text.secondary,
                text_hover_color: colors.text.primary,
                border_color: Some(colors.background.tertiary),
                highlight_alpha: 0.,
            },

            ButtonVariant::Ghost => GranularButtonVariant {
                fill: ButtonFill::Solid(colors.background.secondary),
                bg_rest_opacity: 0.,
                bg_hover_opacity: 1.,
                text_color: colors.text.secondary,
                text_hover_color: colors.text.primary,
                border_color: None,
                highlight_alpha: 0.,
            },

            ButtonVariant::Link => GranularButtonVariant {
                fill: ButtonFill::Solid(colors.background.primary),
                bg_rest_opacity: 0.,
                bg_hover_opacity: 0.,
                text_color: colors.accent.primary,
                text_hover_color: colors.accent.primary.alpha(HOVER_FILL_OPACITY),
                border_color: None,
                highlight_alpha: 0.,
            },

            ButtonVariant::Destructive => GranularButtonVariant {
                fill: ButtonFill::Solid(colors.accent.destructive),
                bg_rest_opacity: 1.,
                bg_hover_opacity: HOVER_FILL_OPACITY,
                text_color: rgb_a(0xffffff, 1.),
                text_hover_color: rgb_a(0xffffff, 1.),
                border_color: None,
                highlight_alpha: 0.,
            },

            ButtonVariant::DestructiveLink => GranularButtonVariant {
                fill: ButtonFill::Solid(colors.background.primary),
                bg_rest_opacity: 0.,
                bg_hover_opacity: 0.,
                text_color: colors.accent.destructive,
                text_hover_color: colors.accent.destructive.alpha(HOVER_FILL_OPACITY),
                border_color: None,
                highlight_alpha: 0.,
            },
        }
    }
}
