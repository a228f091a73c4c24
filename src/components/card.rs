use gpui::{AnyElement, IntoElement, RenderOnce, Styled, div, prelude::*, px};
use gpui_squircle::{SquircleStyled, squircle};
use smallvec::SmallVec;

use crate::theme::{ThemeExt, ThemeLayerKind};

/// A bordered, rounded container for grouped content.
#[derive(IntoElement)]
pub struct Card {
    layer: ThemeLayerKind,
    children: SmallVec<[AnyElement; 2]>,
}

impl Card {
    pub fn new() -> Self {
        Self {
            layer: ThemeLayerKind::Secondary,
            children: SmallVec::new(),
        }
    }

    /// Which background layer the card sits on; its border uses the next one.
    pub fn layer(mut self, layer: ThemeLayerKind) -> Self {
        self.layer = layer;
        self
    }
}

impl Default for Card {
    fn default() -> Self {
        Self::new()
    }
}

impl ParentElement for Card {
    fn extend(&mut self, elements: impl IntoIterator<Item = AnyElement>) {
        self.children.extend(elements);
    }
}

impl RenderOnce for Card {
    fn render(self, _window: &mut gpui::Window, cx: &mut gpui::App) -> impl IntoElement {
        let corner_radius = cx.get_theme().layout.corner_radii.lg;
        let padding = cx.get_theme().layout.padding.lg;
        let background_color = self.layer.resolve(cx);
        let border_color = self.layer.next().resolve(cx);

        div()
            .w_full()
            .h_auto()
            .child(
                squircle()
                    .absolute_expand()
                    .rounded(corner_radius)
                    .bg(background_color)
                    .border(px(2.))
                    .border_inside()
                    .border_color(border_color),
            )
            .child(
                div()
                    .p(padding)
                    .flex()
                    .flex_col()
                    .gap(cx.get_theme().layout.padding.md)
                    .children(self.children),
            )
    }
}

#[cfg(all(test, feature = "test-support"))]
mod tests {
    use gpui::TestAppContext;

    use super::*;

    #[gpui::test]
    fn test_card_layer(cx: &mut TestAppContext) {
        cx.update(|_cx| {
            let card = Card::new();
            assert!(
                matches!(card.layer, ThemeLayerKind::Secondary),
                "Card should default to the secondary layer"
            );

            let card = Card::new().layer(ThemeLayerKind::Primary);
            assert!(matches!(card.layer, ThemeLayerKind::Primary));
        });
    }
}
