#![allow(missing_docs)] // Derive macros generate undocumented methods.

use enum_assoc::Assoc;
use gpui::App;

use crate::theme::ThemeExt;

/// Text size variants that resolve to theme-defined values.
///
/// Use `resolve()` to get the actual `AbsoluteLength` from the current theme.
#[derive(Assoc)]
#[func(pub fn resolve(&self, cx: &App) -> gpui::AbsoluteLength)]
pub enum ThemeTextSizeKind {
    /// Extra large heading text.
    #[assoc(resolve = cx.get_theme().layout.text.default_font.sizes.heading_xl)]
    Xl,
    /// Large heading text.
    #[assoc(resolve = cx.get_theme().layout.text.default_font.sizes.heading_lg)]
    Lg,
    /// Medium heading text.
    #[assoc(resolve = cx.get_theme().layout.text.default_font.sizes.heading_md)]
    Md,
    /// Small heading text.
    #[assoc(resolve = cx.get_theme().layout.text.default_font.sizes.heading_sm)]
    Sm,
    /// Standard body text.
    #[assoc(resolve = cx.get_theme().layout.text.default_font.sizes.body)]
    Body,
    /// Small caption or label text.
    #[assoc(resolve = cx.get_theme().layout.text.default_font.sizes.caption)]
    Caption,
}

/// Background color variants from the active theme variant.
#[derive(Assoc)]
#[func(pub fn resolve(&self, cx: &App) -> gpui::Rgba)]
pub enum ThemeBackgroundKind {
    /// Base background for main surfaces.
    #[assoc(resolve = cx.get_theme().variants.active(cx).colors.background.primary)]
    Primary,
    /// Slightly elevated or grouped content.
    #[assoc(resolve = cx.get_theme().variants.active(cx).colors.background.secondary)]
    Secondary,
    /// Further elevated elements.
    #[assoc(resolve = cx.get_theme().variants.active(cx).colors.background.tertiary)]
    Tertiary,
    /// Highest emphasis backgrounds.
    #[assoc(resolve = cx.get_theme().variants.active(cx).colors.background.quaternary)]
    Quaternary,
}

/// Background layers for stacking surfaces with visual hierarchy.
///
/// Similar to `ThemeBackgroundKind` but supports `next()` to get the
/// elevated layer color for nested elements and borders.
#[derive(Assoc)]
#[func(pub fn resolve(&self, cx: &App) -> gpui::Rgba)]
#[func(pub fn next(&self) -> ThemeBackgroundKind)]
pub enum ThemeLayerKind {
    /// Base layer for main surfaces.
    #[assoc(resolve = cx.get_theme().variants.active(cx).colors.background.primary)]
    #[assoc(next = ThemeBackgroundKind::Secondary)]
    Primary,
    /// Second layer for grouped content.
    #[assoc(resolve = cx.get_theme().variants.active(cx).colors.background.secondary)]
    #[assoc(next = ThemeBackgroundKind::Tertiary)]
    Secondary,
    /// Third layer for elevated elements.
    #[assoc(resolve = cx.get_theme().variants.active(cx).colors.background.tertiary)]
    #[assoc(next = ThemeBackgroundKind::Quaternary)]
    Tertiary,
}

#[cfg(all(test, feature = "test-support"))]
mod tests {
    use std::sync::Arc;

    use gpui::TestAppContext;

    use super::*;
    use crate::theme::{
        MemoryPreferenceStore, SystemPrefersDark, Theme, ThemeExt, ThemeSettings,
    };

    fn init_theme(cx: &mut gpui::App) {
        cx.set_theme(Theme::DEFAULT);
        cx.set_global(SystemPrefersDark(true));
        crate::theme::init(
            ThemeSettings::new(Arc::new(MemoryPreferenceStore::new())),
            cx,
        );
    }

    #[gpui::test]
    fn test_theme_text_size_kind_variants(cx: &mut TestAppContext) {
        cx.update(|cx| {
            init_theme(cx);

            let _ = ThemeTextSizeKind::Xl.resolve(cx);
            let _ = ThemeTextSizeKind::Lg.resolve(cx);
            let _ = ThemeTextSizeKind::Md.resolve(cx);
            let _ = ThemeTextSizeKind::Sm.resolve(cx);
            let _ = ThemeTextSizeKind::Body.resolve(cx);
            let _ = ThemeTextSizeKind::Caption.resolve(cx);
        });
    }

    #[gpui::test]
    fn test_theme_background_kind_variants(cx: &mut TestAppContext) {
        cx.update(|cx| {
            init_theme(cx);

            let _ = ThemeBackgroundKind::Primary.resolve(cx);
            let _ = ThemeBackgroundKind::Secondary.resolve(cx);
            let _ = ThemeBackgroundKind::Tertiary.resolve(cx);
            let _ = ThemeBackgroundKind::Quaternary.resolve(cx);
        });
    }

    #[gpui::test]
    fn test_theme_layer_kind_next(cx: &mut TestAppContext) {
        cx.update(|_cx| {
            assert!(matches!(
                ThemeLayerKind::Primary.next(),
                ThemeBackgroundKind::Secondary
            ));
            assert!(matches!(
                ThemeLayerKind::Secondary.next(),
                ThemeBackgroundKind::Tertiary
            ));
            assert!(matches!(
                ThemeLayerKind::Tertiary.next(),
                ThemeBackgroundKind::Quaternary
            ));
        });
    }
}
