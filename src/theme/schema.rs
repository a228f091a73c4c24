use std::{
    ops::{Deref, DerefMut},
    sync::LazyLock,
};

use gpui::{AbsoluteLength, App, DefiniteLength, Global, Pixels, Rgba, SharedString};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::deserializers::{de_abs_length, de_def_length, de_pixels, de_string_or_non_empty_list};
use crate::theme::{ResolvedTheme, ThemeExt};

/// A complete set of styling tokens: layout metrics shared by both
/// variants, plus one color table per resolved theme.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Theme {
    pub name: SharedString,
    pub layout: ThemeLayout,
    pub variants: ThemeVariants,
}

pub struct LazyLockTheme(LazyLock<Theme>);

impl LazyLockTheme {
    #[inline(always)]
    const fn new(f: fn() -> Theme) -> Self {
        Self(LazyLock::new(f))
    }
}

impl Deref for LazyLockTheme {
    type Target = Theme;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for LazyLockTheme {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl AsRef<Theme> for LazyLockTheme {
    fn as_ref(&self) -> &Theme {
        &self.0
    }
}

impl Theme {
    /// The built-in theme shipped with the crate.
    pub const DEFAULT: LazyLockTheme = LazyLockTheme::new(|| {
        Theme::from_string(include_str!("../../themes/default.json")).unwrap()
    });

    fn from_string<S: AsRef<str>>(str: S) -> Result<Theme, serde_json::Error> {
        serde_json::from_str(str.as_ref())
    }
}

impl Global for Theme {}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ThemeLayout {
    pub text: ThemeText,
    pub corner_radii: ThemeCornerRadii,
    pub size: ThemeSize,
    pub padding: ThemePadding,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ThemeText {
    #[serde(deserialize_with = "de_pixels")]
    pub base_size: Pixels,
    pub default_font: ThemeFont,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ThemeFont {
    #[serde(deserialize_with = "de_string_or_non_empty_list")]
    pub family: SmallVec<[SharedString; 1]>,
    #[serde(deserialize_with = "de_def_length")]
    pub line_height: DefiniteLength,
    pub sizes: ThemeTextSizes,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ThemeTextSizes {
    #[serde(deserialize_with = "de_abs_length")]
    pub heading_xl: AbsoluteLength,
    #[serde(deserialize_with = "de_abs_length")]
    pub heading_lg: AbsoluteLength,
    #[serde(deserialize_with = "de_abs_length")]
    pub heading_md: AbsoluteLength,
    #[serde(deserialize_with = "de_abs_length")]
    pub heading_sm: AbsoluteLength,
    #[serde(deserialize_with = "de_abs_length")]
    pub body: AbsoluteLength,
    #[serde(deserialize_with = "de_abs_length")]
    pub caption: AbsoluteLength,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ThemeCornerRadii {
    #[serde(deserialize_with = "de_pixels")]
    pub xl: Pixels,
    #[serde(deserialize_with = "de_pixels")]
    pub lg: Pixels,
    #[serde(deserialize_with = "de_pixels")]
    pub md: Pixels,
    #[serde(deserialize_with = "de_pixels")]
    pub sm: Pixels,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ThemeSize {
    #[serde(deserialize_with = "de_pixels")]
    pub xl: Pixels,
    #[serde(deserialize_with = "de_pixels")]
    pub lg: Pixels,
    #[serde(deserialize_with = "de_pixels")]
    pub md: Pixels,
    #[serde(deserialize_with = "de_pixels")]
    pub sm: Pixels,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ThemePadding {
    #[serde(deserialize_with = "de_pixels")]
    pub xl: Pixels,
    #[serde(deserialize_with = "de_pixels")]
    pub lg: Pixels,
    #[serde(deserialize_with = "de_pixels")]
    pub md: Pixels,
    #[serde(deserialize_with = "de_pixels")]
    pub sm: Pixels,
}

/// Exactly one variant per resolved theme.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ThemeVariants {
    pub dark: ThemeVariant,
    pub light: ThemeVariant,
}

impl ThemeVariants {
    /// The variant for the currently applied resolved theme.
    pub fn active(&self, cx: &App) -> &ThemeVariant {
        match cx.resolved_theme() {
            ResolvedTheme::Dark => &self.dark,
            ResolvedTheme::Light => &self.light,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ThemeVariant {
    pub colors: ThemeColors,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ThemeColors {
    pub background: ThemeBackgroundColors,
    pub accent: ThemeAccentColors,
    pub text: ThemeTextColors,
}

/// Surface colors ordered by elevation; each layer borders with the next.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ThemeBackgroundColors {
    pub primary: Rgba,
    pub secondary: Rgba,
    pub tertiary: Rgba,
    pub quaternary: Rgba,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ThemeAccentColors {
    pub primary: Rgba,
    pub secondary: Rgba,
    pub destructive: Rgba,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ThemeTextColors {
    pub primary: Rgba,
    pub secondary: Rgba,
    /// Legible on top of accent fills in either variant.
    pub on_accent: Rgba,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_theme_parses() {
        let theme = Theme::DEFAULT;
        assert!(!theme.name.is_empty(), "Theme should have a name");
        assert!(
            !theme.layout.text.default_font.family.is_empty(),
            "Theme should name at least one font family"
        );
    }

    #[test]
    fn test_default_theme_sizes_are_ordered() {
        let theme = Theme::DEFAULT;
        let layout = &theme.layout;

        assert!(layout.size.sm <= layout.size.md, "Sm should be <= Md");
        assert!(layout.size.md <= layout.size.lg, "Md should be <= Lg");
        assert!(layout.size.lg <= layout.size.xl, "Lg should be <= Xl");

        assert!(layout.padding.sm <= layout.padding.md, "Sm should be <= Md");
        assert!(layout.padding.md <= layout.padding.lg, "Md should be <= Lg");
        assert!(layout.padding.lg <= layout.padding.xl, "Lg should be <= Xl");
    }

    #[test]
    fn test_default_theme_text_is_visible_in_both_variants() {
        let theme = Theme::DEFAULT;
        let variants = &theme.variants;

        for variant in [&variants.dark, &variants.light] {
            assert!(
                variant.colors.text.primary.a > 0.0,
                "Primary text color should be visible"
            );
            assert!(
                variant.colors.text.secondary.a > 0.0,
                "Secondary text color should be visible"
            );
            assert!(
                variant.colors.accent.destructive.a > 0.0,
                "Destructive accent color should be visible"
            );
        }
    }
}
