use gpui::{ElementId, IntoElement, RenderOnce, px};

use crate::{
    assets::LumenIconKind,
    components::{Button, ButtonVariant},
    theme::ThemeExt,
};

/// Switches between the two explicit themes.
///
/// The label is a pure function of the *resolved* theme: while dark is
/// drawn it offers "Light Mode" behind a sun, and the other way around.
/// Clicking stores the opposite concrete preference.
#[derive(IntoElement)]
pub struct ThemeToggle {
    id: ElementId,
}

impl ThemeToggle {
    pub fn new(id: impl Into<ElementId>) -> Self {
        Self { id: id.into() }
    }
}

impl RenderOnce for ThemeToggle {
    fn render(self, _window: &mut gpui::Window, cx: &mut gpui::App) -> impl IntoElement {
        let resolved = cx.resolved_theme();

        let (icon, label) = if resolved.is_dark() {
            (LumenIconKind::Sun, "Light Mode")
        } else {
            (LumenIconKind::Moon, "Dark Mode")
        };

        Button::new(self.id)
            .variant(ButtonVariant::Ghost)
            .justify_start()
            .icon(icon.path())
            .icon_size(px(24.))
            .text(label)
            .on_click(move |_event, _window, cx| {
                cx.set_theme_preference(resolved.toggled().into());
            })
    }
}

#[cfg(all(test, feature = "test-support"))]
mod tests {
    use std::sync::Arc;

    use gpui::TestAppContext;

    use super::*;
    use crate::theme::{
        MemoryPreferenceStore, PreferenceStore, ResolvedTheme, SystemPrefersDark, Theme,
        ThemePreference, ThemeSettings,
    };

    #[gpui::test]
    fn test_toggle_stores_the_opposite_concrete_preference(cx: &mut TestAppContext) {
        cx.update(|cx| {
            let store = Arc::new(MemoryPreferenceStore::new());
            cx.set_theme(Theme::DEFAULT);
            cx.set_global(SystemPrefersDark(true));
            crate::theme::init(ThemeSettings::new(store.clone()), cx);
            assert_eq!(cx.resolved_theme(), ResolvedTheme::Dark);

            // What the toggle's click handler does.
            cx.set_theme_preference(cx.resolved_theme().toggled().into());

            assert_eq!(cx.theme_preference(), ThemePreference::Light);
            assert_eq!(cx.resolved_theme(), ResolvedTheme::Light);
            assert_eq!(
                store.get(crate::theme::DEFAULT_STORAGE_KEY).unwrap(),
                Some(ThemePreference::Light)
            );
        });
    }
}
