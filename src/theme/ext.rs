use gpui::App;

use crate::theme::{
    ResolvedTheme, Theme, ThemePreference,
    preference::{AppliedTheme, ThemeState, resolve_and_apply},
};

/// Extension trait for the global theme and the user's theme preference.
///
/// The preference accessors require [`crate::theme::init`] to have run;
/// calling them earlier is an integration bug and panics immediately.
pub trait ThemeExt {
    /// Changes the theme.
    fn set_theme<T: AsRef<Theme>>(&mut self, theme: T);

    /// Gets an immutable reference to the theme.
    fn get_theme(&self) -> &Theme;

    /// The user's stated preference. No side effects.
    fn theme_preference(&self) -> ThemePreference;

    /// Replaces the preference, re-resolves it against the host signal,
    /// applies the result to every window, and persists.
    fn set_theme_preference(&mut self, next: ThemePreference);

    /// The concrete theme currently drawn.
    fn resolved_theme(&self) -> ResolvedTheme;
}

impl ThemeExt for App {
    fn set_theme<T: AsRef<Theme>>(&mut self, theme: T) {
        self.set_global::<Theme>(theme.as_ref().clone())
    }

    fn get_theme(&self) -> &Theme {
        self.global()
    }

    fn theme_preference(&self) -> ThemePreference {
        self.try_global::<ThemeState>()
            .expect("the theme preference is only available after `theme::init`")
            .preference
    }

    fn set_theme_preference(&mut self, next: ThemePreference) {
        if self.try_global::<ThemeState>().is_none() {
            panic!("the theme preference can only be set after `theme::init`");
        }

        self.global_mut::<ThemeState>().preference = next;
        resolve_and_apply(self);
    }

    fn resolved_theme(&self) -> ResolvedTheme {
        self.try_global::<AppliedTheme>()
            .expect("the resolved theme is only available after `theme::init`")
            .0
    }
}

#[cfg(all(test, feature = "test-support"))]
mod tests {
    use std::sync::Arc;

    use gpui::TestAppContext;

    use super::*;
    use crate::theme::{
        MemoryPreferenceStore, PreferenceStore, SystemPrefersDark, ThemeSettings,
    };

    fn init_theme(
        cx: &mut gpui::App,
        store: Arc<MemoryPreferenceStore>,
        default: ThemePreference,
    ) {
        cx.set_theme(Theme::DEFAULT);
        cx.set_global(SystemPrefersDark(true));
        crate::theme::init(ThemeSettings::new(store).default_preference(default), cx);
    }

    #[gpui::test]
    fn test_set_and_get_theme(cx: &mut TestAppContext) {
        cx.update(|cx| {
            cx.set_theme(Theme::DEFAULT);
            let theme = cx.get_theme();
            assert!(!theme.name.is_empty(), "Theme should have a name");
        });
    }

    #[gpui::test]
    fn test_empty_store_falls_back_to_default(cx: &mut TestAppContext) {
        cx.update(|cx| {
            let store = Arc::new(MemoryPreferenceStore::new());
            init_theme(cx, store, ThemePreference::Dark);

            assert_eq!(cx.theme_preference(), ThemePreference::Dark);
            assert_eq!(cx.resolved_theme(), ResolvedTheme::Dark);
        });
    }

    #[gpui::test]
    fn test_corrupt_store_falls_back_to_default(cx: &mut TestAppContext) {
        cx.update(|cx| {
            let store = Arc::new(MemoryPreferenceStore::new());
            store.insert_raw(crate::theme::DEFAULT_STORAGE_KEY, "{nonsense");
            init_theme(cx, store, ThemePreference::Dark);

            assert_eq!(cx.theme_preference(), ThemePreference::Dark);
        });
    }

    #[gpui::test]
    fn test_system_preference_resolves_against_signal(cx: &mut TestAppContext) {
        cx.update(|cx| {
            let store = Arc::new(MemoryPreferenceStore::new());
            init_theme(cx, store.clone(), ThemePreference::System);

            // Signal says dark, so the resolved (not the logical) value is
            // applied and persisted.
            assert_eq!(cx.theme_preference(), ThemePreference::System);
            assert_eq!(cx.resolved_theme(), ResolvedTheme::Dark);
            assert_eq!(
                store.get(crate::theme::DEFAULT_STORAGE_KEY).unwrap(),
                Some(ThemePreference::Dark)
            );
        });
    }

    #[gpui::test]
    fn test_system_preference_resolves_light_signal(cx: &mut TestAppContext) {
        cx.update(|cx| {
            let store = Arc::new(MemoryPreferenceStore::new());
            cx.set_theme(Theme::DEFAULT);
            cx.set_global(SystemPrefersDark(false));
            crate::theme::init(
                ThemeSettings::new(store).default_preference(ThemePreference::System),
                cx,
            );

            assert_eq!(cx.resolved_theme(), ResolvedTheme::Light);
        });
    }

    #[gpui::test]
    fn test_set_preference_applies_and_persists(cx: &mut TestAppContext) {
        cx.update(|cx| {
            let store = Arc::new(MemoryPreferenceStore::new());
            init_theme(cx, store.clone(), ThemePreference::Dark);
            assert_eq!(cx.resolved_theme(), ResolvedTheme::Dark);

            cx.set_theme_preference(ThemePreference::Light);

            assert_eq!(cx.theme_preference(), ThemePreference::Light);
            assert_eq!(cx.resolved_theme(), ResolvedTheme::Light);
            assert_eq!(
                store.get(crate::theme::DEFAULT_STORAGE_KEY).unwrap(),
                Some(ThemePreference::Light)
            );
        });
    }

    #[gpui::test]
    fn test_explicit_preference_round_trips_across_loads(cx: &mut TestAppContext) {
        cx.update(|cx| {
            let store = Arc::new(MemoryPreferenceStore::new());
            init_theme(cx, store.clone(), ThemePreference::Dark);
            cx.set_theme_preference(ThemePreference::Light);

            // Fresh load against the same store.
            init_theme(cx, store, ThemePreference::Dark);
            assert_eq!(cx.theme_preference(), ThemePreference::Light);
            assert_eq!(cx.resolved_theme(), ResolvedTheme::Light);
        });
    }

    #[gpui::test]
    fn test_reapplying_same_preference_is_idempotent(cx: &mut TestAppContext) {
        cx.update(|cx| {
            let store = Arc::new(MemoryPreferenceStore::new());
            init_theme(cx, store.clone(), ThemePreference::Dark);

            cx.set_theme_preference(ThemePreference::Dark);
            cx.set_theme_preference(ThemePreference::Dark);

            assert_eq!(cx.resolved_theme(), ResolvedTheme::Dark);
            assert_eq!(
                store.get(crate::theme::DEFAULT_STORAGE_KEY).unwrap(),
                Some(ThemePreference::Dark)
            );
        });
    }

    #[gpui::test]
    fn test_preference_accessors_panic_before_init(cx: &mut TestAppContext) {
        cx.update(|cx| {
            let read = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
                cx.theme_preference()
            }));
            assert!(
                read.is_err(),
                "reading the preference before init should panic"
            );

            let resolved = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
                cx.resolved_theme()
            }));
            assert!(
                resolved.is_err(),
                "reading the resolved theme before init should panic"
            );
        });
    }
}
