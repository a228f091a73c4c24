use std::sync::Arc;

use gpui::{App, Global, WindowAppearance};
use serde::{Deserialize, Serialize};

use crate::theme::PreferenceStore;

/// Storage key used when none is configured.
pub const DEFAULT_STORAGE_KEY: &str = "lumen-theme";

/// The user's stated theme choice.
///
/// `System` defers to the host's color-scheme signal; the other two are
/// explicit. This is what the setter accepts and what the store serializes,
/// not what ends up drawn — see [`ResolvedTheme`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    #[default]
    Dark,
    Light,
    System,
}

impl ThemePreference {
    /// Resolves this preference against the host signal.
    ///
    /// Explicit choices pass through untouched; `System` maps the signal.
    pub fn resolve(self, system_prefers_dark: bool) -> ResolvedTheme {
        match self {
            ThemePreference::Dark => ResolvedTheme::Dark,
            ThemePreference::Light => ResolvedTheme::Light,
            ThemePreference::System => {
                if system_prefers_dark {
                    ResolvedTheme::Dark
                } else {
                    ResolvedTheme::Light
                }
            }
        }
    }
}

impl From<ResolvedTheme> for ThemePreference {
    fn from(resolved: ResolvedTheme) -> Self {
        match resolved {
            ResolvedTheme::Dark => ThemePreference::Dark,
            ResolvedTheme::Light => ThemePreference::Light,
        }
    }
}

/// The concrete theme actually drawn. Derived from [`ThemePreference`],
/// never stored on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolvedTheme {
    Dark,
    Light,
}

impl ResolvedTheme {
    pub fn is_dark(self) -> bool {
        matches!(self, ResolvedTheme::Dark)
    }

    /// The other concrete theme.
    pub fn toggled(self) -> Self {
        match self {
            ResolvedTheme::Dark => ResolvedTheme::Light,
            ResolvedTheme::Light => ResolvedTheme::Dark,
        }
    }
}

/// Configuration for [`init`]: where the preference persists, under which
/// key, and what to fall back to when nothing usable is stored.
pub struct ThemeSettings {
    pub(crate) store: Arc<dyn PreferenceStore>,
    pub(crate) storage_key: String,
    pub(crate) default_preference: ThemePreference,
}

impl ThemeSettings {
    pub fn new(store: Arc<dyn PreferenceStore>) -> Self {
        Self {
            store,
            storage_key: DEFAULT_STORAGE_KEY.into(),
            default_preference: ThemePreference::default(),
        }
    }

    pub fn storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }

    pub fn default_preference(mut self, preference: ThemePreference) -> Self {
        self.default_preference = preference;
        self
    }
}

/// The process-wide preference slot. One writer path
/// ([`ThemeExt::set_theme_preference`]), any number of readers.
pub(crate) struct ThemeState {
    pub(crate) preference: ThemePreference,
    pub(crate) settings: ThemeSettings,
}

impl Global for ThemeState {}

/// The resolved theme currently applied to every window.
pub(crate) struct AppliedTheme(pub(crate) ResolvedTheme);

impl Global for AppliedTheme {}

/// Seeds the preference slot from the store (missing or unreadable values
/// fall back to the configured default) and runs the first
/// resolution-and-apply pass.
///
/// Must run before anything reads the preference or renders themed
/// components; the accessors on [`ThemeExt`] panic otherwise.
pub fn init(settings: ThemeSettings, cx: &mut App) {
    let preference = match settings.store.get(&settings.storage_key) {
        Ok(Some(preference)) => preference,
        Ok(None) => settings.default_preference,
        Err(err) => {
            log::warn!(
                "could not load stored theme preference, using {:?}: {err}",
                settings.default_preference
            );
            settings.default_preference
        }
    };

    cx.set_global(ThemeState {
        preference,
        settings,
    });

    resolve_and_apply(cx);
}

/// Re-resolves the current preference against the live host signal, swaps
/// the applied theme if it changed, and persists.
///
/// The store receives the *resolved* concrete theme rather than the literal
/// `system` token: an explicit choice replays as-is on the next load, while
/// `system` re-derives each session it is selected in.
pub(crate) fn resolve_and_apply(cx: &mut App) {
    let state = cx.global::<ThemeState>();
    let resolved = state.preference.resolve(system_prefers_dark(cx));
    let key = state.settings.storage_key.clone();
    let store = state.settings.store.clone();

    apply(resolved, cx);

    if let Err(err) = store.set(&key, resolved.into()) {
        log::warn!("could not persist theme preference: {err}");
    }
}

/// Applies `resolved` to every window. Idempotent: re-applying the current
/// value is a no-op, so observers never see an intermediate state.
fn apply(resolved: ResolvedTheme, cx: &mut App) {
    let unchanged = cx
        .try_global::<AppliedTheme>()
        .is_some_and(|applied| applied.0 == resolved);
    if unchanged {
        return;
    }

    cx.set_global(AppliedTheme(resolved));
    cx.refresh_windows();
}

/// Samples the host's live color-scheme signal.
pub fn system_prefers_dark(cx: &App) -> bool {
    #[cfg(any(test, feature = "test-support"))]
    if let Some(signal) = cx.try_global::<SystemPrefersDark>() {
        return signal.0;
    }

    matches!(
        cx.window_appearance(),
        WindowAppearance::Dark | WindowAppearance::VibrantDark
    )
}

/// Overrides the host signal for deterministic tests.
#[cfg(any(test, feature = "test-support"))]
pub struct SystemPrefersDark(pub bool);

#[cfg(any(test, feature = "test-support"))]
impl Global for SystemPrefersDark {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_preferences_resolve_to_themselves() {
        for signal in [true, false] {
            assert_eq!(
                ThemePreference::Dark.resolve(signal),
                ResolvedTheme::Dark,
                "explicit dark should ignore the system signal"
            );
            assert_eq!(
                ThemePreference::Light.resolve(signal),
                ResolvedTheme::Light,
                "explicit light should ignore the system signal"
            );
        }
    }

    #[test]
    fn test_system_preference_follows_signal() {
        assert_eq!(ThemePreference::System.resolve(true), ResolvedTheme::Dark);
        assert_eq!(ThemePreference::System.resolve(false), ResolvedTheme::Light);
    }

    #[test]
    fn test_default_preference_is_dark() {
        assert_eq!(ThemePreference::default(), ThemePreference::Dark);
    }

    #[test]
    fn test_preference_serializes_as_lowercase_token() {
        assert_eq!(
            serde_json::to_string(&ThemePreference::Dark).unwrap(),
            "\"dark\""
        );
        assert_eq!(
            serde_json::to_string(&ThemePreference::Light).unwrap(),
            "\"light\""
        );
        assert_eq!(
            serde_json::to_string(&ThemePreference::System).unwrap(),
            "\"system\""
        );
    }

    #[test]
    fn test_preference_deserializes_from_token() {
        assert_eq!(
            serde_json::from_str::<ThemePreference>("\"system\"").unwrap(),
            ThemePreference::System
        );
    }

    #[test]
    fn test_resolved_theme_toggles() {
        assert_eq!(ResolvedTheme::Dark.toggled(), ResolvedTheme::Light);
        assert_eq!(ResolvedTheme::Light.toggled(), ResolvedTheme::Dark);
        assert!(ResolvedTheme::Dark.is_dark());
        assert!(!ResolvedTheme::Light.is_dark());
    }
}
