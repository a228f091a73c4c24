use gpui::{App, Window};

use crate::theme::{Theme, ThemeExt};

/// Installs the default theme unless the host already set one.
/// [`crate::theme::init`] still has to run to seed the preference slot.
pub fn init(cx: &mut App) {
    if cx.try_global::<Theme>().is_none() {
        cx.set_theme(Theme::DEFAULT);
    }
}

pub fn init_for_window(window: &mut Window, cx: &mut App) {
    window.set_rem_size(cx.get_theme().layout.text.base_size);
}
