#![allow(missing_docs)] // Derive macros generate undocumented methods.

use enum_assoc::Assoc;
use gpui::SharedString;

cfg_if::cfg_if!(
    if #[cfg(feature = "assets")] {
        use std::borrow::Cow;

        use gpui::Result;
        use rust_embed::RustEmbed;

        use crate::assets::assets::AssetProvider;

        /// Embedded assets bundled with the lumen crate.
        #[derive(RustEmbed)]
        #[folder = "assets/"]
        #[include = "icons/**/*.svg"]
        #[exclude = "*.DS_Store"]
        pub struct LumenAssets;

        impl AssetProvider for LumenAssets {
            fn get(&self, path: &str) -> Option<Cow<'static, [u8]>> {
                <Self as RustEmbed>::get(path).map(|f| f.data)
            }

            fn list(&self, path: &str) -> Result<Vec<SharedString>> {
                Ok(LumenAssets::iter()
                    .filter_map(|p| p.starts_with(path).then(|| p.into()))
                    .collect())
            }
        }
    }
);

/// Built-in icon identifiers that map to bundled SVG assets.
#[derive(Assoc)]
#[func(pub fn path(&self) -> SharedString)]
pub enum LumenIconKind {
    /// Sun, shown by the theme toggle when offering light mode.
    #[assoc(path = "icons/sun.svg".into())]
    Sun,

    /// Moon, shown by the theme toggle when offering dark mode.
    #[assoc(path = "icons/moon.svg".into())]
    Moon,
}

impl From<LumenIconKind> for SharedString {
    fn from(icon: LumenIconKind) -> Self {
        icon.path()
    }
}
