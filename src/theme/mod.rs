//! Theme system: styling tokens with dark and light variants, plus the
//! persisted user preference that decides which variant is drawn.
//!
//! [`init`] seeds the preference from its store and applies the resolved
//! theme; [`ThemeExt`] exposes the read/write accessors to the UI tree.

mod schema;
pub use schema::*;

mod deserializers;

mod ext;
pub use ext::*;

mod kinds;
pub use kinds::*;

mod preference;
pub use preference::*;

mod store;
pub use store::*;
