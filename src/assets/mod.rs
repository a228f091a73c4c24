pub(crate) mod assets;
pub use assets::*;

mod embedded;
pub use embedded::*;
