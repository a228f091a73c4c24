mod avatar;
pub use avatar::*;

mod badge;
pub use badge::*;

mod button;
pub use button::*;

mod card;
pub use card::*;

mod icon;
pub use icon::*;

mod progress;
pub use progress::*;

mod separator;
pub use separator::*;

mod theme_toggle;
pub use theme_toggle::*;
