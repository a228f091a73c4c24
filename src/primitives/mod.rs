mod focus_ring;
pub use focus_ring::*;

mod min_w0_wrapper;
pub use min_w0_wrapper::*;
