//! Rendering: pure row windowing plus the crossterm terminal driver.

pub mod driver;
pub mod window;

pub use driver::Driver;
pub use window::visible_lines;
