pub mod display_mode;
pub use display_mode::DisplayMode;
