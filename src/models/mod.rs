pub mod error;
pub mod palette;
pub mod theme;
