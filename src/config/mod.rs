mod default_layout;
mod layout_config;

pub use default_layout::default_layout;
pub use layout_config::{LayoutConfig, LayoutConfigError};
