pub mod carousel;
pub mod config;
pub mod content;
pub mod net;
pub mod render;
