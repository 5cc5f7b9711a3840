pub mod backdrop;
pub mod typewriter;
pub mod view;
