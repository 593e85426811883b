pub mod error;
pub mod fetch;
pub mod flatten;
pub mod historic;
pub mod window;
