pub(crate) mod decode;
pub mod error;
pub mod loader;
pub mod source;
