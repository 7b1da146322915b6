mod file;
pub use file::*;

pub mod encoder;
