pub mod cache;
pub mod discovery;
pub mod image;
pub mod matcher;
pub mod pantry;
pub mod random;
pub mod ranking;
pub mod source;
pub mod synthesizer;

pub use cache::TtlCache;
pub use discovery::*;
pub use ranking::Page;
pub use viralcarrot_shared::{Error, Result};
