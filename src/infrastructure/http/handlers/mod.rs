//! HTTP Handlers
//!
//! 每个用户动作对应一个 handler，彼此之间不共享状态

mod notebook;
mod page;
mod ping;
mod prompt;

pub use notebook::*;
pub use page::*;
pub use ping::*;
pub use prompt::*;
