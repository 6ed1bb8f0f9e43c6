//! Infrastructure Adapters
//!
//! 六边形架构的适配器实现

pub mod llm;
pub mod notebooks;
pub mod tts;
pub mod video;

pub use llm::*;
pub use notebooks::*;
pub use tts::*;
pub use video::*;
