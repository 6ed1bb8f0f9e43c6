//! Video Adapter - D-ID 数字人视频客户端实现

mod did_client;

pub use did_client::*;
