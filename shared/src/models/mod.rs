//! Data models shared between server and client

pub mod advisor;
pub mod client;
pub mod quote;
pub mod tour;
pub mod video_call;
