//! Server-rendered pages on www.bilibili.com

pub mod resolve_url;
pub mod state;

pub use resolve_url::resolve_real_url;
pub use state::{extract_initial_state, pick_initial_state};
