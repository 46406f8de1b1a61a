//! Command implementations

mod annotate;
mod authorize;
mod classify;
mod config_cmd;
mod keywords;
mod serve;
mod summarize;

pub use annotate::annotate;
pub use authorize::authorize;
pub use classify::classify;
pub use config_cmd::config_cmd;
pub use keywords::keywords;
pub use serve::serve;
pub use summarize::summarize;
