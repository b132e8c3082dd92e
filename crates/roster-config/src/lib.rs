mod config;
mod paths;
mod reference;

pub use config::*;
pub use paths::*;
pub use reference::*;
