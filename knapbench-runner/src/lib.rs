mod config;
pub use config::*;
mod runner;
pub use runner::*;
mod schedule;
pub use schedule::*;
mod sink;
pub use sink::*;
mod summary;
pub use summary::*;
