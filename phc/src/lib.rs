use std::sync::LazyLock;
use std::time::Instant;

pub mod config;
pub mod io;
pub mod opt;

/// Start of the process, all log timestamps and solution run times are relative to it
pub static EPOCH: LazyLock<Instant> = LazyLock::new(Instant::now);
