// Library surface for headless/integration tests and reuse.
// Keep this lean to avoid coupling to bin-only types in main.rs.
pub mod app_dirs;
pub mod backdrop;
pub mod config;
pub mod games;
pub mod quiz;
pub mod runtime;
pub mod score_log;
pub mod session;

/// Event-loop tick interval; quiz delays are counted in these ticks.
pub const TICK_RATE_MS: u64 = 100;
