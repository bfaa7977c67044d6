pub const PROGRAM_NAME: &str = "mktree";

/// Env var controlling the stderr log level (error/warn/info/debug/trace).
pub const PROGRAM_LOG_LEVEL: &str = "MKTREE_LOG_LEVEL";
