/// Largest radicand the sqrt pattern will factorize (trial division up to 10^6).
pub const DEFAULT_MAX_RADICAND: u64 = 1_000_000_000_000;

/// Longest query, in characters, the engine will look at.
pub const DEFAULT_MAX_QUERY_CHARS: usize = 4096;

/// Input bounds for the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineOptions {
    pub max_radicand: u64,
    pub max_query_chars: usize,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            max_radicand: DEFAULT_MAX_RADICAND,
            max_query_chars: DEFAULT_MAX_QUERY_CHARS,
        }
    }
}
