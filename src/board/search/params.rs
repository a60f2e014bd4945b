use super::constants::DEFAULT_DEPTH;

/// How long cached values live.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum CacheScope {
    /// One cache for the whole game
    #[default]
    Run,
    /// Cache cleared before every root search
    Move,
}

#[derive(Clone, Debug)]
pub struct SearchParams {
    /// Plies searched from the root, including the root move
    pub depth: i32,
    pub cache_scope: CacheScope,
}

impl Default for SearchParams {
    fn default() -> Self {
        SearchParams {
            depth: DEFAULT_DEPTH,
            cache_scope: CacheScope::Run,
        }
    }
}
