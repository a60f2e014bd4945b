use super::super::Side;

/// Summary of one root search, reported once per ply.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchInfo {
    pub ply: u32,
    pub side: Side,
    pub depth: i32,
    pub value: Option<i32>,
    pub nodes: u64,
    pub cache_hits: u64,
    pub cutoffs: u64,
    pub cache_size: usize,
}

pub trait SearchLogger {
    fn info(&self, info: &SearchInfo);
}

/// Forwards search reports to the `log` facade at info level.
pub struct LogSearchLogger;

impl SearchLogger for LogSearchLogger {
    fn info(&self, info: &SearchInfo) {
        let value = info
            .value
            .map_or_else(|| "none".to_string(), |v| v.to_string());
        log::info!(
            "ply {} side {} depth {} value {} nodes {} cachehits {} cutoffs {} cachesize {}",
            info.ply,
            info.side,
            info.depth,
            value,
            info.nodes,
            info.cache_hits,
            info.cutoffs,
            info.cache_size
        );
    }
}
