use std::sync::OnceLock;

fn parse_env_u8(name: &str, default: u8) -> u8 {
    std::env::var(name)
        .ok()
        .and_then(|v| v.trim().parse::<u8>().ok())
        .unwrap_or(default)
}

fn parse_env_bool_u8(name: &str, default: bool) -> bool {
    std::env::var(name)
        .ok()
        .and_then(|v| v.trim().parse::<u8>().ok())
        .map(|v| v != 0)
        .unwrap_or(default)
}

static PARALLEL_MASK_SEARCH: OnceLock<bool> = OnceLock::new();

/// Score the eight mask candidates on the rayon pool (`QR_PARALLEL_MASK_SEARCH`, default on)
pub(crate) fn parallel_mask_search() -> bool {
    *PARALLEL_MASK_SEARCH.get_or_init(|| parse_env_bool_u8("QR_PARALLEL_MASK_SEARCH", true))
}

static PARALLEL_MIN_VERSION: OnceLock<u8> = OnceLock::new();

/// Smallest version scored in parallel; smaller symbols stay on the calling thread
pub(crate) fn parallel_min_version() -> u8 {
    *PARALLEL_MIN_VERSION
        .get_or_init(|| parse_env_u8("QR_PARALLEL_MIN_VERSION", 5).clamp(1, 40))
}
