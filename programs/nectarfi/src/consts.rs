/// Minimum number of seconds between two effective yield checks.
pub const YIELD_CHECK_INTERVAL: i64 = 300;

/// Decimals of the NCT share mint, matching USDC.
pub const NCT_DECIMALS: u8 = 6;

/// Protocol name recorded before the first rebalance.
pub const NO_PROTOCOL: &str = "None";
