pub(crate) mod use_balances;
pub(crate) mod use_dark_mode;
pub(crate) mod use_viewport;

pub(crate) use use_balances::use_eth_balances;
pub(crate) use use_dark_mode::use_dark_mode;
pub(crate) use use_viewport::{is_narrower, use_viewport_width};
