#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod balance;
pub mod chain;
pub mod config;
pub mod render;
pub mod status;

pub use balance::{format_balance, BalanceError, Balances, EthBalance};
pub use chain::{chain_id_to_hex, network_label, parse_chain_id, ChainId, ChainIdError};
pub use config::{ConfigError, HeaderConfig, MenuLink, VersionLink};
pub use render::{
    select, short_address, AccountPanel, BalanceDisplay, HeaderInputs, HeaderView, PrimaryAction,
    PrimaryActionKind, Theme, Tone,
};
pub use status::ConnectionStatus;

/// An externally owned account, as reported by the wallet.
pub type Account = ethers::types::Address;

/// Parses the account list of an `accountsChanged`/`eth_accounts` reply and
/// returns the active (first) account.
///
/// Entries that are not addresses are skipped.
pub fn active_account<S: AsRef<str>>(accounts: &[S]) -> Option<Account> {
    accounts.iter().find_map(|raw| match raw.as_ref().parse::<Account>() {
        Ok(account) => Some(account),
        Err(err) => {
            tracing::debug!(raw = raw.as_ref(), %err, "ignoring invalid account");
            None
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_valid_account_is_active() {
        let accounts = ["not an address", "0x5aaeb6053f3e94c9b9a09f33669435e7ef1beaed"];
        assert_eq!(
            active_account(&accounts),
            Some("0x5aaeb6053f3e94c9b9a09f33669435e7ef1beaed".parse().unwrap())
        );
    }

    #[test]
    fn no_accounts_means_no_wallet() {
        assert_eq!(active_account::<String>(&[]), None);
        assert_eq!(active_account(&["0x123"]), None);
    }
}
