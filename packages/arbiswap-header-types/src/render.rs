//! Chooses what the header shows for a given wallet state.
//!
//! [`select`] is recomputed on every render; it holds no state, so the same
//! inputs always produce the same [`HeaderView`].

use crate::{
    balance::{format_balance, Balances},
    chain::{network_label, ChainId},
    config::HeaderConfig,
    status::ConnectionStatus,
    Account,
};
use ethers::utils::to_checksum;

/// Everything the header depends on, as supplied by the surrounding app.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HeaderInputs {
    pub account: Option<Account>,
    pub chain_id: Option<u64>,
    pub balances: Balances,
    pub dark_mode: bool,
    pub is_mobile: bool,
    pub is_extra_small: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Normal,
    Warning,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimaryActionKind {
    /// Entry point into the wallet-connection flow.
    GetStarted,
    /// The wallet is on another network.
    SwitchNetwork,
}

/// The call-to-action; activating it opens the connection modal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrimaryAction {
    pub kind: PrimaryActionKind,
    pub text: String,
    pub tone: Tone,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BalanceDisplay {
    Loading,
    Amount(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountPanel {
    pub account: Account,
    pub balance: BalanceDisplay,
}

impl AccountPanel {
    /// `0xAbCd…1234`, checksummed.
    pub fn short_address(&self) -> String {
        short_address(&self.account)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderView {
    pub status: ConnectionStatus,
    pub theme: Theme,
    pub primary_action: PrimaryAction,
    pub show_request_tokens: bool,
    pub network_badge: Option<&'static str>,
    pub account_panel: Option<AccountPanel>,
    /// Title text next to the logo.
    pub show_title: bool,
    /// Balance inside the account panel; the address chip always shows.
    pub show_balance_text: bool,
}

pub fn select(inputs: &HeaderInputs, config: &HeaderConfig) -> HeaderView {
    let status = ConnectionStatus::resolve(inputs.account.as_ref(), inputs.chain_id);

    let primary_action = match status {
        ConnectionStatus::ConnectedWrongNetwork => PrimaryAction {
            kind: PrimaryActionKind::SwitchNetwork,
            text: format!("Connect to {}", ChainId::TARGET.name()),
            tone: Tone::Warning,
        },
        ConnectionStatus::Disconnected | ConnectionStatus::ConnectedTargetNetwork => PrimaryAction {
            kind: PrimaryActionKind::GetStarted,
            text: "Get Started".to_owned(),
            tone: Tone::Normal,
        },
    };

    let network_badge = match inputs.is_mobile {
        true => None,
        false => inputs.chain_id.and_then(network_label),
    };

    let account_panel = inputs.account.map(|account| AccountPanel {
        account,
        balance: match inputs.balances.get(&account) {
            Some(balance) => BalanceDisplay::Amount(format_balance(
                balance,
                config.significant_digits,
                &config.currency_symbol,
            )),
            None => BalanceDisplay::Loading,
        },
    });

    HeaderView {
        status,
        theme: if inputs.dark_mode { Theme::Dark } else { Theme::Light },
        primary_action,
        show_request_tokens: !status.is_wrong_network(),
        network_badge,
        account_panel,
        show_title: !inputs.is_extra_small,
        show_balance_text: !inputs.is_extra_small,
    }
}

pub fn short_address(account: &Account) -> String {
    let checksummed = to_checksum(account, None);
    format!("{}…{}", &checksummed[..6], &checksummed[checksummed.len() - 4..])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::EthBalance;
    use ethers::types::Address;

    fn account(byte: u8) -> Address {
        Address::repeat_byte(byte)
    }

    fn with_balance(account: Address, ether: &str) -> Balances {
        Balances::from([(account, EthBalance::parse_ether(ether).unwrap())])
    }

    #[test]
    fn connected_on_target_shows_balance_next_to_call_to_action() {
        let abc = account(0xab);
        let inputs = HeaderInputs {
            account: Some(abc),
            chain_id: Some(ChainId::TARGET.id()),
            balances: with_balance(abc, "1.23456"),
            ..Default::default()
        };
        let view = select(&inputs, &HeaderConfig::default());

        assert_eq!(view.status, ConnectionStatus::ConnectedTargetNetwork);
        assert_eq!(
            view.primary_action,
            PrimaryAction {
                kind: PrimaryActionKind::GetStarted,
                text: "Get Started".to_owned(),
                tone: Tone::Normal,
            }
        );
        assert_eq!(view.network_badge, None);
        assert!(view.show_request_tokens);
        assert_eq!(
            view.account_panel,
            Some(AccountPanel {
                account: abc,
                balance: BalanceDisplay::Amount("1.235 ETH".to_owned())
            })
        );
    }

    #[test]
    fn nothing_connected_invites_to_get_started() {
        let view = select(&HeaderInputs::default(), &HeaderConfig::default());

        assert_eq!(view.status, ConnectionStatus::Disconnected);
        assert_eq!(
            view.primary_action,
            PrimaryAction {
                kind: PrimaryActionKind::GetStarted,
                text: "Get Started".to_owned(),
                tone: Tone::Normal,
            }
        );
        assert!(view.show_request_tokens);
        assert_eq!(view.network_badge, None);
        assert_eq!(view.account_panel, None);
    }

    #[test]
    fn wrong_network_warns_and_hides_promotion() {
        let def = account(0xde);
        let inputs = HeaderInputs {
            account: Some(def),
            chain_id: Some(ChainId::Rinkeby.id()),
            ..Default::default()
        };
        let view = select(&inputs, &HeaderConfig::default());

        assert_eq!(view.status, ConnectionStatus::ConnectedWrongNetwork);
        assert_eq!(view.network_badge, Some("Rinkeby"));
        assert_eq!(
            view.primary_action,
            PrimaryAction {
                kind: PrimaryActionKind::SwitchNetwork,
                text: "Connect to Arbitrum".to_owned(),
                tone: Tone::Warning,
            }
        );
        assert!(!view.show_request_tokens);
        assert_eq!(view.account_panel.map(|p| p.balance), Some(BalanceDisplay::Loading));
    }

    #[test]
    fn badge_is_hidden_on_mobile() {
        let inputs = HeaderInputs {
            account: Some(account(1)),
            chain_id: Some(ChainId::Kovan.id()),
            is_mobile: true,
            ..Default::default()
        };
        let view = select(&inputs, &HeaderConfig::default());
        assert_eq!(view.network_badge, None);
        assert_eq!(view.status, ConnectionStatus::ConnectedWrongNetwork);
    }

    #[test]
    fn badge_does_not_need_an_account() {
        let inputs = HeaderInputs { chain_id: Some(ChainId::Goerli.id()), ..Default::default() };
        let view = select(&inputs, &HeaderConfig::default());
        assert_eq!(view.network_badge, Some("Görli"));
        assert_eq!(view.primary_action.kind, PrimaryActionKind::GetStarted);
        assert!(view.show_request_tokens);
    }

    #[test]
    fn unknown_chain_warns_without_badge() {
        let inputs = HeaderInputs {
            account: Some(account(2)),
            chain_id: Some(421_611),
            ..Default::default()
        };
        let view = select(&inputs, &HeaderConfig::default());
        assert_eq!(view.network_badge, None);
        assert_eq!(view.primary_action.tone, Tone::Warning);
    }

    #[test]
    fn balance_of_another_account_is_still_loading() {
        let inputs = HeaderInputs {
            account: Some(account(3)),
            chain_id: Some(ChainId::TARGET.id()),
            balances: with_balance(account(4), "5"),
            ..Default::default()
        };
        let view = select(&inputs, &HeaderConfig::default());
        assert_eq!(view.account_panel.map(|p| p.balance), Some(BalanceDisplay::Loading));
    }

    #[test]
    fn balance_follows_config_formatting() {
        let acc = account(5);
        let config = HeaderConfig {
            significant_digits: 2,
            currency_symbol: "AETH".to_owned(),
            ..Default::default()
        };
        let inputs = HeaderInputs {
            account: Some(acc),
            chain_id: Some(ChainId::TARGET.id()),
            balances: with_balance(acc, "1.23456"),
            ..Default::default()
        };
        let view = select(&inputs, &config);
        assert_eq!(
            view.account_panel.map(|p| p.balance),
            Some(BalanceDisplay::Amount("1.2 AETH".to_owned()))
        );
    }

    #[test]
    fn oversized_digit_count_does_not_overflow() {
        let acc = account(7);
        let config = HeaderConfig { significant_digits: usize::MAX, ..Default::default() };
        let inputs = HeaderInputs {
            account: Some(acc),
            chain_id: Some(ChainId::TARGET.id()),
            balances: with_balance(acc, "1.5"),
            ..Default::default()
        };
        assert_eq!(
            select(&inputs, &config).account_panel.map(|p| p.balance),
            Some(BalanceDisplay::Amount("1.5 ETH".to_owned()))
        );
    }

    #[test]
    fn extra_small_screens_hide_title_and_balance_text() {
        let acc = account(8);
        let inputs = HeaderInputs {
            account: Some(acc),
            chain_id: Some(ChainId::TARGET.id()),
            balances: with_balance(acc, "2"),
            is_mobile: true,
            is_extra_small: true,
            ..Default::default()
        };
        let view = select(&inputs, &HeaderConfig::default());
        assert!(!view.show_title);
        assert!(!view.show_balance_text);
        assert!(view.account_panel.is_some());

        let inputs = HeaderInputs { is_mobile: true, ..Default::default() };
        let view = select(&inputs, &HeaderConfig::default());
        assert!(view.show_title);
        assert!(view.show_balance_text);
    }

    #[test]
    fn theme_follows_dark_mode() {
        let config = HeaderConfig::default();
        let dark = HeaderInputs { dark_mode: true, ..Default::default() };
        assert_eq!(select(&dark, &config).theme, Theme::Dark);
        assert_eq!(select(&HeaderInputs::default(), &config).theme, Theme::Light);
    }

    #[test]
    fn selection_is_idempotent() {
        let acc = account(6);
        let config = HeaderConfig::default();
        let cases = [
            HeaderInputs::default(),
            HeaderInputs { account: Some(acc), chain_id: Some(4), ..Default::default() },
            HeaderInputs {
                account: Some(acc),
                chain_id: Some(ChainId::TARGET.id()),
                balances: with_balance(acc, "0.1"),
                dark_mode: true,
                is_mobile: true,
                is_extra_small: true,
            },
        ];
        for inputs in cases {
            assert_eq!(select(&inputs, &config), select(&inputs, &config));
        }
    }

    #[test]
    fn shortens_checksummed_addresses() {
        let address: Address = "0x5aaeb6053f3e94c9b9a09f33669435e7ef1beaed".parse().unwrap();
        assert_eq!(short_address(&address), "0x5aAe…eAed");
    }
}
