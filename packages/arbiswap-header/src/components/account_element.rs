use crate::components::{loader::Loader, web3_status::Web3Status};
use arbiswap_header_types::{AccountPanel, BalanceDisplay, Theme};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct AccountElementProps {
    pub panel: Option<AccountPanel>,
    pub show_balance_text: bool,
    pub theme: Theme,
}

fn background(active: bool, theme: Theme) -> &'static str {
    match (active, theme) {
        (false, Theme::Light) => "#ffffff",
        (true, Theme::Light) => "#edeef2",
        (false, Theme::Dark) => "#212429",
        (true, Theme::Dark) => "#40444f",
    }
}

/// Balance and address of the connected account.
#[function_component(AccountElement)]
pub(crate) fn account_element(props: &AccountElementProps) -> Html {
    let style = format!(
        "display: flex; flex-direction: row; align-items: center; white-space: nowrap; border-radius: 12px; pointer-events: auto; background-color: {};",
        background(props.panel.is_some(), props.theme)
    );

    html! {
      <div class="account-element" style={style}>
        if let Some(panel) = props.panel.clone().filter(|_| props.show_balance_text) {
          <span class="balance-text" style="flex-shrink: 0; padding: 0 0.5rem 0 0.75rem; font-weight: 500;">
            {match panel.balance {
              BalanceDisplay::Loading => html! { <Loader /> },
              BalanceDisplay::Amount(amount) => html! { {amount} },
            }}
          </span>
        }
        <Web3Status account={props.panel.as_ref().map(|panel| panel.account)} />
      </div>
    }
}
