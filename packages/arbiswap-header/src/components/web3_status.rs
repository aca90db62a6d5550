use arbiswap_header_types::{short_address, Account};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct Web3StatusProps {
    pub account: Option<Account>,
}

#[function_component(Web3Status)]
pub(crate) fn web3_status(props: &Web3StatusProps) -> Html {
    match props.account {
        Some(account) => html! {
          <span class="web3-status" title={format!("{:#x}", account)} style="padding: 8px 12px; font-family: monospace;">
            {short_address(&account)}
          </span>
        },
        None => html! {
          <span class="web3-status" style="padding: 8px 12px;">{"Not connected"}</span>
        },
    }
}
