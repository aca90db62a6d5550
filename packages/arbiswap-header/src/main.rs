use crate::{
    components::{connect_modal::ConnectModal, header::Header},
    hooks::{is_narrower, use_dark_mode, use_eth_balances, use_viewport_width},
};
use arbiswap_header_types::HeaderInputs;
use arbiswap_wallet::yew::{use_wallet, WalletStatus};
use tracing_wasm::WASMLayerConfigBuilder;
use yew::prelude::*;

mod components;
mod config;
mod console;
mod helpers;
mod hooks;

#[function_component]
fn App() -> Html {
    let config = use_memo(|_| config::load_config(), ());
    let version = use_memo(|_| helpers::url::current_query_param("use"), ());
    let wallet = use_wallet();
    let status = wallet.clone().and_then(Result::ok);
    let balances = use_eth_balances(status.clone());
    let (dark_mode, toggle_dark_mode) = use_dark_mode();
    let width = use_viewport_width();
    let modal_open = use_state(|| false);

    let open_modal = {
        let modal_open = modal_open.clone();
        Callback::from(move |_: ()| modal_open.set(true))
    };
    let close_modal = {
        let modal_open = modal_open.clone();
        Callback::from(move |_: ()| modal_open.set(false))
    };

    let inputs = HeaderInputs {
        account: status.as_ref().and_then(WalletStatus::account),
        chain_id: status.as_ref().and_then(|s| s.chain_id),
        balances,
        dark_mode,
        is_mobile: is_narrower(width, config.mobile_breakpoint_px),
        is_extra_small: is_narrower(width, config.extra_small_breakpoint_px),
    };

    html! {
      <>
        <Header
          config={config.clone()}
          inputs={inputs}
          version={Option::clone(&version)}
          on_open_modal={open_modal}
          on_toggle_dark_mode={toggle_dark_mode} />
        if *modal_open {
          <ConnectModal status={wallet} on_close={close_modal} />
        }
      </>
    }
}

fn main() {
    // forwards the core's degrade-path events to the browser console
    let config = WASMLayerConfigBuilder::default().set_max_level(tracing::Level::DEBUG).build();
    tracing_wasm::set_as_global_default_with_config(config);

    yew::Renderer::<App>::new().render();
}
