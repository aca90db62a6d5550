use crate::helpers::wallet::{describe_error, NO_WALLET};
use arbiswap_header_types::{chain_id_to_hex, short_address, ChainId, ConnectionStatus};
use arbiswap_wallet::{yew::WalletStatus, Provider, ProviderError};
use yew::prelude::*;

#[derive(Clone, Copy, PartialEq)]
enum WalletAction {
    Connect,
    SwitchNetwork,
}

async fn run_action(provider: Provider, action: WalletAction) -> Result<(), ProviderError> {
    match action {
        WalletAction::Connect => provider.request_accounts().await.map(|_| ()),
        WalletAction::SwitchNetwork => {
            provider.request_switch_chain(chain_id_to_hex(ChainId::TARGET.id())).await
        }
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct ConnectModalProps {
    pub status: Option<Result<WalletStatus, ProviderError>>,
    pub on_close: Callback<()>,
}

/// Connection flow opened by the header's call-to-action.
#[function_component(ConnectModal)]
pub(crate) fn connect_modal(props: &ConnectModalProps) -> Html {
    let loading = use_state(|| false);
    let error = use_state(|| None);

    let run = {
        let loading = loading.clone();
        let error = error.clone();
        use_callback(
            move |(provider, action): (Provider, WalletAction), _| {
                let loading = loading.clone();
                let error = error.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    loading.set(true);
                    let result = run_action(provider, action).await;
                    loading.set(false);
                    error.set(result.err().map(|err| describe_error(&err)));
                });
            },
            (),
        )
    };

    let close = props.on_close.reform(|_: MouseEvent| ());

    let body = match props.status.clone() {
        None => html! { <p>{"Looking for a browser wallet..."}</p> },
        Some(Err(_)) => html! { <p>{NO_WALLET}</p> },
        Some(Ok(status)) => {
            let account = status.account();
            let wallet = status.provider.wallet_name();
            let action = match ConnectionStatus::resolve(account.as_ref(), status.chain_id) {
                ConnectionStatus::Disconnected if account.is_none() => {
                    Some((WalletAction::Connect, format!("Connect {}", wallet)))
                }
                ConnectionStatus::ConnectedWrongNetwork => Some((
                    WalletAction::SwitchNetwork,
                    format!("Switch to {}", ChainId::TARGET),
                )),
                _ => None,
            };
            let button = action.map(|(action, text)| {
                let run = run.clone();
                let provider = status.provider.clone();
                let onclick =
                    Callback::from(move |_: MouseEvent| run.emit((provider.clone(), action)));
                let text = if *loading { "Waiting for wallet...".to_owned() } else { text };
                html! { <button type="button" disabled={*loading} onclick={onclick}>{text}</button> }
            });
            html! {
              <>
                if let Some(account) = account {
                  <p>{format!("Connected with {} as {}", wallet, short_address(&account))}</p>
                }
                {for button}
              </>
            }
        }
    };

    html! {
      <>
        <div onclick={close.clone()} style="position: fixed; top: 0; left: 0; right: 0; bottom: 0; opacity: 0.3; background: black; z-index: 10;" />

        <dialog open=true style="position: fixed; top: 20%; left: 10%; right: 10%; max-width: 420px; margin: 0 auto; border-radius: 20px; border: none; padding: 1.5rem; z-index: 11;">
          <div style="display: flex; justify-content: space-between; align-items: center;">
            <h3 style="margin: 0;">{"Connect to a wallet"}</h3>
            <button type="button" aria-label="Close" onclick={close}>{"✕"}</button>
          </div>
          <div style="margin: 1rem 0;">
            {body}
          </div>
          if let Some(err) = Option::clone(&error) {
            <p style="color: red;">{err}</p>
          }
        </dialog>
      </>
    }
}
