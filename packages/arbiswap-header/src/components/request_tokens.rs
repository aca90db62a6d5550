use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct RequestTokensProps {
    pub href: String,
}

/// Opens a pre-filled tweet, the faucet hands out test tokens for it.
#[function_component(RequestTokens)]
pub(crate) fn request_tokens(props: &RequestTokensProps) -> Html {
    html! {
      <a
        class="request-tokens"
        href={props.href.clone()}
        target="_blank"
        rel="noopener noreferrer"
        style="display: flex; padding: 8px; margin-left: 5px; border-radius: 8px; background-color: #def0ff; color: #1b95e0; font-weight: 500; text-decoration: none;">
        {"Request Tokens"}
      </a>
    }
}
