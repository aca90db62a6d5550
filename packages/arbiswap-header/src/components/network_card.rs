use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct NetworkCardProps {
    pub label: &'static str,
}

/// Yellow badge naming a network other than the target.
#[function_component(NetworkCard)]
pub(crate) fn network_card(props: &NetworkCardProps) -> Html {
    html! {
      <div class="network-card" style="width: fit-content; margin-right: 10px; border-radius: 12px; padding: 8px 12px; background-color: rgba(243, 132, 30, 0.05); color: #f3841e; font-weight: 500;">
        {props.label}
      </div>
    }
}
