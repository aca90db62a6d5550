use arbiswap_header_types::MenuLink;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct MenuProps {
    pub links: Vec<MenuLink>,
}

#[function_component(Menu)]
pub(crate) fn menu(props: &MenuProps) -> Html {
    let open = use_state(|| false);
    let toggle_open = {
        let open = open.clone();
        Callback::from(move |_: MouseEvent| open.set(!*open))
    };

    html! {
      <div class="menu" style="position: relative; margin-left: 0.5rem;">
        <button type="button" aria-label="Menu" onclick={toggle_open}>{"⋯"}</button>
        if *open {
          <nav class="menu__flyout" style="position: absolute; right: 0; top: 2.5rem; display: flex; flex-direction: column; padding: 0.5rem; border-radius: 12px; background-color: #ffffff; box-shadow: 0 4px 8px rgba(0, 0, 0, 0.1); min-width: 8rem;">
            {for props.links.iter().map(|link| html! {
              <a key={link.href.clone()} href={link.href.clone()} target="_blank" rel="noopener noreferrer" style="padding: 0.5rem; text-decoration: none; color: #565a69;">
                {link.label.clone()}
              </a>
            })}
          </nav>
        }
      </div>
    }
}
