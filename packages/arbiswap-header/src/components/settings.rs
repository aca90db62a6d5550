use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct SettingsProps {
    pub dark_mode: bool,
    pub on_toggle_dark_mode: Callback<()>,
}

#[function_component(Settings)]
pub(crate) fn settings(props: &SettingsProps) -> Html {
    let open = use_state(|| false);
    let toggle_open = {
        let open = open.clone();
        Callback::from(move |_: MouseEvent| open.set(!*open))
    };
    let toggle_dark_mode = props.on_toggle_dark_mode.reform(|_: MouseEvent| ());

    html! {
      <div class="settings" style="position: relative; margin-left: 0.5rem;">
        <button type="button" aria-label="Settings" onclick={toggle_open}>{"⚙"}</button>
        if *open {
          <div class="settings__flyout" style="position: absolute; right: 0; top: 2.5rem; padding: 1rem; border-radius: 12px; background-color: #ffffff; box-shadow: 0 4px 8px rgba(0, 0, 0, 0.1); white-space: nowrap;">
            <label style="display: flex; align-items: center; gap: 0.5rem;">
              <input type="checkbox" checked={props.dark_mode} onclick={toggle_dark_mode} />
              {"Dark mode"}
            </label>
          </div>
        }
      </div>
    }
}
