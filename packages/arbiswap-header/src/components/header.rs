use crate::components::{
    account_element::AccountElement, menu::Menu, network_card::NetworkCard,
    request_tokens::RequestTokens, settings::Settings, version_switch::VersionSwitch,
};
use arbiswap_header_types::{select, HeaderConfig, HeaderInputs, Theme, Tone};
use std::rc::Rc;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct HeaderProps {
    pub config: Rc<HeaderConfig>,
    pub inputs: HeaderInputs,
    /// `use` query parameter of the current page.
    pub version: Option<String>,
    pub on_open_modal: Callback<()>,
    pub on_toggle_dark_mode: Callback<()>,
}

fn title_color(theme: Theme) -> &'static str {
    match theme {
        Theme::Light => "black",
        Theme::Dark => "white",
    }
}

fn action_style(tone: Tone) -> &'static str {
    match tone {
        Tone::Normal => "cursor: pointer; font-weight: 500;",
        Tone::Warning => "cursor: pointer; font-weight: 500; color: red;",
    }
}

#[function_component(Header)]
pub(crate) fn header(props: &HeaderProps) -> Html {
    let view = select(&props.inputs, &props.config);
    let config = props.config.clone();
    let open_modal = props.on_open_modal.reform(|_: MouseEvent| ());

    html! {
      <header class="header" style="display: flex; flex-direction: column; width: 100%; top: 0; position: absolute; z-index: 2;">
        <div style="display: flex; justify-content: space-between; align-items: flex-start; padding: 1rem 1rem 0 1rem;">
          <div class="header__element" style="display: flex; align-items: center;">
            <a class="header__title" href={config.home_href.clone()} style="display: flex; align-items: center; text-decoration: none; pointer-events: auto;">
              <img width="30" src={config.logo_src.clone()} alt="logo" />
              if view.show_title {
                <span style={format!("margin-left: 4px; color: {};", title_color(view.theme))}>
                  {config.title.clone()}
                </span>
              }
            </a>
          </div>
          <div class="header__controls" style="display: flex; flex-direction: row; align-items: center;">
            <div class="header__element" style="display: flex; align-items: center;" onclick={open_modal}>
              <span class="get-started" style={action_style(view.primary_action.tone)}>
                {view.primary_action.text.clone()}
              </span>
            </div>
            if view.show_request_tokens {
              <div class="header__element" style="display: flex; align-items: center;">
                <RequestTokens href={config.request_tokens_url.clone()} />
              </div>
            }
            <div class="header__element" style="display: flex; align-items: center;">
              <div class="testnet-wrapper" style="white-space: nowrap; width: fit-content; margin-left: 10px; pointer-events: auto;">
                if let Some(label) = view.network_badge {
                  <NetworkCard label={label} />
                }
              </div>
              <AccountElement
                panel={view.account_panel.clone()}
                show_balance_text={view.show_balance_text}
                theme={view.theme} />
            </div>
            <div class="header__element-wrap" style="display: flex; align-items: center;">
              <VersionSwitch
                versions={config.versions.clone()}
                active={config.active_version(props.version.as_deref()).cloned()} />
              <Settings dark_mode={view.theme == Theme::Dark} on_toggle_dark_mode={props.on_toggle_dark_mode.clone()} />
              <Menu links={config.menu_links.clone()} />
            </div>
          </div>
        </div>
      </header>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn warning_actions_are_red() {
        assert!(action_style(Tone::Warning).contains("color: red"));
        assert!(!action_style(Tone::Normal).contains("color"));
    }

    #[test]
    fn title_follows_theme() {
        assert_eq!(title_color(Theme::Dark), "white");
        assert_eq!(title_color(Theme::Light), "black");
    }
}
