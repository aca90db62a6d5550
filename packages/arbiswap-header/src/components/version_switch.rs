use crate::helpers::url::version_href;
use arbiswap_header_types::VersionLink;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct VersionSwitchProps {
    pub versions: Vec<VersionLink>,
    pub active: Option<VersionLink>,
}

#[function_component(VersionSwitch)]
pub(crate) fn version_switch(props: &VersionSwitchProps) -> Html {
    html! {
      <div class="version-switch" style="display: flex; border-radius: 12px; background-color: #edeef2; padding: 2px;">
        {for props.versions.iter().map(|version| {
          let active = props.active.as_ref() == Some(version);
          let style = if active {
            "padding: 0.35rem 0.6rem; border-radius: 12px; background-color: #ffffff; font-weight: 600; text-decoration: none; color: inherit;"
          } else {
            "padding: 0.35rem 0.6rem; border-radius: 12px; font-weight: 400; text-decoration: none; color: #888d9b;"
          };
          html! {
            <a key={version.query.clone()} href={version_href(&version.query)} style={style}>
              {version.name.clone()}
            </a>
          }
        })}
      </div>
    }
}
