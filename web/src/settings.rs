use crate::theme::Theme;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct SettingsProps {
    #[prop_or_default]
    pub open: bool,
    pub on_theme: Callback<Option<Theme>>,
}

#[function_component(SettingsView)]
pub(crate) fn settings_component(props: &SettingsProps) -> Html {
    let choices: [(&'static str, Option<Theme>); 3] = [
        ("Auto", None),
        ("Light", Some(Theme::Light)),
        ("Dark", Some(Theme::Dark)),
    ];

    html! {
        <dialog id="settings" open={props.open}>
            <article>
                <h2>{"Settings"}</h2>
                <ul>
                    {
                        for choices.into_iter().map(|(label, theme)| {
                            let on_theme = props.on_theme.clone();
                            let onclick = Callback::from(move |_: MouseEvent| on_theme.emit(theme));
                            html! {
                                <li><button {onclick}>{ label }</button></li>
                            }
                        })
                    }
                </ul>
            </article>
        </dialog>
    }
}
