use crate::theme::Theme;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct SettingsProps {
    #[prop_or_default]
    pub open: bool,
    pub on_close: Callback<()>,
}

/// Theme picker, the only setting there is.
#[function_component]
pub(crate) fn SettingsView(props: &SettingsProps) -> Html {
    let theme = use_state(Theme::current);
    let on_close = props.on_close.reform(|_: MouseEvent| ());

    html! {
        <dialog class="settings" open={props.open}>
            <h2>{"Theme"}</h2>
            {
                for Theme::CHOICES.into_iter().map(|(label, choice)| {
                    let theme = theme.clone();
                    let class = classes!((*theme == choice).then_some("selected"));
                    let onclick = move |_: MouseEvent| {
                        Theme::apply(choice);
                        theme.set(choice);
                    };
                    html! { <button {class} {onclick}>{label}</button> }
                })
            }
            <button onclick={on_close}>{"Close"}</button>
        </dialog>
    }
}
