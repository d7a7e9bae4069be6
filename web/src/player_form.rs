use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct PlayerFormProps {
    pub name: AttrValue,
    pub on_input: Callback<String>,
    pub on_submit: Callback<()>,
    pub on_clear: Callback<()>,
}

#[function_component]
pub(crate) fn PlayerForm(props: &PlayerFormProps) -> Html {
    let oninput = props.on_input.reform(|e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        input.value()
    });

    let onsubmit = props.on_submit.reform(|e: SubmitEvent| {
        e.prevent_default();
    });

    let onclick = props.on_clear.reform(|_: MouseEvent| ());

    html! {
        <form class="player-form" {onsubmit}>
            <input
                type="text"
                placeholder="🌸 Enter your name 🌸"
                value={props.name.clone()}
                {oninput}
            />
            <div>
                <button type="submit">{"💖 Save & Play 💖"}</button>
                <button type="button" {onclick}>{"❌ Clear Name ❌"}</button>
            </div>
        </form>
    }
}
