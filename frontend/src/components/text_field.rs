use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::styles;

/// Labelled input that reports its value as a `String` and renders the
/// field's validation message underneath.
#[derive(Properties, PartialEq)]
pub struct TextFieldProps {
    pub id: &'static str,
    pub label: &'static str,
    #[prop_or_default]
    pub placeholder: &'static str,
    #[prop_or("text")]
    pub input_type: &'static str,
    #[prop_or_default]
    pub multiline: bool,
    #[prop_or_default]
    pub disabled: bool,
    pub value: String,
    #[prop_or_default]
    pub error: Option<&'static str>,
    pub oninput: Callback<String>,
}

#[function_component(TextField)]
pub fn text_field(props: &TextFieldProps) -> Html {
    let class = if props.error.is_some() { styles::INPUT_ERROR } else { styles::INPUT };

    let input = if props.multiline {
        let oninput = {
            let oninput = props.oninput.clone();
            Callback::from(move |e: InputEvent| {
                let input: HtmlTextAreaElement = e.target_unchecked_into();
                oninput.emit(input.value());
            })
        };
        html! {
            <textarea
                id={props.id}
                rows="3"
                placeholder={props.placeholder}
                value={props.value.clone()}
                disabled={props.disabled}
                {oninput}
                {class}
            />
        }
    } else {
        let oninput = {
            let oninput = props.oninput.clone();
            Callback::from(move |e: InputEvent| {
                let input: HtmlInputElement = e.target_unchecked_into();
                oninput.emit(input.value());
            })
        };
        html! {
            <input
                id={props.id}
                type={props.input_type}
                placeholder={props.placeholder}
                value={props.value.clone()}
                disabled={props.disabled}
                {oninput}
                {class}
            />
        }
    };

    html! {
        <div>
            <label for={props.id} class={styles::TEXT_LABEL}>{props.label}</label>
            {input}
            if let Some(error) = props.error {
                <p class={classes!(styles::TEXT_ERROR, "mt-1")}>{error}</p>
            }
        </div>
    }
}
