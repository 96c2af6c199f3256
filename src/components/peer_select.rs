use yew::prelude::*;
use web_sys::HtmlSelectElement;

#[derive(Clone, PartialEq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

#[derive(Properties, PartialEq)]
pub struct PeerSelectProps {
    pub id: AttrValue,
    pub label: AttrValue,
    pub placeholder: AttrValue,
    pub options: Vec<SelectOption>,
    #[prop_or_default]
    pub selected: Option<String>,
    #[prop_or_default]
    pub disabled: bool,
    pub on_change: Callback<String>,
}

/// Native `<select>` with a disabled placeholder entry. Re-mounting it (by
/// changing its `key`) brings the placeholder back.
#[function_component(PeerSelect)]
pub fn peer_select(props: &PeerSelectProps) -> Html {
    let onchange = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            if let Some(select) = e.target_dyn_into::<HtmlSelectElement>() {
                on_change.emit(select.value());
            }
        })
    };

    html! {
        <div class="select-wrapper">
            <label for={props.id.clone()} class="select-label">{ props.label.clone() }</label>
            <select id={props.id.clone()} class="input" disabled={props.disabled} {onchange}>
                <option value="" disabled=true selected={props.selected.is_none()}>
                    { props.placeholder.clone() }
                </option>
                { for props.options.iter().map(|opt| html! {
                    <option
                        value={opt.value.clone()}
                        selected={props.selected.as_deref() == Some(opt.value.as_str())}
                    >
                        { &opt.label }
                    </option>
                }) }
            </select>
        </div>
    }
}
