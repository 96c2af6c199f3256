use yew::prelude::*;
use web_sys::HtmlInputElement;
use crate::components::peer_select::{PeerSelect, SelectOption};
use crate::config::{KNOWN_NODES, KNOWN_PEERS, MAX_AMOUNT_DIGITS};
use crate::models::{NodeId, PeerIndex};

#[derive(Properties, PartialEq)]
pub struct SendProps {
    pub sender: Option<NodeId>,
    pub receiver: Option<PeerIndex>,
    pub amount: String,
    pub reset_token: u64,
    pub is_busy: bool,
    pub on_sender: Callback<Option<NodeId>>,
    pub on_receiver: Callback<Option<PeerIndex>>,
    /// Receives the raw field value, returns the value to keep.
    pub on_amount: Callback<String, String>,
    pub on_submit: Callback<()>,
}

#[function_component(SendForm)]
pub fn send_form(props: &SendProps) -> Html {
    let sender_options: Vec<SelectOption> = KNOWN_NODES
        .iter()
        .map(|n| SelectOption { value: n.port().to_string(), label: n.peer_label() })
        .collect();
    let receiver_options: Vec<SelectOption> = KNOWN_PEERS
        .iter()
        .map(|p| SelectOption { value: p.0.to_string(), label: p.label() })
        .collect();

    let on_sender = {
        let cb = props.on_sender.clone();
        Callback::from(move |v: String| cb.emit(NodeId::parse(&v)))
    };
    let on_receiver = {
        let cb = props.on_receiver.clone();
        Callback::from(move |v: String| cb.emit(PeerIndex::parse(&v)))
    };

    let on_amount = {
        let cb = props.on_amount.clone();
        Callback::from(move |ev: InputEvent| {
            if let Some(i) = ev.target_dyn_into::<HtmlInputElement>() {
                let kept = cb.emit(i.value());
                if kept != i.value() {
                    i.set_value(&kept);
                }
            }
        })
    };

    let onsubmit = {
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_submit.emit(());
        })
    };

    let token = props.reset_token;

    html! {
        <form class="send-form" {onsubmit} aria-label="Send transaction form">
            // Re-keyed on every reset so the selects come back on their placeholder.
            <div class="send-fields" key={format!("fields-{}", token)}>
                <div class="row">
                    <PeerSelect
                        id="sender-select"
                        label="Sender"
                        placeholder="Select a peer..."
                        options={sender_options}
                        selected={props.sender.map(|n| n.port().to_string())}
                        disabled={props.is_busy}
                        on_change={on_sender}
                    />
                    <span class="send-arrow" aria-hidden="true">{ ">>>" }</span>
                    <PeerSelect
                        id="receiver-select"
                        label="Recipient"
                        placeholder="Select a peer..."
                        options={receiver_options}
                        selected={props.receiver.map(|p| p.0.to_string())}
                        disabled={props.is_busy}
                        on_change={on_receiver}
                    />
                </div>

                <div class="input-wrapper">
                    <input
                        type="text"
                        inputmode="numeric"
                        placeholder="Amount (VAD)"
                        maxlength={MAX_AMOUNT_DIGITS.to_string()}
                        value={props.amount.clone()}
                        oninput={on_amount}
                        disabled={props.is_busy}
                        class="input"
                    />
                </div>
            </div>

            <div class="button-group" key="actions">
                <button
                    type="submit"
                    disabled={props.is_busy}
                    aria-busy={props.is_busy.to_string()}
                    class={classes!("btn", "btn-prominent", if props.is_busy { "loading" } else { "" })}
                >
                    { if props.is_busy { "Processing..." } else { "Send Transaction" } }
                </button>
            </div>
        </form>
    }
}
