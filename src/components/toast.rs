use yew::prelude::*;
use gloo_timers::callback::Timeout;
use log::debug;
use crate::models::ToastKind;

const TOAST_LIFETIME_MS: u32 = 4_000;

#[derive(Properties, PartialEq)]
pub struct ToastProps {
    pub message: String,
    #[prop_or_default]
    pub kind: ToastKind,
    pub on_close: Callback<()>,
}

fn glyph(kind: &ToastKind) -> &'static str {
    match kind {
        ToastKind::Error => "✕",
        ToastKind::Success => "✓",
    }
}

#[function_component(Toast)]
pub fn toast(props: &ToastProps) -> Html {
    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_| on_close.emit(()))
    };

    html! {
        <div class={classes!("toast", props.kind.class())} role="status">
            <span class="toast-icon" aria-hidden="true">{ glyph(&props.kind) }</span>
            <span class="toast-message">{ &props.message }</span>
            <button class="toast-close" onclick={close}>{ "×" }</button>
        </div>
    }
}

/// Single-slot toast: a new notice replaces the one on screen.
#[hook]
pub fn use_toast() -> (Callback<(String, ToastKind)>, Html) {
    let toast = use_state(|| None::<(String, ToastKind)>);
    {
        let toast = toast.clone();
        use_effect_with(toast.clone(), move |t| {
            let handle = t.is_some().then(|| {
                let toast = toast.clone();
                Timeout::new(TOAST_LIFETIME_MS, move || toast.set(None))
            });
            move || drop(handle)
        });
    }

    let clear_toast = {
        let toast = toast.clone();
        Callback::from(move |_| toast.set(None))
    };

    let push_toast = {
        let toast = toast.clone();
        Callback::from(move |(msg, kind): (String, ToastKind)| {
            debug!("Toast: {} ({:?})", msg, kind);
            toast.set(Some((msg, kind)))
        })
    };

    let render_toast = html! {
        <div class="toast-container">
            if let Some((msg, kind)) = &*toast {
                <Toast message={msg.clone()} kind={kind.clone()} on_close={clear_toast.clone()} />
            }
        </div>
    };

    (push_toast, render_toast)
}
