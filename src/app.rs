use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use gloo_timers::callback::Interval;
use gloo_timers::future::TimeoutFuture;
use log::info;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api::LedgerClient;
use crate::components::toast::use_toast;
use crate::components::{SendForm, Transactions};
use crate::config::ClientConfig;
use crate::controller::{Controller, DispatchTicket, FetchTicket};
use crate::models::{NodeId, PeerIndex, ToastKind};
use crate::notify::NoticeBuffer;

fn as_millis(d: Duration) -> u32 {
    u32::try_from(d.as_millis()).unwrap_or(u32::MAX)
}

/// Runs the controller's tickets in the browser and feeds results back.
#[derive(Clone)]
struct Shell {
    client: Rc<LedgerClient>,
    controller: Rc<RefCell<Controller>>,
    toast: Callback<(String, ToastKind)>,
    rerender: UseForceUpdateHandle,
    settle_delay: Duration,
}

impl Shell {
    /// Notices are pushed only after the controller borrow is released.
    fn with<R>(&self, f: impl FnOnce(&mut Controller, &NoticeBuffer) -> R) -> R {
        let notices = NoticeBuffer::default();
        let out = f(&mut self.controller.borrow_mut(), &notices);
        notices.flush(&self.toast);
        self.rerender.force_update();
        out
    }

    fn fetch(&self, ticket: FetchTicket) {
        let shell = self.clone();
        spawn_local(async move {
            let result = shell.client.get_transactions(ticket.node).await;
            shell.with(|c, n| c.on_history_response(ticket, result, n));
        });
    }

    fn dispatch(&self, ticket: DispatchTicket) {
        let DispatchTicket { id, request } = ticket;

        let shell = self.clone();
        spawn_local(async move {
            let result = shell.client.send_transaction(&request).await;
            if let Some(next) = shell.with(|c, n| c.on_submit_response(id, result, n)) {
                shell.fetch(next);
            }
        });

        let shell = self.clone();
        let delay = as_millis(self.settle_delay);
        spawn_local(async move {
            TimeoutFuture::new(delay).await;
            if let Some(next) = shell.with(|c, n| c.on_settle_elapsed(id, n)) {
                shell.fetch(next);
            }
        });
    }
}

#[function_component(App)]
pub fn app() -> Html {
    let config = use_memo((), |_| ClientConfig::default());
    let client = {
        let config = config.clone();
        use_memo((), move |_| LedgerClient::new((*config).clone()))
    };
    let controller = use_mut_ref(|| Controller::new(config.default_history_node));
    let rerender = use_force_update();
    let (push_toast, render_toast) = use_toast();

    let shell = Shell {
        client,
        controller: controller.clone(),
        toast: push_toast,
        rerender,
        settle_delay: config.settle_delay,
    };

    {
        let shell = shell.clone();
        let poll_interval = config.poll_interval;
        use_effect_with((), move |_| {
            info!("Loading history for node {}", shell.controller.borrow().selection().history_node());
            let ticket = shell.with(|c, _| c.mount());
            shell.fetch(ticket);

            let poller = poll_interval.map(|every| {
                let shell = shell.clone();
                Interval::new(as_millis(every), move || {
                    if let Some(ticket) = shell.with(|c, _| c.poll()) {
                        shell.fetch(ticket);
                    }
                })
            });
            move || drop(poller)
        });
    }

    let on_sender = {
        let shell = shell.clone();
        Callback::from(move |sender: Option<NodeId>| {
            shell.with(|c, _| c.set_sender(sender));
        })
    };

    let on_receiver = {
        let shell = shell.clone();
        Callback::from(move |receiver: Option<PeerIndex>| {
            shell.with(|c, _| c.set_receiver(receiver));
        })
    };

    let on_amount = {
        let shell = shell.clone();
        Callback::from(move |raw: String| shell.with(|c, _| c.set_amount(&raw)))
    };

    let on_submit = {
        let shell = shell.clone();
        Callback::from(move |_: ()| {
            if let Some(ticket) = shell.with(|c, n| c.submit(n)) {
                shell.dispatch(ticket);
            }
        })
    };

    let on_node = {
        let shell = shell.clone();
        Callback::from(move |node: NodeId| {
            let ticket = shell.with(|c, _| c.select_history_node(node));
            shell.fetch(ticket);
        })
    };

    let on_refresh = {
        let shell = shell.clone();
        Callback::from(move |_: ()| {
            let ticket = shell.with(|c, _| c.refresh());
            shell.fetch(ticket);
        })
    };

    let (selection, snapshot, is_busy) = {
        let c = controller.borrow();
        (c.selection().clone(), c.snapshot().clone(), c.is_busy())
    };

    html! {
        <div class="app-container">
            <div class="app-header">
                <b class="app-title">{"VADAM-CHAIN"}</b>
                <p class="app-tagline">{"When the speed of light is too slow, use vadam-chain."}</p>
            </div>
            <main class="main-content">
                <SendForm
                    sender={selection.sender()}
                    receiver={selection.receiver()}
                    amount={selection.amount().to_string()}
                    reset_token={selection.reset_token()}
                    {is_busy}
                    {on_sender}
                    {on_receiver}
                    {on_amount}
                    {on_submit}
                />
                <Transactions
                    {snapshot}
                    node={selection.history_node()}
                    {on_node}
                    {on_refresh}
                />
            </main>
            { render_toast }
        </div>
    }
}
