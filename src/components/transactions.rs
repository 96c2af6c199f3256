use yew::prelude::*;
use crate::components::peer_select::{PeerSelect, SelectOption};
use crate::config::KNOWN_NODES;
use crate::models::{HistorySnapshot, NodeId};
use crate::utils::{format_amount, short_hash};

#[derive(Properties, PartialEq)]
pub struct TransactionsProps {
    pub snapshot: HistorySnapshot,
    pub node: NodeId,
    pub on_node: Callback<NodeId>,
    pub on_refresh: Callback<()>,
}

#[function_component(Transactions)]
pub fn transactions(props: &TransactionsProps) -> Html {
    let node_options: Vec<SelectOption> = KNOWN_NODES
        .iter()
        .map(|n| SelectOption { value: n.port().to_string(), label: n.label() })
        .collect();

    let on_node = {
        let cb = props.on_node.clone();
        Callback::from(move |v: String| {
            if let Some(node) = NodeId::parse(&v) {
                cb.emit(node);
            }
        })
    };
    let on_refresh = props.on_refresh.reform(|_: MouseEvent| ());

    let snapshot = &props.snapshot;

    html! {
        <div class="history" role="region" aria-label="Transactions History">
            <div class="history-header">
                <h2 class="section-title">{"Transactions History"}</h2>
                <div class="history-controls">
                    <PeerSelect
                        id="history-node-select"
                        label="Fetch data from"
                        placeholder="Choose node..."
                        options={node_options}
                        selected={Some(props.node.port().to_string())}
                        on_change={on_node}
                    />
                    <button class="btn btn-icon" onclick={on_refresh} aria-label="Reload transactions">
                        { "⟳" }
                    </button>
                </div>
            </div>

            <table class="tx-table">
                <caption>{ snapshot.caption() }</caption>
                <thead>
                    <tr>
                        <th>{"ID"}</th>
                        <th>{"Sender"}</th>
                        <th>{"Receiver"}</th>
                        <th>{"Status"}</th>
                        <th class="text-right">{"Amount"}</th>
                    </tr>
                </thead>
                <tbody>
                    { for snapshot.records.iter().map(|tx| html! {
                        <tr key={tx.hash_id.clone()}>
                            <td class="tx-id" title={tx.hash_id.clone()}>{ short_hash(&tx.hash_id) }</td>
                            <td>{ &tx.sender }</td>
                            <td>{ &tx.receiver }</td>
                            <td>{ &tx.status }</td>
                            <td class="text-right">{ format_amount(tx.amount) }</td>
                        </tr>
                    }) }
                </tbody>
            </table>
        </div>
    }
}
