pub mod peer_select;
pub mod send;
pub mod toast;
pub mod transactions;

pub use send::SendForm;
pub use transactions::Transactions;
