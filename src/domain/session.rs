use super::catalog::Product;

/// Where a conversation stands in the purchase flow.
///
/// ```text
/// (none) --select--> Interested --PAGAR ok--> AwaitingAddress --any text--> Finished
/// Interested --select another--> Interested (reset)
/// Interested --PAGAR failed--> Interested (unchanged, retry allowed)
/// ```
///
/// Nothing leaves `Finished` except a new product selection, which overwrites
/// the whole session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    Interested,
    AwaitingAddress,
    Finished,
}

/// Per-user conversation state. Lives for the process lifetime; a `Finished`
/// session is never removed, it just stops matching any rule.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    /// Snapshot of the product at selection time, not a live catalog ref.
    pub item: Product,
    pub status: SessionStatus,
    /// Delivery address, captured verbatim once the charge exists.
    pub address: Option<String>,
}

impl Session {
    /// Fresh session for a newly selected product.
    pub fn interested(item: Product) -> Self {
        Self {
            item,
            status: SessionStatus::Interested,
            address: None,
        }
    }
}
