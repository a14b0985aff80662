use tb_core::BoardId;

/// Outcome of one fan-out
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BroadcastReport {
    pub board_id: BoardId,
    pub event: &'static str,
    /// Channel members at lookup time
    pub recipients: usize,
    pub delivered: usize,
    /// Recipients whose queue was full or already closed
    pub failed: usize,
}
