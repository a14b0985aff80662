use tb_core::{BoardId, Channel};

use std::collections::HashSet;

/// Board channels one client has joined
#[derive(Debug, Clone, Default)]
pub struct ClientSubscriptions {
    channels: HashSet<Channel>,
}

impl ClientSubscriptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Join a board channel. Returns false if it was already joined.
    pub fn join(&mut self, channel: Channel) -> bool {
        self.channels.insert(channel)
    }

    /// Leave a board channel. Returns false if it was never joined.
    pub fn leave(&mut self, channel: &Channel) -> bool {
        self.channels.remove(channel)
    }

    pub fn is_joined(&self, board_id: &BoardId) -> bool {
        self.channels.contains(&Channel::for_board(board_id.clone()))
    }

    pub fn channels(&self) -> impl Iterator<Item = &Channel> {
        self.channels.iter()
    }

    /// Remove and return every joined channel
    pub fn drain(&mut self) -> Vec<Channel> {
        self.channels.drain().collect()
    }

    pub fn len(&self) -> usize {
        self.channels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.channels.is_empty()
    }
}
