use crate::RawAction;

/// What an `updateCard` action actually did to the card.
///
/// The provider reports list-to-list moves as a generic update; the only
/// discriminator is that both `listBefore` and `listAfter` are present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardChange {
    Moved,
    Edited,
}

impl CardChange {
    pub fn classify(action: &RawAction) -> Self {
        if action.field("listBefore").is_some() && action.field("listAfter").is_some() {
            Self::Moved
        } else {
            Self::Edited
        }
    }
}
