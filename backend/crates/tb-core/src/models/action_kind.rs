/// Provider action tags this relay understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionKind {
    CreateCard,
    UpdateCard,
    DeleteCard,
    Unsupported,
}

impl ActionKind {
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "createCard" => Self::CreateCard,
            "updateCard" => Self::UpdateCard,
            "deleteCard" => Self::DeleteCard,
            _ => Self::Unsupported,
        }
    }

    pub fn is_supported(&self) -> bool {
        !matches!(self, Self::Unsupported)
    }
}
