/// Warning modal state
#[derive(Debug, Clone, PartialEq)]
pub struct WarningModalState {
    pub title: String,
    pub message: String,
}

impl WarningModalState {
    pub fn new(title: String, message: String) -> Self {
        Self { title, message }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ModalsState {
    pub warning: Option<WarningModalState>,
}
