pub mod modals;
pub mod signup;

pub use modals::{ModalsState, WarningModalState};
pub use signup::SignupForm;

#[derive(Debug, Clone, Default)]
pub struct ViewsState {
    pub signup: SignupForm,
    pub modals: ModalsState,
    /// Phone number of the account created during this session.
    pub registered_phone_number: Option<String>,
}

impl ViewsState {
    pub fn new() -> Self {
        Self::default()
    }
}
