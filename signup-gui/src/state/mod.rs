use crate::{
    services::signup::SignupClient,
    views::{modals, signin_view, signup_view},
};
use iced::{time::Duration, Subscription};
pub use message::{Message, Msg};
use signup_ui::widget::{modal::Modal, Element};

pub mod cooldown;
pub mod message;
pub mod update;
pub mod validation;
pub mod views;

/// Current view state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Signup,
    /// Shown once the account has been created.
    Signin,
}

/// Main application state
pub struct State {
    pub views: views::ViewsState,
    pub client: SignupClient,
    pub current_view: View,
    /// Delay enforced between two verification code requests.
    pub cooldown_duration: Duration,
}

impl State {
    pub fn new(client: SignupClient, cooldown_duration: Duration) -> Self {
        Self {
            views: views::ViewsState::new(),
            client,
            current_view: View::Signup,
            cooldown_duration,
        }
    }

    /// Render the current view with modals
    pub fn view(&self) -> Element<'_, Message> {
        let content = match self.current_view {
            View::Signup => signup_view(self),
            View::Signin => signin_view(self),
        };

        if let Some(warning) = &self.views.modals.warning {
            Modal::new(content, modals::warning_modal_view(warning))
                .on_blur(Some(Message::WarningCloseModal))
                .into()
        } else {
            content
        }
    }

    /// Whether the countdown has to be refreshed.
    pub fn needs_tick(&self) -> bool {
        self.views.signup.cooldown.is_active()
    }

    /// The countdown is refreshed every second while a cooldown is running.
    pub fn subscription(&self) -> Subscription<Message> {
        if self.needs_tick() {
            iced::time::every(Duration::from_secs(1)).map(Msg::CooldownTick)
        } else {
            Subscription::none()
        }
    }
}

// NOTE: implementation of State::update() is in src/state/update.rs
