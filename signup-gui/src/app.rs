use iced::{Subscription, Task};
use signup_ui::{
    theme::Theme,
    widget::{text_input, Element},
};

use crate::{
    config::Config,
    services::signup::SignupClient,
    state::{update::NAME_INPUT_ID, Msg, State},
};

pub struct SignupApp {
    state: State,
}

impl SignupApp {
    pub fn new(config: Config) -> (Self, Task<Msg>) {
        tracing::info!("Using signup backend at {}", config.api_url);
        let client = SignupClient::new(config.api_url);
        let app = Self {
            state: State::new(client, config.sms_cooldown),
        };
        (app, text_input::focus(text_input::Id::new(NAME_INPUT_ID)))
    }

    pub fn title(&self) -> String {
        "Sign up".to_string()
    }

    pub fn update(&mut self, message: Msg) -> Task<Msg> {
        self.state.update(message)
    }

    pub fn view(&self) -> Element<'_, Msg> {
        self.state.view()
    }

    pub fn subscription(&self) -> Subscription<Msg> {
        self.state.subscription()
    }

    pub fn theme(&self) -> Theme {
        Theme::default()
    }
}
