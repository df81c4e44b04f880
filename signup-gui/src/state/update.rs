use super::{message::Msg, views, State, View};
use crate::services::signup::SignupError;
use iced::{time::Instant, Task};
use signup_ui::widget::text_input;
use tracing::{debug, error, info, trace};

pub const NAME_INPUT_ID: &str = "signup_name";
pub const CODE_INPUT_ID: &str = "signup_code";

// Update routing logic
impl State {
    #[rustfmt::skip]
    pub fn update(&mut self, message: Msg) -> Task<Msg> {
        if !matches!(message, Msg::CooldownTick(_)) {
            debug!("received message");
        } else {
            trace!("received message");
        }
        match message {
            // Form inputs
            Msg::SignupUpdateName(name) => self.views.signup.on_update_name(name),
            Msg::SignupUpdatePhoneNumber(phone_number) => self.views.signup.on_update_phone_number(phone_number),
            Msg::SignupUpdateCode(code) => self.views.signup.on_update_code(code),
            Msg::SignupUpdatePassword(password) => self.views.signup.on_update_password(password),

            // Registration
            Msg::SignupSubmit => return self.on_signup_submit(),
            Msg::SignupDone(result) => self.on_signup_done(result),

            // Verification code
            Msg::VerificationRequest => return self.on_verification_request(Instant::now()),
            Msg::VerificationSent(result) => return self.on_verification_sent(result, Instant::now()),
            Msg::CooldownTick(now) => self.views.signup.cooldown.tick(now),

            // Navigation
            Msg::NavigateToSignup => return self.on_navigate_to_signup(),

            // Warnings
            Msg::WarningCloseModal => self.on_warning_close_modal(),
        }
        Task::none()
    }
}

// Registration
impl State {
    fn on_signup_submit(&mut self) -> Task<Msg> {
        if !self.views.signup.can_submit() {
            debug!("on_signup_submit: skipped - already submitting");
            return Task::none();
        }
        let request = match self.views.signup.signup_request() {
            Ok(request) => request,
            Err(alert) => {
                debug!("on_signup_submit: rejected - {}", alert);
                self.on_warning_show_modal("Sign up", alert);
                return Task::none();
            }
        };

        debug!("on_signup_submit: request={:?}", request);
        self.views.signup.submitting = true;
        let client = self.client.clone();
        Task::perform(
            async move { client.sign_up(request).await },
            Msg::SignupDone,
        )
    }

    fn on_signup_done(&mut self, result: Result<String, SignupError>) {
        self.views.signup.submitting = false;
        match result {
            Ok(message) => {
                info!("account created: {}", message);
                self.views.registered_phone_number =
                    Some(self.views.signup.phone_number.value.clone());
                self.current_view = View::Signin;
                self.on_warning_show_modal("Sign up", "Registration successful");
            }
            Err(e) => self.on_request_error("Sign up", e),
        }
    }
}

// Verification code
impl State {
    fn on_verification_request(&mut self, now: Instant) -> Task<Msg> {
        if let Some(secs) = self.views.signup.cooldown.blocking_secs(now) {
            debug!("on_verification_request: cooldown active, {}s left", secs);
            self.on_warning_show_modal(
                "Verification code",
                format!(
                    "Requesting a code too quickly. Please try again in {} seconds.",
                    secs
                ),
            );
            return Task::none();
        }
        if !self.views.signup.can_request_code() {
            debug!("on_verification_request: skipped - request in flight");
            return Task::none();
        }
        let phone_number = match self.views.signup.verification_phone_number() {
            Ok(phone_number) => phone_number,
            Err(alert) => {
                self.on_warning_show_modal("Verification code", alert);
                return Task::none();
            }
        };

        debug!("on_verification_request: phone_number={}", phone_number);
        self.views.signup.requesting_code = true;
        let client = self.client.clone();
        Task::perform(
            async move { client.request_verification_code(&phone_number).await },
            Msg::VerificationSent,
        )
    }

    fn on_verification_sent(
        &mut self,
        result: Result<String, SignupError>,
        now: Instant,
    ) -> Task<Msg> {
        self.views.signup.requesting_code = false;
        match result {
            Ok(message) => {
                self.on_warning_show_modal("Verification code", message);
                self.views
                    .signup
                    .cooldown
                    .start(now, self.cooldown_duration);
                text_input::focus(text_input::Id::new(CODE_INPUT_ID))
            }
            Err(e) => {
                self.on_request_error("Verification code", e);
                Task::none()
            }
        }
    }
}

// Navigation
impl State {
    fn on_navigate_to_signup(&mut self) -> Task<Msg> {
        self.views.signup = views::SignupForm::new();
        self.views.registered_phone_number = None;
        self.current_view = View::Signup;
        text_input::focus(text_input::Id::new(NAME_INPUT_ID))
    }
}

// Warnings
impl State {
    fn on_warning_show_modal<T: Into<String>, M: Into<String>>(&mut self, title: T, message: M) {
        let title: String = title.into();
        let message: String = message.into();
        self.views.modals.warning = Some(views::WarningModalState::new(title, message));
    }

    fn on_warning_close_modal(&mut self) {
        self.views.modals.warning = None;
    }

    /// Only a message written by the server is shown to the user, other failures are logged.
    fn on_request_error(&mut self, title: &str, error: SignupError) {
        error!("{}: {}", title, error);
        if let Some(message) = error.server_message() {
            let message = message.to_string();
            self.on_warning_show_modal(title, message);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        services::signup::SignupClient,
        state::{
            cooldown::{DEFAULT_COOLDOWN, MAX_COOLDOWN},
            views::signup,
        },
    };
    use iced::time::Duration;

    fn state() -> State {
        State::new(
            SignupClient::new("http://127.0.0.1:1".to_string()),
            DEFAULT_COOLDOWN,
        )
    }

    fn fill(state: &mut State) {
        let _ = state.update(Msg::SignupUpdateName("Kim".to_string()));
        let _ = state.update(Msg::SignupUpdatePhoneNumber("01012345678".to_string()));
        let _ = state.update(Msg::SignupUpdateCode("123456".to_string()));
        let _ = state.update(Msg::SignupUpdatePassword("secret".to_string()));
    }

    fn warning(state: &State) -> Option<&str> {
        state
            .views
            .modals
            .warning
            .as_ref()
            .map(|w| w.message.as_str())
    }

    fn rejected(text: &str) -> SignupError {
        SignupError::Rejected {
            status_code: 400,
            text: text.to_string(),
        }
    }

    #[test]
    fn test_submit_with_missing_fields() {
        let mut state = state();
        let _ = state.update(Msg::SignupSubmit);
        assert_eq!(warning(&state), Some(signup::MISSING_FIELDS));
        assert!(!state.views.signup.submitting);

        let _ = state.update(Msg::WarningCloseModal);
        assert_eq!(warning(&state), None);
    }

    #[test]
    fn test_submit_with_invalid_fields() {
        let mut state = state();
        fill(&mut state);
        let _ = state.update(Msg::SignupUpdatePhoneNumber("010".to_string()));
        let _ = state.update(Msg::SignupSubmit);
        assert_eq!(warning(&state), Some(signup::INVALID_PHONE_NUMBER));

        let mut state = self::state();
        fill(&mut state);
        let _ = state.update(Msg::SignupUpdatePassword("abc".to_string()));
        let _ = state.update(Msg::SignupSubmit);
        assert_eq!(warning(&state), Some(signup::INVALID_PASSWORD));
        assert!(!state.views.signup.submitting);
    }

    #[test]
    fn test_submit_success() {
        let mut state = state();
        fill(&mut state);
        let _ = state.update(Msg::SignupSubmit);
        assert_eq!(warning(&state), None);
        assert!(state.views.signup.submitting);

        // A second click while the request is in flight is ignored.
        let _ = state.update(Msg::SignupSubmit);
        assert!(state.views.signup.submitting);

        let _ = state.update(Msg::SignupDone(Ok("created".to_string())));
        assert!(!state.views.signup.submitting);
        assert_eq!(state.current_view, View::Signin);
        assert_eq!(warning(&state), Some("Registration successful"));
        assert_eq!(
            state.views.registered_phone_number.as_deref(),
            Some("01012345678")
        );
    }

    #[test]
    fn test_submit_rejected_by_server() {
        let mut state = state();
        fill(&mut state);
        let _ = state.update(Msg::SignupSubmit);
        let _ = state.update(Msg::SignupDone(Err(rejected("Invalid verification code"))));
        assert!(!state.views.signup.submitting);
        assert_eq!(state.current_view, View::Signup);
        assert_eq!(warning(&state), Some("Invalid verification code"));
    }

    #[test]
    fn test_transport_error_is_not_shown() {
        let mut state = state();
        fill(&mut state);
        let _ = state.update(Msg::SignupSubmit);
        let _ = state.update(Msg::SignupDone(Err(SignupError::Http(
            "connection refused".to_string(),
        ))));
        assert!(!state.views.signup.submitting);
        assert_eq!(warning(&state), None);

        let _ = state.update(Msg::VerificationRequest);
        let _ = state.update(Msg::VerificationSent(Err(rejected(""))));
        assert!(!state.views.signup.requesting_code);
        assert_eq!(warning(&state), None);
        assert!(!state.views.signup.cooldown.is_active());
    }

    #[test]
    fn test_verification_request_checks_phone_number() {
        let mut state = state();
        let _ = state.update(Msg::VerificationRequest);
        assert_eq!(warning(&state), Some(signup::MISSING_PHONE_NUMBER));
        assert!(!state.views.signup.requesting_code);

        let _ = state.update(Msg::SignupUpdatePhoneNumber("010-1234-5678".to_string()));
        let _ = state.update(Msg::VerificationRequest);
        assert_eq!(warning(&state), Some(signup::INVALID_PHONE_NUMBER));
        assert!(!state.views.signup.requesting_code);
    }

    #[test]
    fn test_verification_code_cooldown() {
        let mut state = state();
        let _ = state.update(Msg::SignupUpdatePhoneNumber("01012345678".to_string()));

        let start = Instant::now();
        let _ = state.on_verification_request(start);
        assert!(state.views.signup.requesting_code);
        assert!(!state.views.signup.cooldown.is_active());

        let _ = state.on_verification_sent(Ok("Code sent".to_string()), start);
        assert!(!state.views.signup.requesting_code);
        assert_eq!(warning(&state), Some("Code sent"));
        assert!(state.views.signup.cooldown.is_active());
        assert_eq!(state.views.signup.cooldown.remaining(), Some(300));
        let _ = state.update(Msg::WarningCloseModal);

        let _ = state.update(Msg::CooldownTick(start + Duration::from_secs(60)));
        assert_eq!(state.views.signup.cooldown.remaining(), Some(240));

        // Too early: refused without touching the network.
        let _ = state.on_verification_request(start + Duration::from_secs(100));
        assert_eq!(
            warning(&state),
            Some("Requesting a code too quickly. Please try again in 200 seconds.")
        );
        assert!(!state.views.signup.requesting_code);
        let _ = state.update(Msg::WarningCloseModal);

        // The cooldown refusal comes before the phone number checks.
        let _ = state.update(Msg::SignupUpdatePhoneNumber(String::new()));
        let _ = state.on_verification_request(start + Duration::from_secs(101));
        assert_eq!(
            warning(&state),
            Some("Requesting a code too quickly. Please try again in 199 seconds.")
        );
        let _ = state.update(Msg::WarningCloseModal);
        let _ = state.update(Msg::SignupUpdatePhoneNumber("01012345678".to_string()));

        let _ = state.update(Msg::CooldownTick(start + Duration::from_secs(300)));
        assert!(!state.views.signup.cooldown.is_active());
        assert_eq!(state.views.signup.cooldown.remaining(), None);

        let _ = state.on_verification_request(start + Duration::from_secs(300));
        assert_eq!(warning(&state), None);
        assert!(state.views.signup.requesting_code);
    }

    #[test]
    fn test_tick_only_while_cooldown_runs() {
        let mut state = state();
        assert!(!state.needs_tick());

        let start = Instant::now();
        let _ = state.on_verification_sent(Ok("sent".to_string()), start);
        assert!(state.needs_tick());

        let _ = state.update(Msg::CooldownTick(start + Duration::from_secs(150)));
        assert!(state.needs_tick());

        let _ = state.update(Msg::CooldownTick(start + DEFAULT_COOLDOWN));
        assert!(!state.needs_tick());
    }

    #[test]
    fn test_configured_cooldown_duration() {
        let mut state = State::new(
            SignupClient::new("http://127.0.0.1:1".to_string()),
            Duration::from_secs(30),
        );
        let now = Instant::now();
        let _ = state.on_verification_sent(Ok("sent".to_string()), now);
        assert_eq!(state.views.signup.cooldown.remaining(), Some(30));
    }

    #[test]
    fn test_oversized_cooldown_duration_is_capped() {
        let mut state = State::new(
            SignupClient::new("http://127.0.0.1:1".to_string()),
            Duration::MAX,
        );
        let now = Instant::now();
        let _ = state.on_verification_sent(Ok("sent".to_string()), now);
        assert_eq!(
            state.views.signup.cooldown.remaining(),
            Some(MAX_COOLDOWN.as_secs())
        );
    }

    #[test]
    fn test_padded_phone_number_is_not_accepted() {
        let mut state = state();
        fill(&mut state);
        let _ = state.update(Msg::SignupUpdatePhoneNumber(" 01012345678".to_string()));
        assert_eq!(state.views.signup.phone_number.value, " 01012345678");

        let _ = state.update(Msg::VerificationRequest);
        assert_eq!(warning(&state), Some(signup::INVALID_PHONE_NUMBER));
        assert!(!state.views.signup.requesting_code);
        let _ = state.update(Msg::WarningCloseModal);

        let _ = state.update(Msg::SignupSubmit);
        assert_eq!(warning(&state), Some(signup::INVALID_PHONE_NUMBER));
        assert!(!state.views.signup.submitting);
    }

    #[test]
    fn test_navigate_back_to_signup_resets_form() {
        let mut state = state();
        fill(&mut state);
        let _ = state.update(Msg::SignupSubmit);
        let _ = state.update(Msg::SignupDone(Ok(String::new())));
        let _ = state.update(Msg::WarningCloseModal);
        assert_eq!(state.current_view, View::Signin);

        let _ = state.update(Msg::NavigateToSignup);
        assert_eq!(state.current_view, View::Signup);
        assert!(state.views.signup.name.value.is_empty());
        assert!(state.views.signup.password.value.is_empty());
        assert_eq!(state.views.registered_phone_number, None);
    }
}
