use crate::{
    state::{
        cooldown::format_remaining,
        message::Msg,
        update::{CODE_INPUT_ID, NAME_INPUT_ID},
        State,
    },
    views::layout,
};
use iced::{widget::Space, Alignment, Length};
use signup_ui::{
    component::{button, card, form, text},
    theme,
    widget::*,
};

pub fn signup_view(state: &State) -> Element<'_, Msg> {
    let signup = &state.views.signup;
    let editable = !signup.submitting;

    let name = if editable {
        form::Form::new("Name", &signup.name, Msg::SignupUpdateName)
    } else {
        form::Form::new_disabled("Name", &signup.name)
    }
    .id(NAME_INPUT_ID)
    .size(16)
    .padding(10);

    let phone_number = if editable {
        form::Form::new(
            "Phone number",
            &signup.phone_number,
            Msg::SignupUpdatePhoneNumber,
        )
    } else {
        form::Form::new_disabled("Phone number", &signup.phone_number)
    }
    .size(16)
    .padding(10);

    let code = if editable {
        form::Form::new("Verification code", &signup.code, Msg::SignupUpdateCode)
    } else {
        form::Form::new_disabled("Verification code", &signup.code)
    }
    .id(CODE_INPUT_ID)
    .size(16)
    .padding(10);

    let timer = signup
        .cooldown
        .remaining()
        .map(|secs| text::p2_regular(format_remaining(secs)).style(theme::text::warning));

    let btn_send_code = button::secondary(
        None,
        if signup.requesting_code {
            "Sending..."
        } else {
            "Send code"
        },
    )
    .on_press_maybe(
        signup
            .can_request_code()
            .then_some(Msg::VerificationRequest),
    )
    .width(Length::Fixed(140.0));

    let code_row = Row::new()
        .push(
            Column::new()
                .push(code)
                .push_maybe(timer)
                .spacing(5)
                .width(Length::Fill),
        )
        .push(btn_send_code)
        .spacing(10)
        .align_y(Alignment::Start);

    let password = if editable {
        form::Form::new("Password", &signup.password, Msg::SignupUpdatePassword)
            .on_submit_maybe(signup.can_submit().then_some(Msg::SignupSubmit))
    } else {
        form::Form::new_disabled("Password", &signup.password)
    }
    .secure(true)
    .size(16)
    .padding(10);

    let btn_submit = button::primary(
        None,
        if signup.submitting {
            "Signing up..."
        } else {
            "Sign up"
        },
    )
    .on_press_maybe(signup.can_submit().then_some(Msg::SignupSubmit))
    .width(Length::Fill);

    let content = Column::new()
        .push(name)
        .push(phone_number)
        .push(code_row)
        .push(password)
        .push(Space::with_height(10))
        .push(btn_submit)
        .spacing(20)
        .padding(20);

    layout("Sign up", card::simple(content))
}
