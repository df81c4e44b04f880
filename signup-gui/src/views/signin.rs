use crate::{
    state::{message::Msg, State},
    views::layout,
};
use iced::{widget::Space, Length};
use signup_ui::{
    component::{button, card, text},
    theme,
    widget::*,
};

pub fn signin_view(state: &State) -> Element<'_, Msg> {
    let account = state
        .views
        .registered_phone_number
        .as_deref()
        .map(|phone_number| {
            text::p1_medium(format!("Sign in with {} and your password.", phone_number))
                .style(theme::text::secondary)
        });

    let content = Column::new()
        .push(text::h3("Your account has been created").style(theme::text::success))
        .push_maybe(account)
        .push(Space::with_height(10))
        .push(
            button::secondary(None, "Create another account")
                .on_press(Msg::NavigateToSignup)
                .width(Length::Fill),
        )
        .spacing(20)
        .padding(20);

    layout("Sign in", card::simple(content))
}
