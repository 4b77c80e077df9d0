// SPDX-License-Identifier: MPL-2.0
//! Demo controls with the toaster layered on top.

use super::{App, Message};
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::notifications::{toast, Position, ToastState};
use iced::alignment::Horizontal;
use iced::widget::{button, pick_list, Column, Container, Row, Stack, Text};
use iced::{Element, Length};

pub fn view(app: &App) -> Element<'_, Message> {
    let states = [
        ToastState::Success,
        ToastState::Error,
        ToastState::Warning,
        ToastState::Info,
        ToastState::Action,
        ToastState::Loading,
    ]
    .into_iter()
    .fold(Row::new().spacing(spacing::XS), |row, state| {
        row.push(button(Text::new(state.default_title())).on_press(Message::Show(state)))
    });

    let uploads = Row::new()
        .spacing(spacing::XS)
        .push(button(Text::new("Upload")).on_press(Message::StartUpload { fail: false }))
        .push(
            button(Text::new("Upload (fails)")).on_press(Message::StartUpload { fail: true }),
        )
        .push(button(Text::new("Clear")).on_press(Message::Clear));

    let position = pick_list(
        Position::ALL,
        Some(app.position),
        Message::PositionSelected,
    );

    let controls = Column::new()
        .spacing(spacing::MD)
        .align_x(Horizontal::Center)
        .push(Text::new("Iced Toaster").size(typography::TITLE * 2.0))
        .push(states)
        .push(uploads)
        .push(position);

    let controls = Container::new(controls)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::MD)
        .center_x(Length::Fill)
        .center_y(Length::Fill);

    Stack::new()
        .push(controls)
        .push(toast::view(&app.toaster).map(Message::Toaster))
        .into()
}
