use iced::widget::{text_editor, Button, Column, Container, Row, Space, Text, TextInput};
use iced::{Alignment, Color, Element, Font, Length};

use crate::client::gui::views::logger::logger_view;
use crate::client::gui::widgets::{output_panel, status_chip};
use crate::client::models::app_state::WorkbenchState;
use crate::client::models::messages::Message;
use crate::client::models::options::OptionField;
use crate::common::models::{
    DEFAULT_MAX_CLAUSE_LENGTH, DEFAULT_MIN_CLAUSE_LENGTH, DEFAULT_NUM_CLAUSES, DEFAULT_NUM_VARS,
};

const BG_MAIN: Color = Color::from_rgb(0.06, 0.07, 0.18);
const CARD_BG: Color = Color::from_rgb(0.18, 0.19, 0.36);
const INPUT_BG: Color = Color::from_rgb(0.12, 0.13, 0.26);
const TEXT_PRIMARY: Color = Color::WHITE;
const TEXT_SECONDARY: Color = Color::from_rgb(0.7, 0.7, 0.7);

const BOLD_FONT: Font = Font {
    family: iced::font::Family::SansSerif,
    weight: iced::font::Weight::Bold,
    ..Font::DEFAULT
};

fn bg_main_appearance(_: &iced::Theme) -> iced::widget::container::Appearance {
    iced::widget::container::Appearance {
        background: Some(iced::Background::Color(BG_MAIN)),
        text_color: Some(TEXT_PRIMARY),
        ..Default::default()
    }
}

fn card_appearance(_: &iced::Theme) -> iced::widget::container::Appearance {
    iced::widget::container::Appearance {
        background: Some(iced::Background::Color(CARD_BG)),
        text_color: Some(TEXT_PRIMARY),
        border: iced::Border {
            width: 0.0,
            color: Color::TRANSPARENT,
            radius: 16.0.into(),
        },
        shadow: iced::Shadow {
            offset: iced::Vector::new(0.0, 4.0),
            blur_radius: 12.0,
            color: Color::from_rgba(0.0, 0.0, 0.0, 0.3),
        },
    }
}

fn header_appearance(_: &iced::Theme) -> iced::widget::container::Appearance {
    iced::widget::container::Appearance {
        background: Some(iced::Background::Color(INPUT_BG)),
        text_color: Some(TEXT_PRIMARY),
        ..Default::default()
    }
}

// Labeled numeric field; the placeholder shows the value used when left blank
fn option_input<'a>(state: &'a WorkbenchState, label: &'a str, field: OptionField, placeholder: String) -> Element<'a, Message> {
    Column::new()
        .spacing(6)
        .width(Length::Fill)
        .push(Text::new(label).size(13).style(TEXT_SECONDARY))
        .push(
            TextInput::new(&placeholder, state.option_fields.get(field))
                .on_input(move |value| Message::OptionChanged(field, value))
                .on_submit(Message::Generate)
                .padding(10)
                .size(14),
        )
        .into()
}

fn action_button(label: &str, message: Message, enabled: bool, style: iced::theme::Button) -> Button<'_, Message> {
    let button = Button::new(Text::new(label).font(BOLD_FONT).size(14))
        .style(style)
        .padding([10, 18]);
    // a pending request keeps its button without a handler, i.e. disabled
    if enabled {
        button.on_press(message)
    } else {
        button
    }
}

pub fn view<'a>(state: &'a WorkbenchState, editor: &'a text_editor::Content) -> Element<'a, Message> {
    let header = Container::new(
        Row::new()
            .spacing(16)
            .align_items(Alignment::Center)
            .push(
                Column::new()
                    .spacing(4)
                    .push(Text::new("Formula Workbench").font(BOLD_FONT).size(28).style(TEXT_PRIMARY))
                    .push(Text::new("Generate and solve CNF formulas with tinydpll").size(14).style(TEXT_SECONDARY)),
            )
            .push(Space::new(Length::Fill, Length::Fixed(0.0)))
            .push(status_chip::view(&state.status)),
    )
    .padding([20, 24])
    .width(Length::Fill)
    .style(iced::theme::Container::Custom(Box::new(header_appearance)));

    let options_row = Row::new()
        .spacing(12)
        .push(option_input(state, "Variables", OptionField::Vars, DEFAULT_NUM_VARS.to_string()))
        .push(option_input(state, "Clauses", OptionField::Clauses, DEFAULT_NUM_CLAUSES.to_string()))
        .push(option_input(state, "Min clause length", OptionField::MinClause, DEFAULT_MIN_CLAUSE_LENGTH.to_string()))
        .push(option_input(state, "Max clause length", OptionField::MaxClause, DEFAULT_MAX_CLAUSE_LENGTH.to_string()))
        .push(option_input(state, "Seed", OptionField::Seed, "random".to_string()));

    let buttons = Row::new()
        .spacing(12)
        .push(action_button("Load sample", Message::LoadSample, true, iced::theme::Button::Secondary))
        .push(action_button("Generate", Message::Generate, state.generate_enabled(), iced::theme::Button::Primary))
        .push(action_button("Solve", Message::Solve, state.solve_enabled(), iced::theme::Button::Positive));

    let formula_card = Container::new(
        Column::new()
            .spacing(14)
            .padding(20)
            .push(Text::new("Formula (DIMACS CNF)").font(BOLD_FONT).size(18))
            .push(options_row)
            .push(buttons)
            .push(
                text_editor(editor)
                    .on_action(Message::FormulaEdited)
                    .font(Font::MONOSPACE)
                    .height(Length::Fixed(260.0)),
            ),
    )
    .width(Length::Fill)
    .style(iced::theme::Container::Custom(Box::new(card_appearance)));

    let output_card = Container::new(
        Column::new()
            .spacing(14)
            .padding(20)
            .push(Text::new("Solver output").font(BOLD_FONT).size(18))
            .push(output_panel::view(&state.output, state.verdict.as_ref())),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .style(iced::theme::Container::Custom(Box::new(card_appearance)));

    let logger_bar: Element<Message> = if !state.logger.is_empty() {
        Container::new(logger_view(&state.logger))
            .width(Length::Fill)
            .padding([8, 12, 0, 12])
            .into()
    } else {
        Space::new(Length::Fill, Length::Fixed(0.0)).into()
    };

    let body = Column::new()
        .spacing(20)
        .padding([20, 24])
        .push(formula_card)
        .push(output_card)
        .width(Length::Fill)
        .height(Length::Fill);

    Container::new(
        Column::new()
            .push(logger_bar)
            .push(header)
            .push(body)
            .width(Length::Fill)
            .height(Length::Fill),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .style(iced::theme::Container::Custom(Box::new(bg_main_appearance)))
    .into()
}
