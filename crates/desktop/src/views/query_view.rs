use iced::widget::{button, column, container, pick_list, radio, row, scrollable, text, Space};
use iced::{Element, Length};

use phraselator_core::faq::domain::faq_table::QuestionRecord;
use phraselator_core::speech::domain::language::Language;

use crate::app::{App, Message};
use crate::settings::Appearance;

pub fn view(app: &App) -> Element<'_, Message> {
    let header = row![
        text("Alaska Wage and Hour FAQ").size(18),
        Space::new().width(Length::Fill),
        pick_list(
            Appearance::ALL,
            Some(app.settings.appearance),
            Message::AppearanceChanged,
        )
        .text_size(12),
    ]
    .align_y(iced::Alignment::Center);

    let welcome = text(
        "Press the button below and ask a question about Alaska's wage and hour \
         law. The closest questions from the FAQ are offered for you to pick from.",
    )
    .size(14);

    let listing_buttons = row(Language::ALL
        .iter()
        .map(|&language| {
            button(text(format!("{language} question list")).size(13))
                .on_press(Message::ShowListing(language))
                .padding([6, 14])
                .style(button::secondary)
                .into()
        })
        .collect::<Vec<_>>())
    .spacing(10);

    let radios = row(std::iter::once(text("Ask in:").size(14).into())
        .chain(Language::ALL.iter().map(|&language| {
            radio(
                language.to_string(),
                language,
                Some(app.language),
                Message::LanguageSelected,
            )
            .size(16)
            .text_size(14)
            .into()
        }))
        .collect::<Vec<_>>())
    .spacing(14)
    .align_y(iced::Alignment::Center);

    let record_button = if app.recording {
        button(text("Listening\u{2026}").size(15))
            .padding([12, 24])
            .width(Length::Fill)
    } else {
        button(text("Ask a Question").size(15))
            .on_press(Message::Record)
            .padding([12, 24])
            .width(Length::Fill)
    };

    let mut content = column![
        header,
        Space::new().height(10),
        welcome,
        Space::new().height(12),
        listing_buttons,
        Space::new().height(12),
        radios,
        Space::new().height(12),
        record_button,
    ]
    .spacing(0);

    if let Some(error) = &app.error {
        content = content.push(Space::new().height(10)).push(
            text(error.clone())
                .size(13)
                .style(iced::widget::text::danger),
        );
    }

    if let Some(transcription) = &app.transcription {
        content = content.push(Space::new().height(10)).push(
            text(format!("Heard: \u{201c}{transcription}\u{201d}"))
                .size(13)
                .style(iced::widget::text::secondary),
        );
    }

    if !app.candidates.is_empty() {
        let labels: Vec<String> = app
            .candidates
            .iter()
            .map(|c| c.label(app.language))
            .collect();

        content = content
            .push(Space::new().height(12))
            .push(text("Did you mean:").size(14))
            .push(Space::new().height(6))
            .push(
                row![
                    pick_list(labels, app.selected.clone(), Message::CandidateSelected)
                        .width(Length::Fill)
                        .text_size(14),
                    button(text("Show Answer").size(13))
                        .on_press(Message::Confirm)
                        .padding([8, 16]),
                ]
                .spacing(10)
                .align_y(iced::Alignment::Center),
            );
    }

    if let Some(record) = &app.confirmed {
        content = content
            .push(Space::new().height(14))
            .push(answer_panel(record));
    }

    let footer = container(
        button(text("labor.alaska.gov/lss/whfaq.htm").size(11))
            .on_press(Message::OpenFaqWebsite)
            .style(button::text),
    )
    .width(Length::Fill)
    .center_x(Length::Fill)
    .padding([4, 0]);

    column![
        container(scrollable(content).height(Length::Fill))
            .padding(16)
            .height(Length::Fill),
        footer,
    ]
    .height(Length::Fill)
    .into()
}

fn answer_panel(record: &QuestionRecord) -> Element<'_, Message> {
    container(
        column![
            block("QUESTION (ENGLISH)", &record.english.question),
            block("ANSWER (ENGLISH)", &record.english.answer),
            block("QUESTION (YUP'IK)", &record.yupik.question),
            block("ANSWER (YUP'IK)", &record.yupik.answer),
        ]
        .spacing(10),
    )
    .padding([14, 16])
    .style(container::rounded_box)
    .width(Length::Fill)
    .into()
}

fn block<'a>(heading: &str, body: &str) -> Element<'a, Message> {
    column![
        text(heading.to_owned())
            .size(11)
            .style(iced::widget::text::secondary),
        text(body.to_owned()).size(14),
    ]
    .spacing(2)
    .into()
}
