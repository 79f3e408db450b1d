use iced::widget::{button, column, container, row, scrollable, text, Space};
use iced::{Element, Length};

use phraselator_core::faq::domain::faq_table::FaqTable;
use phraselator_core::speech::domain::language::Language;

use crate::app::Message;

/// Full-window listing of every FAQ question in one language.
pub fn view(table: &FaqTable, language: Language) -> Element<'_, Message> {
    let header = row![
        text(format!("{language} questions")).size(18),
        Space::new().width(Length::Fill),
        button(text("Close").size(13))
            .on_press(Message::CloseListing)
            .padding([6, 14])
            .style(button::secondary),
    ]
    .align_y(iced::Alignment::Center);

    let body = scrollable(text(table.listing(language)).size(14)).height(Length::Fill);

    container(column![header, Space::new().height(12), body].height(Length::Fill))
        .padding(16)
        .height(Length::Fill)
        .into()
}
