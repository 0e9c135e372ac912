use iced::widget::{button, column, container, row, text, Space};
use iced::{font, Alignment, Element, Font, Length};

use crate::core::models::VideoEntry;
use crate::core::services::video_entry_assembler;
use crate::presentation::app_theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VideoGridMessage {
    Play(usize),
}

const CAPTION_FONT: Font = Font {
    weight: font::Weight::Bold,
    ..Font::DEFAULT
};

/// Splits the playable entries into rows of `columns` cards, keeping each
/// entry's index into `entries`.
pub fn layout_grid(entries: &[VideoEntry], columns: usize) -> Vec<Vec<(usize, &VideoEntry)>> {
    let columns = columns.max(1);
    let playable: Vec<(usize, &VideoEntry)> = video_entry_assembler::playable(entries).collect();

    playable.chunks(columns).map(|chunk| chunk.to_vec()).collect()
}

pub fn render_video_grid(entries: &[VideoEntry], columns: usize) -> Element<'_, VideoGridMessage> {
    let columns = columns.max(1);
    let mut grid = column![].spacing(16).width(Length::Fill);

    for cards in layout_grid(entries, columns) {
        let mut grid_row = row![].spacing(16).width(Length::Fill);
        let filled = cards.len();

        for (index, entry) in cards {
            grid_row = grid_row.push(render_video_card(index, entry));
        }
        for _ in filled..columns {
            grid_row = grid_row.push(Space::new().width(Length::FillPortion(1)));
        }

        grid = grid.push(grid_row);
    }

    grid.into()
}

fn render_video_card(index: usize, entry: &VideoEntry) -> Element<'_, VideoGridMessage> {
    let player_surface = container(text("🎬").size(40))
        .width(Length::Fill)
        .height(Length::Fixed(140.0))
        .center_x(Length::Fill)
        .center_y(Length::Fixed(140.0))
        .style(app_theme::player_surface_style);

    let title = text(entry.short_title()).size(14).width(Length::Fill).center();

    let caption = text(entry.offset_caption())
        .size(12)
        .font(CAPTION_FONT)
        .width(Length::Fill)
        .center();

    let play_btn = button(
        row![text("▶").size(14), text("Play").size(14)]
            .spacing(8)
            .align_y(Alignment::Center),
    )
    .padding([8, 24])
    .style(app_theme::play_button_style)
    .on_press(VideoGridMessage::Play(index));

    let content = column![player_surface, title, caption, play_btn]
        .spacing(8)
        .padding(12)
        .width(Length::Fill)
        .align_x(Alignment::Center);

    container(content)
        .width(Length::FillPortion(1))
        .style(app_theme::video_card_style)
        .into()
}
