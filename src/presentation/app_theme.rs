use iced::widget::{button, container};
use iced::{Background, Border, Color, Shadow, Theme};

use crate::core::models::ThemeMode;

pub fn get_theme(mode: &ThemeMode) -> Theme {
    match mode {
        ThemeMode::Dark => Theme::custom(
            "Dark".to_string(),
            iced::theme::Palette {
                background: Color::from_rgb(0.06, 0.06, 0.08),
                text: Color::from_rgb(1.0, 1.0, 1.0),
                primary: Color::from_rgb(0.26, 0.52, 0.96),
                success: Color::from_rgb(0.2, 0.9, 0.4),
                danger: Color::from_rgb(1.0, 0.3, 0.3),
                warning: Color::from_rgb(1.0, 0.7, 0.0),
            },
        ),
        ThemeMode::Light => Theme::custom(
            "Light".to_string(),
            iced::theme::Palette {
                background: Color::from_rgb(0.95, 0.95, 0.97),
                text: Color::from_rgb(0.1, 0.1, 0.1),
                primary: Color::from_rgb(0.1, 0.4, 0.85),
                success: Color::from_rgb(0.1, 0.7, 0.3),
                danger: Color::from_rgb(0.9, 0.2, 0.2),
                warning: Color::from_rgb(0.9, 0.6, 0.0),
            },
        ),
    }
}

fn solid_button(background: Color, text_color: Color, snap: bool) -> button::Style {
    button::Style {
        background: Some(Background::Color(background)),
        text_color,
        border: Border {
            color: background,
            width: 1.0,
            radius: 6.0.into(),
        },
        shadow: Shadow::default(),
        snap,
    }
}

fn disabled_button() -> button::Style {
    button::Style {
        background: Some(Background::Color(Color::from_rgb(0.3, 0.3, 0.3))),
        text_color: Color::from_rgb(0.5, 0.5, 0.5),
        border: Border {
            color: Color::from_rgb(0.4, 0.4, 0.4),
            width: 1.0,
            radius: 6.0.into(),
        },
        shadow: Shadow::default(),
        snap: false,
    }
}

/// Blue search button.
pub fn primary_button_style(_theme: &Theme, status: button::Status) -> button::Style {
    match status {
        button::Status::Active => solid_button(Color::from_rgb(0.26, 0.52, 0.96), Color::WHITE, false),
        button::Status::Hovered => solid_button(Color::from_rgb(0.36, 0.6, 0.98), Color::WHITE, false),
        button::Status::Pressed => solid_button(Color::from_rgb(0.18, 0.42, 0.84), Color::WHITE, true),
        button::Status::Disabled => disabled_button(),
    }
}

/// Muted play button inside a video card.
pub fn play_button_style(_theme: &Theme, status: button::Status) -> button::Style {
    match status {
        button::Status::Active => solid_button(
            Color::from_rgb(0.25, 0.25, 0.25),
            Color::from_rgb(0.85, 0.85, 0.85),
            false,
        ),
        button::Status::Hovered => solid_button(
            Color::from_rgb(0.35, 0.35, 0.35),
            Color::from_rgb(0.95, 0.95, 0.95),
            false,
        ),
        button::Status::Pressed => solid_button(
            Color::from_rgb(0.2, 0.2, 0.2),
            Color::from_rgb(0.8, 0.8, 0.8),
            true,
        ),
        button::Status::Disabled => disabled_button(),
    }
}

pub fn video_card_style(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color::from_rgba(0.2, 0.2, 0.2, 0.3))),
        border: Border {
            color: Color::from_rgba(0.4, 0.4, 0.4, 0.3),
            width: 1.0,
            radius: 8.0.into(),
        },
        ..Default::default()
    }
}

pub fn player_surface_style(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color::BLACK)),
        text_color: Some(Color::WHITE),
        border: Border {
            color: Color::BLACK,
            width: 0.0,
            radius: 6.0.into(),
        },
        ..Default::default()
    }
}
