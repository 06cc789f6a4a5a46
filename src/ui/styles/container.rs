// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Sheet surface with the given opacity and corner radius.
///
/// The surface and its text follow the theme background, faded together so
/// the sheet reads as one layer while it is dragged away.
pub fn sheet(opacity: f32, radius: f32) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let palette = theme.extended_palette();
        let alpha = opacity.clamp(0.0, 1.0);
        let surface = palette.background.base.color;
        let text = palette.background.base.text;

        container::Style {
            background: Some(Background::Color(Color {
                a: surface.a * alpha,
                ..surface
            })),
            text_color: Some(Color {
                a: text.a * alpha,
                ..text
            }),
            border: Border {
                radius: radius.max(0.0).into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }
}

/// Layer drawn over a custom sheet background so it fades with the sheet.
pub fn veil(opacity: f32) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let base = theme.extended_palette().background.base.color;
        container::Style {
            background: Some(Background::Color(Color {
                a: 1.0 - opacity.clamp(0.0, 1.0),
                ..base
            })),
            ..Default::default()
        }
    }
}
