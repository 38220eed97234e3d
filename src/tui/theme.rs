// SPDX-FileCopyrightText: 2026 Guidepost Contributors
// SPDX-License-Identifier: MIT

use ratatui::style::{Color, Modifier, Style};

use crate::model::Skin;
use crate::ui::TooltipTheme;

/// Skin-keyed styles for the shell chrome, dialogs, and tooltips.
#[derive(Debug, Clone, Copy)]
pub(crate) struct TuiTheme {
    skin: Skin,
}

impl TuiTheme {
    pub(crate) fn new(skin: Skin) -> Self {
        Self { skin }
    }

    pub(crate) fn skin(self) -> Skin {
        self.skin
    }

    pub(crate) fn base_style(self) -> Style {
        match self.skin {
            Skin::Default => Style::default(),
            Skin::Dark => Style::default().fg(Color::Gray).bg(Color::Black),
        }
    }

    pub(crate) fn banner_style(self) -> Style {
        self.base_style()
            .fg(Color::Black)
            .bg(Color::LightBlue)
            .add_modifier(Modifier::BOLD)
    }

    pub(crate) fn panel_border_style(self) -> Style {
        match self.skin {
            Skin::Default => Style::default().fg(Color::DarkGray),
            Skin::Dark => Style::default().fg(Color::Gray),
        }
    }

    pub(crate) fn dialog_border_style(self) -> Style {
        self.base_style().fg(Color::LightGreen)
    }

    pub(crate) fn button_style(self, primary: bool, focused: bool) -> Style {
        let mut style = if primary {
            self.base_style().fg(Color::LightGreen).add_modifier(Modifier::BOLD)
        } else {
            self.base_style().fg(Color::Gray)
        };
        if focused {
            style = style.add_modifier(Modifier::REVERSED);
        }
        style
    }

    pub(crate) fn scrim_style(self) -> Style {
        Style::default().fg(Color::DarkGray).bg(Color::Black)
    }

    pub(crate) fn tooltip_style(self, theme: TooltipTheme) -> Style {
        match theme {
            TooltipTheme::Light => Style::default().fg(Color::Black).bg(Color::White),
            TooltipTheme::Dark => Style::default().fg(Color::White).bg(Color::DarkGray),
        }
    }
}

/// Parses an element's inline style string (`fg=<color>;bg=<color>;bold;...`)
/// into a ratatui style. Unknown entries are ignored so a foreign style
/// string degrades instead of failing.
pub(crate) fn parse_inline_style(raw: &str) -> Style {
    let mut style = Style::default();
    for entry in raw.split(';') {
        let entry = entry.trim();
        if entry.is_empty() {
            continue;
        }
        if let Some((key, value)) = entry.split_once('=') {
            match (key.trim(), parse_color(value.trim())) {
                ("fg", Some(color)) => style = style.fg(color),
                ("bg", Some(color)) => style = style.bg(color),
                _ => {}
            }
        } else {
            match entry {
                "bold" => style = style.add_modifier(Modifier::BOLD),
                "italic" => style = style.add_modifier(Modifier::ITALIC),
                "underline" => style = style.add_modifier(Modifier::UNDERLINED),
                "reversed" => style = style.add_modifier(Modifier::REVERSED),
                _ => {}
            }
        }
    }
    style
}

fn parse_color(value: &str) -> Option<Color> {
    let lower = value.to_ascii_lowercase();
    if let Some(hex) = lower.strip_prefix('#') {
        if hex.len() == 6 && hex.chars().all(|ch| ch.is_ascii_hexdigit()) {
            let rgb = u32::from_str_radix(hex, 16).ok()?;
            return Some(Color::Rgb(
                ((rgb >> 16) & 0xFF) as u8,
                ((rgb >> 8) & 0xFF) as u8,
                (rgb & 0xFF) as u8,
            ));
        }
        return None;
    }

    match lower.as_str() {
        "black" => Some(Color::Black),
        "red" => Some(Color::Red),
        "green" => Some(Color::Green),
        "yellow" => Some(Color::Yellow),
        "blue" => Some(Color::Blue),
        "magenta" => Some(Color::Magenta),
        "cyan" => Some(Color::Cyan),
        "white" => Some(Color::White),
        "gray" => Some(Color::Gray),
        "darkgray" => Some(Color::DarkGray),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use ratatui::style::{Color, Modifier, Style};

    use super::parse_inline_style;

    #[test]
    fn parses_spotlight_style_entries() {
        let style = parse_inline_style("fg=black;bg=yellow;bold");
        assert_eq!(
            style,
            Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        );
    }

    #[test]
    fn parses_hex_colors() {
        let style = parse_inline_style("fg=#1a2b3c");
        assert_eq!(style.fg, Some(Color::Rgb(0x1a, 0x2b, 0x3c)));
    }

    #[test]
    fn unknown_entries_are_ignored() {
        let style = parse_inline_style("blink;fg=nope;border=1px");
        assert_eq!(style, Style::default());
    }

    #[test]
    fn empty_style_is_default() {
        assert_eq!(parse_inline_style("  "), Style::default());
    }
}
