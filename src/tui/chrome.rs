// SPDX-FileCopyrightText: 2026 Guidepost Contributors
// SPDX-License-Identifier: MIT

// Chrome helpers shared by the draw path. Included into tui/mod.rs.

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}

fn region_rect(region: Region) -> Rect {
    Rect {
        x: region.x,
        y: region.y,
        width: region.width,
        height: region.height,
    }
}

fn rect_region(rect: Rect) -> Region {
    Region::new(rect.x, rect.y, rect.width, rect.height)
}

/// Positions a tooltip box next to its target region, clamped to `area`.
fn tooltip_rect(target: Region, placement: Placement, width: u16, area: Rect) -> Rect {
    let height = 1u16;
    let start_x = target.x;
    let end_x = (target.x + target.width).saturating_sub(width);
    let center_x = (target.x + target.width / 2).saturating_sub(width / 2);

    let (x, y) = match placement {
        Placement::Top => (center_x, target.y.saturating_sub(height)),
        Placement::TopStart => (start_x, target.y.saturating_sub(height)),
        Placement::TopEnd => (end_x, target.y.saturating_sub(height)),
        Placement::Bottom => (center_x, target.y + target.height),
        Placement::BottomStart => (start_x, target.y + target.height),
        Placement::BottomEnd => (end_x, target.y + target.height),
        Placement::Left => (target.x.saturating_sub(width), target.y),
        Placement::Right => (target.x + target.width, target.y),
    };

    let max_x = area.width.saturating_sub(width);
    let max_y = area.height.saturating_sub(height);
    Rect {
        x: x.min(max_x),
        y: y.min(max_y),
        width: width.min(area.width),
        height,
    }
}

/// Flattens help markup to plain text for the terminal: tags are dropped,
/// their contents kept.
fn html_text(html: &str) -> String {
    let mut out = String::with_capacity(html.len());
    let mut in_tag = false;
    for ch in html.chars() {
        match ch {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => out.push(ch),
            _ => {}
        }
    }
    out.trim().to_owned()
}

fn banner_line<'a>(banner: &'a BannerView, theme: TuiTheme, width: u16) -> Line<'a> {
    let controls = format!("[{} (h)]  [x (c)]", banner.context.label());
    let pad = (width as usize)
        .saturating_sub(banner.text.chars().count() + controls.chars().count() + 3);
    Line::from(vec![
        Span::styled(format!(" {}", banner.text), theme.banner_style()),
        Span::styled(" ".repeat(pad.max(1)), theme.banner_style()),
        Span::styled(controls, theme.banner_style()),
        Span::styled(" ", theme.banner_style()),
    ])
}

fn dialog_button_line(buttons: &[DialogButton], focus: usize, theme: TuiTheme) -> Line<'static> {
    let mut spans = Vec::with_capacity(buttons.len() * 2);
    for (index, button) in buttons.iter().enumerate() {
        if index > 0 {
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled(
            format!("[ {} ]", button.label),
            theme.button_style(button.primary, index == focus),
        ));
    }
    Line::from(spans)
}

fn push_footer_entry(spans: &mut Vec<Span<'static>>, key: &'static str, label: &'static str) {
    if !spans.is_empty() {
        spans.push(Span::styled("  ", Style::default()));
    }
    spans.push(Span::styled(key, Style::default().fg(FOOTER_KEY_COLOR)));
    spans.push(Span::styled(" ", Style::default()));
    spans.push(Span::styled(label, Style::default().fg(FOOTER_LABEL_COLOR)));
}
