use crate::tui::app::{App, View};
use crate::tui::theme::Theme;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

pub fn render(frame: &mut Frame, app: &App) {
    let theme = &app.theme;
    let area = frame.area();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(0), Constraint::Length(1)])
        .split(area);
    render_topbar(frame, app, chunks[0], theme);
    match app.view {
        View::Stats => render_stats(frame, app, chunks[1], theme),
        _ => render_histogram(frame, app, chunks[1], theme),
    }
    render_bottombar(frame, app, chunks[2], theme);
    if app.view == View::Help {
        render_help(frame, app, area);
    }
}

fn render_topbar(frame: &mut Frame, app: &App, area: Rect, theme: &Theme) {
    let info = if let Some(s) = &app.summary {
        format!(
            " {} | {} samples | min {} | max {}",
            app.input_path, s.count, s.min, s.max
        )
    } else {
        format!(" {}", app.input_path)
    };
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            info,
            Style::default().fg(theme.fg).add_modifier(Modifier::BOLD),
        ))),
        area,
    );
}

fn render_histogram(frame: &mut Frame, app: &App, area: Rect, theme: &Theme) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(app.config.display.title.clone());
    let Some(hist) = &app.histogram else {
        frame.render_widget(Paragraph::new(app.status_msg.clone()).block(block), area);
        return;
    };
    let mut lines = Vec::new();
    lines.push(Line::from(Span::styled(
        format!("{:>23}  {}", "Number", "Frequency of Number"),
        Style::default().fg(theme.axis).add_modifier(Modifier::BOLD),
    )));
    let max_c = hist.max_count();
    let bar_width = (area.width as usize).saturating_sub(40).max(10);
    // keep the selected bin roughly centered in the visible window
    let rows = (area.height as usize).saturating_sub(3).max(1);
    let skip = app
        .selected_bin
        .saturating_sub(rows / 2)
        .min(hist.bins.len().saturating_sub(rows));
    for (i, bin) in hist.bins.iter().enumerate().skip(skip).take(rows) {
        let blen = (bin.count as f64 / max_c as f64 * bar_width as f64) as usize;
        let text = format!(
            "{:>10.3}-{:>10.3}  |{:<bw$}| {}",
            bin.range_start,
            bin.range_end,
            "█".repeat(blen),
            bin.count,
            bw = bar_width
        );
        let style = if i == app.selected_bin {
            Style::default().fg(theme.highlight).add_modifier(Modifier::REVERSED)
        } else {
            Style::default().fg(theme.bar)
        };
        lines.push(Line::from(Span::styled(text, style)));
    }
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_stats(frame: &mut Frame, app: &App, area: Rect, theme: &Theme) {
    let mut lines = Vec::new();
    if let Some(s) = &app.summary {
        lines.push(Line::from(vec![
            Span::styled("Samples:   ", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(s.count.to_string()),
        ]));
        lines.push(Line::from(format!("Minimum:   {}", s.min)));
        lines.push(Line::from(format!("Maximum:   {}", s.max)));
        lines.push(Line::from(format!("Mean:      {:.6}", s.mean)));
        lines.push(Line::from(format!("Stddev:    {:.6}", s.stddev)));
    } else {
        lines.push(Line::from(app.status_msg.clone()));
    }
    if let Some(hist) = &app.histogram {
        if let Some(bin) = hist.bins.get(app.selected_bin) {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                format!("Bin {}/{}", app.selected_bin + 1, hist.bins.len()),
                Style::default().fg(theme.highlight).add_modifier(Modifier::BOLD),
            )));
            lines.push(Line::from(format!(
                "Range:     {} to {}",
                bin.range_start, bin.range_end
            )));
            lines.push(Line::from(format!("Count:     {}", bin.count)));
            let pct = bin.count as f64 / hist.total.max(1) as f64 * 100.0;
            lines.push(Line::from(format!("Share:     {pct:.2}%")));
        }
    }
    frame.render_widget(
        Paragraph::new(lines)
            .block(Block::default().borders(Borders::ALL).title("Sample Statistics (S)"))
            .wrap(Wrap { trim: false }),
        area,
    );
}

fn render_bottombar(frame: &mut Frame, app: &App, area: Rect, theme: &Theme) {
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            format!(" {}", app.status_msg),
            Style::default().fg(theme.axis),
        ))),
        area,
    );
}

fn render_help(frame: &mut Frame, app: &App, area: Rect) {
    let popup = centered_rect(60, 60, area);
    frame.render_widget(Clear, popup);
    let binds = [
        ("j / Down", "next bin"),
        ("k / Up", "previous bin"),
        ("PgDn / PgUp", "move 10 bins"),
        ("g / Home", "first bin"),
        ("G / End", "last bin"),
        ("H", "histogram view"),
        ("S / Enter", "statistics view"),
        ("?", "toggle this help"),
        ("q", "quit"),
    ];
    let lines: Vec<Line> = binds
        .iter()
        .skip(app.help_scroll)
        .map(|(key, desc)| Line::from(format!("{key:<14} {desc}")))
        .collect();
    frame.render_widget(
        Paragraph::new(lines)
            .block(Block::default().borders(Borders::ALL).title("Help (?)"))
            .wrap(Wrap { trim: false }),
        popup,
    );
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
