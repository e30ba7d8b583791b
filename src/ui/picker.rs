//! File selection screen shown before the quiz starts.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::picker::SourcePicker;

pub fn render(frame: &mut Frame, area: Rect, picker: &SourcePicker) {
    let chunks = Layout::vertical([
        Constraint::Length(2),
        Constraint::Fill(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .margin(1)
    .split(area);

    render_title(frame, chunks[0]);
    render_candidates(frame, chunks[1], picker);
    render_selection_status(frame, chunks[2], picker);
    render_controls(frame, chunks[3]);
}

fn render_title(frame: &mut Frame, area: Rect) {
    let widget = Paragraph::new("Choose question files")
        .bold()
        .fg(Color::Cyan)
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Color::DarkGray),
        );
    frame.render_widget(widget, area);
}

fn render_candidates(frame: &mut Frame, area: Rect, picker: &SourcePicker) {
    let lines: Vec<Line> = picker
        .candidates()
        .iter()
        .enumerate()
        .map(|(index, candidate)| {
            let under_cursor = index == picker.cursor();
            let marker = match picker.chosen_rank(index) {
                Some(rank) => format!("[{}]", rank),
                None => "[ ]".to_string(),
            };
            let name_style = if under_cursor {
                Style::default().fg(Color::Cyan).bold()
            } else {
                Style::default()
            };

            Line::from(vec![
                Span::styled(if under_cursor { "> " } else { "  " }, name_style),
                Span::styled(
                    format!("{} ", marker),
                    Style::default().fg(if picker.is_chosen(index) {
                        Color::Green
                    } else {
                        Color::Gray
                    }),
                ),
                Span::styled(candidate.source.display_name.as_str(), name_style),
                Span::styled(
                    format!("  ({} questions)", candidate.questions.len()),
                    Style::default().fg(Color::DarkGray),
                ),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), area);
}

fn render_selection_status(frame: &mut Frame, area: Rect, picker: &SourcePicker) {
    let widget = match picker.notice() {
        Some(notice) => Paragraph::new(notice.to_string()).fg(Color::Red).bold(),
        None => Paragraph::new(format!(
            "{} questions selected",
            picker.chosen_question_count()
        ))
        .fg(Color::DarkGray),
    };
    frame.render_widget(widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let widget = Paragraph::new("j/k move  ·  space toggle  ·  enter start  ·  q quit")
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}
