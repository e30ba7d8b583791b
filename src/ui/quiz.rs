use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
};

use crate::app::App;
use crate::models::{Question, SessionState};

const UNCHECKED: &str = "☐";
const CHECKED: &str = "☑";
const CROSSED: &str = "☒";

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let Some(question) = app.current_question() else {
        return;
    };
    let chunks = create_layout(area, question.code.as_deref());

    render_progress(frame, chunks[0], app);
    render_prompt(frame, chunks[1], &question.prompt);
    if let Some(code) = question.code.as_deref() {
        render_code_block(frame, chunks[2], code);
    }
    render_options(frame, chunks[3], question, app);
    render_status(frame, chunks[4], app.state());
}

fn create_layout(area: Rect, code: Option<&str>) -> std::rc::Rc<[Rect]> {
    let code_height = code.map_or(0, code_block_height);

    Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(3),
        Constraint::Length(code_height),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .margin(1)
    .split(area)
}

/// Code lines plus the two border rows, clamped to what a layout can hold.
fn code_block_height(code: &str) -> u16 {
    u16::try_from(code.lines().count())
        .unwrap_or(u16::MAX)
        .saturating_add(2)
}

fn render_progress(frame: &mut Frame, area: Rect, app: &App) {
    let progress = format!(
        "Question {}/{}",
        app.current_question_number(),
        app.total_questions()
    );
    let widget = Paragraph::new(progress)
        .alignment(Alignment::Right)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}

fn render_prompt(frame: &mut Frame, area: Rect, prompt: &str) {
    let widget = Paragraph::new(prompt).wrap(Wrap { trim: true }).bold();
    frame.render_widget(widget, area);
}

fn render_code_block(frame: &mut Frame, area: Rect, code: &str) {
    let code_lines: Vec<Line> = code
        .lines()
        .map(|line| Line::from(Span::styled(line, Style::default().fg(Color::Yellow))))
        .collect();

    let widget = Paragraph::new(code_lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Color::DarkGray)
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(widget, area);
}

fn render_options(frame: &mut Frame, area: Rect, question: &Question, app: &App) {
    let lines: Vec<Line> = question
        .options
        .iter()
        .enumerate()
        .map(|(index, option)| option_line(index, option, question, app))
        .collect();

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), area);
}

fn option_line<'a>(index: usize, text: &'a str, question: &Question, app: &App) -> Line<'a> {
    let state = app.state();
    let highlighted = state == SessionState::Selecting && index == app.highlighted_option();
    let revealed = state == SessionState::FeedbackCorrect && question.is_correct(index);
    let wrong = app.wrong_selections().contains(index);

    let (checkbox, checkbox_style) = if wrong {
        (CROSSED, Style::default().fg(Color::Red))
    } else if revealed {
        (CHECKED, Style::default().fg(Color::Green))
    } else {
        (UNCHECKED, Style::default())
    };

    let text_style = if wrong {
        Style::default().fg(Color::DarkGray).crossed_out()
    } else if revealed {
        Style::default().fg(Color::Green)
    } else if highlighted {
        Style::default().reversed()
    } else {
        Style::default()
    };

    Line::from(vec![
        Span::styled(checkbox, checkbox_style),
        Span::raw(" "),
        Span::styled(text, text_style),
    ])
}

fn render_status(frame: &mut Frame, area: Rect, state: SessionState) {
    let widget = match state {
        SessionState::FeedbackCorrect => Paragraph::new("Correct!").fg(Color::Green).bold(),
        SessionState::FeedbackIncorrect => Paragraph::new("Your choice is incorrect")
            .fg(Color::Red)
            .bold(),
        SessionState::Selecting | SessionState::FileSelecting => {
            Paragraph::new("j/k navigate  ·  enter select  ·  q quit").fg(Color::DarkGray)
        }
    };
    frame.render_widget(widget, area);
}

#[cfg(test)]
mod tests {
    use ratatui::backend::TestBackend;
    use ratatui::style::Modifier;

    use crate::config::QuizConfig;
    use crate::event::{Direction, QuizEvent};
    use crate::ui::test_support::{draw, find_row, rows};

    use super::*;

    fn arithmetic_app() -> App {
        let question = Question {
            prompt: "2+2?".to_string(),
            code: None,
            options: vec!["3".to_string(), "4".to_string(), "5".to_string()],
            correct_index: 1,
        };
        App::with_questions(vec![question], &QuizConfig::default())
    }

    fn option_cell_style(terminal: &Terminal<TestBackend>, row: usize) -> Style {
        // Margin 1, then checkbox and a space.
        terminal.backend().buffer()[(3, row as u16)].style()
    }

    #[test]
    fn test_selecting_screen_layout() {
        let app = arithmetic_app();
        let terminal = draw(&app);
        let rows = rows(&terminal);

        assert!(find_row(&rows, "Question 1/1").is_some());
        let prompt = find_row(&rows, "2+2?").unwrap();
        let first = find_row(&rows, "☐ 3").unwrap();
        assert!(prompt < first);
        assert_eq!(find_row(&rows, "☐ 4"), Some(first + 1));
        assert_eq!(find_row(&rows, "☐ 5"), Some(first + 2));
        assert!(find_row(&rows, "j/k navigate").is_some());

        let style = option_cell_style(&terminal, first);
        assert!(style.add_modifier.contains(Modifier::REVERSED));
    }

    #[test]
    fn test_correct_feedback_marks_answer() {
        let mut app = arithmetic_app();
        app.handle(QuizEvent::Navigate(Direction::Down));
        app.handle(QuizEvent::Confirm);

        let terminal = draw(&app);
        let rows = rows(&terminal);

        let correct = find_row(&rows, "☑ 4").unwrap();
        assert!(find_row(&rows, "Correct!").is_some());
        assert!(find_row(&rows, "j/k navigate").is_none());

        let style = option_cell_style(&terminal, correct);
        assert_eq!(style.fg, Some(Color::Green));
        assert!(!style.add_modifier.contains(Modifier::REVERSED));
    }

    #[test]
    fn test_wrong_answers_stay_crossed_out() {
        let mut app = arithmetic_app();
        app.handle(QuizEvent::Confirm);

        let rows_during = rows(&draw(&app));
        assert!(find_row(&rows_during, "☒ 3").is_some());
        assert!(find_row(&rows_during, "Your choice is incorrect").is_some());

        app.handle(QuizEvent::TimerFired);
        let terminal = draw(&app);
        let rows_after = rows(&terminal);

        let wrong = find_row(&rows_after, "☒ 3").unwrap();
        assert!(find_row(&rows_after, "Your choice is incorrect").is_none());

        let style = option_cell_style(&terminal, wrong);
        assert!(style.add_modifier.contains(Modifier::CROSSED_OUT));
        assert_eq!(style.fg, Some(Color::DarkGray));
    }

    #[test]
    fn test_code_block_rendered() {
        let question = Question {
            prompt: "What prints?".to_string(),
            code: Some("println!(\"hi\");".to_string()),
            options: vec!["hi".to_string(), "nothing".to_string()],
            correct_index: 0,
        };
        let app = App::with_questions(vec![question], &QuizConfig::default());
        let rows = rows(&draw(&app));

        let code = find_row(&rows, "println!(\"hi\");").unwrap();
        let first_option = find_row(&rows, "☐ hi").unwrap();
        assert!(code < first_option);
    }

    #[test]
    fn test_finished_app_draws_nothing() {
        let mut app = arithmetic_app();
        app.handle(QuizEvent::Navigate(Direction::Down));
        app.handle(QuizEvent::Confirm);
        app.handle(QuizEvent::TimerFired);

        let rows = rows(&draw(&app));
        assert!(find_row(&rows, "2+2?").is_none());
    }

    #[test]
    fn test_code_block_height_saturates() {
        assert_eq!(code_block_height("let a = 1;\nlet b = 2;"), 4);
        assert_eq!(code_block_height(&"x\n".repeat(65_534)), u16::MAX);
        assert_eq!(code_block_height(&"x\n".repeat(70_000)), u16::MAX);
    }
}
