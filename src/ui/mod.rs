mod picker;
mod quiz;

use ratatui::{prelude::*, widgets::Block};

use crate::app::App;
use crate::models::SessionState;

pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    frame.render_widget(Block::default().bg(Color::Reset), area);

    match app.state() {
        SessionState::FileSelecting => {
            if let Some(source_picker) = app.picker() {
                picker::render(frame, area, source_picker);
            }
        }
        SessionState::Selecting | SessionState::FeedbackCorrect | SessionState::FeedbackIncorrect => {
            quiz::render(frame, area, app)
        }
    }
}
