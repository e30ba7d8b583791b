//! Keyboard and timer events funnelled through a single channel.

use std::future::Future;
use std::time::Duration;

use crossterm::event::{Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use futures_util::StreamExt;
use tokio::sync::mpsc;
use tokio::task::AbortHandle;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

/// Everything the session state machine reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizEvent {
    Navigate(Direction),
    Confirm,
    Toggle,
    Quit,
    TimerFired,
    Resize,
    /// Terminal input stopped; no further keys will arrive.
    InputClosed,
}

impl QuizEvent {
    pub fn from_terminal(event: Event) -> Option<Self> {
        match event {
            Event::Key(key) => Self::from_key(key),
            Event::Resize(_, _) => Some(Self::Resize),
            _ => None,
        }
    }

    pub fn from_key(key: KeyEvent) -> Option<Self> {
        if key.kind != KeyEventKind::Press {
            return None;
        }

        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Some(Self::Quit),
            KeyCode::Up | KeyCode::Char('k') => Some(Self::Navigate(Direction::Up)),
            KeyCode::Down | KeyCode::Char('j') => Some(Self::Navigate(Direction::Down)),
            KeyCode::Enter | KeyCode::Backspace => Some(Self::Confirm),
            KeyCode::Char(' ') => Some(Self::Toggle),
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => Some(Self::Quit),
            _ => None,
        }
    }
}

/// Receiving end of the event channel, plus the task pumping terminal input.
pub struct EventHandler {
    tx: mpsc::UnboundedSender<QuizEvent>,
    rx: mpsc::UnboundedReceiver<QuizEvent>,
    input_task: Option<AbortHandle>,
}

impl EventHandler {
    /// Creates the channel without reading the terminal.
    pub fn new() -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            tx,
            rx,
            input_task: None,
        }
    }

    /// Creates the channel and starts forwarding crossterm input into it.
    pub fn with_terminal_input() -> Self {
        let mut handler = Self::new();
        let tx = handler.tx.clone();
        handler.watch_input(pump_terminal_input(tx));
        handler
    }

    /// Runs `source` as the input task. However it stops (finished, failed
    /// or panicked), `InputClosed` is posted so the loop does not wait on
    /// keys that will never come.
    pub fn watch_input<F>(&mut self, source: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let input = tokio::spawn(source);
        self.input_task = Some(input.abort_handle());

        let tx = self.tx.clone();
        tokio::spawn(async move {
            match input.await {
                Err(e) if e.is_panic() => tracing::error!("terminal input task panicked"),
                _ => {}
            }
            let _ = tx.send(QuizEvent::InputClosed);
        });
    }

    pub fn sender(&self) -> mpsc::UnboundedSender<QuizEvent> {
        self.tx.clone()
    }

    pub fn timer(&self) -> TimerDispatcher {
        TimerDispatcher {
            tx: self.tx.clone(),
        }
    }

    /// Waits for the next event. The handler keeps a sender alive, so this
    /// only returns `None` if the channel was closed explicitly.
    pub async fn next(&mut self) -> Option<QuizEvent> {
        self.rx.recv().await
    }
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for EventHandler {
    fn drop(&mut self) {
        if let Some(task) = self.input_task.take() {
            task.abort();
        }
    }
}

async fn pump_terminal_input(tx: mpsc::UnboundedSender<QuizEvent>) {
    let mut reader = EventStream::new();

    while let Some(event) = reader.next().await {
        let event = match event {
            Ok(event) => event,
            Err(e) => {
                tracing::warn!(error = %e, "terminal input failed");
                return;
            }
        };

        let Some(quiz_event) = QuizEvent::from_terminal(event) else {
            continue;
        };

        if tx.send(quiz_event).is_err() {
            return;
        }
    }

    tracing::warn!("terminal input stream ended");
}

/// Arms one-shot timers that report back through the event channel.
#[derive(Clone)]
pub struct TimerDispatcher {
    tx: mpsc::UnboundedSender<QuizEvent>,
}

impl TimerDispatcher {
    pub fn schedule(&self, delay: Duration) {
        tracing::trace!(delay_ms = delay.as_millis() as u64, "timer armed");

        let tx = self.tx.clone();
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            // The loop may have ended already; nobody is left to care.
            let _ = tx.send(QuizEvent::TimerFired);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_key_mapping() {
        assert_eq!(
            QuizEvent::from_key(press(KeyCode::Char('j'))),
            Some(QuizEvent::Navigate(Direction::Down))
        );
        assert_eq!(
            QuizEvent::from_key(press(KeyCode::Char('k'))),
            Some(QuizEvent::Navigate(Direction::Up))
        );
        assert_eq!(
            QuizEvent::from_key(press(KeyCode::Up)),
            Some(QuizEvent::Navigate(Direction::Up))
        );
        assert_eq!(QuizEvent::from_key(press(KeyCode::Enter)), Some(QuizEvent::Confirm));
        assert_eq!(QuizEvent::from_key(press(KeyCode::Backspace)), Some(QuizEvent::Confirm));
        assert_eq!(QuizEvent::from_key(press(KeyCode::Char(' '))), Some(QuizEvent::Toggle));
        assert_eq!(QuizEvent::from_key(press(KeyCode::Esc)), Some(QuizEvent::Quit));
        assert_eq!(QuizEvent::from_key(press(KeyCode::Char('x'))), None);
    }

    #[test]
    fn test_ctrl_c_quits() {
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(QuizEvent::from_key(key), Some(QuizEvent::Quit));
        assert_eq!(QuizEvent::from_key(press(KeyCode::Char('c'))), None);
    }

    #[test]
    fn test_key_release_ignored() {
        let mut key = press(KeyCode::Enter);
        key.kind = KeyEventKind::Release;
        assert_eq!(QuizEvent::from_key(key), None);
    }

    #[test]
    fn test_resize_maps_to_redraw() {
        assert_eq!(
            QuizEvent::from_terminal(Event::Resize(80, 24)),
            Some(QuizEvent::Resize)
        );
    }

    #[tokio::test]
    async fn test_timer_posts_into_event_channel() {
        let mut events = EventHandler::new();
        let timer = events.timer();

        timer.schedule(Duration::from_millis(5));
        timer.schedule(Duration::from_millis(10));

        assert_eq!(events.next().await, Some(QuizEvent::TimerFired));
        assert_eq!(events.next().await, Some(QuizEvent::TimerFired));
    }

    #[tokio::test]
    async fn test_keyboard_and_timer_share_channel() {
        let mut events = EventHandler::new();
        events.sender().send(QuizEvent::Confirm).unwrap();
        events.timer().schedule(Duration::from_millis(1));

        assert_eq!(events.next().await, Some(QuizEvent::Confirm));
        assert_eq!(events.next().await, Some(QuizEvent::TimerFired));
    }

    #[tokio::test]
    async fn test_input_task_end_is_reported() {
        let mut events = EventHandler::new();
        events.watch_input(async {});

        assert_eq!(events.next().await, Some(QuizEvent::InputClosed));
    }

    #[tokio::test]
    async fn test_input_task_panic_is_reported() {
        let mut events = EventHandler::new();
        events.watch_input(async { panic!("reader source not set") });

        assert_eq!(events.next().await, Some(QuizEvent::InputClosed));
    }

    #[tokio::test]
    async fn test_input_forwarded_before_close() {
        let mut events = EventHandler::new();
        let tx = events.sender();
        events.watch_input(async move {
            tx.send(QuizEvent::Confirm).unwrap();
        });

        assert_eq!(events.next().await, Some(QuizEvent::Confirm));
        assert_eq!(events.next().await, Some(QuizEvent::InputClosed));
    }
}
