use crate::agent::{Agent, AggregateResult};
use crate::canvas::{Canvas, SubmitOutcome};
use crate::error::AgentError;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tokio::sync::mpsc;

/// Result of a generation running on a background task.
#[derive(Debug)]
pub struct GenerationMessage {
    pub query: String,
    pub result: Result<AggregateResult, AgentError>,
}

pub struct App {
    agent: Agent,
    canvas: Canvas,
    input: String,
    generating: bool,
    selected: usize,
    status: Option<String>,
    should_quit: bool,
    tx: mpsc::UnboundedSender<GenerationMessage>,
    rx: mpsc::UnboundedReceiver<GenerationMessage>,
}

impl App {
    pub fn new(agent: Agent, canvas: Canvas) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            agent,
            canvas,
            input: String::new(),
            generating: false,
            selected: 0,
            status: None,
            should_quit: false,
            tx,
            rx,
        }
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn is_generating(&self) -> bool {
        self.generating
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('c') if ctrl => self.should_quit = true,
            KeyCode::Char('l') if ctrl => {
                self.canvas.clear();
                self.selected = 0;
            }
            KeyCode::Char(c) if !ctrl => self.input.push(c),
            KeyCode::Backspace => {
                self.input.pop();
            }
            KeyCode::Enter => self.submit(),
            KeyCode::Up | KeyCode::Left | KeyCode::BackTab => self.select_prev(),
            KeyCode::Down | KeyCode::Right | KeyCode::Tab => self.select_next(),
            KeyCode::Delete => self.remove_selected(),
            _ => {}
        }
    }

    /// Starts a generation for the current input on a background task.
    /// Blank input and a generation already in flight are ignored.
    pub fn submit(&mut self) {
        if self.generating || self.input.trim().is_empty() {
            return;
        }

        let query = std::mem::take(&mut self.input);
        self.canvas.set_last_query(&query);
        self.generating = true;
        self.status = None;

        let agent = self.agent.clone();
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let result = agent.generate(&query).await;
            // receiver is gone only when the app has shut down
            let _ = tx.send(GenerationMessage { query, result });
        });
    }

    pub fn on_generation(&mut self, message: GenerationMessage) {
        self.generating = false;
        let outcome = self.canvas.apply_outcome(&message.result);
        if outcome == SubmitOutcome::Failed {
            self.status = Some(format!("generation failed for \"{}\"", message.query));
        }
    }

    /// Applies every finished generation without blocking.
    pub fn drain_messages(&mut self) {
        while let Ok(message) = self.rx.try_recv() {
            self.on_generation(message);
        }
    }

    #[cfg(test)]
    pub(crate) async fn next_message(&mut self) -> Option<GenerationMessage> {
        self.rx.recv().await
    }

    fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    fn select_next(&mut self) {
        if self.selected + 1 < self.canvas.len() {
            self.selected += 1;
        }
    }

    fn remove_selected(&mut self) {
        let Some(id) = self.canvas.blocks().get(self.selected).map(|b| b.id) else {
            return;
        };
        self.canvas.remove_block(id);
        if self.selected >= self.canvas.len() {
            self.selected = self.canvas.len().saturating_sub(1);
        }
    }
}
