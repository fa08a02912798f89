use std::io;
use std::time::Duration;

use chrono::{DateTime, Local};
use crossterm::event::{Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use futures::StreamExt;
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame, Terminal,
};
use tokio::sync::mpsc;

use super::events::{AppEvent, Speaker};
use super::input::InputLine;
use crate::config::ChatConfig;
use crate::core::assistant::Assistant;

const WELCOME: &str = "Hello! I'm the campus assistant. Ask me about departments, HODs, facilities, placements or the college location.";

/// One transcript entry.
#[derive(Debug, Clone)]
pub struct ChatMessage {
    pub speaker: Speaker,
    pub text: String,
    pub at: DateTime<Local>,
}

impl ChatMessage {
    fn new(speaker: Speaker, text: impl Into<String>) -> Self {
        Self {
            speaker,
            text: text.into(),
            at: Local::now(),
        }
    }
}

/// State of the chat screen.
pub struct ChatApp {
    running: bool,
    messages: Vec<ChatMessage>,
    input: InputLine,
    /// Waiting on the assistant; input is not submitted meanwhile.
    pending: bool,
    typing_frame: usize,
    assistant: Assistant,
    pacing: ChatConfig,
    event_tx: mpsc::UnboundedSender<AppEvent>,
    event_rx: mpsc::UnboundedReceiver<AppEvent>,
}

impl ChatApp {
    pub fn new(assistant: Assistant, pacing: ChatConfig) -> Self {
        let (event_tx, event_rx) = mpsc::unbounded_channel();
        Self {
            running: true,
            messages: vec![ChatMessage::new(Speaker::Bot, WELCOME)],
            input: InputLine::new(),
            pending: false,
            typing_frame: 0,
            assistant,
            pacing,
            event_tx,
            event_rx,
        }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    // ── Event loop ──────────────────────────────────────────────────────

    /// Main event loop: render → select → update → loop.
    pub async fn run(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
        tick_rate: Duration,
    ) -> io::Result<()> {
        let mut tick_interval = tokio::time::interval(tick_rate);
        let mut event_stream = EventStream::new();

        while self.running {
            terminal.draw(|frame| self.render(frame))?;

            tokio::select! {
                _ = tick_interval.tick() => {
                    self.handle_event(AppEvent::Tick);
                }
                Some(event) = self.event_rx.recv() => {
                    self.handle_event(event);
                }
                Some(Ok(crossterm_event)) = event_stream.next() => {
                    self.handle_event(AppEvent::Input(crossterm_event));
                }
            }
        }

        Ok(())
    }

    fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Tick => {
                if self.pending {
                    self.typing_frame = (self.typing_frame + 1) % 12;
                }
            }
            AppEvent::Input(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                self.handle_key(key);
            }
            AppEvent::Input(_) => {}
            AppEvent::Reply(text) => {
                self.pending = false;
                self.messages.push(ChatMessage::new(Speaker::Bot, text));
            }
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        match (key.code, key.modifiers) {
            (KeyCode::Esc, _) | (KeyCode::Char('c'), KeyModifiers::CONTROL) => {
                self.running = false;
            }
            (KeyCode::Enter, _) => self.submit(),
            (KeyCode::Backspace, _) => self.input.backspace(),
            (KeyCode::Delete, _) => self.input.delete(),
            (KeyCode::Left, _) => self.input.left(),
            (KeyCode::Right, _) => self.input.right(),
            (KeyCode::Home, _) => self.input.home(),
            (KeyCode::End, _) => self.input.end(),
            (KeyCode::Char(c), _) => self.input.insert(c),
            _ => {}
        }
    }

    /// Post the typed question and answer it in the background.
    fn submit(&mut self) {
        if self.pending || self.input.is_blank() {
            return;
        }

        let question = self.input.take();
        self.messages.push(ChatMessage::new(Speaker::User, question.trim()));
        self.pending = true;
        self.typing_frame = 0;

        let assistant = self.assistant.clone();
        let tx = self.event_tx.clone();
        let thinking = Duration::from_millis(self.pacing.thinking_delay_ms);
        let reply_delay = Duration::from_millis(self.pacing.reply_delay_ms);

        tokio::spawn(async move {
            tokio::time::sleep(thinking).await;
            let answer = assistant.answer(&question).await;
            tokio::time::sleep(reply_delay).await;
            if tx.send(AppEvent::Reply(answer)).is_err() {
                log::debug!("Chat closed before the reply arrived");
            }
        });
    }

    // ── Rendering ───────────────────────────────────────────────────────

    fn render(&self, frame: &mut Frame) {
        let chunks = Layout::vertical([
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(3),
        ])
        .split(frame.area());

        let header = Paragraph::new(Line::from(vec![
            Span::styled(
                " Campus Bot ",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(format!("v{}  ", crate::VERSION)),
            Span::styled("Enter", Style::default().fg(Color::Cyan)),
            Span::raw(" send  "),
            Span::styled("Esc", Style::default().fg(Color::Red)),
            Span::raw(" quit"),
        ]))
        .block(Block::default().borders(Borders::ALL));
        frame.render_widget(header, chunks[0]);

        self.render_messages(frame, chunks[1]);
        self.render_input(frame, chunks[2]);
    }

    fn render_messages(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default().borders(Borders::ALL).title(" Chat ");
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let width = inner.width.saturating_sub(2).max(1) as usize;
        let mut lines: Vec<Line> = Vec::new();
        for message in &self.messages {
            let color = match message.speaker {
                Speaker::User => Color::Green,
                Speaker::Bot => Color::Cyan,
            };
            lines.push(Line::from(vec![
                Span::styled(
                    message.speaker.label(),
                    Style::default().fg(color).add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!("  {}", message.at.format("%H:%M")),
                    Style::default().fg(Color::DarkGray),
                ),
            ]));
            for text_line in message.text.lines() {
                lines.extend(
                    wrap_text(text_line, width)
                        .into_iter()
                        .map(|l| Line::raw(format!(" {l}"))),
                );
            }
            lines.push(Line::raw(""));
        }

        if self.pending {
            let dots = ".".repeat(self.typing_frame / 4 + 1);
            lines.push(Line::styled(
                format!("Campus Bot is typing{dots}"),
                Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
            ));
        }

        // Keep the newest lines in view.
        let visible_height = inner.height as usize;
        let skip = lines.len().saturating_sub(visible_height);
        let visible: Vec<Line> = lines.into_iter().skip(skip).collect();
        frame.render_widget(Paragraph::new(visible), inner);
    }

    fn render_input(&self, frame: &mut Frame, area: Rect) {
        let title = if self.pending { " Ask (waiting...) " } else { " Ask " };
        let block = Block::default().borders(Borders::ALL).title(title);
        let inner = block.inner(area);

        let text = self.input.text();
        let cursor = self.input.cursor();
        let max = inner.width.saturating_sub(1) as usize;
        let offset = cursor.saturating_sub(max);
        let shown: String = text.chars().skip(offset).collect();

        frame.render_widget(Paragraph::new(shown).block(block), area);
        frame.set_cursor_position(Position::new(
            inner.x + (cursor - offset) as u16,
            inner.y,
        ));
    }
}

/// Greedy word wrap. Words longer than `width` are split.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for word in text.split_whitespace() {
        let mut word: Vec<char> = word.chars().collect();
        while word.len() > width {
            if current_len > 0 {
                lines.push(std::mem::take(&mut current));
                current_len = 0;
            }
            let rest = word.split_off(width);
            lines.push(word.into_iter().collect());
            word = rest;
        }

        let needed = if current_len == 0 { word.len() } else { current_len + 1 + word.len() };
        if needed > width && current_len > 0 {
            lines.push(std::mem::take(&mut current));
            current_len = 0;
        }
        if current_len > 0 {
            current.push(' ');
            current_len += 1;
        }
        current.extend(word.iter());
        current_len += word.len();
    }

    if current_len > 0 || lines.is_empty() {
        lines.push(current);
    }
    lines
}
