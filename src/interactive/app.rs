//! TUI application state and event loop
//!
//! The event loop serializes everything: exactly one keyboard event, timer
//! tick, or network result mutates the machine at a time. Gateway calls are
//! blocking, so each command is dispatched to a short-lived worker thread
//! that reports back over a channel, tagged with the board generation it
//! belongs to; the machine discards results for superseded boards.

use crate::game::{
    Command, Effect, GameMachine, GameStatus, InputKey, Message, PlayerSettings, SoundCue,
};
use crate::gateway::{Gateway, GatewayError, HintReply, TestWordReply, WordPair};
use crate::sched::{CycleEvent, Scheduler, SolutionCycler};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::sync::Arc;
use std::sync::mpsc::{Receiver, Sender, channel};
use std::thread;
use std::time::{Duration, Instant};

const MAX_MESSAGES: usize = 5;

/// A tagged gateway result delivered to the event loop
pub enum NetEvent {
    Pair {
        generation: u64,
        result: Result<WordPair, GatewayError>,
    },
    Test {
        generation: u64,
        position: usize,
        result: Result<TestWordReply, GatewayError>,
    },
    Hint {
        generation: u64,
        result: Result<HintReply, GatewayError>,
    },
}

/// Application state
pub struct App {
    pub machine: GameMachine,
    pub messages: Vec<Message>,
    pub sound_line: Option<String>,
    pub should_quit: bool,
    gateway: Arc<dyn Gateway>,
    sched: Scheduler<CycleEvent>,
    cycler: SolutionCycler,
    net_tx: Sender<NetEvent>,
    net_rx: Receiver<NetEvent>,
}

impl App {
    #[must_use]
    pub fn new(settings: PlayerSettings, gateway: Arc<dyn Gateway>) -> Self {
        let (net_tx, net_rx) = channel();
        Self {
            machine: GameMachine::new(settings),
            messages: Vec::new(),
            sound_line: None,
            should_quit: false,
            gateway,
            sched: Scheduler::new(),
            cycler: SolutionCycler::new(),
            net_tx,
            net_rx,
        }
    }

    /// Kick off the first game
    pub fn start(&mut self) {
        let command = self.machine.new_game();
        self.sync_messages();
        self.dispatch(command);
    }

    fn new_game(&mut self) {
        self.cycler.stop(self.machine.board_mut());
        let command = self.machine.new_game();
        self.sync_messages();
        self.dispatch(command);
    }

    // Run one gateway call on a worker thread and post the tagged result
    // back to the event loop.
    fn dispatch(&self, command: Command) {
        let gateway = Arc::clone(&self.gateway);
        let tx = self.net_tx.clone();
        thread::spawn(move || {
            let event = match command {
                Command::FetchPair {
                    generation,
                    num_letters,
                    num_hops,
                } => NetEvent::Pair {
                    generation,
                    result: gateway.word_pair(num_letters, num_hops),
                },
                Command::TestWord {
                    generation,
                    request,
                } => NetEvent::Test {
                    generation,
                    position: request.test_position,
                    result: gateway.test_word(&request),
                },
                Command::FetchHint {
                    generation,
                    request,
                } => NetEvent::Hint {
                    generation,
                    result: gateway.hint(&request),
                },
            };
            // The receiver only disappears on shutdown.
            let _ = tx.send(event);
        });
    }

    /// Apply one network result to the machine
    pub fn on_net_event(&mut self, event: NetEvent, now: Instant) {
        let was_running = self.machine.status() == GameStatus::Run;
        let follow_up = match event {
            NetEvent::Pair { generation, result } => {
                self.machine.pair_arrived(generation, result);
                None
            }
            NetEvent::Test {
                generation,
                position,
                result,
            } => {
                self.machine.test_arrived(generation, position, result);
                None
            }
            NetEvent::Hint { generation, result } => self.machine.hint_arrived(generation, result),
        };
        if let Some(command) = follow_up {
            self.dispatch(command);
        }

        self.sync_messages();
        self.apply_effects();
        if was_running && self.machine.status() == GameStatus::Win {
            self.cycler.start(&mut self.sched, now);
        }
    }

    /// Handle one key press
    pub fn on_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Esc
            || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
        {
            self.should_quit = true;
            return;
        }

        match self.machine.status() {
            GameStatus::Win | GameStatus::Broken => {
                // Terminal states: board input is over, plain letters act as
                // commands.
                match key.code {
                    KeyCode::Char('n') | KeyCode::F(5) => self.new_game(),
                    KeyCode::Char('q') => self.should_quit = true,
                    _ => {}
                }
            }
            GameStatus::Initialize | GameStatus::Run => match key.code {
                KeyCode::F(5) => self.new_game(),
                KeyCode::Char('n') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    self.new_game();
                }
                KeyCode::F(1) => {
                    if let Some(command) = self.machine.get_hint() {
                        self.dispatch(command);
                    }
                }
                _ => {
                    if let Some(input) = classify_key(key) {
                        if let Some(command) = self.machine.letter_entered(input) {
                            self.dispatch(command);
                        }
                        self.sync_messages();
                        self.apply_effects();
                    }
                }
            },
        }
    }

    /// Fire due overlay timers
    pub fn tick(&mut self, now: Instant) {
        for event in self.sched.poll(now) {
            self.cycler
                .on_event(event, self.machine.board_mut(), &mut self.sched, now);
        }
    }

    /// Deadline for the event-loop poll timeout
    #[must_use]
    pub fn next_timer(&self) -> Option<Instant> {
        self.sched.next_due()
    }

    // Mirror the machine's current message into the scrollback history.
    fn sync_messages(&mut self) {
        if let Some(message) = self.machine.message() {
            if self.messages.last() != Some(message) {
                self.messages.push(message.clone());
                if self.messages.len() > MAX_MESSAGES {
                    self.messages.remove(0);
                }
            }
        }
    }

    // There is no audio subsystem; cues surface as a glyph in the status bar
    // when sound is enabled.
    fn apply_effects(&mut self) {
        let sound_on = self.machine.settings().sound;
        for effect in self.machine.take_effects() {
            if !sound_on {
                continue;
            }
            let Effect::Sound(cue) = effect;
            self.sound_line = Some(
                match cue {
                    SoundCue::Key => "♪ tick",
                    SoundCue::Solved => "♪ chime",
                    SoundCue::Rejected => "♪ buzz",
                    SoundCue::Won => "♪ fanfare",
                    SoundCue::Broken => "♪ thud",
                }
                .to_string(),
            );
        }
    }
}

/// Map a terminal key press onto classified game input
#[must_use]
pub fn classify_key(key: KeyEvent) -> Option<InputKey> {
    match key.code {
        KeyCode::Char(c) => Some(InputKey::Char(c)),
        KeyCode::Backspace => Some(InputKey::Backspace),
        KeyCode::Delete => Some(InputKey::Delete),
        KeyCode::Enter => Some(InputKey::Enter),
        KeyCode::Up => Some(InputKey::Up),
        KeyCode::Down => Some(InputKey::Down),
        KeyCode::Left => Some(InputKey::Left),
        KeyCode::Right => Some(InputKey::Right),
        _ => None,
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O
/// error during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    app.start();

    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        let now = Instant::now();
        let timeout = app
            .next_timer()
            .map_or(Duration::from_millis(200), |due| {
                due.saturating_duration_since(now).min(Duration::from_millis(200))
            });

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                // Only process key press events (release events would double
                // every keystroke on Windows).
                if key.kind == KeyEventKind::Press {
                    app.on_key(key);
                }
            }
        }

        while let Ok(net_event) = app.net_rx.try_recv() {
            app.on_net_event(net_event, Instant::now());
        }

        app.tick(Instant::now());

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gateway::{HintRequest, TestWordRequest};
    use std::sync::Mutex;

    struct ScriptedGateway {
        pair: Mutex<Option<Result<WordPair, GatewayError>>>,
        test: Mutex<Option<Result<TestWordReply, GatewayError>>>,
    }

    impl ScriptedGateway {
        fn pair_ok(start: &str, end: &str) -> Self {
            Self {
                pair: Mutex::new(Some(Ok(WordPair {
                    start_word: start.to_string(),
                    end_word: end.to_string(),
                }))),
                test: Mutex::new(None),
            }
        }
    }

    impl Gateway for ScriptedGateway {
        fn word_pair(&self, _: usize, _: usize) -> Result<WordPair, GatewayError> {
            self.pair
                .lock()
                .unwrap()
                .take()
                .unwrap_or_else(|| Err(GatewayError::Transport("unscripted".into())))
        }

        fn test_word(&self, _: &TestWordRequest) -> Result<TestWordReply, GatewayError> {
            self.test
                .lock()
                .unwrap()
                .take()
                .unwrap_or_else(|| Err(GatewayError::Transport("unscripted".into())))
        }

        fn hint(&self, _: &HintRequest) -> Result<HintReply, GatewayError> {
            Err(GatewayError::Transport("unscripted".into()))
        }
    }

    fn wait_for_net(app: &App) -> NetEvent {
        app.net_rx
            .recv_timeout(Duration::from_secs(2))
            .expect("worker thread result")
    }

    #[test]
    fn start_dispatches_pair_fetch_and_reaches_run() {
        let gateway = Arc::new(ScriptedGateway::pair_ok("HELLO", "WORLD"));
        let mut app = App::new(PlayerSettings::default(), gateway);

        app.start();
        let event = wait_for_net(&app);
        app.on_net_event(event, Instant::now());

        assert_eq!(app.machine.status(), GameStatus::Run);
        assert!(!app.messages.is_empty());
    }

    #[test]
    fn transport_failure_reaches_broken_through_the_loop() {
        let gateway = Arc::new(ScriptedGateway {
            pair: Mutex::new(Some(Err(GatewayError::Transport("refused".into())))),
            test: Mutex::new(None),
        });
        let mut app = App::new(PlayerSettings::default(), gateway);

        app.start();
        let event = wait_for_net(&app);
        app.on_net_event(event, Instant::now());

        assert_eq!(app.machine.status(), GameStatus::Broken);
    }

    #[test]
    fn classify_covers_game_keys_only() {
        let enter = KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE);
        assert_eq!(classify_key(enter), Some(InputKey::Enter));

        let tab = KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE);
        assert_eq!(classify_key(tab), None);
    }
}
