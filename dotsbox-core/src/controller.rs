//! Application controller
//!
//! The controller owns every piece of UI and game state and is driven by
//! the firmware's polling loop:
//! - Button events move through the screens and settings
//! - Terminal lines become moves while a game is running
//! - Game progress is reported to the terminal as text
//! - The current page is rendered for the display when it changes

use core::fmt;

use dotsbox_display::{present, DisplayBackend, DisplayError, Screen};
use dotsbox_hal::{BaudRate, Uart};
use dotsbox_protocol::{InputEvent, TerminalMessage};

use crate::config::{BoardSize, GameConfig};
use crate::game::{parse_move, DrawResult, FinalScore, Game, MoveOutcome};
use crate::render::{pages, BoardText};
use crate::state::{Event, SettingsCursor, State};
use crate::terminal::{SerialTerminal, TerminalInput};

/// Errors surfaced by [`Controller::poll`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AppError<E> {
    /// Serial terminal failed
    Terminal(E),
    /// Display backend failed
    Display(DisplayError),
}

impl<E: fmt::Debug> fmt::Display for AppError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Terminal(e) => write!(f, "terminal error: {e:?}"),
            AppError::Display(e) => write!(f, "display error: {e}"),
        }
    }
}

/// Failure from [`Controller::poll`]
///
/// State changes made before the failure are kept, so the event they
/// produced is reported alongside the error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PollError<E> {
    /// First I/O error of the iteration
    pub error: AppError<E>,
    /// Last event that took effect
    pub event: Option<Event>,
}

/// Effect of one terminal line on the game
enum LineOutcome {
    /// Not in a game
    Ignored,
    /// Empty line
    Blank,
    /// Malformed, off the board or already drawn
    Rejected,
    /// Line drawn
    Drawn(MoveOutcome),
}

impl LineOutcome {
    fn event(&self) -> Option<Event> {
        match self {
            LineOutcome::Drawn(outcome) if outcome.game_over.is_some() => Some(Event::GameOver),
            _ => None,
        }
    }
}

/// UI and game state
pub struct Controller {
    /// Current screen
    state: State,
    /// Board size chosen on the settings page
    settings: BoardSize,
    /// Settings page cursor
    cursor: SettingsCursor,
    /// Game in progress (or just finished)
    game: Game,
    /// Terminal baud rate
    baud: BaudRate,
    /// Page buffer for the display
    screen: Screen,
    /// Page needs to be re-rendered
    stale: bool,
}

impl Controller {
    /// Create a controller from the loaded configuration
    pub fn new(config: &GameConfig) -> Self {
        Self {
            state: State::Title,
            settings: config.board,
            cursor: SettingsCursor::new(),
            game: Game::new(config.board),
            baud: config.terminal.baud,
            screen: Screen::new(),
            stale: true,
        }
    }

    /// Get current state
    pub fn state(&self) -> State {
        self.state
    }

    /// Board size that the next game will use
    pub fn settings(&self) -> BoardSize {
        self.settings
    }

    pub fn cursor(&self) -> SettingsCursor {
        self.cursor
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn baud(&self) -> BaudRate {
        self.baud
    }

    /// Page buffer as last rendered
    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    /// Process a button event
    ///
    /// Updates UI state only; terminal side effects of the returned event
    /// are applied by [`Controller::announce`].
    pub fn process_input(&mut self, input: InputEvent) -> Option<Event> {
        let event = match input {
            InputEvent::CycleBaud => {
                self.baud = self.baud.next();
                self.stale = true;
                Some(Event::BaudChanged(self.baud))
            }
            InputEvent::Up | InputEvent::Down => {
                if self.state.has_cursor() {
                    match input {
                        InputEvent::Up => self.cursor.up(),
                        _ => self.cursor.down(),
                    }
                    self.stale = true;
                }
                None
            }
            InputEvent::Select => self.handle_select(),
            InputEvent::Back => self.handle_back(),
        };

        if let Some(event) = event {
            self.transition(event);
        }
        event
    }

    fn handle_select(&mut self) -> Option<Event> {
        match self.state {
            State::Title | State::Instructions | State::Results => Some(Event::Proceed),
            State::Settings => {
                let event = self.cursor.select(&mut self.settings);
                self.stale = true;
                event
            }
            State::Game => None,
        }
    }

    fn handle_back(&mut self) -> Option<Event> {
        match self.state {
            State::Instructions | State::Settings => Some(Event::Back),
            State::Game => Some(Event::Abort),
            State::Title | State::Results => None,
        }
    }

    /// Apply the terminal side of an event
    pub fn announce<U: Uart>(
        &self,
        event: Event,
        terminal: &mut SerialTerminal<U>,
    ) -> Result<(), U::Error> {
        match event {
            Event::StartGame => {
                terminal.discard_input();
                let size = self.game.size();
                terminal.send_message(TerminalMessage::Banner {
                    width: size.width.get(),
                    height: size.height.get(),
                })?;
                self.send_board(terminal)?;
                self.prompt(terminal)
            }
            Event::Abort => terminal.send_message(TerminalMessage::Abandoned),
            Event::BaudChanged(baud) => {
                terminal.set_baud(baud);
                terminal.send_message(TerminalMessage::BaudChanged { bps: baud.bps() })?;
                if self.state.accepts_moves() {
                    self.prompt(terminal)?;
                }
                Ok(())
            }
            Event::Proceed | Event::Back | Event::GameOver => Ok(()),
        }
    }

    /// Process one line typed at the terminal
    ///
    /// Lines are ignored outside a game. Every rejected move (malformed,
    /// off the board, already drawn) gets the same notice and a new
    /// prompt; the game is unchanged. The game and screen are updated
    /// before anything is written, so a failed write never loses a move.
    pub fn process_line<U: Uart>(
        &mut self,
        line: &str,
        terminal: &mut SerialTerminal<U>,
    ) -> Result<Option<Event>, U::Error> {
        let outcome = self.apply_line(line);
        self.report_line(&outcome, terminal)?;
        Ok(outcome.event())
    }

    fn apply_line(&mut self, line: &str) -> LineOutcome {
        if !self.state.accepts_moves() {
            return LineOutcome::Ignored;
        }
        if line.is_empty() {
            return LineOutcome::Blank;
        }

        let Ok(mv) = parse_move(line) else {
            return LineOutcome::Rejected;
        };

        let outcome = self.game.apply_move(mv);
        if outcome.result != DrawResult::Drawn {
            return LineOutcome::Rejected;
        }
        self.stale = true;

        if outcome.game_over.is_some() {
            self.transition(Event::GameOver);
        }
        LineOutcome::Drawn(outcome)
    }

    fn report_line<U: Uart>(
        &self,
        outcome: &LineOutcome,
        terminal: &mut SerialTerminal<U>,
    ) -> Result<(), U::Error> {
        let outcome = match outcome {
            LineOutcome::Ignored => return Ok(()),
            LineOutcome::Blank => return self.prompt(terminal),
            LineOutcome::Rejected => return self.reject(terminal),
            LineOutcome::Drawn(outcome) => outcome,
        };

        self.send_board(terminal)?;
        if let Some(score) = &outcome.game_over {
            return self.send_results(score, terminal);
        }

        if outcome.extra_turn() {
            terminal.send_message(TerminalMessage::BoxesCompleted {
                player: outcome.player.number(),
                count: outcome.completed.len() as u8,
            })?;
        }
        self.prompt(terminal)
    }

    /// Render the page for the current state if anything changed
    ///
    /// Returns true when the screen buffer was rewritten.
    pub fn render(&mut self) -> bool {
        if !self.stale {
            return false;
        }
        match self.state {
            State::Title => pages::title(&mut self.screen),
            State::Instructions => pages::instructions(&mut self.screen),
            State::Settings => pages::settings(&mut self.screen, &self.settings, &self.cursor),
            State::Game => pages::game(&mut self.screen, &self.game, self.baud),
            State::Results => pages::results(&mut self.screen, &self.game.scores().finish()),
        }
        self.stale = false;
        true
    }

    /// One iteration of the main loop
    ///
    /// Applies the button event (if any), handles at most one terminal
    /// line, then pushes the page to the display if it changed. Returns
    /// the last event that occurred.
    ///
    /// A terminal failure skips the rest of the terminal work but the
    /// display is still refreshed. On failure the error carries the event
    /// anyway, since the state change has already happened.
    pub fn poll<U: Uart, D: DisplayBackend>(
        &mut self,
        input: Option<InputEvent>,
        terminal: &mut SerialTerminal<U>,
        display: &mut D,
    ) -> Result<Option<Event>, PollError<U::Error>> {
        let mut last = None;
        let mut failure = None;

        if let Some(input) = input {
            if let Some(event) = self.process_input(input) {
                last = Some(event);
                if let Err(e) = self.announce(event, terminal) {
                    failure = Some(AppError::Terminal(e));
                }
            }
        }

        if failure.is_none() {
            if let Err(e) = self.poll_terminal(terminal, &mut last) {
                failure = Some(AppError::Terminal(e));
            }
        }

        if let Err(e) = self.refresh(display) {
            failure.get_or_insert(AppError::Display(e));
        }

        match failure {
            None => Ok(last),
            Some(error) => Err(PollError { error, event: last }),
        }
    }

    /// Handle at most one terminal line, recording its event in `last`
    fn poll_terminal<U: Uart>(
        &mut self,
        terminal: &mut SerialTerminal<U>,
        last: &mut Option<Event>,
    ) -> Result<(), U::Error> {
        match terminal.poll()? {
            Some(TerminalInput::Line(line)) => {
                let outcome = self.apply_line(&line);
                if let Some(event) = outcome.event() {
                    *last = Some(event);
                }
                self.report_line(&outcome, terminal)
            }
            Some(TerminalInput::Overflow) if self.state.accepts_moves() => self.reject(terminal),
            _ => Ok(()),
        }
    }

    /// Push the page to the display if it changed
    pub fn refresh<D: DisplayBackend>(&mut self, display: &mut D) -> Result<(), DisplayError> {
        self.render();
        if self.screen.is_dirty() {
            present(&self.screen, display)?;
            self.screen.mark_clean();
        }
        Ok(())
    }

    /// Perform state transition
    fn transition(&mut self, event: Event) {
        let next = self.state.transition(event);
        if next == self.state {
            return;
        }

        match next {
            State::Game => self.game.reset(self.settings),
            State::Title => self.game.reset(self.settings),
            State::Settings => self.cursor = SettingsCursor::new(),
            _ => {}
        }
        self.state = next;
        self.stale = true;
    }

    fn reject<U: Uart>(&self, terminal: &mut SerialTerminal<U>) -> Result<(), U::Error> {
        terminal.send_message(TerminalMessage::InvalidMove)?;
        self.prompt(terminal)
    }

    fn prompt<U: Uart>(&self, terminal: &mut SerialTerminal<U>) -> Result<(), U::Error> {
        terminal.send_message(TerminalMessage::Prompt {
            player: self.game.current_player().number(),
        })
    }

    fn send_board<U: Uart>(&self, terminal: &mut SerialTerminal<U>) -> Result<(), U::Error> {
        terminal.send_fmt(format_args!("{}", BoardText(self.game.grid())))
    }

    fn send_results<U: Uart>(
        &self,
        score: &FinalScore,
        terminal: &mut SerialTerminal<U>,
    ) -> Result<(), U::Error> {
        terminal.send_message(TerminalMessage::GameOver)?;
        terminal.send_message(TerminalMessage::FinalScore {
            first: score.first,
            second: score.second,
        })?;
        match score.leader() {
            Some(player) => terminal.send_message(TerminalMessage::Winner {
                player: player.number(),
            }),
            None => terminal.send_message(TerminalMessage::Tie),
        }
    }
}
