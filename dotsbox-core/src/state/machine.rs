//! State machine definition
//!
//! Each state is one screen of the UI. What the buttons do and what the
//! display shows is a function of the current state.

use super::events::Event;

/// UI screens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum State {
    /// Power-on splash
    #[default]
    Title,
    /// How to enter moves
    Instructions,
    /// Board size selection
    Settings,
    /// Game in progress, moves read from the terminal
    Game,
    /// Final scores
    Results,
}

impl State {
    /// Check if terminal moves are accepted in this state
    pub fn accepts_moves(&self) -> bool {
        matches!(self, State::Game)
    }

    /// Check if this state shows a menu cursor
    pub fn has_cursor(&self) -> bool {
        matches!(self, State::Settings)
    }

    /// Process an event and return the next state
    pub fn transition(self, event: Event) -> Self {
        use Event::*;
        use State::*;

        match (self, event) {
            (Title, Proceed) => Instructions,

            (Instructions, Proceed) => Settings,
            (Instructions, Back) => Title,

            (Settings, StartGame) => Game,
            (Settings, Back) => Title,

            (Game, GameOver) => Results,
            (Game, Abort) => Title,

            (Results, Proceed) => Title,

            // Baud changes and everything else stay put
            _ => self,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dotsbox_hal::BaudRate;

    #[test]
    fn test_happy_path() {
        let mut state = State::default();
        for event in [
            Event::Proceed,
            Event::Proceed,
            Event::StartGame,
            Event::GameOver,
            Event::Proceed,
        ] {
            state = state.transition(event);
        }
        assert_eq!(state, State::Title);
    }

    #[test]
    fn test_transition_table() {
        let table = [
            (State::Title, Event::Proceed, State::Instructions),
            (State::Instructions, Event::Proceed, State::Settings),
            (State::Instructions, Event::Back, State::Title),
            (State::Settings, Event::StartGame, State::Game),
            (State::Settings, Event::Back, State::Title),
            (State::Game, Event::GameOver, State::Results),
            (State::Game, Event::Abort, State::Title),
            (State::Results, Event::Proceed, State::Title),
        ];
        for (from, event, to) in table {
            assert_eq!(from.transition(event), to);
        }
    }

    #[test]
    fn test_unknown_pairs_stay() {
        assert_eq!(State::Title.transition(Event::GameOver), State::Title);
        assert_eq!(State::Game.transition(Event::Proceed), State::Game);
        assert_eq!(State::Results.transition(Event::StartGame), State::Results);
    }

    #[test]
    fn test_baud_change_in_every_state() {
        let states = [
            State::Title,
            State::Instructions,
            State::Settings,
            State::Game,
            State::Results,
        ];
        for state in states {
            assert_eq!(state.transition(Event::BaudChanged(BaudRate::Baud38400)), state);
        }
    }

    #[test]
    fn test_only_game_accepts_moves() {
        assert!(State::Game.accepts_moves());
        assert!(!State::Settings.accepts_moves());
    }
}
