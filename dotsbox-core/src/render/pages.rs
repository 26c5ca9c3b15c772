//! Display pages
//!
//! One page per UI state, laid out for the 8x21 character display.

use dotsbox_display::Screen;
use dotsbox_hal::BaudRate;

use crate::config::BoardSize;
use crate::game::{FinalScore, Game, Player};
use crate::state::{SettingsCursor, SettingsItem};

/// Settings row for each cursor item
const SETTINGS_ROWS: [usize; 3] = [2, 3, 5];

/// Render the title page
pub fn title(screen: &mut Screen) {
    screen.clear();
    screen.set_centered(1, "DOTS AND BOXES");
    screen.set_centered(3, "2 players");
    screen.set_centered(6, "SELECT to begin");
}

/// Render the instructions page
pub fn instructions(screen: &mut Screen) {
    screen.clear();
    screen.set_line(0, "HOW TO PLAY");
    screen.set_line(1, "Type moves on the");
    screen.set_line(2, "serial terminal as");
    screen.set_line(3, "row col dir: 00R");
    screen.set_line(4, "dir is U, D, L or R");
    screen.set_line(5, "Close a box: go again");
    screen.set_line(7, "SEL next  HOLD back");
}

/// Render the settings page with the cursor row highlighted
pub fn settings(screen: &mut Screen, size: &BoardSize, cursor: &SettingsCursor) {
    screen.clear();
    screen.set_line(0, "SETTINGS");
    screen.set_line_fmt(SETTINGS_ROWS[0], format_args!(" Width:  {}", size.width.get()));
    screen.set_line_fmt(SETTINGS_ROWS[1], format_args!(" Height: {}", size.height.get()));
    screen.set_line(SETTINGS_ROWS[2], " START");
    screen.set_line_fmt(7, format_args!("{} boxes", size.boxes()));
    screen.set_highlight(settings_row(cursor.item()));
}

/// Display row of a settings item
pub fn settings_row(item: SettingsItem) -> usize {
    SETTINGS_ROWS[item.index()]
}

/// Render the in-game status page
pub fn game(screen: &mut Screen, game: &Game, baud: BaudRate) {
    let grid = game.grid();
    screen.clear();
    screen.set_line_fmt(0, format_args!("GAME {}", game.size()));
    score_rows(screen, 2, |p| game.scores().get(p));
    screen.set_line_fmt(
        5,
        format_args!("{} to move ({}/{})", game.current_player(), grid.completed_boxes(), grid.total_boxes()),
    );
    screen.set_line_fmt(7, format_args!("Terminal {} baud", baud.bps()));
}

/// Render the results page
pub fn results(screen: &mut Screen, score: &FinalScore) {
    screen.clear();
    screen.set_centered(0, "GAME OVER");
    score_rows(screen, 2, |p| score.get(p));
    match score.leader() {
        Some(player) => screen.set_line_fmt(5, format_args!("PLAYER {} WINS", player.number())),
        None => screen.set_line(5, "TIE GAME"),
    }
    screen.set_line(7, "SELECT for title");
}

fn score_rows(screen: &mut Screen, first_row: usize, boxes: impl Fn(Player) -> u8) {
    for (offset, player) in Player::ALL.into_iter().enumerate() {
        screen.set_line_fmt(first_row + offset, format_args!("{}: {} boxes", player, boxes(player)));
    }
}
