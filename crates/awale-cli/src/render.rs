//! Text rendering of the board.

use awale_core::Player;
use awale_engine::Board;

/// Renders the board as ASCII art.
///
/// North's row is shown on top in reverse index order so that the
/// counter-clockwise sowing direction reads naturally on screen.
pub fn board_text(board: &Board) -> String {
    let mut out = String::new();

    out.push_str("=====================================\n");
    out.push_str("          AWALE BOARD\n");
    out.push_str("=====================================\n\n");

    out.push_str(&format!(
        "North [Score: {:2}]           <-- Direction\n",
        board.score(Player::North)
    ));
    out.push_str("     ");
    for pit in Player::North.houses().rev() {
        out.push_str(&format!("[{:2}]", board.seeds(pit)));
    }
    out.push('\n');

    out.push_str("Pit:  ");
    for pit in Player::North.houses().rev() {
        out.push_str(&format!(" {:2} ", pit.index()));
    }
    out.push('\n');

    out.push_str("     ------------------------\n");

    out.push_str("Pit:  ");
    for pit in Player::South.houses() {
        out.push_str(&format!(" {:2} ", pit.index()));
    }
    out.push('\n');

    out.push_str("     ");
    for pit in Player::South.houses() {
        out.push_str(&format!("[{:2}]", board.seeds(pit)));
    }
    out.push('\n');
    out.push_str(&format!(
        "Direction -->           South [Score: {:2}]\n",
        board.score(Player::South)
    ));

    out.push_str(&format!("\nCurrent turn: {}\n", board.to_move));
    out
}
