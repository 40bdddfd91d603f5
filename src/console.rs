//! Terminal front end
//!
//! Plays one or more games over any `BufRead`/`Write` pair. Occupied cells
//! print as `?` until the game ends, then the whole board is shown with
//! `X` for Black and `O` for White.

use std::io::{self, BufRead, Write};

use crate::board::{Board, Pos, Stone, BOARD_SIZE};
use crate::controller::GameController;
use crate::session::MoveEvent;

/// Parse a move typed by the player.
///
/// Accepts board notation (`H8`, `a15`) or zero-based `row col`
/// (`7 7`, `7,7`). Returns zero-based (row, col); range is not checked here.
pub fn parse_move(input: &str) -> Option<(usize, usize)> {
    let input = input.trim();

    let numbers: Vec<&str> = input
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|s| !s.is_empty())
        .collect();
    if let [row, col] = numbers.as_slice() {
        return Some((row.parse().ok()?, col.parse().ok()?));
    }

    let mut chars = input.chars();
    let letter = chars.next()?.to_ascii_uppercase();
    if !letter.is_ascii_uppercase() {
        return None;
    }
    let number: usize = chars.as_str().parse().ok()?;
    if number == 0 || number > BOARD_SIZE {
        return None;
    }
    Some((BOARD_SIZE - number, (letter as u8 - b'A') as usize))
}

/// Text rendering of the board. Colors are only drawn when `revealed`.
pub fn render_board(board: &Board, revealed: bool) -> String {
    let mut out = String::from("   ");
    for col in 0..BOARD_SIZE {
        out.push(' ');
        out.push((b'A' + col as u8) as char);
    }
    out.push('\n');

    for row in 0..BOARD_SIZE {
        out.push_str(&format!("{:>2} ", BOARD_SIZE - row));
        for col in 0..BOARD_SIZE {
            let cell = match (board.get(Pos::new(row as u8, col as u8)), revealed) {
                (Stone::Empty, _) => '.',
                (_, false) => '?',
                (Stone::Black, true) => 'X',
                (Stone::White, true) => 'O',
            };
            out.push(' ');
            out.push(cell);
        }
        out.push('\n');
    }
    out
}

/// Run the interactive loop until the input ends or the player quits.
///
/// Commands: a move, `new`, `quit`.
pub fn run<R: BufRead, W: Write>(controller: &mut GameController, input: R, mut output: W) -> io::Result<()> {
    writeln!(output, "Blind Omok: you are Black. Enter moves like H8 or '7 7'; 'new' restarts, 'quit' exits.")?;
    write!(output, "{}", render_board(controller.board(), false))?;
    prompt(controller, &mut output)?;

    for line in input.lines() {
        let line = line?;
        match line.trim() {
            "" => {}
            "quit" | "q" => break,
            "new" | "n" => {
                controller.new_game();
                write!(output, "{}", render_board(controller.board(), false))?;
            }
            text => match parse_move(text) {
                None => writeln!(output, "Could not read '{text}'")?,
                Some((row, col)) => play_turn(controller, row, col, &mut output)?,
            },
        }
        prompt(controller, &mut output)?;
    }
    Ok(())
}

fn play_turn<W: Write>(controller: &mut GameController, row: usize, col: usize, output: &mut W) -> io::Result<()> {
    let Some(event) = controller.request_human_move(row, col) else {
        writeln!(output, "That move is not allowed")?;
        return Ok(());
    };
    if event.game_over {
        return finish(controller, &event, output);
    }

    writeln!(output, "{}", controller.status_text())?;
    match controller.wait_for_ai() {
        Some(reply) if reply.game_over => finish(controller, &reply, output),
        Some(_) => write!(output, "{}", render_board(controller.board(), false)),
        None => writeln!(output, "{}", controller.message().unwrap_or("The AI did not move")),
    }
}

fn finish<W: Write>(controller: &GameController, event: &MoveEvent, output: &mut W) -> io::Result<()> {
    let board = event.reveal.unwrap_or(*controller.board());
    write!(output, "{}", render_board(&board, true))?;
    let scores = controller.scores();
    writeln!(
        output,
        "{}  (you {} - AI {}); type 'new' to play again",
        controller.status_text(),
        scores.black,
        scores.white
    )
}

fn prompt<W: Write>(controller: &GameController, output: &mut W) -> io::Result<()> {
    if !controller.is_revealed() {
        write!(output, "> ")?;
    }
    output.flush()
}
