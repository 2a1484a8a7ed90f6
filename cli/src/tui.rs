//! Terminal frontend: raw-mode drawing with crossterm, one blocking
//! keypress per round. Pure read access to the session between phases.

use std::io::{self, Write};

use anyhow::Result;
use crossterm::{
    cursor::{Hide, MoveTo, Show},
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind},
    execute, queue,
    style::Print,
    terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
};
use engine::{Outcome, PLAYER_SYMBOL, Session};

const HEALTH_ROW: u16 = 15;
const LOG_ROW: u16 = 17;

pub fn run(mut session: Session) -> Result<()> {
    let mut stdout = io::stdout();
    terminal::enable_raw_mode()?;
    execute!(stdout, EnterAlternateScreen, Hide)?;
    let outcome = play(&mut session, &mut stdout);
    execute!(stdout, Show, LeaveAlternateScreen)?;
    terminal::disable_raw_mode()?;
    outcome
}

fn play(session: &mut Session, out: &mut impl Write) -> Result<()> {
    loop {
        let blocked = session.blocking_terrain();
        session.upkeep()?;
        draw(session, out)?;

        match session.outcome()? {
            Outcome::Ongoing => {}
            outcome => {
                game_over(out, outcome)?;
                return Ok(());
            }
        }

        let key = next_key()?;
        session.apply_player(key)?;
        if session.quit_requested() {
            return Ok(());
        }
        session.dragon_turn(&blocked)?;
    }
}

/// Block until a usable keypress; arrows alias to the hjkl move tokens.
fn next_key() -> Result<char> {
    loop {
        if let Event::Key(KeyEvent { code, kind, .. }) = event::read()? {
            if kind != KeyEventKind::Press {
                continue;
            }
            match code {
                KeyCode::Char(c) => return Ok(c),
                KeyCode::Left => return Ok('h'),
                KeyCode::Down => return Ok('j'),
                KeyCode::Up => return Ok('k'),
                KeyCode::Right => return Ok('l'),
                _ => {}
            }
        }
    }
}

fn draw(session: &Session, out: &mut impl Write) -> Result<()> {
    queue!(out, Clear(ClearType::All))?;

    let store = session.store();
    for (pos, entity) in store.draw_order() {
        queue!(
            out,
            MoveTo(pos.x as u16, pos.y as u16),
            Print(entity.symbol())
        )?;
    }

    let panel = store.width() as u16 + 2;
    queue!(out, MoveTo(panel, 0), Print("Valid actions:"))?;
    for (row, line) in session.action_lines(PLAYER_SYMBOL)?.iter().enumerate() {
        queue!(out, MoveTo(panel, row as u16 + 2), Print(line))?;
    }

    let status = panel + 18;
    queue!(out, MoveTo(status, 0), Print("Conditions:"))?;
    let conditions = session.condition_lines()?;
    for (row, line) in conditions.iter().enumerate() {
        queue!(out, MoveTo(status, row as u16 + 2), Print(line))?;
    }

    let equipment_row = conditions.len() as u16 + 3;
    queue!(out, MoveTo(status, equipment_row), Print("Equipment:"))?;
    for (row, line) in session.equipment_lines()?.iter().enumerate() {
        queue!(
            out,
            MoveTo(status, equipment_row + 2 + row as u16),
            Print(line)
        )?;
    }

    let health = session.health_line()?;
    queue!(
        out,
        MoveTo(0, HEALTH_ROW.max(store.height() as u16 + 1)),
        Print(health)
    )?;
    let log_row = LOG_ROW.max(store.height() as u16 + 3);
    for (row, line) in session.log_lines().iter().enumerate() {
        queue!(out, MoveTo(0, log_row + row as u16), Print(line))?;
    }

    out.flush()?;
    Ok(())
}

/// Bordered end-of-game banner; waits for an acknowledging 'Q'.
fn game_over(out: &mut impl Write, outcome: Outcome) -> Result<()> {
    let verdict = match outcome {
        Outcome::PlayerWins => "You defeated the dragon!",
        _ => "The dragon slaughtered you...",
    };
    let messages = ["Game Over", verdict, "Press 'Q' to quit"];

    let width: u16 = 40;
    let (left, top) = (20u16, 10u16);
    queue!(
        out,
        MoveTo(left, top),
        Print(format!("+{}+", "-".repeat(width as usize - 2)))
    )?;
    for (row, message) in messages.iter().enumerate() {
        let pad = (width as usize - 2 - message.len()) / 2;
        queue!(
            out,
            MoveTo(left, top + 1 + row as u16),
            Print(format!(
                "|{}{}{}|",
                " ".repeat(pad),
                message,
                " ".repeat(width as usize - 2 - pad - message.len())
            ))
        )?;
    }
    queue!(
        out,
        MoveTo(left, top + 1 + messages.len() as u16),
        Print(format!("+{}+", "-".repeat(width as usize - 2)))
    )?;
    out.flush()?;

    loop {
        if next_key()? == 'Q' {
            return Ok(());
        }
    }
}
