//! Terminal layer: all crossterm I/O lives here.
//!
//! `TerminalSession` owns the raw-mode terminal for as long as it is alive
//! and hands key presses to the frame loop as `Command`s.  Dropping it puts
//! the terminal back the way it was found.

use std::io::{self, stdout, BufWriter, Stdout, Write};
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    style::{self, Color, Print},
    terminal, ExecutableCommand, QueueableCommand,
};
use dino_runner::driver::Platform;
use dino_runner::entities::Command;
use dino_runner::render::{Frame, StatusLine, StatusPart};
use dino_runner::sprite::HEIGHT;

// ── Colour palette ────────────────────────────────────────────────────────────

const C_BORDER: Color = Color::DarkBlue;
const C_CANVAS: Color = Color::White;
const C_HUD_SCORE: Color = Color::Yellow;
const C_HUD_LIVES: Color = Color::Red;
const C_HUD_INV: Color = Color::Cyan;
const C_HINT: Color = Color::DarkGrey;
const C_GAME_OVER: Color = Color::Red;

// ── Key mapping ───────────────────────────────────────────────────────────────

fn command_for(key: &KeyEvent) -> Option<Command> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    match key.code {
        KeyCode::Char(' ') => Some(Command::Jump),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(Command::Restart),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(Command::Quit),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(Command::Quit)
        }
        _ => None,
    }
}

// ── Session ───────────────────────────────────────────────────────────────────

/// Alternate screen plus hidden cursor on top of raw mode. Raw mode is
/// entered first and the guard exists from that point on, so a failure in
/// any later setup step still unwinds through `Drop`.
struct ScreenGuard<W: Write> {
    out: W,
    leave_raw: fn() -> io::Result<()>,
}

impl<W: Write> ScreenGuard<W> {
    fn enter(
        out: W,
        enter_raw: fn() -> io::Result<()>,
        leave_raw: fn() -> io::Result<()>,
    ) -> io::Result<Self> {
        enter_raw()?;
        let mut guard = Self { out, leave_raw };
        guard.out.execute(terminal::EnterAlternateScreen)?;
        guard.out.execute(cursor::Hide)?;
        guard.out.execute(terminal::Clear(terminal::ClearType::All))?;
        Ok(guard)
    }
}

impl<W: Write> Drop for ScreenGuard<W> {
    fn drop(&mut self) {
        let _ = self.out.execute(style::ResetColor);
        let _ = self.out.execute(cursor::Show);
        let _ = self.out.execute(terminal::LeaveAlternateScreen);
        let _ = self.out.flush();
        let _ = (self.leave_raw)();
    }
}

pub struct TerminalSession {
    screen: ScreenGuard<BufWriter<Stdout>>,
    rx: mpsc::Receiver<Event>,
}

impl TerminalSession {
    pub fn start() -> io::Result<Self> {
        let screen = ScreenGuard::enter(
            BufWriter::new(stdout()),
            terminal::enable_raw_mode,
            terminal::disable_raw_mode,
        )?;

        // Blocking reads happen on their own thread so polling never stalls
        // the frame loop.
        let (tx, rx) = mpsc::channel::<Event>();
        thread::spawn(move || loop {
            match event::read() {
                Ok(ev) => {
                    if tx.send(ev).is_err() {
                        break; // receiver dropped, session over
                    }
                }
                Err(_) => break,
            }
        });

        Ok(Self { screen, rx })
    }
}

impl Platform for TerminalSession {
    fn poll_command(&mut self) -> Option<Command> {
        while let Ok(ev) = self.rx.try_recv() {
            if let Event::Key(key) = ev {
                if let Some(command) = command_for(&key) {
                    return Some(command);
                }
            }
        }
        None
    }

    fn present(&mut self, frame: &Frame) -> io::Result<()> {
        render(&mut self.screen.out, frame)
    }

    fn pause(&mut self, interval: Duration) {
        thread::sleep(interval);
    }
}

// ── Drawing ───────────────────────────────────────────────────────────────────

/// Status line sits under the playfield and its two border rows.
const STATUS_ROW: u16 = HEIGHT as u16 + 2;

/// Render one complete frame.
pub fn render<W: Write>(out: &mut W, frame: &Frame) -> io::Result<()> {
    out.queue(cursor::MoveTo(0, 0))?;

    draw_playfield(out, frame)?;
    draw_status(out, &frame.status)?;

    out.queue(style::ResetColor)?;
    out.flush()?;
    Ok(())
}

fn draw_playfield<W: Write>(out: &mut W, frame: &Frame) -> io::Result<()> {
    for (y, line) in frame.bordered_rows().iter().enumerate() {
        out.queue(cursor::MoveTo(0, y as u16))?;
        match line.strip_prefix('|').and_then(|l| l.strip_suffix('|')) {
            Some(inner) => {
                out.queue(style::SetForegroundColor(C_BORDER))?;
                out.queue(Print('|'))?;
                out.queue(style::SetForegroundColor(C_CANVAS))?;
                out.queue(Print(inner))?;
                out.queue(style::SetForegroundColor(C_BORDER))?;
                out.queue(Print('|'))?;
            }
            None => {
                out.queue(style::SetForegroundColor(C_BORDER))?;
                out.queue(Print(line))?;
            }
        }
    }
    Ok(())
}

fn part_colour(part: StatusPart) -> Color {
    match part {
        StatusPart::Score => C_HUD_SCORE,
        StatusPart::LivesLabel | StatusPart::Hint => C_HINT,
        StatusPart::Hearts => C_HUD_LIVES,
        StatusPart::Invincible => C_HUD_INV,
    }
}

fn draw_status<W: Write>(out: &mut W, status: &StatusLine) -> io::Result<()> {
    out.queue(cursor::MoveTo(0, STATUS_ROW))?;
    out.queue(terminal::Clear(terminal::ClearType::UntilNewLine))?;
    for (part, text) in status.parts() {
        out.queue(style::SetForegroundColor(part_colour(part)))?;
        out.queue(Print(text))?;
    }

    // Banner line is cleared every frame so it disappears after a restart
    out.queue(cursor::MoveTo(0, STATUS_ROW + 1))?;
    out.queue(terminal::Clear(terminal::ClearType::UntilNewLine))?;
    if let Some(banner) = status.banner() {
        out.queue(style::SetForegroundColor(C_GAME_OVER))?;
        out.queue(Print(banner))?;
    }
    Ok(())
}
