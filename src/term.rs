use crate::{TermInt, Coords};
use std::{io::{Stdout, Write, stdout}, time::Duration};

use anyhow::{Context, Result};
use crossterm::{cursor, execute, queue, style, terminal};
use crossterm::terminal::{ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::event::{Event, KeyEvent, read, poll};
use log::error;

pub struct TermManager {
    width: TermInt,
    height: TermInt,
    stdout: Stdout,
    active: bool,
}

impl TermManager {
    pub fn new() -> Result<Self> {
        let (width, height) = terminal::size().context("Error reading terminal size")?;
        Ok(TermManager { width, height, stdout: stdout(), active: false })
    }

    pub fn setup(&mut self) -> Result<()> {
        execute!(self.stdout, EnterAlternateScreen).context("Error entering alt screen")?;
        self.active = true;
        terminal::enable_raw_mode().context("Error enabling raw mode")?;
        execute!(self.stdout, cursor::Hide, cursor::DisableBlinking, terminal::Clear(ClearType::All))
            .context("Error preparing the screen")?;
        Ok(())
    }

    /// Leaves raw mode and the alternate screen. Safe to call more than once.
    pub fn restore(&mut self) {
        if !self.active {
            return;
        }
        self.active = false;

        if let Err(err) = terminal::disable_raw_mode() {
            error!("failed to disable raw mode: {}", err);
        }
        if let Err(err) = execute!(self.stdout, cursor::Show, cursor::EnableBlinking, LeaveAlternateScreen) {
            error!("failed to leave alternate screen: {}", err);
        }
    }

    /// Waits up to `timeout` for the first key event, then drains whatever else is queued.
    pub fn read_key_events(&self, timeout: Duration) -> Result<Vec<KeyEvent>> {
        let mut events = vec![];
        let mut wait = timeout;

        while poll(wait).context("Error polling terminal events")? {
            if let Event::Key(ev) = read().context("Error reading terminal event")? {
                events.push(ev);
            }
            wait = Duration::ZERO;
        }

        Ok(events)
    }

    /// Draws `lines` centered on the screen.
    pub fn draw_frame(&mut self, lines: &[String]) -> Result<()> {
        let frame_w = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0) as TermInt;
        let frame_h = lines.len() as TermInt;
        let top_left: Coords = (
            self.width.saturating_sub(frame_w) / 2,
            self.height.saturating_sub(frame_h) / 2,
        );

        for (i, line) in lines.iter().enumerate() {
            queue!(self.stdout, cursor::MoveTo(top_left.0, top_left.1 + i as TermInt), style::Print(line))
                .context("Error drawing frame")?;
        }

        self.stdout.flush().context("Error flushing")?;
        Ok(())
    }
}

impl Drop for TermManager {
    fn drop(&mut self) {
        self.restore();
    }
}
