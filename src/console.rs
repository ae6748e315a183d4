//! Console presentation of a running simulation

use std::io::Write;
use std::thread;
use std::time::Duration;

use anyhow::Result;
use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::terminal::{Clear, ClearType};

use crate::simulation::{Direction, Frame, SimWorld};

/// Writes one frame per tick, pausing between ticks so the sweep can be followed
pub struct ConsolePresenter<W: Write> {
    out: W,
    clear_screen: bool,
    tick_delay: Duration,
}

impl<W: Write> ConsolePresenter<W> {
    pub fn new(out: W, clear_screen: bool, tick_delay: Duration) -> Self {
        Self {
            out,
            clear_screen,
            tick_delay,
        }
    }

    /// Show a frame of the run
    pub fn show(&mut self, world: &SimWorld, frame: Frame) -> Result<()> {
        if self.clear_screen {
            queue!(self.out, Clear(ClearType::All), MoveTo(0, 0))?;
        }

        let direction = match world.elevator.direction {
            Direction::Up => "subiendo",
            Direction::Down => "bajando",
        };
        writeln!(
            self.out,
            "Paso {} | Piso {} | Elevador {}",
            world.tick, world.elevator.current_floor, direction
        )?;
        write!(self.out, "{}", world.render())?;

        if frame == Frame::Final {
            writeln!(
                self.out,
                "Llegaron {} de {} clientes",
                world.arrived_count(),
                world.passengers.len()
            )?;
        }
        self.out.flush()?;

        // No pause after the last tick, the final frame follows right away
        if frame == Frame::Tick && !world.is_finished() && !self.tick_delay.is_zero() {
            thread::sleep(self.tick_delay);
        }
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
