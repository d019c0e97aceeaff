//! Interactive menu that collects integers from a reader, runs the chosen
//! simulation and renders its log to a writer.

use crate::error::SimulationResult;
use crate::paging::Policy;
use crate::render;
use crate::simulator::Simulator;
use log::{debug, warn};
use std::collections::VecDeque;
use std::io::{BufRead, Write};

const BANNER_RULE: &str = "==================================";

/// Splits a line-oriented reader into whitespace-separated tokens.
pub struct TokenReader<R> {
    reader: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> TokenReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
        }
    }

    /// Returns `None` once the reader is exhausted.
    pub fn next_token(&mut self) -> std::io::Result<Option<String>> {
        while self.pending.is_empty() {
            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_string));
        }
        Ok(self.pending.pop_front())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Choice {
    Paging(Policy),
    Segmentation,
    Exit,
}

impl Choice {
    fn from_number(number: i64) -> Option<Self> {
        match number {
            1 => Some(Choice::Paging(Policy::Fifo)),
            2 => Some(Choice::Paging(Policy::Lru)),
            3 => Some(Choice::Segmentation),
            4 => Some(Choice::Exit),
            _ => None,
        }
    }
}

/// Whether the menu keeps going after a handler returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

pub struct Menu<R, W> {
    input: TokenReader<R>,
    output: W,
    simulator: Simulator,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    pub fn new(input: R, output: W, simulator: Simulator) -> Self {
        Self {
            input: TokenReader::new(input),
            output,
            simulator,
        }
    }

    /// Runs until the user chooses Exit or the input ends.
    pub fn run(&mut self) -> SimulationResult<()> {
        loop {
            self.print_menu()?;
            let Some(number) = self.prompt_int("Enter choice: ")? else {
                break;
            };

            let flow = match Choice::from_number(number) {
                Some(Choice::Exit) => Flow::Exit,
                Some(Choice::Paging(policy)) => self.paging(policy)?,
                Some(Choice::Segmentation) => self.segmentation()?,
                None => {
                    writeln!(self.output, "Invalid choice: {}", number)?;
                    Flow::Continue
                }
            };

            if flow == Flow::Exit {
                break;
            }
        }

        writeln!(self.output, "Exiting Program...")?;
        self.output.flush()?;
        Ok(())
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn print_menu(&mut self) -> SimulationResult<()> {
        writeln!(self.output)?;
        writeln!(self.output, "{}", BANNER_RULE)?;
        writeln!(self.output, " Dynamic Memory Management Visualizer")?;
        writeln!(self.output, "{}", BANNER_RULE)?;
        writeln!(self.output, "1. Paging (FIFO)")?;
        writeln!(self.output, "2. Paging (LRU)")?;
        writeln!(self.output, "3. Segmentation")?;
        writeln!(self.output, "4. Exit")?;
        Ok(())
    }

    fn paging(&mut self, policy: Policy) -> SimulationResult<Flow> {
        debug!("menu selected {} paging", policy);

        let Some(count) = self.prompt_count("Enter number of pages: ", "pages")? else {
            return Ok(Flow::Exit);
        };
        let Some(count) = count else {
            return Ok(Flow::Continue);
        };

        writeln!(self.output, "Enter page reference string:")?;
        let Some(pages) = self.read_ints(count)? else {
            return Ok(Flow::Exit);
        };

        let Some(frames) = self.prompt_int("Enter number of frames: ")? else {
            return Ok(Flow::Exit);
        };
        let Ok(frames) = usize::try_from(frames) else {
            writeln!(self.output, "Invalid frame count: {}", frames)?;
            return Ok(Flow::Continue);
        };

        match self.simulator.paging(policy, &pages, frames) {
            Ok(run) => render::render_paging(&mut self.output, policy, &run)?,
            Err(e) => writeln!(self.output, "Error: {}", e)?,
        }
        Ok(Flow::Continue)
    }

    fn segmentation(&mut self) -> SimulationResult<Flow> {
        debug!("menu selected segmentation");

        writeln!(self.output)?;
        let Some(memory_size) = self.prompt_int("Enter total memory size (KB): ")? else {
            return Ok(Flow::Exit);
        };

        let Some(count) = self.prompt_count("Enter number of segments: ", "segments")? else {
            return Ok(Flow::Exit);
        };
        let Some(count) = count else {
            return Ok(Flow::Continue);
        };

        writeln!(self.output, "Enter size of each segment:")?;
        let Some(segments) = self.read_ints(count)? else {
            return Ok(Flow::Exit);
        };

        match self.simulator.segmentation(memory_size, &segments) {
            Ok(run) => render::render_segmentation(&mut self.output, &run)?,
            Err(e) => writeln!(self.output, "Error: {}", e)?,
        }
        Ok(Flow::Continue)
    }

    /// Outer `None` means the input ended; inner `None` means the count was
    /// rejected and already reported.
    fn prompt_count(
        &mut self,
        prompt: &str,
        kind: &'static str,
    ) -> SimulationResult<Option<Option<usize>>> {
        let Some(number) = self.prompt_int(prompt)? else {
            return Ok(None);
        };
        let Ok(count) = usize::try_from(number) else {
            writeln!(self.output, "Invalid number of {}: {}", kind, number)?;
            return Ok(Some(None));
        };
        if let Err(e) = self.simulator.limits().check_items(kind, count) {
            writeln!(self.output, "Error: {}", e)?;
            return Ok(Some(None));
        }
        Ok(Some(Some(count)))
    }

    fn prompt_int(&mut self, prompt: &str) -> SimulationResult<Option<i64>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;
        self.next_int()
    }

    fn read_ints(&mut self, count: usize) -> SimulationResult<Option<Vec<i64>>> {
        let mut values = Vec::with_capacity(count);
        while values.len() < count {
            match self.next_int()? {
                Some(value) => values.push(value),
                None => return Ok(None),
            }
        }
        Ok(Some(values))
    }

    /// Skips tokens that are not integers, reporting each one.
    fn next_int(&mut self) -> SimulationResult<Option<i64>> {
        while let Some(token) = self.input.next_token()? {
            match token.parse::<i64>() {
                Ok(value) => return Ok(Some(value)),
                Err(_) => {
                    warn!("ignoring non-numeric input {:?}", token);
                    writeln!(self.output, "Invalid number '{}', ignored", token)?;
                }
            }
        }
        Ok(None)
    }
}
