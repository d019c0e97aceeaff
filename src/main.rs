//! memviz - Dynamic Memory Management Visualizer

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use log::info;
use memviz::config::{Limits, DEFAULT_MAX_ITEMS};
use memviz::menu::Menu;
use memviz::render;
use memviz::{PageId, Policy, Simulator};
use rand::Rng;
use std::io::{self, Write};

/// Visualizes FIFO and LRU page replacement and segmentation allocation.
///
/// Without a subcommand an interactive menu is started.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,

    /// Maximum length of a reference string or segment list
    #[arg(short, long, default_value_t = DEFAULT_MAX_ITEMS)]
    max_items: usize,

    /// Maximum number of frames
    #[arg(long, default_value_t = DEFAULT_MAX_ITEMS)]
    max_frames: usize,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Replay a reference string with FIFO page replacement
    Fifo(PagingArgs),

    /// Replay a reference string with LRU page replacement
    Lru(PagingArgs),

    /// Allocate segments into a single memory pool
    Segmentation {
        /// Total memory size (KB)
        #[arg(short = 's', long)]
        memory_size: i64,

        /// Segment sizes (KB) in request order
        #[arg(allow_negative_numbers = true)]
        segments: Vec<i64>,
    },
}

#[derive(clap::Args, Debug)]
struct PagingArgs {
    /// Number of frames
    #[arg(short, long)]
    frames: usize,

    /// Generate a random reference string of this length
    #[arg(short, long, conflicts_with = "pages")]
    random: Option<usize>,

    /// Largest page number produced by --random
    #[arg(long, default_value_t = 9)]
    max_page: PageId,

    /// Page reference string
    #[arg(allow_negative_numbers = true)]
    pages: Vec<PageId>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Set up logging
    let log_level = if args.debug { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let simulator = Simulator::new(Limits::new(args.max_items, args.max_frames));

    match args.command {
        None => {
            let stdin = io::stdin();
            let stdout = io::stdout();
            let mut menu = Menu::new(stdin.lock(), stdout.lock(), simulator);
            menu.run().context("Interactive session failed")?;
        }
        Some(Command::Fifo(paging)) => run_paging(&simulator, Policy::Fifo, paging)?,
        Some(Command::Lru(paging)) => run_paging(&simulator, Policy::Lru, paging)?,
        Some(Command::Segmentation {
            memory_size,
            segments,
        }) => {
            let run = simulator
                .segmentation(memory_size, &segments)
                .context("Segmentation failed")?;
            let mut stdout = io::stdout().lock();
            render::render_segmentation(&mut stdout, &run)?;
            stdout.flush()?;
        }
    }

    Ok(())
}

fn run_paging(simulator: &Simulator, policy: Policy, args: PagingArgs) -> Result<()> {
    let pages = match args.random {
        Some(count) => random_pages(simulator, count, args.max_page)?,
        None => args.pages,
    };

    let run = simulator
        .paging(policy, &pages, args.frames)
        .with_context(|| format!("{} simulation failed", policy))?;

    let mut stdout = io::stdout().lock();
    render::render_paging(&mut stdout, policy, &run)?;
    stdout.flush()?;
    Ok(())
}

/// Creates a reference string of `count` pages drawn from `0..=max_page`.
///
/// The count is checked against the simulator's limits before any page is
/// generated.
fn random_pages(simulator: &Simulator, count: usize, max_page: PageId) -> Result<Vec<PageId>> {
    simulator
        .limits()
        .check_items("pages", count)
        .context("Cannot generate reference string")?;
    if max_page < 0 {
        bail!("--max-page must not be negative, got {}", max_page);
    }

    let mut rng = rand::thread_rng();
    let pages: Vec<PageId> = (0..count).map(|_| rng.gen_range(0..=max_page)).collect();
    info!("generated reference string {:?}", pages);
    Ok(pages)
}

#[cfg(test)]
mod tests {
    use super::*;
    use memviz::SimulationError;

    #[test]
    fn test_random_pages_within_range() -> Result<()> {
        let pages = random_pages(&Simulator::default(), 40, 5)?;

        assert_eq!(pages.len(), 40);
        assert!(pages.iter().all(|&page| (0..=5).contains(&page)));
        Ok(())
    }

    #[test]
    fn test_random_pages_checks_limit_first() {
        let err = random_pages(&Simulator::default(), usize::MAX, 9).unwrap_err();

        assert!(matches!(
            err.downcast_ref::<SimulationError>(),
            Some(SimulationError::TooManyItems { max: 50, .. })
        ));
    }

    #[test]
    fn test_random_pages_rejects_negative_max_page() {
        assert!(random_pages(&Simulator::default(), 3, -1).is_err());
    }
}
