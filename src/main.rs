use clap::Parser;
use crossterm::{cursor, execute, terminal};
use tracing_subscriber::EnvFilter;

use mazecarve::generators::recursive_backtrack;
use mazecarve::maze::{Grid, MazeError};
use mazecarve::render::render_lines;
use mazecarve::solvers;

/// Generate a perfect maze and print it with its corner-to-corner solution.
#[derive(Parser)]
#[command(name = "mazecarve", version, about)]
struct Args {
    /// Number of cell rows
    #[arg(long, default_value_t = 30, value_parser = clap::value_parser!(u16).range(1..))]
    rows: u16,

    /// Number of cell columns
    #[arg(long, default_value_t = 30, value_parser = clap::value_parser!(u16).range(1..))]
    cols: u16,

    /// Random seed for reproducible mazes
    #[arg(short, long)]
    seed: Option<u64>,

    /// Print below the current screen contents instead of clearing first
    #[arg(long)]
    no_clear: bool,
}

fn main() -> Result<(), MazeError> {
    // Logs go to stderr; stdout carries the rendered maze
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let mut grid = Grid::new(args.rows, args.cols)?;
    recursive_backtrack(&mut grid, args.seed);
    let path = solvers::solve(&grid);

    if !args.no_clear {
        execute!(
            std::io::stdout(),
            terminal::Clear(terminal::ClearType::All),
            cursor::MoveTo(0, 0),
        )?;
    }

    for line in render_lines(&grid, path.as_deref().unwrap_or(&[])) {
        println!("{line}");
    }
    match path {
        Some(path) => println!(
            "Solved: {} cells from (0, 0) to ({}, {}).",
            path.len(),
            args.rows - 1,
            args.cols - 1
        ),
        None => println!("No path found."),
    }
    Ok(())
}
