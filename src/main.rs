//! CLI entry point for inspecting hexagonal and star board layouts

use std::fmt;
use std::io::{self, Write};

use clap::{Parser, ValueEnum};
use sternhalma::{Axial, HexGrid, REGION_COUNT, StarBoard};

/// Inner radius of the classic Sternhalma field
const DEFAULT_RADIUS: i32 = 4;

/// Command-line arguments for the board inspection tool
#[derive(Parser)]
#[command(name = "sternhalma")]
#[command(version, about = "Inspect hexagonal and star board layouts")]
struct Cli {
    /// Board shape to inspect
    #[arg(value_enum, default_value_t = Shape::Star)]
    shape: Shape,

    /// Field radius (the inner radius for star boards)
    #[arg(short, long, default_value_t = DEFAULT_RADIUS)]
    radius: i32,

    /// Print the cell layout as text rows
    #[arg(short, long)]
    layout: bool,
}

/// Supported board silhouettes
#[derive(Clone, Copy, ValueEnum)]
enum Shape {
    /// Plain hexagonal map
    Hexagon,
    /// Six pointed Sternhalma star
    Star,
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hexagon => write!(f, "hexagon"),
            Self::Star => write!(f, "star"),
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.shape {
        Shape::Hexagon => report_hexagon(&mut out, &cli),
        Shape::Star => report_star(&mut out, &cli),
    }
}

fn report_hexagon(
    out: &mut impl Write,
    cli: &Cli,
) -> Result<(), Box<dyn std::error::Error>> {
    let grid = HexGrid::<()>::new(cli.radius)?;

    let total = grid.keys().count();
    writeln!(out, "Hexagonal map, radius {}", grid.radius())?;
    writeln!(out, "  cells: {total}")?;
    for ring in 0..=grid.radius() {
        let count = grid.ring_keys(ring).count();
        writeln!(out, "  ring {ring}: {count} cells")?;
    }

    if cli.layout {
        writeln!(out)?;
        write_layout(out, grid.radius(), |key| {
            grid.is_valid(key).then_some('.')
        })?;
    }

    Ok(())
}

fn report_star(out: &mut impl Write, cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let board = StarBoard::<()>::new(cli.radius)?;

    let total = board.keys().count();
    writeln!(
        out,
        "Star board, inner radius {} (grid radius {})",
        board.inner_radius(),
        board.radius()
    )?;
    writeln!(out, "  cells: {total}")?;
    for ring in 0..=board.radius() {
        let count = board.ring_keys(ring).count();
        writeln!(out, "  ring {ring}: {count} cells")?;
    }
    for region in 0..REGION_COUNT {
        let count = board.outer_region_keys(region)?.count();
        writeln!(out, "  region {region}: {count} cells")?;
    }

    if cli.layout {
        writeln!(out)?;
        write_layout(out, board.radius(), |key| cell_marker(&board, key))?;
    }

    Ok(())
}

/// Marker for one star board cell: the region digit for point cells, a dot
/// for the inner hexagon, nothing for gaps.
fn cell_marker(board: &StarBoard<()>, key: Axial) -> Option<char> {
    if !board.contains(key) {
        return None;
    }

    match board.outer_region_id(key) {
        Ok(Some(region)) => char::from_digit(region as u32, 10),
        Ok(None) => Some('.'),
        Err(_) => None,
    }
}

/// Write the board as text rows, one per r axis value, sheared so that the
/// hexagonal neighbourhoods stay readable.
fn write_layout(
    out: &mut impl Write,
    radius: i32,
    marker: impl Fn(Axial) -> Option<char>,
) -> io::Result<()> {
    for r in -radius..=radius {
        let pad = " ".repeat((r + radius) as usize);
        write!(out, "{pad}")?;
        for q in -radius..=radius {
            let mark = marker(Axial::new(q, r)).unwrap_or(' ');
            write!(out, "{mark} ")?;
        }
        writeln!(out)?;
    }

    Ok(())
}
