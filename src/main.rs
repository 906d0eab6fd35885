use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use serde::Serialize;
use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing_subscriber::EnvFilter;

use grahamscan::data::{BraillePrinter, ConvexHull, Point};
use grahamscan::io::read_points;
use grahamscan::session::{Session, DEFAULT_DELAY};

#[derive(Parser)]
#[command(name = "grahamscan")]
#[command(about = "Compute and draw the convex hull of a set of points")]
struct Cmd {
  /// File with one point per line, "x y" or "x,y". Reads stdin when absent.
  input: Option<PathBuf>,

  /// Milliseconds between scheduling the computation and running it
  #[arg(long, default_value_t = DEFAULT_DELAY.as_millis() as u64)]
  delay_ms: u64,

  #[arg(long, value_enum, default_value_t = Format::Text)]
  format: Format,

  /// Canvas width in Braille dots
  #[arg(long, default_value_t = BraillePrinter::DEFAULT_SIZE.0)]
  width: usize,

  /// Canvas height in Braille dots
  #[arg(long, default_value_t = BraillePrinter::DEFAULT_SIZE.1)]
  height: usize,

  /// Only print the hull vertices
  #[arg(long)]
  no_render: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
  /// Hull vertices, one per line, followed by a drawing
  Text,
  /// {"points": [[x, y], ...], "hull": [[x, y], ...]}
  Json,
}

#[derive(Serialize)]
struct Report<'a> {
  points: &'a [Point],
  hull: &'a ConvexHull,
}

fn main() -> Result<()> {
  init_logging();
  let cmd = Cmd::parse();

  let points = match &cmd.input {
    Some(path) => load(path)?,
    None => read_points(io::stdin().lock()).context("cannot read points from stdin")?,
  };

  let mut session = Session::new();
  for pt in points {
    session.add_point(pt);
  }
  let hull = compute(&mut session, Duration::from_millis(cmd.delay_ms));
  tracing::info!(
    points = session.points().len(),
    vertices = hull.len(),
    "hull ready"
  );

  let stdout = io::stdout();
  let mut out = stdout.lock();
  match cmd.format {
    Format::Json => {
      let report = Report {
        points: session.points(),
        hull: &hull,
      };
      serde_json::to_writer(&mut out, &report)?;
      writeln!(out)?;
    }
    Format::Text => {
      for pt in hull.iter() {
        writeln!(out, "{}", pt)?;
      }
      if !cmd.no_render {
        let printer = BraillePrinter::new(session.points(), &hull).with_size(cmd.width, cmd.height);
        write!(out, "{}", printer)?;
      }
    }
  }
  Ok(())
}

// Logs go to stderr so that stdout only carries the hull. RUST_LOG
// overrides the default level.
fn init_logging() {
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(io::stderr)
    .with_target(false)
    .init();
}

fn load(path: &Path) -> Result<Vec<Point>> {
  let file = File::open(path).with_context(|| format!("cannot open {}", path.display()))?;
  let points = read_points(BufReader::new(file))
    .with_context(|| format!("cannot read points from {}", path.display()))?;
  tracing::info!(path = %path.display(), points = points.len(), "loaded points");
  Ok(points)
}

// Schedule, wait and fire. Too few points give the empty hull.
fn compute(session: &mut Session, delay: Duration) -> ConvexHull {
  if let Err(err) = session.trigger() {
    tracing::warn!(points = session.points().len(), "no hull: {}", err);
    return ConvexHull::empty();
  }
  if !delay.is_zero() {
    std::thread::sleep(delay);
  }
  session.fire().cloned().unwrap_or_default()
}
