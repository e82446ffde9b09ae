//! Command-line shell around the replacement engine.
//!
//! Thin by design: parse a policy, a frame count, and a reference
//! string, replay it through a [`FrameTable`], and render the
//! per-reference trace plus a summary line. Everything with actual
//! semantics lives in the library.

use std::fmt::Write as _;
use std::io::{self, BufRead};

use clap::Parser;

use pagesim::{FrameTable, PageId, Policy};

/// Simulate FIFO/LRU/LFU page replacement over a reference string.
#[derive(Debug, Parser)]
#[command(name = "pagesim", version, about)]
struct Args {
    /// Replacement policy: FIFO, LRU, or LFU (case-insensitive).
    policy: Policy,

    /// Number of physical frames (must be at least 1).
    frames: usize,

    /// Page reference string. If omitted, one line of
    /// whitespace-separated page numbers is read from stdin.
    refs: Vec<u32>,
}

fn main() {
    let args = Args::parse();
    if let Err(err) = simulate(args) {
        eprintln!("pagesim: {err}");
        std::process::exit(1);
    }
}

fn simulate(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let refs = if args.refs.is_empty() {
        read_refs_from_stdin()?
    } else {
        args.refs
    };
    if refs.is_empty() {
        return Err("no page references provided".into());
    }

    let references: Vec<PageId> = refs.into_iter().map(PageId::new).collect();
    let mut table = FrameTable::new(args.frames, args.policy)?;

    println!("=== {} (frames={}) ===", args.policy, args.frames);

    // Drive the accesses one at a time instead of calling run(), so the
    // frame contents can be shown after every reference.
    let mut clock = table.clock();
    for &page in &references {
        clock += 1;
        let outcome = table.access(page, clock)?;
        println!(
            "{:>3}: {}  {}",
            page.0,
            render_frames(table.frames()),
            outcome.label()
        );
    }

    println!("Summary: {}", table.stats());
    Ok(())
}

/// Render slot contents as `[ 1 2 . ]`, `.` marking a free frame.
fn render_frames(frames: &[Option<PageId>]) -> String {
    let mut out = String::from("[");
    for slot in frames {
        match slot {
            Some(page) => {
                let _ = write!(out, " {}", page.0);
            }
            None => out.push_str(" ."),
        }
    }
    out.push_str(" ]");
    out
}

/// Read one line of whitespace-separated page numbers from stdin.
fn read_refs_from_stdin() -> Result<Vec<u32>, Box<dyn std::error::Error>> {
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;

    line.split_whitespace()
        .map(|token| {
            token
                .parse::<u32>()
                .map_err(|_| format!("bad page reference {token:?}").into())
        })
        .collect()
}
