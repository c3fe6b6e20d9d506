//! Progress box for long file writes.

use std::io::Write;
use std::sync::mpsc::{self, TryRecvError};
use std::thread;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyModifiers};
use zeroize::Zeroize;

use super::{Sink, SinkError};
use crate::terminal::{
    RawModeGuard, box_bottom, box_line, box_top, clear, flush, format_number, print_centered,
    progress_bar_box, reset_terminal,
};

/// Redraw interval, in candidates.
const REDRAW_EVERY: usize = 4_096;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Complete(usize),
    Interrupted(usize),
}

impl Outcome {
    pub fn written(self) -> usize {
        match self {
            Self::Complete(n) | Self::Interrupted(n) => n,
        }
    }
}

fn non_blocking_read(timeout: Duration) -> Option<Event> {
    if event::poll(timeout).unwrap_or(false) {
        event::read().ok()
    } else {
        None
    }
}

fn draw_header(sink: &Sink, total: Option<usize>) {
    box_top("Generating");
    match total {
        Some(n) => box_line(&format!("Ceiling: {} candidates", format_number(n))),
        None => box_line("Ceiling: none"),
    }
    if let Some(path) = sink.path() {
        let full = std::fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
        box_line(&format!("Output: {}", full.display()));
    }
    box_bottom();
    println!();
    print_centered("[Esc/Ctrl+C] to interrupt");
    println!();
}

/// Stream `candidates` into `sink` while drawing a progress box.
///
/// `total` is the ceiling when one is set; without it the bar stays empty and
/// only the running count moves. Esc or Ctrl+C stops the run early.
pub fn with_progress<I>(
    candidates: I,
    sink: &mut Sink,
    total: Option<usize>,
) -> Result<Outcome, SinkError>
where
    I: IntoIterator<Item = String>,
{
    reset_terminal();
    clear();
    draw_header(sink, total);

    let (tx, rx) = mpsc::channel::<()>();
    let (close_tx, close_rx) = mpsc::channel::<()>();
    let raw_guard = RawModeGuard::new().ok();

    let reader = thread::spawn(move || {
        let timeout = Duration::from_millis(10);
        loop {
            if let Ok(_) | Err(TryRecvError::Disconnected) = close_rx.try_recv() {
                break;
            }
            if let Some(Event::Key(key)) = non_blocking_read(timeout) {
                let is_ctrl_c =
                    key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL);
                if is_ctrl_c || key.code == KeyCode::Esc {
                    let _ = tx.send(());
                    break;
                }
            }
        }
    });

    print!("\x1b[?25l\r\n\r\n\r\n");
    flush();

    let start = Instant::now();
    let before = sink.written();
    let mut interrupted = false;
    let mut result = Ok(());

    for mut candidate in candidates {
        let pushed = sink.push(&candidate);
        candidate.zeroize();
        if let Err(e) = pushed {
            result = Err(e);
            break;
        }

        let n = sink.written() - before;
        if n % REDRAW_EVERY == 0 {
            if rx.try_recv().is_ok() {
                interrupted = true;
                break;
            }
            draw_progress(n, total, start);
        }
    }

    let _ = close_tx.send(());
    let _ = reader.join();
    drop(raw_guard);

    print!("\x1b[?25h");
    let _ = std::io::stdout().flush();
    reset_terminal();
    result?;

    let n = sink.written() - before;
    draw_progress(n, total, start);

    println!();
    box_top(if interrupted { "Interrupted" } else { "Complete" });
    box_line(&format!(
        "{} candidate(s) written in {}ms",
        format_number(n),
        start.elapsed().as_millis()
    ));
    box_bottom();
    println!();

    Ok(if interrupted {
        Outcome::Interrupted(n)
    } else {
        Outcome::Complete(n)
    })
}

fn draw_progress(n: usize, total: Option<usize>, start: Instant) {
    let secs = start.elapsed().as_secs_f32();
    let (pct, stats) = match total {
        Some(max) if max > 0 => {
            let pct = (n as f32 / max as f32) * 100.0;
            let stats = format!(
                "{} of {} • {:.1}% • {:.1}s",
                format_number(n),
                format_number(max),
                pct,
                secs
            );
            (pct, stats)
        }
        _ => (0.0, format!("{} written • {:.1}s", format_number(n), secs)),
    };
    print!("\x1b[3A");
    progress_bar_box(pct, &stats);
}
