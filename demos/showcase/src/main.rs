//! showcase — end-to-end demo of the psim process lifecycle simulator.
//!
//! Builds the reference three-process population, auto-advances it the way
//! the interactive UI would (a batch of cycles with a pause between each so
//! a presentation layer could redraw), then runs the simulation to
//! settlement, writing CSVs and printing a final JSON snapshot.  Swap the
//! printing observer for a real chart widget to turn this into the GUI.

use std::path::Path;
use std::time::{Duration, Instant};

use anyhow::Result;

use psim_core::Cycle;
use psim_engine::{CycleObserver, CycleReport, EngineBuilder};
use psim_output::{CsvWriter, OutputObserver, OutputWriter};
use psim_process::ProcessStore;

// ── Constants ─────────────────────────────────────────────────────────────────

const SEED:              u64 = 42;
const AUTO_CYCLES:       u64 = 5;   // one "auto simulate" button press
const INTER_CYCLE_DELAY: Duration = Duration::from_millis(500);

// ── Observer: print each cycle, forward to the CSV writer ────────────────────

struct ConsoleObserver<W: OutputWriter> {
    inner:        OutputObserver<W>,
    cycles_seen:  u64,
}

impl<W: OutputWriter> ConsoleObserver<W> {
    fn new(inner: OutputObserver<W>) -> Self {
        Self { inner, cycles_seen: 0 }
    }
}

impl<W: OutputWriter> CycleObserver for ConsoleObserver<W> {
    fn on_cycle_end(&mut self, cycle: Cycle, processes: &ProcessStore, report: &CycleReport) {
        self.cycles_seen += 1;
        println!("  {report}");
        self.inner.on_cycle_end(cycle, processes, report);
    }

    fn on_run_end(&mut self, final_cycle: Cycle) {
        self.inner.on_run_end(final_cycle);
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    println!("=== showcase — psim process lifecycle simulator ===");
    println!("Processes: 3 (reference set)  |  Seed: {SEED}");
    println!();

    // 1. Build the engine with the reference default population.
    let mut engine = EngineBuilder::new(SEED).build()?;

    // 2. Set up CSV output.
    std::fs::create_dir_all("output/showcase")?;
    let writer = CsvWriter::new(Path::new("output/showcase"))?;
    let mut obs = ConsoleObserver::new(OutputObserver::new(writer));

    // 3. One auto-advance batch, paced like the interactive UI.
    println!("Auto-advancing {AUTO_CYCLES} cycles ({} ms between cycles):", INTER_CYCLE_DELAY.as_millis());
    engine.run_cycles(AUTO_CYCLES, INTER_CYCLE_DELAY, &mut obs)?;
    println!();

    // 4. Run to settlement, unpaced.  This fires on_run_end, which flushes
    //    the CSV files.
    println!("Running to settlement:");
    let t0 = Instant::now();
    let final_cycle = engine.run_to_settlement(Duration::ZERO, &mut obs)?;
    let elapsed = t0.elapsed();

    if let Some(e) = obs.inner.take_error() {
        eprintln!("output error: {e}");
    }

    // 5. Summary.
    println!();
    println!(
        "Settled at {final_cycle} ({} cycles total) in {:.3} s",
        obs.cycles_seen,
        elapsed.as_secs_f64()
    );
    println!("  process_snapshots.csv : {} rows", obs.cycles_seen * engine.processes().len() as u64);
    println!("  cycle_summaries.csv   : {} rows", obs.cycles_seen);
    println!();

    // 6. Final per-process table.
    println!(
        "{:<6} {:<8} {:<12} {:>9} {:>8} {:>6} {:>7}",
        "Proc", "Prio", "State", "Progress", "Mem(MB)", "Core", "Thread"
    );
    println!("{}", "-".repeat(62));
    for record in engine.processes().iter() {
        println!(
            "{:<6} {:<8} {:<12} {:>8.0}% {:>8} {:>6} {:>7}",
            record.id.to_string(),
            record.priority.to_string(),
            record.current_state().to_string(),
            record.progress_ratio() * 100.0,
            record.memory_usage_mb,
            record.core_affinity,
            record.thread_affinity,
        );
    }
    println!();

    // 7. Final snapshot as JSON — what an out-of-process viewer would consume.
    let snapshot = engine.snapshot();
    println!("Final snapshot (JSON):");
    println!("{}", serde_json::to_string_pretty(&snapshot)?);

    Ok(())
}
