//! headless — drives one pet without a window and logs what it does.
//!
//! Time is simulated: every tick advances the reminder clock by the tick
//! interval, so a minute of pet life runs in well under a second.  A demo
//! reminder is scheduled a few seconds in, and a scripted drag/release and
//! thunder shock exercise the host operations.
//!
//! ```text
//! cargo run -p headless -- [config.json]
//! RUST_LOG=debug cargo run -p headless      # every state entry and save
//! ```

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result};
use chrono::Duration;
use serde::Deserialize;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use pet_behavior::{BehaviorTuning, PlaceholderFrames, StateKind};
use pet_core::{PetConfig, Point, Tick};
use pet_schedule::{
    FileReminderStore, ManualClock, Reminder, ReminderClock, ReminderScheduler, SystemClock,
};
use pet_sim::{PetBuilder, PetObserver};

// ── Configuration ─────────────────────────────────────────────────────────────

#[derive(Deserialize)]
#[serde(default)]
struct DemoConfig {
    pet:            PetConfig,
    tuning:         BehaviorTuning,
    /// Reminder file, created on first save.
    reminders_path: PathBuf,
    /// Seconds of simulated time before the demo reminder is due.
    reminder_secs:  i64,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            pet:            PetConfig::default(),
            tuning:         BehaviorTuning::default(),
            reminders_path: PathBuf::from("output/headless/reminders.txt"),
            reminder_secs:  20,
        }
    }
}

fn load_config(path: Option<&Path>) -> Result<DemoConfig> {
    let Some(path) = path else {
        return Ok(DemoConfig::default());
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing config {}", path.display()))
}

// ── Observer ──────────────────────────────────────────────────────────────────

/// Advances the reminder clock in step with the ticks and tallies activity.
struct DemoObserver {
    clock:       Arc<ManualClock>,
    tick_step:   Duration,
    transitions: usize,
    fired:       Vec<String>,
    ticks_in:    BTreeMap<&'static str, u64>,
}

impl PetObserver for DemoObserver {
    fn on_reminder(&mut self, tick: Tick, reminder: &Reminder) {
        info!(%tick, content = %reminder.content, "pet shows reminder balloon");
        self.fired.push(reminder.content.clone());
    }

    fn on_transition(&mut self, tick: Tick, from: StateKind, to: StateKind) {
        info!(%tick, %from, %to, "transition");
        self.transitions += 1;
    }

    fn on_tick_end(&mut self, _tick: Tick, state: StateKind) {
        *self.ticks_in.entry(state.name()).or_default() += 1;
        self.clock.advance(self.tick_step);
    }

    fn on_run_end(&mut self, final_tick: Tick) {
        info!(%final_tick, "run complete");
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 1. Configuration.
    let config_path = std::env::args().nth(1).map(PathBuf::from);
    let cfg = load_config(config_path.as_deref())?;
    println!("=== headless — rust_pet ===");
    println!(
        "Ticks: {}  |  Interval: {} ms  |  Seed: {}  |  Screen: {}",
        cfg.pet.total_ticks, cfg.pet.tick_interval_ms, cfg.pet.seed, cfg.pet.screen_bounds
    );

    // 2. Reminder scheduler on simulated time, persisted to a file.
    if let Some(dir) = cfg.reminders_path.parent() {
        std::fs::create_dir_all(dir)?;
    }
    let clock = Arc::new(ManualClock::new(SystemClock.now()));
    let scheduler = Arc::new(ReminderScheduler::with_clock(
        FileReminderStore::new(&cfg.reminders_path),
        Arc::clone(&clock),
    ));
    let due = scheduler.now() + Duration::seconds(cfg.reminder_secs);
    if let Err(e) = scheduler.add("Time to stretch!", due) {
        warn!(error = %e, "demo reminder not saved");
    }
    println!(
        "Reminders: {} loaded from {}, {} due within the hour",
        scheduler.len(),
        cfg.reminders_path.display(),
        scheduler.upcoming_hour().len()
    );
    println!();

    // 3. Pet.
    let tick_step = Duration::milliseconds(i64::from(cfg.pet.tick_interval_ms));
    let mut pet = PetBuilder::new(cfg.pet.clone())
        .frame_source(&PlaceholderFrames::default())
        .tuning(cfg.tuning.clone())
        .reminders(Arc::clone(&scheduler))
        .build()?;
    let mut obs = DemoObserver {
        clock,
        tick_step,
        transitions: 0,
        fired: Vec::new(),
        ticks_in: BTreeMap::new(),
    };

    // 4. Scripted host interaction, then run to the end.
    let t0 = Instant::now();
    pet.run_ticks(300, &mut obs);

    let bounds = pet.screen_bounds();
    pet.start_drag();
    pet.drag_to(Point::new(bounds.width / 2, bounds.height / 5));
    pet.run_ticks(10, &mut obs);
    pet.end_drag();
    info!(state = pet.state_name(), position = %pet.position(), "released");
    pet.run_ticks(60, &mut obs);

    if pet.trigger_discharge() {
        info!("thunder shock");
    }
    pet.run(&mut obs);
    let elapsed = t0.elapsed();

    // 5. Summary.
    println!();
    println!("Run complete in {:.3} s (simulated {})", elapsed.as_secs_f64(), pet.clock);
    println!("  final state : {} at {}", pet.state_name(), pet.position());
    println!("  transitions : {}", obs.transitions);
    println!("  reminders   : {:?}", obs.fired);
    println!();
    println!("{:<14} {:>8}", "State", "Ticks");
    println!("{}", "-".repeat(23));
    for (state, ticks) in &obs.ticks_in {
        println!("{state:<14} {ticks:>8}");
    }

    Ok(())
}
