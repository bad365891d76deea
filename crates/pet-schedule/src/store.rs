//! Persistence backends for the reminder collection.
//!
//! # File format
//!
//! One reminder per line, `|`-separated, no header:
//!
//! ```text
//! 6f1c0a9e-4b1d-4c59-9a55-3f0f4de7a1b2|Stand up and stretch|2026-10-19 15:30:00|True|2026-10-19 09:12:44
//! ```
//!
//! | Field     | Format                                  |
//! |-----------|-----------------------------------------|
//! | `id`      | hyphenated UUID                         |
//! | `content` | free text; quoted when it contains `\|` |
//! | `due`     | `yyyy-MM-dd HH:mm:ss` local time        |
//! | `enabled` | `True` / `False` (case-insensitive)     |
//! | `created` | `yyyy-MM-dd HH:mm:ss` local time        |
//!
//! Lines that fail to parse are skipped with a warning.  A missing file
//! loads as an empty collection.

use std::fs::File;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use chrono::NaiveDateTime;
use tracing::{debug, warn};

use crate::{Reminder, ReminderId, StoreError, StoreResult};

/// Timestamp layout used on disk.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

const FIELD_COUNT: usize = 5;

// ── Trait ─────────────────────────────────────────────────────────────────────

/// Loads and saves the whole reminder collection.
///
/// `save` always receives the complete set; backends replace whatever they
/// held before.
pub trait ReminderStore: Send + Sync {
    fn load(&self) -> StoreResult<Vec<Reminder>>;

    fn save(&self, reminders: &[Reminder]) -> StoreResult<()>;
}

impl<T: ReminderStore + ?Sized> ReminderStore for Arc<T> {
    fn load(&self) -> StoreResult<Vec<Reminder>> {
        (**self).load()
    }

    fn save(&self, reminders: &[Reminder]) -> StoreResult<()> {
        (**self).save(reminders)
    }
}

// ── FileReminderStore ─────────────────────────────────────────────────────────

/// Line-oriented text file store.
///
/// Saves go to a sibling temp file which is then renamed over the target,
/// so a crash mid-write leaves the previous contents intact.
#[derive(Clone, Debug)]
pub struct FileReminderStore {
    path: PathBuf,
}

impl FileReminderStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl ReminderStore for FileReminderStore {
    fn load(&self) -> StoreResult<Vec<Reminder>> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "reminder file missing, starting empty");
            return Ok(Vec::new());
        }
        let file = File::open(&self.path)?;
        read_reminders(file)
    }

    fn save(&self, reminders: &[Reminder]) -> StoreResult<()> {
        let tmp = self.temp_path();
        write_reminders(File::create(&tmp)?, reminders)?;
        std::fs::rename(&tmp, &self.path)?;
        debug!(path = %self.path.display(), count = reminders.len(), "reminders saved");
        Ok(())
    }
}

/// Parse reminders from any `Read` source in the on-disk format.
///
/// Malformed rows are logged and skipped; only I/O failures are errors.
pub fn read_reminders<R: Read>(reader: R) -> StoreResult<Vec<Reminder>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .delimiter(b'|')
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut reminders = Vec::new();
    for (line, record) in csv_reader.records().enumerate() {
        let record = match record {
            Ok(r) => r,
            Err(e) if matches!(e.kind(), csv::ErrorKind::Io(_)) => return Err(e.into()),
            Err(e) => {
                warn!(line = line + 1, error = %e, "skipping unreadable reminder line");
                continue;
            }
        };
        match parse_record(&record) {
            Ok(r) => reminders.push(r),
            Err(e) => warn!(line = line + 1, error = %e, "skipping malformed reminder line"),
        }
    }
    Ok(reminders)
}

/// Write reminders to any `Write` sink in the on-disk format.
pub fn write_reminders<W: Write>(writer: W, reminders: &[Reminder]) -> StoreResult<()> {
    let mut csv_writer = csv::WriterBuilder::new()
        .delimiter(b'|')
        .has_headers(false)
        .from_writer(writer);

    for r in reminders {
        let id = r.id.to_string();
        let due = r.due.format(TIMESTAMP_FORMAT).to_string();
        let created = r.created.format(TIMESTAMP_FORMAT).to_string();
        let enabled = if r.enabled { "True" } else { "False" };
        csv_writer.write_record([
            id.as_str(),
            r.content.as_str(),
            due.as_str(),
            enabled,
            created.as_str(),
        ])?;
    }
    csv_writer.flush()?;
    Ok(())
}

fn parse_record(record: &csv::StringRecord) -> StoreResult<Reminder> {
    if record.len() != FIELD_COUNT {
        return Err(StoreError::Parse(format!(
            "expected {FIELD_COUNT} fields, found {}",
            record.len()
        )));
    }
    let id: ReminderId = record[0]
        .parse()
        .map_err(|e| StoreError::Parse(format!("bad id {:?}: {e}", &record[0])))?;
    Ok(Reminder {
        id,
        content: record[1].to_owned(),
        due:     parse_timestamp(&record[2])?,
        enabled: parse_flag(&record[3])?,
        created: parse_timestamp(&record[4])?,
    })
}

fn parse_timestamp(s: &str) -> StoreResult<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s.trim(), TIMESTAMP_FORMAT)
        .map_err(|e| StoreError::Parse(format!("bad timestamp {s:?}: {e}")))
}

fn parse_flag(s: &str) -> StoreResult<bool> {
    let s = s.trim();
    if s.eq_ignore_ascii_case("true") {
        Ok(true)
    } else if s.eq_ignore_ascii_case("false") {
        Ok(false)
    } else {
        Err(StoreError::Parse(format!("bad enabled flag {s:?}")))
    }
}

// ── MemoryReminderStore ───────────────────────────────────────────────────────

/// In-memory store for tests and ephemeral runs.
///
/// Can be told to fail every save, to exercise the scheduler's
/// keep-in-memory-on-failure path.
#[derive(Debug, Default)]
pub struct MemoryReminderStore {
    saved:      Mutex<Vec<Reminder>>,
    fail_saves: AtomicBool,
    save_count: AtomicUsize,
}

impl MemoryReminderStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose first `load` returns `reminders`.
    pub fn with_reminders(reminders: Vec<Reminder>) -> Self {
        Self { saved: Mutex::new(reminders), ..Self::default() }
    }

    pub fn set_fail_saves(&self, fail: bool) {
        self.fail_saves.store(fail, Ordering::SeqCst);
    }

    /// Contents of the most recent successful save.
    pub fn saved(&self) -> Vec<Reminder> {
        self.saved.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    /// Number of successful saves.
    pub fn save_count(&self) -> usize {
        self.save_count.load(Ordering::SeqCst)
    }
}

impl ReminderStore for MemoryReminderStore {
    fn load(&self) -> StoreResult<Vec<Reminder>> {
        Ok(self.saved())
    }

    fn save(&self, reminders: &[Reminder]) -> StoreResult<()> {
        if self.fail_saves.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable("saves disabled".into()));
        }
        *self.saved.lock().unwrap_or_else(PoisonError::into_inner) = reminders.to_vec();
        self.save_count.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
