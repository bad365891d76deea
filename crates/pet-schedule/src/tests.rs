//! Unit tests for pet-schedule.

use std::io::Cursor;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use chrono::{Duration, NaiveDate, NaiveDateTime};

use crate::{
    FileReminderStore, ManualClock, MemoryReminderStore, Reminder, ReminderError, ReminderId,
    ReminderScheduler, ReminderStore, read_reminders, write_reminders,
};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn at(h: u32, m: u32, s: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 10, 19)
        .unwrap()
        .and_hms_opt(h, m, s)
        .unwrap()
}

/// Scheduler at 09:00:00 with handles to its store and clock.
fn scheduler() -> (ReminderScheduler, Arc<MemoryReminderStore>, Arc<ManualClock>) {
    let store = Arc::new(MemoryReminderStore::new());
    let clock = Arc::new(ManualClock::new(at(9, 0, 0)));
    let sched = ReminderScheduler::with_clock(Arc::clone(&store), Arc::clone(&clock));
    (sched, store, clock)
}

// ── Reminder ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod reminder {
    use super::*;

    #[test]
    fn is_due_requires_enabled_and_reached() {
        let mut r = Reminder::new("tea", at(10, 0, 0), at(9, 0, 0));
        assert!(!r.is_due(at(9, 59, 59)));
        assert!(r.is_due(at(10, 0, 0)));
        r.enabled = false;
        assert!(!r.is_due(at(11, 0, 0)));
    }

    #[test]
    fn id_parses_its_display() {
        let id = ReminderId::new();
        let parsed: ReminderId = id.to_string().parse().unwrap();
        assert_eq!(parsed, id);
        assert!("not-a-uuid".parse::<ReminderId>().is_err());
    }

    #[test]
    fn display_shows_due_and_content() {
        let r = Reminder::new("stretch", at(15, 30, 0), at(9, 0, 0));
        assert_eq!(r.to_string(), "2026-10-19 15:30 - stretch");
    }
}

// ── Mutations ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod mutations {
    use super::*;

    #[test]
    fn add_then_snapshot_and_save() {
        let (sched, store, _) = scheduler();
        let id = sched.add("drink water", at(10, 0, 0)).unwrap();

        let all = sched.snapshot();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].id, id);
        assert_eq!(all[0].content, "drink water");
        assert!(all[0].enabled);
        assert_eq!(all[0].created, at(9, 0, 0));
        assert_eq!(store.saved(), all);
    }

    #[test]
    fn add_rejects_blank_content() {
        let (sched, store, _) = scheduler();
        assert!(matches!(sched.add("   \t", at(10, 0, 0)), Err(ReminderError::EmptyContent)));
        assert!(sched.is_empty());
        assert_eq!(store.save_count(), 0);
    }

    #[test]
    fn delete_removes_and_unknown_is_not_found() {
        let (sched, _, _) = scheduler();
        let id = sched.add("a", at(10, 0, 0)).unwrap();
        sched.delete(id).unwrap();
        assert!(sched.is_empty());
        assert!(matches!(sched.delete(id), Err(ReminderError::NotFound(x)) if x == id));
    }

    #[test]
    fn update_keeps_created() {
        let (sched, _, clock) = scheduler();
        let id = sched.add("old", at(10, 0, 0)).unwrap();
        clock.advance(Duration::minutes(5));

        let mut edited = sched.get(id).unwrap();
        edited.content = "new".into();
        edited.due = at(11, 0, 0);
        edited.created = at(0, 0, 0);
        sched.update(&edited).unwrap();

        let stored = sched.get(id).unwrap();
        assert_eq!(stored.content, "new");
        assert_eq!(stored.due, at(11, 0, 0));
        assert_eq!(stored.created, at(9, 0, 0));
    }

    #[test]
    fn update_unknown_or_blank_is_rejected() {
        let (sched, _, _) = scheduler();
        let ghost = Reminder::new("ghost", at(10, 0, 0), at(9, 0, 0));
        assert!(matches!(sched.update(&ghost), Err(ReminderError::NotFound(_))));

        let id = sched.add("real", at(10, 0, 0)).unwrap();
        let mut blank = sched.get(id).unwrap();
        blank.content = " ".into();
        assert!(matches!(sched.update(&blank), Err(ReminderError::EmptyContent)));
        assert_eq!(sched.get(id).unwrap().content, "real");
    }

    #[test]
    fn toggle_flips_future_reminder() {
        let (sched, _, _) = scheduler();
        let id = sched.add("a", at(10, 0, 0)).unwrap();
        assert!(!sched.toggle_enabled(id).unwrap());
        assert!(sched.toggle_enabled(id).unwrap());
    }

    #[test]
    fn toggle_refuses_to_revive_expired() {
        let (sched, _, clock) = scheduler();
        let id = sched.add("a", at(10, 0, 0)).unwrap();
        clock.set(at(10, 0, 0));
        assert_eq!(sched.check_due().len(), 1);

        assert!(matches!(sched.toggle_enabled(id), Err(ReminderError::Expired(x)) if x == id));
        assert!(!sched.get(id).unwrap().enabled);
    }

    #[test]
    fn update_cannot_revive_fired_reminder() {
        let (sched, _, clock) = scheduler();
        let id = sched.add("once", at(10, 0, 0)).unwrap();
        clock.set(at(10, 0, 0));
        assert_eq!(sched.check_due().len(), 1);

        let mut revived = sched.get(id).unwrap();
        revived.enabled = true;
        revived.content = "twice?".into();
        assert!(matches!(sched.update(&revived), Err(ReminderError::Expired(x)) if x == id));

        let stored = sched.get(id).unwrap();
        assert!(!stored.enabled);
        assert_eq!(stored.content, "once");
        assert!(sched.check_due().is_empty());
    }

    #[test]
    fn update_can_reschedule_fired_reminder() {
        let (sched, _, clock) = scheduler();
        let id = sched.add("again", at(10, 0, 0)).unwrap();
        clock.set(at(10, 0, 0));
        assert_eq!(sched.check_due().len(), 1);

        let mut later = sched.get(id).unwrap();
        later.enabled = true;
        later.due = at(11, 0, 0);
        sched.update(&later).unwrap();
        assert!(sched.check_due().is_empty());

        clock.set(at(11, 0, 0));
        assert_eq!(sched.check_due().len(), 1);
    }

    #[test]
    fn failed_save_keeps_memory_change() {
        let (sched, store, _) = scheduler();
        store.set_fail_saves(true);

        let err = sched.add("kept", at(10, 0, 0)).unwrap_err();
        assert!(matches!(err, ReminderError::Persist(_)));
        assert_eq!(sched.len(), 1);
        assert!(store.saved().is_empty());

        store.set_fail_saves(false);
        sched.persist().unwrap();
        assert_eq!(store.saved().len(), 1);
    }

    #[test]
    fn loads_existing_reminders() {
        let existing = vec![Reminder::new("from disk", at(12, 0, 0), at(8, 0, 0))];
        let store = MemoryReminderStore::with_reminders(existing.clone());
        let sched = ReminderScheduler::with_clock(store, ManualClock::new(at(9, 0, 0)));
        assert_eq!(sched.snapshot(), existing);
    }
}

// ── Due checks ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod due {
    use super::*;

    #[test]
    fn fires_once_and_disables() {
        let (sched, store, clock) = scheduler();
        let id = sched.add("stand up", at(9, 30, 0)).unwrap();

        assert!(sched.check_due().is_empty());
        clock.set(at(9, 30, 0));
        let fired = sched.check_due();
        assert_eq!(fired.len(), 1);
        assert_eq!(fired[0].id, id);
        assert!(!fired[0].enabled);
        assert!(!store.saved()[0].enabled);

        clock.advance(Duration::hours(1));
        assert!(sched.check_due().is_empty());
    }

    #[test]
    fn one_save_per_batch() {
        let (sched, store, clock) = scheduler();
        sched.add("a", at(9, 10, 0)).unwrap();
        sched.add("b", at(9, 20, 0)).unwrap();
        sched.add("later", at(12, 0, 0)).unwrap();
        let saves = store.save_count();

        clock.set(at(9, 30, 0));
        let fired: Vec<String> = sched.check_due().into_iter().map(|r| r.content).collect();
        assert_eq!(fired, vec!["a", "b"]);
        assert_eq!(store.save_count(), saves + 1);

        assert!(sched.check_due().is_empty());
        assert_eq!(store.save_count(), saves + 1);
    }

    #[test]
    fn failed_save_still_fires_once() {
        let (sched, store, clock) = scheduler();
        sched.add("offline", at(9, 5, 0)).unwrap();
        store.set_fail_saves(true);
        clock.set(at(9, 5, 0));

        assert_eq!(sched.check_due().len(), 1);
        assert!(!sched.snapshot()[0].enabled);
        assert!(store.saved()[0].enabled);
        assert!(sched.check_due().is_empty());

        store.set_fail_saves(false);
        sched.persist().unwrap();
        assert!(!store.saved()[0].enabled);
    }

    #[test]
    fn listeners_notified_per_fired_reminder() {
        let (sched, _, clock) = scheduler();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        sched.subscribe(Arc::new(move |r: &Reminder| {
            sink.lock().unwrap().push(r.content.clone());
        }));

        sched.add("one", at(9, 5, 0)).unwrap();
        sched.add("two", at(9, 6, 0)).unwrap();
        clock.set(at(10, 0, 0));
        sched.check_due();

        assert_eq!(*seen.lock().unwrap(), vec!["one".to_owned(), "two".to_owned()]);
    }

    #[test]
    fn unsubscribed_listener_is_silent() {
        let (sched, _, clock) = scheduler();
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let lid = sched.subscribe(Arc::new(move |_: &Reminder| {
            counter.fetch_add(1, Ordering::SeqCst);
        }));
        assert!(sched.unsubscribe(lid));
        assert!(!sched.unsubscribe(lid));

        sched.add("x", at(9, 1, 0)).unwrap();
        clock.set(at(9, 2, 0));
        assert_eq!(sched.check_due().len(), 1);
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn listener_may_call_back_into_scheduler() {
        let (sched, _, clock) = scheduler();
        let sched = Arc::new(sched);
        let inner = Arc::clone(&sched);
        let sizes = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&sizes);
        sched.subscribe(Arc::new(move |_: &Reminder| {
            sink.lock().unwrap().push(inner.len());
        }));

        sched.add("reentrant", at(9, 1, 0)).unwrap();
        clock.set(at(9, 1, 0));
        sched.check_due();
        assert_eq!(*sizes.lock().unwrap(), vec![1]);
    }

    #[test]
    fn concurrent_checks_fire_each_reminder_once() {
        let (sched, _, clock) = scheduler();
        let sched = Arc::new(sched);
        let fired = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&fired);
        sched.subscribe(Arc::new(move |_: &Reminder| {
            counter.fetch_add(1, Ordering::SeqCst);
        }));

        for i in 0..50 {
            sched.add(&format!("r{i}"), at(9, 30, 0)).unwrap();
        }
        clock.set(at(9, 30, 0));

        let handles: Vec<_> = (0..8)
            .map(|t| {
                let sched = Arc::clone(&sched);
                std::thread::spawn(move || {
                    let mut n = 0;
                    for i in 0..10 {
                        sched.add(&format!("t{t}-{i}"), at(23, 0, 0)).unwrap();
                        n += sched.check_due().len();
                    }
                    n
                })
            })
            .collect();
        let total: usize = handles.into_iter().map(|h| h.join().unwrap()).sum();

        assert_eq!(total, 50);
        assert_eq!(fired.load(Ordering::SeqCst), 50);
        assert_eq!(sched.len(), 50 + 80);
    }
}

// ── Upcoming ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod upcoming {
    use super::*;

    #[test]
    fn next_hour_sorted_and_filtered() {
        let (sched, _, _) = scheduler();
        sched.add("late", at(9, 50, 0)).unwrap();
        sched.add("soon", at(9, 10, 0)).unwrap();
        sched.add("edge", at(10, 0, 0)).unwrap();
        sched.add("too far", at(10, 0, 1)).unwrap();
        let off = sched.add("disabled", at(9, 20, 0)).unwrap();
        sched.toggle_enabled(off).unwrap();

        let names: Vec<String> = sched.upcoming_hour().into_iter().map(|r| r.content).collect();
        assert_eq!(names, vec!["soon", "late", "edge"]);
    }

    #[test]
    fn excludes_now_and_past() {
        let (sched, _, _) = scheduler();
        sched.add("now", at(9, 0, 0)).unwrap();
        sched.add("past", at(8, 0, 0)).unwrap();
        assert!(sched.upcoming(Duration::minutes(30)).is_empty());
    }
}

// ── Stores ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod file_store {
    use super::*;

    #[test]
    fn missing_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileReminderStore::new(dir.path().join("none.txt"));
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileReminderStore::new(dir.path().join("reminders.txt"));
        let mut off = Reminder::new("pipe | inside", at(14, 0, 0), at(9, 0, 0));
        off.enabled = false;
        let reminders = vec![Reminder::new("plain", at(10, 0, 0), at(9, 0, 0)), off];

        store.save(&reminders).unwrap();
        assert_eq!(store.load().unwrap(), reminders);
        assert!(!dir.path().join("reminders.txt.tmp").exists());
    }

    #[test]
    fn line_format() {
        let mut buf = Vec::new();
        let r = Reminder::new("tea", at(10, 0, 0), at(9, 0, 5));
        write_reminders(&mut buf, std::slice::from_ref(&r)).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text, format!("{}|tea|2026-10-19 10:00:00|True|2026-10-19 09:00:05\n", r.id));
    }

    #[test]
    fn bad_lines_are_skipped() {
        let id = ReminderId::new();
        let text = format!(
            "{id}|good|2026-10-19 10:00:00|true|2026-10-19 09:00:00\n\
             garbage line\n\
             not-a-uuid|x|2026-10-19 10:00:00|True|2026-10-19 09:00:00\n\
             {id}|bad date|19/10/2026|True|2026-10-19 09:00:00\n\
             {id}|bad flag|2026-10-19 10:00:00|maybe|2026-10-19 09:00:00\n"
        );
        let loaded = read_reminders(Cursor::new(text)).unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].id, id);
        assert_eq!(loaded[0].content, "good");
        assert!(loaded[0].enabled);
    }

    #[test]
    fn scheduler_survives_restart() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("reminders.txt");
        let clock = Arc::new(ManualClock::new(at(9, 0, 0)));

        let id = {
            let sched = ReminderScheduler::with_clock(FileReminderStore::new(&path), Arc::clone(&clock));
            let id = sched.add("persisted", at(9, 15, 0)).unwrap();
            clock.set(at(9, 15, 0));
            assert_eq!(sched.check_due().len(), 1);
            id
        };

        let reopened = ReminderScheduler::with_clock(FileReminderStore::new(&path), clock);
        let r = reopened.get(id).unwrap();
        assert_eq!(r.content, "persisted");
        assert!(!r.enabled);
        assert!(reopened.check_due().is_empty());
    }
}
