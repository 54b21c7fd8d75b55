//! Integration tests for using a logger from several threads.

mod common;

use common::standard_logger;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use typelog::{shared, typelog};

#[test]
fn shared_logger_writes_separator_once_and_keeps_lines_whole() {
    let (logger, sink) = standard_logger();
    let logger = shared(logger);

    let handles: Vec<_> = (0..4)
        .map(|worker| {
            let logger = Arc::clone(&logger);
            thread::spawn(move || {
                for i in 0..25 {
                    let mut guard = logger.lock();
                    typelog!(guard, "log", "worker %d line %d\n", worker, i).unwrap();
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    let out = sink.contents();
    assert!(out.starts_with('\n'));
    assert!(!out.starts_with("\n\n"));

    let lines: Vec<&str> = out.lines().skip(1).collect();
    assert_eq!(lines.len(), 100);
    for line in lines {
        assert!(line.starts_with("      \x1b[36mlog\x1b[m : worker "), "{line:?}");
    }
}

#[test]
fn shared_logger_registration_through_lock() {
    let (logger, sink) = standard_logger();
    let logger = shared(logger);

    logger.lock().add_type("warning", Some("33m")).unwrap();
    typelog!(logger.lock(), "log", "after").unwrap();

    assert!(logger.lock().has_type("warning"));
    assert!(sink.contents().starts_with("\n        \x1b[36mlog"));
}

#[test]
fn callback_runs_under_the_shared_lock() {
    let (logger, sink) = standard_logger();
    let logger = shared(logger);

    let could_lock = Arc::new(AtomicBool::new(true));
    let fatal = Arc::new(AtomicBool::new(false));
    let handle = Arc::downgrade(&logger);
    let (lock_seen, fatal_seen) = (Arc::clone(&could_lock), Arc::clone(&fatal));
    logger
        .lock()
        .add_type_with("fatal", Some("31m"), move || {
            let locked = handle.upgrade().is_some_and(|l| l.try_lock().is_some());
            lock_seen.store(locked, Ordering::SeqCst);
            fatal_seen.store(true, Ordering::SeqCst);
        })
        .unwrap();

    typelog!(logger.lock(), "fatal", "disk full").unwrap();
    assert!(!could_lock.load(Ordering::SeqCst));

    // Deferred until the guard above is gone.
    if fatal.load(Ordering::SeqCst) {
        logger.lock().end().unwrap();
    }
    assert!(sink.contents().ends_with(" : disk full\n\n"));
}
