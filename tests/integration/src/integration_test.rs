//! Cross-cutting behavior of root resolution
//!
//! Verifies the resolved root ignores the process working directory and
//! holds up under concurrent callers.

use std::env;
use std::sync::{Arc, Barrier};
use std::thread;

use app_root::resolve_root;
use pretty_assertions::{assert_eq, assert_ne};
use tempfile::tempdir;

#[test]
fn test_root_ignores_working_directory() {
    let before = resolve_root().unwrap();

    let scratch = tempdir().unwrap();
    let original = env::current_dir().unwrap();
    env::set_current_dir(scratch.path()).unwrap();
    // Restore the working directory before asserting so a failure does not
    // poison other tests in this binary
    let inside = resolve_root();
    env::set_current_dir(&original).unwrap();

    let inside = inside.unwrap();
    assert_eq!(before, inside);
    assert_ne!(inside.as_path(), scratch.path());
}

#[test]
fn test_concurrent_callers_agree() {
    let num_threads = 8;
    let barrier = Arc::new(Barrier::new(num_threads));

    let handles: Vec<_> = (0..num_threads)
        .map(|_| {
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                // Synchronize all threads to start simultaneously
                barrier.wait();
                resolve_root().unwrap()
            })
        })
        .collect();

    let mut roots: Vec<_> = handles
        .into_iter()
        .map(|handle| handle.join().expect("Thread should not panic"))
        .collect();

    let first = roots.pop().unwrap();
    for root in roots {
        assert_eq!(first, root);
    }
}
