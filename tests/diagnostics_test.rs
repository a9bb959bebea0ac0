use std::io;
use std::sync::{Arc, Mutex};

use gittag::analyzer::{generate_candidate_matrix, VersionSet};
use tracing::Level;

/// Writer collecting formatted log lines in memory
#[derive(Clone, Default)]
struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Run `f` with every event down to TRACE written into a fresh buffer
fn capture<F: FnOnce()>(f: F) -> String {
    let logs = CapturedLogs::default();
    let writer = logs.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(Level::TRACE)
        .with_ansi(false)
        .without_time()
        .with_writer(move || writer.clone())
        .finish();

    tracing::subscriber::with_default(subscriber, f);
    logs.contents()
}

const NOISY_TAGS: [&str; 4] = ["v1.0.0", "not-a-version", "v1.1.0-alpha", "v1.1.0-beta.1"];

#[test]
fn test_debug_reports_dropped_and_unranked_tags() {
    let logs = capture(|| {
        VersionSet::new(NOISY_TAGS, true);
    });

    assert!(logs.contains("DEBUG"));
    assert!(logs.contains("Cannot parse tag 'not-a-version'"));
    assert!(logs.contains("Tag 'v1.1.0-alpha' has prerelease 'alpha'"));
    assert!(!logs.contains("v1.1.0-beta.1"));
}

#[test]
fn test_without_debug_tags_are_dropped_silently() {
    let logs = capture(|| {
        let set = VersionSet::new(NOISY_TAGS, false);
        assert_eq!(set.versions().len(), 3);
    });

    assert!(!logs.contains("not-a-version"));
    assert!(!logs.contains("v1.1.0-alpha"));
}

#[test]
fn test_skipped_cell_is_warned() {
    let logs = capture(|| {
        let set = VersionSet::new(["v0.9.0", "v1.0.0-rc.18446744073709551615"], false);
        let matrix = generate_candidate_matrix(&set);
        assert!(matrix.cell(1, 1).is_none());
    });

    assert!(logs.contains("WARN"));
    assert!(logs.contains("Skipped candidate for 1.0.0 on channel 'rc'"));
    assert!(logs.contains("sequence exhausted"));
}
