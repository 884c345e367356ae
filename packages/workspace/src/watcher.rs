use notify::{Config, Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher as NotifyWatcher};
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::sync::mpsc::{channel, Receiver};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WatcherError {
    #[error("Failed to create watcher: {0}")]
    CreateError(#[from] notify::Error),

    #[error("Watch error: {0}")]
    WatchError(String),
}

pub type WatcherResult<T> = Result<T, WatcherError>;

/// Watches a single file for changes.
///
/// The parent directory is watched rather than the file itself so that
/// editors which save by replacing the file keep triggering events.
pub struct FileWatcher {
    _watcher: RecommendedWatcher,
    receiver: Receiver<notify::Result<Event>>,
    file_name: OsString,
}

impl FileWatcher {
    pub fn new(path: PathBuf) -> WatcherResult<Self> {
        let file_name = path
            .file_name()
            .map(|name| name.to_os_string())
            .ok_or_else(|| WatcherError::WatchError(format!("not a file path: {:?}", path)))?;
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };

        let (tx, rx) = channel();

        let mut watcher = RecommendedWatcher::new(
            move |res| {
                let _ = tx.send(res);
            },
            Config::default(),
        )?;

        watcher.watch(&dir, RecursiveMode::NonRecursive)?;

        Ok(Self {
            _watcher: watcher,
            receiver: rx,
            file_name,
        })
    }

    /// Block until the watched file is created, modified or replaced.
    /// `None` once the watcher shuts down.
    pub fn next_event(&self) -> Option<Event> {
        loop {
            match self.receiver.recv() {
                Ok(Ok(event)) if self.is_change(&event) => return Some(event),
                Ok(_) => continue,
                Err(_) => return None,
            }
        }
    }

    pub fn try_next_event(&self) -> Option<Event> {
        while let Ok(result) = self.receiver.try_recv() {
            if let Ok(event) = result {
                if self.is_change(&event) {
                    return Some(event);
                }
            }
        }
        None
    }

    /// Drop events already queued (e.g. bursts from a single save)
    pub fn drain(&self) {
        while self.receiver.try_recv().is_ok() {}
    }

    fn is_change(&self, event: &Event) -> bool {
        let relevant_kind = matches!(
            event.kind,
            EventKind::Create(_) | EventKind::Modify(_) | EventKind::Any
        );
        relevant_kind && event.paths.iter().any(|p| self.matches(p))
    }

    fn matches(&self, path: &Path) -> bool {
        path.file_name() == Some(self.file_name.as_os_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::thread;
    use std::time::Duration;

    #[test]
    fn test_file_watcher() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let data_path = temp_dir.path().join("content.data.json");

        let watcher = FileWatcher::new(data_path.clone()).unwrap();

        // Unrelated file first, then the watched one
        let dir = temp_dir.path().to_path_buf();
        thread::spawn(move || {
            thread::sleep(Duration::from_millis(100));
            fs::write(dir.join("other.json"), "{}").unwrap();
            fs::write(data_path, "{}").unwrap();
        });

        let event = watcher.next_event().unwrap();
        assert!(event
            .paths
            .iter()
            .any(|p| p.file_name().unwrap() == "content.data.json"));
    }

    #[test]
    fn test_rejects_path_without_file_name() {
        assert!(FileWatcher::new(PathBuf::from("/")).is_err());
    }
}
