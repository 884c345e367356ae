pub mod repository;
pub mod server;
pub mod transport;
pub mod watcher;

pub use repository::{backup_stamp, ContentRepository, RepositoryError};
pub use server::{app, content_router, serve};
pub use transport::LocalTransport;
pub use watcher::{FileWatcher, WatcherError, WatcherResult};
