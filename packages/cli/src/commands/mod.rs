pub mod backups;
pub mod edit;
pub mod generate;
pub mod init;
pub mod serve;

pub use backups::{backups, BackupsArgs};
pub use edit::{add, get, move_item, remove, set, AddArgs, GetArgs, MoveArgs, RemoveArgs, SetArgs};
pub use generate::{generate, GenerateArgs};
pub use init::{init, InitArgs};
pub use serve::{serve, ServeArgs};
