//! Host configuration access for privguard.
//!
//! The engine never talks to a live Windows API. Everything it needs from the
//! host arrives through the [`Host`] trait; the shipped implementation is an
//! in-memory, JSON-serializable [`HostSnapshot`]. A live collector is an
//! external collaborator.

#![forbid(unsafe_code)]

mod probe;
mod recording;
mod snapshot;
mod value;

pub use probe::{
    FolderContents, FolderEntry, FolderInfo, Host, HostError, ServiceEntry, StartMode,
    WritableEntry,
};
pub use recording::RecordingHost;
pub use snapshot::{HostSnapshot, SnapshotBuilder};
pub use value::RegValue;
