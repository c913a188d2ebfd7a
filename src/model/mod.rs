//! Model layer - selection state and the data it is built from
//!
//! - `ReviewState` - both selection tables plus the captured snapshot
//! - `Classification` - classifier output the rows are loaded from
//! - `ModalStack` - modal overlay management

pub mod artist;
pub mod classification;
pub mod group;
pub mod modal;
pub mod review;
pub mod selection;
pub mod snapshot;

pub use artist::{ArtistRecord, ArtistRow};
pub use classification::Classification;
pub use group::Group;
pub use review::{ImportOutcome, ReviewState};
pub use selection::{SelectAllState, SelectionTable};
pub use snapshot::{ExportArtifacts, ExportKind, ExportPayload, SelectionSnapshot};
