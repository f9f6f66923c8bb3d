use std::path::PathBuf;

use provision_core::allocation::AllocationError;
use provision_core::network::NetworkError;
use provision_core::region::ValidationError;

/// Errors that can occur in the demo runner.
#[derive(Debug, thiserror::Error)]
pub enum DemoError {
    /// A stock or route entry names a region the scenario never declared.
    #[error("region '{name}' not found in scenario")]
    RegionNotFound { name: String },

    /// Two regions in the scenario share a name, so references would be
    /// ambiguous.
    #[error("region '{name}' declared more than once")]
    DuplicateRegion { name: String },

    /// Failed to parse a scenario file.
    #[error("parse error in {file}: {detail}")]
    Parse { file: PathBuf, detail: String },

    /// An I/O error occurred.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// A region or route was rejected by the network.
    #[error("network error: {0}")]
    Network(#[from] NetworkError),

    /// A stock entry was rejected by the inventory.
    #[error("inventory error: {0}")]
    Inventory(#[from] ValidationError),

    /// The allocation pass aborted.
    #[error("allocation failed: {0}")]
    Allocation(#[from] AllocationError),
}
