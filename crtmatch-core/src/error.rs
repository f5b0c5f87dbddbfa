//! Error types for crtmatch-core.

use thiserror::Error;

/// Result type alias for matching operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Core error types for CRT matching operations.
#[derive(Error, Debug)]
pub enum Error {
    /// A strip lookup fell outside the known detector layout.
    ///
    /// The layout is static for a run, so this means the reading carries a
    /// module/channel pair the detector does not have. Silently mismapping
    /// would corrupt every downstream position, so the event is aborted.
    #[error("no geometry for module {module} strip {strip}")]
    UnknownStrip {
        /// Module id of the failed lookup.
        module: u8,
        /// Canonical strip index of the failed lookup.
        strip: u16,
    },
}
