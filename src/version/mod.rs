pub mod client;
pub mod probe;

pub use client::{VersionClient, VersionFetchError, VersionInfo, VersionSource, VERSION_PLACEHOLDER};
pub use probe::{probe_ffmpeg_version, ProbeError};
