mod deploy;
mod doctor;
mod pipeline;

/// Platform every image is built for, regardless of the host architecture.
pub(crate) const TARGET_PLATFORM: &str = "linux/amd64";

pub use deploy::deploy;
pub use doctor::doctor;
