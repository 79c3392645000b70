//! Repository Implementations
//!
//! Concrete implementations of domain repository ports.

mod blueprint;
mod lockfile;

pub use blueprint::load_blueprint;
pub use lockfile::YamlLockfileRepository;
