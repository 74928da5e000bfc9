//! Command implementations for the scenegen subcommands

pub mod character;
pub mod check;
pub mod init;
pub mod scene;
pub mod tags;

pub use character::*;
pub use check::*;
pub use init::*;
pub use scene::*;
pub use tags::*;
