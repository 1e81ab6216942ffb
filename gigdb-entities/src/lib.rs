pub mod artist;
pub mod id;
pub mod show;
pub mod time;
pub mod venue;

#[cfg(feature = "builders")]
pub mod builders;
