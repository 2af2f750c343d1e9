pub mod islands;
pub mod markers;
pub mod props;
pub mod snapshot;

pub use snapshot::*;
