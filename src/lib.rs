pub use tagmap_core::*;
pub use tagmap_macros::*;
