mod interface;
#[cfg(feature = "std")]
mod system;

pub use interface::*;
#[cfg(feature = "std")]
pub use system::*;
