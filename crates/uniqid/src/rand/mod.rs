mod interface;
#[cfg(feature = "std")]
mod os;
#[cfg(feature = "std")]
mod thread;

pub use interface::*;
#[cfg(feature = "std")]
pub use os::*;
#[cfg(feature = "std")]
pub use thread::*;
