mod encoded;
mod raw;

pub use encoded::*;
pub use raw::*;
