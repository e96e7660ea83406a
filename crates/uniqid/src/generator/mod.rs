mod unique;

pub use unique::*;

#[cfg(all(test, feature = "std"))]
mod tests;
