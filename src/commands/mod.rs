mod classify;
mod extract;
mod util;

pub use classify::Classify;
pub use extract::Extract;
