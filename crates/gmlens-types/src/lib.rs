pub mod analysis;
pub mod error;
pub mod session;

pub use analysis::*;
pub use error::{Error, Result};
pub use session::*;
