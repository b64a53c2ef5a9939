mod error;
pub use error::*;

mod program;
pub use program::*;
