pub mod error;
pub mod protocol;
pub mod record;

pub use error::{Error, Result};
pub use protocol::*;
pub use record::*;
