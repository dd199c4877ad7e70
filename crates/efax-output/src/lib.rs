//! Output generation: cleaned DataFrame to a pretty-printed JSON array.

mod error;
mod records;
mod writer;

pub use error::{OutputError, Result};
pub use records::{Record, any_to_json, frame_to_records};
pub use writer::{render_json, write_json};
