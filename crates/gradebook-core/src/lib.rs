pub mod codec;
pub mod error;
pub mod record;
pub mod report;
pub mod store;

pub use codec::{DEFAULT_DATA_FILE, NAME_LEN, RECORD_SIZE};
pub use error::{Error, Result};
pub use record::Record;
pub use report::{RankedRow, Report};
pub use store::Store;
