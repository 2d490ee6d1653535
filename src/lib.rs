//! Join a DirectSkip contact export to a Land Portal property export and
//! split the matched records into a mobile ("RooR") and a residential
//! ("RM") dialer list.

pub mod config;
pub mod error;
pub mod records;
pub mod slice;
pub mod table;

pub use config::SlicerConfig;
pub use error::{Result, SlicerError};
pub use slice::{run, SliceOutput, SliceStats};
pub use table::{output::write_outputs, OutputTable, RawTable};
