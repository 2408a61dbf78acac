pub mod convert;
pub mod tables;
pub mod verify;

pub use convert::{convert_all, convert_file, convert_line, ConvertedFile, FileStats, TrimMode};
pub use tables::{default_file_names, Table};
pub use verify::{report, verify_file, TableReport, VerifySummary};
