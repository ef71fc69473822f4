//! File-level loading of the two launch datasets.
//!
//! The loader opens the mission and rocket CSV files, hands the streams to
//! [`crate::core::store::RecordStore`], and reports counts through `log`.
//! Stream-level failures surface as [`crate::ScanError::Io`]; row-level
//! failures as [`crate::ScanError::MalformedRecord`].

pub mod loaders;


pub use loaders::RecordStoreLoader;
