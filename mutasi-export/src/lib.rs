//! mutasi-export: transaction rows as CSV, JSON or a terminal table

pub mod format;
pub mod row;
pub mod table;
pub mod writer;

pub use format::{ExportFormat, format_id};
pub use row::{Labels, Row};
pub use table::{column_widths, render_table};
pub use writer::{ExportError, write_csv, write_json, write_report};

/// Base name for report files when no output path is given.
pub const DEFAULT_REPORT_NAME: &str = "mutasi_report";
