//! Tab management
//!
//! - `page`: `TabPage`, the wrapper that hides inactive tabs
//! - `registry`: tab key to view
//! - `tab_labels`: tab key to title

pub mod page;
pub mod registry;
pub mod tab_labels;

pub use page::TabPage;
pub use tab_labels::tab_label_for_key;
