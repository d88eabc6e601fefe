pub mod form;
pub mod indicators;
