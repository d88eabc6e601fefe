//! Generic list / create / edit / baja lógica orchestration

pub mod hook;
pub mod state;

pub use hook::{use_catalog, use_crud, CrudHandle, MESSAGE_TIMEOUT_MS};
pub use state::{CrudState, Message, MessageKind};
