//! Declarative form descriptors rendered by the front-end `DynamicForm`.
//!
//! An entity implementing [`FormSchema`] lists its fields once; the same
//! descriptors drive rendering, validation and the conversion between the
//! entity and the string values held by the form.
//!
//! ```rust,ignore
//! let values = zona.to_values();
//! match Zona::submit(&zona, &values) {
//!     Ok(updated) => save(updated),
//!     Err(errors) => show(errors),
//! }
//! ```

mod field;
mod schema;
mod validation;
mod values;

pub use field::{FieldDescriptor, FieldKind};
pub use schema::{select_options, validate_form, FieldError, FormSchema, SelectOption, SelectSources};
pub use validation::ValidationRules;
pub use values::{number_text, parse_decimal, FormValues};
pub(crate) use values::{date_text, flag_text, id_text};
