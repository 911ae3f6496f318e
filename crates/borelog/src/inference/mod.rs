//! Column type inference from the first data row.

mod typing;

pub use typing::{classify_token, infer_row_types, parse_datetime};
