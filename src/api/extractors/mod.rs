//! Custom request extractors.

mod validated_json;

pub use validated_json::{not_blank, null_as_empty, ValidatedJson};
