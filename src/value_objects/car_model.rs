//! CarModel value object.

use crate::error::{ValidationError, ValidationResult};

/// The model name of a car, e.g. `"Model T"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CarModel(String);

crate::impl_string_value_object!(CarModel, kind: "carModel", validate: validate_model);

fn validate_model(value: &str) -> ValidationResult<()> {
    if value.trim().is_empty() {
        return Err(ValidationError::Empty { kind: "carModel" });
    }
    Ok(())
}
