//! Constraint validation.
//!
//! Deserialization already enforces shape (required keys, value types, nullability and enum
//! literals). The [`Validate`] trait covers what serde cannot express: string lengths, numeric
//! ranges, list sizes and cross-field rules. Failures are accumulated, not short-circuited, into
//! the same [`ErrorDetails`] tree Discord returns with a 50035 error.

use std::fmt::Display;

use crate::error::{ErrorDetails, FieldError};

/// Failure codes recorded by the validator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ValidationCode {
    BaseTypeBadLength,
    BaseTypeMaxLength,
    BaseTypeMinLength,
    BaseTypeChoices,
    BaseTypeRequired,
    BaseTypeInvalid,
    NumberTypeMin,
    NumberTypeMax,
    NumberTypeCoerce,
    BooleanTypeCoerce,
}

impl ValidationCode {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::BaseTypeBadLength => "BASE_TYPE_BAD_LENGTH",
            Self::BaseTypeMaxLength => "BASE_TYPE_MAX_LENGTH",
            Self::BaseTypeMinLength => "BASE_TYPE_MIN_LENGTH",
            Self::BaseTypeChoices => "BASE_TYPE_CHOICES",
            Self::BaseTypeRequired => "BASE_TYPE_REQUIRED",
            Self::BaseTypeInvalid => "BASE_TYPE_INVALID",
            Self::NumberTypeMin => "NUMBER_TYPE_MIN",
            Self::NumberTypeMax => "NUMBER_TYPE_MAX",
            Self::NumberTypeCoerce => "NUMBER_TYPE_COERCE",
            Self::BooleanTypeCoerce => "BOOLEAN_TYPE_COERCE",
        }
    }
}

impl Display for ValidationCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A type whose declared bounds can be checked after deserialization.
pub trait Validate {
    /// Records every violation of this value's bounds at `v`'s position in the tree.
    fn validate_with(&self, v: &mut Validator<'_>);

    /// Checks this value as a document root.
    ///
    /// # Returns
    /// - `Ok(())` - No bounds violated
    /// - `Err(ErrorDetails)` - Pruned tree of every violation found
    fn validate(&self) -> Result<(), ErrorDetails> {
        let mut details = ErrorDetails::default();
        self.validate_with(&mut Validator::new(&mut details));
        details.prune();

        if details.is_empty() {
            Ok(())
        } else {
            Err(details)
        }
    }
}

impl<T: Validate + ?Sized> Validate for Box<T> {
    fn validate_with(&self, v: &mut Validator<'_>) {
        (**self).validate_with(v)
    }
}

/// Cursor into an [`ErrorDetails`] tree.
///
/// Each check names the field it applies to; the failure is recorded under that field's node.
/// [`Validator::field`] and [`Validator::index`] descend for nested objects and list items.
pub struct Validator<'a> {
    node: &'a mut ErrorDetails,
}

impl<'a> Validator<'a> {
    pub fn new(node: &'a mut ErrorDetails) -> Self {
        Self { node }
    }

    /// Cursor positioned at `name` below the current node.
    pub fn field(&mut self, name: &str) -> Validator<'_> {
        Validator {
            node: self.node.fields.entry(name.to_string()).or_default(),
        }
    }

    /// Cursor positioned at list item `index` below the current node.
    pub fn index(&mut self, index: usize) -> Validator<'_> {
        Validator {
            node: self.node.fields.entry(index.to_string()).or_default(),
        }
    }

    /// Records a failure for the value at the current node.
    pub fn fail(&mut self, code: ValidationCode, message: impl Into<String>) {
        self.node.errors.push(FieldError {
            code: code.as_str().to_string(),
            message: message.into(),
        });
    }

    /// Records a failure for `name` below the current node.
    pub fn fail_field(&mut self, name: &str, code: ValidationCode, message: impl Into<String>) {
        self.field(name).fail(code, message);
    }

    /// String length in characters must lie within `min..=max`.
    pub fn length(&mut self, name: &str, value: &str, min: usize, max: usize) {
        let len = value.chars().count();
        if len >= min && len <= max {
            return;
        }

        if min == 0 {
            self.fail_field(
                name,
                ValidationCode::BaseTypeMaxLength,
                format!("Must be {} or fewer in length.", max),
            );
        } else {
            self.fail_field(
                name,
                ValidationCode::BaseTypeBadLength,
                format!("Must be between {} and {} in length.", min, max),
            );
        }
    }

    pub fn length_opt(&mut self, name: &str, value: Option<&str>, min: usize, max: usize) {
        if let Some(value) = value {
            self.length(name, value, min, max);
        }
    }

    /// Integer must lie within `min..=max`.
    pub fn range(&mut self, name: &str, value: i64, min: i64, max: i64) {
        if value < min {
            self.fail_field(
                name,
                ValidationCode::NumberTypeMin,
                format!("int value should be greater than or equal to {}.", min),
            );
        } else if value > max {
            self.fail_field(
                name,
                ValidationCode::NumberTypeMax,
                format!("int value should be less than or equal to {}.", max),
            );
        }
    }

    pub fn range_opt(&mut self, name: &str, value: Option<i64>, min: i64, max: i64) {
        if let Some(value) = value {
            self.range(name, value, min, max);
        }
    }

    /// Float must lie within `min..=max`.
    pub fn float_range(&mut self, name: &str, value: f64, min: f64, max: f64) {
        if value < min {
            self.fail_field(
                name,
                ValidationCode::NumberTypeMin,
                format!("float value should be greater than or equal to {}.", min),
            );
        } else if value > max {
            self.fail_field(
                name,
                ValidationCode::NumberTypeMax,
                format!("float value should be less than or equal to {}.", max),
            );
        }
    }

    /// List must hold between `min` and `max` items.
    pub fn items<T>(&mut self, name: &str, items: &[T], min: usize, max: usize) {
        if items.len() < min {
            self.fail_field(
                name,
                ValidationCode::BaseTypeMinLength,
                format!("Must be {} or more in length.", min),
            );
        } else if items.len() > max {
            self.fail_field(
                name,
                ValidationCode::BaseTypeMaxLength,
                format!("Must be {} or fewer in length.", max),
            );
        }
    }

    pub fn items_opt<T>(&mut self, name: &str, items: Option<&[T]>, min: usize, max: usize) {
        if let Some(items) = items {
            self.items(name, items, min, max);
        }
    }

    /// Permission bitfields travel as non-empty decimal strings.
    pub fn bitfield(&mut self, name: &str, value: &str) {
        if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
            self.fail_field(
                name,
                ValidationCode::BaseTypeInvalid,
                "Must be a permission bitfield in decimal form.",
            );
        }
    }

    /// Value must be one of `allowed`.
    pub fn one_of<T: PartialEq + Display>(&mut self, name: &str, value: &T, allowed: &[T]) {
        if allowed.contains(value) {
            return;
        }

        let choices = allowed
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        self.fail_field(
            name,
            ValidationCode::BaseTypeChoices,
            format!("Value must be one of ({}).", choices),
        );
    }

    /// Records that `name` must be present.
    pub fn required(&mut self, name: &str) {
        self.fail_field(
            name,
            ValidationCode::BaseTypeRequired,
            "This field is required",
        );
    }

    /// Validates a nested object under `name`.
    pub fn nested<T: Validate>(&mut self, name: &str, value: &T) {
        value.validate_with(&mut self.field(name));
    }

    pub fn nested_opt<T: Validate>(&mut self, name: &str, value: Option<&T>) {
        if let Some(value) = value {
            self.nested(name, value);
        }
    }

    /// Validates every item of a list under `name`, keyed by index.
    pub fn each<T: Validate>(&mut self, name: &str, items: &[T]) {
        let mut list = self.field(name);
        for (i, item) in items.iter().enumerate() {
            item.validate_with(&mut list.index(i));
        }
    }

    pub fn each_opt<T: Validate>(&mut self, name: &str, items: Option<&[T]>) {
        if let Some(items) = items {
            self.each(name, items);
        }
    }
}
