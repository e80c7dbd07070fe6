//! Protobuf types for the `validator` constraint schema, built on `prost`.
//!
//! This crate provides:
//!
//! - [`FieldValidator`], the rules attachable to one field through the
//!   `validator.field` option (see `proto/validator.proto`).
//! - [`OneofValidator`], the presence rule attachable to a oneof through the
//!   `validator.oneof` option.
//! - The extension numbers under which both are registered on
//!   `google.protobuf.FieldOptions` and `google.protobuf.OneofOptions`.
//!
//! The messages are written out with `prost` derives instead of being
//! generated at build time, so the crate builds without `protoc`. Tag numbers
//! match `proto/validator.proto` and the types round-trip on the wire with any
//! other implementation of that schema.
//!
//! # Usage
//!
//! Most users do not need this crate directly: the
//! [`prost-validators`](https://crates.io/crates/prost-validators) crate
//! re-exports it through its `types` module.

#![warn(missing_docs)]

mod proto;

pub use proto::*;

/// Field number of the `validator.field` extension on `FieldOptions`.
pub const FIELD_EXTENSION_NUMBER: u32 = 65030;

/// Field number of the `validator.oneof` extension on `OneofOptions`.
pub const ONEOF_EXTENSION_NUMBER: u32 = 65031;

/// Fully-qualified name of the field extension.
pub const FIELD_EXTENSION_NAME: &str = "validator.field";

/// Fully-qualified name of the oneof extension.
pub const ONEOF_EXTENSION_NAME: &str = "validator.oneof";

impl FieldValidator {
    /// Returns true if no rule is set. `human_error` alone checks nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        let FieldValidator {
            regex,
            int_gt,
            int_lt,
            msg_exists,
            human_error: _,
            float_gt,
            float_lt,
            float_epsilon: _,
            float_gte,
            float_lte,
            string_not_empty,
            repeated_count_min,
            repeated_count_max,
            length_gt,
            length_lt,
            length_eq,
            is_in_enum,
            uuid_ver,
            required,
        } = self;

        regex.is_none()
            && int_gt.is_none()
            && int_lt.is_none()
            && !msg_exists.unwrap_or(false)
            && float_gt.is_none()
            && float_lt.is_none()
            && float_gte.is_none()
            && float_lte.is_none()
            && !string_not_empty.unwrap_or(false)
            && repeated_count_min.is_none()
            && repeated_count_max.is_none()
            && length_gt.is_none()
            && length_lt.is_none()
            && length_eq.is_none()
            && !is_in_enum.unwrap_or(false)
            && uuid_ver.is_none()
            && !required.unwrap_or(false)
    }
}

impl OneofValidator {
    /// Returns true if exactly one member of the oneof must be set.
    #[must_use]
    pub fn is_required(&self) -> bool {
        self.required.unwrap_or(false)
    }
}
