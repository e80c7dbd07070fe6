/// Constraints attached to a single field through the `validator.field`
/// option. Every rule is optional; an unset rule is not checked.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct FieldValidator {
    /// RE2-syntax regex the field contents must match.
    #[prost(string, optional, tag = "1")]
    pub regex: ::core::option::Option<::prost::alloc::string::String>,
    /// Integer strictly greater than this value.
    #[prost(int64, optional, tag = "2")]
    pub int_gt: ::core::option::Option<i64>,
    /// Integer strictly smaller than this value.
    #[prost(int64, optional, tag = "3")]
    pub int_lt: ::core::option::Option<i64>,
    /// Nested message must be set.
    #[prost(bool, optional, tag = "4")]
    pub msg_exists: ::core::option::Option<bool>,
    /// Message shown to the user instead of the generic one.
    #[prost(string, optional, tag = "5")]
    pub human_error: ::core::option::Option<::prost::alloc::string::String>,
    /// Double strictly greater than this value.
    ///
    /// Only takes on a valid floating point value; use together with
    /// `float_epsilon` if you need something more specific.
    #[prost(double, optional, tag = "6")]
    pub float_gt: ::core::option::Option<f64>,
    /// Double strictly smaller than this value.
    ///
    /// Only takes on a valid floating point value; use together with
    /// `float_epsilon` if you need something more specific.
    #[prost(double, optional, tag = "7")]
    pub float_lt: ::core::option::Option<f64>,
    /// Epsilon within which any float comparison is considered true.
    ///
    /// With `float_gt = 0.35` and `float_epsilon = 0.05` any value above
    /// 0.30 is accepted: `{float_value_condition} +- {float_epsilon}`.
    /// Unset means no correction is attempted.
    #[prost(double, optional, tag = "8")]
    pub float_epsilon: ::core::option::Option<f64>,
    /// Double greater than or equal to this value.
    #[prost(double, optional, tag = "9")]
    pub float_gte: ::core::option::Option<f64>,
    /// Double smaller than or equal to this value.
    #[prost(double, optional, tag = "10")]
    pub float_lte: ::core::option::Option<f64>,
    /// String must not be empty.
    #[prost(bool, optional, tag = "11")]
    pub string_not_empty: ::core::option::Option<bool>,
    /// Repeated field with at least this number of elements.
    #[prost(int64, optional, tag = "12")]
    pub repeated_count_min: ::core::option::Option<i64>,
    /// Repeated field with at most this number of elements.
    #[prost(int64, optional, tag = "13")]
    pub repeated_count_max: ::core::option::Option<i64>,
    /// Length strictly greater than this value.
    #[prost(int64, optional, tag = "14")]
    pub length_gt: ::core::option::Option<i64>,
    /// Length strictly smaller than this value.
    #[prost(int64, optional, tag = "15")]
    pub length_lt: ::core::option::Option<i64>,
    /// Length exactly equal to this value.
    #[prost(int64, optional, tag = "16")]
    pub length_eq: ::core::option::Option<i64>,
    /// Value must be a declared member of the field's enum.
    #[prost(bool, optional, tag = "17")]
    pub is_in_enum: ::core::option::Option<bool>,
    /// String must be a UUID. Valid values are 0-5; 0 accepts every
    /// version.
    #[prost(int32, optional, tag = "18")]
    pub uuid_ver: ::core::option::Option<i32>,
    /// Field must be set.
    #[prost(bool, optional, tag = "19")]
    pub required: ::core::option::Option<bool>,
}

/// Constraints attached to a oneof through the `validator.oneof` option.
#[derive(Clone, Copy, PartialEq, ::prost::Message)]
pub struct OneofValidator {
    /// Exactly one field of the oneof must be set.
    #[prost(bool, optional, tag = "1")]
    pub required: ::core::option::Option<bool>,
}
