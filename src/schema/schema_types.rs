//! Schema message definitions
//!
//! `prost` messages mirroring the data model. Field tags equal the field
//! ordinals; proto3 implicit presence applies to every scalar, so a value
//! left at zero is simply not written.

use std::collections::BTreeMap;

/// Wire form of `DeepRecord`
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DeepRecordMessage {
    /// Free text
    #[prost(string, tag = "1")]
    pub text: String,
    /// Opaque binary payload
    #[prost(bytes = "vec", tag = "2")]
    pub blob: Vec<u8>,
}

/// Wire form of `MidRecord`
#[allow(missing_docs)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct MidRecordMessage {
    #[prost(string, tag = "1")]
    pub field1: String,
    #[prost(string, tag = "2")]
    pub field2: String,
    #[prost(string, tag = "3")]
    pub field3: String,
    #[prost(string, tag = "4")]
    pub field4: String,
    #[prost(string, tag = "5")]
    pub field5: String,
    #[prost(int64, tag = "6")]
    pub long_field1: i64,
    #[prost(int32, tag = "7")]
    pub int_field1: i32,
    #[prost(double, tag = "8")]
    pub double_field1: f64,
    #[prost(message, optional, tag = "9")]
    pub deep_nested: Option<DeepRecordMessage>,
}

macro_rules! define_large_record_message {
    (
        nested: [$($nested:ident $nested_tag:tt),* $(,)?],
        int: [$($int:ident $int_tag:tt),* $(,)?],
        long: [$($long:ident $long_tag:tt),* $(,)?],
        double: [$($double:ident $double_tag:tt),* $(,)?],
        boolean: [$($boolean:ident $boolean_tag:tt),* $(,)?],
        float: [$($float:ident $float_tag:tt),* $(,)?],
        short: [$($short:ident $short_tag:tt),* $(,)?],
        byte: [$($byte:ident $byte_tag:tt),* $(,)?],
        character: [$($character:ident $character_tag:tt),* $(,)?],
        boxed_int: [$($boxed_int:ident $boxed_int_tag:tt),* $(,)?],
        boxed_long: [$($boxed_long:ident $boxed_long_tag:tt),* $(,)?],
        boxed_double: [$($boxed_double:ident $boxed_double_tag:tt),* $(,)?],
        boxed_bool: [$($boxed_bool:ident $boxed_bool_tag:tt),* $(,)?],
        string_list: [$($string_list:ident $string_list_tag:tt),* $(,)?],
        int_list: [$($int_list:ident $int_list_tag:tt),* $(,)?],
        string_map: [$($string_map:ident $string_map_tag:tt),* $(,)?],
        string: [$($string:ident $string_tag:tt),* $(,)?],
        $(,)?
    ) => {
        /// Wire form of `LargeRecord`.
        ///
        /// Shorts and bytes widen to `int32`; characters travel as their
        /// `uint32` code point. Nullable scalars share the proto3 zero default
        /// with their non-nullable counterparts.
        #[allow(missing_docs)]
        #[derive(Clone, PartialEq, ::prost::Message)]
        pub struct LargeRecordMessage {
            $(#[prost(message, optional, tag = $nested_tag)] pub $nested: Option<MidRecordMessage>,)*
            $(#[prost(int32, tag = $int_tag)] pub $int: i32,)*
            $(#[prost(int64, tag = $long_tag)] pub $long: i64,)*
            $(#[prost(double, tag = $double_tag)] pub $double: f64,)*
            $(#[prost(bool, tag = $boolean_tag)] pub $boolean: bool,)*
            $(#[prost(float, tag = $float_tag)] pub $float: f32,)*
            $(#[prost(int32, tag = $short_tag)] pub $short: i32,)*
            $(#[prost(int32, tag = $byte_tag)] pub $byte: i32,)*
            $(#[prost(uint32, tag = $character_tag)] pub $character: u32,)*
            $(#[prost(int32, tag = $boxed_int_tag)] pub $boxed_int: i32,)*
            $(#[prost(int64, tag = $boxed_long_tag)] pub $boxed_long: i64,)*
            $(#[prost(double, tag = $boxed_double_tag)] pub $boxed_double: f64,)*
            $(#[prost(bool, tag = $boxed_bool_tag)] pub $boxed_bool: bool,)*
            $(#[prost(string, repeated, tag = $string_list_tag)] pub $string_list: Vec<String>,)*
            $(#[prost(int32, repeated, tag = $int_list_tag)] pub $int_list: Vec<i32>,)*
            $(#[prost(btree_map = "string, string", tag = $string_map_tag)] pub $string_map: BTreeMap<String, String>,)*
            $(#[prost(string, tag = $string_tag)] pub $string: String,)*
        }
    };
}

large_record_fields!(define_large_record_message);

/// Wire form of a corpus
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct LargeRecordList {
    /// Projected records in corpus order
    #[prost(message, repeated, tag = "1")]
    pub items: Vec<LargeRecordMessage>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use prost::Message;

    #[test]
    fn test_zero_message_is_empty_on_the_wire() {
        assert_eq!(LargeRecordMessage::default().encoded_len(), 0);
    }

    #[test]
    fn test_high_tag_uses_two_byte_key() {
        let message = LargeRecordMessage {
            field200: "x".to_string(),
            ..Default::default()
        };
        // key (200 << 3 | 2) is a two-byte varint, then length and payload
        assert_eq!(message.encode_to_vec(), vec![0xc2, 0x0c, 0x01, b'x']);
    }
}
