//! The root `LargeRecord` type
//!
//! Expanded from the `large_record_fields!` table: the struct itself, its
//! field descriptors, and its policy-aware serializer.

use super::model_types::{FieldDescriptor, FieldKind, MidRecord};
use crate::nulls::{NullPolicy, PolicySerialize, StructWriter};
use serde::ser::Serializer;
use serde::Deserialize;
use std::collections::BTreeMap;

macro_rules! define_large_record {
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
        /// Worst-case business object: 20 nested references, 80 primitives,
        /// 12 nullable scalars, 3 collections and 85 optional strings.
        ///
        /// Fields are named by ordinal (`ref1..ref20`, `field21..field200`);
        /// see [`LargeRecord::FIELDS`] for the kind of each one.
        #[allow(missing_docs)]
        #[derive(Debug, Clone, Default, PartialEq, Deserialize)]
        pub struct LargeRecord {
            $(pub $nested: Option<MidRecord>,)*
            $(pub $int: i32,)*
            $(pub $long: i64,)*
            $(pub $double: f64,)*
            $(pub $boolean: bool,)*
            $(pub $float: f32,)*
            $(pub $short: i16,)*
            $(pub $byte: i8,)*
            $(pub $character: char,)*
            $(pub $boxed_int: Option<i32>,)*
            $(pub $boxed_long: Option<i64>,)*
            $(pub $boxed_double: Option<f64>,)*
            $(pub $boxed_bool: Option<bool>,)*
            $(pub $string_list: Option<Vec<String>>,)*
            $(pub $int_list: Option<Vec<i32>>,)*
            $(pub $string_map: Option<BTreeMap<String, String>>,)*
            $(pub $string: Option<String>,)*
        }

        impl LargeRecord {
            /// Every field in ordinal order
            pub const FIELDS: &'static [FieldDescriptor] = &[
                $(FieldDescriptor::new(stringify!($nested), FieldKind::Nested, true),)*
                $(FieldDescriptor::new(stringify!($int), FieldKind::Int, false),)*
                $(FieldDescriptor::new(stringify!($long), FieldKind::Long, false),)*
                $(FieldDescriptor::new(stringify!($double), FieldKind::Double, false),)*
                $(FieldDescriptor::new(stringify!($boolean), FieldKind::Boolean, false),)*
                $(FieldDescriptor::new(stringify!($float), FieldKind::Float, false),)*
                $(FieldDescriptor::new(stringify!($short), FieldKind::Short, false),)*
                $(FieldDescriptor::new(stringify!($byte), FieldKind::Byte, false),)*
                $(FieldDescriptor::new(stringify!($character), FieldKind::Character, false),)*
                $(FieldDescriptor::new(stringify!($boxed_int), FieldKind::Int, true),)*
                $(FieldDescriptor::new(stringify!($boxed_long), FieldKind::Long, true),)*
                $(FieldDescriptor::new(stringify!($boxed_double), FieldKind::Double, true),)*
                $(FieldDescriptor::new(stringify!($boxed_bool), FieldKind::Boolean, true),)*
                $(FieldDescriptor::new(stringify!($string_list), FieldKind::StringList, true),)*
                $(FieldDescriptor::new(stringify!($int_list), FieldKind::IntList, true),)*
                $(FieldDescriptor::new(stringify!($string_map), FieldKind::StringMap, true),)*
                $(FieldDescriptor::new(stringify!($string), FieldKind::String, true),)*
            ];

            /// Number of optional fields currently unset
            pub fn absent_fields(&self) -> usize {
                let mut absent = 0;
                $(absent += usize::from(self.$nested.is_none());)*
                $(absent += usize::from(self.$boxed_int.is_none());)*
                $(absent += usize::from(self.$boxed_long.is_none());)*
                $(absent += usize::from(self.$boxed_double.is_none());)*
                $(absent += usize::from(self.$boxed_bool.is_none());)*
                $(absent += usize::from(self.$string_list.is_none());)*
                $(absent += usize::from(self.$int_list.is_none());)*
                $(absent += usize::from(self.$string_map.is_none());)*
                $(absent += usize::from(self.$string.is_none());)*
                absent
            }
        }

        impl PolicySerialize for LargeRecord {
            fn serialize_with<S: Serializer>(
                &self,
                policy: NullPolicy,
                serializer: S,
            ) -> Result<S::Ok, S::Error> {
                let len = policy.field_count(Self::FIELDS.len(), self.absent_fields());
                let mut out =
                    StructWriter::new(serializer.serialize_struct("LargeRecord", len)?, policy);
                $(out.nested(stringify!($nested), &self.$nested)?;)*
                $(out.field(stringify!($int), &self.$int)?;)*
                $(out.field(stringify!($long), &self.$long)?;)*
                $(out.field(stringify!($double), &self.$double)?;)*
                $(out.field(stringify!($boolean), &self.$boolean)?;)*
                $(out.field(stringify!($float), &self.$float)?;)*
                $(out.field(stringify!($short), &self.$short)?;)*
                $(out.field(stringify!($byte), &self.$byte)?;)*
                $(out.field(stringify!($character), &self.$character)?;)*
                $(out.optional(stringify!($boxed_int), &self.$boxed_int)?;)*
                $(out.optional(stringify!($boxed_long), &self.$boxed_long)?;)*
                $(out.optional(stringify!($boxed_double), &self.$boxed_double)?;)*
                $(out.optional(stringify!($boxed_bool), &self.$boxed_bool)?;)*
                $(out.optional(stringify!($string_list), &self.$string_list)?;)*
                $(out.optional(stringify!($int_list), &self.$int_list)?;)*
                $(out.optional(stringify!($string_map), &self.$string_map)?;)*
                $(out.optional(stringify!($string), &self.$string)?;)*
                out.end()
            }
        }
    };
}

large_record_fields!(define_large_record);
