//! Projection of the data model onto the schema messages
//!
//! Non-nullable primitives are copied unconditionally. Nullable scalars,
//! strings and nested records are copied only when present, otherwise the
//! message keeps its zero value. Collections are copied wholesale when
//! present and left empty when absent, so an absent collection and an empty
//! one encode identically.

use super::schema_types::{DeepRecordMessage, LargeRecordList, LargeRecordMessage, MidRecordMessage};
use crate::model::{Corpus, DeepRecord, LargeRecord, MidRecord};

/// How absent nested references are written
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NestedPolicy {
    /// Absent references are omitted from the message
    #[default]
    OmitAbsent,
    /// Absent references become empty sub-messages
    EmptyMessage,
}

/// Project one record, omitting absent nested references
pub fn project(record: &LargeRecord) -> LargeRecordMessage {
    project_with(record, NestedPolicy::OmitAbsent)
}

/// Project every record of a corpus, in order
pub fn project_corpus(corpus: &Corpus) -> LargeRecordList {
    project_corpus_with(corpus, NestedPolicy::OmitAbsent)
}

/// Project every record of a corpus under the given nested policy
pub fn project_corpus_with(corpus: &Corpus, nested: NestedPolicy) -> LargeRecordList {
    LargeRecordList {
        items: corpus.iter().map(|record| project_with(record, nested)).collect(),
    }
}

fn project_nested(value: Option<&MidRecord>, nested: NestedPolicy) -> Option<MidRecordMessage> {
    match (value, nested) {
        (Some(mid), _) => Some(project_mid(mid)),
        (None, NestedPolicy::EmptyMessage) => Some(MidRecordMessage::default()),
        (None, NestedPolicy::OmitAbsent) => None,
    }
}

fn project_mid(mid: &MidRecord) -> MidRecordMessage {
    let mut message = MidRecordMessage::default();
    copy_text(&mut message.field1, &mid.field1);
    copy_text(&mut message.field2, &mid.field2);
    copy_text(&mut message.field3, &mid.field3);
    copy_text(&mut message.field4, &mid.field4);
    copy_text(&mut message.field5, &mid.field5);
    copy_scalar(&mut message.long_field1, mid.long_field1);
    copy_scalar(&mut message.int_field1, mid.int_field1);
    copy_scalar(&mut message.double_field1, mid.double_field1);
    message.deep_nested = mid.deep_nested.as_ref().map(project_deep);
    message
}

fn project_deep(deep: &DeepRecord) -> DeepRecordMessage {
    let mut message = DeepRecordMessage::default();
    copy_text(&mut message.text, &deep.text);
    if let Some(blob) = &deep.blob {
        message.blob.clone_from(blob);
    }
    message
}

fn copy_scalar<T: Copy>(target: &mut T, value: Option<T>) {
    if let Some(value) = value {
        *target = value;
    }
}

fn copy_text(target: &mut String, value: &Option<String>) {
    if let Some(value) = value {
        target.clone_from(value);
    }
}

macro_rules! define_projection {
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
        /// Project one record under the given nested policy
        pub fn project_with(record: &LargeRecord, nested: NestedPolicy) -> LargeRecordMessage {
            let mut message = LargeRecordMessage::default();

            $(message.$nested = project_nested(record.$nested.as_ref(), nested);)*

            $(message.$int = record.$int;)*
            $(message.$long = record.$long;)*
            $(message.$double = record.$double;)*
            $(message.$boolean = record.$boolean;)*
            $(message.$float = record.$float;)*
            $(message.$short = i32::from(record.$short);)*
            $(message.$byte = i32::from(record.$byte);)*
            $(message.$character = u32::from(record.$character);)*

            $(copy_scalar(&mut message.$boxed_int, record.$boxed_int);)*
            $(copy_scalar(&mut message.$boxed_long, record.$boxed_long);)*
            $(copy_scalar(&mut message.$boxed_double, record.$boxed_double);)*
            $(copy_scalar(&mut message.$boxed_bool, record.$boxed_bool);)*

            $(if let Some(items) = &record.$string_list {
                message.$string_list.extend(items.iter().cloned());
            })*
            $(if let Some(items) = &record.$int_list {
                message.$int_list.extend_from_slice(items);
            })*
            $(if let Some(entries) = &record.$string_map {
                message
                    .$string_map
                    .extend(entries.iter().map(|(k, v)| (k.clone(), v.clone())));
            })*

            $(copy_text(&mut message.$string, &record.$string);)*

            message
        }
    };
}

large_record_fields!(define_projection);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixture::{create_corpus, create_record};
    use prost::Message;

    #[test]
    fn test_primitives_copied() {
        let message = project(&create_record());
        assert_eq!(message.field21, 42);
        assert_eq!(message.field32, 987_654_321);
        assert_eq!(message.field71, 100);
        assert_eq!(message.field81, 1);
        assert_eq!(message.field91, u32::from('A'));
        assert!(message.field51);
    }

    #[test]
    fn test_absent_fields_keep_zero_value() {
        let message = project(&create_record());
        assert_eq!(message.field103, 0);
        assert!(message.field117.is_empty());
        assert!(message.ref2.is_none());

        let mid = message.ref1.as_ref().unwrap();
        assert!(mid.field4.is_empty());
        assert_eq!(mid.deep_nested.as_ref().unwrap().blob.len(), 500);
    }

    #[test]
    fn test_absent_collections_match_empty_ones_on_the_wire() {
        let absent = LargeRecord::default();
        let empty = LargeRecord {
            field113: Some(Vec::new()),
            field114: Some(Vec::new()),
            field115: Some(Default::default()),
            ..Default::default()
        };
        assert_eq!(project(&absent).encode_to_vec(), project(&empty).encode_to_vec());
    }

    #[test]
    fn test_empty_message_policy_materializes_refs() {
        let message = project_with(&create_record(), NestedPolicy::EmptyMessage);
        assert_eq!(message.ref2, Some(MidRecordMessage::default()));
        assert_eq!(message.ref1, project(&create_record()).ref1);
    }

    #[test]
    fn test_corpus_order() {
        let list = project_corpus(&create_corpus(4));
        assert_eq!(list.items.len(), 4);
        assert_eq!(list.items[3].field113, vec!["Item 1", "Item 2", "Item 3"]);
    }
}
