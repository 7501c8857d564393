//! Nested record types and field descriptors
//!
//! `MidRecord` and `DeepRecord` are the two nesting levels below
//! `LargeRecord`. Every field is optional, so absence is always distinct from
//! an empty or zero value.

use crate::nulls::{NullPolicy, PolicySerialize, StructWriter};
use serde::ser::Serializer;
use serde::Deserialize;

/// Leaf-level record holding a string and a binary blob
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct DeepRecord {
    /// Free text
    pub text: Option<String>,
    /// Opaque binary payload
    #[serde(default, with = "serde_bytes")]
    pub blob: Option<Vec<u8>>,
}

impl DeepRecord {
    const FIELD_COUNT: usize = 2;

    fn absent_fields(&self) -> usize {
        usize::from(self.text.is_none()) + usize::from(self.blob.is_none())
    }
}

impl PolicySerialize for DeepRecord {
    fn serialize_with<S: Serializer>(
        &self,
        policy: NullPolicy,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        let len = policy.field_count(Self::FIELD_COUNT, self.absent_fields());
        let mut out = StructWriter::new(serializer.serialize_struct("DeepRecord", len)?, policy);
        out.optional("text", &self.text)?;
        out.bytes("blob", &self.blob)?;
        out.end()
    }
}

/// Mid-level record referenced from `LargeRecord::ref1..ref20`
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MidRecord {
    /// First text field
    pub field1: Option<String>,
    /// Second text field
    pub field2: Option<String>,
    /// Third text field
    pub field3: Option<String>,
    /// Fourth text field
    pub field4: Option<String>,
    /// Fifth text field
    pub field5: Option<String>,
    /// Nullable 64-bit integer
    pub long_field1: Option<i64>,
    /// Nullable 32-bit integer
    pub int_field1: Option<i32>,
    /// Nullable double
    pub double_field1: Option<f64>,
    /// Owned leaf record
    pub deep_nested: Option<DeepRecord>,
}

impl MidRecord {
    const FIELD_COUNT: usize = 9;

    fn absent_fields(&self) -> usize {
        [
            self.field1.is_none(),
            self.field2.is_none(),
            self.field3.is_none(),
            self.field4.is_none(),
            self.field5.is_none(),
            self.long_field1.is_none(),
            self.int_field1.is_none(),
            self.double_field1.is_none(),
            self.deep_nested.is_none(),
        ]
        .into_iter()
        .filter(|absent| *absent)
        .count()
    }
}

impl PolicySerialize for MidRecord {
    fn serialize_with<S: Serializer>(
        &self,
        policy: NullPolicy,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        let len = policy.field_count(Self::FIELD_COUNT, self.absent_fields());
        let mut out = StructWriter::new(serializer.serialize_struct("Nested", len)?, policy);
        out.optional("field1", &self.field1)?;
        out.optional("field2", &self.field2)?;
        out.optional("field3", &self.field3)?;
        out.optional("field4", &self.field4)?;
        out.optional("field5", &self.field5)?;
        out.optional("longField1", &self.long_field1)?;
        out.optional("intField1", &self.int_field1)?;
        out.optional("doubleField1", &self.double_field1)?;
        out.nested("deepNested", &self.deep_nested)?;
        out.end()
    }
}

/// Value kind of a `LargeRecord` field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    /// Owned `MidRecord`
    Nested,
    /// 32-bit integer
    Int,
    /// 64-bit integer
    Long,
    /// Double precision float
    Double,
    /// Boolean
    Boolean,
    /// Single precision float
    Float,
    /// 16-bit integer
    Short,
    /// 8-bit integer
    Byte,
    /// Unicode scalar value
    Character,
    /// Sequence of strings
    StringList,
    /// Sequence of 32-bit integers
    IntList,
    /// String to string mapping
    StringMap,
    /// Text
    String,
}

/// One entry of the `LargeRecord` field table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDescriptor {
    /// Ordinal field name, also the key used by map-based encodings
    pub name: &'static str,
    /// Value kind
    pub kind: FieldKind,
    /// Whether the field can be absent
    pub optional: bool,
}

impl FieldDescriptor {
    pub(crate) const fn new(name: &'static str, kind: FieldKind, optional: bool) -> Self {
        Self {
            name,
            kind,
            optional,
        }
    }
}
