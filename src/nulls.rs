//! Null policy and policy-aware serialization
//!
//! `serde` attributes such as `skip_serializing_if` are fixed at compile time,
//! while the harness needs to encode the same record with and without null
//! markers. Types implement [`PolicySerialize`] instead of `Serialize`, and
//! [`WithPolicy`] adapts them back to plain `Serialize` for any backend.

use serde::ser::{SerializeSeq, SerializeStruct};
use serde::{Serialize, Serializer};

/// Whether absent optional fields are emitted as explicit null markers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NullPolicy {
    /// Absent fields are written as null
    IncludeNulls,
    /// Absent fields are left out entirely
    ExcludeNulls,
}

impl NullPolicy {
    /// Both policies, in the order suites are reported
    pub const ALL: [NullPolicy; 2] = [NullPolicy::IncludeNulls, NullPolicy::ExcludeNulls];

    /// Human-readable configuration label
    pub fn label(self) -> &'static str {
        match self {
            NullPolicy::IncludeNulls => "WITH NULLS",
            NullPolicy::ExcludeNulls => "WITHOUT NULLS",
        }
    }

    /// Check whether absent fields are written
    pub fn includes_nulls(self) -> bool {
        matches!(self, NullPolicy::IncludeNulls)
    }

    /// Number of struct entries written for a struct with `total` fields of
    /// which `absent` are unset optionals.
    pub fn field_count(self, total: usize, absent: usize) -> usize {
        if self.includes_nulls() {
            total
        } else {
            total - absent
        }
    }
}

impl std::fmt::Display for NullPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Serialization that depends on a runtime [`NullPolicy`]
pub trait PolicySerialize {
    /// Serialize `self` under the given policy
    fn serialize_with<S: Serializer>(
        &self,
        policy: NullPolicy,
        serializer: S,
    ) -> Result<S::Ok, S::Error>;
}

impl<T: PolicySerialize> PolicySerialize for [T] {
    fn serialize_with<S: Serializer>(
        &self,
        policy: NullPolicy,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for item in self {
            seq.serialize_element(&WithPolicy::new(item, policy))?;
        }
        seq.end()
    }
}

impl<T: PolicySerialize + ?Sized> PolicySerialize for std::sync::Arc<T> {
    fn serialize_with<S: Serializer>(
        &self,
        policy: NullPolicy,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        (**self).serialize_with(policy, serializer)
    }
}

/// Borrowed value paired with the policy to serialize it under
pub struct WithPolicy<'a, T: ?Sized> {
    value: &'a T,
    policy: NullPolicy,
}

impl<'a, T: ?Sized> WithPolicy<'a, T> {
    /// Wrap `value` for serialization under `policy`
    pub fn new(value: &'a T, policy: NullPolicy) -> Self {
        Self { value, policy }
    }
}

impl<T: PolicySerialize + ?Sized> Serialize for WithPolicy<'_, T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.value.serialize_with(self.policy, serializer)
    }
}

/// Struct serializer that applies a [`NullPolicy`] to optional fields.
///
/// The entry count handed to `serialize_struct` must already account for
/// skipped fields; map-based encoders write it up front.
pub(crate) struct StructWriter<S: SerializeStruct> {
    inner: S,
    policy: NullPolicy,
}

impl<S: SerializeStruct> StructWriter<S> {
    pub(crate) fn new(inner: S, policy: NullPolicy) -> Self {
        Self { inner, policy }
    }

    /// Non-nullable field, always written
    pub(crate) fn field<T: Serialize + ?Sized>(
        &mut self,
        key: &'static str,
        value: &T,
    ) -> Result<(), S::Error> {
        self.inner.serialize_field(key, value)
    }

    /// Optional plain value
    pub(crate) fn optional<T: Serialize>(
        &mut self,
        key: &'static str,
        value: &Option<T>,
    ) -> Result<(), S::Error> {
        match value {
            Some(value) => self.inner.serialize_field(key, value),
            None => self.absent(key),
        }
    }

    /// Optional nested record, serialized under the same policy
    pub(crate) fn nested<T: PolicySerialize>(
        &mut self,
        key: &'static str,
        value: &Option<T>,
    ) -> Result<(), S::Error> {
        match value {
            Some(value) => self
                .inner
                .serialize_field(key, &WithPolicy::new(value, self.policy)),
            None => self.absent(key),
        }
    }

    /// Optional binary blob, written with the backend's native bytes type
    pub(crate) fn bytes(
        &mut self,
        key: &'static str,
        value: &Option<Vec<u8>>,
    ) -> Result<(), S::Error> {
        match value {
            Some(value) => self
                .inner
                .serialize_field(key, serde_bytes::Bytes::new(value)),
            None => self.absent(key),
        }
    }

    fn absent(&mut self, key: &'static str) -> Result<(), S::Error> {
        if self.policy.includes_nulls() {
            self.inner.serialize_field(key, &Option::<()>::None)
        } else {
            self.inner.skip_field(key)
        }
    }

    pub(crate) fn end(self) -> Result<S::Ok, S::Error> {
        self.inner.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Pair {
        left: Option<u32>,
        right: u32,
    }

    impl PolicySerialize for Pair {
        fn serialize_with<S: Serializer>(
            &self,
            policy: NullPolicy,
            serializer: S,
        ) -> Result<S::Ok, S::Error> {
            let absent = usize::from(self.left.is_none());
            let len = policy.field_count(2, absent);
            let mut out = StructWriter::new(serializer.serialize_struct("Pair", len)?, policy);
            out.optional("left", &self.left)?;
            out.field("right", &self.right)?;
            out.end()
        }
    }

    #[test]
    fn test_labels() {
        assert_eq!(NullPolicy::IncludeNulls.label(), "WITH NULLS");
        assert_eq!(NullPolicy::ExcludeNulls.to_string(), "WITHOUT NULLS");
    }

    #[test]
    fn test_field_count() {
        assert_eq!(NullPolicy::IncludeNulls.field_count(10, 4), 10);
        assert_eq!(NullPolicy::ExcludeNulls.field_count(10, 4), 6);
    }

    #[test]
    fn test_json_absent_field() {
        let pair = Pair { left: None, right: 7 };

        let with = serde_json::to_string(&WithPolicy::new(&pair, NullPolicy::IncludeNulls)).unwrap();
        assert_eq!(with, r#"{"left":null,"right":7}"#);

        let without = serde_json::to_string(&WithPolicy::new(&pair, NullPolicy::ExcludeNulls)).unwrap();
        assert_eq!(without, r#"{"right":7}"#);
    }

    #[test]
    fn test_msgpack_map_length_matches_entries() {
        let pairs = vec![Pair { left: None, right: 1 }, Pair { left: Some(2), right: 3 }];
        let bytes =
            rmp_serde::to_vec_named(&WithPolicy::new(pairs.as_slice(), NullPolicy::ExcludeNulls))
                .unwrap();
        let decoded: serde_json::Value = rmp_serde::from_slice(&bytes).unwrap();
        assert_eq!(decoded, serde_json::json!([{"right": 1}, {"left": 2, "right": 3}]));
    }
}
