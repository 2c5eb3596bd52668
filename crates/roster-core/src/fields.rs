// ABOUTME: Lenient decoding of flat string-field objects shared by every roster request shape.
// ABOUTME: Keys match case-insensitively, missing or null fields stay None, unknown keys are skipped.

use std::fmt;
use std::marker::PhantomData;

use serde::Deserializer;
use serde::de::{self, IgnoredAny, MapAccess, Visitor};

/// Decode an object whose interesting fields are all strings.
///
/// Returns one slot per name in `fields`, in the same order. A JSON `null`
/// document decodes to all `None`. A key that appears twice keeps the last value.
pub fn decode_string_fields<'de, D, const N: usize>(
    deserializer: D,
    fields: [&'static str; N],
) -> Result<[Option<String>; N], D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(StringFields {
        fields,
        marker: PhantomData,
    })
}

struct StringFields<'de, const N: usize> {
    fields: [&'static str; N],
    marker: PhantomData<&'de ()>,
}

impl<'de, const N: usize> Visitor<'de> for StringFields<'de, N> {
    type Value = [Option<String>; N];

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "an object with string fields {:?}", self.fields)
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(std::array::from_fn(|_| None))
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut values: [Option<String>; N] = std::array::from_fn(|_| None);
        while let Some(key) = map.next_key::<String>()? {
            match self.fields.iter().position(|f| f.eq_ignore_ascii_case(&key)) {
                Some(i) => {
                    if let Some(value) = map.next_value::<Option<String>>()? {
                        values[i] = Some(value);
                    }
                }
                None => {
                    map.next_value::<IgnoredAny>()?;
                }
            }
        }
        Ok(values)
    }
}
