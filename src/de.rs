//! Typed INI deserialization.
//!
//! This module provides the [`Deserializer`] implementation that reads a
//! parsed [`Ini`] into Rust data structures. Sections become the fields (or
//! keys) of the outer type, options become the fields of each section type.
//!
//! ## Conversions
//!
//! Option values are strings; they are converted with the same rules as the
//! typed accessors on [`Ini`]:
//!
//! - **Booleans**: `true` if the value is one of the truthy strings, else `false`
//! - **Integers and floats**: the leading numeric prefix, trailing text ignored
//! - **`Option<T>`**: an empty value is `None`
//! - **Unit enum variants**: matched by name against the raw value
//!
//! Where an accessor would fall back to a default, decoding reports
//! [`Error::TypeMismatch`] instead; use `#[serde(default)]` to get the
//! accessor behavior.
//!
//! ## Usage
//!
//! ```rust
//! use iniparser::from_str;
//! use serde::Deserialize;
//!
//! #[derive(Deserialize, Debug, PartialEq)]
//! struct Server { host: String, port: u16, tls: bool }
//!
//! #[derive(Deserialize, Debug, PartialEq)]
//! struct Config { server: Server }
//!
//! let config: Config = from_str("[Server]\nHOST = example.org\nport = 443 ; https\ntls = on").unwrap();
//! assert_eq!(config.server, Server { host: "example.org".into(), port: 443, tls: true });
//! ```

use crate::number::{parse_float, parse_int};
use crate::options::IniOptions;
use crate::store::{Ini, Section};
use crate::{Error, Result};
use serde::de::value::BorrowedStrDeserializer;
use serde::{de, forward_to_deserialize_any};

/// The INI deserializer.
///
/// Walks a parsed [`Ini`] as a map of sections, each a map of options.
/// Created via [`Deserializer::new`].
pub struct Deserializer<'de> {
    ini: &'de Ini,
}

impl<'de> Deserializer<'de> {
    #[must_use]
    pub fn new(ini: &'de Ini) -> Self {
        Deserializer { ini }
    }
}

impl<'de> de::Deserializer<'de> for Deserializer<'de> {
    type Error = Error;

    fn deserialize_any<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        visitor.visit_map(SectionsAccess {
            iter: self.ini.into_iter(),
            pending: None,
            config: self.ini.parse_options(),
        })
    }

    fn deserialize_option<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        visitor.visit_some(self)
    }

    fn deserialize_newtype_struct<V>(self, _name: &'static str, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        visitor.visit_newtype_struct(self)
    }

    forward_to_deserialize_any! {
        bool i8 i16 i32 i64 i128 u8 u16 u32 u64 u128 f32 f64 char str string
        bytes byte_buf unit unit_struct seq tuple
        tuple_struct map struct enum identifier ignored_any
    }
}

struct SectionsAccess<'de> {
    iter: indexmap::map::Iter<'de, String, Section>,
    pending: Option<(&'de str, &'de Section)>,
    config: &'de IniOptions,
}

impl<'de> de::MapAccess<'de> for SectionsAccess<'de> {
    type Error = Error;

    fn next_key_seed<K>(&mut self, seed: K) -> Result<Option<K::Value>>
    where
        K: de::DeserializeSeed<'de>,
    {
        match self.iter.next() {
            Some((name, section)) => {
                self.pending = Some((name.as_str(), section));
                seed.deserialize(BorrowedStrDeserializer::<Error>::new(name))
                    .map(Some)
            }
            None => Ok(None),
        }
    }

    fn next_value_seed<V>(&mut self, seed: V) -> Result<V::Value>
    where
        V: de::DeserializeSeed<'de>,
    {
        match self.pending.take() {
            Some((name, section)) => seed.deserialize(SectionDeserializer {
                name,
                section,
                config: self.config,
            }),
            None => Err(Error::custom("next_value_seed called before next_key_seed")),
        }
    }

    fn size_hint(&self) -> Option<usize> {
        Some(self.iter.len())
    }
}

struct SectionDeserializer<'de> {
    name: &'de str,
    section: &'de Section,
    config: &'de IniOptions,
}

impl<'de> de::Deserializer<'de> for SectionDeserializer<'de> {
    type Error = Error;

    fn deserialize_any<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        visitor.visit_map(OptionsAccess {
            section: self.name,
            iter: self.section.entries(),
            pending: None,
            config: self.config,
        })
    }

    fn deserialize_option<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        visitor.visit_some(self)
    }

    fn deserialize_newtype_struct<V>(self, _name: &'static str, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        visitor.visit_newtype_struct(self)
    }

    forward_to_deserialize_any! {
        bool i8 i16 i32 i64 i128 u8 u16 u32 u64 u128 f32 f64 char str string
        bytes byte_buf unit unit_struct seq tuple
        tuple_struct map struct enum identifier ignored_any
    }
}

struct OptionsAccess<'de> {
    section: &'de str,
    iter: indexmap::map::Iter<'de, String, String>,
    pending: Option<(&'de str, &'de str)>,
    config: &'de IniOptions,
}

impl<'de> de::MapAccess<'de> for OptionsAccess<'de> {
    type Error = Error;

    fn next_key_seed<K>(&mut self, seed: K) -> Result<Option<K::Value>>
    where
        K: de::DeserializeSeed<'de>,
    {
        match self.iter.next() {
            Some((option, value)) => {
                self.pending = Some((option.as_str(), value.as_str()));
                seed.deserialize(BorrowedStrDeserializer::<Error>::new(option))
                    .map(Some)
            }
            None => Ok(None),
        }
    }

    fn next_value_seed<V>(&mut self, seed: V) -> Result<V::Value>
    where
        V: de::DeserializeSeed<'de>,
    {
        match self.pending.take() {
            Some((option, value)) => seed.deserialize(ValueDeserializer {
                section: self.section,
                option,
                value,
                config: self.config,
            }),
            None => Err(Error::custom("next_value_seed called before next_key_seed")),
        }
    }

    fn size_hint(&self) -> Option<usize> {
        Some(self.iter.len())
    }
}

/// Deserializes a single option value, converting it on demand.
struct ValueDeserializer<'de> {
    section: &'de str,
    option: &'de str,
    value: &'de str,
    config: &'de IniOptions,
}

impl ValueDeserializer<'_> {
    fn mismatch(&self, expected: &str) -> Error {
        Error::type_mismatch(self.section, self.option, expected, self.value)
    }

    fn int<T: std::str::FromStr>(&self, expected: &str) -> Result<T> {
        parse_int(self.value).ok_or_else(|| self.mismatch(expected))
    }

    fn float(&self) -> Result<f64> {
        parse_float(self.value).ok_or_else(|| self.mismatch("float"))
    }
}

macro_rules! deserialize_int {
    ($($method:ident => $visit:ident : $ty:ty),* $(,)?) => {
        $(
            fn $method<V>(self, visitor: V) -> Result<V::Value>
            where
                V: de::Visitor<'de>,
            {
                let n = self.int::<$ty>(stringify!($ty))?;
                visitor.$visit(n)
            }
        )*
    };
}

impl<'de> de::Deserializer<'de> for ValueDeserializer<'de> {
    type Error = Error;

    fn deserialize_any<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        visitor.visit_borrowed_str(self.value)
    }

    fn deserialize_bool<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        if self.value.is_empty() {
            return Err(self.mismatch("boolean"));
        }
        visitor.visit_bool(self.config.is_true(self.value))
    }

    deserialize_int! {
        deserialize_i8 => visit_i8: i8,
        deserialize_i16 => visit_i16: i16,
        deserialize_i32 => visit_i32: i32,
        deserialize_i64 => visit_i64: i64,
        deserialize_i128 => visit_i128: i128,
        deserialize_u8 => visit_u8: u8,
        deserialize_u16 => visit_u16: u16,
        deserialize_u32 => visit_u32: u32,
        deserialize_u64 => visit_u64: u64,
        deserialize_u128 => visit_u128: u128,
    }

    fn deserialize_f32<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        let f = self.float()?;
        visitor.visit_f32(f as f32)
    }

    fn deserialize_f64<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        let f = self.float()?;
        visitor.visit_f64(f)
    }

    fn deserialize_char<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        let mut chars = self.value.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => visitor.visit_char(c),
            _ => Err(self.mismatch("single character")),
        }
    }

    fn deserialize_bytes<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        visitor.visit_borrowed_bytes(self.value.as_bytes())
    }

    fn deserialize_byte_buf<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        de::Deserializer::deserialize_bytes(self, visitor)
    }

    fn deserialize_option<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        if self.value.is_empty() {
            visitor.visit_none()
        } else {
            visitor.visit_some(self)
        }
    }

    fn deserialize_unit<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        visitor.visit_unit()
    }

    fn deserialize_newtype_struct<V>(self, _name: &'static str, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        visitor.visit_newtype_struct(self)
    }

    fn deserialize_enum<V>(
        self,
        name: &'static str,
        variants: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        let value = BorrowedStrDeserializer::<Error>::new(self.value);
        de::Deserializer::deserialize_enum(value, name, variants, visitor)
    }

    fn deserialize_ignored_any<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        visitor.visit_unit()
    }

    forward_to_deserialize_any! {
        str string unit_struct seq tuple tuple_struct map struct identifier
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use std::collections::BTreeMap;

    fn decode<'de, T: Deserialize<'de>>(ini: &'de Ini) -> Result<T> {
        T::deserialize(Deserializer::new(ini))
    }

    #[test]
    fn test_struct_fields_use_accessor_conversions() {
        #[derive(Deserialize, Debug, PartialEq)]
        struct Numbers {
            param3: i32,
            param4: i64,
            ratio: f64,
            flag: bool,
            other: bool,
        }

        #[derive(Deserialize, Debug, PartialEq)]
        struct File {
            numbers: Numbers,
        }

        let ini = Ini::parse(
            "[NUMBERS]\nparam3 = -38384 849\nparam4 = -38hvgf\nratio = 309e3\nflag = ENABLE\nother = maybe",
        );
        let file: File = decode(&ini).unwrap();
        assert_eq!(
            file.numbers,
            Numbers {
                param3: -38384,
                param4: -38,
                ratio: 309000.0,
                flag: true,
                other: false,
            }
        );
    }

    #[test]
    fn test_nested_maps_keep_raw_strings() {
        let ini = Ini::parse("a = 1\n[b]\nc = \" x \"");
        let map: BTreeMap<String, BTreeMap<String, String>> = decode(&ini).unwrap();
        assert_eq!(map["default"]["a"], "1");
        assert_eq!(map["b"]["c"], " x ");
    }

    #[test]
    fn test_borrowed_strings() {
        #[derive(Deserialize)]
        struct S<'a> {
            name: &'a str,
        }
        let ini = Ini::parse("[s]\nname = borrowed");
        let map: BTreeMap<&str, S<'_>> = decode(&ini).unwrap();
        assert_eq!(map["s"].name, "borrowed");
    }

    #[test]
    fn test_empty_value_as_option() {
        #[derive(Deserialize)]
        struct S {
            empty: Option<i32>,
            set: Option<i32>,
        }
        let ini = Ini::parse("[s]\nempty =\nset = 7");
        let map: BTreeMap<String, S> = decode(&ini).unwrap();
        assert_eq!(map["s"].empty, None);
        assert_eq!(map["s"].set, Some(7));
    }

    #[test]
    fn test_unit_enum_variant() {
        #[derive(Deserialize, Debug, PartialEq)]
        #[serde(rename_all = "lowercase")]
        enum Level {
            Debug,
            Info,
        }
        let ini = Ini::parse("level = info");
        let map: BTreeMap<String, BTreeMap<String, Level>> = decode(&ini).unwrap();
        assert_eq!(map["default"]["level"], Level::Info);
    }

    #[test]
    fn test_type_mismatch_reports_location() {
        let ini = Ini::parse("[int]\nparam5 = true");
        let err = decode::<BTreeMap<String, BTreeMap<String, i32>>>(&ini).unwrap_err();
        match err {
            Error::TypeMismatch {
                section,
                option,
                expected,
                found,
            } => {
                assert_eq!(section, "int");
                assert_eq!(option, "param5");
                assert_eq!(expected, "i32");
                assert_eq!(found, "true");
            }
            other => panic!("Expected type mismatch, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_bool_is_an_error() {
        let ini = Ini::parse("flag =");
        let result = decode::<BTreeMap<String, BTreeMap<String, bool>>>(&ini);
        assert!(matches!(result, Err(Error::TypeMismatch { .. })));
    }
}
