//! Hand-written serde support for the value types.
//!
//! Diagnostics pipelines often emit positions as part of structured output
//! (JSON error reports, LSP-ish payloads). [`Position`] and [`LineSpan`]
//! serialize as plain structs and deserialize from either the map or the
//! sequence encoding. The index itself is intentionally not serializable:
//! its only legal constructor is ingestion.

use std::fmt;

use serde::de::{self, Deserialize, Deserializer, MapAccess, SeqAccess, Visitor};
use serde::ser::{Serialize, SerializeStruct, Serializer};

use crate::index::{LineSpan, Position};

// ============================================================================
// Position
// ============================================================================

impl Serialize for Position {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut s = serializer.serialize_struct("Position", 2)?;
        s.serialize_field("line", &self.line)?;
        s.serialize_field("column", &self.column)?;
        s.end()
    }
}

impl<'de> Deserialize<'de> for Position {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        const FIELDS: &[&str] = &["line", "column"];

        enum Field {
            Line,
            Column,
        }

        impl<'de> Deserialize<'de> for Field {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: Deserializer<'de>,
            {
                struct FieldVisitor;

                impl<'de> Visitor<'de> for FieldVisitor {
                    type Value = Field;

                    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                        formatter.write_str("`line` or `column`")
                    }

                    fn visit_str<E>(self, value: &str) -> Result<Field, E>
                    where
                        E: de::Error,
                    {
                        match value {
                            "line" => Ok(Field::Line),
                            "column" => Ok(Field::Column),
                            _ => Err(de::Error::unknown_field(value, FIELDS)),
                        }
                    }
                }

                deserializer.deserialize_identifier(FieldVisitor)
            }
        }

        struct PositionVisitor;

        impl<'de> Visitor<'de> for PositionVisitor {
            type Value = Position;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("struct Position")
            }

            fn visit_seq<V>(self, mut seq: V) -> Result<Position, V::Error>
            where
                V: SeqAccess<'de>,
            {
                let line = seq
                    .next_element()?
                    .ok_or_else(|| de::Error::invalid_length(0, &self))?;
                let column = seq
                    .next_element()?
                    .ok_or_else(|| de::Error::invalid_length(1, &self))?;
                Ok(Position { line, column })
            }

            fn visit_map<V>(self, mut map: V) -> Result<Position, V::Error>
            where
                V: MapAccess<'de>,
            {
                let mut line = None;
                let mut column = None;
                while let Some(key) = map.next_key()? {
                    match key {
                        Field::Line => {
                            if line.is_some() {
                                return Err(de::Error::duplicate_field("line"));
                            }
                            line = Some(map.next_value()?);
                        }
                        Field::Column => {
                            if column.is_some() {
                                return Err(de::Error::duplicate_field("column"));
                            }
                            column = Some(map.next_value()?);
                        }
                    }
                }
                let line = line.ok_or_else(|| de::Error::missing_field("line"))?;
                let column = column.ok_or_else(|| de::Error::missing_field("column"))?;
                Ok(Position { line, column })
            }
        }

        deserializer.deserialize_struct("Position", FIELDS, PositionVisitor)
    }
}

// ============================================================================
// LineSpan
// ============================================================================

impl Serialize for LineSpan {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut s = serializer.serialize_struct("LineSpan", 3)?;
        s.serialize_field("from", &self.from)?;
        s.serialize_field("to", &self.to)?;
        s.serialize_field("line", &self.line)?;
        s.end()
    }
}

impl<'de> Deserialize<'de> for LineSpan {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        const FIELDS: &[&str] = &["from", "to", "line"];

        enum Field {
            From,
            To,
            Line,
        }

        impl<'de> Deserialize<'de> for Field {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: Deserializer<'de>,
            {
                struct FieldVisitor;

                impl<'de> Visitor<'de> for FieldVisitor {
                    type Value = Field;

                    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                        formatter.write_str("`from`, `to` or `line`")
                    }

                    fn visit_str<E>(self, value: &str) -> Result<Field, E>
                    where
                        E: de::Error,
                    {
                        match value {
                            "from" => Ok(Field::From),
                            "to" => Ok(Field::To),
                            "line" => Ok(Field::Line),
                            _ => Err(de::Error::unknown_field(value, FIELDS)),
                        }
                    }
                }

                deserializer.deserialize_identifier(FieldVisitor)
            }
        }

        struct LineSpanVisitor;

        impl<'de> Visitor<'de> for LineSpanVisitor {
            type Value = LineSpan;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("struct LineSpan")
            }

            fn visit_seq<V>(self, mut seq: V) -> Result<LineSpan, V::Error>
            where
                V: SeqAccess<'de>,
            {
                let from = seq
                    .next_element()?
                    .ok_or_else(|| de::Error::invalid_length(0, &self))?;
                let to = seq
                    .next_element()?
                    .ok_or_else(|| de::Error::invalid_length(1, &self))?;
                let line = seq
                    .next_element()?
                    .ok_or_else(|| de::Error::invalid_length(2, &self))?;
                Ok(LineSpan { from, to, line })
            }

            fn visit_map<V>(self, mut map: V) -> Result<LineSpan, V::Error>
            where
                V: MapAccess<'de>,
            {
                let mut from = None;
                let mut to = None;
                let mut line = None;
                while let Some(key) = map.next_key()? {
                    match key {
                        Field::From => {
                            if from.is_some() {
                                return Err(de::Error::duplicate_field("from"));
                            }
                            from = Some(map.next_value()?);
                        }
                        Field::To => {
                            if to.is_some() {
                                return Err(de::Error::duplicate_field("to"));
                            }
                            to = Some(map.next_value()?);
                        }
                        Field::Line => {
                            if line.is_some() {
                                return Err(de::Error::duplicate_field("line"));
                            }
                            line = Some(map.next_value()?);
                        }
                    }
                }
                let from = from.ok_or_else(|| de::Error::missing_field("from"))?;
                let to = to.ok_or_else(|| de::Error::missing_field("to"))?;
                let line = line.ok_or_else(|| de::Error::missing_field("line"))?;
                Ok(LineSpan { from, to, line })
            }
        }

        deserializer.deserialize_struct("LineSpan", FIELDS, LineSpanVisitor)
    }
}

#[cfg(test)]
mod tests {
    use crate::index::{LineSpan, Position};

    #[test]
    fn test_position_to_json() {
        let p = Position { line: 3, column: 8 };
        assert_eq!(
            serde_json::to_string(&p).unwrap(),
            r#"{"line":3,"column":8}"#
        );
    }

    #[test]
    fn test_position_from_json() {
        let p: Position = serde_json::from_str(r#"{"line":3,"column":8}"#).unwrap();
        assert_eq!(p, Position { line: 3, column: 8 });
        // field order must not matter
        let p: Position = serde_json::from_str(r#"{"column":8,"line":3}"#).unwrap();
        assert_eq!(p, Position { line: 3, column: 8 });
    }

    #[test]
    fn test_position_from_seq() {
        let p: Position = serde_json::from_str("[3,8]").unwrap();
        assert_eq!(p, Position { line: 3, column: 8 });
    }

    #[test]
    fn test_position_rejects_missing_field() {
        let r: Result<Position, _> = serde_json::from_str(r#"{"line":3}"#);
        assert!(r.is_err());
    }

    #[test]
    fn test_line_span_round_trip() {
        let s = LineSpan { from: 6, to: 10, line: 2 };
        let json = serde_json::to_string(&s).unwrap();
        assert_eq!(json, r#"{"from":6,"to":10,"line":2}"#);
        let back: LineSpan = serde_json::from_str(&json).unwrap();
        assert_eq!(back, s);
    }
}
