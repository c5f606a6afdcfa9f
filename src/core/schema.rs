//! Structural checks for API payloads.
//!
//! The API is not trusted: every record is checked field by field before it
//! is converted into a typed value, and the first offending field is
//! reported. Unknown extra fields are ignored.

use crate::domain::model::{Actor, ActorNationality, Actress, ActressNationality};
use crate::domain::ports::Entity;
use crate::utils::error::{ClientError, Result};
use serde_json::{Map, Value};

type Object = Map<String, Value>;

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn as_object(value: &Value) -> Result<&Object> {
    value
        .as_object()
        .ok_or_else(|| ClientError::invalid_field("$", format!("expected object, got {}", json_type(value))))
}

fn require<'a>(obj: &'a Object, field: &str) -> Result<&'a Value> {
    obj.get(field)
        .ok_or_else(|| ClientError::invalid_field(field, "missing"))
}

fn require_string<'a>(obj: &'a Object, field: &str) -> Result<&'a str> {
    let value = require(obj, field)?;
    value
        .as_str()
        .ok_or_else(|| ClientError::invalid_field(field, format!("expected string, got {}", json_type(value))))
}

fn require_integer(obj: &Object, field: &str) -> Result<i64> {
    let value = require(obj, field)?;
    value
        .as_i64()
        .ok_or_else(|| ClientError::invalid_field(field, format!("expected integer, got {}", value)))
}

fn require_id(obj: &Object) -> Result<u64> {
    let value = require(obj, "id")?;
    value
        .as_u64()
        .ok_or_else(|| ClientError::invalid_field("id", format!("expected non-negative integer, got {}", value)))
}

fn optional_integer(obj: &Object, field: &str) -> Result<Option<i64>> {
    match obj.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(value) => value
            .as_i64()
            .map(Some)
            .ok_or_else(|| ClientError::invalid_field(field, format!("expected integer or null, got {}", value))),
    }
}

fn require_string_array<'a>(
    obj: &'a Object,
    field: &str,
    min_len: usize,
    max_len: usize,
) -> Result<Vec<&'a str>> {
    let value = require(obj, field)?;
    let items = value
        .as_array()
        .ok_or_else(|| ClientError::invalid_field(field, format!("expected array, got {}", json_type(value))))?;

    if items.len() < min_len || items.len() > max_len {
        let expected = if min_len == max_len {
            format!("{}", min_len)
        } else {
            format!("{} to {}", min_len, max_len)
        };
        return Err(ClientError::invalid_field(
            field,
            format!("expected {} entries, got {}", expected, items.len()),
        ));
    }

    items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            item.as_str().ok_or_else(|| {
                ClientError::invalid_field(field, format!("entry {} is {}, not string", i, json_type(item)))
            })
        })
        .collect()
}

fn require_nationality<N>(obj: &Object, from_label: fn(&str) -> Option<N>) -> Result<N> {
    let label = require_string(obj, "nationality")?;
    from_label(label)
        .ok_or_else(|| ClientError::invalid_field("nationality", format!("unknown nationality `{}`", label)))
}

fn check_person(obj: &Object) -> Result<()> {
    require_id(obj)?;
    require_string(obj, "name")?;
    require_integer(obj, "birth_year")?;
    optional_integer(obj, "death_year")?;
    require_string(obj, "biography")?;
    require_string(obj, "image")?;
    Ok(())
}

pub fn check_actress(value: &Value) -> Result<()> {
    let obj = as_object(value)?;
    check_person(obj)?;
    require_string_array(obj, "most_famous_movies", 3, 3)?;
    require_string(obj, "awards")?;
    require_nationality(obj, ActressNationality::from_label)?;
    Ok(())
}

pub fn check_actor(value: &Value) -> Result<()> {
    let obj = as_object(value)?;
    check_person(obj)?;
    require_string_array(obj, "known_for", 3, 3)?;
    require_string_array(obj, "awards", 1, 2)?;
    require_nationality(obj, ActorNationality::from_label)?;
    Ok(())
}

pub fn is_actress(value: &Value) -> bool {
    check_actress(value).is_ok()
}

pub fn is_actor(value: &Value) -> bool {
    check_actor(value).is_ok()
}

pub fn parse_actress(value: Value) -> Result<Actress> {
    check_actress(&value)?;
    Ok(serde_json::from_value(value)?)
}

pub fn parse_actor(value: Value) -> Result<Actor> {
    check_actor(&value)?;
    Ok(serde_json::from_value(value)?)
}

impl Entity for Actress {
    const COLLECTION: &'static str = "actresses";
    const LABEL: &'static str = "actress";

    fn from_json(value: Value) -> Result<Self> {
        parse_actress(value)
    }

    fn entity_id(&self) -> u64 {
        self.id()
    }
}

impl Entity for Actor {
    const COLLECTION: &'static str = "actors";
    const LABEL: &'static str = "actor";

    fn from_json(value: Value) -> Result<Self> {
        parse_actor(value)
    }

    fn entity_id(&self) -> u64 {
        self.id()
    }
}
