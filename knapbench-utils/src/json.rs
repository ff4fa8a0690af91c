use anyhow::{anyhow, Result};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::{to_string, to_value, Map, Value};
use std::fs;

pub fn dejsonify<'a, T>(json_str: &'a str) -> serde_json::Result<T>
where
    T: Deserialize<'a>,
{
    serde_json::from_str::<T>(json_str)
}

/// Serializes with object keys sorted. Fails for values json cannot hold,
/// such as paths that are not valid UTF-8.
pub fn jsonify<T>(obj: &T) -> serde_json::Result<String>
where
    T: Serialize,
{
    to_string(&sort_keys(&to_value(obj)?))
}

fn sort_keys(json_value: &Value) -> Value {
    match json_value {
        Value::Object(obj) => {
            let mut sorted_map = Map::new();
            let mut keys: Vec<&String> = obj.keys().collect();
            keys.sort();
            for key in keys {
                if let Some(value) = obj.get(key) {
                    sorted_map.insert(key.clone(), sort_keys(value));
                }
            }
            Value::Object(sorted_map)
        }
        Value::Array(arr) => Value::Array(arr.iter().map(sort_keys).collect()),
        _ => json_value.clone(),
    }
}

/// Parses `input` as json, reading it from disk first when it names a
/// `.json` file.
pub fn load_json<T>(input: &str) -> Result<T>
where
    T: DeserializeOwned,
{
    let content = if input.ends_with(".json") {
        fs::read_to_string(input)
            .map_err(|e| anyhow!("Failed to read json file {}: {}", input, e))?
    } else {
        input.to_string()
    };
    dejsonify::<T>(&content).map_err(|e| anyhow!("Failed to parse json: {}", e))
}
