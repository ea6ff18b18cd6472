// ============================================================================
// LENIENT - Deserializadores tolerantes para registros de DynamoDB
// ============================================================================
// Un campo raro en un registro no debe tumbar la lista completa.
// ============================================================================

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Números JSON o cadenas numéricas (p.ej. Decimal serializado como "49.90")
pub fn number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse().ok(),
        _ => None,
    })
}

/// Texto; `null` u otros tipos no textuales quedan como cadena vacía
pub fn text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(s)) => s,
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        _ => String::new(),
    })
}

/// Identificador: cadena o número (`7` → `"7"`); cualquier otra cosa es error
pub fn id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "invalid id: expected string or number, got {}",
            other
        ))),
    }
}
