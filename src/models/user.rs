use serde::de::{self, Deserializer};
use serde::Deserialize;
use serde_json::Value;
use crate::models::lenient;

/// Perfil devuelto por `GET /usuarios/{id}`; nunca se modifica localmente
///
/// `raw` guarda el registro tal como llegó (mismas claves, mismo orden) para
/// el volcado JSON; los campos tipados salen de ese mismo valor.
#[derive(Debug, Clone, PartialEq)]
pub struct UserProfile {
    pub usuario_id: String,
    pub nombre: String,
    pub email: String,
    pub fecha_registro: Option<String>,
    pub raw: Value,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct UserFields {
    #[serde(deserialize_with = "lenient::id")]
    usuario_id: String,
    #[serde(default, deserialize_with = "lenient::text")]
    nombre: String,
    #[serde(default, deserialize_with = "lenient::text")]
    email: String,
    #[serde(default)]
    fecha_registro: Option<String>,
}

impl UserProfile {
    /// Construye el perfil a partir del JSON recibido
    pub fn from_value(raw: Value) -> Result<Self, serde_json::Error> {
        let fields = UserFields::deserialize(&raw)?;
        Ok(Self {
            usuario_id: fields.usuario_id,
            nombre: fields.nombre,
            email: fields.email,
            fecha_registro: fields.fecha_registro.filter(|f| !f.is_empty()),
            raw,
        })
    }

    /// Registro recibido como JSON indentado (2 espacios)
    pub fn to_pretty_json(&self) -> String {
        serde_json::to_string_pretty(&self.raw).unwrap_or_else(|_| self.usuario_id.clone())
    }
}

impl<'de> Deserialize<'de> for UserProfile {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Value::deserialize(deserializer)?;
        Self::from_value(raw).map_err(de::Error::custom)
    }
}
