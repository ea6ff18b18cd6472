/// URL base del API Gateway
/// Configurable en tiempo de compilación vía `API_BASE_URL` (o `.env`).
pub const API_BASE_URL: &str = match option_env!("API_BASE_URL") {
    Some(url) => url,
    None => "https://6u4vwmix41.execute-api.us-west-2.amazonaws.com/dev",
};

/// Usuario cuyo perfil se muestra al montar la app (`USER_ID`)
pub const DEFAULT_USER_ID: &str = match option_env!("USER_ID") {
    Some(id) => id,
    None => "user001",
};

/// Idioma por defecto de la interfaz
pub const DEFAULT_LANGUAGE: &str = "ES";

/// ID del elemento raíz donde se monta la app
pub const ROOT_ELEMENT_ID: &str = "app";

pub const USERS_PATH: &str = "/usuarios";
pub const COURSES_PATH: &str = "/cursos";
pub const INFO_REQUEST_PATH: &str = "/solicitar-info-curso";
