// ============================================================================
// MÓDULO DE INTERNACIONALIZACIÓN
// ============================================================================

use std::collections::HashMap;

/// Obtener diccionario de traducciones para un idioma
fn get_translations(lang: &str) -> HashMap<&'static str, &'static str> {
    let mut translations = HashMap::new();

    match lang.to_uppercase().as_str() {
        "EN" => {
            // Header
            translations.insert("app_title", "Course enrollment app");
            translations.insert("user_details", "User details (ID: {}):");
            translations.insert("loading_user", "Loading user data...");
            translations.insert("user_data_received", "User data received:");
            translations.insert("user_name", "Name");
            translations.insert("user_email", "Email");
            translations.insert("user_registered", "Registered");

            // Courses
            translations.insert("available_courses", "Available courses:");
            translations.insert("loading_courses", "Loading courses...");
            translations.insert("no_courses", "No courses were found.");
            translations.insert("course_id", "ID:");
            translations.insert("course_duration", "Duration:");
            translations.insert("course_price", "Price:");
            translations.insert("hours", "hours");
            translations.insert("request_info", "Request information");

            // Email form
            translations.insert("email_label", "Your email");
            translations.insert("email_placeholder", "name@example.com");

            // Alerts
            translations.insert("email_required", "Please enter your email to request information.");
            translations.insert("request_sent", "Request sent successfully.");
            translations.insert("request_failed", "Could not send the request:");

            // Misc
            translations.insert("error_prefix", "Error:");
            translations.insert("not_available", "N/A");
            translations.insert("footer", "Your app is connecting to the AWS microservices!");
        }
        _ => {
            // Header
            translations.insert("app_title", "Aplicación de inscripción de cursos");
            translations.insert("user_details", "Detalles del usuario (ID: {}):");
            translations.insert("loading_user", "Cargando datos de usuario...");
            translations.insert("user_data_received", "Datos de usuario recibidos:");
            translations.insert("user_name", "Nombre");
            translations.insert("user_email", "Email");
            translations.insert("user_registered", "Registro");

            // Courses
            translations.insert("available_courses", "Cursos disponibles:");
            translations.insert("loading_courses", "Cargando cursos...");
            translations.insert("no_courses", "No se encontraron cursos.");
            translations.insert("course_id", "ID:");
            translations.insert("course_duration", "Duración:");
            translations.insert("course_price", "Precio:");
            translations.insert("hours", "horas");
            translations.insert("request_info", "Solicitar Información");

            // Email form
            translations.insert("email_label", "Tu email");
            translations.insert("email_placeholder", "nombre@ejemplo.com");

            // Alerts
            translations.insert("email_required", "Por favor, introduce tu email para solicitar información.");
            translations.insert("request_sent", "Solicitud enviada correctamente.");
            translations.insert("request_failed", "No se pudo enviar la solicitud:");

            // Misc
            translations.insert("error_prefix", "Error:");
            translations.insert("not_available", "N/A");
            translations.insert("footer", "¡Tu app se está conectando a los microservicios de AWS!");
        }
    }

    translations
}

/// Función de traducción
///
/// Devuelve la clave tal cual si no hay traducción.
pub fn t(key: &str, lang: &str) -> String {
    get_translations(lang)
        .get(key)
        .map(|s| s.to_string())
        .unwrap_or_else(|| key.to_string())
}

/// Traducción con sustitución posicional de `{}`
pub fn t_with(key: &str, lang: &str, args: &[&str]) -> String {
    args.iter()
        .fold(t(key, lang), |text, arg| text.replacen("{}", arg, 1))
}
