use serde::{Deserialize, Serialize};
use crate::models::lenient;

/// Entrada del catálogo devuelta por `GET /cursos`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    #[serde(deserialize_with = "lenient::id")]
    pub curso_id: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub titulo: String,
    #[serde(default, deserialize_with = "lenient::number")]
    pub duracion_horas: Option<f64>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub precio: Option<f64>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub descripcion: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_list_in_response_order() {
        let json = r#"[
            {"cursoId":"c2","titulo":"Rust","duracionHoras":40,"precio":99.5,"descripcion":"Sistemas"},
            {"cursoId":"c1","titulo":"SQL","duracionHoras":12,"precio":0,"descripcion":"Datos"}
        ]"#;
        let courses: Vec<Course> = serde_json::from_str(json).unwrap();
        let ids: Vec<_> = courses.iter().map(|c| c.curso_id.as_str()).collect();
        assert_eq!(ids, ["c2", "c1"]);
        assert_eq!(courses[0].duracion_horas, Some(40.0));
        assert_eq!(courses[1].precio, Some(0.0));
    }

    #[test]
    fn optional_fields_and_numeric_strings() {
        let json = r#"{"cursoId":"c3","titulo":"Go","precio":"49.90","duracionHoras":null}"#;
        let course: Course = serde_json::from_str(json).unwrap();
        assert_eq!(course.precio, Some(49.9));
        assert_eq!(course.duracion_horas, None);
        assert_eq!(course.descripcion, "");

        let garbage: Course = serde_json::from_str(r#"{"cursoId":"c4","precio":"gratis"}"#).unwrap();
        assert_eq!(garbage.precio, None);
    }

    #[test]
    fn null_text_fields_do_not_break_the_list() {
        let json = r#"[
            {"cursoId":"c1","titulo":null,"duracionHoras":10,"precio":20,"descripcion":null},
            {"cursoId":7,"titulo":"Python","descripcion":"Scripts"}
        ]"#;
        let courses: Vec<Course> = serde_json::from_str(json).unwrap();
        assert_eq!(courses.len(), 2);
        assert_eq!(courses[0].titulo, "");
        assert_eq!(courses[0].descripcion, "");
        assert_eq!(courses[1].curso_id, "7");
        assert_eq!(courses[1].titulo, "Python");
    }

    #[test]
    fn course_without_id_is_rejected() {
        assert!(serde_json::from_str::<Course>(r#"{"titulo":"Sin id"}"#).is_err());
    }
}
