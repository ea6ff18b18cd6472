// API en memoria para tests: respuestas fijas y registro de llamadas

use std::cell::RefCell;
use async_trait::async_trait;
use serde_json::json;
use crate::models::{Course, InfoRequest, InfoRequestResponse, UserProfile};
use crate::services::{ApiError, CatalogApi};

pub struct FakeApi {
    pub user: Result<UserProfile, ApiError>,
    pub courses: Result<Vec<Course>, ApiError>,
    pub info: Result<InfoRequestResponse, ApiError>,
    pub calls: RefCell<Vec<String>>,
}

impl FakeApi {
    pub fn ok(user: UserProfile, courses: Vec<Course>) -> Self {
        Self {
            user: Ok(user),
            courses: Ok(courses),
            info: Ok(InfoRequestResponse {
                message: Some("Solicitud registrada".to_string()),
            }),
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }
}

#[async_trait(?Send)]
impl CatalogApi for FakeApi {
    async fn get_user(&self, user_id: &str) -> Result<UserProfile, ApiError> {
        self.calls.borrow_mut().push(format!("GET /usuarios/{}", user_id));
        self.user.clone()
    }

    async fn list_courses(&self) -> Result<Vec<Course>, ApiError> {
        self.calls.borrow_mut().push("GET /cursos".to_string());
        self.courses.clone()
    }

    async fn request_course_info(
        &self,
        request: &InfoRequest,
    ) -> Result<InfoRequestResponse, ApiError> {
        self.calls
            .borrow_mut()
            .push(format!("POST {} {}", request.curso_id, request.email));
        self.info.clone()
    }
}

pub fn user(id: &str) -> UserProfile {
    UserProfile::from_value(json!({
        "usuarioId": id,
        "nombre": "Ana Pérez",
        "email": "ana@example.com",
        "fechaRegistro": "2024-03-15",
    }))
    .expect("perfil de prueba válido")
}

pub fn course(id: &str, title: &str) -> Course {
    Course {
        curso_id: id.to_string(),
        titulo: title.to_string(),
        duracion_horas: Some(20.0),
        precio: Some(49.9),
        descripcion: format!("Curso de {}", title),
    }
}
