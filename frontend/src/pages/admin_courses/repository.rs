use crate::api::{ApiClient, ApiError, Course, CoursePayload, Id, Program, Unit, UnitPayload};
use std::rc::Rc;

#[derive(Clone)]
pub struct CoursesRepository {
    client: Rc<ApiClient>,
}

impl Default for CoursesRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl CoursesRepository {
    pub fn new() -> Self {
        Self {
            client: Rc::new(ApiClient::new()),
        }
    }

    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn fetch_courses(&self) -> Result<Vec<Course>, ApiError> {
        self.client.list_courses().await
    }

    pub async fn fetch_programs(&self) -> Result<Vec<Program>, ApiError> {
        self.client.list_programs().await
    }

    pub async fn save_course(
        &self,
        id: Option<Id>,
        payload: CoursePayload,
    ) -> Result<Course, ApiError> {
        match id {
            Some(id) => self.client.update_course(id, payload).await,
            None => self.client.create_course(payload).await,
        }
    }

    pub async fn delete_course(&self, id: Id) -> Result<(), ApiError> {
        self.client.delete_course(id).await
    }

    pub async fn fetch_units(&self) -> Result<Vec<Unit>, ApiError> {
        self.client.list_units().await
    }

    pub async fn create_unit(&self, course_id: Id, payload: UnitPayload) -> Result<Unit, ApiError> {
        self.client.create_unit(course_id, payload).await
    }

    pub async fn delete_unit(&self, id: Id) -> Result<(), ApiError> {
        self.client.delete_unit(id).await
    }
}
