use crate::api::{
    AddProgramCourse, ApiClient, ApiError, Course, Id, Program, ProgramCourse, Trimester,
};
use std::rc::Rc;

#[derive(Clone)]
pub struct ProgramCoursesRepository {
    client: Rc<ApiClient>,
}

impl Default for ProgramCoursesRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgramCoursesRepository {
    pub fn new() -> Self {
        Self {
            client: Rc::new(ApiClient::new()),
        }
    }

    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn fetch_trimesters(&self) -> Result<Vec<Trimester>, ApiError> {
        self.client.list_trimesters().await
    }

    pub async fn fetch_programs(&self) -> Result<Vec<Program>, ApiError> {
        self.client.list_programs().await
    }

    pub async fn fetch_courses(&self) -> Result<Vec<Course>, ApiError> {
        self.client.list_courses().await
    }

    pub async fn fetch_offerings(&self, trimester_id: Id) -> Result<Vec<ProgramCourse>, ApiError> {
        self.client
            .list_program_courses_by_trimester(trimester_id)
            .await
    }

    pub async fn add_offering(&self, request: AddProgramCourse) -> Result<ProgramCourse, ApiError> {
        self.client.add_course_to_program(request).await
    }

    pub async fn deactivate_offering(&self, id: Id) -> Result<(), ApiError> {
        self.client.deactivate_program_course(id).await
    }

    pub async fn delete_offering(&self, id: Id) -> Result<(), ApiError> {
        self.client.delete_program_course(id).await
    }
}
