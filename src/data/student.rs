use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, sqlx::FromRow, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct Student {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub school: String,
}

impl Student {
    pub fn from_form(id: i32, form: StudentForm) -> Self {
        let StudentForm {
            first_name,
            last_name,
            school,
        } = form;

        Self {
            id,
            first_name,
            last_name,
            school,
        }
    }

    /// Replaces everything but the id.
    pub fn apply(&mut self, form: StudentForm) {
        let StudentForm {
            first_name,
            last_name,
            school,
        } = form;

        self.first_name = first_name;
        self.last_name = last_name;
        self.school = school;
    }
}

/// Request body for creating or replacing a student. Any `Id` sent by the client is ignored.
#[derive(Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "PascalCase", default)]
pub struct StudentForm {
    #[serde(alias = "firstName")]
    pub first_name: String,
    #[serde(alias = "lastName")]
    pub last_name: String,
    #[serde(alias = "school")]
    pub school: String,
}

#[derive(Serialize, sqlx::FromRow, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct SchoolCount {
    pub school: String,
    pub student_count: i64,
}
