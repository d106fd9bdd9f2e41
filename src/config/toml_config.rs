use crate::core::registrar::Registrar;
use crate::domain::course::Course;
use crate::domain::lecturer::Lecturer;
use crate::domain::student::Student;
use crate::utils::error::{RegistrarError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// A registration scenario: catalog, people, enrollments, grades and
/// attendance, applied in that order to a fresh [`Registrar`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScenarioConfig {
    pub scenario: Option<ScenarioInfo>,
    #[serde(default)]
    pub courses: Vec<CourseEntry>,
    #[serde(default)]
    pub lecturers: Vec<LecturerEntry>,
    #[serde(default)]
    pub students: Vec<StudentEntry>,
    #[serde(default)]
    pub grades: Vec<GradeEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioInfo {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseEntry {
    pub code: String,
    pub title: String,
    pub credit_hours: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LecturerEntry {
    pub id: String,
    pub name: String,
    pub email: String,
    pub department: String,
    #[serde(default)]
    pub courses: Vec<String>, // 指派課程代碼
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudentEntry {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    #[serde(default)]
    pub courses: Vec<String>, // 選修課程代碼
    #[serde(default)]
    pub attendance: BTreeMap<String, Vec<bool>>,
}

/// Bulk grade for everyone enrolled in `course`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GradeEntry {
    pub course: String,
    pub grade: String,
}

impl ScenarioConfig {
    /// 從 TOML 檔案載入情境
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(RegistrarError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析情境
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| RegistrarError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${UNI_DOMAIN})，未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| RegistrarError::ConfigValidationError {
            field: "env_substitution".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn name(&self) -> &str {
        self.scenario
            .as_ref()
            .map(|s| s.name.as_str())
            .unwrap_or("unnamed")
    }

    /// 驗證情境內容；比資料模型本身嚴格，只在輸入邊界檢查
    pub fn validate_config(&self) -> Result<()> {
        if let Some(info) = &self.scenario {
            if info.name.trim().is_empty() {
                return Err(RegistrarError::MissingConfigError {
                    field: "scenario.name".to_string(),
                });
            }
        }

        let known: Vec<&str> = self.courses.iter().map(|c| c.code.as_str()).collect();

        for course in &self.courses {
            validation::validate_non_empty_string("courses.code", &course.code)?;
            validation::validate_non_empty_string("courses.title", &course.title)?;
            validation::validate_positive_number("courses.credit_hours", course.credit_hours, 1)?;
        }

        for lecturer in &self.lecturers {
            validation::validate_non_empty_string("lecturers.id", &lecturer.id)?;
            validation::validate_non_empty_string("lecturers.name", &lecturer.name)?;
            validation::validate_email("lecturers.email", &lecturer.email)?;
            for code in &lecturer.courses {
                validation::validate_known_code("lecturers.courses", code, &known)?;
            }
        }

        for student in &self.students {
            validation::validate_non_empty_string("students.id", &student.id)?;
            validation::validate_non_empty_string("students.name", &student.name)?;
            validation::validate_email("students.email", &student.email)?;
            for code in student.courses.iter().chain(student.attendance.keys()) {
                validation::validate_known_code("students.courses", code, &known)?;
            }
        }

        for grade in &self.grades {
            validation::validate_known_code("grades.course", &grade.course, &known)?;
            validation::validate_non_empty_string("grades.grade", &grade.grade)?;
        }

        Ok(())
    }

    /// Loads the scenario into `registrar`: catalog, staff, students, course
    /// assignments, enrollments, grades, then attendance.
    pub fn apply(&self, registrar: &mut Registrar) -> Result<()> {
        tracing::info!("Applying scenario '{}'", self.name());

        for course in &self.courses {
            registrar.add_course(Course::new(&course.code, &course.title, course.credit_hours));
        }
        for lecturer in &self.lecturers {
            registrar.add_lecturer(Lecturer::new(
                &lecturer.id,
                &lecturer.name,
                &lecturer.email,
                &lecturer.department,
            ));
        }
        for student in &self.students {
            registrar.add_student(Student::new(
                &student.id,
                &student.name,
                &student.email,
                student.phone.clone(),
            ));
        }

        for lecturer in &self.lecturers {
            for code in &lecturer.courses {
                registrar.assign_course(&lecturer.id, code)?;
            }
        }
        for student in &self.students {
            for code in &student.courses {
                registrar.enroll_student(code, &student.id)?;
            }
        }

        for grade in &self.grades {
            let written = registrar.assign_grades(&grade.course, grade.grade.as_str())?;
            tracing::debug!(
                "Grade {} written for {} students in {}",
                grade.grade,
                written,
                grade.course
            );
        }

        for student in &self.students {
            for (code, marks) in &student.attendance {
                registrar.set_attendance(&student.id, code, marks.clone())?;
            }
        }

        Ok(())
    }
}

impl Validate for ScenarioConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
