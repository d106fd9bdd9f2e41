use crate::core::registrar::Registrar;
use crate::domain::course::Course;
use crate::domain::lecturer::Lecturer;
use crate::domain::student::Student;
use crate::utils::error::Result;

/// Wires the sample term into `registrar`: two courses, one lecturer teaching
/// CS101, Alice and Bob enrolled in CS101 with an "A" each, and one
/// attendance sheet per student.
pub fn seed_demo(registrar: &mut Registrar) -> Result<()> {
    registrar.add_course(Course::new("CS101", "Intro to Programming", 3));
    registrar.add_course(Course::new("CS201", "Data Structures", 4));

    registrar.add_lecturer(Lecturer::new("L001", "Dr. Smith", "smith@uni.com", "CS"));
    registrar.assign_course("L001", "CS101")?;

    registrar.add_student(Student::new("S001", "Alice", "alice@uni.com", None));
    registrar.add_student(Student::new("S002", "Bob", "bob@uni.com", None));

    registrar.enroll_student("CS101", "S001")?;
    registrar.enroll_student("CS101", "S002")?;

    registrar.assign_grades("CS101", "A")?;

    registrar.set_attendance("S001", "CS101", vec![true, true, false, true])?;
    registrar.set_attendance("S002", "CS101", vec![true, false, true, false])?;

    Ok(())
}
