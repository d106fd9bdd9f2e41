use uni_registrar::app::seed_demo;
use uni_registrar::domain::metrics::Performance;
use uni_registrar::{render, Course, Grade, OutputFormat, Registrar, Reporter, Student};

fn demo_registrar() -> Registrar {
    let mut registrar = Registrar::new();
    seed_demo(&mut registrar).unwrap();
    registrar
}

#[test]
fn test_demo_text_report_layout() {
    let registrar = demo_registrar();
    let mut out = Vec::new();
    render(&registrar, OutputFormat::Text, &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();

    assert!(text.contains("=== University Report ==="));
    assert!(text.contains("CS101: Intro to Programming, Credits: 3, Lecturer: Dr. Smith"));
    assert!(text.contains("CS201: Data Structures, Credits: 4, Lecturer: TBA"));
    assert!(text.contains("Teaching: Intro to Programming (2 students)"));
    assert!(text.contains("Alice | GPA: 4.00 | Attendance: 75.0%\nPerformance: Satisfactory"));
    assert!(text.contains(
        "Bob | GPA: 4.00 | Attendance: 50.0%\nPerformance: Warning: Poor performance"
    ));

    // 區段順序：課程、講師、學生
    let courses = text.find("Courses:").unwrap();
    let lecturers = text.find("Lecturers:").unwrap();
    let students = text.find("Students:").unwrap();
    assert!(courses < lecturers && lecturers < students);
}

#[test]
fn test_demo_json_report() {
    let registrar = demo_registrar();
    let mut out = Vec::new();
    render(&registrar, OutputFormat::Json, &mut out).unwrap();

    let report: uni_registrar::UniversityReport = serde_json::from_slice(&out).unwrap();
    assert_eq!(report.courses.len(), 2);
    assert_eq!(report.courses[0].students, vec!["Alice".to_string(), "Bob".to_string()]);
    assert_eq!(report.lecturers[0].department, "CS");
    assert_eq!(report.students[1].attendance, 50.0);
    assert_eq!(report.students[1].classification, Performance::Warning);
}

#[test]
fn test_demo_csv_report() {
    let registrar = demo_registrar();
    let mut out = Vec::new();
    render(&registrar, OutputFormat::Csv, &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();

    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[1], "S001,Alice,4.0,75.0,Satisfactory");
    assert_eq!(lines[2], "S002,Bob,4.0,50.0,Warning: Poor performance");
}

#[test]
fn test_metrics_stay_in_range() {
    let mut registrar = Registrar::new();
    registrar.add_course(Course::new("CS101", "Intro to Programming", 3));
    for i in 0..4 {
        let id = format!("S{:03}", i);
        registrar.add_student(Student::new(&id, format!("Student {}", i), "s@uni.com", None));
        registrar.enroll_student("CS101", &id).unwrap();
        registrar
            .record_attendance(&id, "CS101", i % 2 == 0)
            .unwrap();
    }
    registrar.assign_grades("CS101", Grade::from("Z")).unwrap();

    for summary in Reporter::build(&registrar).students {
        assert!((0.0..=4.0).contains(&summary.gpa));
        assert!((0.0..=100.0).contains(&summary.attendance));
        assert_eq!(summary.gpa, 0.0);
    }
}

#[test]
fn test_excellent_student() {
    let mut registrar = Registrar::new();
    registrar.add_course(Course::new("CS101", "Intro to Programming", 3));
    registrar.add_student(Student::new("S001", "Alice", "alice@uni.com", None));
    registrar.enroll_student("CS101", "S001").unwrap();
    registrar.assign_grades("CS101", "A").unwrap();
    registrar
        .set_attendance("S001", "CS101", vec![true; 10])
        .unwrap();

    let report = Reporter::build(&registrar);
    assert_eq!(report.students[0].classification, Performance::Excellent);
}

#[test]
fn test_reenrolling_keeps_roster_stable() {
    let mut registrar = demo_registrar();
    registrar.enroll_student("CS101", "S001").unwrap();
    registrar.enroll_student("CS101", "S002").unwrap();

    let course = registrar.course("CS101").unwrap();
    assert_eq!(course.students(), ["S001".to_string(), "S002".to_string()]);
    assert_eq!(registrar.student("S001").unwrap().courses().len(), 1);
}
