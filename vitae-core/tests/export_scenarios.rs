//! End-to-end export scenarios, asserted over the generated PDF bytes.
//! Content streams are uncompressed by default, so drawn strings and
//! operators are directly visible in the output.

#![cfg(not(feature = "compression"))]

use vitae::export::{export_file_name, export_resume, render_document};
use vitae::model::{EducationPatch, Resume, Skill, SkillLevel, Template, WorkExperience};

fn rendered(resume: &Resume, template: Template) -> String {
    let bytes = render_document(resume, template).to_bytes().unwrap();
    String::from_utf8_lossy(&bytes).to_string()
}

/// The original theme blue, as an RGB fill operator.
const BAND_FILL: &str = "0.145 0.388 0.922 rg";

fn jane_doe() -> Resume {
    let mut resume = Resume::new();
    resume.personal_info.full_name = "Jane Doe".to_string();
    let mut exp = WorkExperience::new();
    exp.position = "Engineer".to_string();
    exp.company = "Acme".to_string();
    exp.location = "NYC".to_string();
    exp.start_date = "2020-01".to_string();
    exp.current = true;
    exp.description = vec!["Built systems".to_string()];
    resume.work_experience.push(exp);
    resume
}

#[test]
fn scenario_a_modern_template() {
    let resume = jane_doe();
    assert_eq!(
        export_file_name(&resume.personal_info.full_name),
        "Jane_Doe_Resume.pdf"
    );

    let pdf = rendered(&resume, Template::Modern);

    // Colored header band under the name.
    assert!(pdf.contains(BAND_FILL));
    assert!(pdf.contains("(Jane Doe) Tj"));

    // Position in bold: the draw uses the bold font resource.
    let at = pdf.find("(Engineer) Tj").expect("position not drawn");
    let block = &pdf[at.saturating_sub(80)..at];
    assert!(block.contains("/F2 12"), "expected bold 12pt, got: {block}");

    assert!(pdf.contains("(Jan 2020 - Present) Tj"));
    assert!(pdf.contains("(Built systems) Tj"));
}

#[test]
fn scenario_b_unnamed_resume() {
    let resume = Resume::new();
    assert_eq!(
        export_file_name(&resume.personal_info.full_name),
        "Resume.pdf"
    );

    let pdf = rendered(&resume, Template::Modern);
    assert!(pdf.contains("(Your Name) Tj"));
}

#[test]
fn scenario_c_classic_skills_grouping() {
    let mut resume = Resume::new();
    resume.personal_info.full_name = "Jane Doe".to_string();
    for (name, category) in [
        ("Rust", "Programming"),
        ("Python", "Programming"),
        ("Go", "Programming"),
        ("Figma", "Design"),
        ("Sketch", "Design"),
        ("Blender", "Design"),
    ] {
        resume.add_skill(Skill::new(name, SkillLevel::Advanced, category));
    }

    let pdf = rendered(&resume, Template::Classic);

    // Two category blocks, comma-joined names in insertion order.
    assert!(pdf.contains("(Programming:) Tj"));
    assert!(pdf.contains("(Design:) Tj"));
    assert!(pdf.contains("(Rust, Python, Go) Tj"));
    assert!(pdf.contains("(Figma, Sketch, Blender) Tj"));

    // First-seen category order.
    let programming_at = pdf.find("(Programming:) Tj").unwrap();
    let design_at = pdf.find("(Design:) Tj").unwrap();
    assert!(programming_at < design_at);

    // Classic header has no colored band.
    assert!(!pdf.contains(BAND_FILL));
}

#[test]
fn empty_collections_render_header_and_summary_only() {
    let mut resume = Resume::new();
    resume.personal_info.full_name = "Jane Doe".to_string();
    resume.personal_info.summary = "A short professional summary.".to_string();

    let pdf = rendered(&resume, Template::Classic);

    assert!(pdf.contains("(PROFESSIONAL SUMMARY) Tj"));
    assert!(!pdf.contains("(WORK EXPERIENCE) Tj"));
    assert!(!pdf.contains("(EDUCATION) Tj"));
    assert!(!pdf.contains("(SKILLS) Tj"));
}

#[test]
fn current_position_always_renders_present() {
    let mut resume = jane_doe();
    // A stored end date must be ignored while current is set.
    resume.work_experience[0].end_date = "2024-09".to_string();

    let pdf = rendered(&resume, Template::Minimal);
    assert!(pdf.contains("(Jan 2020 - Present) Tj"));
    assert!(!pdf.contains("Sep 2024"));
}

#[test]
fn section_titles_appear_in_fixed_order() {
    let mut resume = jane_doe();
    resume.personal_info.summary = "Summary.".to_string();
    resume.add_education();
    resume.add_skill(Skill::new("Rust", SkillLevel::Expert, "Programming"));

    let pdf = rendered(&resume, Template::Classic);
    let summary_at = pdf.find("(PROFESSIONAL SUMMARY) Tj").unwrap();
    let work_at = pdf.find("(WORK EXPERIENCE) Tj").unwrap();
    let education_at = pdf.find("(EDUCATION) Tj").unwrap();
    let skills_at = pdf.find("(SKILLS) Tj").unwrap();

    assert!(summary_at < work_at);
    assert!(work_at < education_at);
    assert!(education_at < skills_at);
}

#[test]
fn long_resume_spans_multiple_pages() {
    let mut resume = jane_doe();
    for i in 0..20 {
        let mut exp = WorkExperience::new();
        exp.position = format!("Position {i}");
        exp.company = "Acme".to_string();
        exp.location = "NYC".to_string();
        exp.start_date = "2010-01".to_string();
        exp.end_date = "2012-06".to_string();
        exp.description = vec![
            "Scoped, designed and delivered a steady stream of projects.".to_string(),
        ];
        resume.work_experience.push(exp);
    }

    let document = render_document(&resume, Template::Classic);
    assert!(document.page_count() >= 2);

    let pdf = String::from_utf8_lossy(&document.to_bytes().unwrap()).to_string();
    assert!(pdf.contains(&format!("/Count {}", document.page_count())));
    // Every entry made it into the output, none truncated by pagination.
    for i in 0..20 {
        assert!(pdf.contains(&format!("(Position {i}) Tj")));
    }
}

#[test]
fn gpa_line_is_optional() {
    let mut resume = jane_doe();
    let id = resume.add_education();
    resume
        .update_education(
            &id,
            EducationPatch {
                institution: Some("MIT".to_string()),
                degree: Some("BSc".to_string()),
                field: Some("CS".to_string()),
                ..Default::default()
            },
        )
        .unwrap();

    let without = rendered(&resume, Template::Classic);
    assert!(!without.contains("(GPA:"));

    resume
        .update_education(
            &id,
            EducationPatch {
                gpa: Some("3.9".to_string()),
                ..Default::default()
            },
        )
        .unwrap();

    let with = rendered(&resume, Template::Classic);
    assert!(with.contains("(GPA: 3.9) Tj"));
}

#[test]
fn export_writes_a_parseable_file() {
    let dir = tempfile::TempDir::new().unwrap();
    let resume = jane_doe();
    let path = dir
        .path()
        .join(export_file_name(&resume.personal_info.full_name));

    export_resume(&resume, Template::Modern, &path).unwrap();

    let bytes = std::fs::read(&path).unwrap();
    assert!(bytes.starts_with(b"%PDF-1.7\n"));
    assert!(bytes.ends_with(b"%%EOF\n"));
}

#[test]
fn blank_bullets_are_skipped() {
    let mut resume = jane_doe();
    resume.work_experience[0]
        .description
        .push("   ".to_string());
    resume.work_experience[0]
        .description
        .push("Second point".to_string());

    let pdf = rendered(&resume, Template::Minimal);
    assert!(pdf.contains("(Built systems) Tj"));
    assert!(pdf.contains("(Second point) Tj"));
    assert!(!pdf.contains("(   ) Tj"));
}
