//! Terminal preview of the resume.
//!
//! The preview consumes the exact same [`Resume`] shape as the export
//! engine, so what is shown on screen is the content that ends up in the
//! PDF; only the dressing differs per template.

use crate::export::sections::degree_line;
use crate::export::{date_range, format_year_month};
use crate::model::{group_by_category, Resume, Template};
use std::fmt::Write;

const WIDTH: usize = 62;

/// Renders a plain-text preview in the given template's style.
pub fn render_preview(resume: &Resume, template: Template) -> String {
    let mut out = String::new();
    header(&mut out, resume, template);
    body(&mut out, resume, template);
    out
}

fn header(out: &mut String, resume: &Resume, template: Template) {
    let info = &resume.personal_info;
    let name = info.display_name();
    let contact = info.contact_line().join(" | ");
    let web = info.web_line().join(" | ");

    match template {
        Template::Modern => {
            let bar = "\u{2501}".repeat(WIDTH);
            writeln!(out, "{bar}").unwrap();
            writeln!(out, "  {name}").unwrap();
            if !contact.is_empty() {
                writeln!(out, "  {contact}").unwrap();
            }
            if !web.is_empty() {
                writeln!(out, "  {web}").unwrap();
            }
            writeln!(out, "{bar}").unwrap();
        }
        Template::Classic => {
            writeln!(out, "{:^WIDTH$}", name).unwrap();
            if !contact.is_empty() {
                writeln!(out, "{:^WIDTH$}", contact).unwrap();
            }
            if !web.is_empty() {
                writeln!(out, "{:^WIDTH$}", web).unwrap();
            }
            writeln!(out, "{}", "=".repeat(WIDTH)).unwrap();
        }
        Template::Minimal => {
            writeln!(out, "{name}").unwrap();
            if !contact.is_empty() {
                writeln!(out, "{contact}").unwrap();
            }
            if !web.is_empty() {
                writeln!(out, "{web}").unwrap();
            }
            writeln!(out).unwrap();
        }
    }
}

fn section_title(out: &mut String, title: &str, template: Template) {
    writeln!(out).unwrap();
    match template {
        Template::Minimal => writeln!(out, "{}", title.to_uppercase()).unwrap(),
        _ => {
            writeln!(out, "{}", title.to_uppercase()).unwrap();
            writeln!(out, "{}", "-".repeat(title.len())).unwrap();
        }
    }
}

fn body(out: &mut String, resume: &Resume, template: Template) {
    if !resume.personal_info.summary.is_empty() {
        section_title(out, "Professional Summary", template);
        writeln!(out, "{}", resume.personal_info.summary).unwrap();
    }

    if !resume.work_experience.is_empty() {
        section_title(out, "Work Experience", template);
        for entry in &resume.work_experience {
            let range = date_range(&entry.start_date, &entry.end_date, entry.current);
            writeln!(out, "{}  [{range}]", entry.position).unwrap();
            writeln!(out, "{} | {}", entry.company, entry.location).unwrap();
            for bullet in entry.description.iter().filter(|b| !b.trim().is_empty()) {
                writeln!(out, "  - {bullet}").unwrap();
            }
            writeln!(out).unwrap();
        }
    }

    if !resume.education.is_empty() {
        section_title(out, "Education", template);
        for entry in &resume.education {
            let range = format!(
                "{} - {}",
                format_year_month(&entry.start_date),
                format_year_month(&entry.end_date)
            );
            writeln!(
                out,
                "{}  [{range}]",
                degree_line(&entry.degree, &entry.field)
            )
            .unwrap();
            writeln!(out, "{} | {}", entry.institution, entry.location).unwrap();
            if let Some(gpa) = entry.gpa.as_deref().filter(|g| !g.is_empty()) {
                writeln!(out, "GPA: {gpa}").unwrap();
            }
            writeln!(out).unwrap();
        }
    }

    if !resume.skills.is_empty() {
        section_title(out, "Skills", template);
        for (category, members) in group_by_category(&resume.skills) {
            let names: Vec<&str> = members.iter().map(|s| s.name.as_str()).collect();
            writeln!(out, "{category}: {}", names.join(", ")).unwrap();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Skill, SkillLevel, WorkExperience};

    fn sample() -> Resume {
        let mut resume = Resume::new();
        resume.personal_info.full_name = "Jane Doe".to_string();
        resume.personal_info.email = "jane@example.com".to_string();
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
    fn test_preview_contains_content_in_every_template() {
        let resume = sample();
        for template in Template::ALL {
            let preview = render_preview(&resume, template);
            assert!(preview.contains("Jane Doe"), "{template}");
            assert!(preview.contains("Engineer"), "{template}");
            assert!(preview.contains("Jan 2020 - Present"), "{template}");
            assert!(preview.contains("Built systems"), "{template}");
        }
    }

    #[test]
    fn test_templates_differ_in_dressing() {
        let resume = sample();
        let modern = render_preview(&resume, Template::Modern);
        let classic = render_preview(&resume, Template::Classic);
        let minimal = render_preview(&resume, Template::Minimal);

        assert!(modern.contains('\u{2501}'));
        assert!(classic.contains('='));
        assert!(!minimal.contains('\u{2501}'));
        assert_ne!(modern, classic);
        assert_ne!(classic, minimal);
    }

    #[test]
    fn test_placeholder_name_for_empty_resume() {
        let preview = render_preview(&Resume::new(), Template::Minimal);
        assert!(preview.contains("Your Name"));
    }

    #[test]
    fn test_education_without_field_has_no_dangling_in() {
        let mut resume = Resume::new();
        let id = resume.add_education();
        resume
            .update_education(
                &id,
                crate::model::EducationPatch {
                    degree: Some("BSc".to_string()),
                    institution: Some("MIT".to_string()),
                    ..Default::default()
                },
            )
            .unwrap();

        let preview = render_preview(&resume, Template::Minimal);
        assert!(preview.contains("BSc  ["));
        assert!(!preview.contains(" in "));
    }

    #[test]
    fn test_skills_grouped_in_first_seen_order() {
        let mut resume = Resume::new();
        resume.add_skill(Skill::new("Rust", SkillLevel::Expert, "Programming"));
        resume.add_skill(Skill::new("Figma", SkillLevel::Advanced, "Design"));
        resume.add_skill(Skill::new("Go", SkillLevel::Intermediate, "Programming"));

        let preview = render_preview(&resume, Template::Classic);
        assert!(preview.contains("Programming: Rust, Go"));
        assert!(preview.contains("Design: Figma"));
        let programming_at = preview.find("Programming:").unwrap();
        let design_at = preview.find("Design:").unwrap();
        assert!(programming_at < design_at);
    }
}
