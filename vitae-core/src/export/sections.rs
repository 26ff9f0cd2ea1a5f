//! The document sections, drawn in fixed order: header, summary, work
//! experience, education, skills. Each body section is emitted only when its
//! underlying data is non-empty and starts with a page-break check sized by
//! a fixed per-block estimate.

use crate::export::date::date_range;
use crate::export::layout::{Align, Composer, TextOptions, CONTENT_WIDTH, MARGIN, PAGE_WIDTH};
use crate::model::{group_by_category, Resume, Template};
use crate::pdf::Color;

/// Band color of the Modern header, the original theme blue.
const MODERN_BLUE: Color = Color::Rgb(37.0 / 255.0, 99.0 / 255.0, 235.0 / 255.0);

/// Height of the Modern header band, millimetres.
const BAND_HEIGHT: f64 = 60.0;
/// Cursor position below the Modern band.
const BELOW_BAND: f64 = 70.0;

const SEPARATOR: &str = " \u{2022} ";

pub fn header(composer: &mut Composer, resume: &Resume, template: Template) {
    let info = &resume.personal_info;
    let contact = info.contact_line().join(SEPARATOR);
    let web = info.web_line().join(SEPARATOR);

    match template {
        Template::Modern => {
            composer.band(BAND_HEIGHT, MODERN_BLUE);
            composer.set_text_color(Color::white());
            composer.set_cursor(25.0);
            composer.text(info.display_name(), MARGIN, TextOptions::size(24.0).bold());
            if !contact.is_empty() {
                composer.advance(5.0);
                composer.text(&contact, MARGIN, TextOptions::size(10.0));
            }
            if !web.is_empty() {
                composer.advance(5.0);
                composer.text(&web, MARGIN, TextOptions::size(10.0));
            }
            composer.set_cursor(BELOW_BAND);
            composer.set_text_color(Color::black());
        }
        Template::Classic | Template::Minimal => {
            composer.set_text_color(Color::black());
            composer.set_cursor(25.0);
            composer.text(
                info.display_name(),
                MARGIN,
                TextOptions::size(20.0).bold().align(Align::Center),
            );
            if !contact.is_empty() {
                composer.advance(5.0);
                composer.text(&contact, MARGIN, TextOptions::size(10.0).align(Align::Center));
            }
            if !web.is_empty() {
                composer.advance(5.0);
                composer.text(&web, MARGIN, TextOptions::size(10.0).align(Align::Center));
            }
            composer.advance(10.0);
        }
    }
}

pub fn summary(composer: &mut Composer, resume: &Resume) {
    let text = &resume.personal_info.summary;
    if text.is_empty() {
        return;
    }
    composer.ensure_space(30.0);
    composer.section_title("Professional Summary");
    composer.wrapped_text(text, MARGIN, CONTENT_WIDTH, 10.0);
    composer.advance(10.0);
}

pub fn work_experience(composer: &mut Composer, resume: &Resume) {
    if resume.work_experience.is_empty() {
        return;
    }
    composer.ensure_space(40.0);
    composer.section_title("Work Experience");

    for entry in &resume.work_experience {
        composer.ensure_space(35.0);

        composer.text_at(
            &entry.position,
            MARGIN,
            composer.cursor(),
            TextOptions::size(12.0).bold(),
        );
        composer.advance(6.0);

        let where_line = format!("{}{SEPARATOR}{}", entry.company, entry.location);
        composer.text_at(&where_line, MARGIN, composer.cursor(), TextOptions::size(11.0));
        let range = date_range(&entry.start_date, &entry.end_date, entry.current);
        composer.text_at(
            &range,
            PAGE_WIDTH - MARGIN,
            composer.cursor(),
            TextOptions::size(11.0).align(Align::Right),
        );
        composer.advance(8.0);

        for bullet in entry.description.iter().filter(|b| !b.trim().is_empty()) {
            composer.text_at("\u{2022}", MARGIN, composer.cursor(), TextOptions::size(10.0));
            composer.wrapped_text(bullet, MARGIN + 5.0, CONTENT_WIDTH - 5.0, 10.0);
            composer.advance(2.0);
        }
        composer.advance(5.0);
    }
}

pub fn education(composer: &mut Composer, resume: &Resume) {
    if resume.education.is_empty() {
        return;
    }
    composer.ensure_space(30.0);
    composer.section_title("Education");

    for entry in &resume.education {
        composer.ensure_space(20.0);

        composer.text_at(
            &degree_line(&entry.degree, &entry.field),
            MARGIN,
            composer.cursor(),
            TextOptions::size(12.0).bold(),
        );
        composer.advance(6.0);

        let where_line = format!("{}{SEPARATOR}{}", entry.institution, entry.location);
        composer.text_at(&where_line, MARGIN, composer.cursor(), TextOptions::size(11.0));
        let range = date_range(&entry.start_date, &entry.end_date, false);
        composer.text_at(
            &range,
            PAGE_WIDTH - MARGIN,
            composer.cursor(),
            TextOptions::size(11.0).align(Align::Right),
        );
        composer.advance(6.0);

        if let Some(gpa) = entry.gpa.as_deref().filter(|g| !g.is_empty()) {
            composer.text_at(
                &format!("GPA: {gpa}"),
                MARGIN,
                composer.cursor(),
                TextOptions::size(10.0),
            );
            composer.advance(6.0);
        }
        composer.advance(5.0);
    }
}

pub fn skills(composer: &mut Composer, resume: &Resume) {
    if resume.skills.is_empty() {
        return;
    }
    composer.ensure_space(30.0);
    composer.section_title("Skills");

    for (category, members) in group_by_category(&resume.skills) {
        composer.ensure_space(15.0);

        composer.text_at(
            &format!("{category}:"),
            MARGIN,
            composer.cursor(),
            TextOptions::size(11.0).bold(),
        );
        composer.advance(6.0);

        let names: Vec<&str> = members.iter().map(|s| s.name.as_str()).collect();
        composer.wrapped_text(&names.join(", "), MARGIN, CONTENT_WIDTH, 10.0);
        composer.advance(8.0);
    }
}

pub(crate) fn degree_line(degree: &str, field: &str) -> String {
    match (degree.is_empty(), field.is_empty()) {
        (false, false) => format!("{degree} in {field}"),
        (false, true) => degree.to_string(),
        (true, _) => field.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Skill, SkillLevel, WorkExperience};

    fn resume_with_summary(summary: &str) -> Resume {
        let mut resume = Resume::new();
        resume.personal_info.summary = summary.to_string();
        resume
    }

    #[test]
    fn test_empty_sections_draw_nothing() {
        let resume = Resume::new();
        let mut composer = Composer::new();
        let start = composer.cursor();

        summary(&mut composer, &resume);
        work_experience(&mut composer, &resume);
        education(&mut composer, &resume);
        skills(&mut composer, &resume);

        assert_eq!(composer.cursor(), start);
        assert_eq!(composer.completed_pages(), 0);
    }

    #[test]
    fn test_summary_advances_cursor() {
        let resume = resume_with_summary("Seasoned engineer.");
        let mut composer = Composer::new();
        summary(&mut composer, &resume);

        // title offset + one wrapped line + trailing gap
        assert_eq!(composer.cursor(), MARGIN + 10.0 + 5.0 + 10.0);
    }

    #[test]
    fn test_modern_header_resets_below_band() {
        let mut resume = Resume::new();
        resume.personal_info.full_name = "Jane Doe".to_string();
        let mut composer = Composer::new();
        header(&mut composer, &resume, Template::Modern);

        assert_eq!(composer.cursor(), BELOW_BAND);
    }

    #[test]
    fn test_classic_header_cursor_without_contact_lines() {
        let mut resume = Resume::new();
        resume.personal_info.full_name = "Jane Doe".to_string();
        let mut composer = Composer::new();
        header(&mut composer, &resume, Template::Classic);

        // name line (20pt -> +10) from 25, then the fixed +10 gap
        assert_eq!(composer.cursor(), 45.0);
    }

    #[test]
    fn test_long_experience_list_breaks_pages() {
        let mut resume = Resume::new();
        for i in 0..30 {
            let mut entry = WorkExperience::new();
            entry.position = format!("Role {i}");
            entry.company = "Acme".to_string();
            entry.location = "NYC".to_string();
            entry.description = vec!["Did things worth mentioning.".to_string()];
            resume.work_experience.push(entry);
        }

        let mut composer = Composer::new();
        composer.set_cursor(BELOW_BAND);
        work_experience(&mut composer, &resume);
        assert!(composer.completed_pages() >= 1);
    }

    #[test]
    fn test_degree_line_variants() {
        assert_eq!(degree_line("BS", "CS"), "BS in CS");
        assert_eq!(degree_line("BS", ""), "BS");
        assert_eq!(degree_line("", "CS"), "CS");
    }

    #[test]
    fn test_skills_groups_advance_in_first_seen_order() {
        let mut resume = Resume::new();
        resume.add_skill(Skill::new("Rust", SkillLevel::Expert, "Programming"));
        resume.add_skill(Skill::new("Figma", SkillLevel::Advanced, "Design"));
        resume.add_skill(Skill::new("Go", SkillLevel::Intermediate, "Programming"));

        let mut composer = Composer::new();
        skills(&mut composer, &resume);

        // title offset + two groups of (6 + one line 5 + 8)
        assert_eq!(composer.cursor(), MARGIN + 10.0 + 2.0 * (6.0 + 5.0 + 8.0));
    }
}
