//! The resume data model.
//!
//! A [`Resume`] is the single owned aggregate: personal info plus three
//! ordered, id-keyed entry sequences. Renderers and the export engine only
//! ever read it; all mutation funnels through the update methods here so the
//! store can be written back after every change.

use crate::error::{Result, VitaeError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Contact block shown in the document header.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalInfo {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub linkedin: Option<String>,
    pub summary: String,
}

impl PersonalInfo {
    /// Name used wherever the header needs one, with a placeholder for an
    /// empty resume.
    pub fn display_name(&self) -> &str {
        if self.full_name.is_empty() {
            "Your Name"
        } else {
            &self.full_name
        }
    }

    /// Email, phone and location, in that order, skipping empty fields.
    pub fn contact_line(&self) -> Vec<&str> {
        [&self.email, &self.phone, &self.location]
            .into_iter()
            .filter(|s| !s.is_empty())
            .map(String::as_str)
            .collect()
    }

    /// Website and LinkedIn, skipping absent or empty fields.
    pub fn web_line(&self) -> Vec<&str> {
        [&self.website, &self.linkedin]
            .into_iter()
            .filter_map(|s| s.as_deref())
            .filter(|s| !s.is_empty())
            .collect()
    }
}

/// One position held, with its bullet-point description.
///
/// The `description` sequence is never empty: entries are created with one
/// blank bullet and removal of the last bullet is rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkExperience {
    pub id: String,
    pub company: String,
    pub position: String,
    pub location: String,
    pub start_date: String,
    pub end_date: String,
    pub current: bool,
    pub description: Vec<String>,
}

impl WorkExperience {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            company: String::new(),
            position: String::new(),
            location: String::new(),
            start_date: String::new(),
            end_date: String::new(),
            current: false,
            description: vec![String::new()],
        }
    }
}

impl Default for WorkExperience {
    fn default() -> Self {
        Self::new()
    }
}

/// Partial update applied to a [`WorkExperience`] by id.
#[derive(Debug, Clone, Default)]
pub struct ExperiencePatch {
    pub company: Option<String>,
    pub position: Option<String>,
    pub location: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub current: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Education {
    pub id: String,
    pub institution: String,
    pub degree: String,
    pub field: String,
    pub location: String,
    pub start_date: String,
    pub end_date: String,
    #[serde(default)]
    pub gpa: Option<String>,
}

impl Education {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            institution: String::new(),
            degree: String::new(),
            field: String::new(),
            location: String::new(),
            start_date: String::new(),
            end_date: String::new(),
            gpa: None,
        }
    }
}

impl Default for Education {
    fn default() -> Self {
        Self::new()
    }
}

/// Partial update applied to an [`Education`] by id.
#[derive(Debug, Clone, Default)]
pub struct EducationPatch {
    pub institution: Option<String>,
    pub degree: Option<String>,
    pub field: Option<String>,
    pub location: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub gpa: Option<String>,
}

/// Proficiency scale for a skill, ordered from weakest to strongest.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
pub enum SkillLevel {
    Beginner,
    #[default]
    Intermediate,
    Advanced,
    Expert,
}

impl fmt::Display for SkillLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SkillLevel::Beginner => "Beginner",
            SkillLevel::Intermediate => "Intermediate",
            SkillLevel::Advanced => "Advanced",
            SkillLevel::Expert => "Expert",
        };
        f.write_str(name)
    }
}

impl FromStr for SkillLevel {
    type Err = VitaeError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "beginner" => Ok(SkillLevel::Beginner),
            "intermediate" => Ok(SkillLevel::Intermediate),
            "advanced" => Ok(SkillLevel::Advanced),
            "expert" => Ok(SkillLevel::Expert),
            other => Err(VitaeError::UnknownSkillLevel(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Skill {
    pub id: String,
    pub name: String,
    pub level: SkillLevel,
    pub category: String,
}

impl Skill {
    pub fn new(name: impl Into<String>, level: SkillLevel, category: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            level,
            category: category.into(),
        }
    }
}

/// The visual style applied to both the preview and the exported PDF.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Template {
    #[default]
    Modern,
    Classic,
    Minimal,
}

impl Template {
    pub const ALL: [Template; 3] = [Template::Modern, Template::Classic, Template::Minimal];
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Template::Modern => "modern",
            Template::Classic => "classic",
            Template::Minimal => "minimal",
        };
        f.write_str(name)
    }
}

impl FromStr for Template {
    type Err = VitaeError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "modern" => Ok(Template::Modern),
            "classic" => Ok(Template::Classic),
            "minimal" => Ok(Template::Minimal),
            other => Err(VitaeError::UnknownTemplate(other.to_string())),
        }
    }
}

/// The full resume document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resume {
    pub personal_info: PersonalInfo,
    pub work_experience: Vec<WorkExperience>,
    pub education: Vec<Education>,
    pub skills: Vec<Skill>,
}

impl Resume {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_personal(&mut self, info: PersonalInfo) {
        self.personal_info = info;
    }

    /// Appends a fresh, empty work experience entry and returns its id.
    pub fn add_experience(&mut self) -> String {
        let entry = WorkExperience::new();
        let id = entry.id.clone();
        self.work_experience.push(entry);
        id
    }

    pub fn remove_experience(&mut self, id: &str) {
        self.work_experience.retain(|e| e.id != id);
    }

    pub fn update_experience(&mut self, id: &str, patch: ExperiencePatch) -> Result<()> {
        let entry = self
            .work_experience
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or_else(|| VitaeError::UnknownEntry(id.to_string()))?;
        if let Some(company) = patch.company {
            entry.company = company;
        }
        if let Some(position) = patch.position {
            entry.position = position;
        }
        if let Some(location) = patch.location {
            entry.location = location;
        }
        if let Some(start_date) = patch.start_date {
            entry.start_date = start_date;
        }
        if let Some(end_date) = patch.end_date {
            entry.end_date = end_date;
        }
        if let Some(current) = patch.current {
            entry.current = current;
        }
        Ok(())
    }

    pub fn add_bullet(&mut self, id: &str, text: impl Into<String>) -> Result<()> {
        let entry = self
            .work_experience
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or_else(|| VitaeError::UnknownEntry(id.to_string()))?;
        entry.description.push(text.into());
        Ok(())
    }

    pub fn set_bullet(&mut self, id: &str, index: usize, text: impl Into<String>) -> Result<()> {
        let entry = self
            .work_experience
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or_else(|| VitaeError::UnknownEntry(id.to_string()))?;
        let bullet = entry
            .description
            .get_mut(index)
            .ok_or_else(|| VitaeError::UnknownEntry(format!("{id}#{index}")))?;
        *bullet = text.into();
        Ok(())
    }

    /// Removes one bullet point. Rejected when it is the entry's last one.
    pub fn remove_bullet(&mut self, id: &str, index: usize) -> Result<()> {
        let entry = self
            .work_experience
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or_else(|| VitaeError::UnknownEntry(id.to_string()))?;
        if entry.description.len() <= 1 {
            return Err(VitaeError::LastBullet);
        }
        if index >= entry.description.len() {
            return Err(VitaeError::UnknownEntry(format!("{id}#{index}")));
        }
        entry.description.remove(index);
        Ok(())
    }

    /// Appends a fresh, empty education entry and returns its id.
    pub fn add_education(&mut self) -> String {
        let entry = Education::new();
        let id = entry.id.clone();
        self.education.push(entry);
        id
    }

    pub fn remove_education(&mut self, id: &str) {
        self.education.retain(|e| e.id != id);
    }

    pub fn update_education(&mut self, id: &str, patch: EducationPatch) -> Result<()> {
        let entry = self
            .education
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or_else(|| VitaeError::UnknownEntry(id.to_string()))?;
        if let Some(institution) = patch.institution {
            entry.institution = institution;
        }
        if let Some(degree) = patch.degree {
            entry.degree = degree;
        }
        if let Some(field) = patch.field {
            entry.field = field;
        }
        if let Some(location) = patch.location {
            entry.location = location;
        }
        if let Some(start_date) = patch.start_date {
            entry.start_date = start_date;
        }
        if let Some(end_date) = patch.end_date {
            entry.end_date = end_date;
        }
        if let Some(gpa) = patch.gpa {
            entry.gpa = if gpa.is_empty() { None } else { Some(gpa) };
        }
        Ok(())
    }

    pub fn add_skill(&mut self, skill: Skill) -> String {
        let id = skill.id.clone();
        self.skills.push(skill);
        id
    }

    pub fn remove_skill(&mut self, id: &str) {
        self.skills.retain(|s| s.id != id);
    }

    /// True when there is nothing to put in the body of the document.
    pub fn is_empty(&self) -> bool {
        self.personal_info == PersonalInfo::default()
            && self.work_experience.is_empty()
            && self.education.is_empty()
            && self.skills.is_empty()
    }
}

/// Groups skills by category, preserving first-seen category order and
/// insertion order within each category.
pub fn group_by_category(skills: &[Skill]) -> Vec<(&str, Vec<&Skill>)> {
    let mut groups: Vec<(&str, Vec<&Skill>)> = Vec::new();
    for skill in skills {
        match groups.iter_mut().find(|(cat, _)| *cat == skill.category) {
            Some((_, members)) => members.push(skill),
            None => groups.push((skill.category.as_str(), vec![skill])),
        }
    }
    groups
}
