use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing::debug;
use vitae::export::{export_file_name, export_resume};
use vitae::model::{EducationPatch, ExperiencePatch, PersonalInfo, Skill, SkillLevel, Template};
use vitae::render::render_preview;
use vitae::store::Store;

#[derive(Parser)]
#[command(
    name = "vitae",
    about = "A command-line resume builder with PDF export",
    version
)]
struct Cli {
    /// Store file holding the resume between invocations
    #[arg(long, global = true)]
    store: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Edit the personal information section
    Personal(PersonalArgs),

    /// Edit work experience entries
    #[command(subcommand)]
    Experience(ExperienceCommand),

    /// Edit education entries
    #[command(subcommand)]
    Education(EducationCommand),

    /// Edit the skills list
    #[command(subcommand)]
    Skill(SkillCommand),

    /// Select the visual template (modern, classic or minimal)
    Template {
        name: String,
    },

    /// Print a text preview of the resume
    Show {
        /// Preview with a template other than the stored selection
        #[arg(short, long)]
        template: Option<String>,
    },

    /// Export the resume as a PDF
    Export {
        /// Output path; defaults to a name derived from the applicant
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Args)]
struct PersonalArgs {
    #[arg(long)]
    full_name: Option<String>,
    #[arg(long)]
    email: Option<String>,
    #[arg(long)]
    phone: Option<String>,
    #[arg(long)]
    location: Option<String>,
    #[arg(long)]
    website: Option<String>,
    #[arg(long)]
    linkedin: Option<String>,
    #[arg(long)]
    summary: Option<String>,
}

#[derive(Subcommand)]
enum ExperienceCommand {
    /// Append a new, empty entry and print its id
    Add,
    /// Remove an entry by id
    Remove { id: String },
    /// Update fields of an entry
    Set {
        id: String,
        #[arg(long)]
        company: Option<String>,
        #[arg(long)]
        position: Option<String>,
        #[arg(long)]
        location: Option<String>,
        /// Start date as YYYY-MM
        #[arg(long)]
        start: Option<String>,
        /// End date as YYYY-MM
        #[arg(long)]
        end: Option<String>,
        /// Whether this is the current position
        #[arg(long)]
        current: Option<bool>,
    },
    /// Edit the bullet points of an entry
    #[command(subcommand)]
    Bullet(BulletCommand),
}

#[derive(Subcommand)]
enum BulletCommand {
    /// Append a bullet point
    Add { id: String, text: String },
    /// Replace a bullet point by index
    Set {
        id: String,
        index: usize,
        text: String,
    },
    /// Remove a bullet point by index (the last one cannot be removed)
    Remove { id: String, index: usize },
}

#[derive(Subcommand)]
enum EducationCommand {
    /// Append a new, empty entry and print its id
    Add,
    /// Remove an entry by id
    Remove { id: String },
    /// Update fields of an entry
    Set {
        id: String,
        #[arg(long)]
        institution: Option<String>,
        #[arg(long)]
        degree: Option<String>,
        #[arg(long)]
        field: Option<String>,
        #[arg(long)]
        location: Option<String>,
        /// Start date as YYYY-MM
        #[arg(long)]
        start: Option<String>,
        /// End date as YYYY-MM
        #[arg(long)]
        end: Option<String>,
        #[arg(long)]
        gpa: Option<String>,
    },
}

#[derive(Subcommand)]
enum SkillCommand {
    /// Add a skill
    Add {
        name: String,
        /// beginner, intermediate, advanced or expert
        #[arg(long, default_value = "intermediate")]
        level: String,
        #[arg(long, default_value = "Other")]
        category: String,
    },
    /// Remove a skill by id
    Remove { id: String },
}

fn default_store_path() -> PathBuf {
    if let Some(home) = std::env::var_os("VITAE_HOME") {
        return PathBuf::from(home).join("resume.json");
    }
    match std::env::var_os("HOME") {
        Some(home) => PathBuf::from(home).join(".vitae").join("resume.json"),
        None => PathBuf::from("resume.json"),
    }
}

fn apply_personal(info: &mut PersonalInfo, args: PersonalArgs) {
    if let Some(full_name) = args.full_name {
        info.full_name = full_name;
    }
    if let Some(email) = args.email {
        info.email = email;
    }
    if let Some(phone) = args.phone {
        info.phone = phone;
    }
    if let Some(location) = args.location {
        info.location = location;
    }
    if let Some(website) = args.website {
        info.website = (!website.is_empty()).then_some(website);
    }
    if let Some(linkedin) = args.linkedin {
        info.linkedin = (!linkedin.is_empty()).then_some(linkedin);
    }
    if let Some(summary) = args.summary {
        info.summary = summary;
    }
}

fn run(cli: Cli) -> Result<()> {
    let path = cli.store.unwrap_or_else(default_store_path);
    debug!(path = %path.display(), "using store");
    let mut store = Store::open(&path)?;

    match cli.command {
        Commands::Personal(args) => {
            apply_personal(&mut store.resume_mut().personal_info, args);
            store.save()?;
            println!("Personal information updated.");
        }

        Commands::Experience(command) => {
            match command {
                ExperienceCommand::Add => {
                    let id = store.resume_mut().add_experience();
                    println!("Added experience entry {id}");
                }
                ExperienceCommand::Remove { id } => {
                    store.resume_mut().remove_experience(&id);
                    println!("Removed experience entry {id}");
                }
                ExperienceCommand::Set {
                    id,
                    company,
                    position,
                    location,
                    start,
                    end,
                    current,
                } => {
                    let patch = ExperiencePatch {
                        company,
                        position,
                        location,
                        start_date: start,
                        end_date: end,
                        current,
                    };
                    store.resume_mut().update_experience(&id, patch)?;
                    println!("Updated experience entry {id}");
                }
                ExperienceCommand::Bullet(bullet) => match bullet {
                    BulletCommand::Add { id, text } => {
                        store.resume_mut().add_bullet(&id, text)?;
                        println!("Added bullet point.");
                    }
                    BulletCommand::Set { id, index, text } => {
                        store.resume_mut().set_bullet(&id, index, text)?;
                        println!("Updated bullet point {index}.");
                    }
                    BulletCommand::Remove { id, index } => {
                        store.resume_mut().remove_bullet(&id, index)?;
                        println!("Removed bullet point {index}.");
                    }
                },
            }
            store.save()?;
        }

        Commands::Education(command) => {
            match command {
                EducationCommand::Add => {
                    let id = store.resume_mut().add_education();
                    println!("Added education entry {id}");
                }
                EducationCommand::Remove { id } => {
                    store.resume_mut().remove_education(&id);
                    println!("Removed education entry {id}");
                }
                EducationCommand::Set {
                    id,
                    institution,
                    degree,
                    field,
                    location,
                    start,
                    end,
                    gpa,
                } => {
                    let patch = EducationPatch {
                        institution,
                        degree,
                        field,
                        location,
                        start_date: start,
                        end_date: end,
                        gpa,
                    };
                    store.resume_mut().update_education(&id, patch)?;
                    println!("Updated education entry {id}");
                }
            }
            store.save()?;
        }

        Commands::Skill(command) => {
            match command {
                SkillCommand::Add {
                    name,
                    level,
                    category,
                } => {
                    let level: SkillLevel = level.parse()?;
                    let id = store.resume_mut().add_skill(Skill::new(name, level, category));
                    println!("Added skill {id}");
                }
                SkillCommand::Remove { id } => {
                    store.resume_mut().remove_skill(&id);
                    println!("Removed skill {id}");
                }
            }
            store.save()?;
        }

        Commands::Template { name } => {
            let template: Template = name.parse()?;
            store.set_template(template);
            store.save()?;
            println!("Template set to {template}.");
        }

        Commands::Show { template } => {
            let template = match template {
                Some(name) => name.parse()?,
                None => store.template(),
            };
            if store.resume().is_empty() {
                eprintln!("(the resume is empty, try `vitae personal --full-name ...`)");
            }
            print!("{}", render_preview(store.resume(), template));
        }

        Commands::Export { output } => {
            let output = output.unwrap_or_else(|| {
                PathBuf::from(export_file_name(
                    &store.resume().personal_info.full_name,
                ))
            });
            export_resume(store.resume(), store.template(), &output)
                .context("there was an error generating the PDF, please try again")?;
            println!("Exported {}", output.display());
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    run(Cli::parse())
}
