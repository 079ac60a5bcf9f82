//! CLI administration tool for course-registry.
//!
//! Provides commands for inspecting and maintaining the course database
//! without going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Create the schema
//! cargo run --bin admin -- db migrate
//!
//! # List all courses
//! cargo run --bin admin -- course list
//!
//! # Add a course
//! cargo run --bin admin -- course add "Rust basics" 2024-02-01 2024-05-30 --lectures 12
//!
//! # Delete a course
//! cargo run --bin admin -- course delete 3
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! Same as the server: `DATABASE_URL` or `DB_PATH`, plus the `DB_*` pool settings.

use course_registry::application::services::CourseRegistry;
use course_registry::config::Config;
use course_registry::domain::entities::Course;
use course_registry::infrastructure::persistence::SqliteCourseRepository;
use course_registry::server;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use sqlx::SqlitePool;
use std::sync::Arc;

/// CLI tool for managing course-registry.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Manage courses
    Course {
        #[command(subcommand)]
        action: CourseAction,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Course management subcommands.
#[derive(Subcommand)]
enum CourseAction {
    /// List all courses
    List,

    /// Show a single course
    Show {
        /// Course id
        id: i64,
    },

    /// Add a new course
    Add {
        /// Course title
        title: String,

        /// First day, YYYY-MM-DD
        start_date: String,

        /// Last day, YYYY-MM-DD
        end_date: String,

        /// Number of lectures
        #[arg(short, long, default_value_t = 0)]
        lectures: u32,
    },

    /// Permanently delete a course
    Delete {
        /// Course id
        id: i64,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Apply schema migrations
    Migrate,

    /// Check database connection
    Check,

    /// Show database info
    Info,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = Config::from_env()?;
    config.validate()?;
    let pool = server::connect(&config).await?;

    match cli.command {
        Commands::Course { action } => handle_course_action(action, &pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    pool.close().await;

    Ok(())
}

/// Dispatches course management commands through the registry.
async fn handle_course_action(action: CourseAction, pool: &SqlitePool) -> Result<()> {
    let repository = Arc::new(SqliteCourseRepository::new(Arc::new(pool.clone())));
    let registry = CourseRegistry::new(repository);

    match action {
        CourseAction::List => list_courses(&registry).await?,
        CourseAction::Show { id } => {
            let course = registry
                .get_by_id(id)
                .await
                .map_err(|e| anyhow::anyhow!("{}", e))?;
            print_course(&course);
        }
        CourseAction::Add {
            title,
            start_date,
            end_date,
            lectures,
        } => {
            let id = registry
                .add_course(title, &start_date, &end_date, lectures)
                .await
                .map_err(|e| anyhow::anyhow!("Failed to add course: {}", e))?;

            println!(
                "{} {}",
                "✅ Course added with id".green().bold(),
                id.to_string().bright_white().bold()
            );
        }
        CourseAction::Delete { id, yes } => delete_course(&registry, id, yes).await?,
    }

    Ok(())
}

/// Lists all courses as a table.
///
/// # Output Format
///
/// ```text
/// 📋 Courses
///
///   ID    Title                          Start        End          Lectures
///   ───────────────────────────────────────────────────────────────────────
///   1     course1                        2018-09-11   2019-07-12   17
/// ```
async fn list_courses(registry: &CourseRegistry<SqliteCourseRepository>) -> Result<()> {
    println!("{}", "📋 Courses".bright_blue().bold());
    println!();

    let courses = registry
        .list_courses()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list courses: {}", e))?;

    if courses.is_empty() {
        println!("{}", "  No courses found".yellow());
        return Ok(());
    }

    println!(
        "  {:<5} {:<30} {:<12} {:<12} {}",
        "ID".bright_white().bold(),
        "Title".bright_white().bold(),
        "Start".bright_white().bold(),
        "End".bright_white().bold(),
        "Lectures".bright_white().bold()
    );
    println!("  {}", "─".repeat(71).bright_black());

    for course in &courses {
        println!(
            "  {:<5} {:<30} {:<12} {:<12} {}",
            course.id.to_string().bright_black(),
            course.title.cyan(),
            course.start_date.to_string(),
            course.end_date.to_string(),
            course.lectures
        );
    }

    println!();
    println!(
        "  Total: {}",
        courses.len().to_string().bright_white().bold()
    );
    println!();

    Ok(())
}

/// Deletes a course after showing it and asking for confirmation.
async fn delete_course(
    registry: &CourseRegistry<SqliteCourseRepository>,
    id: i64,
    skip_confirm: bool,
) -> Result<()> {
    println!("{}", "🗑  Delete Course".bright_blue().bold());
    println!();

    let course = registry
        .get_by_id(id)
        .await
        .map_err(|e| anyhow::anyhow!("{}", e))
        .context("Cannot delete course")?;

    print_course(&course);
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Delete this course permanently?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    registry
        .delete_course(id)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to delete course: {}", e))?;

    println!("{}", "✅ Course deleted".green().bold());

    Ok(())
}

fn print_course(course: &Course) {
    println!("  ID:       {}", course.id.to_string().bright_black());
    println!("  Title:    {}", course.title.cyan());
    println!("  Start:    {}", course.start_date);
    println!("  End:      {}", course.end_date);
    println!("  Lectures: {}", course.lectures);
}

/// Handles database maintenance and diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &SqlitePool) -> Result<()> {
    match action {
        DbAction::Migrate => {
            println!("{}", "🛠  Applying migrations...".bright_blue());

            server::migrate(pool).await?;

            println!("{}", "✅ Schema is up to date".green().bold());
        }
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "✅ Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "ℹ️  Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT sqlite_version()")
                .fetch_one(pool)
                .await?;

            let courses_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM courses")
                .fetch_one(pool)
                .await
                .context("Courses table missing, run `admin db migrate`")?;

            println!("  SQLite:  {}", version.bright_white());
            println!(
                "  Courses: {}",
                courses_count.to_string().bright_green().bold()
            );
            println!();
        }
    }

    Ok(())
}
