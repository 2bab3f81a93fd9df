//! Portfolio Content Manager CLI Library
//!
//! This library provides the building blocks for managing the content of a
//! personal portfolio website through its REST backend. Every content area of
//! the site (educations, experiences, projects, skills, certifications,
//! awards, activities, the introduction text) is a REST collection of records
//! with the same add/edit/delete workflow; the library implements that
//! workflow once, generically, and the CLI instantiates it per collection.
//!
//! # Modules
//!
//! - `cli` - Command-line interface implementations
//! - `config` - Configuration management and environment variables
//! - `management` - In-memory collection state and the modal workflow
//! - `remote` - HTTP client for the portfolio REST API
//! - `types` - Record trait, entity records, and table rows
//! - `utils` - Tag-list helpers and display ordering
//!
//! # Example
//!
//! ```
//! use foliocli::{config, cli};
//!
//! #[tokio::main]
//! async fn main() -> foliocli::Res<()> {
//!     config::load_env().await?;
//!     // Use CLI functions...
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod management;
pub mod remote;
pub mod types;
pub mod utils;

/// A convenient Result type alias for operations that may fail.
///
/// Provides a standard error handling pattern throughout the application
/// using a boxed dynamic error trait object. This allows for flexible
/// error handling while maintaining Send + Sync bounds for async contexts.
///
/// # Type Parameters
///
/// - `T` - The success type returned on successful operations
///
/// # Example
///
/// ```
/// use foliocli::Res;
///
/// async fn fetch_data() -> Res<String> {
///     Ok("data".to_string())
/// }
/// ```
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Prints an informational message with a blue bullet point.
///
/// Creates a formatted output line with a distinctive blue "o" indicator
/// followed by the provided message. Used for general information and
/// status updates throughout the application.
///
/// # Example
///
/// ```
/// info!("Fetching projects...");
/// info!("Found {} records", count);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
///
/// Creates a formatted output line with a green "✓" indicator to signify
/// successful completion of operations, such as a committed add, edit, or
/// delete.
///
/// # Example
///
/// ```
/// success!("Project created with id {}", id);
/// ```
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Creates a formatted error output with a red "!" indicator and immediately
/// terminates the program with exit code 1. Used for unrecoverable errors
/// such as missing configuration.
///
/// # Behavior
///
/// This macro will cause the program to exit immediately after printing
/// the error message. Recoverable failures (a rejected add, a failed fetch)
/// go through `warning!` instead so the user can correct and retry.
///
/// # Example
///
/// ```
/// error!("Cannot load environment. Err: {}", e);
/// // Program exits here - code after this will not execute
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// Creates a formatted output line with a yellow "!" indicator to highlight
/// failed operations or important notices that don't require program
/// termination. A failed mutation is always surfaced through this macro;
/// the collection stays unchanged and the user may retry.
///
/// # Example
///
/// ```
/// warning!("Failed to update project: {}", e);
/// ```
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
