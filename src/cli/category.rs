//! CLI commands for category management

use clap::Subcommand;

use crate::display;
use crate::error::{FinanceError, FinanceResult};
use crate::models::{CategoryId, CategoryKind};
use crate::services::FinanceService;

/// Category subcommands
#[derive(Subcommand, Debug)]
pub enum CategoryCommands {
    /// Create a new category
    Add {
        /// Category name
        name: String,
        /// Category kind: income or expense
        kind: String,
        /// Free-text description
        #[arg(short, long, default_value = "")]
        description: String,
    },
    /// List categories
    List {
        /// Only show categories of this kind
        #[arg(short, long)]
        kind: Option<String>,
    },
    /// Delete a category
    Delete {
        /// Category id
        id: CategoryId,
    },
}

fn parse_kind(s: &str) -> FinanceResult<CategoryKind> {
    CategoryKind::parse(s)
        .ok_or_else(|| FinanceError::Validation(format!("unknown category kind: {s}")))
}

/// Handle category commands
pub fn handle_category_command(
    service: &FinanceService,
    cmd: CategoryCommands,
) -> FinanceResult<()> {
    match cmd {
        CategoryCommands::Add {
            name,
            kind,
            description,
        } => {
            let kind = parse_kind(&kind)?;
            let category = service.create_category(&name, kind, &description)?;
            println!(
                "Created {} category '{}' ({})",
                category.kind,
                category.name,
                category.id.as_uuid()
            );
        }
        CategoryCommands::List { kind } => {
            let categories = match kind {
                Some(kind) => service.categories_by_kind(parse_kind(&kind)?)?,
                None => service.categories()?,
            };
            println!("{}", display::format_category_list(&categories));
        }
        CategoryCommands::Delete { id } => {
            service.delete_category(id)?;
            println!("Deleted category {}", id);
        }
    }

    Ok(())
}
