// src/cli/view_commands.rs
use crate::cli::display::write_columns;
use crate::cli::error::{CliError, CliResult};
use crate::domain::layout::parse_layout_spec;
use crate::domain::sort::{SortDirection, SortKey};
use crate::infrastructure::di::ServiceContainer;
use tracing::instrument;

/// Header click on a column of the entry list
#[instrument(skip(services))]
pub fn sort(services: &ServiceContainer, column: &str) -> CliResult<()> {
    let key: SortKey = column
        .parse()
        .map_err(|e| CliError::InvalidInput(format!("{}", e)))?;
    let order = services.view_service.click_column(key);
    let direction = match order.direction {
        SortDirection::Ascending => "ascending",
        SortDirection::Descending => "descending",
    };
    eprintln!("Sorting by {}, {}", order.key, direction);
    Ok(())
}

#[instrument(skip(services))]
pub fn columns(services: &ServiceContainer, set: Option<&str>, reset: bool) -> CliResult<()> {
    if reset {
        services.view_service.save_columns(&[]);
        eprintln!("Column layout reset");
    } else if let Some(spec) = set {
        let layout = parse_layout_spec(spec)?;
        if layout.is_empty() {
            return Err(CliError::InvalidInput("Empty column layout".to_string()));
        }
        services.view_service.save_columns(&layout);
    }

    write_columns(&mut std::io::stderr(), &services.view_service.columns())?;
    Ok(())
}
