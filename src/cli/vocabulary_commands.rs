// src/cli/vocabulary_commands.rs
use crate::cli::args::VocabularyAction;
use crate::cli::error::CliResult;
use crate::infrastructure::di::ServiceContainer;
use crossterm::style::Stylize;
use tracing::instrument;

fn print_terms(terms: &[String]) {
    for term in terms {
        println!("{}", term);
    }
}

#[instrument(skip(services))]
pub fn category(services: &ServiceContainer, action: VocabularyAction) -> CliResult<()> {
    let vocabulary = &services.vocabulary_service;
    match action {
        VocabularyAction::List => print_terms(&vocabulary.get_config().categories),
        VocabularyAction::Add { name } => {
            vocabulary.add_category(&name)?;
            eprintln!("Added category: {}", name.trim().green());
        }
        VocabularyAction::Remove { name } => {
            vocabulary.remove_category(&name)?;
            eprintln!("Removed category: {}", name.trim());
        }
    }
    Ok(())
}

#[instrument(skip(services))]
pub fn tag(services: &ServiceContainer, action: VocabularyAction) -> CliResult<()> {
    let vocabulary = &services.vocabulary_service;
    match action {
        VocabularyAction::List => print_terms(&vocabulary.get_config().tags),
        VocabularyAction::Add { name } => {
            vocabulary.add_tag(&name)?;
            eprintln!("Added tag: {}", name.trim().green());
        }
        VocabularyAction::Remove { name } => {
            vocabulary.remove_tag(&name)?;
            eprintln!("Removed tag: {}", name.trim());
        }
    }
    Ok(())
}
