//! dispatchkit - terminal access to the bundled refactoring catalog
//!
//! A thin front end over `dispatchkit-core`: list a category, print one
//! item, or print the master document. All resolution semantics live in
//! the library.

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};

use dispatchkit_core::Catalog;

/// dispatchkit - command-dispatch refactoring content
#[derive(Parser)]
#[command(name = "dispatchkit")]
#[command(about = "Browse the bundled command-dispatch refactoring content", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the names in one content category
    List {
        #[arg(value_enum)]
        category: Category,
    },

    /// Print one item by name or unique prefix
    ///
    /// Short names resolve the way the library does: exact name first,
    /// then the category's default suffix, then unique prefix.
    Show {
        #[arg(value_enum)]
        category: Category,
        name: String,
    },

    /// Print the master skill document
    Overview,
}

#[derive(Copy, Clone, ValueEnum)]
enum Category {
    Skills,
    Rules,
    Examples,
    Templates,
    Schemas,
    Sources,
}

fn main() -> Result<()> {
    // Log to stderr so stdout stays clean for piped content
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let catalog = Catalog::bundled();

    match cli.command {
        Commands::List { category } => {
            for name in list(catalog, category) {
                println!("{}", name);
            }
        }
        Commands::Show { category, name } => {
            print!("{}", show(catalog, category, &name)?);
        }
        Commands::Overview => {
            print!("{}", catalog.load_master_doc()?);
        }
    }

    Ok(())
}

fn list(catalog: &Catalog, category: Category) -> Vec<String> {
    match category {
        Category::Skills => catalog.list_skills(),
        Category::Rules => catalog.list_rules(),
        Category::Examples => catalog.list_examples(),
        Category::Templates => catalog.list_templates(),
        Category::Schemas => catalog.list_schemas(),
        Category::Sources => catalog.list_sources(),
    }
}

fn show(catalog: &Catalog, category: Category, name: &str) -> Result<String> {
    let content = match category {
        Category::Skills => catalog.load_skill(name)?,
        Category::Rules => catalog.load_rule(name)?,
        Category::Examples => catalog.load_example(name)?,
        Category::Templates => catalog.load_template(name)?,
        Category::Schemas => catalog.load_schema(name)?,
        Category::Sources => catalog.load_source(name)?,
    };
    Ok(content)
}
