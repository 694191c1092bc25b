//! Roster CLI
//!
//! Sort and search transfer-market roster JSON files from the command line.
//! A thin driver over `tm_core`: the engine decides order, this binary only
//! moves files and prints tables.

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use tm_core::{
    ordinal_ignore_case, search_by_name, search_by_nationality, selection_sort, sort_records,
    SearchField, SortField,
};

#[derive(Parser)]
#[command(name = "roster_cli")]
#[command(about = "Sort and search transfer-market rosters", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sort a roster file by a key field
    Sort {
        /// Input roster JSON file path
        #[arg(long)]
        r#in: PathBuf,

        /// Key field: age | name | nationality | goals
        #[arg(long)]
        by: String,

        /// Output roster JSON file path (table print only when omitted)
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Binary-search a roster for a name or nationality
    Search {
        /// Input roster JSON file path
        #[arg(long)]
        r#in: PathBuf,

        /// Key field: name | nationality
        #[arg(long)]
        by: String,

        /// Target value to look up (case-insensitive)
        #[arg(long)]
        target: String,

        /// Skip the pre-sort; the input is already ordered by the key field
        #[arg(long, default_value = "false")]
        presorted: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Sort { r#in, by, out } => {
            let field = SortField::from_str(&by)
                .ok_or_else(|| anyhow!("unknown sort field: {by} (expected age | name | nationality | goals)"))?;

            println!("🔃 Sorting roster...");
            println!("   Input: {}", r#in.display());
            println!("   Field: {} ({} sort)", field.name(), field.algorithm());

            let mut records = roster_cli::load_roster(&r#in)?;
            sort_records(field, &mut records);

            print!("{}", roster_cli::format_roster_table(&records));

            if let Some(out) = out {
                roster_cli::save_roster(&out, &records)?;
                println!("✅ Wrote {} records to {}", records.len(), out.display());
            }
        }

        Commands::Search {
            r#in,
            by,
            target,
            presorted,
        } => {
            let field = SearchField::from_str(&by)
                .ok_or_else(|| anyhow!("unknown search field: {by} (expected name | nationality)"))?;

            println!("🔎 Searching roster...");
            println!("   Input:  {}", r#in.display());
            println!("   Field:  {}", field.name());
            println!("   Target: {}", target);

            let mut records = roster_cli::load_roster(&r#in)?;

            // The search probes case-insensitively, so the pre-sort must use
            // the same comparison or its precondition does not hold
            if !presorted {
                match field {
                    SearchField::Name => {
                        selection_sort(&mut records, |a, b| ordinal_ignore_case(&a.name, &b.name))
                    }
                    SearchField::Nationality => selection_sort(&mut records, |a, b| {
                        ordinal_ignore_case(&a.nationality, &b.nationality)
                    }),
                }
            }

            let result = match field {
                SearchField::Name => search_by_name(&records, &target),
                SearchField::Nationality => search_by_nationality(&records, &target),
            };

            match result {
                Some(index) => {
                    println!("✅ Found '{}' at index {}", target, index);
                    print!("{}", roster_cli::format_roster_table(&records[index..=index]));
                }
                None => println!("❌ No record with {} '{}'", field.name(), target),
            }
        }
    }

    Ok(())
}
