use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "kunai")]
#[command(about = "Inspect and evaluate iCalendar RDATE / EXDATE period lists")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Decode a period list and print it back in canonical form
    Normalize {
        /// Period list text, a `TZID=...:` prefix form, or a property line
        text: String,
    },

    /// Print a period list as a folded property line
    Line {
        text: String,

        /// Property name, `codec.property_name` from the configuration if unset
        #[arg(long)]
        name: Option<String>,
    },

    /// Print the periods a list contributes to an evaluation window
    Evaluate {
        text: String,

        /// Lower bound of the owning component (DATE or DATE-TIME)
        #[arg(long)]
        start: String,

        /// Start of the query window, `--start` if unset
        #[arg(long)]
        from: Option<String>,

        /// End of the query window
        #[arg(long)]
        end: String,

        /// TZID binding the non-UTC window bounds
        #[arg(long)]
        tzid: Option<String>,
    },
}
