use clap::{Parser, Subcommand};

use lastword_dict::commands;
use lastword_dict::encoder::DEFAULT_IMAGE_TAG;
use lastword_dict::pipeline::DEFAULT_OUTPUT_NAME;
use lastword_dict::trace_init;

#[derive(Parser)]
#[command(name = "dictbuild", about = "Lastword wordlist build tool")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run the full pipeline: text outputs, DAWG encoding, manifest
    Build {
        /// Directory containing words_* source files
        input_dir: String,
        /// Directory to write wordlist artifacts into
        output_dir: String,
        /// Base name of the per-list output files
        #[arg(long, default_value = DEFAULT_OUTPUT_NAME)]
        name: String,
        /// Custom transliteration table (TOML)
        #[arg(long)]
        table: Option<String>,
        /// Tag for the encoder image
        #[arg(long, default_value = DEFAULT_IMAGE_TAG)]
        image: String,
        /// Build context for the encoder image (defaults to the input dir)
        #[arg(long)]
        context: Option<String>,
    },
    /// Write plain-text outputs only, skipping encoding and manifest
    Text {
        /// Directory containing words_* source files
        input_dir: String,
        /// Directory to write wordlist artifacts into
        output_dir: String,
        /// Base name of the per-list output files
        #[arg(long, default_value = DEFAULT_OUTPUT_NAME)]
        name: String,
        /// Custom transliteration table (TOML)
        #[arg(long)]
        table: Option<String>,
    },
    /// Run the external DAWG encoder against prepared text outputs
    Encode {
        /// Directory holding the prepared wordlist subdirectories
        output_dir: String,
        /// Tag for the encoder image
        #[arg(long, default_value = DEFAULT_IMAGE_TAG)]
        image: String,
        /// Build context for the encoder image
        #[arg(long, default_value = ".")]
        context: String,
    },
    /// Select representations and write the manifest
    Manifest {
        /// Directory holding the encoded wordlist subdirectories
        output_dir: String,
        /// Base name of the per-list output files
        #[arg(long, default_value = DEFAULT_OUTPUT_NAME)]
        name: String,
        /// Custom transliteration table (TOML)
        #[arg(long)]
        table: Option<String>,
    },
    /// Transliterate a string with the forward table
    Translit {
        /// Text to transliterate
        text: String,
        /// Custom transliteration table (TOML)
        #[arg(long)]
        table: Option<String>,
    },
    /// Export the default transliteration table as TOML
    TableExport,
    /// Validate a custom transliteration table TOML file
    TableValidate {
        /// Path to the TOML file
        file: String,
    },
}

fn main() {
    trace_init::init_tracing();

    let cli = Cli::parse();

    match cli.command {
        Command::Build {
            input_dir,
            output_dir,
            name,
            table,
            image,
            context,
        } => commands::build(
            &input_dir,
            &output_dir,
            &name,
            table.as_deref(),
            &image,
            context.as_deref(),
        ),
        Command::Text {
            input_dir,
            output_dir,
            name,
            table,
        } => commands::text(&input_dir, &output_dir, &name, table.as_deref()),
        Command::Encode {
            output_dir,
            image,
            context,
        } => commands::encode(&output_dir, &image, &context),
        Command::Manifest {
            output_dir,
            name,
            table,
        } => commands::manifest_cmd(&output_dir, &name, table.as_deref()),
        Command::Translit { text, table } => commands::translit(&text, table.as_deref()),
        Command::TableExport => commands::table_export(),
        Command::TableValidate { file } => commands::table_validate(&file),
    }
}
