use arbor::config::ViewMode;
use arbor::form::TreeForm;
use clap::{ArgAction, Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "arbor", bin_name = "arbor", version)]
#[command(about = "Keep a registry of planted trees", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Verbose output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List trees, optionally filtered by planter
    #[command(alias = "ls")]
    List {
        /// Only trees whose planter name contains this text
        #[arg(short, long)]
        search: Option<String>,

        /// Listing layout (defaults to the configured one)
        #[arg(long, value_enum)]
        view: Option<ViewMode>,

        /// Print the trees as JSON
        #[arg(long)]
        json: bool,
    },

    /// Search trees by planter name
    Search {
        term: String,

        /// Listing layout (defaults to the configured one)
        #[arg(long, value_enum)]
        view: Option<ViewMode>,

        /// Print the trees as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show every detail of one tree
    #[command(alias = "v")]
    View {
        id: String,

        /// Print the tree as JSON
        #[arg(long)]
        json: bool,
    },

    /// Register a new tree
    #[command(alias = "create", alias = "n")]
    Add {
        /// Identifier (a UUID is generated when omitted)
        #[arg(long)]
        id: Option<String>,

        #[command(flatten)]
        fields: TreeArgs,
    },

    /// Edit a tree; given fields replace the current values
    #[command(alias = "e")]
    Edit {
        id: String,

        /// Give the tree a new identifier
        #[arg(long)]
        new_id: Option<String>,

        /// Drop every photo before adding the --photo ones
        #[arg(long)]
        clear_photos: bool,

        #[command(flatten)]
        fields: TreeArgs,
    },

    /// Delete a tree
    #[command(alias = "rm")]
    Delete {
        id: String,

        /// Do not ask for confirmation
        #[arg(short, long)]
        yes: bool,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (seed-demo, view)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },

    /// Start an interactive session (the default with no command)
    Shell,
}

/// Tree form inputs. An empty string clears an optional field.
#[derive(Args, Debug, Default)]
pub struct TreeArgs {
    /// Scientific species name, e.g. "Quercus robur"
    #[arg(long)]
    pub species: Option<String>,

    /// Common name, e.g. "Chêne pédonculé"
    #[arg(long)]
    pub vernacular: Option<String>,

    /// Who planted it
    #[arg(long)]
    pub planter: Option<String>,

    /// Plantation date, YYYY-MM-DD
    #[arg(long)]
    pub date: Option<String>,

    /// Location label
    #[arg(long)]
    pub area: Option<String>,

    /// Height in centimetres
    #[arg(long, allow_negative_numbers = true)]
    pub height: Option<String>,

    /// Excellent, Très bon, Bon, Moyen or Faible
    #[arg(long)]
    pub health: Option<String>,

    #[arg(long, allow_negative_numbers = true)]
    pub lat: Option<String>,

    #[arg(long, allow_negative_numbers = true)]
    pub lon: Option<String>,

    #[arg(long)]
    pub notes: Option<String>,

    /// Photo reference; repeat for several, the first is the primary one
    #[arg(long = "photo")]
    pub photos: Vec<String>,
}

impl TreeArgs {
    /// Overwrites the form fields that were given on the command line.
    pub fn apply_to(self, form: &mut TreeForm) {
        let fields = [
            (self.species, &mut form.species_scientific),
            (self.vernacular, &mut form.species_vernacular),
            (self.planter, &mut form.planter_name),
            (self.date, &mut form.plantation_date),
            (self.area, &mut form.area),
            (self.height, &mut form.height_cm),
            (self.health, &mut form.health_status),
            (self.lat, &mut form.latitude),
            (self.lon, &mut form.longitude),
            (self.notes, &mut form.notes),
        ];
        for (value, slot) in fields {
            if let Some(value) = value {
                *slot = value;
            }
        }
        if !self.photos.is_empty() {
            form.photos = self.photos;
        }
    }
}
