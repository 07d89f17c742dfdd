use clap::Subcommand;

/// Project commands.
#[derive(Clone, Debug, Subcommand)]
pub enum ProjectCommands {
    /// Create a project.
    Create {
        name: String,
        /// Free-text building permit instructions.
        #[arg(long)]
        instructions: Option<String>,
    },
    /// List your projects.
    List,
    /// Get a project by ID.
    Get { id: String },
    /// Update a project.
    Update {
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        instructions: Option<String>,
        /// Remove the building permit instructions.
        #[arg(long, conflicts_with = "instructions")]
        clear_instructions: bool,
        #[arg(long)]
        maturity_assessment: Option<bool>,
        #[arg(long)]
        questionnaire_submitted: Option<bool>,
        #[arg(long)]
        report_created: Option<bool>,
    },
    /// Delete a project and everything it owns.
    Delete { id: String },
}
