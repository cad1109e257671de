use clap::Subcommand;
use stillpoint_core::{find_guide, guides, meditation::format_time, ValidationError};

#[derive(Subcommand)]
pub enum GuidesAction {
    /// List all guides
    List {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show one guide
    Show {
        /// Guide title (case-insensitive)
        title: String,
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
}

pub fn run(action: GuidesAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        GuidesAction::List { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(guides())?);
            } else {
                for guide in guides() {
                    println!("{:<22} {}", guide.title, format_time(guide.duration_secs()));
                }
            }
        }
        GuidesAction::Show { title, json } => {
            let guide = find_guide(&title).ok_or(ValidationError::UnknownGuide(title))?;
            if json {
                println!("{}", serde_json::to_string_pretty(guide)?);
            } else {
                println!("{} ({} min)", guide.title, guide.duration_min);
                println!("{}", guide.description);
            }
        }
    }
    Ok(())
}
