use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "gh-activity", version)]
#[command(about = "Show a GitHub user's recent public activity", long_about = None)]
pub struct Cli {
    /// GitHub username
    pub username: String,
}
