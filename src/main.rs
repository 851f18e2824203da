// stepviz: terminal step player for algorithm visualizations

use std::io;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use stepviz::step::load::load_sequence;
use stepviz::step::player::StepPlayer;
use stepviz::ui::App;

#[derive(Parser)]
#[command(
    name = "stepviz",
    about = "Play back an algorithm visualization step file in the terminal"
)]
struct Cli {
    /// Step sequence JSON file (see demos/ for examples)
    file: PathBuf,

    /// Start auto-play immediately
    #[arg(long)]
    autoplay: bool,

    /// Auto-play interval in milliseconds
    #[arg(long, default_value_t = 1000)]
    interval: u64,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let sequence =
        load_sequence(&cli.file).with_context(|| format!("loading {}", cli.file.display()))?;

    let title = sequence.title.clone().unwrap_or_else(|| {
        cli.file
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "stepviz".to_string())
    });

    eprintln!("Loaded {} step(s) from {}", sequence.steps.len(), cli.file.display());

    let player = StepPlayer::new(sequence.steps);

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create and run app
    let mut app = App::new(
        player,
        title,
        cli.autoplay,
        Duration::from_millis(cli.interval),
    );
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}
