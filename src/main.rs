use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use gk_quiz::config::{GENERAL_KNOWLEDGE, QuizConfig};
use gk_quiz::data::{JsonFileSink, save_questions};
use gk_quiz::fetch::fetch_questions;
use gk_quiz::model::Summary;
use gk_quiz::text::TextDriver;
use gk_quiz::ui::GuiDriver;
use gk_quiz::{Driver, QuizResult, Session};

#[derive(Debug, Parser)]
#[command(name = "gk_quiz", about = "Fetch general knowledge questions and run a quiz", version)]
struct Cli {
    /// Number of questions to fetch
    #[arg(default_value_t = 10, value_parser = clap::value_parser!(u32).range(1..=50))]
    amount: u32,

    /// Auto-show answers (non-interactive, useful for testing)
    #[arg(long, conflicts_with = "gui")]
    auto: bool,

    /// Run the quiz in a desktop window
    #[arg(long)]
    gui: bool,

    /// Open Trivia DB category id
    #[arg(long, default_value_t = GENERAL_KNOWLEDGE)]
    category: u32,

    /// Directory for questions.json and results.json
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,
}

fn run(cli: Cli) -> QuizResult<Summary> {
    let config = QuizConfig {
        amount: cli.amount,
        category: cli.category,
        ..QuizConfig::default()
    }
    .with_output_dir(&cli.out_dir);

    let questions = fetch_questions(&config, &mut rand::rng())?;
    save_questions(&config.questions_path, &questions)?;
    println!(
        "Fetched {} questions and saved to {}\n",
        questions.len(),
        config.questions_path.display()
    );

    let sink = JsonFileSink::new(&config.results_path);
    let mut driver: Box<dyn Driver> = if cli.gui {
        Box::new(GuiDriver::new(sink))
    } else {
        Box::new(TextDriver::new(io::stdin().lock(), io::stdout(), sink).auto(cli.auto))
    };
    let summary = driver.run(Session::new(questions))?;
    println!("Results saved to {}", config.results_path.display());
    Ok(summary)
}

fn main() -> ExitCode {
    pretty_env_logger::init();
    let cli = Cli::parse();
    log::debug!("{cli:?}");

    match run(cli) {
        Ok(summary) => {
            log::info!("{} of {} correct", summary.correct, summary.total);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
