use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use crossterm::style::Stylize;
use term_quiz::{DEFAULT_EXTENSION, DEFAULT_FEEDBACK_DELAY, Outcome, Quiz, QuizConfig, Summary};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Question file, or a directory to pick question files from
    #[arg(short, long, default_value = "cards.json")]
    path: PathBuf,

    /// How long answer feedback stays on screen, in milliseconds
    #[arg(long, default_value_t = DEFAULT_FEEDBACK_DELAY.as_millis() as u64)]
    delay_ms: u64,

    /// File extension to look for when PATH is a directory
    #[arg(long, default_value = DEFAULT_EXTENSION)]
    extension: String,

    /// Write debug logs to this file
    #[arg(long)]
    log_file: Option<PathBuf>,
}

impl Args {
    fn config(&self) -> QuizConfig {
        QuizConfig {
            feedback_delay: Duration::from_millis(self.delay_ms),
            extension: self.extension.trim_start_matches('.').to_string(),
        }
    }
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    if let Err(e) = term_quiz::telemetry::init_tracing(args.log_file.as_deref()) {
        eprintln!("Failed to open log file: {}", e);
    }

    let quiz = match Quiz::from_path(&args.path, args.config()) {
        Ok(quiz) => quiz,
        Err(e) => fail(e),
    };

    match quiz.run().await {
        Ok(summary) => print_summary(&summary),
        Err(e) => fail(e),
    }
}

fn fail(err: term_quiz::QuizError) -> ! {
    tracing::error!(error = %err, "quiz aborted");
    eprintln!("{}", format!("Error: {}", err).red());
    std::process::exit(1);
}

fn print_summary(summary: &Summary) {
    match summary.outcome {
        Outcome::Completed => {
            println!("{}", "You have finished the quiz!".green().bold());
            println!(
                "{}",
                format!(
                    "{} of {} answered on the first try",
                    summary.first_try, summary.total
                )
                .dark_grey()
            );
        }
        Outcome::Quit => {
            println!(
                "{}",
                format!(
                    "Quiz stopped after {} of {} questions",
                    summary.answered, summary.total
                )
                .dark_grey()
            );
        }
    }
}
