use colored::Colorize;
use rustyline::error::ReadlineError;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tenk_analyst::{
    api::AnalysisClient,
    clipboard::SystemClipboard,
    core::config::AnalystConfig,
    repl,
    screen::TerminalScreen,
    view::AnalysisView,
};

fn print_help() {
    println!("Enter a ticker symbol (e.g. AAPL) and press Enter to analyze it.");
    println!("  /copy   copy the last report to the clipboard");
    println!("  /help   show this help");
    println!("  quit    exit");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let running = Arc::new(AtomicBool::new(true));
    let r = running.clone();
    ctrlc::set_handler(move || {
        r.store(false, Ordering::SeqCst);
    })?;

    dotenv::dotenv().ok();
    env_logger::init();
    log::debug!("Logger initialized");

    let config = AnalystConfig::from_env()?;
    let client = AnalysisClient::new(&config)?;
    let screen = Arc::new(TerminalScreen::new());
    let mut view = AnalysisView::new(client, Arc::clone(&screen), SystemClipboard);

    println!(
        "{} {}",
        "Analysis endpoint:".green(),
        config.api_base_url.as_str().blue().bold()
    );
    print_help();

    let mut rl = repl::create_editor()?;

    while running.load(Ordering::SeqCst) {
        match rl.readline(&repl::prompt()) {
            Ok(line) => {
                let input = line.trim();

                if input.eq_ignore_ascii_case("quit") {
                    break;
                }

                match input {
                    "/copy" => view.copy_result(),
                    "/help" => print_help(),
                    _ if input.starts_with('/') => {
                        println!("Unknown command: {} (try /help)", input);
                    }
                    // Enter on the ticker line is the submit action; an
                    // empty line goes through validation like any other.
                    _ => view.submit(input).await,
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(err) => {
                eprintln!("Error: {:?}", err);
                break;
            }
        }
    }

    println!("\nGoodbye!");

    log::debug!("Saving REPL history");
    repl::save_history(&mut rl)?;

    if crossterm::terminal::is_raw_mode_enabled()? {
        crossterm::terminal::disable_raw_mode()?;
    }

    Ok(())
}
