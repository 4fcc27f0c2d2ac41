use agriclimate_assistant::assistant::{AnalysisResult, AnswerData, DataAssistant};
use agriclimate_assistant::catalog::Catalog;
use agriclimate_assistant::history::{ConversationLog, Role};
use agriclimate_assistant::loader;
use anyhow::Result;
use clap::Parser;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(name = "agriclimate-assistant")]
#[command(about = "Answers questions about district rainfall and crop production statistics")]
struct Args {
    /// Question to answer; starts an interactive session when omitted
    question: Option<String>,

    /// Path to the district rainfall CSV
    #[arg(long, default_value = "data/rainfall_data.csv")]
    rainfall_csv: PathBuf,

    /// Path to the crop production CSV
    #[arg(long, default_value = "data/crop_production.csv")]
    crop_csv: PathBuf,

    /// Path to the dataset descriptor JSON
    #[arg(long, default_value = "data/dataset.json")]
    catalog: PathBuf,

    /// Print the retrieved data slice along with each answer
    #[arg(long)]
    show_data: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let args = Args::parse();

    // The analysis core is only ever constructed over successfully loaded,
    // schema-validated tables; a load failure halts here.
    let datasets = loader::load_datasets(&args.rainfall_csv, &args.crop_csv)?;
    let catalog = Catalog::load(&args.catalog);
    let assistant = DataAssistant::new(datasets, catalog);

    info!("assistant ready");

    match args.question {
        Some(question) => {
            let result = assistant.answer(&question);
            print_result(&result, args.show_data);
        }
        None => repl(&assistant, args.show_data)?,
    }

    Ok(())
}

fn repl(assistant: &DataAssistant, show_data: bool) -> Result<()> {
    let mut log = ConversationLog::new();
    let catalog = assistant.catalog();
    println!(
        "AgriClimateBot ready. Ask about district rainfall or crop production \
         ('history' to review the conversation, 'quit' to exit)."
    );
    println!("Loaded datasets:");
    println!("  - {} [{}]", catalog.rainfall.title, catalog.rainfall.source);
    println!("  - {} [{}]", catalog.crops.title, catalog.crops.source);

    let stdin = io::stdin();
    loop {
        print!("\n> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let question = line.trim();
        if question.is_empty() {
            continue;
        }
        if question.eq_ignore_ascii_case("quit") || question.eq_ignore_ascii_case("exit") {
            break;
        }
        if question.eq_ignore_ascii_case("history") {
            print_history(&log);
            continue;
        }

        let result = assistant.answer(question);
        log.record(Role::User, question.to_string());
        log.record(Role::Assistant, result.text.clone());
        print_result(&result, show_data);
    }

    Ok(())
}

fn print_history(log: &ConversationLog) {
    if log.is_empty() {
        println!("No chat history yet.");
        return;
    }
    for turn in log.turns() {
        println!(
            "[{}] {}: {}",
            turn.timestamp.format("%Y-%m-%d %H:%M:%S"),
            turn.role,
            turn.content
        );
    }
}

fn print_result(result: &AnalysisResult, show_data: bool) {
    println!("\n{}", result.text);
    if !show_data {
        return;
    }
    match &result.data {
        Some(AnswerData::Table(df)) => println!("\n{df}"),
        Some(AnswerData::Both { rainfall, crops }) => {
            println!("\nRainfall data:\n{rainfall}");
            println!("\nCrop data:\n{crops}");
        }
        None => {}
    }
}
