use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::time::Instant;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;
use tsuchi::evaluator::lookup;
use tsuchi::form::FieldNode;
use tsuchi::prelude::*;

/// Evaluates a task-tracker webhook body and prints the comments to post
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the webhook body JSON file (an object with a "task" key)
    payload_path: String,
    /// Path to the form template JSON file
    form_path: String,

    /// Optional path to a notifier configuration JSON file
    #[arg(short, long)]
    config: Option<String>,

    /// Explain the visibility of every field tagged for the current step
    #[arg(short, long)]
    explain: bool,

    /// Seed for picking the encouragement phrase
    #[arg(long)]
    seed: Option<u64>,

    /// Log per-field decisions
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::INFO })
        .with_writer(std::io::stderr)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Warning: failed to install log subscriber: {}", e);
    }

    let total_start = Instant::now();

    // --- 1. Loading ---
    let config = match &cli.config {
        Some(path) => NotifierConfig::from_file(path)
            .unwrap_or_else(|e| exit_with_error(&format!("Failed to load config: {}", e))),
        None => NotifierConfig::default(),
    };
    let payload = WebhookPayload::from_file(&cli.payload_path)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to load payload: {}", e)));
    let form = FormSchema::from_file(&cli.form_path)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to load form: {}", e)));
    let task = &payload.task;

    if cli.explain {
        explain_fields(task, &form);
    }

    // --- 2. Evaluation ---
    let evaluator = TransitionEvaluator::builder()
        .with_list_tags(config.list_tags())
        .build();
    let outcome = evaluator.evaluate_task(task, &form);

    // --- 3. Composition ---
    let composer = DefaultComposer::new(&config);
    let messages = match cli.seed {
        Some(seed) => composer.compose_with_rng(&outcome, &mut StdRng::seed_from_u64(seed)),
        None => composer.compose(&outcome),
    };
    let reply = WebhookReply::from_messages(&messages)
        .to_json()
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to encode reply: {}", e)));

    println!("Transition: {}", outcome.kind);
    if let Some(text) = &messages.acknowledgement {
        println!("\nAcknowledgement comment for task {}:", task.id);
        println!("{}", text);
    }
    println!("\nWebhook reply:");
    println!("{}", reply);
    println!("\nTotal Execution: {:?}", total_start.elapsed());
}

/// Prints the visibility trace of each field tagged for the current step.
fn explain_fields(task: &Task, form: &FormSchema) {
    let Some(step) = task.current_step else {
        println!("Task has no current step, nothing to explain.");
        return;
    };
    println!("--- Fields tagged for step {} ---", step);

    let visibility = VisibilityEvaluator::new(&task.fields);
    let tagged = form
        .fields
        .iter()
        .flat_map(|field| std::iter::once(field).chain(field.members().unwrap_or_default()))
        .filter(|field| field.is_required_at(step));

    for field in tagged {
        match lookup::find(field.id, &task.fields) {
            Some(instance) => println!(
                "  #{} {}: {}",
                field.id,
                field.name,
                TraceFormatter::format_visibility(&visibility.explain(instance))
            ),
            None => println!("  #{} {}: not present in task", field.id, field.name),
        }
    }
    println!();
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
