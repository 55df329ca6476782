//! Wellkit Health Advisor — Demo CLI
//!
//! Exercises the rule-based advisor and the demo data from the command line.
//!
//! Usage:
//!   cargo run -p demo -- ask "I have a headache"
//!   cargo run -p demo -- ask --condition Hypertension "what about my blood pressure"
//!   cargo run -p demo -- foods "always tired"
//!   cargo run -p demo -- topics
//!   cargo run -p demo -- hospitals

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use wellkit_advisor::{recommend, RuleAdvisor};
use wellkit_contracts::{chat::RecommendationItem, error::WellkitResult, profile::UserProfile};
use wellkit_data::hospital_directory;

// ── CLI definition ────────────────────────────────────────────────────────────

/// Wellkit — rule-based health advisor demo.
///
/// The advisor matches your question against an ordered keyword table and
/// replies with canned advisory text plus food suggestions. It is general
/// guidance only, not medical advice.
#[derive(Parser)]
#[command(
    name = "demo",
    about = "Wellkit health advisor demo",
    long_about = "Runs the Wellkit rule-based advisor from the command line: canned\n\
                  advisory replies, food recommendations, and the demo hospital directory."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Ask the advisor a free-text health question.
    Ask {
        /// Condition tag to carry in the mock profile (e.g. "Hypertension").
        #[arg(long)]
        condition: Option<String>,
        /// The question, e.g. "how do I sleep better".
        question: Vec<String>,
    },
    /// Show only the food recommendations a query would attach.
    Foods {
        /// The query, e.g. "always tired".
        query: Vec<String>,
    },
    /// List the advisor's rule table in evaluation order.
    Topics,
    /// Print the demo hospital directory.
    Hospitals,
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() {
    // Initialize structured logging.  Set RUST_LOG=debug to see rule matches.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .compact()
        .init();

    let cli = Cli::parse();

    print_banner();

    let result = match cli.command {
        Command::Ask { condition, question } => run_ask(condition, &question.join(" ")),
        Command::Foods { query } => run_foods(&query.join(" ")),
        Command::Topics => run_topics(),
        Command::Hospitals => run_hospitals(),
    };

    if let Err(e) = result {
        eprintln!("Demo error: {}", e);
        std::process::exit(1);
    }
}

fn print_banner() {
    println!();
    println!("WELLKIT — Health Companion");
    println!("Rule-based Advisor Demo");
    println!("==========================");
    println!();
    println!("The advisor answers each question in two independent passes:");
    println!("  [1] Topic rules matched in declaration order — first match wins");
    println!("  [2] Food category inferred from the same query by its own keyword table");
    println!("  [3] No match → fixed fallback reply, no foods");
    println!();
}

// ── Subcommand runners ────────────────────────────────────────────────────────

fn run_ask(condition: Option<String>, question: &str) -> WellkitResult<()> {
    let advisor = RuleAdvisor::builtin()?;

    let profile = condition.map(|tag| UserProfile {
        name: "demo".to_string(),
        email: "demo@example.com".to_string(),
        age: Some(32),
        conditions: vec![tag],
    });

    let reply = advisor.select(question, profile.as_ref());

    println!();
    println!("Q: {}", question);
    println!();
    println!("{}", reply.text);
    print_items(&reply.items);
    Ok(())
}

fn run_foods(query: &str) -> WellkitResult<()> {
    let items = recommend::recommendations_for(query);

    println!();
    println!("Q: {}", query);
    if items.is_empty() {
        println!("No food category matches this query.");
    } else {
        print_items(&items);
    }
    Ok(())
}

fn run_topics() -> WellkitResult<()> {
    let advisor = RuleAdvisor::builtin()?;

    println!();
    println!("Advisor rule table (first match wins):");
    for rule in advisor.rules() {
        let foods = if rule.attach_foods { "foods" } else { "no foods" };
        let gate = match &rule.requires_condition {
            Some(tag) => format!(", requires condition '{}'", tag),
            None => String::new(),
        };
        println!(
            "  {:<22} {:<40} [{}{}]",
            rule.id,
            rule.keywords.join(" | "),
            foods,
            gate
        );
    }
    Ok(())
}

fn run_hospitals() -> WellkitResult<()> {
    println!();
    println!("Nearby hospitals (demo directory):");
    for hospital in hospital_directory() {
        let er = if hospital.emergency { "ER" } else { "--" };
        println!(
            "  {:<26} {:<26} {:>7}  {:.1}*  {}  [{}]",
            hospital.name, hospital.specialty, hospital.distance, hospital.rating,
            hospital.phone, er
        );
    }
    Ok(())
}

// ── Output helpers ────────────────────────────────────────────────────────────

fn print_items(items: &[RecommendationItem]) {
    if items.is_empty() {
        return;
    }
    println!();
    println!("Recommended foods:");
    for item in items {
        println!("  {} {:<16} {}", item.symbol, item.name, item.benefit);
    }
}
