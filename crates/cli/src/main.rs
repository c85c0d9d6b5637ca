use anyhow::{anyhow, bail, Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use catalog::Questionnaire;
use rand::Rng;
use rayon::prelude::*;
use recommender::{Answers, Evaluation, Recommender};
use session::{PeakRecommendation, QuestionnaireSession};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::info;

/// Peak Finder - hiking peak recommendations from a short questionnaire
#[derive(Parser)]
#[command(name = "peak-finder")]
#[command(about = "Recommends a hiking peak from your answers to a questionnaire", long_about = None)]
struct Cli {
    /// Directory containing peaks.json and questions.json
    #[arg(short, long, default_value = "data/reutte")]
    data_dir: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Answer the questionnaire interactively
    Ask,

    /// Recommend a peak for the given answers
    Recommend {
        /// Answer as QUESTION=OPTION, both numbered from 1 (repeat per question)
        #[arg(long = "answer", value_parser = parse_choice)]
        answers: Vec<(usize, usize)>,

        /// Recommend even if some questions are unanswered
        #[arg(long)]
        partial: bool,

        /// Show candidates and scores behind the recommendation
        #[arg(long)]
        explain: bool,
    },

    /// List all peaks in the catalog
    Peaks,

    /// Report answer options that reference peaks missing from the catalog
    Check,

    /// Run random complete answer sets to measure latency
    Benchmark {
        /// Number of recommendations to compute
        #[arg(long, default_value = "10000")]
        requests: usize,
    },
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let start = Instant::now();
    let questionnaire = Arc::new(
        Questionnaire::load_from_dir(&cli.data_dir)
            .with_context(|| format!("Failed to load questionnaire from {}", cli.data_dir.display()))?,
    );
    info!("Loaded questionnaire in {:?}", start.elapsed());

    match cli.command {
        Commands::Ask => handle_ask(questionnaire)?,
        Commands::Recommend {
            answers,
            partial,
            explain,
        } => handle_recommend(questionnaire, &answers, partial, explain)?,
        Commands::Peaks => handle_peaks(&questionnaire),
        Commands::Check => handle_check(&questionnaire)?,
        Commands::Benchmark { requests } => handle_benchmark(questionnaire, requests)?,
    }

    Ok(())
}

/// Parse "QUESTION=OPTION" (1-based) into 0-based indices
fn parse_choice(s: &str) -> std::result::Result<(usize, usize), String> {
    let (question, option) = s
        .split_once('=')
        .ok_or_else(|| format!("expected QUESTION=OPTION, got '{}'", s))?;
    let parse = |part: &str, what: &str| -> std::result::Result<usize, String> {
        match part.trim().parse::<usize>() {
            Ok(n) if n >= 1 => Ok(n - 1),
            _ => Err(format!("invalid {} number '{}' (numbering starts at 1)", what, part)),
        }
    };
    Ok((parse(question, "question")?, parse(option, "option")?))
}

/// Handle the 'ask' command
fn handle_ask(questionnaire: Arc<Questionnaire>) -> Result<()> {
    let mut session = QuestionnaireSession::new(questionnaire.clone());
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    println!("{}", "Wander-Fragebogen".bold().blue());
    for (q_idx, question) in questionnaire.questions().iter().enumerate() {
        println!();
        println!("{}", format!("{}. {}", q_idx + 1, question.text).bold());
        for (o_idx, option) in question.options.iter().enumerate() {
            println!("   {} {}", format!("[{}]", o_idx + 1).green(), option.text);
        }

        loop {
            print!("> ");
            io::stdout().flush()?;
            let line = lines
                .next()
                .ok_or_else(|| anyhow!("Input ended before question {} was answered", q_idx + 1))??;
            match line.trim().parse::<usize>() {
                Ok(n) if (1..=question.options.len()).contains(&n) => {
                    session.select(q_idx, n - 1)?;
                    break;
                }
                _ => println!(
                    "{}",
                    format!("Please enter a number from 1 to {}", question.options.len()).yellow()
                ),
            }
        }
    }

    println!();
    match session.recommendation() {
        Some(rec) => print_recommendation(rec),
        None => print_no_recommendation(&session.evaluate()),
    }
    Ok(())
}

/// Handle the 'recommend' command
fn handle_recommend(
    questionnaire: Arc<Questionnaire>,
    choices: &[(usize, usize)],
    partial: bool,
    explain: bool,
) -> Result<()> {
    let mut session = QuestionnaireSession::new(questionnaire.clone());
    for &(question, option) in choices {
        session.select(question, option)?;
    }

    if !session.is_complete() && !partial {
        let missing = session
            .unanswered()
            .iter()
            .map(|q| (q + 1).to_string())
            .collect::<Vec<_>>()
            .join(", ");
        bail!("Unanswered questions: {} (use --partial to recommend anyway)", missing);
    }

    let evaluation = session.evaluate();
    match session.recommendation() {
        Some(rec) => print_recommendation(rec),
        None => match evaluation
            .best
            .as_deref()
            .and_then(|id| questionnaire.catalog().get_peak(id))
        {
            // Partial answers: show the current leader without caching it
            Some(peak) if partial => {
                println!("{}", "Current best match (incomplete answers):".bold().yellow());
                println!("{} {}", "•".green(), peak.name);
                println!("  Ausgangspunkt: {}", peak.start);
                println!("  Gehzeit: {}", peak.duration);
            }
            _ => print_no_recommendation(&evaluation),
        },
    }

    if explain {
        print_explanation(&evaluation, session.answers(), questionnaire.question_count());
    }
    Ok(())
}

/// Handle the 'peaks' command
fn handle_peaks(questionnaire: &Questionnaire) {
    println!(
        "{}",
        format!("{} peaks in catalog:", questionnaire.catalog().len()).bold().blue()
    );
    for peak in questionnaire.catalog().peaks() {
        println!(
            "{} {} - {} ({}) [{}]",
            "•".green(),
            peak.name,
            peak.start,
            peak.duration,
            peak.id.dimmed()
        );
    }
}

/// Handle the 'check' command
fn handle_check(questionnaire: &Questionnaire) -> Result<()> {
    let unknown = questionnaire.unknown_references();
    if unknown.is_empty() {
        println!("{} All endorsed peaks exist in the catalog", "✓".green());
        return Ok(());
    }

    println!("{}", "Endorsements of peaks missing from the catalog:".bold().red());
    for reference in &unknown {
        let question = questionnaire.question(reference.question)?;
        let option = questionnaire.option(reference.question, reference.option)?;
        println!(
            "{} '{}' in question {} ('{}'), option '{}'",
            "✗".red(),
            reference.peak_id,
            reference.question + 1,
            question.text,
            option.text
        );
    }
    bail!("{} unknown peak references", unknown.len())
}

/// Handle the 'benchmark' command
fn handle_benchmark(questionnaire: Arc<Questionnaire>, requests: usize) -> Result<()> {
    if requests == 0 {
        bail!("--requests must be at least 1");
    }
    let recommender = Recommender::new(questionnaire.clone());

    // Generate random complete answer sets
    let answer_sets: Vec<Answers> = (0..requests)
        .map(|_| random_answers(&questionnaire))
        .collect();

    // Run them in parallel, timing each one
    let wall = Instant::now();
    let mut timings: Vec<Duration> = answer_sets
        .par_iter()
        .map(|answers| {
            let start = Instant::now();
            std::hint::black_box(recommender.recommend(std::hint::black_box(answers)));
            start.elapsed()
        })
        .collect();
    let wall_time = wall.elapsed();

    let total_time: Duration = timings.iter().sum();
    let avg_latency = total_time / timings.len() as u32;
    timings.sort();
    let percentile = |p: f64| timings[((timings.len() as f64 * p) as usize).min(timings.len() - 1)];
    let throughput = requests as f64 / wall_time.as_secs_f64();

    println!("{}", "Benchmark results:".bold().blue());
    println!("Requests: {}", requests);
    println!("Wall time: {:?}", wall_time);
    println!("Average latency: {:?}", avg_latency);
    println!("P50 latency: {:?}", percentile(0.50));
    println!("P95 latency: {:?}", percentile(0.95));
    println!("P99 latency: {:?}", percentile(0.99));
    println!("Throughput: {:.2} recommendations/second", throughput);

    Ok(())
}

/// Pick a random option for every question
fn random_answers(questionnaire: &Questionnaire) -> Answers {
    let mut rng = rand::rng();
    let mut answers = Answers::new();
    for (q_idx, question) in questionnaire.questions().iter().enumerate() {
        let option = &question.options[rng.random_range(0..question.options.len())];
        answers.record(q_idx, option.peaks.iter().cloned());
    }
    answers
}

/// Helper function to format and print a recommendation
fn print_recommendation(rec: &PeakRecommendation) {
    println!("{}", "Empfohlener Gipfel:".bold().green());
    println!("{} {}", "•".green(), rec.peak.name.bold());
    println!("  Ausgangspunkt: {}", rec.peak.start);
    println!("  Gehzeit: {}", rec.peak.duration);
    println!("  {}", rec.explanation.dimmed());
}

fn print_no_recommendation(evaluation: &Evaluation) {
    match &evaluation.best {
        Some(id) => println!(
            "{}",
            format!("No recommendation: best match '{}' is not in the catalog", id).yellow()
        ),
        None => println!("{}", "No recommendation".yellow()),
    }
}

fn print_explanation(evaluation: &Evaluation, answers: &Answers, question_count: usize) {
    println!();
    println!("{}", "Explanation:".bold().blue());
    println!(
        "Answered questions: {} of {}",
        answers.count_within(question_count),
        question_count
    );
    if evaluation.fell_back {
        println!("No peak matched every answer; candidates reverted to the duration choice");
    }
    println!("Candidates (score):");
    for id in &evaluation.candidates {
        let marker = if evaluation.best.as_deref() == Some(id.as_str()) {
            "→".green()
        } else {
            " ".normal()
        };
        println!("{} {} ({})", marker, id, evaluation.scores.count(id));
    }
}
