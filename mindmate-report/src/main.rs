//! mindmate-report - MindMate progress report CLI
//!
//! Prints the wellness progress overview the companion computes: mood
//! trend, streaks, journaling activity, and the gentle check-in decision.

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::Parser;
use mindmate_core::analytics::{generate_overview, ProgressOverview};
use mindmate_core::practice::{Exercise, YogaPose};
use mindmate_core::types::{SessionContext, WellnessCounters};
use mindmate_core::{Config, Database};

#[derive(Parser, Debug)]
#[command(name = "mindmate-report")]
#[command(about = "MindMate - Your Wellness Progress Report")]
#[command(version)]
struct Args {
    /// Override the number of mood trend buckets
    #[arg(long)]
    buckets: Option<usize>,

    /// Override the journal window for the improvement estimate
    #[arg(long)]
    window: Option<usize>,

    /// Evaluate the report as of this date (format: YYYY-MM-DD, default: today)
    #[arg(long)]
    date: Option<String>,

    /// Export format (md = markdown, json = JSON)
    #[arg(long)]
    export: Option<String>,

    /// Print only the gentle check-in decision
    #[arg(long)]
    check_in: bool,

    /// Print the mindfulness and yoga practice catalog
    #[arg(long)]
    practices: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.practices {
        print_practices();
        return Ok(());
    }

    // Pin XDG paths before anything derives a path from them
    Config::ensure_xdg_env();

    // Load configuration and database
    let config = Config::load().context("failed to load configuration")?;
    let _log_guard = mindmate_core::logging::init(&config.logging).ok();

    let db_path = Config::database_path();
    let db = Database::open(&db_path).context("failed to open database")?;
    db.migrate().context("failed to run migrations")?;

    let today = match &args.date {
        Some(raw) => NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .with_context(|| format!("invalid date: {raw}. Use YYYY-MM-DD"))?,
        None => Local::now().date_naive(),
    };

    let mut analytics = config.analytics.clone();
    if let Some(buckets) = args.buckets {
        analytics.trend_buckets = buckets;
    }
    if let Some(window) = args.window {
        analytics.journal_window = window;
    }

    // Counters are per-session; a report run starts a fresh session.
    let session = SessionContext::new();

    let overview = generate_overview(&db, &session, &analytics, today)
        .context("failed to generate progress overview")?;

    if args.check_in {
        print_check_in(&overview);
        return Ok(());
    }

    match args.export.as_deref() {
        Some("json") => print_json(&overview)?,
        Some("md") => print_markdown(&overview),
        Some(other) => anyhow::bail!("Unknown export format: {}. Use 'md' or 'json'", other),
        None => print_terminal(&overview),
    }

    Ok(())
}

fn print_check_in(overview: &ProgressOverview) {
    if overview.check_in {
        println!("Check-in suggested: the last two weeks have read mostly low.");
        println!("A gentle reminder to reach out or take a mindful break today.");
    } else {
        println!("No check-in needed today.");
    }
}

fn print_terminal(overview: &ProgressOverview) {
    println!();
    println!("╭{}╮", "─".repeat(60));
    println!("│{:^60}│", "YOUR WELLNESS PROGRESS OVERVIEW");
    println!("╰{}╯", "─".repeat(60));
    println!();

    // Wellness counters
    println!("MINDFULNESS & YOGA");
    let counters = &overview.wellness;
    println!(
        "   Meditation: {:<6} Mindfulness: {:<6} Yoga: {}",
        counters.meditation_sessions, counters.mindfulness_sessions, counters.yoga_sessions
    );
    println!(
        "   Goal progress: {:.0}% / {:.0}% / {:.0}%",
        WellnessCounters::goal_progress(counters.meditation_sessions) * 100.0,
        WellnessCounters::goal_progress(counters.mindfulness_sessions) * 100.0,
        WellnessCounters::goal_progress(counters.yoga_sessions) * 100.0
    );
    println!();

    // Journaling
    println!("JOURNALING");
    if overview.journaling.total_entries == 0 {
        println!("   No journal entries yet. Try writing one today!");
    } else {
        println!(
            "   Entries: {:<8} Improvement (est.): {:.0}%",
            overview.journaling.total_entries, overview.journaling.improvement_pct
        );
        if !overview.journaling.excerpts.is_empty() {
            println!("   Recent excerpts showing progress:");
            for (date, entry) in &overview.journaling.excerpts {
                println!("     {} — {}", date, entry);
            }
        }
    }
    println!();

    // Emotional insights
    println!("EMOTIONAL INSIGHTS");
    if overview.insights.total_labeled == 0 {
        println!("   No mood data yet. Keep chatting to track emotional patterns.");
    } else {
        println!(
            "   Feelings shared: {}   Weekly positivity: {:.2}",
            overview.insights.total_labeled, overview.weekly_positivity
        );
        println!("   Top moods:");
        for (mood, count) in &overview.insights.top_moods {
            println!("     {:<12} {}", capitalize(mood), count);
        }
        if !overview.insights.trend.is_empty() {
            println!("   Mood trend (oldest → newest buckets):");
            for (mood, counts) in &overview.insights.trend {
                let series: Vec<String> = counts.iter().map(|c| c.to_string()).collect();
                println!("     {:<12} {}", capitalize(mood), series.join(" "));
            }
        }
        if !overview.insights.anxious_mentions.is_empty() {
            println!("   Recent anxious mentions:");
            for (ts, msg) in &overview.insights.anxious_mentions {
                println!("     {} — {}", ts, msg);
            }
        }
    }
    println!();

    // Streaks and suggestions
    println!("STREAKS & SUGGESTIONS");
    println!("   Negative-day streak: {}", overview.negative_streak);
    println!(
        "   Suggested music mood: {}",
        overview.suggested_music.display_name()
    );
    println!();

    if overview.check_in {
        println!("   It looks like the last two weeks have been heavy.");
        println!("   Consider a check-in with someone you trust today.");
        println!();
    }
}

fn print_markdown(overview: &ProgressOverview) {
    println!("# Wellness Progress Overview");
    println!();

    println!("## Mindfulness & Yoga");
    let counters = &overview.wellness;
    println!("- Meditation sessions: {}", counters.meditation_sessions);
    println!("- Mindfulness practices: {}", counters.mindfulness_sessions);
    println!("- Yoga sessions: {}", counters.yoga_sessions);
    println!();

    println!("## Journaling");
    println!("- Entries: {}", overview.journaling.total_entries);
    println!(
        "- Improvement (est.): {:.0}%",
        overview.journaling.improvement_pct
    );
    for (date, entry) in &overview.journaling.excerpts {
        println!("- `{}` — {}", date, entry);
    }
    println!();

    println!("## Emotional Insights");
    println!("- Feelings shared: {}", overview.insights.total_labeled);
    println!("- Weekly positivity: {:.2}", overview.weekly_positivity);
    println!("- Negative-day streak: {}", overview.negative_streak);
    if !overview.insights.top_moods.is_empty() {
        println!();
        println!("| Mood | Count |");
        println!("|------|-------|");
        for (mood, count) in &overview.insights.top_moods {
            println!("| {} | {} |", capitalize(mood), count);
        }
    }
    println!();

    println!("## Suggestions");
    println!(
        "- Music mood: {}",
        overview.suggested_music.display_name()
    );
    println!(
        "- Check-in suggested: {}",
        if overview.check_in { "yes" } else { "no" }
    );
}

fn print_json(overview: &ProgressOverview) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(overview)?);
    Ok(())
}

fn print_practices() {
    println!("MINDFULNESS EXERCISES");
    for exercise in Exercise::all() {
        println!("  {}", exercise.name());
        println!("    {}", exercise.guidance());
        if let Some(cycle) = exercise.cycle_seconds() {
            println!(
                "    Cycle: {}s ({} cycles in a 3-minute session)",
                cycle,
                exercise.cycles_for(3).unwrap_or(1)
            );
        }
    }
    println!();
    println!("YOGA POSES");
    for pose in YogaPose::all() {
        println!("  {}", pose.name());
        for (i, step) in pose.steps().iter().enumerate() {
            println!("    {}. {}", i + 1, step);
        }
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
