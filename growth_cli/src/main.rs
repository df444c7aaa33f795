use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use growth_core::batch::evaluate_csv;
use growth_core::curves::MAX_WINDOW_MONTHS;
use growth_core::*;
use serde_json::json;
use std::fs::File;
use std::io::{self, BufReader, BufWriter};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "growth-compass")]
#[command(about = "Pediatric growth percentile calculator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Use this config file instead of the default location
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Default log level (RUST_LOG overrides)
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute Z-scores, percentiles and interpretations for one patient
    Compute {
        /// Sex (male, female)
        #[arg(long)]
        sex: Sex,

        /// Birth date (YYYY-MM-DD)
        #[arg(long, conflicts_with = "age_months")]
        dob: Option<NaiveDate>,

        /// Measurement date (YYYY-MM-DD), defaults to today
        #[arg(long)]
        measured: Option<NaiveDate>,

        /// Age in months, instead of a birth date
        #[arg(long)]
        age_months: Option<f64>,

        /// Weight (kg, or lb with imperial units)
        #[arg(long, allow_negative_numbers = true)]
        weight: f64,

        /// Height or length (cm, or in with imperial units)
        #[arg(long, allow_negative_numbers = true)]
        height: f64,

        /// Head circumference (cm, or in with imperial units)
        #[arg(long, allow_negative_numbers = true)]
        head: Option<f64>,

        /// Unit system of the entered values (metric, imperial)
        #[arg(long)]
        units: Option<Units>,

        /// Output format (text, json)
        #[arg(long)]
        format: Option<OutputFormat>,
    },

    /// Compute age in months, or the birth date implied by an age
    Age {
        /// Birth date (YYYY-MM-DD)
        #[arg(long, conflicts_with = "age_months")]
        dob: Option<NaiveDate>,

        /// Measurement date (YYYY-MM-DD), defaults to today
        #[arg(long)]
        measured: Option<NaiveDate>,

        /// Age in months
        #[arg(long)]
        age_months: Option<f64>,
    },

    /// Print reference percentile curves around an age
    Curve {
        /// Sex (male, female)
        #[arg(long)]
        sex: Sex,

        /// Metric (weight, height, bmi, head)
        #[arg(long)]
        metric: Metric,

        /// Age in months at the center of the window
        #[arg(long)]
        age_months: f64,

        /// Months on each side of the age (at most 240)
        #[arg(long, value_parser = clap::value_parser!(u32).range(..=i64::from(MAX_WINDOW_MONTHS)))]
        window: Option<u32>,

        /// Unit system for printed values (metric, imperial)
        #[arg(long)]
        units: Option<Units>,

        /// Output format (text, json)
        #[arg(long)]
        format: Option<OutputFormat>,
    },

    /// Evaluate a CSV file of measurements
    Batch {
        /// Input CSV with columns sex,birth_date,measurement_date,age_months,weight_kg,height_cm,head_circumference_cm
        #[arg(long)]
        input: PathBuf,

        /// Write results here instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    growth_core::logging::init_with_level(&cli.log_level);

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    match cli.command {
        Commands::Compute {
            sex,
            dob,
            measured,
            age_months,
            weight,
            height,
            head,
            units,
            format,
        } => {
            let units = units.unwrap_or(config.input.units);
            let measured = measured.or_else(|| dob.map(|_| today()));
            let age = match AgeInput::from_parts(dob, measured, age_months) {
                Ok(age) => age,
                Err(e) if e.is_missing_age() => {
                    print_no_result();
                    return Ok(());
                }
                Err(e) => return Err(e),
            };

            let patient = PatientMeasurement {
                sex,
                age,
                weight_kg: units.weight_to_kg(weight),
                height_cm: units.length_to_cm(height),
                head_circumference_cm: head.map(|hc| units.length_to_cm(hc)),
            };
            cmd_compute(&patient, units, format.unwrap_or(config.output.format), &config)
        }
        Commands::Age {
            dob,
            measured,
            age_months,
        } => cmd_age(dob, measured.unwrap_or_else(today), age_months),
        Commands::Curve {
            sex,
            metric,
            age_months,
            window,
            units,
            format,
        } => cmd_curve(
            sex,
            metric,
            age_months,
            window.unwrap_or(config.chart.window_months),
            units.unwrap_or(config.input.units),
            format.unwrap_or(config.output.format),
            &config,
        ),
        Commands::Batch { input, output } => cmd_batch(&input, output.as_deref()),
    }
}

fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

fn cmd_compute(
    patient: &PatientMeasurement,
    units: Units,
    format: OutputFormat,
    config: &Config,
) -> Result<()> {
    tracing::debug!("Computing statistics with {} units", units);

    let stats = GrowthEngine::standard().compute_for(patient)?;

    match format {
        OutputFormat::Json => {
            let interpretations: serde_json::Map<_, _> = stats
                .scores()
                .into_iter()
                .map(|(metric, score)| (metric.to_string(), json!(score.interpret())))
                .collect();
            let report = json!({
                "patient": patient,
                "statistics": stats,
                "interpretations": interpretations,
            });
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Text => display_statistics(patient, &stats, units, config.output.decimals),
    }

    Ok(())
}

fn cmd_age(dob: Option<NaiveDate>, measured: NaiveDate, age_months: Option<f64>) -> Result<()> {
    match (dob, age_months) {
        (Some(dob), _) => {
            let months = age_in_months(dob, measured);
            println!("Age on {}: {:.2} months", measured, months);
        }
        (None, Some(months)) => {
            let birth = implied_birth_date(months, measured)?;
            println!("Implied birth date: {}", birth);
        }
        (None, None) => print_no_result(),
    }
    Ok(())
}

fn cmd_curve(
    sex: Sex,
    metric: Metric,
    age_months: f64,
    window: u32,
    units: Units,
    format: OutputFormat,
    config: &Config,
) -> Result<()> {
    let points = percentile_curves(reference::standard(), sex, metric, age_months, window)?;

    let convert = |value: f64| match metric {
        Metric::Weight => units.weight_from_kg(value),
        Metric::Height | Metric::HeadCircumference => units.length_from_cm(value),
        Metric::Bmi => value,
    };
    let unit_label = match metric {
        Metric::Weight => units.weight_label(),
        Metric::Height | Metric::HeadCircumference => units.length_label(),
        Metric::Bmi => metric.unit(),
    };

    let points: Vec<CurvePoint> = points
        .into_iter()
        .map(|p| CurvePoint {
            month: p.month,
            p3: convert(p.p3),
            p15: convert(p.p15),
            p50: convert(p.p50),
            p85: convert(p.p85),
            p97: convert(p.p97),
        })
        .collect();

    match format {
        OutputFormat::Json => {
            let report = json!({
                "sex": sex,
                "metric": metric,
                "unit": unit_label,
                "points": points,
            });
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Text => {
            let d = config.output.decimals;
            println!("{} {} reference curves ({})", sex, metric, unit_label);
            println!(
                "{:>5}  {:>9}  {:>9}  {:>9}  {:>9}  {:>9}",
                "month", "P3", "P15", "P50", "P85", "P97"
            );
            for p in &points {
                println!(
                    "{:>5}  {:>9.d$}  {:>9.d$}  {:>9.d$}  {:>9.d$}  {:>9.d$}",
                    p.month,
                    p.p3,
                    p.p15,
                    p.p50,
                    p.p85,
                    p.p97,
                    d = d
                );
            }
        }
    }

    Ok(())
}

fn cmd_batch(input: &Path, output: Option<&Path>) -> Result<()> {
    let engine = GrowthEngine::standard();
    let reader = BufReader::new(File::open(input)?);

    match output {
        Some(path) => {
            let writer = BufWriter::new(File::create(path)?);
            let summary = evaluate_csv(&engine, reader, writer, Some(today()))?;
            println!(
                "✓ Evaluated {} rows ({} without result)",
                summary.evaluated + summary.failed,
                summary.failed
            );
            println!("  Output: {}", path.display());
        }
        None => {
            let stdout = io::stdout();
            let summary = evaluate_csv(&engine, reader, stdout.lock(), Some(today()))?;
            eprintln!(
                "Evaluated {} rows ({} without result)",
                summary.evaluated + summary.failed,
                summary.failed
            );
        }
    }

    Ok(())
}

fn print_no_result() {
    println!("No result yet: enter a birth date or an age in months.");
}

fn display_statistics(
    patient: &PatientMeasurement,
    stats: &GrowthStatistics,
    units: Units,
    decimals: usize,
) {
    let d = decimals;

    println!("\n╭─────────────────────────────────────────╮");
    println!("│  GROWTH STATISTICS ({})", patient.sex);
    println!("╰─────────────────────────────────────────╯");
    println!();
    println!("  Age: {:.1} months", stats.age_in_months);
    println!();

    for (metric, score) in stats.scores() {
        let value = match metric {
            Metric::Weight => format!(
                "{:.d$} {}",
                units.weight_from_kg(patient.weight_kg),
                units.weight_label(),
                d = d
            ),
            Metric::Height => format!(
                "{:.d$} {}",
                units.length_from_cm(patient.height_cm),
                units.length_label(),
                d = d
            ),
            Metric::Bmi => format!("{:.d$} {}", stats.bmi.value, metric.unit(), d = d),
            Metric::HeadCircumference => patient
                .head_circumference_cm
                .map(|hc| format!("{:.d$} {}", units.length_from_cm(hc), units.length_label(), d = d))
                .unwrap_or_default(),
        };
        let interpretation = score.interpret();

        println!("  {}", metric);
        println!("    → Value: {}", value);
        println!(
            "    → Z: {:.d$}  Percentile: {:.d$}",
            score.z,
            score.percentile,
            d = d
        );
        println!(
            "    → [{}] {}",
            interpretation.risk_tier, interpretation.category
        );
        println!("      {}", interpretation.description);
        println!();
    }
}
