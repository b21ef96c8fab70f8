//! heartscore - HEART economic model CLI.

mod config;
mod report;

use std::env;
use std::path::PathBuf;

use anyhow::{bail, Context};
use heartscore_core::{Catalog, CountryRecord, Dataset};
use heartscore_engine::score::{
    format_count, format_currency, format_percent, resilience_description, CalculatorInput,
    InputMode, ScoreBreakdown, Unit, AFFORDABILITY_GRADES,
};

fn print_usage() {
    eprintln!("Usage: heartscore [OPTIONS] <COMMAND> [ARGS]");
    eprintln!();
    eprintln!("Commands:");
    eprintln!("  list                      List every country with its HEART score");
    eprintln!("  show <COUNTRY>            Show one country in detail (case-insensitive)");
    eprintln!("  global                    Show world-level aggregates");
    eprintln!("  calc [CALC OPTIONS]       Score ad-hoc inputs; needs no data file");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  -d, --data <FILE>         Data file (.xlsx, .xls, .xlsb, .ods, .csv)");
    eprintln!("  --config <FILE>           Config file (TOML)");
    eprintln!("  --no-config               Skip config loading entirely");
    eprintln!("  -o, --output <FILE>       Write `list` output as a markdown report");
    eprintln!("  -h, --help                Print help");
    eprintln!();
    eprintln!("Calc options:");
    eprintln!("  --mode <percentage|absolute>  How sector terms are entered (default: percentage)");
    eprintln!("  --unit <K|M|B|T>              Unit for absolute amounts and GDP (default: B)");
    eprintln!("  --gdp <N>                     Country GDP in the selected unit");
    eprintln!("  --housing <N>                 Housing contribution");
    eprintln!("  --health <N>                  Health contribution");
    eprintln!("  --energy <N>                  Energy contribution");
    eprintln!("  --education <N>               Education contribution");
    eprintln!("  --global-share <N>            Share of world GDP, in percent");
    eprintln!("  --interest <N>                Interest payments");
    eprintln!("  --trade <N>                   Trade balance (signed)");
    eprintln!("  --pci <N>                     Per-capita income");
    eprintln!("  --inflation <N>               Inflation, in percent");
    eprintln!("  --hdi <N>                     Human Development Index (0-1)");
    eprintln!("  --gini <N>                    GINI index (0-1)");
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let args: Vec<String> = env::args().skip(1).collect();

    let mut data_path: Option<PathBuf> = None;
    let mut config_path: Option<PathBuf> = None;
    let mut no_config = false;
    let mut output_file: Option<PathBuf> = None;
    let mut command: Option<String> = None;
    let mut command_args: Vec<String> = Vec::new();

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => {
                print_usage();
                return Ok(());
            }
            "-d" | "--data" if command.is_none() => {
                i += 1;
                data_path = Some(require_value(&args, i, "--data")?.into());
            }
            "--config" if command.is_none() => {
                i += 1;
                config_path = Some(require_value(&args, i, "--config")?.into());
            }
            "--no-config" if command.is_none() => {
                no_config = true;
            }
            "-o" | "--output" if command.is_none() => {
                i += 1;
                output_file = Some(require_value(&args, i, "--output")?.into());
            }
            arg if command.is_none() && arg.starts_with('-') => {
                print_usage();
                bail!("Unknown option: {arg}");
            }
            _ => {
                if command.is_none() {
                    command = Some(args[i].clone());
                } else {
                    command_args.push(args[i].clone());
                }
            }
        }
        i += 1;
    }

    let (config, warnings) = if no_config {
        (config::Config::default(), Vec::new())
    } else {
        config::load_config(config_path.as_deref())
    };
    for warning in warnings {
        eprintln!("Warning: {warning}");
    }

    let Some(command) = command else {
        print_usage();
        bail!("No command given");
    };

    match command.as_str() {
        "list" => {
            let dataset = load_dataset(data_path, &config)?;
            if let Some(out) = output_file {
                report::write_markdown(&out, &dataset)
                    .with_context(|| format!("Failed to write {}", out.display()))?;
                println!("Report written to {}", out.display());
            } else {
                print_list(&dataset);
            }
        }
        "show" => {
            let name = command_args
                .first()
                .context("show requires a country name")?;
            let dataset = load_dataset(data_path, &config)?;
            match dataset.lookup(name) {
                Some(record) => print_detail(record),
                None => bail!("Country not found: {name}"),
            }
        }
        "global" => {
            let dataset = load_dataset(data_path, &config)?;
            let globals = dataset.global_metrics();
            println!("Global GDP:        {}", format_currency(globals.gdp));
            println!("Global population: {}", format_count(globals.population));
            println!("Global trade:      {}", format_currency(globals.trade));
        }
        "calc" => {
            let input = parse_calc_args(&command_args)?;
            print_breakdown(&input.evaluate_with_bounds(config.calc_bounds()));
        }
        other => {
            print_usage();
            bail!("Unknown command: {other}");
        }
    }

    Ok(())
}

fn require_value<'a>(args: &'a [String], i: usize, flag: &str) -> anyhow::Result<&'a str> {
    args.get(i)
        .map(String::as_str)
        .with_context(|| format!("{flag} requires a value"))
}

fn load_dataset(data_path: Option<PathBuf>, config: &config::Config) -> anyhow::Result<Dataset> {
    let path = data_path
        .or_else(|| config.data.clone())
        .context("No data file given (use --data or set `data` in the config)")?;
    let mut catalog = Catalog::new(&path);
    let dataset = catalog
        .get_or_load()
        .with_context(|| format!("Failed to load {}", path.display()))?
        .clone();
    Ok(dataset)
}

fn parse_calc_args(args: &[String]) -> anyhow::Result<CalculatorInput> {
    let mut input = CalculatorInput::default();
    let mut i = 0;
    while i < args.len() {
        let flag = args[i].clone();
        i += 1;
        let value = require_value(args, i, &flag)?;
        match flag.as_str() {
            "--mode" => {
                input.mode =
                    InputMode::parse(value).with_context(|| format!("Invalid mode: {value:?}"))?;
            }
            "--unit" => {
                input.unit =
                    Unit::parse(value).with_context(|| format!("Invalid unit: {value:?}"))?;
            }
            "--gdp" => input.gdp = parse_number(&flag, value)?,
            "--housing" => input.housing = parse_number(&flag, value)?,
            "--health" => input.health = parse_number(&flag, value)?,
            "--energy" => input.energy = parse_number(&flag, value)?,
            "--education" => input.education = parse_number(&flag, value)?,
            "--global-share" => input.global_gdp_share = parse_number(&flag, value)?,
            "--interest" => input.interest_payment = parse_number(&flag, value)?,
            "--trade" => input.trade_balance = parse_number(&flag, value)?,
            "--pci" => input.pci = parse_number(&flag, value)?,
            "--inflation" => input.inflation = parse_number(&flag, value)?,
            "--hdi" => input.hdi = parse_number(&flag, value)?,
            "--gini" => input.gini = parse_number(&flag, value)?,
            other => {
                print_usage();
                bail!("Unknown calc option: {other}");
            }
        }
        i += 1;
    }
    Ok(input)
}

fn parse_number(flag: &str, value: &str) -> anyhow::Result<f64> {
    value
        .parse()
        .with_context(|| format!("{flag} expects a number, got {value:?}"))
}

fn print_list(dataset: &Dataset) {
    println!(
        "{:<5} {:<24} {:>10} {:>10} {:>6} {:>5} {:>12}",
        "#", "COUNTRY", "GDP", "PCI", "HV", "HAR", "HEART SCORE"
    );
    for r in dataset.records() {
        println!(
            "{:<5} {:<24} {:>10} {:>10.0} {:>6.2} {:>5} {:>12}",
            r.seq,
            r.country,
            format_currency(r.gdp),
            r.per_capita_income,
            r.heart_value,
            r.affordability_ranking,
            r.heart_score,
        );
    }
}

fn print_detail(r: &CountryRecord) {
    println!("{} (#{})", r.country, r.seq);
    println!();
    println!(
        "GDP:                  {}  (rank {}, {} of global)",
        format_currency(r.gdp),
        r.gdp_global_rank,
        format_percent(r.gdp_share_of_global, true)
    );
    println!(
        "Population:           {}  ({} of global)",
        format_count(r.population),
        format_percent(r.population_share_of_global, true)
    );
    println!("Per-capita income:    {}", format_currency(r.per_capita_income));
    println!("Inflation:            {}", format_percent(r.inflation, false));
    println!("Adjusted PCI:         {}", format_currency(r.adjusted_pci));
    println!();
    println!(
        "Total debt:           {}  (interest rate {})",
        format_currency(r.total_debt),
        format_percent(r.interest_rate, true)
    );
    println!(
        "Interest payment:     {}  ({} of GDP)",
        format_currency(r.interest_payment),
        format_percent(r.interest_payment_to_gdp, true)
    );
    println!(
        "Adjusted debt:        {}  ({} of GDP)",
        format_currency(r.adjusted_debt),
        format_percent(r.adjusted_debt_to_gdp, true)
    );
    println!();
    println!(
        "Trade volume:         {}  ({} of global trade)",
        format_currency(r.trade_volume),
        format_percent(r.trade_share_of_global, true)
    );
    println!(
        "Trade balance:        {}  ({} of GDP)",
        format_currency(r.trade_balance),
        format_percent(r.trade_balance_to_gdp, true)
    );
    println!();
    println!(
        "Housing:              {}  ({} of GDP, {} units, {:.2} per person)",
        format_currency(r.housing_contribution),
        format_percent(r.housing_contribution_pct, true),
        format_count(r.housing_units),
        r.houses_per_person
    );
    println!(
        "Health:               {}  ({} of GDP)",
        format_currency(r.health_contribution),
        format_percent(r.health_contribution_pct, true)
    );
    println!(
        "Energy:               {}  ({} of GDP)",
        format_currency(r.energy_contribution),
        format_percent(r.energy_contribution_pct, true)
    );
    println!(
        "Education:            {}  ({} of GDP)",
        format_currency(r.education_contribution),
        format_percent(r.education_contribution_pct, true)
    );
    println!();
    println!("HDI:                  {:.3}", r.hdi);
    println!("GINI:                 {:.3}", r.gini);
    println!("Adjusted HDI:         {:.3}", r.adjusted_hdi);
    println!("Affordability value:  {:.2}", r.affordability_value);
    println!(
        "Affordability grade:  {} ({})",
        r.affordability_ranking,
        grade_description(&r.affordability_ranking)
    );
    println!("Heart Value (raw):    {:.2}", r.heart_value_raw);
    println!("Heart Value (0-1):    {:.2}", r.heart_value);
    println!("Resilience:           {}", resilience_description(r.heart_value));
    println!("HEART Score:          {}", r.heart_score);
    if !r.description.is_empty() {
        println!();
        println!("{}", r.description);
    }
}

fn print_breakdown(out: &ScoreBreakdown) {
    println!("Raw Heart Value:      {:.2}", out.raw_heart_value);
    println!("Heart Value (0-1):    {:.2}", out.heart_value);
    println!("Resilience:           {}", resilience_description(out.heart_value));
    println!("Adjusted PCI:         {:.2}", out.adjusted_pci);
    println!("Adjusted HDI:         {:.3}", out.adjusted_hdi);
    println!("Affordability value:  {:.2}", out.affordability_value);
    println!(
        "Affordability grade:  {} ({})",
        out.grade,
        grade_description(out.grade)
    );
    println!("HEART Score:          {}", out.heart_score);
}

fn grade_description(grade: &str) -> &'static str {
    AFFORDABILITY_GRADES
        .iter()
        .find(|band| band.grade == grade)
        .map(|band| band.description)
        .unwrap_or("")
}
