use {
    anyhow::{Context, Result},
    clap::Parser,
    montyhall::{
        Cli, MenuChoice, SimulationConfig,
        ui::{UI_TEXT, ask_trial_count, compute_sample_space, simulate_monte_carlo},
    },
    std::{
        io::{self, BufRead, Write},
        panic,
    },
};

fn init_log() {
    let (global_level, my_code_level) = if cfg!(debug_assertions) {
        (log::LevelFilter::Warn, log::LevelFilter::Info)
    } else {
        (log::LevelFilter::Error, log::LevelFilter::Error)
    };

    let mut builder = env_logger::Builder::new();

    builder
        .filter(None, global_level)
        .filter(Some("montyhall"), my_code_level)
        .parse_default_env()
        .init();
}

fn read_selection<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<String> {
    writeln!(output, "{}", UI_TEXT.welcome)?;
    writeln!(output, "{}", UI_TEXT.menu)?;
    write!(output, "{}", UI_TEXT.prompt_selection)?;
    output.flush()?;

    let mut line = String::new();
    input
        .read_line(&mut line)
        .context("Failed to read menu selection")?;
    Ok(line)
}

fn main() -> Result<()> {
    panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::force_capture();
        log::error!("CRITICAL PANIC:\n{}\nStack Trace:\n{}", info, backtrace);
    }));

    init_log();

    let args = Cli::parse();
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let selection = match &args.selection {
        Some(s) => s.clone(),
        None => read_selection(&mut input, &mut out)?,
    };

    let choice = match selection.parse::<MenuChoice>() {
        Ok(choice) => choice,
        Err(e) => {
            log::warn!("{}", e);
            writeln!(out, "{}", UI_TEXT.invalid_request)?;
            return Ok(());
        }
    };
    log::info!("Selected: {}", choice);

    match choice {
        MenuChoice::Theoretical | MenuChoice::EventSpace => {
            let display = choice == MenuChoice::EventSpace;
            let report = compute_sample_space(display, &mut out)
                .context("Failed to write theoretical result")?;
            if args.json {
                writeln!(out, "{}", serde_json::to_string_pretty(&report)?)?;
            }
        }
        MenuChoice::Simulation => {
            let trials = match &args.trials {
                Some(text) => SimulationConfig::parse_trials(text)?,
                None => ask_trial_count(&mut input, &mut out)?,
            };
            let config = SimulationConfig::new(trials)?
                .with_seed(args.seed)
                .with_parallel(args.parallel);
            let report = simulate_monte_carlo(&config, &mut out)
                .context("Failed to run Monte Carlo simulation")?;
            if args.json {
                writeln!(out, "{}", serde_json::to_string_pretty(&report)?)?;
            }
        }
    }

    Ok(())
}
