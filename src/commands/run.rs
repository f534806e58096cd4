//! Run command handler
//!
//! Resolves the run options from flags, config and the optional setup
//! form, estimates the reading time and presents the result.

use anyhow::{bail, Context, Result};
use std::io::{self, IsTerminal};
use std::path::{Path, PathBuf};
use tracing::info;

use littime::cli::RunArgs;
use littime::report::{self, format_summary};
use littime::tui::{current_theme, run_result_view, run_setup, SetupForm, SetupInputs};
use littime::{Config, EstimateOptions, Estimator, HyphenPolicy};

use super::load_config;

/// Everything needed to run one estimation.
#[derive(Debug, Clone, PartialEq)]
pub struct RunPlan {
    pub file: PathBuf,
    pub options: EstimateOptions,
    /// Where to save the JSON result, `None` with `--no-save`
    pub output: Option<PathBuf>,
}

/// Merge config defaults, CLI flags and setup form values.
///
/// Form values win over flags, flags win over config.
pub fn plan(args: &RunArgs, config: &Config, inputs: Option<SetupInputs>) -> Result<RunPlan> {
    let mut options = config.estimate_options();
    if let Some(speed) = args.speed {
        options.reading_speed_wpm = f64::from(speed);
    }
    if args.visuals {
        options.has_visuals = true;
    }
    if let Some(workers) = args.workers {
        options.workers = workers;
    }
    if args.split_hyphens {
        options.hyphen_policy = HyphenPolicy::Split;
    }
    if let Some(formula) = args.formula {
        options.formula = formula;
    }

    let file = match inputs {
        Some(inputs) => {
            options.reading_speed_wpm = f64::from(inputs.reading_speed);
            options.has_visuals = inputs.has_visuals;
            options.workers = inputs.workers;
            inputs.file_path
        }
        None => match &args.file {
            Some(file) => file.clone(),
            None => bail!("required flag \"file\" not set (use --file or --interactive)"),
        },
    };

    let output = if args.no_save {
        None
    } else {
        Some(args.output.clone().unwrap_or_else(|| config.output_path()))
    };

    Ok(RunPlan {
        file,
        options,
        output,
    })
}

/// Handle the run command.
#[cfg(not(tarpaulin_include))]
pub fn handle(args: &RunArgs, config_path: Option<&Path>) -> Result<()> {
    let config = load_config(config_path)?;

    let inputs = if args.interactive {
        let mut form = SetupForm::from_config(&config);
        if let Some(file) = &args.file {
            form = form.with_file(&file.to_string_lossy());
        }
        match run_setup(form)? {
            Some(inputs) => Some(inputs),
            None => {
                info!("Setup cancelled");
                return Ok(());
            }
        }
    } else {
        None
    };

    let plan = plan(args, &config, inputs)?;
    execute(&plan, args.plain || !io::stdout().is_terminal())
}

/// Estimate, save and present the result of `plan`.
#[cfg(not(tarpaulin_include))]
fn execute(plan: &RunPlan, plain: bool) -> Result<()> {
    let text = report::read_text(&plan.file)?;
    let estimate = Estimator::new(plan.options.clone())
        .estimate(&text)
        .context("failed to estimate reading time")?;

    // Saved before the result view so a terminal failure keeps the result
    if let Some(output) = &plan.output {
        let theme = current_theme();
        println!(
            "{} {}",
            theme.primary_text("Saving result to:"),
            theme.accent_text(&output.display().to_string())
        );
        report::save_result(&estimate, output)?;
    }

    if plain {
        print!("{}", format_summary(&estimate, Some(&plan.file)));
    } else {
        run_result_view(&estimate, Some(&plan.file))?;
    }
    Ok(())
}
