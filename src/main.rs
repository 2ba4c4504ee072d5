use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};

use format_validator::config::Config;
use format_validator::{LineSource, ReaderSource, Validator};

fn main() -> Result<ExitCode> {
    let config = Config::from_args_and_env()?;

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.log_level.as_str()),
    )
    .init();

    let mut validator = Validator::from_path(&config.config_path).with_context(|| {
        format!(
            "Failed to load configuration from {}",
            config.config_path.display()
        )
    })?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    if config.list_rules {
        for (column, group) in validator.column_validators() {
            let rules: Vec<String> = group.rules().iter().map(ToString::to_string).collect();
            writeln!(out, "column {}: {}", column, rules.join(", "))?;
        }
        out.flush()?;
        return Ok(ExitCode::SUCCESS);
    }

    let invalid_rows = match &config.input {
        Some(path) => {
            let source = ReaderSource::open(path)
                .with_context(|| format!("Failed to open input {}", path.display()))?;
            report(&mut validator, source, config.max_errors, &mut out)?
        }
        None => {
            let source = ReaderSource::new(io::stdin().lock());
            report(&mut validator, source, config.max_errors, &mut out)?
        }
    };

    writeln!(
        out,
        "Checked {} rows, {} invalid.",
        validator.total_rows_checked(),
        invalid_rows
    )?;
    out.flush()?;

    log::info!(
        "Validation finished: {} rows checked, {} invalid",
        validator.total_rows_checked(),
        invalid_rows
    );

    Ok(if invalid_rows == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

/// Print failing rows until the input ends or `max_errors` is reached
fn report<S: LineSource>(
    validator: &mut Validator,
    source: S,
    max_errors: Option<usize>,
    out: &mut impl Write,
) -> Result<usize> {
    let mut invalid_rows = 0;

    for error in validator
        .validate(source)
        .take(max_errors.unwrap_or(usize::MAX))
    {
        let error = error.context("Failed to read input")?;
        writeln!(out, "{}", error)?;
        invalid_rows += 1;
    }

    Ok(invalid_rows)
}
