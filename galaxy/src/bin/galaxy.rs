use {
    anyhow::{Context, anyhow},
    galaxy::{Session, config::{Config, OutputFormat}},
    serde_json::json,
    std::{io::{self, BufRead, Write}, thread},
    tracing::info,
    tracing_subscriber::EnvFilter,
};

fn main() -> anyhow::Result<()>
{
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let config = Config::from_env()?;
    info!(?config, "Starting interpreter");

    // Deeply nested terms need more stack than the main thread has.
    thread::Builder::new()
        .name("galaxy-session".into())
        .stack_size(config.stack_size)
        .spawn(move || run(&config))
        .context("Cannot start interpreter thread")?
        .join()
        .map_err(|_| anyhow!("Interpreter thread panicked"))?
}

/// Handle every line of standard input in one session.
fn run(config: &Config) -> anyhow::Result<()>
{
    let mut session = Session::with_limits(config.limits);
    if config.prelude {
        session.load_prelude().context("Cannot load prelude")?;
    }

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();

    for line in stdin.lock().lines() {
        let line = line.context("Cannot read standard input")?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let result = session.handle_input(line);

        match config.output {
            OutputFormat::Text =>
                match result {
                    Ok(output) => writeln!(stdout, "{output}")?,
                    Err(err)   => eprintln!("error: {err}"),
                },
            OutputFormat::Json => {
                let record = match result {
                    Ok(output) => json!({"input": line, "output": output}),
                    Err(err)   => json!({"input": line, "error": err.to_string()}),
                };
                writeln!(stdout, "{record}")?;
            },
        }

        stdout.flush()?;
    }

    Ok(())
}
