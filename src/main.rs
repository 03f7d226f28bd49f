mod cli;
mod jq_exec;

use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // logs go to stderr so stdout stays pipeable JSON
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let command_line_interface = cli::CommandLineInterface::load();
    command_line_interface.run()
}
