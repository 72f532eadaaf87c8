use anyhow::Result;
use std::process;

fn main() -> Result<()> {
    vault_keys::util::logging::init();
    let cli = match vault_keys::cli::Cli::try_parse_args(std::env::args_os()) {
        Ok(cli) => cli,
        Err(usage) => {
            eprintln!("{}", usage);
            process::exit(1);
        }
    };
    cli.run()
}
