mod commands;
mod terminal;

use bandmatch_common::config::Config;
use bandmatch_core::User;
use commands::{CommandLine, check};
use terminal::{logging, print};

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    let cfg = Config {
        quiet: commands.quiet,
        verbose: commands.verbose,
    };

    logging::init_logging(&cfg)?;

    print::banner(cfg.quiet);

    let user = User::new(commands.name, commands.favorite_band);
    check::check(&user, &commands.bands, &cfg);

    print::end_of_program(cfg.quiet);
    Ok(())
}
