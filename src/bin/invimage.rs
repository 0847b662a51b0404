use anyhow::Result;

use toolshed::app::logging;
use toolshed::app::services::invert::invert_file;
use toolshed::cli::{InvertArgs, Invocation, parse_invocation};

fn main() -> Result<()> {
    let args = match parse_invocation::<InvertArgs>() {
        Invocation::Run(args) => args,
        Invocation::Usage(usage) => {
            println!("{usage}");
            return Ok(());
        }
    };
    logging::init(&args.log.log_level);

    invert_file(&args.source, &args.dest, args.alpha_policy())?;
    Ok(())
}
