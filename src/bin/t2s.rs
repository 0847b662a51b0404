use anyhow::Result;

use toolshed::app::logging;
use toolshed::app::services::t2s::{ZhConverter, convert_file};
use toolshed::cli::{ConvertArgs, Invocation, parse_invocation};

fn main() -> Result<()> {
    let args = match parse_invocation::<ConvertArgs>() {
        Invocation::Run(args) => args,
        Invocation::Usage(usage) => {
            println!("{usage}");
            return Ok(());
        }
    };
    logging::init(&args.log.log_level);

    convert_file(&args.input, &args.output, &ZhConverter::new(args.to))?;
    Ok(())
}
