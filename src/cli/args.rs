use crate::models::constants::DEFAULT_MINIMAL_RADIUS;

pub const DEFAULT_FLEET_SIZE: usize = 5;

const USAGE: &str = "\
Usage: asteroids [OPTIONS]

Options:
  -s, --seed <INT>            Seed for the random number generator
  -n, --count <INT>           Number of ships to build [default: 5]
  -r, --minimal-radius <NUM>  Minimal ship radius [default: 10]
  -h, --help                  Print help";

#[derive(Debug, Clone, PartialEq)]
pub struct Args {
    pub seed: Option<u64>,
    pub count: usize,
    pub minimal_radius: f64,
    pub help: bool,
}

impl Default for Args {
    fn default() -> Self {
        Args {
            seed: None,
            count: DEFAULT_FLEET_SIZE,
            minimal_radius: DEFAULT_MINIMAL_RADIUS,
            help: false,
        }
    }
}

/// Parse the process arguments, exiting with a message on bad input.
pub fn parse() -> Args {
    match parse_from(std::env::args().skip(1)) {
        Ok(args) if args.help => {
            println!("{}", USAGE);
            std::process::exit(0);
        }
        Ok(args) => args,
        Err(msg) => {
            eprintln!("Error: {}", msg);
            eprintln!();
            eprintln!("{}", USAGE);
            std::process::exit(1);
        }
    }
}

pub fn parse_from<I>(argv: I) -> Result<Args, String>
where
    I: IntoIterator<Item = String>,
{
    let mut args = Args::default();
    let mut iter = argv.into_iter();

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--seed" | "-s" => {
                let val = value_for(&arg, iter.next())?;
                args.seed = Some(
                    val.parse::<u64>()
                        .map_err(|_| format!("seed must be a valid integer, got {}", val))?,
                );
            }
            "--count" | "-n" => {
                let val = value_for(&arg, iter.next())?;
                args.count = val
                    .parse::<usize>()
                    .map_err(|_| format!("count must be a valid integer, got {}", val))?;
            }
            "--minimal-radius" | "-r" => {
                let val = value_for(&arg, iter.next())?;
                args.minimal_radius = val
                    .parse::<f64>()
                    .map_err(|_| format!("minimal radius must be a number, got {}", val))?;
            }
            "--help" | "-h" => args.help = true,
            other => return Err(format!("unknown argument: {}", other)),
        }
    }

    Ok(args)
}

fn value_for(flag: &str, value: Option<String>) -> Result<String, String> {
    value.ok_or_else(|| format!("{} requires a value", flag))
}
