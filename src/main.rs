use rand::rngs::StdRng;
use rand::SeedableRng;

use asteroids::cli::args;
use asteroids::io::TerminalIO;
use asteroids::models::shipyard::Shipyard;
use asteroids::services::fleet::generate_fleet;
use asteroids::ui::presenters::ShipPresenter;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("asteroids=info"))
        .init();

    let args = args::parse();
    let seed = args.seed.unwrap_or(0);

    let shipyard = match Shipyard::with_minimal_radius(args.minimal_radius) {
        Ok(yard) => yard,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    log::info!("building {} ships with seed {}", args.count, seed);
    let mut rng = StdRng::seed_from_u64(seed);
    let fleet = match generate_fleet(&shipyard, &mut rng, args.count) {
        Ok(fleet) => fleet,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let mut output = TerminalIO;
    ShipPresenter::show_shipyard(&shipyard, &mut output);
    ShipPresenter::show_fleet(&fleet, &mut output);
}
