use clap::Parser;
use tube_fare::app::FareCliArguments;

fn main() {
    env_logger::init();
    let args = FareCliArguments::parse();
    match args.run() {
        Ok(_) => log::debug!("finished."),
        Err(e) => {
            log::error!("failed running tube-fare: {e}");
            std::process::exit(1);
        }
    }
}
