use crate::driver::Driver;

mod cli_args;
mod console;
mod driver;
mod logger;

fn main() {
    let args = cli_args::parse();
    logger::init(args.verbose);

    if let Err(e) = Driver::new(args).run() {
        log::error!("{e}");
        std::process::exit(1);
    }
}
