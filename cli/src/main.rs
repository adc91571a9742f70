use clap::Parser;

use wide_calc::args::Cli;

fn main() {
    let cli = Cli::parse();

    match wide_calc::run(&cli) {
        Ok(text) => println!("{text}"),
        Err(err) => {
            eprintln!("error: {err:#}");
            std::process::exit(1);
        }
    }
}
