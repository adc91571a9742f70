pub mod args;
pub mod commands;

use anyhow::Result;
use wide::{Signed, Unsigned};

use args::{Cli, Commands, Width};

/// Binds `$n` (limb count) and `$s` (signedness) to the type selected on the
/// command line, then evaluates `$body`.
macro_rules! with_type {
    ($width:expr, $unsigned:expr, |$n:ident, $s:ident| $body:expr) => {
        match ($width, $unsigned) {
            (Width::W128, false) => {
                const $n: usize = 2;
                type $s = Signed;
                $body
            }
            (Width::W128, true) => {
                const $n: usize = 2;
                type $s = Unsigned;
                $body
            }
            (Width::W256, false) => {
                const $n: usize = 4;
                type $s = Signed;
                $body
            }
            (Width::W256, true) => {
                const $n: usize = 4;
                type $s = Unsigned;
                $body
            }
            (Width::W512, false) => {
                const $n: usize = 8;
                type $s = Signed;
                $body
            }
            (Width::W512, true) => {
                const $n: usize = 8;
                type $s = Unsigned;
                $body
            }
            (Width::W1024, false) => {
                const $n: usize = 16;
                type $s = Signed;
                $body
            }
            (Width::W1024, true) => {
                const $n: usize = 16;
                type $s = Unsigned;
                $body
            }
        }
    };
}

/// Run the parsed command line and return what should go to stdout.
pub fn run(cli: &Cli) -> Result<String> {
    let out = cli.output();
    match &cli.command {
        Commands::Eval { lhs, op, rhs } => with_type!(cli.bits, cli.unsigned, |N, S| {
            commands::eval::eval::<N, S>(lhs, op, rhs, out)
        }),
        Commands::Limits => with_type!(cli.bits, cli.unsigned, |N, S| {
            Ok(commands::limits::limits::<N, S>(out))
        }),
        Commands::Convert { value } => with_type!(cli.bits, cli.unsigned, |N, S| {
            commands::convert::convert::<N, S>(value, out)
        }),
    }
}
