use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "wide-calc")]
#[command(about = "Fixed-width wide integer calculator", long_about = None)]
pub struct Cli {
    /// Integer width in bits
    #[arg(long, value_enum, default_value = "256", global = true)]
    pub bits: Width,
    /// Use the unsigned type instead of the signed one
    #[arg(long, global = true)]
    pub unsigned: bool,
    /// Print integer results in hex (two's complement)
    #[arg(long, global = true)]
    pub hex: bool,
    /// Print results as a JSON object
    #[arg(long, global = true)]
    pub json: bool,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Width {
    #[value(name = "128")]
    W128,
    #[value(name = "256")]
    W256,
    #[value(name = "512")]
    W512,
    #[value(name = "1024")]
    W1024,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Evaluate `<lhs> <op> <rhs>`
    Eval {
        /// Left operand (decimal, or 0x hex)
        #[arg(allow_hyphen_values = true)]
        lhs: String,
        /// One of + - * / % & | ^ << >> == != < <= > >=
        op: String,
        /// Right operand (decimal, or 0x hex; shift count for << and >>)
        #[arg(allow_hyphen_values = true)]
        rhs: String,
    },
    /// Print MIN, MAX and the bit width of the selected type
    Limits,
    /// Show a value in decimal, hex, f64 and its low 64 bits
    Convert {
        #[arg(allow_hyphen_values = true)]
        value: String,
    },
}

/// Output settings shared by every command.
#[derive(Clone, Copy, Debug, Default)]
pub struct Output {
    pub hex: bool,
    pub json: bool,
}

impl Cli {
    pub fn output(&self) -> Output {
        Output {
            hex: self.hex,
            json: self.json,
        }
    }
}
