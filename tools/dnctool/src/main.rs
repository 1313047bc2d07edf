#![allow(clippy::exit)]
#![allow(clippy::print_stdout)]
#![allow(clippy::print_stderr)]

use std::num::NonZeroUsize;

use clap::Parser;

mod hamiltonian;
mod karatsuba;
mod minmax;

#[derive(Parser, Debug)]
#[clap(version)]
enum Args {
    /// Runs the built-in Karatsuba cases and compares them with long multiplication.
    Check,

    /// Multiplies two natural numbers and times Karatsuba against long multiplication.
    Multiply {
        x: String,
        y: String,

        /// Operands with at most this many digits are multiplied directly.
        #[clap(long)]
        base_case_digits: Option<NonZeroUsize>,
    },

    /// Narrates the Karatsuba decomposition of a product step by step.
    Demo {
        x: String,
        y: String,

        /// Deepest recursion level to narrate.
        #[clap(long, default_value_t = 0)]
        depth: usize,
    },

    /// Compares Karatsuba with long multiplication on growing operands.
    Bench(karatsuba::BenchOptions),

    /// Finds the smallest and largest of a list of integers.
    Minmax {
        /// The integers; read from a line of standard input when omitted.
        #[clap(allow_hyphen_values = true)]
        values: Vec<String>,
    },

    /// Searches a graph for a Hamiltonian path.
    Hamiltonian(hamiltonian::Options),
}

fn main() {
    env_logger::init();

    let args = Args::parse();
    let result = match args {
        Args::Check => karatsuba::check(),
        Args::Multiply { x, y, base_case_digits } => karatsuba::multiply(&x, &y, base_case_digits),
        Args::Demo { x, y, depth } => karatsuba::demo(&x, &y, depth),
        Args::Bench(options) => karatsuba::bench(&options),
        Args::Minmax { values } => minmax::main(&values),
        Args::Hamiltonian(options) => hamiltonian::main(options),
    };

    if let Err(error) = result {
        eprintln!("ERROR: {error}");
        std::process::exit(1);
    }
}
