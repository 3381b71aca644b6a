use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "quot")]
#[command(about = "Simple divide utility (with tests)", long_about = None)]
pub struct Cli {
    /// Numerator (a)
    #[arg(long, allow_negative_numbers = true)]
    pub a: Option<f64>,

    /// Denominator (b)
    #[arg(long, allow_negative_numbers = true)]
    pub b: Option<f64>,

    /// Run the built-in self-tests instead of dividing
    #[arg(long)]
    pub test: bool,
}
