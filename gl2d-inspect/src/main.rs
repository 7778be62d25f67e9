mod cli;
mod report;

use clap::Parser;
use color_eyre::eyre::eyre;
use gl2d_math::Scalar;

use crate::cli::Cli;

fn main() -> color_eyre::Result<()> {
    // panic hook
    color_eyre::install()?;

    // parse command line arguments
    let cli = Cli::parse();

    // validate CLI arguments
    cli.validate().map_err(|e| eyre!(e))?;

    // print configuration summary
    cli.print_summary();

    if cli.single_precision {
        inspect::<f32>(&cli);
    } else {
        inspect::<f64>(&cli);
    }

    Ok(())
}

fn inspect<T: Scalar>(cli: &Cli) {
    let transform = cli.transform::<T>();
    let matrix = transform.matrix(T::from_f64(cli.width), T::from_f64(cli.height));

    report::print_matrix(&matrix);
    report::print_points(&matrix, &cli.points::<T>());
}
