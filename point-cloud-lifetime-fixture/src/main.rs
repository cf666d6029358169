/// Lifetime fixture generator entry point
use point_cloud_lifetime_fixture::constants::DEFAULT_OUTPUT_PATH;
use point_cloud_lifetime_fixture::{FixtureError, FixtureGenerator, GeneratorConfig};
use std::env;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args: Vec<String> = env::args().collect();
    let (config, output_path) = match args.len() {
        1 => (GeneratorConfig::default(), DEFAULT_OUTPUT_PATH.to_string()),
        4 | 5 => {
            let mut config = GeneratorConfig::from_signed(
                parse_arg::<i64>("frames", &args[1])?,
                parse_arg::<i64>("points_per_frame", &args[2])?,
            )?;
            if let Some(seed) = args.get(4) {
                config = config.with_seed(parse_arg::<u64>("seed", seed)?);
            }
            (config, args[3].clone())
        }
        _ => {
            eprintln!(
                "Usage: {} [<frames> <points_per_frame> <output.ply> [seed]]",
                args[0]
            );
            std::process::exit(1);
        }
    };

    let generator = FixtureGenerator::new(config, &output_path)?;
    let report = generator.generate()?;
    println!(
        "Generated {} with {} points.",
        report.ply_path.display(),
        report.vertex_count
    );

    Ok(())
}

fn parse_arg<T: std::str::FromStr>(name: &str, value: &str) -> Result<T, FixtureError> {
    value.parse().map_err(|_| {
        FixtureError::InvalidConfig(format!("{name} is not a valid number: {value}"))
    })
}
