use anyhow::Result;
use clap::Parser;
use snakefall::game::GameConfig;
use snakefall::modes::HumanMode;

#[derive(Parser)]
#[command(name = "snakefall")]
#[command(version, about = "Terminal snake with grid-fall deaths")]
struct Cli {
    /// Side length of the square grid (at least 2)
    #[arg(long, default_value = "20", value_parser = clap::value_parser!(u16).range(2..))]
    size: u16,

    /// Simulation ticks per second
    #[arg(long, default_value = "8")]
    tps: u32,

    /// Number of food items on the grid at once
    #[arg(long, default_value = "1")]
    food: usize,

    /// Delay before the automatic restart after death, in milliseconds
    #[arg(long, default_value = "2000")]
    reset_delay: u64,

    /// Seed for food placement (reproducible games)
    #[arg(long)]
    seed: Option<u64>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = GameConfig {
        grid_size: usize::from(cli.size),
        ticks_per_second: cli.tps,
        food_count: cli.food,
        reset_delay_ms: cli.reset_delay,
    };

    let mut human_mode = HumanMode::new(config, cli.seed);
    human_mode.run().await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_degenerate_grid_sizes_are_rejected() {
        assert!(Cli::try_parse_from(["snakefall", "--size", "0"]).is_err());
        assert!(Cli::try_parse_from(["snakefall", "--size", "1"]).is_err());
        assert!(Cli::try_parse_from(["snakefall", "--size", "2"]).is_ok());
    }
}
