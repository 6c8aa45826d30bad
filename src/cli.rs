use clap::Parser;

use crate::config::FrontierOrderSetting;

#[derive(Parser, Debug)]
#[command(version)]
pub struct ProgramArguments {
    #[arg(
        short,
        long,
        help = "file with one command per line",
        default_value = "commands.txt"
    )]
    pub commands: String,

    #[arg(
        short,
        long,
        help = "file receiving the command results and timings",
        default_value = "output.txt"
    )]
    pub output: String,

    #[arg(long, help = "TOML configuration file")]
    pub config: Option<String>,

    #[arg(long, help = "number of vertices of the graph before the first BUILD")]
    pub initial_vertices: Option<usize>,

    #[arg(long, help = "largest vertex count a BUILD may create")]
    pub max_vertices: Option<usize>,

    #[arg(long, value_enum, help = "extraction order of the shortest path frontier")]
    pub frontier_order: Option<FrontierOrderSetting>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        ProgramArguments::command().debug_assert()
    }

    #[test]
    fn defaults_match_the_classic_file_names() {
        let args = ProgramArguments::parse_from(["graphcmd"]);
        assert_eq!(args.commands, "commands.txt");
        assert_eq!(args.output, "output.txt");
        assert!(args.config.is_none());
        assert!(args.frontier_order.is_none());
        assert!(args.max_vertices.is_none());
    }

    #[test]
    fn frontier_order_is_parsed() {
        let args = ProgramArguments::parse_from([
            "graphcmd",
            "--frontier-order",
            "descending",
            "--initial-vertices",
            "4",
            "--max-vertices",
            "100",
        ]);
        assert_eq!(args.frontier_order, Some(FrontierOrderSetting::Descending));
        assert_eq!(args.initial_vertices, Some(4));
        assert_eq!(args.max_vertices, Some(100));
    }
}
