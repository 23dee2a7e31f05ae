use clap::Parser;
use tracing_subscriber::EnvFilter;
use u_tourga::ga::{TourGa, TourGaConfig};
use u_tourga::TourGaError;

/// Evolves a closed tour over random points and prints the best one found.
#[derive(Parser, Debug)]
#[command(name = "tourga")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Points per tour
    #[arg(short, long, default_value_t = 10)]
    nodes: usize,

    /// Population size
    #[arg(short, long, default_value_t = 10)]
    genes: usize,

    /// Mutation gate threshold, out of 100
    #[arg(short, long, default_value_t = 1)]
    mutation: u8,

    /// Generations to run after the reset
    #[arg(short = 'G', long, default_value_t = 100)]
    generations: usize,

    /// Selection wheel ranking rounds, defaults to the number of points
    #[arg(long)]
    ranking_rounds: Option<usize>,

    /// Random seed
    #[arg(short, long)]
    seed: Option<u64>,

    /// Print every tour of the final population
    #[arg(long)]
    show_population: bool,
}

impl Cli {
    fn config(&self) -> TourGaConfig {
        let mut config = TourGaConfig::default()
            .with_node_count(self.nodes)
            .with_gene_count(self.genes)
            .with_mutation_probability(self.mutation);
        if let Some(rounds) = self.ranking_rounds {
            config = config.with_ranking_rounds(rounds);
        }
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        config
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        tracing::error!("{e}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), TourGaError> {
    let mut ga = TourGa::new(cli.config())?;
    for _ in 0..cli.generations {
        ga.operate()?;
    }

    println!("Generation : {}", ga.generation());
    println!("Fitness : {}", ga.optimum_fitness());
    println!("Best : {}", ga.best().label(ga.nodes()));
    for node in ga.nodes() {
        let p = node.position();
        println!("  {} ({}, {})", node.name(), p.x, p.y);
    }

    if cli.show_population {
        println!();
        for (i, tour) in ga.population().iter().enumerate() {
            let mut line = String::new();
            if i == ga.best_gene_index() {
                line.push_str("BEST: ");
            }
            if let Some(swap) = tour.mutation() {
                let name = |pos: usize| ga.nodes()[tour.order()[pos]].name();
                line.push_str(&format!("MUTATION({},{}): ", name(swap.second), name(swap.first)));
            }
            line.push_str(&tour.label(ga.nodes()));
            println!("{line}");
        }
    }

    Ok(())
}
