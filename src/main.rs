use analogy_core::{Mapper, MappingEvent, MappingResult};
use analogy_similarity::{CachedProvider, Domain, LexicalProvider, Linkage, SimilarityMethod};
use clap::Parser;
use std::path::PathBuf;
use tracing::{debug, info, Level};
use tracing_subscriber::FmtSubscriber;

/// Infer entity correspondences between two domains from their relations
#[derive(Parser, Debug)]
#[command(name = "analogy")]
#[command(about = "Analogical structure mapping between two domains", long_about = None)]
struct Args {
    /// Path to a domain JSON file (runs the solar system / atom demo when omitted)
    #[arg(short, long)]
    domain: Option<PathBuf>,

    /// Property clustering distance threshold (overrides the domain file)
    #[arg(short, long)]
    threshold: Option<f32>,

    /// Property similarity: trigram, jaccard or exact
    #[arg(short, long, default_value_t = SimilarityMethod::Trigram)]
    method: SimilarityMethod,

    /// Cluster linkage: average, single or complete
    #[arg(long, default_value_t = Linkage::Average)]
    linkage: Linkage,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,

    /// Log level
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = match args.log_level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting analogy v{}", env!("CARGO_PKG_VERSION"));

    let domain = match &args.domain {
        Some(path) => {
            info!("Domain file: {:?}", path);
            Domain::from_path(path)?
        }
        None => {
            info!("No domain given, running the solar system / atom demo");
            Domain::solar_atom()?
        }
    };

    let mut config = domain.mapping_config();
    if let Some(threshold) = args.threshold {
        config = config.with_distance_threshold(threshold);
    }
    info!(
        "Similarity: {}, linkage: {}, distance threshold: {}",
        args.method, args.linkage, config.distance_threshold
    );

    let table = domain.relation_table()?;
    info!("Loaded {} relations", table.len());
    let provider = CachedProvider::new(
        LexicalProvider::new(table)
            .with_method(args.method)
            .with_linkage(args.linkage),
    );
    let mapper = Mapper::with_config(provider, config)?;

    let result = mapper.map_with_progress(&domain.base, &domain.target, |event| {
        if let MappingEvent::IterationStarted {
            iteration,
            candidates,
        } = event
        {
            debug!("Iteration {}: scoring {} candidates", iteration, candidates);
        }
    })?;

    let stats = mapper.scorer().provider().stats();
    debug!(
        "Cache: {} similarities, {} relations, {} clusterings",
        stats.similarities, stats.edge_props, stats.clusterings
    );

    if args.json {
        println!("{}", result.to_json_pretty()?);
    } else {
        print_result(&result);
    }

    Ok(())
}

fn print_result(result: &MappingResult) {
    println!("Mapping:");
    for line in result.mapping_lines() {
        println!("  {line}");
    }

    println!("Relations:");
    for record in &result.relations {
        println!("  [{}] {}", record.iteration, record);
        for direction in &record.score.directions {
            for edge in &direction.matched {
                println!(
                    "        {} ~ {} ({:.3})",
                    edge.base, edge.target, edge.similarity
                );
            }
        }
    }

    println!("Stopped: {} after {} iterations", result.stop_reason, result.iterations);
}
