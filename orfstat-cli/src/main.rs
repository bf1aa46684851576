use clap::Parser;
use log::{error, info};

use orfstat_core::analysis::{AnalysisConfig, AnalysisReport, Analyzer};
use orfstat_core::error::OrfstatResult;
use orfstat_core::io::fasta::read_fasta_set_from_path;

mod cli;

/// Initializes the logger with verbosity given in `log_max_level`.
fn init_log(log_max_level: usize) {
    stderrlog::new()
        .module(module_path!())
        .quiet(false)
        .verbosity(log_max_level)
        .timestamp(stderrlog::Timestamp::Off)
        .init()
        .unwrap();
}

fn main() {
    let cli = cli::Cli::parse();
    init_log(if cli.verbose { 2 } else { 1 });

    if let Err(err) = run(&cli) {
        error!("{}", err);
        std::process::exit(1);
    }
}

fn run(cli: &cli::Cli) -> OrfstatResult<()> {
    let mut config = AnalysisConfig::default();
    if let Some(target_id) = &cli.target_id {
        config.target_id = target_id.clone();
    }

    let records = read_fasta_set_from_path(&cli.input)?;
    info!("read {} records from {}", records.len(), cli.input.display());

    let analyzer = Analyzer::new(config);
    let report = analyzer.analyze(&records)?;
    print_report(&report, analyzer.config());

    Ok(())
}

fn print_report(report: &AnalysisReport, config: &AnalysisConfig) {
    println!("records: {}", report.record_count);
    println!("longest sequence length: {}", report.longest_seq_len);
    println!("shortest sequence length: {}", report.shortest_seq_len);
    println!(
        "longest ORF in reading frame 2: {}",
        report.longest_orf_frame2
    );
    println!(
        "longest ORF in reading frame 3: {}",
        report.longest_orf_frame3_len
    );
    println!(
        "start of longest ORF in reading frame 3: {}",
        report.longest_orf_frame3_start
    );
    println!(
        "longest ORF in any forward frame: {}",
        report.longest_orf_any_frame
    );
    match report.longest_orf_target {
        Some(len) => println!("longest ORF for {}: {}", config.target_id, len),
        None => println!("longest ORF for {}: not found", config.target_id),
    }
    match report.most_frequent_6mer_count {
        Some(count) => println!("most frequent 6-mer count: {}", count),
        None => println!("most frequent 6-mer count: n/a"),
    }
    match report.distinct_12mers_at_max {
        Some(count) => println!("distinct 12-mers at maximum frequency: {}", count),
        None => println!("distinct 12-mers at maximum frequency: n/a"),
    }
    match &report.top_candidate_7mer {
        Some(kmer) => println!(
            "most frequent candidate 7-mer: {} ({} occurrences)",
            kmer, report.top_candidate_7mer_count
        ),
        None => println!("most frequent candidate 7-mer: none found"),
    }
}
