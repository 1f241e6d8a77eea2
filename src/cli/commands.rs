//! CLI command implementations

use anyhow::{bail, Context, Result};
use colored::Colorize;
use std::path::{Path, PathBuf};

use crate::corpus;
use crate::dictionary::trie::FuzzyTrie;
use crate::distance::standard_distance;

use super::args::Commands;
use super::config::PersistentConfig;

/// Execute a CLI command
pub fn execute(command: Commands, config_path: Option<&Path>) -> Result<()> {
    let config = PersistentConfig::load_from(config_path)?;

    match command {
        Commands::Query {
            terms,
            dicts,
            max_distance,
            algorithm,
            show_distances,
            limit,
        } => {
            let cli = PersistentConfig {
                dictionaries: dicts,
                max_distance,
                algorithm,
                show_distances: show_distances.then_some(true),
                limit,
            };
            cmd_query(&terms, &config.merge_with_cli(&cli))
        }
        Commands::Contains { terms, dicts } => {
            let trie = load_dictionaries(&resolve_dicts(dicts, &config))?;
            cmd_contains(&trie, &terms);
            Ok(())
        }
        Commands::Distance { source, target } => {
            println!("{}", standard_distance(&source, &target));
            Ok(())
        }
        Commands::Info { dicts } => cmd_info(&resolve_dicts(dicts, &config)),
    }
}

/// Corpus files named on the command line, or the configured ones.
fn resolve_dicts(dicts: Vec<PathBuf>, config: &PersistentConfig) -> Vec<PathBuf> {
    if dicts.is_empty() {
        config.dictionaries.clone()
    } else {
        dicts
    }
}

/// Build one index from all corpus files.
pub fn load_dictionaries(paths: &[PathBuf]) -> Result<FuzzyTrie> {
    if paths.is_empty() {
        bail!("No dictionary given. Pass --dict <FILE> or set \"dictionaries\" in the config file.");
    }

    let mut trie = FuzzyTrie::new();
    for path in paths {
        let stats = corpus::load_path(&mut trie, path)
            .with_context(|| format!("Failed to load dictionary: {}", path.display()))?;
        tracing::info!(
            path = %path.display(),
            inserted = stats.inserted,
            duplicates = stats.duplicates,
            "dictionary loaded"
        );
    }
    Ok(trie)
}

/// Query command
fn cmd_query(terms: &[String], config: &PersistentConfig) -> Result<()> {
    let trie = load_dictionaries(&config.dictionaries)?;
    let max_distance = config.max_distance();
    let algorithm = config.algorithm();

    for (i, term) in terms.iter().enumerate() {
        if i > 0 {
            println!();
        }
        println!(
            "{} {} (max distance {})",
            "Query:".bold(),
            term.cyan(),
            max_distance
        );

        let mut results = crate::search::into_candidates(trie.fuzzy_match_with(
            term,
            max_distance,
            algorithm,
        ));
        if let Some(limit) = config.limit {
            results.truncate(limit);
        }

        if results.is_empty() {
            println!("{}", "No matches found".yellow());
            continue;
        }
        for (rank, candidate) in results.iter().enumerate() {
            if config.show_distances() {
                println!(
                    "   {}. {} (d={})",
                    rank + 1,
                    candidate.term.green(),
                    candidate.distance
                );
            } else {
                println!("   {}. {}", rank + 1, candidate.term.green());
            }
        }
        println!("{} match(es) found", results.len());
    }

    Ok(())
}

/// Contains command
fn cmd_contains(trie: &FuzzyTrie, terms: &[String]) {
    for term in terms {
        if trie.contains(term) {
            println!("{} {}", "✓".green(), term);
        } else {
            println!("{} {}", "✗".red(), term);
        }
    }
}

/// Info command
fn cmd_info(dicts: &[PathBuf]) -> Result<()> {
    let trie = load_dictionaries(dicts)?;

    println!("{}", "Index Information".bold().underline());
    println!();
    for path in dicts {
        println!("  Source:      {}", path.display().to_string().cyan());
    }
    println!("  Terms:       {}", trie.len().to_string().green());
    println!("  Nodes:       {}", trie.node_count().to_string().green());
    println!("  Longest:     {}", trie.max_term_length().to_string().green());
    if !trie.is_empty() {
        let ratio = trie.node_count() as f64 / trie.len() as f64;
        println!("  Nodes/term:  {:.2}", ratio);
    }

    Ok(())
}
