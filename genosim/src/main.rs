// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

//! Pairwise genome similarity from the command line.
//!
//! Reads genomes from a FASTA/FASTQ file, sketches the k-mer (or
//! minimizer) set of each one, and prints the estimated Jaccard similarity
//! of every genome pair. With `--exact`, the true set-based similarity and
//! the estimation error are reported alongside.

use std::collections::HashSet;
use std::path::Path;
use std::path::PathBuf;

use anyhow::Context;
use anyhow::Result;
use anyhow::bail;
use clap::Parser;
use genosketch::compare::ErrorSummary;
use genosketch::compare::PairReport;
use genosketch::compare::exact_jaccard;
use genosketch::hash::DEFAULT_UPDATE_SEED;
use genosketch::hll::DEFAULT_PRECISION;
use genosketch::hll::HllSketch;
use genosketch::hll::jaccard;
use genosketch::kmer;
use needletail::parse_fastx_file;

mod report;

#[derive(Debug, Parser)]
#[command(name = "genosim", version, about = "Pairwise genome similarity from sketched k-mer sets")]
struct Args {
    /// FASTA or FASTQ file holding the genomes to compare
    fasta: PathBuf,

    /// k-mer length
    #[arg(short = 'k', long, default_value_t = 20)]
    kmer_len: usize,

    /// Minimizer window length (at least the k-mer length); plain k-mers when absent
    #[arg(short = 'w', long)]
    window: Option<usize>,

    /// Sketch precision; the sketch keeps 2^precision buckets
    #[arg(short = 'p', long, default_value_t = DEFAULT_PRECISION,
          value_parser = clap::value_parser!(u8).range(4..=18))]
    precision: u8,

    /// Hash seed shared by every sketch of the run
    #[arg(long, default_value_t = DEFAULT_UPDATE_SEED)]
    seed: u32,

    /// Only compare the first N genomes of the file
    #[arg(short = 'n', long, value_name = "N")]
    max_genomes: Option<usize>,

    /// Also compute the exact set-based similarity and the estimation error
    #[arg(long)]
    exact: bool,
}

struct Genome {
    label: String,
    sequence: Vec<u8>,
}

fn load_genomes(path: &Path, max_genomes: Option<usize>) -> Result<Vec<Genome>> {
    let mut reader = parse_fastx_file(path)
        .with_context(|| format!("failed to open {}", path.display()))?;

    let mut genomes = Vec::new();
    while let Some(record) = reader.next() {
        let record = record.context("failed to parse sequence record")?;
        let id = String::from_utf8_lossy(record.id());
        let label = match id.split_whitespace().next() {
            Some(token) => token.to_string(),
            None => format!("genome {}", genomes.len() + 1),
        };
        genomes.push(Genome {
            label,
            sequence: record.seq().into_owned(),
        });
        if max_genomes.is_some_and(|cap| genomes.len() >= cap) {
            break;
        }
    }
    Ok(genomes)
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.kmer_len == 0 {
        bail!("k-mer length must be at least 1");
    }
    if let Some(window) = args.window {
        if window < args.kmer_len {
            bail!(
                "minimizer window ({window}) must be at least the k-mer length ({})",
                args.kmer_len
            );
        }
    }

    let genomes = load_genomes(&args.fasta, args.max_genomes)?;
    if genomes.len() < 2 {
        bail!(
            "need at least two sequences to compare, found {}",
            genomes.len()
        );
    }

    let builder = HllSketch::builder().precision(args.precision).seed(args.seed);

    let mut sketches = Vec::with_capacity(genomes.len());
    let mut element_sets: Vec<HashSet<Vec<u8>>> = Vec::with_capacity(genomes.len());
    for genome in &genomes {
        let elements: Box<dyn Iterator<Item = &[u8]> + '_> = match args.window {
            Some(window) => {
                Box::new(kmer::minimizers(&genome.sequence, args.kmer_len, window).into_iter())
            }
            None => Box::new(kmer::kmers(&genome.sequence, args.kmer_len)),
        };

        let mut sketch = builder.build();
        let mut set = HashSet::new();
        for element in elements {
            sketch.update(element);
            if args.exact {
                set.insert(element.to_vec());
            }
        }
        sketches.push(sketch);
        element_sets.push(set);
    }

    match args.window {
        Some(window) => println!(
            "{} genomes, minimizers (k = {}, w = {window})",
            genomes.len(),
            args.kmer_len
        ),
        None => println!("{} genomes, {}-mers", genomes.len(), args.kmer_len),
    }

    let mut reports = Vec::new();
    for i in 0..genomes.len() {
        for j in i + 1..genomes.len() {
            let estimated = jaccard(&sketches[i], &sketches[j])?;
            let mut row = PairReport::new(
                genomes[i].label.as_str(),
                genomes[j].label.as_str(),
                estimated,
            );
            if args.exact {
                row = row.with_exact(exact_jaccard(&element_sets[i], &element_sets[j]));
            }
            reports.push(row);
        }
    }

    report::print_pairs(&reports);
    if let Some(summary) = ErrorSummary::from_reports(&reports) {
        report::print_summary(&summary);
    }
    Ok(())
}
