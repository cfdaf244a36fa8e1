//! Benchmark runners: build the structure, stream the queries into the
//! output file, report timing and space on stdout.

use anyhow::{Context, Result};
use dynbits::{Config, DynamicBitVec, DynamicBpTree};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::time::Instant;

use crate::queries::{self, BpQuery, BvQuery};

const RESULT_SEP: &str = "\t";

/// Leaf sizing for the bit-vector benchmark (64-bit blocks).
const BV_CONFIG: Config = Config {
    min_leaf_blocks: 32,
    initial_leaf_blocks: 64,
    max_leaf_blocks: 128,
    chunk_blocks: 8,
};

/// Leaf sizing for the BP benchmark; smaller leaves keep the chunk scans
/// short.
const BP_CONFIG: Config = Config {
    min_leaf_blocks: 16,
    initial_leaf_blocks: 32,
    max_leaf_blocks: 64,
    chunk_blocks: 8,
};

fn print_result(algo: &str, time_ms: u128, space_bits: usize, params: &str) {
    println!(
        "RESULT{sep}algo={algo}{sep}name=dynbits{sep}time={time_ms}{sep}space={space_bits}{sep}{params}",
        sep = RESULT_SEP,
    );
}

fn open_output(path: &Path) -> Result<BufWriter<File>> {
    let file = File::create(path)
        .with_context(|| format!("could not open result file {}", path.display()))?;
    Ok(BufWriter::new(file))
}

/// Run the bit-vector benchmark.
pub fn run_bv(input: &Path, output: &Path) -> Result<()> {
    let instance = queries::parse_bv_file(input)?;
    let mut out = open_output(output)?;

    let start = Instant::now();
    let mut bv: DynamicBitVec = DynamicBitVec::from_bits_with_config(instance.bits, BV_CONFIG);
    for query in &instance.queries {
        match *query {
            BvQuery::Insert { pos, bit } => bv.insert(pos, bit),
            BvQuery::Delete { pos } => {
                bv.remove(pos);
            }
            BvQuery::Flip { pos } => bv.flip(pos),
            BvQuery::Rank { bit, pos } => {
                let rank = if bit { bv.rank_one(pos) } else { bv.rank_zero(pos) };
                writeln!(out, "{}", rank)?;
            }
            BvQuery::Select { bit, k } => {
                let pos = if bit { bv.select_one(k) } else { bv.select_zero(k) };
                let pos = pos.with_context(|| format!("select {} {} out of range", bit as u8, k))?;
                writeln!(out, "{}", pos)?;
            }
        }
    }
    out.flush().context("could not write result file")?;
    let elapsed = start.elapsed().as_millis();

    let params = format!(
        "param_block_bits=64{sep}param_min_leaf={}{sep}param_initial_leaf={}{sep}param_max_leaf={}",
        BV_CONFIG.min_leaf_blocks,
        BV_CONFIG.initial_leaf_blocks,
        BV_CONFIG.max_leaf_blocks,
        sep = RESULT_SEP,
    );
    print_result("bv", elapsed, bv.space_bits(), &params);
    Ok(())
}

/// Run the BP tree benchmark. After all queries, the pre-order child-count
/// listing is appended to the output file.
pub fn run_bp(input: &Path, output: &Path) -> Result<()> {
    let queries = queries::parse_bp_file(input)?;
    let mut out = open_output(output)?;

    let start = Instant::now();
    let mut tree: DynamicBpTree = DynamicBpTree::with_config(BP_CONFIG);
    for query in &queries {
        match *query {
            BpQuery::DeleteNode { v } => tree.delete_node(v),
            BpQuery::InsertChild { v, i, k } => tree.insert_child(v, i, k),
            BpQuery::Child { v, i } => {
                let child = tree
                    .nth_child(v, i)
                    .with_context(|| format!("node {} has no child {}", v, i))?;
                writeln!(out, "{}", child)?;
            }
            BpQuery::SubtreeSize { v } => writeln!(out, "{}", tree.subtree_size(v))?,
            BpQuery::Parent { v } => {
                let parent = tree
                    .parent(v)
                    .with_context(|| format!("node {} has no parent", v))?;
                writeln!(out, "{}", parent)?;
            }
        }
    }
    for degree in tree.pre_order_degrees() {
        writeln!(out, "{}", degree)?;
    }
    out.flush().context("could not write result file")?;
    let elapsed = start.elapsed().as_millis();

    let params = format!(
        "param_block_bits=64{sep}param_min_leaf={}{sep}param_initial_leaf={}{sep}param_max_leaf={}{sep}param_chunk_size={}",
        BP_CONFIG.min_leaf_blocks,
        BP_CONFIG.initial_leaf_blocks,
        BP_CONFIG.max_leaf_blocks,
        BP_CONFIG.chunk_blocks,
        sep = RESULT_SEP,
    );
    print_result("bp", elapsed, tree.space_bits(), &params);
    Ok(())
}
