//! Query file parsers.
//!
//! Both formats are line-oriented with whitespace-separated tokens.
//!
//! The bit-vector format starts with the initial vector: a length line
//! followed by that many lines holding one `0` or `1` each. Every further
//! line is a query:
//!
//! ```text
//! insert <pos> <bit>
//! delete <pos>
//! flip <pos>
//! rank <bit> <pos>
//! select <bit> <k>
//! ```
//!
//! The BP format has no preamble; every line is a query:
//!
//! ```text
//! deletenode <v>
//! insertchild <v> <i> <k>
//! child <v> <i>
//! subtree_size <v>
//! parent <v>
//! ```

use anyhow::{bail, Context, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// A single bit-vector query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BvQuery {
    Insert { pos: usize, bit: bool },
    Delete { pos: usize },
    Flip { pos: usize },
    Rank { bit: bool, pos: usize },
    Select { bit: bool, k: usize },
}

/// A parsed bit-vector problem: the initial contents and the query list.
#[derive(Debug)]
pub struct BvInstance {
    pub bits: Vec<bool>,
    pub queries: Vec<BvQuery>,
}

/// A single BP tree query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BpQuery {
    DeleteNode { v: usize },
    InsertChild { v: usize, i: usize, k: usize },
    Child { v: usize, i: usize },
    SubtreeSize { v: usize },
    Parent { v: usize },
}

fn parse_bit(token: &str) -> Result<bool> {
    match token {
        "0" => Ok(false),
        "1" => Ok(true),
        other => bail!("expected 0 or 1, got {:?}", other),
    }
}

fn parse_uint(token: &str) -> Result<usize> {
    token
        .parse::<usize>()
        .with_context(|| format!("expected an unsigned integer, got {:?}", token))
}

fn next_token<'a>(tokens: &mut impl Iterator<Item = &'a str>) -> Result<&'a str> {
    tokens.next().context("missing argument")
}

fn parse_bv_query(line: &str) -> Result<BvQuery> {
    let mut tokens = line.split_whitespace();
    let keyword = next_token(&mut tokens)?;
    let query = match keyword {
        "insert" => BvQuery::Insert {
            pos: parse_uint(next_token(&mut tokens)?)?,
            bit: parse_bit(next_token(&mut tokens)?)?,
        },
        "delete" => BvQuery::Delete {
            pos: parse_uint(next_token(&mut tokens)?)?,
        },
        "flip" => BvQuery::Flip {
            pos: parse_uint(next_token(&mut tokens)?)?,
        },
        "rank" => BvQuery::Rank {
            bit: parse_bit(next_token(&mut tokens)?)?,
            pos: parse_uint(next_token(&mut tokens)?)?,
        },
        "select" => BvQuery::Select {
            bit: parse_bit(next_token(&mut tokens)?)?,
            k: parse_uint(next_token(&mut tokens)?)?,
        },
        other => bail!("unknown query keyword {:?}", other),
    };
    if tokens.next().is_some() {
        bail!("trailing tokens after query");
    }
    Ok(query)
}

fn parse_bp_query(line: &str) -> Result<BpQuery> {
    let mut tokens = line.split_whitespace();
    let keyword = next_token(&mut tokens)?;
    let query = match keyword {
        "deletenode" => BpQuery::DeleteNode {
            v: parse_uint(next_token(&mut tokens)?)?,
        },
        "insertchild" => BpQuery::InsertChild {
            v: parse_uint(next_token(&mut tokens)?)?,
            i: parse_uint(next_token(&mut tokens)?)?,
            k: parse_uint(next_token(&mut tokens)?)?,
        },
        "child" => BpQuery::Child {
            v: parse_uint(next_token(&mut tokens)?)?,
            i: parse_uint(next_token(&mut tokens)?)?,
        },
        "subtree_size" => BpQuery::SubtreeSize {
            v: parse_uint(next_token(&mut tokens)?)?,
        },
        "parent" => BpQuery::Parent {
            v: parse_uint(next_token(&mut tokens)?)?,
        },
        other => bail!("unknown query keyword {:?}", other),
    };
    if tokens.next().is_some() {
        bail!("trailing tokens after query");
    }
    Ok(query)
}

/// Parse a bit-vector problem file.
pub fn parse_bv_file(path: &Path) -> Result<BvInstance> {
    let file = File::open(path)
        .with_context(|| format!("could not open input file {}", path.display()))?;
    let mut lines = BufReader::new(file).lines().enumerate();

    let (_, first) = lines.next().context("empty input file")?;
    let first = first.context("could not read input file")?;
    let n = parse_uint(first.trim()).context("invalid initial length on line 1")?;

    let mut bits = Vec::with_capacity(n);
    for _ in 0..n {
        let (idx, line) = lines.next().context("input file ended before the initial bits")?;
        let line = line.context("could not read input file")?;
        let bit = parse_bit(line.trim()).with_context(|| format!("on line {}", idx + 1))?;
        bits.push(bit);
    }

    let mut queries = Vec::new();
    for (idx, line) in lines {
        let line = line.context("could not read input file")?;
        if line.trim().is_empty() {
            continue;
        }
        let query = parse_bv_query(&line).with_context(|| format!("on line {}", idx + 1))?;
        queries.push(query);
    }
    Ok(BvInstance { bits, queries })
}

/// Parse a BP query file.
pub fn parse_bp_file(path: &Path) -> Result<Vec<BpQuery>> {
    let file = File::open(path)
        .with_context(|| format!("could not open input file {}", path.display()))?;
    let mut queries = Vec::new();
    for (idx, line) in BufReader::new(file).lines().enumerate() {
        let line = line.context("could not read input file")?;
        if line.trim().is_empty() {
            continue;
        }
        let query = parse_bp_query(&line).with_context(|| format!("on line {}", idx + 1))?;
        queries.push(query);
    }
    Ok(queries)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bv_queries() {
        assert_eq!(
            parse_bv_query("insert 5 1").unwrap(),
            BvQuery::Insert { pos: 5, bit: true }
        );
        assert_eq!(
            parse_bv_query("delete 12").unwrap(),
            BvQuery::Delete { pos: 12 }
        );
        assert_eq!(parse_bv_query("flip 0").unwrap(), BvQuery::Flip { pos: 0 });
        assert_eq!(
            parse_bv_query("rank 0 100").unwrap(),
            BvQuery::Rank {
                bit: false,
                pos: 100
            }
        );
        assert_eq!(
            parse_bv_query("select 1 7").unwrap(),
            BvQuery::Select { bit: true, k: 7 }
        );
    }

    #[test]
    fn test_parse_bv_query_errors() {
        assert!(parse_bv_query("unknown 1").is_err());
        assert!(parse_bv_query("insert 5").is_err());
        assert!(parse_bv_query("insert 5 2").is_err());
        assert!(parse_bv_query("rank x 1").is_err());
        assert!(parse_bv_query("flip 1 2").is_err());
    }

    #[test]
    fn test_parse_bp_queries() {
        assert_eq!(
            parse_bp_query("deletenode 3").unwrap(),
            BpQuery::DeleteNode { v: 3 }
        );
        assert_eq!(
            parse_bp_query("insertchild 0 1 2").unwrap(),
            BpQuery::InsertChild { v: 0, i: 1, k: 2 }
        );
        assert_eq!(
            parse_bp_query("child 0 2").unwrap(),
            BpQuery::Child { v: 0, i: 2 }
        );
        assert_eq!(
            parse_bp_query("subtree_size 4").unwrap(),
            BpQuery::SubtreeSize { v: 4 }
        );
        assert_eq!(
            parse_bp_query("parent 6").unwrap(),
            BpQuery::Parent { v: 6 }
        );
    }

    #[test]
    fn test_parse_bp_query_errors() {
        assert!(parse_bp_query("insertchild 0 1").is_err());
        assert!(parse_bp_query("grandparent 1").is_err());
        assert!(parse_bp_query("parent -1").is_err());
    }
}
