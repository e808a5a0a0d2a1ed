//! Flat-file project format.
//!
//! ```text
//! N
//! typeIndex x y w h     (N lines)
//! ```
//!
//! Only the type and rectangle of each block are stored. Drag state belongs to
//! the session and is rebuilt as idle on load.

use crate::block::BlockInstance;
use crate::geometry::BlockRect;
use std::fs::File;
use std::io::{self, BufWriter, Read, Write};
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Name of the project file placed next to the executable.
pub const PROJECT_FILE_NAME: &str = "project.txt";

#[derive(Debug, thiserror::Error)]
pub enum PersistError {
    #[error("cannot open {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("i/o error: {0}")]
    Io(#[from] io::Error),
    #[error("malformed project file at line {line}: {detail}")]
    Malformed { line: usize, detail: String },
}

/// Writes all blocks in z-order. A failure part-way through may leave a truncated file.
pub fn save(path: &Path, blocks: &[BlockInstance]) -> Result<(), PersistError> {
    let file = File::create(path).map_err(|source| PersistError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let mut out = BufWriter::new(file);
    encode(&mut out, blocks)?;
    out.flush()?;
    Ok(())
}

/// Reads a project, rejecting records whose type is not in a catalog of `catalog_len` entries.
pub fn load(path: &Path, catalog_len: usize) -> Result<Vec<BlockInstance>, PersistError> {
    let mut file = File::open(path).map_err(|source| PersistError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let mut text = String::new();
    file.read_to_string(&mut text)?;
    decode(&text, catalog_len)
}

pub fn encode<W: Write>(out: &mut W, blocks: &[BlockInstance]) -> io::Result<()> {
    writeln!(out, "{}", blocks.len())?;
    for b in blocks {
        writeln!(
            out,
            "{} {} {} {} {}",
            b.type_index, b.rect.x, b.rect.y, b.rect.w, b.rect.h
        )?;
    }
    Ok(())
}

/// Parses whitespace-separated tokens; line breaks carry no meaning beyond error positions.
pub fn decode(text: &str, catalog_len: usize) -> Result<Vec<BlockInstance>, PersistError> {
    let mut tokens = Tokens::new(text);
    let count: usize = tokens.next_value("block count")?;

    let mut blocks = Vec::new();
    for _ in 0..count {
        let (line, type_index) = tokens.next_with_line::<usize>("type index")?;
        if type_index >= catalog_len {
            return Err(PersistError::Malformed {
                line,
                detail: format!("unknown block type {type_index}"),
            });
        }
        let x: i32 = tokens.next_value("x")?;
        let y: i32 = tokens.next_value("y")?;
        let w: i32 = tokens.next_value("width")?;
        let h: i32 = tokens.next_value("height")?;
        if w <= 0 || h <= 0 {
            return Err(PersistError::Malformed {
                line,
                detail: format!("non-positive size {w}x{h}"),
            });
        }
        if x.checked_add(w).is_none() || y.checked_add(h).is_none() {
            return Err(PersistError::Malformed {
                line,
                detail: format!("rectangle at ({x}, {y}) size {w}x{h} is out of range"),
            });
        }
        blocks.push(BlockInstance::placed(type_index, BlockRect::new(x, y, w, h)));
    }
    Ok(blocks)
}

struct Tokens<'a> {
    inner: std::vec::IntoIter<(usize, &'a str)>,
    last_line: usize,
}

impl<'a> Tokens<'a> {
    fn new(text: &'a str) -> Self {
        let tokens: Vec<(usize, &str)> = text
            .lines()
            .enumerate()
            .flat_map(|(i, line)| line.split_whitespace().map(move |tok| (i + 1, tok)))
            .collect();
        Self {
            inner: tokens.into_iter(),
            last_line: 1,
        }
    }

    fn next_value<T: FromStr>(&mut self, what: &str) -> Result<T, PersistError> {
        self.next_with_line(what).map(|(_, value)| value)
    }

    fn next_with_line<T: FromStr>(&mut self, what: &str) -> Result<(usize, T), PersistError> {
        let Some((line, token)) = self.inner.next() else {
            return Err(PersistError::Malformed {
                line: self.last_line,
                detail: format!("missing {what}"),
            });
        };
        self.last_line = line;
        token
            .parse()
            .map(|value| (line, value))
            .map_err(|_| PersistError::Malformed {
                line,
                detail: format!("invalid {what} {token:?}"),
            })
    }
}
