//! Candidate name sources: list files and exhaustive generation.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

/// The symbols Twitch usernames are generated from, in enumeration order.
pub const ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

/// Resolve a list-file path the way the tool locates its own data files.
///
/// Relative paths are resolved against the directory containing the running
/// executable, so `usernames.txt` sits next to the binary rather than in
/// whatever directory the tool happens to be invoked from. Absolute paths
/// pass through untouched.
#[must_use]
pub fn resolve_list_path(file: &Path) -> PathBuf {
    if file.is_absolute() {
        return file.to_path_buf();
    }
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .map_or_else(|| file.to_path_buf(), |dir| dir.join(file))
}

/// Read candidate names from a line-oriented file.
///
/// Each line becomes one candidate with trailing whitespace stripped, in
/// file order. Empty lines are skipped. Names are not validated and not
/// deduplicated.
///
/// # Errors
///
/// Returns the underlying [`io::Error`] when the file cannot be opened or
/// read.
pub fn read_list(path: &Path) -> io::Result<Vec<String>> {
    let file = File::open(path)?;
    let mut names = Vec::new();
    for line in BufReader::new(file).lines() {
        let line = line?;
        let name = line.trim_end();
        if !name.is_empty() {
            names.push(name.to_owned());
        }
    }
    Ok(names)
}

/// All length-`length` permutations of [`ALPHABET`], lexicographically.
///
/// No symbol repeats within a single candidate, so the sequence covers
/// 36!/(36-L)! names and names like `aa11` are never produced; the full
/// Cartesian power is available from [`cartesian_power`].
#[must_use]
pub fn permutations(length: usize) -> Permutations {
    Permutations::new(length)
}

/// The full `36^length` Cartesian power of [`ALPHABET`], lexicographically.
///
/// Unlike [`permutations`], candidates may repeat symbols.
#[must_use]
pub fn cartesian_power(length: usize) -> CartesianPower {
    CartesianPower::new(length)
}

/// Iterator over repetition-free fixed-length permutations of [`ALPHABET`].
///
/// Yields candidates in the lexicographic order induced by the alphabet;
/// for length 2 that is `ab`, `ac`, ... `a9`, `ba`, `bc`, ...
#[derive(Debug, Clone)]
pub struct Permutations {
    // CPython itertools.permutations stepping: `indices` is a permutation of
    // 0..n whose prefix of length r is the current candidate, `cycles[i]`
    // counts the remaining swaps at position i.
    indices: Vec<usize>,
    cycles: Vec<usize>,
    r: usize,
    started: bool,
    done: bool,
}

impl Permutations {
    fn new(r: usize) -> Self {
        let n = ALPHABET.len();
        Self {
            indices: (0..n).collect(),
            cycles: (0..r.min(n)).map(|i| n - i).collect(),
            r,
            started: false,
            done: r > n,
        }
    }

    fn current(&self) -> String {
        self.indices[..self.r]
            .iter()
            .map(|&i| char::from(ALPHABET[i]))
            .collect()
    }
}

impl Iterator for Permutations {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if self.done {
            return None;
        }
        if !self.started {
            self.started = true;
            return Some(self.current());
        }
        let n = self.indices.len();
        for i in (0..self.r).rev() {
            self.cycles[i] -= 1;
            if self.cycles[i] == 0 {
                self.indices[i..].rotate_left(1);
                self.cycles[i] = n - i;
            } else {
                let j = n - self.cycles[i];
                self.indices.swap(i, j);
                return Some(self.current());
            }
        }
        self.done = true;
        None
    }
}

/// Iterator over the fixed-length Cartesian power of [`ALPHABET`].
#[derive(Debug, Clone)]
pub struct CartesianPower {
    // odometer over alphabet indices, most significant digit first
    digits: Vec<usize>,
    started: bool,
    done: bool,
}

impl CartesianPower {
    fn new(length: usize) -> Self {
        Self {
            digits: vec![0; length],
            started: false,
            done: false,
        }
    }

    fn current(&self) -> String {
        self.digits
            .iter()
            .map(|&i| char::from(ALPHABET[i]))
            .collect()
    }
}

impl Iterator for CartesianPower {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if self.done {
            return None;
        }
        if !self.started {
            self.started = true;
            return Some(self.current());
        }
        for digit in self.digits.iter_mut().rev() {
            if *digit + 1 < ALPHABET.len() {
                *digit += 1;
                return Some(self.current());
            }
            *digit = 0;
        }
        self.done = true;
        None
    }
}
