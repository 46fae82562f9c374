// file_list.rs
use std::path::PathBuf;

/// Ordered list of input files waiting for conversion. Paths stay in the
/// order they were added; a path is never held twice.
#[derive(Default)]
pub struct FileList {
    paths: Vec<PathBuf>,
}

pub struct ListSummary {
    pub count: usize,
    pub total_size_mb: f64,
}

impl FileList {
    /// Appends every path not already present, keeping input order.
    /// Returns how many were actually appended.
    pub fn add(&mut self, paths: impl IntoIterator<Item = PathBuf>) -> usize {
        let before = self.paths.len();
        for path in paths {
            if !self.paths.contains(&path) {
                self.paths.push(path);
            }
        }
        self.paths.len() - before
    }

    /// Removes the entries at the given positions. Indices are removed in
    /// descending order so earlier removals cannot shift later ones.
    /// Callers only pass indices of rows currently on screen.
    pub fn remove(&mut self, indices: &[usize]) {
        let mut sorted: Vec<usize> = indices.to_vec();
        sorted.sort_unstable_by(|a, b| b.cmp(a));
        sorted.dedup();
        for index in sorted {
            self.paths.remove(index);
        }
    }

    pub fn clear(&mut self) {
        self.paths.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    pub fn paths(&self) -> &[PathBuf] {
        &self.paths
    }

    /// Count and on-disk size of the current list. Sizes are re-stat'ed on
    /// every call; entries that no longer exist contribute zero bytes.
    pub fn summary(&self) -> ListSummary {
        let total_bytes: u64 = self
            .paths
            .iter()
            .filter_map(|path| std::fs::metadata(path).ok())
            .map(|metadata| metadata.len())
            .sum();
        ListSummary {
            count: self.paths.len(),
            total_size_mb: total_bytes as f64 / (1024.0 * 1024.0),
        }
    }
}
