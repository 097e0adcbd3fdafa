use std::path::{Path, PathBuf};

/// Derive the path for partition `index` of `source`: `{source}_{index}.csv`
///
/// The full source path (extension included) is kept as the prefix, so
/// `coords.csv` partitions to `coords.csv_1.csv`, `coords.csv_2.csv`, ...
/// Re-partitioning an unchanged source overwrites the same paths.
pub fn partition_path(source: &Path, index: usize) -> PathBuf {
    let mut name = source.as_os_str().to_os_string();
    name.push(format!("_{}.csv", index));
    PathBuf::from(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partition_path() {
        let source = Path::new("data/coords.csv");
        assert_eq!(
            partition_path(source, 1),
            PathBuf::from("data/coords.csv_1.csv")
        );
        assert_eq!(
            partition_path(source, 12),
            PathBuf::from("data/coords.csv_12.csv")
        );
    }

    #[test]
    fn test_partition_path_no_extension() {
        let source = Path::new("coords");
        assert_eq!(partition_path(source, 3), PathBuf::from("coords_3.csv"));
    }
}
