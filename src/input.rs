//! Weighted key listings
//!
//! One `<key> <probability>` pair per line. The probability is the last
//! whitespace-separated field, so keys may contain spaces. Blank lines and
//! lines starting with `#` are skipped.

use anyhow::{anyhow, Context, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Keys paired with their access probabilities, in listing order
#[derive(Debug, Clone, PartialEq)]
pub struct WeightedKeys {
    /// Keys as written
    pub keys: Vec<String>,

    /// Probability per key
    pub probabilities: Vec<f64>,
}

impl WeightedKeys {
    /// Four-word example: Amor, Carro, Xilofone, Zebra
    pub fn demo() -> Self {
        Self {
            keys: ["Amor", "Carro", "Xilofone", "Zebra"]
                .iter()
                .map(|key| key.to_string())
                .collect(),
            probabilities: vec![0.40, 0.30, 0.10, 0.20],
        }
    }

    /// Parse a listing from any buffered reader
    pub fn parse<R: BufRead>(reader: R) -> Result<Self> {
        let mut keys = Vec::new();
        let mut probabilities = Vec::new();

        for (line_no, line) in reader.lines().enumerate() {
            let line = line?;
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }

            let (key, value) = trimmed
                .rsplit_once(char::is_whitespace)
                .ok_or_else(|| anyhow!("missing probability on line {}", line_no + 1))?;

            let probability: f64 = value.parse().with_context(|| {
                format!("invalid probability '{}' on line {}", value, line_no + 1)
            })?;

            keys.push(key.trim_end().to_string());
            probabilities.push(probability);
        }

        Ok(Self {
            keys,
            probabilities,
        })
    }

    /// Parse a listing file
    pub fn from_path(path: &Path) -> Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("failed to open key listing {}", path.display()))?;
        Self::parse(BufReader::new(file))
            .with_context(|| format!("failed to parse key listing {}", path.display()))
    }

    /// Sort keys ascending, carrying each probability along
    pub fn sorted(self) -> Self {
        let mut pairs: Vec<(String, f64)> =
            self.keys.into_iter().zip(self.probabilities).collect();
        pairs.sort_by(|a, b| a.0.cmp(&b.0));
        let (keys, probabilities) = pairs.into_iter().unzip();
        Self {
            keys,
            probabilities,
        }
    }

    /// Number of keys
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// No keys parsed
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_comments_and_spaced_keys() {
        let listing = "# words\n\nAmor 0.4\nice cream\t0.25\n  Zebra   0.35  \n";
        let parsed = WeightedKeys::parse(listing.as_bytes()).unwrap();
        assert_eq!(parsed.keys, ["Amor", "ice cream", "Zebra"]);
        assert_eq!(parsed.probabilities, [0.4, 0.25, 0.35]);
    }

    #[test]
    fn reports_line_of_bad_probability() {
        let err = WeightedKeys::parse("a 0.5\nb lots\n".as_bytes()).unwrap_err();
        assert_eq!(err.to_string(), "invalid probability 'lots' on line 2");
    }

    #[test]
    fn key_without_probability_is_rejected() {
        let err = WeightedKeys::parse("lonely\n".as_bytes()).unwrap_err();
        assert_eq!(err.to_string(), "missing probability on line 1");
    }

    #[test]
    fn sorting_carries_probabilities() {
        let listing = WeightedKeys {
            keys: vec!["b".into(), "c".into(), "a".into()],
            probabilities: vec![0.2, 0.3, 0.5],
        };
        let sorted = listing.sorted();
        assert_eq!(sorted.keys, ["a", "b", "c"]);
        assert_eq!(sorted.probabilities, [0.5, 0.2, 0.3]);
        assert_eq!(sorted.len(), 3);
    }

    #[test]
    fn demo_is_sorted() {
        let demo = WeightedKeys::demo();
        assert_eq!(demo.clone().sorted(), demo);
    }
}
