//! Collision buckets for truncated identifiers.

use std::collections::HashMap;

use abapgen_core::suffix_code;

use super::DEFAULT_TRIM_LENGTH;

/// Assigns stable numeric suffixes to identifiers that share a truncated prefix.
///
/// Each bucket is keyed by the first `trim_length` characters of a candidate
/// and lists the distinct full candidates in the order they were first seen.
/// A candidate's position in its bucket is its suffix, so the first one gets
/// `000`, the next distinct one `001`, and repeats always get their original
/// suffix back.
#[derive(Debug, Clone)]
pub struct ShortNameBuckets {
    trim_length: usize,
    buckets: HashMap<String, Vec<String>>,
}

impl ShortNameBuckets {
    pub fn new(trim_length: usize) -> Self {
        Self {
            trim_length,
            buckets: HashMap::new(),
        }
    }

    /// Truncate `name` and append its bucket suffix.
    pub fn resolve(&mut self, name: &str) -> String {
        let key: String = name.chars().take(self.trim_length).collect();
        let bucket = self.buckets.entry(key.clone()).or_default();

        let index = match bucket.iter().position(|seen| seen == name) {
            Some(index) => index,
            None => {
                bucket.push(name.to_string());
                bucket.len() - 1
            }
        };

        format!("{}{}", key, suffix_code(index))
    }

    /// Candidates that collided into the bucket for `key`, in first-seen order.
    pub fn bucket(&self, key: &str) -> Option<&[String]> {
        self.buckets.get(key).map(Vec::as_slice)
    }

    /// Number of distinct buckets.
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }
}

impl Default for ShortNameBuckets {
    fn default() -> Self {
        Self::new(DEFAULT_TRIM_LENGTH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LONG_A: &str = "iv_q_maximum_number_of_results_per_page";
    const LONG_B: &str = "iv_q_maximum_number_of_results_to_skip";

    #[test]
    fn test_first_name_gets_000() {
        let mut buckets = ShortNameBuckets::default();
        assert_eq!(buckets.resolve(LONG_A), "iv_q_maximum_number_of_resu000");
    }

    #[test]
    fn test_distinct_names_get_increasing_suffixes() {
        let mut buckets = ShortNameBuckets::default();
        assert_eq!(buckets.resolve(LONG_A), "iv_q_maximum_number_of_resu000");
        assert_eq!(buckets.resolve(LONG_B), "iv_q_maximum_number_of_resu001");
        assert_eq!(
            buckets.bucket("iv_q_maximum_number_of_resu"),
            Some(&[LONG_A.to_string(), LONG_B.to_string()][..])
        );
    }

    #[test]
    fn test_repeat_lookup_is_stable() {
        let mut buckets = ShortNameBuckets::default();
        buckets.resolve(LONG_A);
        buckets.resolve(LONG_B);

        assert_eq!(buckets.resolve(LONG_A), "iv_q_maximum_number_of_resu000");
        assert_eq!(buckets.resolve(LONG_B), "iv_q_maximum_number_of_resu001");
        assert_eq!(buckets.bucket("iv_q_maximum_number_of_resu").unwrap().len(), 2);
    }

    #[test]
    fn test_fresh_bucket_holds_name_once() {
        let mut buckets = ShortNameBuckets::default();
        buckets.resolve(LONG_A);
        buckets.resolve(LONG_A);
        assert_eq!(buckets.bucket("iv_q_maximum_number_of_resu").unwrap().len(), 1);
    }

    #[test]
    fn test_unrelated_buckets_do_not_interact() {
        let mut buckets = ShortNameBuckets::default();
        buckets.resolve(LONG_A);
        assert_eq!(
            buckets.resolve("ty_completely_different_long_name"),
            "ty_completely_different_lon000"
        );
        assert_eq!(buckets.resolve(LONG_B), "iv_q_maximum_number_of_resu001");
        assert_eq!(buckets.len(), 2);
    }

    #[test]
    fn test_compares_content_not_identity() {
        let mut buckets = ShortNameBuckets::default();
        let owned = String::from(LONG_A);
        let rebuilt = format!("{}{}", "iv_q_maximum_number_of_", "results_per_page");

        assert_eq!(buckets.resolve(&owned), buckets.resolve(&rebuilt));
    }

    #[test]
    fn test_trims_by_chars() {
        let mut buckets = ShortNameBuckets::new(3);
        assert_eq!(buckets.resolve("äöüß"), "äöü000");
    }

    #[test]
    fn test_suffix_widens_past_999() {
        let mut buckets = ShortNameBuckets::new(2);
        for i in 0..1000 {
            buckets.resolve(&format!("ab{i}"));
        }
        assert_eq!(buckets.resolve("ab_last"), "ab1000");
    }
}
