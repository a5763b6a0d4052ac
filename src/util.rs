//! Sequence padding helpers.

/// Pad (or truncate) `sequence` on the right to exactly `desired_length`.
///
/// Missing positions are filled with `default`. Callers that must never drop
/// elements check `desired_length >= sequence.len()` first.
pub fn pad_sequence_to_length<T: Clone>(sequence: &[T], desired_length: usize, default: T) -> Vec<T> {
    let mut padded: Vec<T> = sequence.iter().take(desired_length).cloned().collect();
    padded.resize(desired_length, default);
    padded
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pad_extends_with_default() {
        assert_eq!(pad_sequence_to_length(&[1, 2, 3], 5, 0), vec![1, 2, 3, 0, 0]);
    }

    #[test]
    fn test_pad_exact_length_unchanged() {
        assert_eq!(pad_sequence_to_length(&[4, 5], 2, 0), vec![4, 5]);
    }

    #[test]
    fn test_pad_truncates_longer_input() {
        assert_eq!(pad_sequence_to_length(&[1, 2, 3, 4], 2, 0), vec![1, 2]);
    }

    #[test]
    fn test_pad_empty_input() {
        assert_eq!(pad_sequence_to_length::<usize>(&[], 3, 0), vec![0, 0, 0]);
        assert!(pad_sequence_to_length::<usize>(&[], 0, 0).is_empty());
    }
}

#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_pad_has_desired_length(seq in proptest::collection::vec(0usize..100, 0..20), len in 0usize..40) {
            prop_assert_eq!(pad_sequence_to_length(&seq, len, 0).len(), len);
        }

        #[test]
        fn prop_pad_preserves_prefix(seq in proptest::collection::vec(1usize..100, 0..20), extra in 0usize..20) {
            let len = seq.len() + extra;
            let padded = pad_sequence_to_length(&seq, len, 0);
            prop_assert_eq!(&padded[..seq.len()], &seq[..]);
            prop_assert!(padded[seq.len()..].iter().all(|&x| x == 0));
        }
    }
}
