use rand::Rng;

/// Uniformly pick at most `limit` items, in random order.
///
/// Partial Fisher-Yates: only the first `limit` positions are shuffled, so
/// every `limit`-subset (and every ordering of it) is equally likely.
pub fn sample<T, R: Rng + ?Sized>(mut items: Vec<T>, limit: usize, rng: &mut R) -> Vec<T> {
    let take = limit.min(items.len());

    for i in 0..take {
        let j = rng.gen_range(i..items.len());
        items.swap(i, j);
    }

    items.truncate(take);
    items
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn test_sample_bounded_by_limit() {
        let mut rng = StdRng::seed_from_u64(7);
        let picked = sample((0..20).collect::<Vec<_>>(), 5, &mut rng);

        assert_eq!(picked.len(), 5);
        let unique: HashSet<_> = picked.iter().collect();
        assert_eq!(unique.len(), 5);
    }

    #[test]
    fn test_sample_fewer_than_limit() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut picked = sample(vec![3, 1, 2], 5, &mut rng);

        picked.sort();
        assert_eq!(picked, vec![1, 2, 3]);
    }

    #[test]
    fn test_sample_empty_and_zero() {
        let mut rng = StdRng::seed_from_u64(7);

        assert!(sample(Vec::<u8>::new(), 5, &mut rng).is_empty());
        assert!(sample(vec![1, 2, 3], 0, &mut rng).is_empty());
    }

    #[test]
    fn test_sample_roughly_uniform() {
        // Each of 10 items should land in a 1-of-10 pick about 10% of the time
        let mut rng = StdRng::seed_from_u64(42);
        let mut counts = [0usize; 10];
        let rounds = 20_000;

        for _ in 0..rounds {
            let picked = sample((0..10).collect::<Vec<usize>>(), 1, &mut rng);
            counts[picked[0]] += 1;
        }

        for count in counts {
            let share = count as f64 / rounds as f64;
            assert!((share - 0.1).abs() < 0.02, "share {} too far from 0.1", share);
        }
    }
}
