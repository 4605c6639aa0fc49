use rand::Rng;

use super::types::DiceFamily;

/// Draw `count` faces from `family`, with replacement.
///
/// Each face in the family's list is equally likely, so duplicated values are
/// proportionally more likely. Callers always roll at least one die.
pub fn draw(family: DiceFamily, count: u32, rng: &mut impl Rng) -> Vec<i32> {
    let faces = family.faces();
    (0..count)
        .map(|_| faces[rng.gen_range(0..faces.len())])
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn create_test_rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(12345)
    }

    #[test]
    fn test_draw_returns_requested_count() {
        let mut rng = create_test_rng();
        for count in 1..=5 {
            assert_eq!(draw(DiceFamily::Red, count, &mut rng).len(), count as usize);
        }
    }

    #[test]
    fn test_draw_only_yields_family_faces() {
        let mut rng = create_test_rng();
        for _ in 0..200 {
            for face in draw(DiceFamily::Black, 3, &mut rng) {
                assert!(DiceFamily::Black.faces().contains(&face));
            }
        }
    }

    #[test]
    fn test_draw_is_deterministic_for_seed() {
        let mut rng1 = ChaCha8Rng::seed_from_u64(99999);
        let mut rng2 = ChaCha8Rng::seed_from_u64(99999);
        assert_eq!(
            draw(DiceFamily::Red, 4, &mut rng1),
            draw(DiceFamily::Red, 4, &mut rng2)
        );
    }

    #[test]
    fn test_black_duplicates_are_weighted() {
        let mut rng = create_test_rng();
        let rolls = draw(DiceFamily::Black, 60_000, &mut rng);
        let sixes = rolls.iter().filter(|&&f| f == 6).count() as f64;
        let eights = rolls.iter().filter(|&&f| f == 8).count() as f64;

        // 6 appears twice in the family, 8 once.
        let ratio = sixes / eights;
        assert!((1.8..2.2).contains(&ratio), "ratio was {ratio}");
    }
}
