use rand::Rng;

/// Uniform in-place Fisher-Yates shuffle: every permutation is equally likely.
pub fn shuffle<T, R: Rng>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.gen_range(0..=i);
        items.swap(i, j);
    }
}
