//! Print raw rand() values for a seed, for diffing against a C program:
//! `srand(seed); for (...) printf("%d\n", rand());`

use gnurandom::GnuRandom;

fn main() {
    let args: Vec<String> = std::env::args().collect();

    let seed: u32 = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(1);
    let count: usize = args.get(2).and_then(|s| s.parse().ok()).unwrap_or(20);

    for value in GnuRandom::with_seed(seed).take(count) {
        println!("{}", value);
    }
}
