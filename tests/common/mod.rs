use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::fs::File;
use std::io::Error;
use std::path::Path;

pub const LEGAL_COINS: [u32; 3] = [5, 10, 25];

/// Random legal coins, reproducible from `seed`.
pub fn random_coins(seed: u64, count: usize) -> Vec<u32> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| *LEGAL_COINS.choose(&mut rng).unwrap())
        .collect()
}

pub struct Session {
    /// Event rows written, excluding the header.
    pub rows: usize,
    /// Cents paid by purchases, i.e. what the final `empty` must report.
    pub till: u64,
}

/// Writes a session of `transactions` random transactions, each a few coins
/// followed by a purchase or a cancel, and a final till collection.
pub fn generate_session_csv(path: &Path, seed: u64, transactions: usize) -> Result<Session, Error> {
    let file = File::create(path)?;
    let mut wtr = csv::WriterBuilder::new().from_writer(file);
    let mut rng = StdRng::seed_from_u64(seed);
    let mut rows = 0;
    let mut till = 0;

    wtr.write_record(["action", "coin"])?;

    for _ in 0..transactions {
        let coins = rng.gen_range(1..=6);
        let mut inserted = 0;
        for _ in 0..coins {
            let coin = LEGAL_COINS.choose(&mut rng).unwrap();
            wtr.write_record(["insert", &coin.to_string()])?;
            inserted += u64::from(*coin);
            rows += 1;
        }
        if rng.gen_bool(0.7) {
            wtr.write_record(["purchase", ""])?;
            till += inserted;
        } else {
            wtr.write_record(["cancel", ""])?;
        }
        rows += 1;
    }

    wtr.write_record(["empty", ""])?;
    rows += 1;

    wtr.flush()?;
    Ok(Session { rows, till })
}
