//! Walk a bigram sequence with its offsets

use textngram_core::NgramSequence;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let bigram = NgramSequence::new("こんにちは世界！", 2)?;

    for (offset, window) in bigram.iter_indexed() {
        println!("{offset} : {window}");
    }

    Ok(())
}
