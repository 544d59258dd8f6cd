//! Print the bigrams and trigrams of a greeting

use textngram_core::{NgramSequence, TextEncoding};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let greeting = "こんにちは世界！";
    let utf8 = TextEncoding::for_label("UTF-8")?;

    println!("Bigram");
    let bigram = NgramSequence::decode(greeting.as_bytes(), 2, Some(utf8))?;
    println!("{:#?}", bigram.to_vec());

    println!();

    println!("Trigram");
    let trigram = NgramSequence::decode(greeting.as_bytes(), 3, Some(utf8))?;
    println!("{:#?}", trigram.to_vec());

    Ok(())
}
