use huffcode::{display_bits, encode_with_huffman, EncodeError};

fn main() -> Result<(), EncodeError> {
    let text = "Batatinha quando nasce espalha ramas pelo chao";

    // The encoder takes its input as-is; fold case and drop whitespace here.
    let normalized: String = text
        .to_lowercase()
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect();

    let encoded = encode_with_huffman(&normalized)?;
    println!("Huffman-encoded text: {}", display_bits(&encoded));

    Ok(())
}
