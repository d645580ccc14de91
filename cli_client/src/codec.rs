//! Packing text into 16-bit blocks: two 8-bit character codes per block.

use num_bigint::BigUint;
use num_traits::ToPrimitive;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    #[error("character {0:?} does not fit into 8 bits")]
    NonByteChar(char),
    #[error("block {0} does not fit into 16 bits")]
    BlockTooLarge(BigUint),
}

/// Encodes text as 16-bit blocks; an odd trailing character is padded with a zero byte.
pub fn encode_text(text: &str) -> Result<Vec<BigUint>, CodecError> {
    let codes = text
        .chars()
        .map(|ch| u8::try_from(ch).map_err(|_| CodecError::NonByteChar(ch)))
        .collect::<Result<Vec<u8>, _>>()?;

    Ok(codes
        .chunks(2)
        .map(|pair| {
            let high = u16::from(pair[0]);
            let low = u16::from(pair.get(1).copied().unwrap_or(0));
            BigUint::from(high << 8 | low)
        })
        .collect())
}

/// Decodes blocks produced by [`encode_text`], dropping the zero padding byte.
pub fn decode_blocks(blocks: &[BigUint]) -> Result<String, CodecError> {
    let mut text = String::with_capacity(blocks.len() * 2);
    for block in blocks {
        let value = block
            .to_u16()
            .ok_or_else(|| CodecError::BlockTooLarge(block.clone()))?;
        text.push(char::from((value >> 8) as u8));
        text.push(char::from((value & 0xff) as u8));
    }

    if text.ends_with('\0') {
        text.pop();
    }
    Ok(text)
}
