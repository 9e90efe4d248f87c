// DER encoding/parsing of RSA keys and PEM framing
// Keys are a bare ASN.1 SEQUENCE of INTEGERs: (n, e) for public keys,
// (version, n, e, d) for private keys

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use num_bigint::BigUint;

use crate::error::{RsaError, RsaResult};

const SEQUENCE_TAG: u8 = 0x30;
const INTEGER_TAG: u8 = 0x02;

const PUBLIC_KEY_LABEL: &str = "PUBLIC KEY";
const PRIVATE_KEY_LABEL: &str = "PRIVATE KEY";

/// Fields of a parsed public key, as lowercase hex strings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicKeyParts {
    pub n: String,
    pub e: String,
}

/// Fields of a parsed private key, as lowercase hex strings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrivateKeyParts {
    pub n: String,
    pub e: String,
    pub d: String,
}

/// Encode an unsigned integer as ASN.1 INTEGER content bytes.
///
/// Minimal big-endian form, with a leading 0x00 added whenever the high
/// bit of the first byte is set (which would otherwise read as negative
/// under DER's two's-complement convention).
pub fn encode_integer(value: &BigUint) -> Vec<u8> {
    let mut bytes = value.to_bytes_be();
    if bytes[0] & 0x80 != 0 {
        bytes.insert(0, 0x00);
    }
    bytes
}

// DER length octets: short form below 128, long form 0x81/0x82 above.
// Two length bytes cover any key this crate can realistically produce.
fn push_length(out: &mut Vec<u8>, len: usize) -> RsaResult<()> {
    if len < 0x80 {
        out.push(len as u8);
    } else if len <= 0xFF {
        out.push(0x81);
        out.push(len as u8);
    } else if len <= 0xFFFF {
        out.push(0x82);
        out.push((len >> 8) as u8);
        out.push(len as u8);
    } else {
        return Err(RsaError::MalformedInput("DER value too large to encode"));
    }
    Ok(())
}

fn push_integer(out: &mut Vec<u8>, value: &BigUint) -> RsaResult<()> {
    let bytes = encode_integer(value);
    out.push(INTEGER_TAG);
    push_length(out, bytes.len())?;
    out.extend_from_slice(&bytes);
    Ok(())
}

/// Build the DER SEQUENCE for a public key: INTEGER n, INTEGER e
pub fn public_key_der(e: &BigUint, n: &BigUint) -> RsaResult<Vec<u8>> {
    let mut body = Vec::new();
    push_integer(&mut body, n)?;
    push_integer(&mut body, e)?;

    let mut der = vec![SEQUENCE_TAG];
    push_length(&mut der, body.len())?;
    der.extend_from_slice(&body);
    Ok(der)
}

/// Build the DER SEQUENCE for a private key: a one-byte version field
/// followed by INTEGER n, INTEGER e, INTEGER d
pub fn private_key_der(e: &BigUint, d: &BigUint, n: &BigUint) -> RsaResult<Vec<u8>> {
    let mut body = vec![0x00]; // version
    push_integer(&mut body, n)?;
    push_integer(&mut body, e)?;
    push_integer(&mut body, d)?;

    let mut der = vec![SEQUENCE_TAG];
    push_length(&mut der, body.len())?;
    der.extend_from_slice(&body);
    Ok(der)
}

/// Wrap DER bytes in PEM framing: base64 at 64 characters per line
/// between BEGIN/END marker lines
pub fn to_pem(der: &[u8], label: &str) -> String {
    let encoded = STANDARD.encode(der);

    let mut lines = Vec::new();
    let mut rest = encoded.as_str();
    while rest.len() > 64 {
        let (line, tail) = rest.split_at(64);
        lines.push(line);
        rest = tail;
    }
    lines.push(rest);

    format!(
        "-----BEGIN {label}-----\n{}\n-----END {label}-----",
        lines.join("\n")
    )
}

/// Strip the PEM marker lines and base64-decode the body
pub fn decode_pem(pem: &str) -> RsaResult<Vec<u8>> {
    let payload: String = pem
        .lines()
        .map(str::trim)
        .filter(|line| !line.starts_with("-----"))
        .collect();

    STANDARD
        .decode(payload)
        .map_err(|_| RsaError::MalformedInput("invalid base64 in PEM body"))
}

/// Public key PEM from its two integers
pub fn create_public_key_pem(e: &BigUint, n: &BigUint) -> RsaResult<String> {
    Ok(to_pem(&public_key_der(e, n)?, PUBLIC_KEY_LABEL))
}

/// Private key PEM from its three integers
pub fn create_private_key_pem(e: &BigUint, d: &BigUint, n: &BigUint) -> RsaResult<String> {
    Ok(to_pem(&private_key_der(e, d, n)?, PRIVATE_KEY_LABEL))
}

// Length octets at `offset`; returns (length, offset past the length).
// Accepts the short form and the two long forms the writer emits.
fn read_length(der: &[u8], offset: usize) -> RsaResult<(usize, usize)> {
    let first = *der.get(offset).ok_or(RsaError::InvalidKeyFormat)?;
    match first {
        0..=0x7F => Ok((first as usize, offset + 1)),
        0x81 => {
            let len = *der.get(offset + 1).ok_or(RsaError::InvalidKeyFormat)?;
            Ok((len as usize, offset + 2))
        }
        0x82 => {
            let hi = *der.get(offset + 1).ok_or(RsaError::InvalidKeyFormat)?;
            let lo = *der.get(offset + 2).ok_or(RsaError::InvalidKeyFormat)?;
            Ok(((hi as usize) << 8 | lo as usize, offset + 3))
        }
        _ => Err(RsaError::InvalidKeyFormat),
    }
}

// An INTEGER field at `offset`: tag, length, content bytes. The 0x00
// pad the encoder adds for high-bit values is stripped back off so the
// caller sees the unsigned magnitude.
fn read_integer(der: &[u8], offset: usize) -> RsaResult<(Vec<u8>, usize)> {
    if *der.get(offset).ok_or(RsaError::InvalidKeyFormat)? != INTEGER_TAG {
        return Err(RsaError::InvalidKeyFormat);
    }

    let (len, start) = read_length(der, offset + 1)?;
    let end = start.checked_add(len).ok_or(RsaError::InvalidKeyFormat)?;
    if end > der.len() {
        return Err(RsaError::InvalidKeyFormat);
    }

    let mut bytes = der[start..end].to_vec();
    if bytes.len() > 1 && bytes[0] == 0x00 {
        bytes.remove(0);
    }
    Ok((bytes, end))
}

fn read_sequence_header(der: &[u8]) -> RsaResult<usize> {
    if *der.first().ok_or(RsaError::InvalidKeyFormat)? != SEQUENCE_TAG {
        return Err(RsaError::InvalidKeyFormat);
    }
    let (_, offset) = read_length(der, 1)?;
    Ok(offset)
}

/// Parse a public key PEM back into its `n` and `e` fields
pub fn parse_public_key(pem: &str) -> RsaResult<PublicKeyParts> {
    let der = decode_pem(pem)?;

    let offset = read_sequence_header(&der)?;
    let (n, offset) = read_integer(&der, offset)?;
    let (e, _) = read_integer(&der, offset)?;

    Ok(PublicKeyParts {
        n: hex::encode(n),
        e: hex::encode(e),
    })
}

/// Parse a private key PEM back into its `n`, `e` and `d` fields
pub fn parse_private_key(pem: &str) -> RsaResult<PrivateKeyParts> {
    let der = decode_pem(pem)?;

    let mut offset = read_sequence_header(&der)?;
    offset += 1; // version byte

    let (n, offset) = read_integer(&der, offset)?;
    let (e, offset) = read_integer(&der, offset)?;
    let (d, _) = read_integer(&der, offset)?;

    Ok(PrivateKeyParts {
        n: hex::encode(n),
        e: hex::encode(e),
        d: hex::encode(d),
    })
}
