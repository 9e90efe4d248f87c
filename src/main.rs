// Demonstration driver: generate a key pair, write both keys as PEM,
// parse them back and round-trip a message through the rebuilt key

use anyhow::Result;

use rsa_core::{
    create_private_key_pem, create_public_key_pem, decrypt, encrypt, generate_keypair,
    parse_private_key, parse_public_key, RsaPrivateKey, RsaPublicKey,
};

fn main() -> Result<()> {
    let keypair = generate_keypair(64)?;
    let public = &keypair.public_key;
    let private = &keypair.private_key;

    println!("Generated {}-bit modulus", public.key_size_bits());

    let public_pem = create_public_key_pem(&public.e, &public.n)?;
    let private_pem = create_private_key_pem(&public.e, &private.d, &private.n)?;
    println!("{public_pem}\n");
    println!("{private_pem}\n");

    // Rebuild both keys from their PEM form, as a remote peer would
    let public_parts = parse_public_key(&public_pem)?;
    let private_parts = parse_private_key(&private_pem)?;
    let restored_public = RsaPublicKey::from_hex(&public_parts.n, &public_parts.e)?;
    let restored_private = RsaPrivateKey::from_hex(&private_parts.n, &private_parts.d)?;

    let message = "rsa demo";
    let ciphertext = encrypt(&restored_public, message)?;
    let decrypted = decrypt(&restored_private, &ciphertext)?;

    println!("message:   {message}");
    println!("encrypted: {ciphertext}");
    println!("decrypted: {decrypted}");

    Ok(())
}
