//! `encrypt` and `decrypt`.

use secrecy::ExposeSecret;
use sidekick_core::{decrypt_auto, CipherFormat};

use crate::app::{resolve_passphrase, AppContext};
use crate::cli::{DecryptArgs, DecryptFormat, EncryptArgs};
use crate::helpers::read_text;

pub fn handle_encrypt(ctx: &AppContext, args: EncryptArgs) -> anyhow::Result<()> {
    let config = ctx.config()?;
    let format: CipherFormat = args.format.unwrap_or(config.cipher.format).into();
    let plaintext = read_text(args.text, ctx.interactive())?;
    let passphrase = resolve_passphrase(ctx.env(), ctx.interactive(), true)?;

    tracing::info!(?format, "encrypting");
    let sealed = format.encrypt(
        &plaintext,
        passphrase.expose_secret(),
        &config.cipher.kdf_params(),
    )?;

    // Armored output already ends with a newline.
    if sealed.ends_with('\n') {
        print!("{}", sealed);
    } else {
        println!("{}", sealed);
    }
    Ok(())
}

pub fn handle_decrypt(ctx: &AppContext, args: DecryptArgs) -> anyhow::Result<()> {
    let encoded = read_text(args.text, ctx.interactive())?;
    let passphrase = resolve_passphrase(ctx.env(), ctx.interactive(), false)?;

    tracing::info!(format = ?args.format, "decrypting");
    let plaintext = match args.format {
        DecryptFormat::Auto => decrypt_auto(&encoded, passphrase.expose_secret())?,
        DecryptFormat::Envelope => {
            CipherFormat::Envelope.decrypt(&encoded, passphrase.expose_secret())?
        }
        DecryptFormat::Age => CipherFormat::Age.decrypt(&encoded, passphrase.expose_secret())?,
    };

    // A single trailing newline is added unless the plaintext already ends in one.
    if plaintext.ends_with('\n') {
        print!("{}", plaintext);
    } else {
        println!("{}", plaintext);
    }
    Ok(())
}
