use std::error::Error;

use aksara::Translator;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("aksara=info")),
        )
        .init();

    let translator = Translator::new();

    // ────────────────────────────────────────────────────────────────
    // Latin → Aksara Jawa
    // ────────────────────────────────────────────────────────────────
    println!("{}", translator.translate_latin_to_javanese("kanca")?);
    // → ꦏꦲꦤꦕꦲ

    // ────────────────────────────────────────────────────────────────
    // Aksara Jawa → Latin, after normalization
    // ────────────────────────────────────────────────────────────────
    let kanca = translator.normalize_text("ꦏꦚ꧀ꦕ");
    println!("{}", translator.translate_javanese_to_latin(&kanca)?);
    // → kny꧀c

    // ────────────────────────────────────────────────────────────────
    // Automatic direction
    // ────────────────────────────────────────────────────────────────
    println!("{}", translator.translate("kanca")?);
    // → ꦏꦲꦤꦕꦲ

    let (script, latin) = translator.translate_detected("ꦔꦺꦴꦏꦺꦴ")?;
    println!("{script}: {latin}");
    // → Javanese: ngoko

    // ────────────────────────────────────────────────────────────────
    // Sloppy input: trim + lower-case before dispatch
    // ────────────────────────────────────────────────────────────────
    let forgiving = Translator::builder().normalize_input(true).build();
    println!("{}", forgiving.translate("   Sugeng Enjing, Kanca.  ")?);

    Ok(())
}
