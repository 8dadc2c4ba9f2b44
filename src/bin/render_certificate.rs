//! Prints the last saved certificate as printable HTML.
//!
//! Usage: `render_certificate [--mode all|en|hi] > certificate.html`

use aptitude_insight::certificate::render_bilingual;
use aptitude_insight::config::Config;
use aptitude_insight::render::{render_document, PrintMode};
use aptitude_insight::storage::{load_certificate, JsonFileStore};
use aptitude_insight::transliteration::TransliterationClient;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "render_certificate",
    version,
    about = "Print the last saved certificate as HTML"
)]
struct Args {
    /// Panes to print
    #[arg(long, value_enum, default_value = "all")]
    mode: PrintMode,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "aptitude_insight=warn".into()),
        )
        .init();

    let args = Args::parse();
    let config = Config::from_env()?;
    let store = JsonFileStore::new(config.certificate_store_path.clone());

    let data = load_certificate(&store)
        .await?
        .ok_or_else(|| {
            anyhow::anyhow!("No saved certificate in {}", store.path().display())
        })?;

    let client = TransliterationClient::new(
        &config.transliteration_base_url,
        config.transliteration_timeout(),
    )?;

    let certificate = render_bilingual(&data, &client).await?;

    print!("{}", render_document(&certificate, args.mode));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_defaults_to_all() {
        let args = Args::try_parse_from(["render_certificate"]).unwrap();
        assert_eq!(args.mode, PrintMode::All);
    }

    #[test]
    fn test_mode_flag() {
        let args = Args::try_parse_from(["render_certificate", "--mode", "hi"]).unwrap();
        assert_eq!(args.mode, PrintMode::Hi);
    }

    #[test]
    fn test_bad_mode_is_rejected() {
        assert!(Args::try_parse_from(["render_certificate", "--mode", "fr"]).is_err());
        assert!(Args::try_parse_from(["render_certificate", "--mode"]).is_err());
    }
}
