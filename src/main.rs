use anyhow::Context;
use binary_calc::utils::logger;
use binary_calc::{CliConfig, ReaderSource, Repl};
use clap::Parser;

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 解析設定 (檔案 + 命令列)
    let settings = match cli.resolve() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("❌ {}", e);
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    logger::init_cli_logger(settings.verbose);
    tracing::debug!("Settings: {:?}", settings);

    let mut source = ReaderSource::stdin();
    let stdout = std::io::stdout();
    let mut repl = Repl::new(&settings, stdout.lock());

    repl.run(&mut source).context("console I/O failed")?;

    tracing::debug!("Calculator session closed");
    Ok(())
}
