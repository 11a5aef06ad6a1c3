use anyhow::Context;
use clap::Parser;
use quizzer::utils::error::ErrorSeverity;
use quizzer::utils::{logger, validation::Validate};
use quizzer::{app, CliConfig, FileQuizRepo, QuizService, Settings, TomlConfig};

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 載入 TOML 配置 (可選)
    let file_config = match cli.config.as_deref() {
        Some(path) => {
            let config = TomlConfig::from_file(path)
                .with_context(|| format!("Failed to load config file '{}'", path))?;
            config
                .validate()
                .with_context(|| format!("Invalid config file '{}'", path))?;
            Some(config)
        }
        None => None,
    };

    let settings = Settings::resolve(
        cli.store.as_deref(),
        cli.verbose,
        cli.log_format,
        file_config.as_ref(),
    )?;

    // 初始化日誌
    logger::init_cli_logger(settings.verbose, settings.log_format);
    tracing::debug!("Effective settings: {:?}", settings);

    let repo = FileQuizRepo::new(settings.store_path.clone());
    let mut service = QuizService::new(repo);
    let stdout = std::io::stdout();

    if let Err(e) = app::execute(&mut service, cli.command, &mut stdout.lock()) {
        tracing::error!(
            "❌ Command failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );

        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());

        let exit_code = match e.severity() {
            ErrorSeverity::Medium => 2, // 使用者輸入錯誤
            ErrorSeverity::High => 1,   // 配置錯誤
            ErrorSeverity::Critical => 3, // 儲存錯誤
        };
        std::process::exit(exit_code);
    }

    Ok(())
}
