use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;
use crate::config::config_manager::ConfigManager;
use crate::enums::commands::Commands;
use crate::errors::{ReviewError, ReviewResult};
use crate::services::ai_providers::gemini::GeminiProvider;
use crate::services::archive_pipeline::ArchivePipeline;
use crate::services::file_reviewer::FileReviewer;
use crate::services::workspace_allocator::WorkspaceAllocator;
use crate::structs::app_state::AppState;
use crate::structs::config::config::Config;
use crate::ui::review_server::ReviewServer;

pub struct CommandRunner {
    start_time: Option<Instant>,
}

impl CommandRunner {
    pub fn new() -> Self {
        Self {
            start_time: None,
        }
    }

    pub async fn run_command(&mut self, command: Commands) -> ReviewResult<()> {
        self.start_time = Some(Instant::now());

        let result = match command {
            Commands::Init => self.init_command(),
            Commands::Serve { port } => self.serve_command(port).await,
            Commands::Analyze { archive, description } => self.analyze_command(archive, description).await,
            Commands::Validate => self.validate_command(),
        };

        if let Some(start) = self.start_time {
            let duration = start.elapsed();
            log::info!("⏱️  Command completed in {:.2}s", duration.as_secs_f64());
        }

        result
    }

    fn init_command(&self) -> ReviewResult<()> {
        log::info!("🚀 Initializing reviewlyzer configuration...");

        match ConfigManager::create_sample_config() {
            Ok(_) => {
                log::info!("📝 Edit the configuration file to tune limits and the AI model.");
                log::info!("🔧 Run 'reviewlyzer validate' to check your configuration.");
                Ok(())
            }
            Err(e) => {
                log::error!("❌ Failed to create configuration: {}", e);
                Err(e)
            }
        }
    }

    async fn serve_command(&self, port: Option<u16>) -> ReviewResult<()> {
        let mut config = Self::load_config()?;
        if let Some(port) = port {
            config.server.port = port;
        }

        let reviewer = match GeminiProvider::from_config(&config.ai)? {
            Some(provider) => {
                log::info!("🤖 AI review enabled with {}", config.ai.model);
                Some(FileReviewer::new(Arc::new(provider)))
            }
            None => None,
        };

        let server = ReviewServer::new(Self::app_state(&config, reviewer), &config.server.host, config.server.port)?;
        server.run().await
    }

    async fn analyze_command(&self, archive: PathBuf, description: Option<String>) -> ReviewResult<()> {
        log::info!("🔍 Analyzing {}", archive.display());

        if !archive.is_file() {
            return Err(ReviewError::user_input(&format!("Archive not found: {}", archive.display())));
        }

        let config = Self::load_config()?;
        let state = Self::app_state(&config, None);

        let report = tokio::task::spawn_blocking(move || {
            let project = state.allocator.adopt_copy(&archive)?;
            state.pipeline.inspect(project, description)
        })
        .await??;

        let json = serde_json::to_string_pretty(&report)
            .map_err(|e| ReviewError::pipeline_error("render report", &e.to_string()))?;
        println!("{}", json);

        log::info!(
            "✅ Rated {} with {} improvement(s) across {} sampled file(s)",
            report.rating,
            report.improvements.len(),
            report.analyzed_files.len()
        );
        Ok(())
    }

    fn validate_command(&self) -> ReviewResult<()> {
        log::info!("🔎 Validating configuration...");
        let config = ConfigManager::load()?;

        match ConfigManager::validate_config(&config) {
            Ok(()) => {
                log::info!("✅ Configuration is valid");
                if config.ai.is_enabled() {
                    log::info!("🤖 AI review: enabled ({})", config.ai.model);
                } else {
                    log::info!("🤖 AI review: disabled, {} is not set", config.ai.api_key_env);
                }
                Ok(())
            }
            Err(errors) => {
                for error in &errors {
                    log::error!("   • {}", error);
                }
                Err(ReviewError::config_error(
                    &format!("{} configuration problem(s) found", errors.len()),
                    Some("Fix the entries above in config.toml"),
                ))
            }
        }
    }

    fn load_config() -> ReviewResult<Config> {
        let config = match ConfigManager::load() {
            Ok(config) => config,
            Err(e) => {
                log::error!("❌ Failed to load configuration: {}", e);
                log::error!("💡 Run 'reviewlyzer init' to create a configuration file.");
                return Err(e);
            }
        };

        ConfigManager::validate_config(&config).map_err(|errors| {
            ReviewError::config_error(&errors.join("; "), Some("Run 'reviewlyzer validate' for details"))
        })?;

        Ok(config)
    }

    pub fn app_state(config: &Config, reviewer: Option<FileReviewer>) -> AppState {
        AppState {
            pipeline: ArchivePipeline::from_config(&config.analysis),
            allocator: WorkspaceAllocator::new(config.server.work_dir.clone(), config.server.upload_dir.clone()),
            reviewer,
        }
    }
}

impl Default for CommandRunner {
    fn default() -> Self {
        Self::new()
    }
}
