//! 配線: 標準アダプタで App を組み立てる

use std::path::PathBuf;
use std::sync::Arc;

use common::adapter::{
    Clock, EnvResolver, FileJsonLog, FileSystem, Log, NoopLog, StdClock, StdEnvResolver,
    StdFileSystem,
};
use common::domain::{ModelName, ProviderName};
use common::error::Error;
use common::llm::{create_driver, load_profiles_config, resolve_provider};
use common::ports::outbound::{LogLevel, LogRecord};

use crate::adapter::file_plan_store::DEFAULT_OUTPUT_DIR;
use crate::adapter::{FilePlanStore, LlmTextGenerator, StderrDiagnostics, StdConsole};
use crate::ports::outbound::{Console, Diagnostics, PlanStore, TextGenerator};
use crate::usecase::prompts::SYSTEM_INSTRUCTION;
use crate::usecase::session::PlanSession;

/// 全コマンドで共有するアダプタ群
pub struct App {
    pub fs: Arc<dyn FileSystem>,
    pub env_resolver: Arc<dyn EnvResolver>,
    pub clock: Arc<dyn Clock>,
    pub logger: Arc<dyn Log>,
    pub diagnostics: Arc<dyn Diagnostics>,
    pub console: Arc<dyn Console>,
}

/// 標準アダプタで App を組み立てる。ログ先が解決できなければログは捨てる
pub fn wire_ptgen(verbose: bool) -> App {
    let fs: Arc<dyn FileSystem> = Arc::new(StdFileSystem);
    let env_resolver: Arc<dyn EnvResolver> = Arc::new(StdEnvResolver);
    let logger: Arc<dyn Log> = match env_resolver.resolve_log_path() {
        Ok(path) => Arc::new(FileJsonLog::new(Arc::clone(&fs), path)),
        Err(_) => Arc::new(NoopLog),
    };
    let diagnostics: Arc<dyn Diagnostics> =
        Arc::new(StderrDiagnostics::new(Arc::clone(&logger), verbose));
    App {
        fs,
        env_resolver,
        clock: Arc::new(StdClock),
        logger,
        diagnostics,
        console: Arc::new(StdConsole::new()),
    }
}

impl App {
    /// プロファイル解決・API キー読み込み・出力先決定を行い、対話セッションを組み立てる
    pub fn session(
        &self,
        profile: Option<&ProviderName>,
        model: Option<&ModelName>,
        output_dir: Option<PathBuf>,
    ) -> Result<PlanSession, Error> {
        let generator = self.text_generator(profile, model)?;
        let store = self.plan_store(output_dir);
        Ok(PlanSession::new(
            generator,
            Arc::clone(&self.diagnostics),
            store,
            Arc::clone(&self.console),
            Arc::clone(&self.logger),
        ))
    }

    fn text_generator(
        &self,
        profile: Option<&ProviderName>,
        model: Option<&ModelName>,
    ) -> Result<Arc<dyn TextGenerator>, Error> {
        let cfg = load_profiles_config(self.fs.as_ref(), self.env_resolver.as_ref())?;
        let resolved = resolve_provider(profile, cfg.as_ref())?.with_model(model);
        let driver = create_driver(&resolved, self.env_resolver.as_ref())?;
        let _ = self.logger.log(
            &LogRecord::new(LogLevel::Info, "provider resolved")
                .layer("wiring")
                .kind("lifecycle")
                .field("profile", resolved.profile_name.as_str())
                .field("provider", resolved.provider_type.as_str())
                .field("model", resolved.model.clone().unwrap_or_default()),
        );
        Ok(Arc::new(LlmTextGenerator::new(
            driver,
            SYSTEM_INSTRUCTION,
            Arc::clone(&self.logger),
        )))
    }

    /// 出力先: -o → PTGEN_OUTPUT_DIR → 既定値
    fn plan_store(&self, output_dir: Option<PathBuf>) -> Arc<dyn PlanStore> {
        let dir = output_dir
            .or_else(|| self.env_resolver.output_dir_from_env())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR));
        Arc::new(FilePlanStore::new(
            Arc::clone(&self.fs),
            Arc::clone(&self.clock),
            Arc::clone(&self.logger),
            dir,
        ))
    }
}
