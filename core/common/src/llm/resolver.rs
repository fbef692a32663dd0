//! profiles.json の読み込みとプロバイダ解決

use crate::domain::{ModelName, ProviderName};
use crate::error::Error;
use crate::llm::config::{ProfilesConfig, ProviderTypeKind};
use crate::llm::factory::ProviderType;
use crate::ports::outbound::{EnvResolver, FileSystem};

/// 解決済みプロバイダ（ProviderType + オプション）
#[derive(Debug, Clone)]
pub struct ResolvedProvider {
    /// 解決に使ったプロファイル名（例: "flash", "gemini"）。エラー表示用
    pub profile_name: String,
    pub provider_type: ProviderType,
    pub model: Option<String>,
    pub api_key_env: Option<String>,
}

impl ResolvedProvider {
    /// -m 指定があればモデル名を上書きする
    pub fn with_model(mut self, model: Option<&ModelName>) -> Self {
        if let Some(m) = model {
            self.model = Some(m.to_string());
        }
        self
    }
}

/// profiles.json を読み込む。ファイルが無ければ Ok(None)、JSON が壊れていれば Err（メッセージにパス含める）
pub fn load_profiles_config(
    fs: &dyn FileSystem,
    env: &dyn EnvResolver,
) -> Result<Option<ProfilesConfig>, Error> {
    let path = env.resolve_profiles_config_path()?;
    if !fs.exists(path.as_path()) {
        return Ok(None);
    }
    let contents = fs.read_to_string(path.as_path())?;
    ProfilesConfig::parse(&contents)
        .map_err(|e| Error::json(format!("{}: {}", path.display(), e)))
        .map(Some)
}

fn provider_type_kind_to_provider_type(k: ProviderTypeKind) -> ProviderType {
    match k {
        ProviderTypeKind::Gemini => ProviderType::Gemini,
        ProviderTypeKind::Echo => ProviderType::Echo,
    }
}

/// 利用可能なビルトインプロバイダ名
fn builtin_provider_names() -> &'static [&'static str] {
    &["gemini", "echo"]
}

/// 要求されたプロバイダ名（None の場合は default）と ProfilesConfig から ResolvedProvider を解決する。
/// 不明なプロバイダの場合は Error::invalid_argument（is_usage == true）で利用可能一覧を返す。
pub fn resolve_provider(
    requested: Option<&ProviderName>,
    cfg: Option<&ProfilesConfig>,
) -> Result<ResolvedProvider, Error> {
    let effective_name: &str = requested.map(|r| r.as_ref()).unwrap_or_else(|| {
        cfg.and_then(|c| c.default_provider.as_deref())
            .unwrap_or("gemini")
    });

    // 1) cfg.providers に名前があればそれを優先
    if let Some(profile) = cfg.and_then(|c| c.providers.get(effective_name)) {
        return Ok(ResolvedProvider {
            profile_name: effective_name.to_string(),
            provider_type: provider_type_kind_to_provider_type(profile.type_),
            model: profile.model.clone(),
            api_key_env: profile.api_key_env.clone(),
        });
    }

    // 2) ビルトインを試す
    if let Some(provider_type) = ProviderType::from_str(effective_name) {
        return Ok(ResolvedProvider {
            profile_name: effective_name.to_string(),
            provider_type,
            model: None,
            api_key_env: None,
        });
    }

    // 3) どれも無ければ usage エラー
    let mut available: Vec<String> = builtin_provider_names()
        .iter()
        .map(|s| (*s).to_string())
        .collect();
    if let Some(cfg) = cfg {
        for k in cfg.providers.keys() {
            if !available.contains(k) {
                available.push(k.clone());
            }
        }
    }
    available.sort();
    Err(Error::invalid_argument(format!(
        "Unknown provider: '{}'. Available: {}",
        effective_name,
        available.join(", ")
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::StdFileSystem;
    use crate::domain::HomeDir;
    use crate::llm::config::ProviderProfile;
    use std::path::PathBuf;

    #[test]
    fn test_resolve_provider_no_cfg_requested_none() {
        let r = resolve_provider(None, None).unwrap();
        assert_eq!(r.profile_name, "gemini");
        assert_eq!(r.provider_type, ProviderType::Gemini);
        assert!(r.model.is_none());
    }

    #[test]
    fn test_resolve_provider_builtin_echo() {
        let r = resolve_provider(Some(&ProviderName::new("echo")), None).unwrap();
        assert_eq!(r.provider_type, ProviderType::Echo);
    }

    #[test]
    fn test_resolve_provider_uses_cfg_default_and_profile() {
        let mut cfg = ProfilesConfig::default();
        cfg.default_provider = Some("flash".to_string());
        cfg.providers.insert(
            "flash".to_string(),
            ProviderProfile {
                type_: ProviderTypeKind::Gemini,
                model: Some("gemini-2.0-flash".to_string()),
                api_key_env: Some("GOOGLE_API_KEY".to_string()),
            },
        );
        let r = resolve_provider(None, Some(&cfg)).unwrap();
        assert_eq!(r.profile_name, "flash");
        assert_eq!(r.model.as_deref(), Some("gemini-2.0-flash"));
        assert_eq!(r.api_key_env.as_deref(), Some("GOOGLE_API_KEY"));
    }

    #[test]
    fn test_resolve_provider_unknown_lists_available() {
        let err = resolve_provider(Some(&ProviderName::new("nope")), None).unwrap_err();
        assert!(err.is_usage());
        assert!(err.to_string().contains("Unknown provider: 'nope'"));
        assert!(err.to_string().contains("echo, gemini"));
    }

    #[test]
    fn test_with_model_overrides() {
        let r = resolve_provider(None, None)
            .unwrap()
            .with_model(Some(&ModelName::new("gemini-1.5-pro")));
        assert_eq!(r.model.as_deref(), Some("gemini-1.5-pro"));
    }

    struct TempEnv(PathBuf);

    impl EnvResolver for TempEnv {
        fn var(&self, _name: &str) -> Option<String> {
            None
        }
        fn resolve_home_dir(&self) -> Result<HomeDir, Error> {
            Ok(HomeDir::new(self.0.clone()))
        }
        fn resolve_profiles_config_path(&self) -> Result<PathBuf, Error> {
            Ok(self.0.join("profiles.json"))
        }
    }

    #[test]
    fn test_load_profiles_config_missing_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let env = TempEnv(dir.path().to_path_buf());
        assert!(load_profiles_config(&StdFileSystem, &env).unwrap().is_none());
    }

    #[test]
    fn test_load_profiles_config_broken_json_mentions_path() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("profiles.json"), "{ broken").unwrap();
        let env = TempEnv(dir.path().to_path_buf());
        let err = load_profiles_config(&StdFileSystem, &env).unwrap_err();
        assert!(err.to_string().contains("profiles.json"));
    }

    #[test]
    fn test_load_profiles_config_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("profiles.json"),
            r#"{ "default_provider": "echo", "providers": {} }"#,
        )
        .unwrap();
        let env = TempEnv(dir.path().to_path_buf());
        let cfg = load_profiles_config(&StdFileSystem, &env).unwrap().unwrap();
        assert_eq!(cfg.default_provider.as_deref(), Some("echo"));
    }
}
