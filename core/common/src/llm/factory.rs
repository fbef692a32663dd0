//! プロバイダファクトリー
//!
//! プロバイダタイプに基づいて適切なプロバイダを作成します。

use crate::error::Error;
use crate::llm::driver::LlmDriver;
use crate::llm::echo::EchoProvider;
use crate::llm::gemini::GeminiProvider;
use crate::llm::provider::LlmProvider;
use crate::llm::resolver::ResolvedProvider;
use crate::ports::outbound::EnvResolver;
use serde_json::Value;

/// Gemini の API キーを読む既定の環境変数
pub const DEFAULT_GEMINI_API_KEY_ENV: &str = "GEMINI_API_KEY";

/// 既定の環境変数が無いときに読む環境変数
pub const FALLBACK_GEMINI_API_KEY_ENV: &str = "GOOGLE_API_KEY";

/// プロバイダタイプ
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderType {
    /// Gemini
    Gemini,
    /// Echo（API を呼ばない）
    Echo,
}

impl ProviderType {
    /// 文字列からプロバイダタイプを解析
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "gemini" => Some(Self::Gemini),
            "echo" => Some(Self::Echo),
            _ => None,
        }
    }

    /// プロバイダタイプを文字列に変換
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Gemini => "gemini",
            Self::Echo => "echo",
        }
    }
}

/// プロバイダのenumラッパー
///
/// 異なるプロバイダタイプを型安全に扱うために使用します。
pub enum AnyProvider {
    Gemini(GeminiProvider),
    Echo(EchoProvider),
}

impl LlmProvider for AnyProvider {
    fn name(&self) -> &str {
        match self {
            Self::Gemini(p) => p.name(),
            Self::Echo(p) => p.name(),
        }
    }

    fn make_http_request(&self, request_json: &str) -> Result<String, Error> {
        match self {
            Self::Gemini(p) => p.make_http_request(request_json),
            Self::Echo(p) => p.make_http_request(request_json),
        }
    }

    fn parse_response_text(&self, response_json: &str) -> Result<Option<String>, Error> {
        match self {
            Self::Gemini(p) => p.parse_response_text(response_json),
            Self::Echo(p) => p.parse_response_text(response_json),
        }
    }

    fn make_request_payload(
        &self,
        query: &str,
        system_instruction: Option<&str>,
    ) -> Result<Value, Error> {
        match self {
            Self::Gemini(p) => p.make_request_payload(query, system_instruction),
            Self::Echo(p) => p.make_request_payload(query, system_instruction),
        }
    }
}

/// プロバイダを作成する
///
/// API キーはここで一度だけ環境から読み、以後プロバイダが保持する。
///
/// # Arguments
/// * `resolved` - 解決済みプロファイル
/// * `env` - API キーを読むための環境変数解決
pub fn create_provider(
    resolved: &ResolvedProvider,
    env: &dyn EnvResolver,
) -> Result<AnyProvider, Error> {
    match resolved.provider_type {
        ProviderType::Gemini => {
            let api_key = match resolved.api_key_env.as_deref() {
                Some(key_env) => read_api_key(env, key_env).ok_or_else(|| {
                    Error::env(format!("{} environment variable is not set", key_env))
                })?,
                None => read_api_key(env, DEFAULT_GEMINI_API_KEY_ENV)
                    .or_else(|| read_api_key(env, FALLBACK_GEMINI_API_KEY_ENV))
                    .ok_or_else(|| {
                        Error::env(format!(
                            "{} (or {}) environment variable is not set",
                            DEFAULT_GEMINI_API_KEY_ENV, FALLBACK_GEMINI_API_KEY_ENV
                        ))
                    })?,
            };
            Ok(AnyProvider::Gemini(GeminiProvider::new(
                resolved.model.clone(),
                api_key,
            )))
        }
        ProviderType::Echo => Ok(AnyProvider::Echo(EchoProvider::new())),
    }
}

/// 空白だけの値は未設定として扱う
fn read_api_key(env: &dyn EnvResolver, name: &str) -> Option<String> {
    env.var(name).filter(|k| !k.trim().is_empty())
}

/// ドライバーを作成する
pub fn create_driver(
    resolved: &ResolvedProvider,
    env: &dyn EnvResolver,
) -> Result<LlmDriver<AnyProvider>, Error> {
    Ok(LlmDriver::new(create_provider(resolved, env)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::HomeDir;
    use std::collections::HashMap;
    use std::path::PathBuf;

    struct MapEnv(HashMap<String, String>);

    impl EnvResolver for MapEnv {
        fn var(&self, name: &str) -> Option<String> {
            self.0.get(name).cloned()
        }
        fn resolve_home_dir(&self) -> Result<HomeDir, Error> {
            Ok(HomeDir::new("/tmp/ptgen-test"))
        }
        fn resolve_profiles_config_path(&self) -> Result<PathBuf, Error> {
            Ok(PathBuf::from("/tmp/ptgen-test/profiles.json"))
        }
    }

    fn resolved(provider_type: ProviderType, api_key_env: Option<&str>) -> ResolvedProvider {
        ResolvedProvider {
            profile_name: provider_type.as_str().to_string(),
            provider_type,
            model: None,
            api_key_env: api_key_env.map(String::from),
        }
    }

    #[test]
    fn test_provider_type_from_str() {
        assert_eq!(ProviderType::from_str("gemini"), Some(ProviderType::Gemini));
        assert_eq!(ProviderType::from_str("GEMINI"), Some(ProviderType::Gemini));
        assert_eq!(ProviderType::from_str("echo"), Some(ProviderType::Echo));
        assert_eq!(ProviderType::from_str("gpt"), None);
    }

    #[test]
    fn test_provider_type_as_str() {
        assert_eq!(ProviderType::Gemini.as_str(), "gemini");
        assert_eq!(ProviderType::Echo.as_str(), "echo");
    }

    #[test]
    fn test_create_provider_gemini_without_key_is_env_error() {
        let env = MapEnv(HashMap::new());
        let err = create_provider(&resolved(ProviderType::Gemini, None), &env)
            .err()
            .unwrap();
        assert!(err.to_string().contains("GEMINI_API_KEY"));
        assert_eq!(err.exit_code(), 78);
    }

    #[test]
    fn test_create_provider_gemini_falls_back_to_google_api_key() {
        let mut vars = HashMap::new();
        vars.insert("GOOGLE_API_KEY".to_string(), "secret".to_string());
        let provider =
            create_provider(&resolved(ProviderType::Gemini, None), &MapEnv(vars)).unwrap();
        assert_eq!(provider.name(), "gemini");
    }

    #[test]
    fn test_create_provider_gemini_empty_key_is_unset() {
        let mut vars = HashMap::new();
        vars.insert("GEMINI_API_KEY".to_string(), "".to_string());
        vars.insert("GOOGLE_API_KEY".to_string(), "  ".to_string());
        let err = create_provider(&resolved(ProviderType::Gemini, None), &MapEnv(vars))
            .err()
            .unwrap();
        assert!(err.to_string().contains("GOOGLE_API_KEY"));
        assert_eq!(err.exit_code(), 78);
    }

    #[test]
    fn test_create_provider_custom_key_env_has_no_fallback() {
        let mut vars = HashMap::new();
        vars.insert("GOOGLE_API_KEY".to_string(), "secret".to_string());
        let err = create_provider(&resolved(ProviderType::Gemini, Some("MY_KEY")), &MapEnv(vars))
            .err()
            .unwrap();
        assert!(err.to_string().contains("MY_KEY"));
    }

    #[test]
    fn test_create_provider_gemini_with_custom_key_env() {
        let mut vars = HashMap::new();
        vars.insert("MY_KEY".to_string(), "secret".to_string());
        let provider =
            create_provider(&resolved(ProviderType::Gemini, Some("MY_KEY")), &MapEnv(vars))
                .unwrap();
        assert_eq!(provider.name(), "gemini");
    }

    #[test]
    fn test_create_driver_echo_needs_no_key() {
        let driver = create_driver(&resolved(ProviderType::Echo, None), &MapEnv(HashMap::new()))
            .unwrap();
        assert_eq!(driver.provider().name(), "echo");
    }
}
