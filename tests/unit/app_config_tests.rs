/*!
 * Tests for application configuration
 */

use tarjimon::app_config::{Config, LogLevel, TranslationBackend};

#[test]
fn test_config_withToken_shouldUseDefaults() {
    let config = Config::with_token("123456:ABC-DEF");
    assert_eq!(config.telegram_token, "123456:ABC-DEF");
    assert_eq!(config.backend, TranslationBackend::Google);
    assert_eq!(config.log_level, LogLevel::Info);
    assert!(config.validate().is_ok());
}

#[test]
fn test_validate_withBlankToken_shouldFail() {
    let config = Config::with_token("   ");
    assert!(config.validate().is_err());

    let config = Config::with_token("");
    assert!(config.validate().is_err());
}

#[test]
fn test_fromVars_withoutOptionals_shouldUseDefaults() {
    let config = Config::from_vars("123456:ABC-DEF", None, None).unwrap();
    assert_eq!(config.backend, TranslationBackend::Google);
    assert_eq!(config.log_level, LogLevel::Info);
}

#[test]
fn test_fromVars_shouldHonorBackendAndLogLevel() {
    // An explicitly supplied token must not disable the optional settings.
    let config = Config::from_vars("123456:ABC-DEF", Some("mymemory"), Some("debug")).unwrap();
    assert_eq!(config.backend, TranslationBackend::MyMemory);
    assert_eq!(config.log_level, LogLevel::Debug);
}

#[test]
fn test_fromVars_withUnknownBackend_shouldFail() {
    assert!(Config::from_vars("123456:ABC-DEF", Some("deepl"), None).is_err());
}

#[test]
fn test_fromVars_withUnknownLogLevel_shouldFail() {
    assert!(Config::from_vars("123456:ABC-DEF", None, Some("verbose")).is_err());
}

#[test]
fn test_fromVars_withBlankToken_shouldFail() {
    assert!(Config::from_vars("  ", Some("google"), None).is_err());
}

#[test]
fn test_translationBackend_fromStrName_shouldBeCaseInsensitive() {
    assert_eq!(
        TranslationBackend::from_str_name("google"),
        Some(TranslationBackend::Google)
    );
    assert_eq!(
        TranslationBackend::from_str_name("MyMemory"),
        Some(TranslationBackend::MyMemory)
    );
    assert_eq!(
        TranslationBackend::from_str_name("MYMEMORY"),
        Some(TranslationBackend::MyMemory)
    );
    assert_eq!(TranslationBackend::from_str_name("deepl"), None);
}

#[test]
fn test_translationBackend_displayName_shouldBeCapitalized() {
    assert_eq!(TranslationBackend::Google.display_name(), "Google");
    assert_eq!(TranslationBackend::MyMemory.display_name(), "MyMemory");
}

#[test]
fn test_logLevel_fromStrName_shouldParseAllLevels() {
    assert_eq!(LogLevel::from_str_name("error"), Some(LogLevel::Error));
    assert_eq!(LogLevel::from_str_name("WARN"), Some(LogLevel::Warn));
    assert_eq!(LogLevel::from_str_name("Info"), Some(LogLevel::Info));
    assert_eq!(LogLevel::from_str_name("debug"), Some(LogLevel::Debug));
    assert_eq!(LogLevel::from_str_name("trace"), Some(LogLevel::Trace));
    assert_eq!(LogLevel::from_str_name("verbose"), None);
}

#[test]
fn test_logLevel_toLevelFilter_shouldMapOneToOne() {
    assert_eq!(LogLevel::Error.to_level_filter(), log::LevelFilter::Error);
    assert_eq!(LogLevel::Warn.to_level_filter(), log::LevelFilter::Warn);
    assert_eq!(LogLevel::Info.to_level_filter(), log::LevelFilter::Info);
    assert_eq!(LogLevel::Debug.to_level_filter(), log::LevelFilter::Debug);
    assert_eq!(LogLevel::Trace.to_level_filter(), log::LevelFilter::Trace);
}
