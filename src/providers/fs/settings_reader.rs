use crate::{
    errors::{AppError, IOError},
    logging::logger::log_info,
    providers::{fs::path::get_config_file_path, settings_reader::SettingsReader},
    shapes::settings::Settings,
};
use async_trait::async_trait;
use std::{
    io::ErrorKind,
    path::{Path, PathBuf},
};
use tokio::fs::read_to_string;

pub struct FileSystemSettingsReader(PathBuf);

impl FileSystemSettingsReader {
    pub fn new(base_path: &Path) -> Self {
        Self(base_path.to_path_buf())
    }
}

#[async_trait]
impl SettingsReader for FileSystemSettingsReader {
    /// A missing file yields the defaults; an unreadable or invalid one is an error.
    async fn read(&self) -> Result<Settings, AppError> {
        let path = get_config_file_path(&self.0);
        let content = match read_to_string(&path).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log_info(&format!("no configuration at '{}', using defaults", path.display()));
                return Ok(Settings::default());
            }
            Err(e) => return Err(IOError::from(e).into()),
        };
        let settings = toml::from_str::<Settings>(&content).map_err(IOError::from)?;
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::enums::LanguageEnum;
    use std::env::temp_dir;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = temp_dir().join(format!("campeonato-{}-{}", name, std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[tokio::test]
    async fn missing_file_yields_defaults() {
        let dir = scratch_dir("missing");
        let settings = FileSystemSettingsReader::new(&dir).read().await.unwrap();
        assert_eq!(settings.timeout_secs, 20);
    }

    #[tokio::test]
    async fn reads_toml_configuration() {
        let dir = scratch_dir("toml");
        std::fs::write(
            get_config_file_path(&dir),
            "api_url = \"http://localhost:8000/api\"\ntimeout_secs = 5\nlanguage = \"pt-br\"\n",
        )
        .unwrap();
        let settings = FileSystemSettingsReader::new(&dir).read().await.unwrap();
        assert_eq!(settings.api_url, "http://localhost:8000/api");
        assert_eq!(settings.timeout_secs, 5);
        assert_eq!(settings.language, LanguageEnum::PtBr);
    }

    #[tokio::test]
    async fn invalid_toml_is_an_error() {
        let dir = scratch_dir("invalid");
        std::fs::write(get_config_file_path(&dir), "timeout_secs = \"soon\"").unwrap();
        let result = FileSystemSettingsReader::new(&dir).read().await;
        assert!(matches!(
            result,
            Err(AppError::IO(IOError::SerializationError(_)))
        ));
    }
}
