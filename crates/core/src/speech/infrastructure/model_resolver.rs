use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::speech::domain::language::Language;

/// DeepSpeech model/scorer pair for one language.
pub struct ModelPair {
    pub model: PathBuf,
    pub scorer: PathBuf,
}

pub const ENGLISH_MODEL_NAME: &str = "deepspeech-0.7.3-models.pbmm";
pub const ENGLISH_SCORER_NAME: &str = "deepspeech-0.7.3-models.scorer";
const ENGLISH_MODEL_URL: &str =
    "https://github.com/mozilla/DeepSpeech/releases/download/v0.7.3/deepspeech-0.7.3-models.pbmm";
const ENGLISH_SCORER_URL: &str =
    "https://github.com/mozilla/DeepSpeech/releases/download/v0.7.3/deepspeech-0.7.3-models.scorer";

// The Yup'ik models are locally trained and have no published release.
pub const YUPIK_MODEL_NAME: &str = "esu_model_500epochs.pbmm";
pub const YUPIK_SCORER_NAME: &str = "esu_lm.scorer";

#[derive(Error, Debug)]
pub enum ModelResolveError {
    #[error("failed to create model cache directory: {0}")]
    CacheDir(#[source] std::io::Error),
    #[error("download failed for {url}: {source}")]
    Download {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("failed to write model to {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("no download available for {name}; place the file at {expected}")]
    NoDownloadUrl { name: String, expected: PathBuf },
    #[error("could not determine model cache directory")]
    NoCacheDir,
}

/// Resolve the model/scorer pair for a language.
///
/// Resolution order per file:
/// 1. User cache directory (platform-specific)
/// 2. Bundled path (for development / pre-packaged installs)
/// 3. Download from the published release URL, when one exists
pub fn resolve_pair(
    language: Language,
    bundled_dir: Option<&Path>,
) -> Result<ModelPair, ModelResolveError> {
    let (model_name, model_url, scorer_name, scorer_url) = match language {
        Language::English => (
            ENGLISH_MODEL_NAME,
            Some(ENGLISH_MODEL_URL),
            ENGLISH_SCORER_NAME,
            Some(ENGLISH_SCORER_URL),
        ),
        Language::Yupik => (YUPIK_MODEL_NAME, None, YUPIK_SCORER_NAME, None),
    };

    Ok(ModelPair {
        model: resolve(model_name, model_url, bundled_dir)?,
        scorer: resolve(scorer_name, scorer_url, bundled_dir)?,
    })
}

fn resolve(
    name: &str,
    url: Option<&str>,
    bundled_dir: Option<&Path>,
) -> Result<PathBuf, ModelResolveError> {
    let cache_dir = model_cache_dir()?;
    let cached = cache_dir.join(name);
    if cached.exists() {
        return Ok(cached);
    }

    if let Some(dir) = bundled_dir {
        let bundled = dir.join(name);
        if bundled.exists() {
            return Ok(bundled);
        }
    }

    let Some(url) = url else {
        return Err(ModelResolveError::NoDownloadUrl {
            name: name.to_string(),
            expected: cached,
        });
    };

    fs::create_dir_all(&cache_dir).map_err(ModelResolveError::CacheDir)?;
    log::info!("downloading {name} from {url}");
    download(url, &cached)?;
    Ok(cached)
}

/// Platform-specific model cache directory.
pub fn model_cache_dir() -> Result<PathBuf, ModelResolveError> {
    #[cfg(target_os = "macos")]
    {
        dirs::data_dir()
            .map(|d| d.join("Phraselator").join("models"))
            .ok_or(ModelResolveError::NoCacheDir)
    }
    #[cfg(not(target_os = "macos"))]
    {
        dirs::cache_dir()
            .map(|d| d.join("Phraselator").join("models"))
            .ok_or(ModelResolveError::NoCacheDir)
    }
}

fn download(url: &str, dest: &Path) -> Result<(), ModelResolveError> {
    let response = reqwest::blocking::get(url)
        .and_then(reqwest::blocking::Response::error_for_status)
        .map_err(|source| ModelResolveError::Download {
            url: url.to_string(),
            source,
        })?;

    let bytes = response.bytes().map_err(|source| ModelResolveError::Download {
        url: url.to_string(),
        source,
    })?;

    let mut file = fs::File::create(dest).map_err(|source| ModelResolveError::Write {
        path: dest.to_path_buf(),
        source,
    })?;
    file.write_all(&bytes).map_err(|source| ModelResolveError::Write {
        path: dest.to_path_buf(),
        source,
    })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_resolve_prefers_bundled_file() {
        let dir = tempdir().unwrap();
        let bundled = dir.path().join("fake-model.pbmm");
        fs::write(&bundled, b"model").unwrap();

        let resolved = resolve("fake-model.pbmm", None, Some(dir.path())).unwrap();
        assert_eq!(resolved, bundled);
    }

    #[test]
    fn test_resolve_without_url_or_file_reports_expected_path() {
        let dir = tempdir().unwrap();
        let err = resolve("missing-model.pbmm", None, Some(dir.path())).unwrap_err();
        match err {
            ModelResolveError::NoDownloadUrl { name, expected } => {
                assert_eq!(name, "missing-model.pbmm");
                assert!(expected.ends_with("missing-model.pbmm"));
            }
            other => panic!("expected NoDownloadUrl, got {other}"),
        }
    }
}
