//! CV download planning.
//!
//! Attempt-then-fallback policy: try the real file first, and when the
//! existence check does not confirm it, synthesize a small placeholder
//! under the same file name. A failed check is expected on fresh deploys
//! (the real PDF is dropped in later), so it is policy, not an error.

/// Locale of the requested CV, chosen by a case-insensitive `"en"`
/// substring on the path; anything else gets the Japanese placeholder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CvLocale {
    English,
    Japanese,
}

impl CvLocale {
    pub fn detect(path: &str) -> Self {
        if path.to_lowercase().contains("en") {
            CvLocale::English
        } else {
            CvLocale::Japanese
        }
    }

    /// Text body of the synthesized placeholder file.
    pub fn placeholder_text(self) -> &'static str {
        match self {
            CvLocale::English => {
                "Daniel Ferrer - CV (English)\n\nThis is a placeholder file. \
                 Replace assets/cv_en.pdf with your real PDF."
            }
            CvLocale::Japanese => {
                "Daniel Ferrer - CV (Japanese)\n\nThis is a placeholder file. \
                 Replace assets/cv_jp.pdf with your real PDF."
            }
        }
    }
}

/// A validated request for one CV file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadRequest {
    path: String,
}

impl DownloadRequest {
    /// Empty paths abort the whole operation, so they never become a
    /// request.
    pub fn parse(path: &str) -> Option<Self> {
        if path.is_empty() {
            return None;
        }
        Some(Self {
            path: path.to_string(),
        })
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// Base name of the requested file, used to name the placeholder.
    pub fn file_name(&self) -> &str {
        self.path.rsplit('/').next().unwrap_or(&self.path)
    }

    /// Resolve the request against the outcome of the existence check.
    pub fn resolve(&self, exists: bool) -> DownloadPlan {
        if exists {
            DownloadPlan::Direct {
                path: self.path.clone(),
            }
        } else {
            DownloadPlan::Placeholder {
                file_name: self.file_name().to_string(),
                content: CvLocale::detect(&self.path).placeholder_text(),
            }
        }
    }
}

/// Join a site-relative path to the page origin. HTTP clients outside the
/// browser's own fetch do not resolve against the document base, so
/// relative paths must be absolutized before a request is built from
/// them. Absolute URLs pass through untouched.
pub fn site_url(origin: &str, path: &str) -> String {
    if path.starts_with("http://") || path.starts_with("https://") {
        return path.to_string();
    }
    format!(
        "{}/{}",
        origin.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// What to actually download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DownloadPlan {
    /// The real file at its original path.
    Direct { path: String },
    /// A synthesized octet-stream blob under the requested base name.
    Placeholder {
        file_name: String,
        content: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_path_is_rejected() {
        assert_eq!(DownloadRequest::parse(""), None);
    }

    #[test]
    fn test_existing_file_downloads_directly() {
        let req = DownloadRequest::parse("assets/cv_en.pdf").unwrap();
        assert_eq!(
            req.resolve(true),
            DownloadPlan::Direct {
                path: "assets/cv_en.pdf".to_string()
            }
        );
    }

    #[test]
    fn test_missing_file_falls_back_to_english_placeholder() {
        let req = DownloadRequest::parse("assets/cv_en.pdf").unwrap();
        match req.resolve(false) {
            DownloadPlan::Placeholder { file_name, content } => {
                assert_eq!(file_name, "cv_en.pdf");
                assert!(content.contains("CV (English)"));
            }
            other => panic!("expected placeholder, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_file_falls_back_to_japanese_placeholder() {
        let req = DownloadRequest::parse("assets/cv_jp.pdf").unwrap();
        match req.resolve(false) {
            DownloadPlan::Placeholder { file_name, content } => {
                assert_eq!(file_name, "cv_jp.pdf");
                assert!(content.contains("CV (Japanese)"));
            }
            other => panic!("expected placeholder, got {other:?}"),
        }
    }

    #[test]
    fn test_locale_detection_is_case_insensitive() {
        assert_eq!(CvLocale::detect("assets/CV_EN.pdf"), CvLocale::English);
        assert_eq!(CvLocale::detect("assets/cv_jp.pdf"), CvLocale::Japanese);
        // "en" anywhere in the path counts, matching the original rule.
        assert_eq!(CvLocale::detect("english/cv.pdf"), CvLocale::English);
    }

    #[test]
    fn test_site_url_absolutizes_relative_paths() {
        assert_eq!(
            site_url("https://example.com", "assets/cv_en.pdf"),
            "https://example.com/assets/cv_en.pdf"
        );
        assert_eq!(
            site_url("https://example.com/", "/assets/cv_en.pdf"),
            "https://example.com/assets/cv_en.pdf"
        );
        assert_eq!(
            site_url("https://example.com", "https://cdn.example.net/cv.pdf"),
            "https://cdn.example.net/cv.pdf"
        );
    }

    #[test]
    fn test_file_name_strips_directories() {
        let req = DownloadRequest::parse("a/b/cv_jp.pdf").unwrap();
        assert_eq!(req.file_name(), "cv_jp.pdf");
        let bare = DownloadRequest::parse("cv.pdf").unwrap();
        assert_eq!(bare.file_name(), "cv.pdf");
    }
}
