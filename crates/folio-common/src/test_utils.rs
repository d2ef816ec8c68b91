//! Test utilities and shared fixtures for folio.
//!
//! This module provides common testing helpers and sample documents that can
//! be used across all crates in the workspace for unit and integration tests.

use std::sync::Once;
use tracing_subscriber::{fmt, EnvFilter};

/// Initialize test logging once per test run.
static INIT: Once = Once::new();

/// Initialize logging for tests with a sensible default configuration.
/// This function is safe to call multiple times and will only initialize once.
pub fn init_test_logging() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

        let _ = fmt().with_test_writer().with_env_filter(filter).try_init();
    });
}

/// Create a temporary directory for tests that automatically cleans up.
pub fn create_temp_dir() -> tempfile::TempDir {
    tempfile::tempdir().expect("Failed to create temporary directory")
}

/// Sample content documents, shaped like the ones a real site ships.
pub mod document_fixtures {
    use crate::{DocumentKind, StaticSource};
    use serde_json::{json, Value};

    /// Path of the translation document used by the fixtures.
    pub const TRANSLATIONS_PATH: &str = "data/translations.json";

    /// Sample profile document.
    pub fn profile() -> Value {
        json!({
            "personal": {
                "name": "Nguyễn Văn An",
                "title": "Game Developer",
                "email": "an@example.com",
                "phone": "+84 123 456 789",
                "github": "https://github.com/an-dev",
                "linkedin": "https://linkedin.com/in/an-dev",
                "facebook": "https://facebook.com/an.dev",
                "zalo": "https://zalo.me/84123456789"
            },
            "hero": {
                "title": "Lập trình viên Game",
                "subtitle": "Unity & C#",
                "description": "Tôi xây dựng trò chơi 2D.",
                "buttons": {
                    "primary": { "text": "Xem dự án", "icon": "fas fa-eye", "link": "#projects" },
                    "secondary": { "text": "Liên hệ", "icon": "fas fa-envelope", "link": "#contact" }
                }
            },
            "about": {
                "title": "Về tôi",
                "description": "Ba năm kinh nghiệm Unity.",
                "stats": [
                    { "number": "3+", "label": "Năm kinh nghiệm" },
                    { "number": "10+", "label": "Dự án" }
                ],
                "image": { "placeholder": true, "icon": "fas fa-user", "text": "Ảnh" }
            },
            "footer": { "copyright": "2024 Nguyễn Văn An. Bảo lưu mọi quyền." }
        })
    }

    /// Sample skills document with two categories.
    pub fn skills() -> Value {
        json!({
            "categories": [
                {
                    "title": "Phát triển Game",
                    "icon": "fas fa-gamepad",
                    "skills": [
                        { "name": "Unity", "icon": "fab fa-unity", "percentage": 90 },
                        { "name": "C#", "icon": "fas fa-code", "percentage": 85 }
                    ]
                },
                {
                    "title": "Công cụ",
                    "icon": "fas fa-tools",
                    "skills": [
                        { "name": "Git", "icon": "fab fa-git-alt", "percentage": 80 }
                    ]
                }
            ]
        })
    }

    /// Sample projects document with three projects in a fixed order.
    pub fn projects() -> Value {
        json!({
            "projects": [
                {
                    "id": "cultivation",
                    "title": "A",
                    "subtitle": "Tu tiên",
                    "description": "Trò chơi nhập vai.",
                    "icon": "fas fa-dragon",
                    "status": "Đang phát triển",
                    "role": "Lập trình viên chính",
                    "technologies": ["Unity", "C#"],
                    "features": [
                        { "key": "cultivation", "text": "Hệ thống tu luyện với 7 chỉ số" },
                        "Bản đồ Tilemap"
                    ],
                    "achievements": [
                        { "key": "architecture", "text": "Hoàn thành toàn bộ event-driven architecture" }
                    ],
                    "skills": [{ "key": "unity2D", "text": "Unity 2D" }],
                    "links": { "github": "https://github.com/an-dev/a", "demo": "https://an.dev/a", "external": "#" }
                },
                {
                    "title": "B",
                    "description": "Công cụ chỉnh sửa.",
                    "image": "images/b.png",
                    "technologies": [],
                    "links": { "github": "https://github.com/an-dev/b" }
                },
                {
                    "title": "C",
                    "description": "Bản demo web.",
                    "icon": "fas fa-globe",
                    "technologies": ["Rust"],
                    "links": { "demo": "https://an.dev/c" }
                }
            ]
        })
    }

    /// Sample contact document.
    pub fn contact() -> Value {
        json!({
            "info": {
                "title": "Hãy kết nối",
                "description": "Tôi luôn sẵn sàng cho dự án mới."
            }
        })
    }

    /// Sample translation document with an English subtree.
    pub fn translations() -> Value {
        json!({
            "en": {
                "navigation": {
                    "home": "Home",
                    "about": "About",
                    "projects": "Projects",
                    "skills": "Skills",
                    "contact": "Contact"
                },
                "hero": {
                    "title": "Game Developer",
                    "description": "I build 2D games.",
                    "buttons": { "primary": { "text": "View projects" } }
                },
                "about": {
                    "title": "About me",
                    "stats": [ { "label": "Years of experience" } ]
                },
                "skills": {
                    "title": "Technical skills",
                    "categories": { "gameDevelopment": "Game Development" }
                },
                "projects": {
                    "title": "Featured projects",
                    "items": { "cultivation": { "description": "A role-playing game." } },
                    "features": { "cultivation": "Cultivation system with 7 stats" },
                    "achievements": { "architecture": "Completed the event-driven architecture" },
                    "skills": { "unity2D": "Unity 2D (EN)" },
                    "modal": { "description": "Project description", "status": "Status" }
                },
                "contact": {
                    "title": "Let's connect",
                    "methods": { "phone": "Phone" }
                },
                "footer": { "copyright": "2024 Nguyen Van An. All rights reserved." }
            }
        })
    }

    /// A static source serving every fixture at its conventional path.
    pub fn sample_source() -> StaticSource {
        StaticSource::new()
            .with_document(DocumentKind::Profile.default_path(), profile())
            .with_document(DocumentKind::Skills.default_path(), skills())
            .with_document(DocumentKind::Projects.default_path(), projects())
            .with_document(DocumentKind::Contact.default_path(), contact())
            .with_document(TRANSLATIONS_PATH, translations())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DocumentSource;

    #[test]
    fn test_init_logging_multiple_calls() {
        // Should not panic when called multiple times
        init_test_logging();
        init_test_logging();
    }

    #[tokio::test]
    async fn test_sample_source_serves_all_fixtures() {
        let source = document_fixtures::sample_source();
        for kind in crate::DocumentKind::all() {
            assert!(source.fetch(&kind.default_path()).await.is_ok());
        }
        assert!(source
            .fetch(document_fixtures::TRANSLATIONS_PATH)
            .await
            .is_ok());
    }
}
