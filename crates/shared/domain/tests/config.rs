use serde_json::json;
use wsite_domain::config::{AssetConfig, ServerConfig, SiteConfig, SiteSettings};
use wsite_domain::features::PackageTier;

#[test]
fn config_defaults_are_sane() {
    let server = ServerConfig::default();
    assert_eq!(server.port, 8640);
    assert!(server.ssl.is_none());

    let site = SiteSettings::default();
    assert_eq!(site.tier, PackageTier::Starter);
    assert_eq!(site.color_scheme, "classic-blue");

    let assets = AssetConfig::default();
    assert_eq!(assets.content_dir, std::path::PathBuf::from("assets/content"));
    assert_eq!(assets.static_dir, std::path::PathBuf::from("public"));
    assert_eq!(assets.default_document, "default.json");
    assert_eq!(assets.theme_document, "theme.json");
}

#[test]
fn site_config_deserializes() {
    let raw = json!({
        "server": { "address": "::", "port": 8080 },
        "site": { "tier": "premium", "color_scheme": "anthracite" },
        "assets": { "content_dir": "/srv/content", "static_dir": "/srv/public" }
    });

    let cfg: SiteConfig = serde_json::from_value(raw).expect("config deserialize");
    assert_eq!(cfg.server.port, 8080);
    assert_eq!(cfg.site.tier, PackageTier::Premium);
    assert_eq!(cfg.site.color_scheme, "anthracite");
    assert_eq!(cfg.assets.content_dir, std::path::PathBuf::from("/srv/content"));
    // unspecified fields keep their defaults
    assert_eq!(cfg.assets.default_document, "default.json");
}

#[test]
fn partial_config_falls_back_to_defaults() {
    let cfg: SiteConfig = serde_json::from_value(json!({})).expect("empty config");
    assert_eq!(cfg.server.port, 8640);
    assert_eq!(cfg.site.tier, PackageTier::Starter);
}
