//! Integration tests for configuration and content loading

use std::fs;

use socialize::{
    ConfigError, ContentError, InMemoryContent, LegacyShare, RegistryError, ShareConfig,
    ShareError, Socialize,
};

#[test]
fn test_config_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("socialize.toml");
    fs::write(
        &path,
        r##"
default_networks = ["Mail", "mastodon", "unknown"]

[[networks]]
key = "mastodon"
name = "Mastodon"
template = "https://mastodonshare.com/?url={url}&text={title}"
color = "#6364ff"

[aliases]
toot = "mastodon"
"##,
    )
    .unwrap();

    let config = ShareConfig::from_file(&path).expect("Should load config");
    let socialize = Socialize::with_config(config).expect("Should build");
    let mut context = socialize.context();
    context.set_url("https://example.com").set_title("Hi");

    let keys: Vec<String> = context.networks().iter().map(|k| k.to_string()).collect();
    assert_eq!(keys, vec!["email", "mastodon"]);

    let links = context.render_links(false).unwrap();
    assert_eq!(
        links[1].url,
        "https://mastodonshare.com/?url=https%3A%2F%2Fexample.com&text=Hi"
    );
    assert_eq!(socialize.registry().resolve("TOOT").unwrap(), "mastodon");
}

#[test]
fn test_missing_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let result = ShareConfig::from_file(&dir.path().join("missing.toml"));
    assert!(matches!(result, Err(ConfigError::IoError(_))));
}

#[test]
fn test_dangling_alias_in_config() {
    let config = ShareConfig::from_str(
        r#"
[aliases]
toot = "mastodon"
"#,
    )
    .unwrap();
    let result = Socialize::with_config(config);
    assert!(matches!(
        result,
        Err(ConfigError::Registry(RegistryError::DanglingAlias { .. }))
    ));
}

#[test]
fn test_context_from_content_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("content.toml");
    fs::write(
        &path,
        r#"
current = "hello"

[items.hello]
title = "Hello World"
url = "https://example.com/hello"
excerpt = "First post"

[items.about]
title = "About"
url = "https://example.com/about"
"#,
    )
    .unwrap();

    let source = InMemoryContent::from_file(&path).expect("Should load content");
    let socialize = Socialize::new();

    let mut current = socialize.current_context(&source).unwrap();
    assert_eq!(current.title(), Some("Hello World"));
    current.select_networks(["tumblr"]);
    let links = current.render_links(false).unwrap();
    assert!(links[0].url.contains("caption=First%20post"));

    let about = socialize.context_for(&source, "about").unwrap();
    assert_eq!(about.excerpt(), None);

    let missing = socialize.context_for(&source, "contact");
    assert!(matches!(
        missing,
        Err(ShareError::ContentLookup(ContentError::NotFound { .. }))
    ));
}

#[test]
fn test_custom_registry_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("networks.toml");
    fs::write(
        &path,
        r#"
[[networks]]
key = "hn"
name = "Hacker News"
template = "https://news.ycombinator.com/submitlink?u={url}&t={title}"
"#,
    )
    .unwrap();

    let registry = socialize::NetworkRegistry::from_file(&path).unwrap();
    let socialize = Socialize::with_registry(registry, ShareConfig::default()).unwrap();
    let mut context = socialize.context();
    context.set_url("https://example.com");

    let links = context.render_links(false).unwrap();
    assert_eq!(links.len(), 1);
    assert_eq!(links[0].name, "Hacker News");
}

#[test]
fn test_legacy_adapter_links() {
    let mut share = LegacyShare::with_networks(&["reddit", "whatsapp", "digg"]);
    share.set_url("https://example.com");
    share.set_title("Old API");

    let links = share.links().unwrap();
    assert_eq!(
        links,
        vec![
            (
                "reddit".to_string(),
                "https://reddit.com/submit?url=https%3A%2F%2Fexample.com&title=Old%20API".to_string()
            ),
            (
                "digg".to_string(),
                "https://digg.com/submit?url=https%3A%2F%2Fexample.com&title=Old%20API".to_string()
            ),
        ]
    );
}

#[test]
fn test_content_body_fills_missing_excerpt() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("content.toml");
    fs::write(
        &path,
        r#"
current = "post"

[items.post]
title = "Post"
url = "https://example.com/post"
content = "<p>Short <strong>body</strong> text</p>"
"#,
    )
    .unwrap();

    let source = InMemoryContent::from_file(&path).expect("Should load content");
    let socialize = Socialize::new();
    let mut context = socialize.current_context(&source).unwrap();
    assert_eq!(context.excerpt(), Some("Short body text"));

    context.select_networks(["tumblr"]);
    let links = context.render_links(false).unwrap();
    assert!(links[0].url.ends_with("caption=Short%20body%20text"));
}
