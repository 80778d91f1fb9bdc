use mcaroute::{Config, Params, Router, RouterConfig};

fn config(yaml: &str) -> Config {
    Config::from_yaml(yaml).expect("failed to parse test config")
}

fn identity() -> RouterConfig {
    RouterConfig::new(["m", "c", "a"], ["main", "blog"])
}

fn system(mode: &str) -> Config {
    config(&format!(
        r#"
system:
  default_module: main
  default_controller: index
  default_action: index
  url_mode: {mode}
  host: "http://h/"
"#
    ))
}

#[test]
fn path_mode_defaults_build_host_m_c_a() {
    let router = Router::new(identity(), system("path"));
    assert_eq!(
        router.encode("", "", "", &Params::new()),
        "http://h/main/index/index/"
    );
}

#[test]
fn path_mode_percent_encodes_param_values() {
    let router = Router::new(identity(), system("path"));
    let params: Params = [("q", "a b/c")].into();
    assert_eq!(
        router.encode("blog", "search", "go", &params),
        "http://h/blog/search/go/q/a%20b%2Fc/"
    );
}

#[test]
fn url_is_a_thin_alias_for_encode() {
    let router = Router::new(identity(), system("path"));
    let params: Params = [("id", "42")].into();
    assert_eq!(
        router.url("blog", "article", "show", &params),
        router.encode("blog", "article", "show", &params)
    );
    assert_eq!(
        router.url("", "", "", &Params::new()),
        "http://h/main/index/index/"
    );
}

#[test]
fn traditional_mode_builds_index_php_query() {
    let router = Router::new(identity(), system("traditional"));
    let params: Params = [("id", "42")].into();
    assert_eq!(
        router.encode("blog", "article", "show", &params),
        "http://h/index.php?m=blog&c=article&a=show&id=42"
    );
}

#[test]
fn traditional_mode_omits_empty_mca_parts() {
    let router = Router::new(
        identity(),
        config(
            r#"
system:
  default_module: ""
  default_controller: index
  default_action: ""
  url_mode: traditional
  host: "http://h/"
"#,
        ),
    );
    assert_eq!(
        router.encode("", "", "", &Params::new()),
        "http://h/index.php?c=index"
    );
}

#[test]
fn single_entry_mode_appends_query_to_host() {
    let router = Router::new(identity(), system("single_entry"));
    let params: Params = [("id", "42")].into();
    assert_eq!(
        router.encode("blog", "article", "show", &params),
        "http://h/?m=blog&c=article&a=show&id=42"
    );
}

#[test]
fn absent_param_values_are_never_rendered() {
    let router = Router::new(identity(), system("traditional"));
    let mut params = Params::new();
    params.insert("id", "42");
    params.insert_opt("draft", None);
    assert_eq!(
        router.encode("blog", "article", "show", &params),
        "http://h/index.php?m=blog&c=article&a=show&id=42"
    );
}

#[test]
fn declarative_rule_substitutes_placeholders() {
    let router = Router::new(
        identity(),
        config(
            r#"
system:
  default_module: main
  default_controller: index
  default_action: index
  url_mode: path
  host: "http://h/"
router:
  article:
    encode: ["blog", "article", "show", "/{c}-{id}"]
"#,
        ),
    );
    let params: Params = [("id", "42"), ("page", "2")].into();
    assert_eq!(
        router.encode("blog", "article", "show", &params),
        "/article-42?page=2"
    );
}

#[test]
fn declarative_rule_requires_exact_triple() {
    let router = Router::new(
        identity(),
        config(
            r#"
system:
  default_module: main
  default_controller: index
  default_action: index
  url_mode: path
  host: "http://h/"
router:
  article:
    encode: ["blog", "article", "show", "/article-{id}"]
"#,
        ),
    );
    // Different action: rule skipped, mode fallback applies.
    assert_eq!(
        router.encode("blog", "article", "edit", &Params::new()),
        "http://h/blog/article/edit/"
    );
}

#[test]
fn empty_inputs_resolve_to_defaults_before_rule_matching() {
    let router = Router::new(
        identity(),
        config(
            r#"
system:
  default_module: main
  default_controller: home
  default_action: welcome
  url_mode: path
  host: "http://h/"
router:
  home:
    encode: ["main", "home", "welcome", "/"]
"#,
        ),
    );
    assert_eq!(router.encode("", "", "", &Params::new()), "/");
}

#[test]
fn earlier_encode_rule_wins() {
    let router = Router::new(
        identity(),
        config(
            r#"
system:
  default_module: main
  default_controller: index
  default_action: index
  url_mode: path
  host: "http://h/"
router:
  first:
    encode: ["blog", "article", "show", "/first"]
  second:
    encode: ["blog", "article", "show", "/second"]
"#,
        ),
    );
    assert_eq!(
        router.encode("blog", "article", "show", &Params::new()),
        "/first"
    );
}

#[test]
fn callback_rule_wins_when_it_returns_a_result() {
    let mut router = Router::new(
        identity(),
        config(
            r#"
system:
  default_module: main
  default_controller: index
  default_action: index
  url_mode: path
  host: "http://h/"
router:
  pretty:
    encode: callback
  fallback:
    encode: ["blog", "article", "show", "/declarative"]
"#,
        ),
    );
    router.register_encode_hook("pretty", |_m, c, _a, params| {
        let id = params.get("id")?.to_string();
        let mut rest = Params::new();
        rest.insert("ref", "hook");
        Some((format!("/{c}/{id}"), rest))
    });

    let params: Params = [("id", "42")].into();
    assert_eq!(
        router.encode("blog", "article", "show", &params),
        "/article/42?ref=hook"
    );
}

#[test]
fn declined_callback_does_not_short_circuit() {
    let mut router = Router::new(
        identity(),
        config(
            r#"
system:
  default_module: main
  default_controller: index
  default_action: index
  url_mode: path
  host: "http://h/"
router:
  picky:
    encode: callback
  catchall:
    encode: ["blog", "article", "show", "/later-rule"]
"#,
        ),
    );
    router.register_encode_hook("picky", |_, _, _, _| None);

    assert_eq!(
        router.encode("blog", "article", "show", &Params::new()),
        "/later-rule"
    );
}

#[test]
fn unregistered_callback_rule_is_skipped() {
    let router = Router::new(
        identity(),
        config(
            r#"
system:
  default_module: main
  default_controller: index
  default_action: index
  url_mode: path
  host: "http://h/"
router:
  orphan:
    encode: callback
"#,
        ),
    );
    assert_eq!(
        router.encode("blog", "article", "show", &Params::new()),
        "http://h/blog/article/show/"
    );
}
