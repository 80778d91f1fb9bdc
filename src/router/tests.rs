use super::{Router, RouterConfig};
use crate::config::Config;
use crate::context::{Params, RequestContext};

fn config(yaml: &str) -> Config {
    Config::from_yaml(yaml).expect("test config")
}

fn base_config() -> Config {
    config(
        r#"
system:
  default_module: main
  default_controller: index
  default_action: index
  url_mode: path
  host: "http://h/"
"#,
    )
}

fn router(config: Config) -> Router {
    Router::new(RouterConfig::new(["m", "c", "a"], ["main", "blog", "shop"]), config)
}

#[test]
fn entry_script_prefix_is_stripped() {
    let r = router(base_config());
    let mut ctx = RequestContext::new();
    r.decode("index.php/blog/article/show", &mut ctx);
    assert_eq!(ctx.get("m"), Some("blog"));
    assert_eq!(ctx.get("c"), Some("article"));
    assert_eq!(ctx.get("a"), Some("show"));
}

#[test]
fn entry_script_only_falls_back_to_defaults() {
    let r = router(base_config());
    let mut ctx = RequestContext::new();
    r.decode("index.php", &mut ctx);
    assert_eq!(ctx.get("m"), Some("main"));
    assert_eq!(ctx.get("c"), Some("index"));
    assert_eq!(ctx.get("a"), Some("index"));
}

#[test]
fn unknown_first_segment_is_a_controller() {
    let r = router(base_config());
    let mut ctx = RequestContext::new();
    r.decode("article/show", &mut ctx);
    assert_eq!(ctx.get("m"), Some("main"));
    assert_eq!(ctx.get("c"), Some("article"));
    assert_eq!(ctx.get("a"), Some("show"));
}

#[test]
fn empty_module_list_never_consumes_a_module() {
    let config = base_config();
    let r = Router::new(RouterConfig::new(["m", "c", "a"], Vec::<String>::new()), config);
    let mut ctx = RequestContext::new();
    r.decode("blog/show", &mut ctx);
    assert_eq!(ctx.get("m"), Some("main"));
    assert_eq!(ctx.get("c"), Some("blog"));
    assert_eq!(ctx.get("a"), Some("show"));
}

#[test]
fn odd_trailing_segment_gets_empty_value() {
    let r = router(base_config());
    let mut ctx = RequestContext::new();
    r.decode("blog/article/show/id/42/draft", &mut ctx);
    assert_eq!(ctx.get("id"), Some("42"));
    assert_eq!(ctx.get("draft"), Some(""));
}

#[test]
fn doubled_and_leading_slashes_produce_no_segments() {
    let r = router(base_config());
    let mut ctx = RequestContext::new();
    r.decode("/blog//article///show/", &mut ctx);
    assert_eq!(ctx.get("m"), Some("blog"));
    assert_eq!(ctx.get("c"), Some("article"));
    assert_eq!(ctx.get("a"), Some("show"));
}

#[test]
fn path_mode_encode_omits_action_when_controller_empty() {
    let r = router(config(
        r#"
system:
  default_module: shop
  default_controller: ""
  default_action: buy
  url_mode: path
  host: "http://h/"
"#,
    ));
    let url = r.encode("", "", "", &Params::new());
    assert_eq!(url, "http://h/shop/");
}

#[test]
fn finish_template_substitutes_and_appends() {
    let params: Params = [("id", "42"), ("page", "2")].into();
    let out = super::mode::finish_template("/article-{id}", &params);
    assert_eq!(out, "/article-42?page=2");
}

#[test]
fn finish_template_trims_stray_question_marks() {
    let out = super::mode::finish_template("?/home?", &Params::new());
    assert_eq!(out, "/home");
}
